use clap::CommandFactory;
use crate::commands;

#[derive(clap::Parser, Debug)]
#[command(
    about = "Validates GraphQL operations against a schema.",
    name = "graphql",
    version,
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        help="Enable verbose (debug-level) logging. Overrides LOG_LEVEL.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    /// Runs when no subcommand is given.
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
