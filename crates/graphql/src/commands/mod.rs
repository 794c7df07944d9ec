mod rules;
mod validate;

use crate::Cli;
use crate::CommandResult;
use rules::RulesCmd;
use validate::ValidateCmd;

#[derive(Debug, clap::Subcommand)]
pub(crate) enum CommandEnum {
    /// List the validation rules in the order they run.
    Rules(RulesCmd),

    /// Validate GraphQL operation files against a schema.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Rules(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}
