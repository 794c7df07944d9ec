use crate::Cli;
use crate::CommandResult;

/// A subcommand. Implementations are `#[inherent::inherent]` so `run` is
/// callable without the trait in scope.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}
