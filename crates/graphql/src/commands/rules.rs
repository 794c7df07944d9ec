use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_validation::Validator;

#[derive(Debug, clap::Args)]
pub(crate) struct RulesCmd {
    #[arg(
        help="List the rules that check directives in a schema instead of \
             the rules that check operations.",
        long,
    )]
    type_system: bool,
}

#[inherent::inherent]
impl RunnableCommand for RulesCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let validator =
            if self.type_system {
                Validator::type_system()
            } else {
                Validator::default()
            };

        let listing = validator.rule_names()
            .enumerate()
            .map(|(idx, name)| format!("{:>2}. {name}", idx + 1))
            .collect::<Vec<_>>()
            .join("\n");
        CommandResult::success(format_args!("{listing}"))
    }
}
