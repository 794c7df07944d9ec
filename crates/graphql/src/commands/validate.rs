use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_validation::Document;
use libgraphql_validation::Lookup;
use libgraphql_validation::Validator;
use libgraphql_validation::Walker;
use libgraphql_validation::middleware::BaseSchemaMiddleware;
use libgraphql_validation::middleware::Middleware;
use libgraphql_validation::snapshot;
use libgraphql_validation::validation::RuleViolation;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        help="Report every failing rule for each file instead of stopping at \
             the first one.",
        long,
    )]
    all_errors: bool,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for \
             operation files within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more schema (SDL) files or directories \
             containing schema files.",
        long,
        required=true,
        value_delimiter = ',',
    )]
    schema: Vec<PathBuf>,

    #[arg(
        default_values_t=[
            "graphqls".to_string(),
            "graphql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for schema \
             files within a directory.",
        long,
        value_delimiter = ',',
    )]
    schema_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL operation files or directories \
             containing them.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

/// Outcome of validating one operation file.
#[derive(Debug)]
struct FileReport {
    path: PathBuf,
    failures: Vec<String>,
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let schema_paths = match discover_files(&self.schema, &self.schema_file_exts) {
            Ok(paths) => paths,
            Err(err) => return CommandResult::failure(format_args!(
                "{} Failed to find schema files: {err:#}",
                output_utils::RED_X,
            )),
        };
        let query_paths = match discover_files(&self.file_or_dir_paths, &self.graphql_file_exts) {
            Ok(paths) => paths,
            Err(err) => return CommandResult::failure(format_args!(
                "{} Failed to find operation files: {err:#}",
                output_utils::RED_X,
            )),
        };
        log::debug!(
            "Found {} schema files and {} operation files.",
            schema_paths.len(),
            query_paths.len(),
        );

        let schema_snapshot = match build_schema_snapshot(&schema_paths) {
            Ok(bytes) => Arc::new(bytes),
            Err(err) => return CommandResult::failure(format_args!(
                "{} Failed to load the schema: {err:#}",
                output_utils::RED_X,
            )),
        };

        let tasks: Vec<_> = query_paths.into_iter()
            .map(|path| {
                let schema_snapshot = Arc::clone(&schema_snapshot);
                let all_errors = self.all_errors;
                tokio::task::spawn_blocking(move || {
                    let failures = match validate_file(&schema_snapshot, &path, all_errors) {
                        Ok(violations) => violations,
                        Err(err) => vec![format!("{err:#}")],
                    };
                    FileReport { path, failures }
                })
            })
            .collect();

        let mut lines = vec![];
        let mut num_invalid = 0;
        let num_files = tasks.len();
        for task in tasks {
            let report = match task.await {
                Ok(report) => report,
                Err(err) => {
                    num_invalid += 1;
                    lines.push(format!("{} Validation task failed: {err}", output_utils::RED_X));
                    continue;
                },
            };
            let passed = report.failures.is_empty();
            if !passed {
                num_invalid += 1;
            }
            lines.push(format!(
                "{} {}",
                output_utils::status_mark(passed),
                report.path.display(),
            ));
            lines.extend(report.failures.iter().map(|failure| format!("    {failure}")));
        }

        lines.push(format!(
            "{} {} of {num_files} operation files are valid.",
            output_utils::status_mark(num_invalid == 0),
            num_files - num_invalid,
        ));
        CommandResult::report(num_invalid == 0, lines.join("\n"))
    }
}

/// Recursively collects the files at or under `paths` whose extension is
/// one of `exts`, sorted.
///
/// A path given directly is kept whatever its extension.
fn discover_files(paths: &[PathBuf], exts: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    let exts: HashSet<&str> = exts.iter()
        .map(|ext| ext.trim_start_matches('.'))
        .collect();

    let mut files = vec![];
    for root in paths {
        if root.is_file() {
            files.push(std::fs::canonicalize(root)?);
            continue;
        }
        for entry in WalkDir::new(root).follow_links(true) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {:?}.", entry.path());
                continue;
            }
            let matches_ext = entry.path().extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| exts.contains(ext));
            if matches_ext {
                log::trace!("Found file at {:?}.", entry.path());
                files.push(std::fs::canonicalize(entry.path())?);
            }
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

/// Parses every schema file into one document, completes it with the
/// built-in definitions, checks its directives and returns its snapshot.
fn build_schema_snapshot(paths: &[PathBuf]) -> anyhow::Result<Vec<u8>> {
    let mut doc = Document::new();
    for path in paths {
        doc.parse_type_system_file(path)?;
    }
    BaseSchemaMiddleware.prepare_schema(&mut doc)?;

    let lookup = Lookup::new(&doc);
    let mut walker = Walker::new();
    walker.walk_type_system_definition(&lookup);
    if let Some(violation) = Validator::type_system().validate(&lookup, &walker).violation() {
        anyhow::bail!("{}", describe(violation));
    }

    Ok(snapshot::encode(&doc)?)
}

/// Validates the operations in `path` against a fresh copy of the schema.
/// Returns one line per failure.
fn validate_file(
    schema_snapshot: &[u8],
    path: &Path,
    all_errors: bool,
) -> anyhow::Result<Vec<String>> {
    let mut doc = snapshot::decode(schema_snapshot)?;
    doc.parse_executable_file(path)?;

    let lookup = Lookup::new(&doc);
    let mut walker = Walker::new();
    walker.walk_executable(&lookup);

    let validator = Validator::default();
    let violations =
        if all_errors {
            validator.validate_all(&lookup, &walker)
        } else {
            validator.validate(&lookup, &walker).into_result().err().into_iter().collect()
        };
    Ok(violations.iter().map(describe).collect())
}

fn describe(violation: &RuleViolation) -> String {
    format!("{}: {violation}", violation.meta.subject_position)
}
