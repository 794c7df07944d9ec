use crate::ast;
use crate::file_reader;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentBuildError {
    #[error("Failed to parse executable document: {0}")]
    ExecutableParseError(#[from] ast::operation::ParseError),

    #[error("Integer literal at {line}:{col} does not fit in 64 bits")]
    IntegerOutOfRange {
        line: usize,
        col: usize,
    },

    #[error("Failed to read document source: {0}")]
    ReadError(#[from] file_reader::ReadContentError),

    #[error("Failed to parse type-system document: {0}")]
    TypeSystemParseError(#[from] ast::schema::ParseError),

    #[error(
        "Type extension of `{type_name}` at {line}:{col} is not supported; \
        merge the extension into its type definition"
    )]
    UnsupportedTypeExtension {
        type_name: String,
        line: usize,
        col: usize,
    },
}
