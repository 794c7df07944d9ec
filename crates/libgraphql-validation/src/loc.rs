/// A line/column pair in the source text a [`Document`](crate::Document)
/// entity was lowered from.
///
/// Very similar to graphql_parser's [Pos](graphql_parser::Pos), but
/// serializable so it survives a schema snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct Position {
    pub col: usize,
    pub line: usize,
}
impl Position {
    pub(crate) fn from_pos(pos: graphql_parser::Pos) -> Self {
        Self {
            col: pos.column,
            line: pos.line,
        }
    }
}
impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}
