use crate::parse::LogFields;

/// A log line layout.
///
/// Implementations must be all-or-nothing: either every field is extracted
/// (timestamp included) or the line is rejected with `None`.
pub trait LineGrammar {
    fn try_extract_fields<'a>(&self, line: &'a str) -> Option<LogFields<'a>>;
}
