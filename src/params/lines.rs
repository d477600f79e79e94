//! Logical-line scanning for parameter files.

/// Character that starts a comment running to end of line.
pub const COMMENT_CHAR: char = '#';

/// A comment-stripped, non-blank line together with its 1-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicalLine<'a> {
    pub number: usize,
    pub text: &'a str,
}

impl<'a> LogicalLine<'a> {
    pub fn fields(&self) -> Vec<&'a str> {
        self.text.split_whitespace().collect()
    }
}

/// Lazily yield the logical lines of `content`.
///
/// Blank lines and comment-only lines (indented or not) produce nothing.
pub fn logical_lines(content: &str) -> impl Iterator<Item = LogicalLine<'_>> {
    content.lines().enumerate().filter_map(|(idx, raw)| {
        let code = match raw.find(COMMENT_CHAR) {
            Some(pos) => &raw[..pos],
            None => raw,
        };
        let text = code.trim();
        if text.is_empty() {
            None
        } else {
            Some(LogicalLine { number: idx + 1, text })
        }
    })
}
