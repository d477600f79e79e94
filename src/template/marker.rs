//! Marker-pair detection on template lines.

/// Keyword that a marker pair can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Declarations,
    Namelist,
    Defaults,
    CommandLine,
}

impl Keyword {
    pub fn parse(word: &str) -> Option<Self> {
        match word {
            "declarations" => Some(Self::Declarations),
            "namelist" => Some(Self::Namelist),
            "defaults" => Some(Self::Defaults),
            "commandline" => Some(Self::CommandLine),
            _ => None,
        }
    }
}

/// A marker pair found on a template line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker<'a> {
    /// Column of the first delimiter, used as the indent of generated lines.
    pub indent: usize,
    /// Raw text between the first and last delimiter.
    pub keyword: &'a str,
}

impl Marker<'_> {
    pub fn keyword(&self) -> Option<Keyword> {
        Keyword::parse(self.keyword)
    }

    pub fn indent_str(&self) -> String {
        " ".repeat(self.indent)
    }
}

/// Locate the marker pair on `line`: the first and last occurrence of `token`.
///
/// Returns `None` when the token appears fewer than two times without overlap.
pub fn find_marker<'a>(line: &'a str, token: &str) -> Option<Marker<'a>> {
    if token.is_empty() {
        return None;
    }
    let start = line.find(token)?;
    let end = line.rfind(token)?;
    let body_start = start + token.len();
    if end < body_start {
        return None;
    }

    Some(Marker { indent: line[..start].chars().count(), keyword: &line[body_start..end] })
}
