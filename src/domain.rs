//! Core data types shared by the loader and the expander

use std::fmt;
use std::path::PathBuf;

/// Type tag of a runtime parameter.
///
/// Parsing never fails: anything outside the four recognized tags is kept
/// verbatim in [`ParamKind::Other`] and reported when declarations are
/// generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamKind {
    Real,
    Character,
    Integer,
    Logical,
    Other(String),
}

impl ParamKind {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "real" => Self::Real,
            "character" => Self::Character,
            "integer" => Self::Integer,
            "logical" => Self::Logical,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Real => "real",
            Self::Character => "character",
            Self::Integer => "integer",
            Self::Logical => "logical",
            Self::Other(tag) => tag,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a parameter definition came from (1-based physical line).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub path: PathBuf,
    pub line: usize,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.path.display(), self.line)
    }
}

/// One named, typed, defaulted runtime parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterRecord {
    pub name: String,
    pub kind: ParamKind,
    /// Literal source token, carried through without interpretation.
    pub default: String,
    pub source: SourceLocation,
}
