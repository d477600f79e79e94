//! Fortran statement rendering for each marker keyword.
//!
//! Every emitted line is prefixed with the marker's indent and ends in `\n`.

use std::fmt::Write as _;

use super::marker::Keyword;
use crate::config::GeneratorSettings;
use crate::domain::{ParamKind, ParameterRecord};

/// Continuation indent inside a `case` block.
const CASE_BODY: &str = "   ";

/// Append the block for `keyword` to `out`. Returns the records that were
/// skipped because their kind is not recognized (declarations only).
pub fn render_block<'p>(
    keyword: Keyword,
    indent: &str,
    params: &'p [ParameterRecord],
    settings: &GeneratorSettings,
    out: &mut String,
) -> Vec<&'p ParameterRecord> {
    let mut skipped = Vec::new();
    for param in params {
        match keyword {
            Keyword::Declarations => {
                if !declaration(indent, param, settings, out) {
                    skipped.push(param);
                }
            }
            Keyword::Namelist => {
                let _ = writeln!(out, "{indent}namelist /{}/ {}", settings.namelist_group, param.name);
            }
            Keyword::Defaults => {
                let _ = writeln!(out, "{indent}{} = {}", param.name, param.default);
            }
            Keyword::CommandLine => command_line_case(indent, param, settings, out),
        }
    }
    skipped
}

fn declaration(
    indent: &str,
    param: &ParameterRecord,
    settings: &GeneratorSettings,
    out: &mut String,
) -> bool {
    let type_spec = match &param.kind {
        ParamKind::Real => format!("real (kind={})", settings.real_kind),
        ParamKind::Character => format!("character (len={})", settings.character_len),
        ParamKind::Integer => "integer".to_string(),
        ParamKind::Logical => "logical".to_string(),
        ParamKind::Other(_) => return false,
    };
    let _ = writeln!(out, "{indent}{type_spec}, save :: {}", param.name);
    true
}

fn command_line_case(
    indent: &str,
    param: &ParameterRecord,
    settings: &GeneratorSettings,
    out: &mut String,
) {
    let counter = &settings.arg_counter;
    let _ = writeln!(out, "{indent}case ('--{}')", param.name);
    let _ = writeln!(out, "{indent}{CASE_BODY}{counter} = {counter} + 1");

    // Strings are fetched straight into the variable; anything else goes
    // through the scratch buffer and a list-directed read.
    if param.kind == ParamKind::Character {
        let _ = writeln!(out, "{indent}{CASE_BODY}call get_command_argument({counter}, value = {})", param.name);
    } else {
        let buffer = &settings.arg_buffer;
        let _ = writeln!(out, "{indent}{CASE_BODY}call get_command_argument({counter}, value = {buffer})");
        let _ = writeln!(out, "{indent}{CASE_BODY}read({buffer}, *) {}", param.name);
    }
    out.push('\n');
}
