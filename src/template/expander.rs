//! Template expansion
//!
//! Lines without a marker pair are copied unchanged. A marker line is always
//! consumed: recognized keywords are replaced by one generated block per
//! parameter, anything else expands to nothing.

use std::path::Path;

use super::fortran::render_block;
use super::marker::find_marker;
use crate::config::GeneratorSettings;
use crate::domain::ParameterRecord;
use crate::error::GenError;

/// Rendered output plus the records whose declaration was left out.
#[derive(Debug, Clone, Default)]
pub struct Expansion {
    pub text: String,
    /// Names of parameters with an unrecognized kind, once per declarations marker.
    pub skipped: Vec<String>,
}

pub fn expand(
    template: &str,
    params: &[ParameterRecord],
    settings: &GeneratorSettings,
) -> Expansion {
    let mut expansion = Expansion { text: String::with_capacity(template.len()), skipped: Vec::new() };

    for (idx, line) in template.split_inclusive('\n').enumerate() {
        let Some(marker) = find_marker(line, &settings.marker) else {
            expansion.text.push_str(line);
            continue;
        };

        match marker.keyword() {
            Some(keyword) => {
                tracing::debug!("Expanding '{}' at template line {}", marker.keyword, idx + 1);
                let skipped =
                    render_block(keyword, &marker.indent_str(), params, settings, &mut expansion.text);
                expansion.skipped.extend(skipped.into_iter().map(|p| p.name.clone()));
            }
            None => {
                tracing::debug!("Dropping unknown marker '{}' at template line {}", marker.keyword, idx + 1);
            }
        }
    }

    expansion
}

/// Read `template_path` and expand it.
pub fn expand_file(
    template_path: &Path,
    params: &[ParameterRecord],
    settings: &GeneratorSettings,
) -> Result<Expansion, GenError> {
    let template = GenError::read_input(template_path)?;
    Ok(expand(&template, params, settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ParamKind, SourceLocation};
    use similar_asserts::assert_eq;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn record(name: &str, kind: &str, default: &str) -> ParameterRecord {
        ParameterRecord {
            name: name.to_string(),
            kind: ParamKind::parse(kind),
            default: default.to_string(),
            source: SourceLocation { path: PathBuf::from("_params"), line: 1 },
        }
    }

    fn run(template: &str, params: &[ParameterRecord]) -> Expansion {
        expand(template, params, &GeneratorSettings::default())
    }

    #[test]
    fn test_defaults_marker_replaced() {
        let out = run("  @@defaults@@\n", &[record("dt", "real", "0.1")]);
        assert_eq!(out.text, "  dt = 0.1\n");
        assert!(out.skipped.is_empty());
    }

    #[test]
    fn test_plain_lines_pass_through() {
        let template = "module probin_module\n\n  implicit none\nend module";
        assert_eq!(run(template, &[record("dt", "real", "0.1")]).text, template);
    }

    #[test]
    fn test_unknown_keyword_consumes_line() {
        let out = run("a\n  @@acknowledgments@@\nb\n", &[record("dt", "real", "0.1")]);
        assert_eq!(out.text, "a\nb\n");
    }

    #[test]
    fn test_marker_without_trailing_newline() {
        let out = run("x\n@@namelist@@", &[record("dt", "real", "0.1")]);
        assert_eq!(out.text, "x\nnamelist /probin/ dt\n");
    }

    #[test]
    fn test_marker_with_no_params_expands_to_nothing() {
        assert_eq!(run("a\n@@declarations@@\nb\n", &[]).text, "a\nb\n");
    }

    #[test]
    fn test_full_template() {
        let template = "\
module probin_module
  use bl_types
  implicit none
  @@declarations@@
  @@namelist@@
contains
  subroutine probin_init()
    @@defaults@@
    select case (fname)
    @@commandline@@
    end select
  end subroutine
end module
";
        let params = vec![record("nsteps", "integer", "10"), record("job", "character", "'x'")];
        let out = run(template, &params);

        let expected = "\
module probin_module
  use bl_types
  implicit none
  integer, save :: nsteps
  character (len=256), save :: job
  namelist /probin/ nsteps
  namelist /probin/ job
contains
  subroutine probin_init()
    nsteps = 10
    job = 'x'
    select case (fname)
    case ('--nsteps')
       farg = farg + 1
       call get_command_argument(farg, value = fname)
       read(fname, *) nsteps

    case ('--job')
       farg = farg + 1
       call get_command_argument(farg, value = job)

    end select
  end subroutine
end module
";
        assert_eq!(out.text, expected);
    }

    #[test]
    fn test_skipped_kinds_reported_per_declarations_marker() {
        let params = vec![record("z", "complex", "(0,0)"), record("n", "integer", "1")];
        let out = run("@@declarations@@\n@@defaults@@\n", &params);
        assert_eq!(out.text, "integer, save :: n\nz = (0,0)\nn = 1\n");
        assert_eq!(out.skipped, vec!["z".to_string()]);
    }

    #[test]
    fn test_expand_file_missing_template() {
        let tmp = TempDir::new().expect("tmp");
        let err = expand_file(&tmp.path().join("probin.template"), &[], &GeneratorSettings::default())
            .expect_err("missing");
        assert!(matches!(err, GenError::MissingFile { .. }));
    }

    #[test]
    fn test_expand_file_reads_template() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("probin.template");
        fs::write(&path, "  @@defaults@@\n").expect("write");
        let out = expand_file(&path, &[record("dt", "real", "0.1")], &GeneratorSettings::default())
            .expect("expand");
        assert_eq!(out.text, "  dt = 0.1\n");
    }
}
