//! Parameter file loading
//!
//! Files are read in the order given. A later definition of a name removes the
//! earlier record and is appended at the end of the list, so an override also
//! moves the parameter to the back.

use std::path::{Path, PathBuf};

use super::lines::logical_lines;
use crate::domain::{ParamKind, ParameterRecord, SourceLocation};
use crate::error::GenError;

/// A redefinition that replaced an earlier record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Override {
    pub name: String,
    pub previous: SourceLocation,
    pub current: SourceLocation,
}

/// The deduplicated parameter list plus the overrides seen while building it.
#[derive(Debug, Default, Clone)]
pub struct ParameterSet {
    records: Vec<ParameterRecord>,
    overrides: Vec<Override>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[ParameterRecord] {
        &self.records
    }

    pub fn overrides(&self) -> &[Override] {
        &self.overrides
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ParameterRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Add a record, last-write-wins by name.
    pub fn insert(&mut self, record: ParameterRecord) {
        if let Some(idx) = self.records.iter().position(|r| r.name == record.name) {
            let old = self.records.remove(idx);
            tracing::debug!("{} overrides {} for '{}'", record.source, old.source, record.name);
            self.overrides.push(Override {
                name: record.name.clone(),
                previous: old.source,
                current: record.source.clone(),
            });
        }
        self.records.push(record);
    }
}

/// Parse one file's contents into `set`.
///
/// `path` is used only for source locations and diagnostics.
pub fn parse_parameters(path: &Path, content: &str, set: &mut ParameterSet) -> Result<(), GenError> {
    for line in logical_lines(content) {
        let fields = line.fields();
        let [name, kind, default] = fields.as_slice() else {
            return Err(GenError::MalformedLine {
                path: path.to_path_buf(),
                line_no: line.number,
                line: line.text.to_string(),
                found: fields.len(),
            });
        };

        set.insert(ParameterRecord {
            name: (*name).to_string(),
            kind: ParamKind::parse(kind),
            default: (*default).to_string(),
            source: SourceLocation { path: path.to_path_buf(), line: line.number },
        });
    }
    Ok(())
}

/// Load every parameter file in order. Stops at the first missing file or
/// malformed line.
pub fn load_parameter_files(files: &[PathBuf]) -> Result<ParameterSet, GenError> {
    let mut set = ParameterSet::new();
    for file in files {
        let content = GenError::read_input(file)?;
        let before = set.len();
        parse_parameters(file, &content, &mut set)?;
        tracing::debug!(
            "Loaded {} ({} parameters total, {} before)",
            file.display(),
            set.len(),
            before
        );
    }
    Ok(set)
}
