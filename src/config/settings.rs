//! Generator settings

use serde::Deserialize;

/// Names baked into the generated Fortran.
///
/// The defaults reproduce the stock `probin.f90` layout; a config file only
/// needs to list the fields it changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorSettings {
    /// Namelist group every parameter is registered into.
    pub namelist_group: String,
    /// Kind parameter used for `real` declarations.
    pub real_kind: String,
    /// Length of `character` declarations.
    pub character_len: u32,
    /// Integer variable holding the current command-line argument index.
    pub arg_counter: String,
    /// Scratch string that non-character arguments are read through.
    pub arg_buffer: String,
    /// Two-sided delimiter around template keywords.
    pub marker: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            namelist_group: "probin".to_string(),
            real_kind: "dp_t".to_string(),
            character_len: 256,
            arg_counter: "farg".to_string(),
            arg_buffer: "fname".to_string(),
            marker: "@@".to_string(),
        }
    }
}

impl GeneratorSettings {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.marker.is_empty() {
            anyhow::bail!("marker must not be empty");
        }
        for (field, value) in [
            ("namelist_group", &self.namelist_group),
            ("real_kind", &self.real_kind),
            ("arg_counter", &self.arg_counter),
            ("arg_buffer", &self.arg_buffer),
        ] {
            if value.trim().is_empty() {
                anyhow::bail!("{} must not be empty", field);
            }
        }
        Ok(())
    }
}
