//! Config file loading

use super::settings::GeneratorSettings;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Section name a config file may nest its settings under.
const SECTION: &str = "write-probin";

pub fn load_config(work_dir: &Path, config_path: Option<&Path>) -> Result<GeneratorSettings> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(work_dir),
    };

    let Some(config_file) = discovered else {
        return Ok(GeneratorSettings::default());
    };

    let parsed = fs::read_to_string(&config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))
        .and_then(|content| parse_config(&content, &config_file))
        .and_then(|settings| {
            settings
                .validate()
                .with_context(|| format!("Invalid config: {}", config_file.display()))?;
            Ok(settings)
        });

    match parsed {
        Ok(settings) => {
            tracing::debug!("Using config {}", config_file.display());
            Ok(settings)
        }
        Err(e) if !config_path_provided => {
            tracing::warn!(
                "Failed to load auto-discovered config {}: {:#}",
                config_file.display(),
                e
            );
            Ok(GeneratorSettings::default())
        }
        Err(e) => Err(e),
    }
}

fn parse_config(content: &str, config_file: &Path) -> Result<GeneratorSettings> {
    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
    match ext.as_str() {
        "toml" => parse_toml_config(content, config_file),
        "yaml" | "yml" => parse_yaml_config(content, config_file),
        other => anyhow::bail!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        ),
    }
}

/// Parse TOML config, supporting a nested [write-probin] section.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<GeneratorSettings> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    config_val.try_into().with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

/// Parse YAML config, supporting a nested write-probin section.
fn parse_yaml_config(content: &str, config_file: &Path) -> Result<GeneratorSettings> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    // An empty document deserializes as null
    if config_val.is_null() {
        return Ok(GeneratorSettings::default());
    }

    serde_yaml::from_value(config_val)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}

fn discover_config(work_dir: &Path) -> Option<std::path::PathBuf> {
    let candidates =
        ["write-probin.toml", ".write-probin.toml", "write-probin.yml", "write-probin.yaml"];

    for candidate in candidates {
        let path = work_dir.join(candidate);
        if path.exists() {
            return Some(path);
        }
    }

    None
}
