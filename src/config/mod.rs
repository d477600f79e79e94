//! Generator configuration
//!
//! Settings come from an explicit `--config` file or one discovered in the
//! working directory, falling back to defaults that produce the stock output.

pub mod loader;
pub mod settings;

pub use loader::load_config;
pub use settings::GeneratorSettings;
