//! Parameter definition files (`name kind default` per line)

pub mod lines;
pub mod loader;

pub use loader::{load_parameter_files, parse_parameters, Override, ParameterSet};
