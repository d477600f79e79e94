//! Template expansion into `probin.f90`

pub mod expander;
pub mod fortran;
pub mod marker;

pub use expander::{expand, expand_file, Expansion};

/// Fixed name of the generated file, written to the working directory.
pub const OUTPUT_FILE: &str = "probin.f90";
