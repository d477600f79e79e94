//! write-probin: generate `probin.f90` from runtime parameter definitions
//!
//! Parameter files declare `name kind default` per line. A Fortran template
//! carries `@@keyword@@` markers that are replaced by declarations, namelist
//! entries, default assignments, and command-line parsing for every parameter.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod params;
pub mod template;
