//! write-probin: merge runtime parameter files into a probin.f90 template

use std::process::ExitCode;

fn main() -> ExitCode {
    write_probin::cli::run()
}
