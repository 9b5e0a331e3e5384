//! Library entry point for the `corec` pipeline: tokenize, parse,
//! pretty-print, execute (`SPEC_FULL.md` §2).
//!
//! Split out from `main.rs` so the end-to-end pipeline can be driven
//! in-process by tests without shelling out to the binary.

pub mod config;

use std::io::Write;
use std::path::Path;

use core_util::error::CoreError;

/// Read the program and data files from disk and run the pipeline.
pub fn run_files(
    program_path: &Path,
    data_path: &Path,
    print_prefix: bool,
    output: &mut impl Write,
) -> Result<(), CoreError> {
    let program_source = std::fs::read_to_string(program_path)?;
    let data_source = std::fs::read_to_string(data_path)?;
    let program_file = program_path.to_string_lossy().into_owned();
    let data_file = data_path.to_string_lossy().into_owned();
    run(
        &program_file,
        &program_source,
        &data_file,
        &data_source,
        print_prefix,
        output,
    )
}

/// Tokenize and parse `program_source`, optionally pretty-print it, then
/// execute it against `data_source`.
pub fn run(
    program_file: &str,
    program_source: &str,
    data_file: &str,
    data_source: &str,
    print_prefix: bool,
    output: &mut impl Write,
) -> Result<(), CoreError> {
    let (prog, mut symbols) = core_par::parse_program(program_file, program_source)?;

    if print_prefix {
        let printed = core_par::pretty_print(&prog, &symbols);
        write!(output, "{printed}")?;
    }

    core_eval::execute(program_file, &prog, &mut symbols, data_file, data_source, output)
}
