//! Main entry point for the pfdc CLI.
//!
//! Validates the file extensions, translates the input file into the output
//! file and optionally runs the result with the configured interpreter.
//!
//! # Returns
//! - `Ok(ExitStatus::Failure)` if either path has the wrong extension
//! - `Ok(ExitStatus::Success)` once the output file is written
//! - `Err` if reading, writing or spawning the interpreter fails

use std::{env, fs, process::Command};

use anyhow::{Context, Result};

use super::{
    args::{Arguments, SOURCE_EXTENSION, TARGET_EXTENSION, has_extension},
    exit_status::ExitStatus,
    report,
};
use crate::{config::load_config, translate::Translator};

pub fn run(args: &Arguments) -> Result<ExitStatus> {
    if !has_extension(&args.input_file, SOURCE_EXTENSION) {
        eprintln!("Input file must have a {} extension", SOURCE_EXTENSION);
        return Ok(ExitStatus::Failure);
    }
    if !has_extension(&args.output_file, TARGET_EXTENSION) {
        eprintln!("Output file must have a {} extension", TARGET_EXTENSION);
        return Ok(ExitStatus::Failure);
    }

    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let loaded = load_config(&cwd)?;
    if args.verbose {
        report::print_config(loaded.path.as_deref());
    }
    let config = loaded.config;

    let source = fs::read_to_string(&args.input_file)
        .with_context(|| format!("Failed to read file: {}", args.input_file.display()))?;

    let translation = Translator::new()
        .with_indent_width(config.indent_width)
        .translate(&source);

    fs::write(&args.output_file, &translation.text)
        .with_context(|| format!("Failed to write file: {}", args.output_file.display()))?;

    if args.verbose {
        report::print_translation(&args.input_file, &args.output_file, &translation);
    }

    if args.compile_and_execute {
        let interpreter = args.interpreter.as_deref().unwrap_or(&config.interpreter);
        let status = Command::new(interpreter)
            .arg(&args.output_file)
            .status()
            .with_context(|| format!("Failed to run interpreter: {}", interpreter))?;
        if args.verbose {
            report::print_execution(interpreter, &status);
        }
    }

    Ok(ExitStatus::Success)
}
