//! CLI argument definitions using clap.
//!
//! pfdc takes one `.pfd` input and one `.py` output. Translation always
//! happens; `-e` additionally runs the generated file.

use std::path::{Path, PathBuf};

use clap::Parser;

pub const SOURCE_EXTENSION: &str = ".pfd";
pub const TARGET_EXTENSION: &str = ".py";

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Translate PythonForDummies (.pfd) files to Python (.py) and optionally execute them.",
    long_about = None
)]
pub struct Arguments {
    /// Compile the .pfd file into a .py file (the default)
    #[arg(short, long)]
    pub compile: bool,

    /// Compile the .pfd file into a .py file and execute it
    #[arg(short = 'e', long)]
    pub compile_and_execute: bool,

    /// Interpreter used with --compile-and-execute (overrides config file)
    #[arg(long, value_name = "PROG")]
    pub interpreter: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Input file name with .pfd extension
    pub input_file: PathBuf,

    /// Output file name with .py extension
    pub output_file: PathBuf,
}

/// Case-sensitive suffix match on the path exactly as given.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.as_os_str().to_string_lossy().ends_with(extension)
}
