//! pfdc - PythonForDummies to Python translator
//!
//! pfdc is a CLI tool and library that rewrites PFD pseudocode into Python,
//! one line at a time. Each line is classified by its leading keyword and
//! rewritten on its own; the only state carried between lines is the
//! current indent level.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, file I/O, reporting)
//! - `config`: Configuration file loading and parsing
//! - `translate`: Line translator and whole-text driver

pub mod cli;
pub mod config;
pub mod translate;

pub use translate::{IndentLevel, Translation, Translator, translate_all, translate_line};
