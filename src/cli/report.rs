//! Terminal reporting for translation results.
//!
//! Everything here goes to stderr so that stdout belongs to the program run
//! by `--compile-and-execute`.

use std::{
    io::{self, Write},
    path::Path,
    process,
};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::config::CONFIG_FILE_NAME;
use crate::translate::{Diagnostic, Translation};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the verbose translation report to stderr.
pub fn print_translation(input: &Path, output: &Path, translation: &Translation) {
    print_translation_to(input, output, translation, &mut io::stderr().lock());
}

/// Print the verbose translation report to a custom writer.
///
/// Lists every line that degraded to an error comment, notes unbalanced
/// nesting and ends with a one-line summary.
pub fn print_translation_to<W: Write>(
    input: &Path,
    output: &Path,
    translation: &Translation,
    writer: &mut W,
) {
    let error_count = translation.diagnostics.len();

    let max_line_width = translation
        .diagnostics
        .iter()
        .map(|d| d.line_number.to_string().len())
        .max()
        .unwrap_or(1);

    for diagnostic in &translation.diagnostics {
        print_diagnostic(input, diagnostic, writer, max_line_width);
    }

    if !translation.is_balanced() {
        let _ = writeln!(
            writer,
            "{} {} block(s) left {} at end of file (final indent level {})",
            "note:".bold(),
            translation.final_indent.0.unsigned_abs(),
            if translation.final_indent.0 > 0 {
                "open"
            } else {
                "over-closed"
            },
            translation.final_indent
        );
    }

    let summary = format!(
        "Translated {} {} from {} to {}",
        translation.line_count,
        if translation.line_count == 1 {
            "line"
        } else {
            "lines"
        },
        input.display(),
        output.display()
    );
    let msg = if error_count == 0 {
        format!("{} {}", SUCCESS_MARK.green(), summary.green())
    } else {
        format!(
            "{} {} ({} with errors)",
            FAILURE_MARK.yellow(),
            summary.yellow(),
            error_count
        )
    };
    let _ = writeln!(writer, "{}", msg);
}

/// Print which configuration file is in effect.
pub fn print_config(path: Option<&Path>) {
    let mut writer = io::stderr().lock();
    let _ = match path {
        Some(path) => writeln!(writer, "{} {}", "config:".dimmed(), path.display()),
        None => writeln!(
            writer,
            "{} no {} found, using defaults",
            "config:".dimmed(),
            CONFIG_FILE_NAME
        ),
    };
}

/// Print how the interpreter run ended.
pub fn print_execution(interpreter: &str, status: &process::ExitStatus) {
    let _ = writeln!(
        io::stderr().lock(),
        "{} {} exited with {}",
        "run:".dimmed(),
        interpreter,
        status
    );
}

fn print_diagnostic<W: Write>(
    path: &Path,
    diagnostic: &Diagnostic,
    writer: &mut W,
    max_line_width: usize,
) {
    let source_line = diagnostic.source.trim_end();
    let indentation = &source_line[..source_line.len() - source_line.trim_start().len()];
    let keyword = source_line.split_whitespace().next().unwrap_or_default();
    let col = indentation.chars().count() + 1;

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        "warning".bold().yellow(),
        diagnostic.error,
        "malformed-line".dimmed().cyan()
    );
    let _ = writeln!(
        writer,
        "  {} {}:{}:{}",
        "-->".blue(),
        path.display(),
        diagnostic.line_number,
        col
    );
    let _ = writeln!(
        writer,
        "{:>width$} {}",
        "",
        "|".blue(),
        width = max_line_width
    );
    let _ = writeln!(
        writer,
        "{:>width$} {} {}",
        diagnostic.line_number.to_string().blue(),
        "|".blue(),
        source_line,
        width = max_line_width
    );
    let _ = writeln!(
        writer,
        "{:>width$} {} {:>padding$}{}",
        "",
        "|".blue(),
        "",
        "^".repeat(UnicodeWidthStr::width(keyword).max(1)).yellow(),
        width = max_line_width,
        padding = UnicodeWidthStr::width(indentation)
    );
    let _ = writeln!(writer);
}
