use std::io::{self, Write};

use crossterm::style::Stylize;

/// Print a status line: bold green `::` marker followed by `text`.
pub fn line(text: &str) {
    // stdout going away is not worth failing the run over
    let _ = write_line(&mut io::stdout().lock(), text);
}

/// Print an error line to stderr in bold red.
pub fn error(text: &str) {
    let _ = write_error(&mut io::stderr().lock(), text);
}

pub fn write_line(out: &mut impl Write, text: &str) -> io::Result<()> {
    writeln!(out, "{}{}", ":: ".dark_green().bold(), text.white())
}

pub fn write_error(out: &mut impl Write, text: &str) -> io::Result<()> {
    writeln!(out, "{}{}", ":: ".red().bold(), text.dark_red().bold())
}
