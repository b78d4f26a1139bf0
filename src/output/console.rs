//! Console confirmation output

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Determine whether stdout should be colored, from environment and TTY.
pub fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
        return false;
    }
    io::stdout().is_terminal()
}

/// Print the single `Saved tree to <path>` line to stdout.
pub fn print_saved(path: &Path, use_color: bool) -> io::Result<()> {
    let choice = if use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    write_saved(&mut stdout, path)
}

/// Write the confirmation line; the path is green when `out` supports color.
pub fn write_saved<W: WriteColor>(out: &mut W, path: &Path) -> io::Result<()> {
    write!(out, "Saved tree to ")?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(out, "{}", path.display())?;
    out.reset()?;
    writeln!(out)
}
