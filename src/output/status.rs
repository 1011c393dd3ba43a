//! Progress lines printed around a snapshot run

use std::io::{self, IsTerminal, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Decide whether stdout should be colored.
pub fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
        return false;
    }
    io::stdout().is_terminal()
}

/// Writes start/finish lines to stdout.
pub struct StatusPrinter {
    stdout: StandardStream,
}

impl StatusPrinter {
    pub fn new(use_color: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(choice),
        }
    }

    pub fn started(&mut self) -> io::Result<()> {
        writeln!(self.stdout, "Building snapshot...")
    }

    pub fn finished(&mut self, output: &str, files: usize, inlined: usize) -> io::Result<()> {
        self.stdout
            .set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
        write!(self.stdout, "Done!")?;
        self.stdout.reset()?;
        writeln!(
            self.stdout,
            " {files} files listed, {inlined} inlined into {output}"
        )
    }

    /// Extra line when some bodies were replaced by placeholders.
    pub fn unreadable(&mut self, count: usize) -> io::Result<()> {
        self.stdout
            .set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        write!(self.stdout, "{count} file(s) could not be read as UTF-8")?;
        self.stdout.reset()?;
        writeln!(self.stdout)
    }
}
