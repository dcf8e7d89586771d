//! Interactive station picker.
//!
//! The user types part of a station name; the first few stations whose name
//! contains that text (ignoring case) are offered as choices, in directory
//! order, alongside an explicit cancel option.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::domain::Station;

/// Most candidates offered in one choice prompt.
pub const MAX_CANDIDATES: usize = 5;

/// Label of the cancel option.
pub const CANCEL_LABEL: &str = "Cancel";

/// User interaction needed by the picker.
pub trait Prompter {
    /// Ask for free text.
    fn request_text(&mut self, title: &str) -> io::Result<String>;

    /// Ask the user to choose one of `options`.
    ///
    /// Returns the chosen index, or `None` if the user cancelled.
    fn request_choice(&mut self, title: &str, options: &[&str]) -> io::Result<Option<usize>>;
}

/// Outcome of picking a station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pick {
    Chosen(Station),
    Cancelled,
}

/// Stations whose name contains `query`, ignoring case.
///
/// Keeps directory order and returns at most [`MAX_CANDIDATES`].
pub fn candidates<'a>(query: &str, directory: &'a [Station]) -> Vec<&'a Station> {
    let needle = query.to_lowercase();
    directory
        .iter()
        .filter(|station| station.name.to_lowercase().contains(&needle))
        .take(MAX_CANDIDATES)
        .collect()
}

/// Ask the user for a station from `directory`.
pub fn pick<P: Prompter + ?Sized>(
    prompter: &mut P,
    title: &str,
    directory: &[Station],
) -> io::Result<Pick> {
    let query = prompter.request_text(title)?;
    let matches = candidates(&query, directory);
    debug!(%query, matches = matches.len(), "station candidates");

    let names: Vec<&str> = matches.iter().map(|s| s.name.as_str()).collect();

    match prompter.request_choice(title, &names)? {
        Some(index) => match matches.get(index) {
            Some(station) => Ok(Pick::Chosen((*station).clone())),
            None => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("choice {index} out of range for {} options", matches.len()),
            )),
        },
        None => Ok(Pick::Cancelled),
    }
}

/// Line-based prompter for a terminal.
///
/// Choices are shown as a numbered list with `0` for cancel. An empty line
/// or end of input also cancels.
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<io::StdinLock<'static>, io::Stderr> {
    /// Prompter reading stdin and writing prompts to stderr.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read one line without its line ending; `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        line.truncate(line.trim_end_matches(['\r', '\n']).len());
        Ok(Some(line))
    }

    /// Consume the prompter, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn request_text(&mut self, title: &str) -> io::Result<String> {
        write!(self.output, "{title}\n> ")?;
        self.output.flush()?;

        self.read_line()?
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no input"))
    }

    fn request_choice(&mut self, title: &str, options: &[&str]) -> io::Result<Option<usize>> {
        writeln!(self.output, "{title}")?;
        if options.is_empty() {
            writeln!(self.output, "  (no matching stations)")?;
        }
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "  {}) {option}", i + 1)?;
        }
        writeln!(self.output, "  0) {CANCEL_LABEL}")?;

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            let line = line.trim();
            if line.is_empty() {
                return Ok(None);
            }

            match line.parse::<usize>() {
                Ok(0) => return Ok(None),
                Ok(n) if n <= options.len() => return Ok(Some(n - 1)),
                _ => writeln!(
                    self.output,
                    "Enter a number between 0 and {}.",
                    options.len()
                )?,
            }
        }
    }
}
