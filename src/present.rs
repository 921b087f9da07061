use crate::entry::{DirectoryEntry, NamePair};
use crate::error::SleuthError;
use serde::Serialize;
use std::io::Write;

pub const SEPARATOR_WIDTH: usize = 40;
const FAILURE_MARK: &str = "❌";
const NOT_FOUND_MARK: &str = "⚠️";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct PairReport<'a> {
    first_name: &'a str,
    last_name: &'a str,
    entries: &'a [DirectoryEntry],
}

pub struct Presenter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> Presenter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Presenter { out, format }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn separator(&mut self) -> std::io::Result<()> {
        writeln!(self.out, "{}", "-".repeat(SEPARATOR_WIDTH))
    }

    pub fn entry(&mut self, entry: &DirectoryEntry) -> std::io::Result<()> {
        writeln!(self.out, "Name: {}", entry.common_name)?;
        writeln!(self.out, "Email: {}", entry.email)?;
        writeln!(self.out, "First Name: {}", entry.given_name)?;
        writeln!(self.out, "Last Name: {}", entry.surname)?;
        self.separator()
    }

    pub fn not_found(&mut self, pair: &NamePair) -> std::io::Result<()> {
        writeln!(
            self.out,
            "{} No entry found for {} {}",
            NOT_FOUND_MARK, pair.first_name, pair.last_name
        )?;
        self.separator()
    }

    /// Report everything found for one pair.
    pub fn result(&mut self, pair: &NamePair, entries: &[DirectoryEntry]) -> std::io::Result<()> {
        match self.format {
            OutputFormat::Json => {
                let report = PairReport {
                    first_name: &pair.first_name,
                    last_name: &pair.last_name,
                    entries,
                };
                serde_json::to_writer(&mut self.out, &report)?;
                writeln!(self.out)
            }
            OutputFormat::Text if entries.is_empty() => self.not_found(pair),
            OutputFormat::Text => entries.iter().try_for_each(|e| self.entry(e)),
        }
    }

    pub fn failure(&mut self, err: &SleuthError) -> std::io::Result<()> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, err)?;
                writeln!(self.out)
            }
            OutputFormat::Text => writeln!(self.out, "{} {}", FAILURE_MARK, err),
        }
    }
}
