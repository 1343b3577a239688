//! Where each round's survivors are recorded.
//!
//! [`AppendLog`] writes the plain-text round log: for every surviving shape,
//! one line of space-separated rows followed by a `Dim:` line.
//!
//! ```text
//! 2 0
//! Dim: 3
//! 1 1
//! Dim: 1
//! ```

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::ResultShape;

/// Receives the survivors of every round, in the order rounds are run.
pub trait RoundSink {
    /// Record the survivors of round `round`.
    ///
    /// # Errors
    ///
    /// Any I/O failure. The engine treats it as non-fatal and stops
    /// recording.
    fn record(&mut self, round: usize, survivors: &[ResultShape]) -> io::Result<()>;
}

impl<S: RoundSink + ?Sized> RoundSink for &mut S {
    fn record(&mut self, round: usize, survivors: &[ResultShape]) -> io::Result<()> {
        (**self).record(round, survivors)
    }
}

/// Records nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl RoundSink for Discard {
    #[inline]
    fn record(&mut self, _round: usize, _survivors: &[ResultShape]) -> io::Result<()> {
        Ok(())
    }
}

/// Append-only text log, reopened in append mode for every round.
#[derive(Debug, Clone)]
pub struct AppendLog {
    path: PathBuf,
}

impl AppendLog {
    /// Log to `path`, creating it on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the log.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RoundSink for AppendLog {
    fn record(&mut self, _round: usize, survivors: &[ResultShape]) -> io::Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut out = BufWriter::new(file);
        for survivor in survivors {
            let rows: Vec<String> = survivor.shape.rows().iter().map(u32::to_string).collect();
            writeln!(out, "{}", rows.join(" "))?;
            writeln!(out, "Dim: {:.0}", survivor.dimension)?;
        }
        out.flush()
    }
}
