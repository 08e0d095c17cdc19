//! Line input read from the controlling terminal rather than standard input.
//!
//! # Design
//! - Standard input may be the pipe the tool was delivered through (`curl ... | sh`),
//!   so answers always come from the terminal device.
//! - The device is opened lazily on the first prompt and kept open afterwards.
//! - There is no fallback to standard input when the device cannot be opened.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Stdout, Write};
use std::path::{Path, PathBuf};

use crate::error::{HostError, HostResult};

/// Source of interactive answers.
pub trait Prompt {
    /// Show `prompt` and return the next line of input with surrounding whitespace removed.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::InteractionUnavailable`] when no terminal is attached and
    /// [`HostError::InputClosed`] when input has ended.
    fn read_line(&mut self, prompt: &str) -> HostResult<String>;
}

/// [`Prompt`] backed by a terminal device such as `/dev/tty`.
pub struct TtyPrompt<W = Stdout> {
    device: PathBuf,
    output: W,
    reader: Option<BufReader<File>>,
}

impl TtyPrompt<Stdout> {
    /// Prompt on standard output and read answers from `device`.
    #[must_use]
    pub fn new(device: impl Into<PathBuf>) -> Self {
        Self::with_output(device, io::stdout())
    }
}

impl<W: Write> TtyPrompt<W> {
    /// Prompt on `output` and read answers from `device`.
    #[must_use]
    pub fn with_output(device: impl Into<PathBuf>, output: W) -> Self {
        Self {
            device: device.into(),
            output,
            reader: None,
        }
    }

    /// Terminal device answers are read from.
    #[must_use]
    pub fn device(&self) -> &Path {
        &self.device
    }

    /// Consume the prompt and return its output sink.
    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }

    fn reader(&mut self) -> HostResult<&mut BufReader<File>> {
        if self.reader.is_none() {
            let file =
                File::open(&self.device).map_err(|source| HostError::InteractionUnavailable {
                    device: self.device.clone(),
                    source,
                })?;
            self.reader = Some(BufReader::new(file));
        }
        self.reader.as_mut().ok_or_else(|| HostError::InputClosed {
            device: self.device.clone(),
        })
    }

    fn terminal_io(&self, source: io::Error) -> HostError {
        HostError::TerminalIo {
            device: self.device.clone(),
            source,
        }
    }
}

impl<W: Write> Prompt for TtyPrompt<W> {
    fn read_line(&mut self, prompt: &str) -> HostResult<String> {
        self.output
            .write_all(prompt.as_bytes())
            .and_then(|()| self.output.flush())
            .map_err(|err| self.terminal_io(err))?;

        let mut line = String::new();
        let read = self.reader()?.read_line(&mut line);
        let read = read.map_err(|err| self.terminal_io(err))?;
        if read == 0 {
            return Err(HostError::InputClosed {
                device: self.device.clone(),
            });
        }
        Ok(line.trim().to_string())
    }
}
