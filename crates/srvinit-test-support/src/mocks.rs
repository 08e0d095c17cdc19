//! In-memory doubles for the host seams.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::PathBuf;

use srvinit_host::{CommandRunner, HostError, HostResult, Prompt};

/// Command line captured by [`RecordingRunner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCommand {
    /// Command line as handed to the runner.
    pub line: String,
    /// Whether the command was run with terminal input attached.
    pub interactive: bool,
}

/// [`CommandRunner`] that records command lines instead of executing them.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    recorded: RefCell<Vec<RecordedCommand>>,
    failures: Vec<(String, Option<i32>)>,
}

impl RecordingRunner {
    /// Runner that accepts every command.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail any command whose line contains `needle` with `exit_code`.
    #[must_use]
    pub fn failing_on(mut self, needle: impl Into<String>, exit_code: Option<i32>) -> Self {
        self.failures.push((needle.into(), exit_code));
        self
    }

    /// Every command seen so far, in order.
    #[must_use]
    pub fn recorded(&self) -> Vec<RecordedCommand> {
        self.recorded.borrow().clone()
    }

    /// Command lines seen so far, in order.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.recorded
            .borrow()
            .iter()
            .map(|command| command.line.clone())
            .collect()
    }

    fn record(&self, command: &str, interactive: bool) -> HostResult<()> {
        self.recorded.borrow_mut().push(RecordedCommand {
            line: command.to_string(),
            interactive,
        });
        match self
            .failures
            .iter()
            .find(|(needle, _)| command.contains(needle.as_str()))
        {
            Some((_, exit_code)) => Err(HostError::CommandFailed {
                command: command.to_string(),
                exit_code: *exit_code,
            }),
            None => Ok(()),
        }
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &str) -> HostResult<()> {
        self.record(command, false)
    }

    fn run_interactive(&self, command: &str) -> HostResult<()> {
        self.record(command, true)
    }
}

/// [`Prompt`] that answers from a fixed script and then reports closed input.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    prompts: Vec<String>,
    unavailable: bool,
}

impl ScriptedPrompt {
    /// Prompt that returns `answers` in order.
    #[must_use]
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            unavailable: false,
        }
    }

    /// Prompt that behaves as if no terminal were attached.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Prompts shown so far, in order.
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Answers not consumed yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompt for ScriptedPrompt {
    fn read_line(&mut self, prompt: &str) -> HostResult<String> {
        self.prompts.push(prompt.to_string());
        if self.unavailable {
            return Err(HostError::InteractionUnavailable {
                device: PathBuf::from("/dev/tty"),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            });
        }
        self.answers
            .pop_front()
            .map(|answer| answer.trim().to_string())
            .ok_or_else(|| HostError::InputClosed {
                device: PathBuf::from("/dev/tty"),
            })
    }
}
