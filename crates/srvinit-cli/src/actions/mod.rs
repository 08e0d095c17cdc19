//! Administrative actions and the context they run in.
//!
//! Every action gathers its parameters through [`ActionContext::ask`], validates them
//! before touching anything, and then edits files or runs commands.

use std::io::Write;

use srvinit_config::Settings;
use srvinit_host::{CommandRunner, Prompt};

use crate::error::{ActionError, ActionResult};

pub(crate) mod account;
pub(crate) mod firewall;
pub(crate) mod maintenance;
pub(crate) mod network;
pub(crate) mod packages;
pub(crate) mod ssh;
pub(crate) mod timezone;

/// Outcome of an action that ran without error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionReport {
    /// The action finished; the message describes the result.
    Completed(String),
    /// Input failed validation; nothing was changed.
    Rejected(String),
    /// The operator backed out.
    Cancelled,
}

impl ActionReport {
    pub(crate) fn completed(message: impl Into<String>) -> Self {
        Self::Completed(message.into())
    }

    pub(crate) fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }
}

/// Seams available to an action while it runs.
pub struct ActionContext<'a> {
    /// Source of operator answers.
    pub prompt: &'a mut dyn Prompt,
    /// Executes command lines.
    pub runner: &'a dyn CommandRunner,
    /// Paths and policies resolved at startup.
    pub settings: &'a Settings,
    /// Console for progress messages.
    pub out: &'a mut dyn Write,
}

impl ActionContext<'_> {
    /// Ask the operator for one line of input.
    ///
    /// # Errors
    ///
    /// Propagates terminal failures.
    pub fn ask(&mut self, prompt: &str) -> ActionResult<String> {
        Ok(self.prompt.read_line(prompt)?)
    }

    /// Print one line of progress.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Console`] if the console cannot be written.
    pub fn say(&mut self, line: &str) -> ActionResult<()> {
        writeln!(self.out, "{line}")
            .and_then(|()| self.out.flush())
            .map_err(ActionError::console)
    }

    /// Run a command line to completion.
    ///
    /// # Errors
    ///
    /// Propagates command failures.
    pub fn run(&self, command: &str) -> ActionResult<()> {
        Ok(self.runner.run(command)?)
    }

    /// Run a command line that converses with the operator on the terminal.
    ///
    /// # Errors
    ///
    /// Propagates command and terminal failures.
    pub fn run_interactive(&self, command: &str) -> ActionResult<()> {
        Ok(self.runner.run_interactive(command)?)
    }
}

/// Non-empty and ASCII digits only.
pub(crate) fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|byte| byte.is_ascii_digit())
}

#[cfg(test)]
pub(crate) mod testing {
    use srvinit_config::Settings;
    use srvinit_test_support::mocks::{RecordingRunner, ScriptedPrompt};

    use super::{ActionContext, ActionReport};
    use crate::error::ActionResult;

    /// Captured state after running one action against doubles.
    pub(crate) struct Run {
        pub(crate) result: ActionResult<ActionReport>,
        pub(crate) commands: Vec<String>,
        pub(crate) console: String,
        pub(crate) prompt: ScriptedPrompt,
    }

    pub(crate) fn run_with<F>(
        answers: &[&str],
        runner: &RecordingRunner,
        settings: &Settings,
        action: F,
    ) -> Run
    where
        F: FnOnce(&mut ActionContext<'_>) -> ActionResult<ActionReport>,
    {
        let mut prompt = ScriptedPrompt::new(answers.iter().copied());
        let mut console = Vec::new();
        let result = {
            let mut ctx = ActionContext {
                prompt: &mut prompt,
                runner,
                settings,
                out: &mut console,
            };
            action(&mut ctx)
        };
        Run {
            result,
            commands: runner.lines(),
            console: String::from_utf8_lossy(&console).into_owned(),
            prompt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_check_requires_ascii_digits() {
        assert!(is_numeric("22"));
        assert!(is_numeric("0022"));
        assert!(!is_numeric(""));
        assert!(!is_numeric("22a"));
        assert!(!is_numeric("-22"));
        assert!(!is_numeric(" 22"));
        assert!(!is_numeric("٢٢"));
    }
}
