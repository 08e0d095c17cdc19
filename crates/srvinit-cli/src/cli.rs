//! Process entry and the interactive menu loop.
//!
//! # Design
//! - The loop moves `AwaitingRoot -> Running -> Exited`; only the exit key or an
//!   unusable terminal leaves `Running`.
//! - Action failures are rendered and the menu is shown again.
//! - Host seams are passed in so the loop can be driven entirely from tests.

use std::io::{self, Write};

use tracing::{debug, info, warn};

use srvinit_config::{Settings, load_from_env};
use srvinit_host::{
    CommandRunner, HostError, Prompt, ShellRunner, TtyPrompt, effective_uid, require_superuser,
};
use srvinit_telemetry::{LoggingConfig, SessionGuard, init_logging};

use crate::actions::{ActionContext, ActionReport};
use crate::output::{error_chain, render_menu, write_line};
use crate::registry::{DispatchOutcome, Registry};

/// Selection that leaves the menu.
pub const EXIT_KEY: &str = "0";

/// Position of the menu loop in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Privileges have not been checked yet.
    AwaitingRoot,
    /// The menu is being shown and selections dispatched.
    Running,
    /// The loop has finished.
    Exited,
}

/// Why the menu loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// The operator chose the exit key.
    Exited,
    /// The process is not running as the superuser.
    PrivilegeDenied,
    /// The terminal could not be read or was closed.
    InputUnavailable,
    /// The console could not be written.
    OutputUnavailable,
}

impl LoopExit {
    /// Process exit status for this outcome.
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Exited => 0,
            Self::PrivilegeDenied | Self::InputUnavailable | Self::OutputUnavailable => 1,
        }
    }
}

/// Interactive menu bound to a registry and host seams.
pub struct MenuLoop<'a> {
    registry: &'a Registry,
    settings: &'a Settings,
    prompt: &'a mut dyn Prompt,
    runner: &'a dyn CommandRunner,
    out: &'a mut dyn Write,
    state: LoopState,
}

impl<'a> MenuLoop<'a> {
    /// Assemble a loop in the [`LoopState::AwaitingRoot`] state.
    pub const fn new(
        registry: &'a Registry,
        settings: &'a Settings,
        prompt: &'a mut dyn Prompt,
        runner: &'a dyn CommandRunner,
        out: &'a mut dyn Write,
    ) -> Self {
        Self {
            registry,
            settings,
            prompt,
            runner,
            out,
            state: LoopState::AwaitingRoot,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> LoopState {
        self.state
    }

    /// Check privileges for `euid`, then show the menu until the operator exits.
    pub fn run(&mut self, euid: u32) -> LoopExit {
        let exit = self.drive(euid);
        self.state = LoopState::Exited;
        info!(?exit, "menu loop finished");
        exit
    }

    fn drive(&mut self, euid: u32) -> LoopExit {
        if let Err(err) = require_superuser(euid) {
            warn!(error = %err, "refusing to start");
            return self
                .print("please run as root: sudo srvinit")
                .map_or(LoopExit::OutputUnavailable, |()| LoopExit::PrivilegeDenied);
        }
        self.state = LoopState::Running;

        loop {
            if render_menu(self.out, self.registry).is_err() {
                return LoopExit::OutputUnavailable;
            }

            let choice = match self.prompt.read_line("select an option: ") {
                Ok(choice) => choice,
                Err(err) => return self.input_lost(&err),
            };
            if choice == EXIT_KEY {
                return self
                    .print("bye")
                    .map_or(LoopExit::OutputUnavailable, |()| LoopExit::Exited);
            }

            debug!(choice = %choice, "dispatching selection");
            let outcome = {
                let mut ctx = ActionContext {
                    prompt: &mut *self.prompt,
                    runner: self.runner,
                    settings: self.settings,
                    out: &mut *self.out,
                };
                self.registry.dispatch(&choice, &mut ctx)
            };
            if self.report(outcome).is_err() {
                return LoopExit::OutputUnavailable;
            }
        }
    }

    fn report(&mut self, outcome: DispatchOutcome) -> io::Result<()> {
        match outcome {
            DispatchOutcome::NotFound => self.print("invalid selection"),
            DispatchOutcome::Done(ActionReport::Completed(message)) => {
                self.print(&message)?;
                self.print("done")
            }
            DispatchOutcome::Done(ActionReport::Rejected(message)) => self.print(&message),
            DispatchOutcome::Done(ActionReport::Cancelled) => self.print("cancelled"),
            DispatchOutcome::ActionFailed(err) => {
                self.print(&format!("action failed: {}", error_chain(&err)))
            }
        }
    }

    fn input_lost(&mut self, err: &HostError) -> LoopExit {
        warn!(error = %err, "operator input unavailable");
        let _ = self.print(&error_chain(err));
        LoopExit::InputUnavailable
    }

    fn print(&mut self, line: &str) -> io::Result<()> {
        write_line(self.out, line)
    }
}

/// Initialise logging, load settings, and run the menu against the real host.
///
/// Returns the process exit status.
#[must_use]
pub fn run() -> i32 {
    if let Err(err) = init_logging(&LoggingConfig::default()) {
        eprintln!("warning: logging disabled: {err}");
    }

    let euid = effective_uid();
    let _session = SessionGuard::new(euid);

    let settings = match load_from_env() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("configuration error: {}", error_chain(&err));
            return 1;
        }
    };
    debug!(?settings, "settings loaded");

    let registry = Registry::standard();
    let runner = ShellRunner::new(&settings.shell, &settings.tty_device);
    let mut prompt = TtyPrompt::new(&settings.tty_device);
    let mut stdout = io::stdout();

    let mut menu = MenuLoop::new(&registry, &settings, &mut prompt, &runner, &mut stdout);
    menu.run(euid).exit_code()
}

#[cfg(test)]
mod tests {
    use super::*;
    use srvinit_test_support::mocks::{RecordingRunner, ScriptedPrompt};

    #[test]
    fn exit_codes() {
        assert_eq!(LoopExit::Exited.exit_code(), 0);
        assert_eq!(LoopExit::PrivilegeDenied.exit_code(), 1);
        assert_eq!(LoopExit::InputUnavailable.exit_code(), 1);
        assert_eq!(LoopExit::OutputUnavailable.exit_code(), 1);
    }

    #[test]
    fn state_moves_through_lifecycle() {
        let registry = Registry::standard();
        let settings = Settings::default();
        let mut prompt = ScriptedPrompt::new(["0"]);
        let runner = RecordingRunner::new();
        let mut out = Vec::new();
        let mut menu = MenuLoop::new(&registry, &settings, &mut prompt, &runner, &mut out);

        assert_eq!(menu.state(), LoopState::AwaitingRoot);
        assert_eq!(menu.run(0), LoopExit::Exited);
        assert_eq!(menu.state(), LoopState::Exited);
    }

    #[test]
    fn missing_terminal_exits_with_failure() {
        let registry = Registry::standard();
        let settings = Settings::default();
        let mut prompt = ScriptedPrompt::unavailable();
        let runner = RecordingRunner::new();
        let mut out = Vec::new();

        let exit = MenuLoop::new(&registry, &settings, &mut prompt, &runner, &mut out).run(0);

        assert_eq!(exit, LoopExit::InputUnavailable);
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("download the script"));
    }
}
