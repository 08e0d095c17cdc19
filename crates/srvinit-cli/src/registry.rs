//! Keyed action table and the dispatch boundary.
//!
//! # Design
//! - The menu and the dispatcher read the same table, so keys and labels cannot drift.
//! - Dispatch converts every action error into an outcome; nothing past this point unwinds the loop.

use tracing::{info, warn};

use srvinit_telemetry::action_span;

use crate::actions::{
    ActionContext, ActionReport, account, firewall, maintenance, network, packages, ssh, timezone,
};
use crate::error::{ActionError, ActionResult};

/// Services that can be installed and removed from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagedService {
    /// The Nginx web server.
    Nginx,
    /// The nftables firewall backend.
    Nftables,
}

impl ManagedService {
    /// Package and systemd unit name.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Nginx => "nginx",
            Self::Nftables => "nftables",
        }
    }

    /// Name shown to the operator.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Nginx => "Nginx",
            Self::Nftables => "nftables",
        }
    }
}

/// Administrative operations the menu can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Rewrite the `Port` directive in `sshd_config` and restart the daemon.
    ChangeSshPort,
    /// Upgrade packages and clean the apt cache.
    UpdateSystem,
    /// Install UFW and enable it.
    InstallFirewall,
    /// Add or remove a UFW rule for a TCP port.
    FirewallRule,
    /// Vacuum the journal and remove rotated logs.
    ClearLogs,
    /// Show the current timezone and optionally change it.
    ChangeTimezone,
    /// Install, enable, and start a service.
    InstallService(ManagedService),
    /// Stop and remove a service.
    RemoveService(ManagedService),
    /// Prefer IPv6 in address selection.
    PreferIpv6,
    /// Change the login password of the invoking user.
    ChangePassword,
}

impl Action {
    fn execute(self, ctx: &mut ActionContext<'_>) -> ActionResult<ActionReport> {
        match self {
            Self::ChangeSshPort => ssh::change_port(ctx),
            Self::UpdateSystem => packages::update_system(ctx),
            Self::InstallFirewall => packages::install_firewall(ctx),
            Self::FirewallRule => firewall::manage_rule(ctx),
            Self::ClearLogs => maintenance::clear_logs(ctx),
            Self::ChangeTimezone => timezone::change(ctx),
            Self::InstallService(service) => packages::install_service(ctx, service),
            Self::RemoveService(service) => packages::remove_service(ctx, service),
            Self::PreferIpv6 => network::prefer_ipv6(ctx),
            Self::ChangePassword => account::change_password(ctx),
        }
    }
}

/// One row of the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionEntry {
    /// Selection typed by the operator.
    pub key: &'static str,
    /// Human-readable description.
    pub label: &'static str,
    /// Operation bound to the key.
    pub action: Action,
}

impl ActionEntry {
    const fn new(key: &'static str, label: &'static str, action: Action) -> Self {
        Self { key, label, action }
    }
}

/// Result of dispatching a selection.
#[derive(Debug)]
pub enum DispatchOutcome {
    /// The action ran and reported an outcome.
    Done(ActionReport),
    /// No entry matches the selection.
    NotFound,
    /// The action aborted with an error.
    ActionFailed(ActionError),
}

/// Ordered table of menu entries.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<ActionEntry>,
}

impl Registry {
    /// Build a registry from arbitrary entries, ordered by numeric key.
    #[must_use]
    pub fn new(mut entries: Vec<ActionEntry>) -> Self {
        entries.sort_by_key(|entry| (entry.key.parse::<u32>().unwrap_or(u32::MAX), entry.key));
        Self { entries }
    }

    /// The twelve standard bootstrap actions.
    #[must_use]
    pub fn standard() -> Self {
        use Action::{
            ChangePassword, ChangeSshPort, ChangeTimezone, ClearLogs, FirewallRule,
            InstallFirewall, InstallService, PreferIpv6, RemoveService, UpdateSystem,
        };
        use ManagedService::{Nftables, Nginx};

        Self::new(vec![
            ActionEntry::new("1", "Change SSH port", ChangeSshPort),
            ActionEntry::new("2", "Update and clean up the system", UpdateSystem),
            ActionEntry::new("3", "Install and enable UFW", InstallFirewall),
            ActionEntry::new("4", "Manage firewall ports", FirewallRule),
            ActionEntry::new("5", "Clear system logs and cache", ClearLogs),
            ActionEntry::new("6", "View or change the timezone", ChangeTimezone),
            ActionEntry::new("7", "Install Nginx", InstallService(Nginx)),
            ActionEntry::new("8", "Uninstall Nginx", RemoveService(Nginx)),
            ActionEntry::new("9", "Install nftables", InstallService(Nftables)),
            ActionEntry::new("10", "Uninstall nftables", RemoveService(Nftables)),
            ActionEntry::new("11", "Prefer IPv6 connections automatically", PreferIpv6),
            ActionEntry::new("12", "Change the current user's login password", ChangePassword),
        ])
    }

    /// Entries in menu order.
    #[must_use]
    pub fn entries(&self) -> &[ActionEntry] {
        &self.entries
    }

    /// Look up the entry bound to `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ActionEntry> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    /// Run the action bound to `key`.
    ///
    /// Prints `running: <label>` before the action starts. Errors raised by the action
    /// are returned as [`DispatchOutcome::ActionFailed`].
    pub fn dispatch(&self, key: &str, ctx: &mut ActionContext<'_>) -> DispatchOutcome {
        let Some(entry) = self.get(key) else {
            return DispatchOutcome::NotFound;
        };

        let span = action_span(entry.key, entry.label);
        let _guard = span.enter();
        if let Err(err) = ctx.say(&format!("running: {}", entry.label)) {
            return DispatchOutcome::ActionFailed(err);
        }

        match entry.action.execute(ctx) {
            Ok(report) => {
                info!(outcome = ?report, "action finished");
                DispatchOutcome::Done(report)
            }
            Err(err) => {
                warn!(error = %err, "action failed");
                DispatchOutcome::ActionFailed(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing::run_with;
    use srvinit_config::Settings;
    use srvinit_test_support::mocks::RecordingRunner;

    #[test]
    fn standard_registry_has_twelve_numeric_keys_in_order() {
        let registry = Registry::standard();
        let keys: Vec<&str> = registry.entries().iter().map(|entry| entry.key).collect();
        assert_eq!(
            keys,
            ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12"]
        );
        assert!(registry.get("0").is_none());
        assert!(registry.get("13").is_none());
        assert_eq!(
            registry.get("11").map(|entry| entry.action),
            Some(Action::PreferIpv6)
        );
    }

    #[test]
    fn new_orders_entries_numerically() {
        let registry = Registry::new(vec![
            ActionEntry::new("10", "ten", Action::ClearLogs),
            ActionEntry::new("2", "two", Action::UpdateSystem),
        ]);
        let keys: Vec<&str> = registry.entries().iter().map(|entry| entry.key).collect();
        assert_eq!(keys, ["2", "10"]);
    }

    #[test]
    fn unknown_key_is_not_found() {
        let registry = Registry::standard();
        let runner = RecordingRunner::new();
        let mut outcome = None;
        let run = run_with(&[], &runner, &Settings::default(), |ctx| {
            outcome = Some(registry.dispatch("99", ctx));
            Ok(ActionReport::Cancelled)
        });
        assert!(matches!(outcome, Some(DispatchOutcome::NotFound)));
        assert!(run.console.is_empty());
    }

    #[test]
    fn dispatch_announces_and_runs_the_action() {
        let registry = Registry::standard();
        let runner = RecordingRunner::new();
        let mut outcome = None;
        let run = run_with(&[], &runner, &Settings::default(), |ctx| {
            outcome = Some(registry.dispatch("7", ctx));
            Ok(ActionReport::Cancelled)
        });
        assert!(matches!(
            outcome,
            Some(DispatchOutcome::Done(ActionReport::Completed(_)))
        ));
        assert!(run.console.starts_with("running: Install Nginx\n"));
        assert_eq!(run.commands.len(), 1);
    }

    #[test]
    fn dispatch_converts_errors_into_outcomes() {
        let registry = Registry::standard();
        let runner = RecordingRunner::new().failing_on("apt", Some(100));
        let mut outcome = None;
        let _ = run_with(&[], &runner, &Settings::default(), |ctx| {
            outcome = Some(registry.dispatch("2", ctx));
            Ok(ActionReport::Cancelled)
        });
        assert!(matches!(
            outcome,
            Some(DispatchOutcome::ActionFailed(ActionError::Host(_)))
        ));
    }
}
