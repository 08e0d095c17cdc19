//! SSH daemon port change.

use srvinit_fsops::set_ssh_port;
use tracing::info;

use super::{ActionContext, ActionReport, is_numeric};
use crate::error::ActionResult;

const RESTART_SSH: &str = "systemctl restart ssh || systemctl restart sshd";

pub(crate) fn change_port(ctx: &mut ActionContext<'_>) -> ActionResult<ActionReport> {
    let port = ctx.ask("new SSH port: ")?;
    if !is_numeric(&port) {
        return Ok(ActionReport::rejected("port must be numeric"));
    }

    let settings = ctx.settings;
    let change = set_ssh_port(&settings.sshd_config, &port, &settings.backup_suffix)?;
    info!(
        backup = %change.backup.display(),
        removed = change.removed,
        "sshd_config updated"
    );

    ctx.run(RESTART_SSH)?;
    Ok(ActionReport::completed(format!(
        "SSH port changed to {port}\nmake sure the firewall allows port {port} before closing this session"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing::run_with;
    use srvinit_test_support::fixtures::HostFixture;
    use srvinit_test_support::mocks::RecordingRunner;
    use std::fs;

    #[test]
    fn valid_port_rewrites_config_and_restarts_daemon() -> anyhow::Result<()> {
        let fixture = HostFixture::with_sshd_config("Port 2222\nUsePAM yes\n  Port 8022\n")?;
        let runner = RecordingRunner::new();

        let run = run_with(&["22"], &runner, fixture.settings(), change_port);

        assert!(matches!(run.result, Ok(ActionReport::Completed(_))));
        let config = fs::read_to_string(fixture.sshd_config())?;
        let ports: Vec<&str> = config
            .lines()
            .filter(|line| line.trim().starts_with("Port"))
            .collect();
        assert_eq!(ports, vec!["Port 22"]);
        assert_eq!(
            fs::read_to_string(fixture.backup_of(fixture.sshd_config()))?,
            "Port 2222\nUsePAM yes\n  Port 8022\n"
        );
        assert_eq!(run.commands, vec![RESTART_SSH]);
        Ok(())
    }

    #[test]
    fn non_numeric_port_leaves_config_untouched() -> anyhow::Result<()> {
        let fixture = HostFixture::new()?;
        let before = fs::read(fixture.sshd_config())?;
        let runner = RecordingRunner::new();

        for answer in ["", "22a", "port", "-1", "2 2"] {
            let run = run_with(&[answer], &runner, fixture.settings(), change_port);
            assert!(
                matches!(run.result, Ok(ActionReport::Rejected(_))),
                "{answer:?} should be rejected"
            );
        }

        assert_eq!(fs::read(fixture.sshd_config())?, before);
        assert!(!fixture.backup_of(fixture.sshd_config()).exists());
        assert!(runner.lines().is_empty());
        Ok(())
    }

    #[test]
    fn restart_failure_surfaces_after_edit() -> anyhow::Result<()> {
        let fixture = HostFixture::new()?;
        let runner = RecordingRunner::new().failing_on("systemctl restart", Some(5));

        let run = run_with(&["2200"], &runner, fixture.settings(), change_port);

        assert!(run.result.is_err());
        assert!(fs::read_to_string(fixture.sshd_config())?.contains("\nPort 2200\n"));
        Ok(())
    }
}
