//! Package upgrades and service install/removal through `apt` and `systemctl`.

use super::{ActionContext, ActionReport};
use crate::error::ActionResult;
use crate::registry::ManagedService;

const UPDATE_SYSTEM: &str = "apt update && apt upgrade -y && apt autoremove -y && apt clean";
const INSTALL_UFW: &str = "apt install ufw -y && ufw enable";

pub(crate) fn update_system(ctx: &mut ActionContext<'_>) -> ActionResult<ActionReport> {
    ctx.say("updating the system and cleaning up...")?;
    ctx.run(UPDATE_SYSTEM)?;
    Ok(ActionReport::completed("system update finished"))
}

/// `ufw enable` asks for confirmation, so the command needs the terminal.
pub(crate) fn install_firewall(ctx: &mut ActionContext<'_>) -> ActionResult<ActionReport> {
    ctx.run_interactive(INSTALL_UFW)?;
    Ok(ActionReport::completed("UFW installed and enabled"))
}

pub(crate) fn install_service(
    ctx: &mut ActionContext<'_>,
    service: ManagedService,
) -> ActionResult<ActionReport> {
    let unit = service.unit();
    ctx.run(&format!(
        "apt install {unit} -y && systemctl enable {unit} && systemctl start {unit}"
    ))?;
    Ok(ActionReport::completed(format!(
        "{} installed and started",
        service.display_name()
    )))
}

pub(crate) fn remove_service(
    ctx: &mut ActionContext<'_>,
    service: ManagedService,
) -> ActionResult<ActionReport> {
    let unit = service.unit();
    ctx.run(&format!("systemctl stop {unit} || true && apt remove {unit} -y"))?;
    Ok(ActionReport::completed(format!(
        "{} removed",
        service.display_name()
    )))
}
