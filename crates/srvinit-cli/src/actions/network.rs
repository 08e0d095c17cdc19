//! Address selection preference in `gai.conf`.

use srvinit_fsops::append_block;
use tracing::info;

use super::{ActionContext, ActionReport};
use crate::error::ActionResult;

/// Lowers the precedence of IPv4-mapped addresses so IPv6 is tried first.
pub(crate) const IPV6_PRECEDENCE: &str = "precedence ::ffff:0:0/96  100";

pub(crate) fn prefer_ipv6(ctx: &mut ActionContext<'_>) -> ActionResult<ActionReport> {
    let settings = ctx.settings;
    let backup = append_block(&settings.gai_conf, IPV6_PRECEDENCE, &settings.backup_suffix)?;
    if let Some(backup) = backup {
        info!(backup = %backup.display(), "gai.conf backed up");
    }
    Ok(ActionReport::completed("IPv6 is now preferred"))
}
