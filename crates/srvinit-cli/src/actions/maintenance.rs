//! Journal and cache cleanup.

use super::{ActionContext, ActionReport};
use crate::error::ActionResult;

const PURGE_FILES: &str = "rm -rf /var/log/*.log /var/cache/apt/archives/* || true";

pub(crate) fn clear_logs(ctx: &mut ActionContext<'_>) -> ActionResult<ActionReport> {
    ctx.say("clearing logs and cache...")?;
    let retention = &ctx.settings.journal_retention;
    ctx.run(&format!("journalctl --vacuum-time={retention} || true"))?;
    ctx.run(PURGE_FILES)?;
    Ok(ActionReport::completed("logs and cache cleared"))
}
