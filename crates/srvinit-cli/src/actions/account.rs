//! Login password change.

use super::{ActionContext, ActionReport};
use crate::error::ActionResult;

/// `passwd` reads the new password from the terminal itself.
pub(crate) fn change_password(ctx: &mut ActionContext<'_>) -> ActionResult<ActionReport> {
    ctx.run_interactive("passwd")?;
    Ok(ActionReport::completed("password updated"))
}
