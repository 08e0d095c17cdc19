//! UFW port rules.

use super::{ActionContext, ActionReport, is_numeric};
use crate::error::ActionResult;

const RULE_VERBS: [&str; 3] = ["allow", "deny", "delete"];

pub(crate) fn manage_rule(ctx: &mut ActionContext<'_>) -> ActionResult<ActionReport> {
    let verb = ctx.ask("action (allow/deny/delete): ")?.to_ascii_lowercase();
    let port = ctx.ask("port: ")?;
    if !RULE_VERBS.contains(&verb.as_str()) || !is_numeric(&port) {
        return Ok(ActionReport::rejected("invalid input"));
    }

    ctx.run(&format!("ufw {verb} {port}/tcp"))?;
    Ok(ActionReport::completed(format!("ufw {verb} {port}/tcp applied")))
}
