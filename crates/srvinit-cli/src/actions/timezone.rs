//! Timezone inspection and change through `timedatectl`.

use super::{ActionContext, ActionReport};
use crate::error::ActionResult;

/// Shortcut choices offered before manual entry.
pub(crate) const PRESET_ZONES: [(&str, &str); 4] = [
    ("1", "Asia/Shanghai"),
    ("2", "Asia/Tokyo"),
    ("3", "Asia/Singapore"),
    ("4", "UTC"),
];

const MANUAL_CHOICE: &str = "5";
const CANCEL_CHOICE: &str = "0";

pub(crate) fn change(ctx: &mut ActionContext<'_>) -> ActionResult<ActionReport> {
    ctx.run("timedatectl")?;
    for (key, zone) in PRESET_ZONES {
        ctx.say(&format!("{key}. {zone}"))?;
    }
    ctx.say(&format!("{MANUAL_CHOICE}. enter manually"))?;
    ctx.say(&format!("{CANCEL_CHOICE}. cancel"))?;

    let choice = ctx.ask("choose a timezone: ")?;
    let zone = match choice.as_str() {
        CANCEL_CHOICE => return Ok(ActionReport::Cancelled),
        MANUAL_CHOICE => {
            let zone = ctx.ask("timezone (e.g. Europe/Berlin): ")?;
            if !is_zone_name(&zone) {
                return Ok(ActionReport::rejected("invalid timezone name"));
            }
            zone
        }
        other => match PRESET_ZONES.iter().find(|(key, _)| *key == other) {
            Some((_, zone)) => (*zone).to_string(),
            None => return Ok(ActionReport::rejected("invalid selection")),
        },
    };

    ctx.run(&format!("timedatectl set-timezone {zone}"))?;
    Ok(ActionReport::completed(format!("timezone set to {zone}")))
}

/// Zone names are passed to the shell, so only the characters tz database names use are allowed.
fn is_zone_name(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | '+' | '-' | '/'))
}
