//! Menu and outcome rendering.

use std::error::Error;
use std::fmt::Write as _;
use std::io::{self, Write};

use crate::registry::Registry;

const RULE: &str = "==============================";
const TITLE: &str = " Linux server bootstrap";

pub(crate) fn render_menu(out: &mut dyn Write, registry: &Registry) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "{TITLE}")?;
    writeln!(out, "{RULE}")?;
    for entry in registry.entries() {
        writeln!(out, "{}. {}", entry.key, entry.label)?;
    }
    writeln!(out, "0. exit")?;
    writeln!(out, "{RULE}")?;
    out.flush()
}

pub(crate) fn write_line(out: &mut dyn Write, line: &str) -> io::Result<()> {
    writeln!(out, "{line}")?;
    out.flush()
}

/// Render an error and its sources as `outer: inner: root`.
pub(crate) fn error_chain(err: &dyn Error) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let _ = write!(rendered, ": {cause}");
        source = cause.source();
    }
    rendered
}
