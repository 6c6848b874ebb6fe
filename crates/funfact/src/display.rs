use std::io::{self, Write};

pub const RULE_WIDTH: usize = 60;
pub const TITLE: &str = "🌟  FUN FACT GENERATOR  🌟";
pub const NOTHING_TO_DISPLAY: &str = "No fact to display!";

/// Renders a fact as the bordered block printed after each fetch.
///
/// An empty fact renders as a single notice line with no border.
pub fn render_fact(fact: &str) -> String {
    if fact.is_empty() {
        return format!("{}\n", NOTHING_TO_DISPLAY);
    }

    let rule = "=".repeat(RULE_WIDTH);
    format!("\n{rule}\n{TITLE}\n{rule}\n\n{fact}\n\n{rule}\n")
}

pub fn display_fact<W: Write>(out: &mut W, fact: &str) -> io::Result<()> {
    out.write_all(render_fact(fact).as_bytes())?;
    out.flush()
}
