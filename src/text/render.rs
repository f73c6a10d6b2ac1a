//! Deterministic rendering of a [`Ledger`] back to outline text.

use std::fmt::Write;

use crate::ledger::Ledger;

use super::parse::EXCLUSION_MARKER;

/// Separator emitted between sections.
const SECTION_SEPARATOR: &str = "---";

/// Renders a ledger in the fixed outline layout: a `---` separator before
/// every section except the first, the section name as a header, then one
/// `name: value` line per item with the `[X] ` prefix on excluded items.
/// Lines are joined with `\n`; no trailing separator or newline.
///
/// Re-parsing the output reproduces the same section names, item names,
/// values, and exclusion flags. Original spacing and numeral script are
/// not preserved; normalization at parse time is lossy.
pub fn render(ledger: &Ledger) -> String {
    let mut lines = Vec::new();
    for (index, section) in ledger.sections.iter().enumerate() {
        if index > 0 {
            lines.push(SECTION_SEPARATOR.to_string());
        }
        lines.push(section.name.clone());
        for item in &section.items {
            let prefix = if item.excluded { EXCLUSION_MARKER } else { "" };
            let mut line = String::new();
            // Writing to a String cannot fail.
            let _ = write!(line, "{}{}: {}", prefix, item.name, item.value);
            lines.push(line);
        }
    }
    lines.join("\n")
}

/// Formats a number in plain decimal notation: integral values drop the
/// fractional part (`5`, not `5.0`), everything else uses the shortest
/// round-trip decimal form.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
