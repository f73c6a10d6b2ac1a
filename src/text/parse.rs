//! The outline parser: raw text in, a fully totalled [`Ledger`] out.

use tracing::debug;

use crate::ledger::{Item, Ledger, Section, Value, UNTITLED_SECTION};

use super::normalize::normalize_numerals;

/// Marker prefix on an item name that excludes it from totals.
pub(crate) const EXCLUSION_MARKER: &str = "[X] ";

/// Parses an outline into a [`Ledger`]. Never fails: every line is either
/// a separator, a header, or an item, and anything that does not look like
/// `name: value` starts a new section.
///
/// Line handling, single pass with no lookahead:
/// - empty lines are skipped;
/// - a line of only `-` characters resets the current section;
/// - a line whose first `:` is missing, leading, or trailing is a header;
/// - anything else splits on the first `:` into an item. Items arriving
///   before any header go into a lazily created "Untitled" section.
pub fn parse(raw: &str) -> Ledger {
    let mut ledger = Ledger::new();
    // Index into ledger.sections; the explicit form of the original's
    // mutable current-section pointer.
    let mut current: Option<usize> = None;

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if is_dash_line(line) {
            current = None;
            continue;
        }

        // An item needs a colon with content on both sides; anything else
        // is a header line.
        let colon = match line.find(':') {
            Some(idx) if idx > 0 && idx < line.len() - 1 => idx,
            _ => {
                ledger.sections.push(Section::new(line));
                current = Some(ledger.sections.len() - 1);
                continue;
            }
        };

        let index = match current {
            Some(index) => index,
            None => {
                ledger.sections.push(Section::new(UNTITLED_SECTION));
                let index = ledger.sections.len() - 1;
                current = Some(index);
                index
            }
        };

        let raw_name = line[..colon].trim();
        let raw_value = line[colon + 1..].trim();

        let (name, excluded) = match raw_name.strip_prefix(EXCLUSION_MARKER) {
            Some(stripped) => (stripped, true),
            None => (raw_name, false),
        };

        ledger.sections[index].items.push(Item {
            name: name.to_string(),
            value: coerce_raw_value(raw_value),
            excluded,
        });
    }

    ledger.recompute_totals();
    debug!(
        sections = ledger.sections.len(),
        grand_total = ledger.grand_total,
        "parsed outline"
    );
    ledger
}

fn is_dash_line(line: &str) -> bool {
    !line.is_empty() && line.bytes().all(|byte| byte == b'-')
}

/// Parse-time value coercion: normalize numerals first, then apply the
/// numeric-or-text policy. The text fallback keeps the un-normalized raw.
fn coerce_raw_value(raw_value: &str) -> Value {
    let normalized = normalize_numerals(raw_value);
    match normalized.parse::<f64>() {
        Ok(number) if number.is_finite() && !normalized.is_empty() => Value::Numeric(number),
        _ => Value::Text(raw_value.to_string()),
    }
}
