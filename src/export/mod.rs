//! Export projections: a generic JSON tree and the tabular CSV layout.
//!
//! CSV values are scaled for display (thousands, with a currency label);
//! the stored ledger values are never changed.

use crate::errors::LedgerError;
use crate::ledger::{Ledger, Value};
use crate::text::format_number;

/// Display multiplier applied to numeric values in the CSV projection.
pub const DISPLAY_SCALE: f64 = 1000.0;

/// Currency label appended to scaled CSV values.
pub const CURRENCY_LABEL: &str = "جنية";

/// Projects the ledger onto a generic JSON tree: sections as arrays of
/// `{name, value, excluded}` maps, `grandTotal` at the root.
pub fn to_json(ledger: &Ledger) -> Result<serde_json::Value, LedgerError> {
    Ok(serde_json::to_value(ledger)?)
}

/// Pretty-printed form of [`to_json`], suitable for download or clipboard
/// hand-off.
pub fn to_json_string(ledger: &Ledger) -> Result<String, LedgerError> {
    Ok(serde_json::to_string_pretty(ledger)?)
}

/// Builds the tabular projection: per section a `Section: <name>` banner,
/// an `Item,Value` header, one row per item, a `Subtotal` row, and a blank
/// spacer row; a final `Grand Total` row closes the table.
pub fn csv_rows(ledger: &Ledger) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    for section in &ledger.sections {
        rows.push(vec![format!("Section: {}", section.name)]);
        rows.push(vec!["Item".to_string(), "Value".to_string()]);
        for item in &section.items {
            rows.push(vec![item.name.clone(), display_value(&item.value)]);
        }
        rows.push(vec!["Subtotal".to_string(), scaled(section.total)]);
        rows.push(Vec::new());
    }
    rows.push(vec!["Grand Total".to_string(), scaled(ledger.grand_total)]);
    rows
}

/// Joins [`csv_rows`] with commas and newlines. Cells are emitted verbatim,
/// matching the original export; names containing commas will split.
pub fn to_csv(ledger: &Ledger) -> String {
    csv_rows(ledger)
        .iter()
        .map(|row| row.join(","))
        .collect::<Vec<_>>()
        .join("\n")
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Numeric(number) => scaled(*number),
        Value::Text(text) => text.clone(),
    }
}

fn scaled(number: f64) -> String {
    format!("{} {}", format_number(number * DISPLAY_SCALE), CURRENCY_LABEL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::parse;

    #[test]
    fn csv_scales_numbers_and_keeps_text() {
        let ledger = parse("A\nx: 2.5\nnote: later");
        let rows = csv_rows(&ledger);
        assert_eq!(rows[2], vec!["x".to_string(), "2500 جنية".to_string()]);
        assert_eq!(rows[3], vec!["note".to_string(), "later".to_string()]);
        assert_eq!(
            rows.last().unwrap(),
            &vec!["Grand Total".to_string(), "2500 جنية".to_string()]
        );
    }
}
