//! Named, ordered groups of items with a derived subtotal.

use serde::{Deserialize, Serialize};

use super::item::Item;

/// An ordered list of items under a name. `total` is derived; it is
/// recomputed by the totals engine and never edited directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Section {
    pub name: String,
    pub items: Vec<Item>,
    #[serde(default)]
    pub total: f64,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
            total: 0.0,
        }
    }

    /// Recomputes `total` from the current items: numeric, non-excluded
    /// values sum, everything else counts zero.
    pub fn recompute_total(&mut self) -> f64 {
        self.total = self.items.iter().map(Item::counted_amount).sum();
        self.total
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Value;

    #[test]
    fn total_ignores_text_and_excluded_items() {
        let mut section = Section::new("kitchen");
        section.items.push(Item::new("kettle", 1.5));
        section.items.push(Item::new("note", Value::Text("tbd".into())));
        let mut skipped = Item::new("fridge", 30.0);
        skipped.excluded = true;
        section.items.push(skipped);
        assert_eq!(section.recompute_total(), 1.5);
        assert_eq!(section.total, 1.5);
    }
}
