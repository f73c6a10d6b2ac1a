//! The document root: ordered sections, a derived grand total, and the
//! index-addressed edit operations used by table editors.

use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

use super::{
    item::{Item, Value},
    section::Section,
    DEFAULT_ITEM_NAME, DEFAULT_SECTION_NAME,
};

/// A parsed outline: ordered sections plus the derived grand total.
///
/// Field names serialize in camelCase so the JSON projection matches the
/// exported document shape (`grandTotal`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    pub sections: Vec<Section>,
    #[serde(default)]
    pub grand_total: f64,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes every section total and the grand total in place.
    /// Idempotent; safe to call after any mutation.
    pub fn recompute_totals(&mut self) {
        self.grand_total = self
            .sections
            .iter_mut()
            .map(|section| section.recompute_total())
            .sum();
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    fn section_mut(&mut self, index: usize) -> Result<&mut Section, LedgerError> {
        let len = self.sections.len();
        self.sections
            .get_mut(index)
            .ok_or(LedgerError::SectionOutOfRange { index, len })
    }

    fn item_mut(&mut self, section: usize, item: usize) -> Result<&mut Item, LedgerError> {
        let section = self.section_mut(section)?;
        let len = section.items.len();
        section
            .items
            .get_mut(item)
            .ok_or(LedgerError::ItemOutOfRange { index: item, len })
    }

    /// Renames the section at `index`. Totals are unaffected but recomputed
    /// unconditionally, like every other edit.
    pub fn rename_section(
        &mut self,
        index: usize,
        name: impl Into<String>,
    ) -> Result<(), LedgerError> {
        self.section_mut(index)?.name = name.into();
        self.recompute_totals();
        Ok(())
    }

    pub fn rename_item(
        &mut self,
        section: usize,
        item: usize,
        name: impl Into<String>,
    ) -> Result<(), LedgerError> {
        self.item_mut(section, item)?.name = name.into();
        self.recompute_totals();
        Ok(())
    }

    /// Replaces an item's value, coercing the input through the same
    /// numeric-or-text policy the parser uses (without numeral
    /// normalization, which applies only at parse time).
    pub fn set_item_value(
        &mut self,
        section: usize,
        item: usize,
        input: &str,
    ) -> Result<(), LedgerError> {
        self.item_mut(section, item)?.value = Value::coerce(input);
        self.recompute_totals();
        Ok(())
    }

    pub fn toggle_item_exclusion(
        &mut self,
        section: usize,
        item: usize,
    ) -> Result<(), LedgerError> {
        let entry = self.item_mut(section, item)?;
        entry.excluded = !entry.excluded;
        self.recompute_totals();
        Ok(())
    }

    /// Appends a default item (`"New Item"`, value 0, not excluded) to the
    /// section at `index`.
    pub fn add_item(&mut self, section: usize) -> Result<(), LedgerError> {
        self.section_mut(section)?
            .items
            .push(Item::new(DEFAULT_ITEM_NAME, 0.0));
        self.recompute_totals();
        Ok(())
    }

    pub fn remove_item(&mut self, section: usize, item: usize) -> Result<(), LedgerError> {
        let entry = self.section_mut(section)?;
        if item >= entry.items.len() {
            return Err(LedgerError::ItemOutOfRange {
                index: item,
                len: entry.items.len(),
            });
        }
        entry.items.remove(item);
        self.recompute_totals();
        Ok(())
    }

    /// Appends a default section (`"New Section"` with one default item).
    pub fn add_section(&mut self) {
        let mut section = Section::new(DEFAULT_SECTION_NAME);
        section.items.push(Item::new(DEFAULT_ITEM_NAME, 0.0));
        self.sections.push(section);
        self.recompute_totals();
    }

    pub fn remove_section(&mut self, index: usize) -> Result<(), LedgerError> {
        if index >= self.sections.len() {
            return Err(LedgerError::SectionOutOfRange {
                index,
                len: self.sections.len(),
            });
        }
        self.sections.remove(index);
        self.recompute_totals();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Ledger {
        let mut ledger = Ledger::new();
        let mut kitchen = Section::new("kitchen");
        kitchen.items.push(Item::new("kettle", 1.5));
        kitchen.items.push(Item::new("fridge", 30.0));
        ledger.sections.push(kitchen);
        ledger.recompute_totals();
        ledger
    }

    #[test]
    fn grand_total_tracks_section_totals() {
        let mut ledger = sample();
        assert_eq!(ledger.grand_total, 31.5);
        ledger.add_section();
        assert_eq!(ledger.grand_total, 31.5);
        ledger.set_item_value(1, 0, "10").unwrap();
        assert_eq!(ledger.grand_total, 41.5);
    }

    #[test]
    fn out_of_range_edits_fail_without_mutating() {
        let mut ledger = sample();
        let before = ledger.clone();
        assert!(matches!(
            ledger.rename_section(5, "x"),
            Err(LedgerError::SectionOutOfRange { index: 5, len: 1 })
        ));
        assert!(matches!(
            ledger.remove_item(0, 9),
            Err(LedgerError::ItemOutOfRange { index: 9, len: 2 })
        ));
        assert_eq!(ledger, before);
    }
}
