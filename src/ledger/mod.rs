//! Ledger domain models: items, sections, and the document root with
//! derived totals and index-addressed edit operations.

pub mod item;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod section;

pub use item::{Item, Value};
pub use ledger::Ledger;
pub use section::Section;

/// Section name used when items appear before any header line.
pub const UNTITLED_SECTION: &str = "Untitled";

/// Name given to items appended through [`Ledger::add_item`].
pub const DEFAULT_ITEM_NAME: &str = "New Item";

/// Name given to sections appended through [`Ledger::add_section`].
pub const DEFAULT_SECTION_NAME: &str = "New Section";
