//! Snapshot-plus-working-copy edit sessions.

use crate::ledger::Ledger;
use crate::text::render;

/// An editing session over a parsed ledger: the baseline stays immutable
/// while edits accumulate on a working clone. Cancelling discards the
/// working copy; committing renders it back to text and promotes it to be
/// the new baseline.
#[derive(Debug, Clone)]
pub struct EditSession {
    baseline: Ledger,
    working: Ledger,
}

impl EditSession {
    pub fn new(ledger: Ledger) -> Self {
        Self {
            working: ledger.clone(),
            baseline: ledger,
        }
    }

    pub fn baseline(&self) -> &Ledger {
        &self.baseline
    }

    pub fn working(&self) -> &Ledger {
        &self.working
    }

    /// Mutable access to the working copy; edits go through the
    /// [`Ledger`] operations and never touch the baseline.
    pub fn working_mut(&mut self) -> &mut Ledger {
        &mut self.working
    }

    pub fn is_dirty(&self) -> bool {
        self.working != self.baseline
    }

    /// Drops all pending edits, resetting the working copy to the baseline.
    pub fn discard(&mut self) {
        self.working = self.baseline.clone();
    }

    /// Renders the working copy to outline text, makes it the new baseline,
    /// and returns the text for the caller to persist.
    pub fn commit(&mut self) -> String {
        let text = render(&self.working);
        self.baseline = self.working.clone();
        text
    }
}
