//! Store-level actions for the ingredient ledger.
//!
//! Each action covers the whole table in one message, which is what makes
//! the check-then-deduct sequence safe under concurrent purchases.

/// Whole-table operations on the ingredient ledger.
#[derive(Debug, Clone)]
pub enum LedgerAction {
    /// Reports whether every (name, quantity) requirement is covered by the
    /// current inventory. Never mutates.
    CheckAvailability(Vec<(String, u32)>),
    /// Subtracts every requirement from the inventory, or nothing at all.
    ///
    /// # Errors
    /// Fails with `InsufficientQuantity` (or `NotFound` for an unknown name)
    /// without touching any quantity.
    Deduct(Vec<(String, u32)>),
    /// Sets an ingredient's quantity to an absolute value.
    SetQuantity { name: String, quantity: u32 },
}

/// Results from LedgerActions - variants match 1:1 with LedgerAction
#[derive(Debug, Clone)]
pub enum LedgerActionResult {
    /// Result from CheckAvailability - true when everything is in stock
    CheckAvailability(bool),
    /// Result from Deduct - unit on success
    Deduct(()),
    /// Result from SetQuantity - unit on success
    SetQuantity(()),
}
