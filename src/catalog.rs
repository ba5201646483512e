//! # Instruction Catalog
//!
//! Derivation of the deduplicated, sorted set of instruction mnemonics
//! referenced anywhere in an [`OpcodeTable`]. The catalog assigns each
//! mnemonic a dense zero-based ordinal by its position in byte-wise
//! lexicographic order, which is what makes generated enumerations
//! reproducible across runs and implementations.

use std::collections::BTreeSet;

use crate::table::OpcodeTable;

/// The distinct instruction mnemonics of a table, in sorted order.
///
/// A catalog is always recomputed from a table, never edited independently.
/// Sorting is strict byte-wise lexicographic comparison: a total order with
/// no ties (mnemonics are already deduplicated), so the ordinal assignment
/// is deterministic.
///
/// The rank one past the last mnemonic is reserved as the sentinel ordinal
/// for "no instruction"; see [`InstructionCatalog::sentinel_ordinal`].
///
/// # Examples
///
/// ```
/// use optab6502::{InstructionCatalog, MOS6502_TABLE};
///
/// let catalog = InstructionCatalog::derive(&MOS6502_TABLE);
/// assert_eq!(catalog.len(), 56);
/// assert_eq!(catalog.mnemonics()[0], "ADC");
/// assert_eq!(catalog.ordinal_of("BRK"), Some(10));
/// assert_eq!(catalog.sentinel_ordinal(), 56);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionCatalog {
    mnemonics: Vec<&'static str>,
}

impl InstructionCatalog {
    /// Derive the catalog from a table.
    ///
    /// Collects the mnemonic of every defined slot, deduplicates, and sorts
    /// lexicographically. Only meaningful for a table that has passed
    /// validation.
    pub fn derive(table: &OpcodeTable) -> Self {
        let set: BTreeSet<&'static str> =
            table.iter().filter_map(|(_, slot)| slot.mnemonic()).collect();

        Self {
            mnemonics: set.into_iter().collect(),
        }
    }

    /// Number of distinct mnemonics.
    pub fn len(&self) -> usize {
        self.mnemonics.len()
    }

    /// Whether the catalog is empty (a table with no defined slots).
    pub fn is_empty(&self) -> bool {
        self.mnemonics.is_empty()
    }

    /// All mnemonics in sorted order; position is the ordinal.
    pub fn mnemonics(&self) -> &[&'static str] {
        &self.mnemonics
    }

    /// Iterate mnemonics in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.mnemonics.iter().copied()
    }

    /// The ordinal assigned to a mnemonic, if it is in the catalog.
    pub fn ordinal_of(&self, mnemonic: &str) -> Option<usize> {
        self.mnemonics.iter().position(|&m| m == mnemonic)
    }

    /// The reserved "no instruction" ordinal, one past the last mnemonic.
    pub fn sentinel_ordinal(&self) -> usize {
        self.mnemonics.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addressing::AddressingMode;
    use crate::table::{InstructionSlot, MOS6502_TABLE};

    #[test]
    fn test_canonical_catalog_is_sorted_and_deduplicated() {
        let catalog = InstructionCatalog::derive(&MOS6502_TABLE);

        assert_eq!(catalog.len(), 56);
        for pair in catalog.mnemonics().windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_ordinal_lookup_matches_position() {
        let catalog = InstructionCatalog::derive(&MOS6502_TABLE);

        for (ordinal, mnemonic) in catalog.iter().enumerate() {
            assert_eq!(catalog.ordinal_of(mnemonic), Some(ordinal));
        }
        assert_eq!(catalog.ordinal_of("XYZ"), None);
    }

    #[test]
    fn test_empty_table_yields_empty_catalog() {
        let table = OpcodeTable::new([InstructionSlot::Undefined; 256]);
        let catalog = InstructionCatalog::derive(&table);

        assert!(catalog.is_empty());
        assert_eq!(catalog.sentinel_ordinal(), 0);
    }

    #[test]
    fn test_repeated_mnemonic_counted_once() {
        let mut slots = [InstructionSlot::Undefined; 256];
        slots[0x05] = InstructionSlot::Defined {
            mnemonic: "ORA",
            mode: AddressingMode::ZeroPage,
        };
        slots[0x09] = InstructionSlot::Defined {
            mnemonic: "ORA",
            mode: AddressingMode::Immediate,
        };

        let catalog = InstructionCatalog::derive(&OpcodeTable::new(slots));
        assert_eq!(catalog.mnemonics(), &["ORA"]);
    }
}
