//! # Table Validator
//!
//! Structural invariant checks over an [`OpcodeTable`]. Validation gates all
//! generation: the catalog and artifact modules assume they are handed a
//! table that has passed [`validate`].

use std::collections::HashMap;

use crate::addressing::AddressingMode;
use crate::table::{InstructionSlot, OpcodeTable};
use crate::TableError;

/// Check that no two defined slots carry the same (mnemonic, mode) pair.
///
/// Iterates opcode bytes 0 through 255 in order and fails on the first
/// collision, reporting both the opcode where the pair first appeared and
/// the opcode of the collision. Undefined slots are exempt from the check
/// and may repeat freely.
///
/// Pure check: produces no output and leaves the table untouched.
///
/// # Examples
///
/// ```
/// use optab6502::{validate, MOS6502_TABLE};
///
/// assert!(validate(&MOS6502_TABLE).is_ok());
/// ```
pub fn validate(table: &OpcodeTable) -> Result<(), TableError> {
    let mut seen: HashMap<(&'static str, AddressingMode), u8> = HashMap::new();

    for (opcode, slot) in table.iter() {
        if let InstructionSlot::Defined { mnemonic, mode } = *slot {
            if let Some(&first_opcode) = seen.get(&(mnemonic, mode)) {
                return Err(TableError::DuplicateEncoding {
                    mnemonic,
                    mode,
                    first_opcode,
                    second_opcode: opcode,
                });
            }
            seen.insert((mnemonic, mode), opcode);
        }
    }

    Ok(())
}
