//! # 6502 Opcode-Table Compiler
//!
//! Turns a declarative mapping from the 256 single-byte opcode slots of the
//! NMOS 6502 to (instruction, addressing-mode) pairs into validated,
//! machine-consumable artifacts: an instruction identifier enumeration, a
//! parallel name table, and a 256-entry dispatch table suitable for driving
//! an instruction decoder at runtime.
//!
//! ## Quick Start
//!
//! ```rust
//! use optab6502::{artifacts, AddressingMode, MOS6502_TABLE};
//!
//! // Validate the canonical table and derive all three artifacts.
//! let artifacts = artifacts::compile(&MOS6502_TABLE).unwrap();
//!
//! // 56 documented mnemonics plus the NONE sentinel.
//! assert_eq!(artifacts.enumeration.len(), 57);
//! assert_eq!(artifacts.enumeration[0].identifier, "ADC");
//! assert_eq!(artifacts.names[0], "ADC");
//!
//! // Dispatch entry 0x00 decodes to BRK / Implicit.
//! let brk = &artifacts.dispatch[0x00];
//! assert_eq!(brk.instruction, Some("BRK"));
//! assert_eq!(brk.mode, Some(AddressingMode::Implicit));
//! ```
//!
//! ## Architecture
//!
//! The crate is a pure, single-threaded pipeline over an immutable table:
//!
//! - **Table-Driven Design**: one ordered 256-slot table is the single source
//!   of truth; everything else is derived from it
//! - **Validation Gates Generation**: no artifact is produced from a table
//!   that has not passed validation
//! - **Determinism**: identical input yields byte-identical artifacts on
//!   every run; ordinals come from a total lexicographic order
//!
//! ## Modules
//!
//! - `addressing` - Addressing mode enumeration
//! - `table` - Instruction slots, the opcode table, and the canonical
//!   MOS 6502 table data
//! - `validator` - Structural invariant checks over a table
//! - `catalog` - Derivation of the sorted instruction catalog
//! - `artifacts` - Generation of the enumeration, name-table, and
//!   dispatch-table artifacts
//!
//! Rendering the artifacts as target-language source text is out of scope;
//! the `demos/` directory shows thin renderer shells over the public API.

pub mod addressing;
pub mod artifacts;
pub mod catalog;
pub mod table;
pub mod validator;

// Re-export public API
pub use addressing::AddressingMode;
pub use artifacts::{Artifacts, DispatchEntry, EnumEntry};
pub use catalog::InstructionCatalog;
pub use table::{InstructionSlot, OpcodeTable, MOS6502_TABLE};
pub use validator::validate;

/// Errors that can occur while constructing or validating an opcode table.
///
/// All variants signal an authoring mistake in the static table. They are
/// detected eagerly, before any artifact is produced, and abort the whole
/// generation run; the remedy is correcting the table and re-running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// The authored slot sequence does not contain exactly 256 entries.
    ///
    /// Contains the offending length for diagnostics.
    MalformedTable { length: usize },

    /// A slot has exactly one of (mnemonic, addressing mode) present.
    ///
    /// Mnemonic and mode travel together: either both are given or the slot
    /// is undefined. Contains the opcode byte of the offending slot.
    InconsistentSlot { opcode: u8 },

    /// The same (mnemonic, addressing mode) pair is assigned to two opcodes.
    ///
    /// Two opcode bytes cannot legally decode to the identical instruction
    /// and mode. Reports both the opcode where the pair first appeared and
    /// the opcode of the collision.
    DuplicateEncoding {
        mnemonic: &'static str,
        mode: AddressingMode,
        first_opcode: u8,
        second_opcode: u8,
    },
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TableError::MalformedTable { length } => {
                write!(f, "opcode table has {} slots, expected exactly 256", length)
            }
            TableError::InconsistentSlot { opcode } => {
                write!(
                    f,
                    "opcode 0x{:02X} defines only one of mnemonic and addressing mode",
                    opcode
                )
            }
            TableError::DuplicateEncoding {
                mnemonic,
                mode,
                first_opcode,
                second_opcode,
            } => {
                write!(
                    f,
                    "{} {} is encoded by both 0x{:02X} and 0x{:02X}",
                    mnemonic,
                    mode.name(),
                    first_opcode,
                    second_opcode
                )
            }
        }
    }
}

impl std::error::Error for TableError {}
