//! # Opcode Table
//!
//! This module contains the slot and table types plus the canonical 256-entry
//! MOS 6502 opcode table that serves as the single source of truth for
//! generation.
//!
//! The table maps every opcode byte 0x00-0xFF to either a defined
//! (mnemonic, addressing mode) pair or an explicit undefined marker. Position
//! in the table *is* the opcode byte: slot `i` is the canonical meaning of
//! opcode `i`. The canonical table covers the 151 documented NMOS 6502
//! opcodes; the remaining 105 slots are undefined.

use crate::addressing::AddressingMode;
use crate::TableError;

/// One slot of the opcode table.
///
/// A slot is either a defined (mnemonic, addressing mode) pair or explicitly
/// undefined, meaning the opcode byte is illegal. There is deliberately no
/// state where a mnemonic exists without a mode or vice versa; the tagged
/// variant makes that inconsistency unrepresentable once a table has been
/// constructed.
///
/// # Examples
///
/// ```
/// use optab6502::{AddressingMode, InstructionSlot, MOS6502_TABLE};
///
/// let brk = MOS6502_TABLE.slot(0x00);
/// assert_eq!(brk.as_pair(), Some(("BRK", AddressingMode::Implicit)));
///
/// // 0x02 is an illegal opcode on the NMOS 6502.
/// assert_eq!(*MOS6502_TABLE.slot(0x02), InstructionSlot::Undefined);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructionSlot {
    /// Opcode decodes to this mnemonic with this addressing mode.
    Defined {
        /// Three-letter instruction name (e.g., "LDA", "STA").
        mnemonic: &'static str,

        /// Addressing mode paired with the mnemonic.
        mode: AddressingMode,
    },

    /// Opcode byte is illegal/undefined.
    Undefined,
}

impl InstructionSlot {
    /// Whether this slot carries a (mnemonic, mode) pair.
    pub const fn is_defined(&self) -> bool {
        matches!(self, InstructionSlot::Defined { .. })
    }

    /// The slot's mnemonic, if defined.
    pub const fn mnemonic(&self) -> Option<&'static str> {
        match self {
            InstructionSlot::Defined { mnemonic, .. } => Some(*mnemonic),
            InstructionSlot::Undefined => None,
        }
    }

    /// The slot's addressing mode, if defined.
    pub const fn mode(&self) -> Option<AddressingMode> {
        match self {
            InstructionSlot::Defined { mode, .. } => Some(*mode),
            InstructionSlot::Undefined => None,
        }
    }

    /// The slot as a (mnemonic, mode) tuple, if defined.
    pub const fn as_pair(&self) -> Option<(&'static str, AddressingMode)> {
        match self {
            InstructionSlot::Defined { mnemonic, mode } => Some((*mnemonic, *mode)),
            InstructionSlot::Undefined => None,
        }
    }
}

/// The authoritative ordered mapping from opcode byte to instruction slot.
///
/// Holds exactly 256 slots; the "exactly 256" invariant is enforced by the
/// array type itself. A table is immutable once constructed: the API exposes
/// read-only access only, and every downstream product (catalog, artifacts)
/// is a pure function of the table's contents.
///
/// # Examples
///
/// ```
/// use optab6502::{AddressingMode, MOS6502_TABLE};
///
/// assert_eq!(MOS6502_TABLE.slots().len(), 256);
///
/// let lda_imm = MOS6502_TABLE.slot(0xA9);
/// assert_eq!(lda_imm.mnemonic(), Some("LDA"));
/// assert_eq!(lda_imm.mode(), Some(AddressingMode::Immediate));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpcodeTable {
    slots: [InstructionSlot; 256],
}

impl OpcodeTable {
    /// Create a table from exactly 256 slots.
    ///
    /// Infallible: the array type already guarantees the length invariant.
    pub const fn new(slots: [InstructionSlot; 256]) -> Self {
        Self { slots }
    }

    /// Create a table from the two-optionals authoring shape.
    ///
    /// This is the boundary where hand-authored slot sequences enter the
    /// typed model. Construction fails if the sequence length is not exactly
    /// 256, or if any slot supplies only one of (mnemonic, mode).
    ///
    /// # Arguments
    ///
    /// * `pairs` - One (mnemonic, mode) entry per opcode byte, in ascending
    ///   opcode order; (None, None) marks an illegal opcode
    ///
    /// # Returns
    ///
    /// Ok(OpcodeTable) on success. Err(TableError::MalformedTable) when the
    /// length is wrong, Err(TableError::InconsistentSlot) when a slot is
    /// half-defined.
    pub fn from_pairs(
        pairs: &[(Option<&'static str>, Option<AddressingMode>)],
    ) -> Result<Self, TableError> {
        if pairs.len() != 256 {
            return Err(TableError::MalformedTable {
                length: pairs.len(),
            });
        }

        let mut slots = [InstructionSlot::Undefined; 256];
        for (opcode, pair) in pairs.iter().enumerate() {
            slots[opcode] = match *pair {
                (Some(mnemonic), Some(mode)) => InstructionSlot::Defined { mnemonic, mode },
                (None, None) => InstructionSlot::Undefined,
                _ => {
                    return Err(TableError::InconsistentSlot {
                        opcode: opcode as u8,
                    })
                }
            };
        }

        Ok(Self { slots })
    }

    /// The slot for an opcode byte.
    pub const fn slot(&self, opcode: u8) -> &InstructionSlot {
        &self.slots[opcode as usize]
    }

    /// All 256 slots in ascending opcode order.
    pub const fn slots(&self) -> &[InstructionSlot; 256] {
        &self.slots
    }

    /// Iterate slots paired with their opcode bytes, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &InstructionSlot)> {
        self.slots.iter().enumerate().map(|(i, slot)| (i as u8, slot))
    }
}

/// Shorthand for a defined slot in the canonical table below.
const fn def(mnemonic: &'static str, mode: AddressingMode) -> InstructionSlot {
    InstructionSlot::Defined { mnemonic, mode }
}

/// Shorthand for an undefined slot in the canonical table below.
const NIL: InstructionSlot = InstructionSlot::Undefined;

use AddressingMode::*;

/// The canonical MOS 6502 opcode table: 151 documented opcodes, 105 illegal
/// slots.
///
/// Row position is the opcode byte. Data follows the official NMOS 6502
/// instruction set reference; undocumented/illegal opcodes are left
/// undefined rather than given unofficial meanings.
pub static MOS6502_TABLE: OpcodeTable = OpcodeTable::new([
    // 0x0x
    def("BRK", Implicit),
    def("ORA", IndexedIndirect),
    NIL,
    NIL,
    NIL,
    def("ORA", ZeroPage),
    def("ASL", ZeroPage),
    NIL,
    def("PHP", Implicit),
    def("ORA", Immediate),
    def("ASL", Accumulator),
    NIL,
    NIL,
    def("ORA", Absolute),
    def("ASL", Absolute),
    NIL,

    // 0x1x
    def("BPL", Relative),
    def("ORA", IndirectIndexed),
    NIL,
    NIL,
    NIL,
    def("ORA", ZeroPageX),
    def("ASL", ZeroPageX),
    NIL,
    def("CLC", Implicit),
    def("ORA", AbsoluteY),
    NIL,
    NIL,
    NIL,
    def("ORA", AbsoluteX),
    def("ASL", AbsoluteX),
    NIL,

    // 0x2x
    def("JSR", Absolute),
    def("AND", IndexedIndirect),
    NIL,
    NIL,
    def("BIT", ZeroPage),
    def("AND", ZeroPage),
    def("ROL", ZeroPage),
    NIL,
    def("PLP", Implicit),
    def("AND", Immediate),
    def("ROL", Accumulator),
    NIL,
    def("BIT", Absolute),
    def("AND", Absolute),
    def("ROL", Absolute),
    NIL,

    // 0x3x
    def("BMI", Relative),
    def("AND", IndirectIndexed),
    NIL,
    NIL,
    NIL,
    def("AND", ZeroPageX),
    def("ROL", ZeroPageX),
    NIL,
    def("SEC", Implicit),
    def("AND", AbsoluteY),
    NIL,
    NIL,
    NIL,
    def("AND", AbsoluteX),
    def("ROL", AbsoluteX),
    NIL,

    // 0x4x
    def("RTI", Implicit),
    def("EOR", IndexedIndirect),
    NIL,
    NIL,
    NIL,
    def("EOR", ZeroPage),
    def("LSR", ZeroPage),
    NIL,
    def("PHA", Implicit),
    def("EOR", Immediate),
    def("LSR", Accumulator),
    NIL,
    def("JMP", Absolute),
    def("EOR", Absolute),
    def("LSR", Absolute),
    NIL,

    // 0x5x
    def("BVC", Relative),
    def("EOR", IndirectIndexed),
    NIL,
    NIL,
    NIL,
    def("EOR", ZeroPageX),
    def("LSR", ZeroPageX),
    NIL,
    def("CLI", Implicit),
    def("EOR", AbsoluteY),
    NIL,
    NIL,
    NIL,
    def("EOR", AbsoluteX),
    def("LSR", AbsoluteX),
    NIL,

    // 0x6x
    def("RTS", Implicit),
    def("ADC", IndexedIndirect),
    NIL,
    NIL,
    NIL,
    def("ADC", ZeroPage),
    def("ROR", ZeroPage),
    NIL,
    def("PLA", Implicit),
    def("ADC", Immediate),
    def("ROR", Accumulator),
    NIL,
    def("JMP", Indirect),
    def("ADC", Absolute),
    def("ROR", Absolute),
    NIL,

    // 0x7x
    def("BVS", Relative),
    def("ADC", IndirectIndexed),
    NIL,
    NIL,
    NIL,
    def("ADC", ZeroPageX),
    def("ROR", ZeroPageX),
    NIL,
    def("SEI", Implicit),
    def("ADC", AbsoluteY),
    NIL,
    NIL,
    NIL,
    def("ADC", AbsoluteX),
    def("ROR", AbsoluteX),
    NIL,

    // 0x8x
    NIL,
    def("STA", IndexedIndirect),
    NIL,
    NIL,
    def("STY", ZeroPage),
    def("STA", ZeroPage),
    def("STX", ZeroPage),
    NIL,
    def("DEY", Implicit),
    NIL,
    def("TXA", Implicit),
    NIL,
    def("STY", Absolute),
    def("STA", Absolute),
    def("STX", Absolute),
    NIL,

    // 0x9x
    def("BCC", Relative),
    def("STA", IndirectIndexed),
    NIL,
    NIL,
    def("STY", ZeroPageX),
    def("STA", ZeroPageX),
    def("STX", ZeroPageY),
    NIL,
    def("TYA", Implicit),
    def("STA", AbsoluteY),
    def("TXS", Implicit),
    NIL,
    NIL,
    def("STA", AbsoluteX),
    NIL,
    NIL,

    // 0xAx
    def("LDY", Immediate),
    def("LDA", IndexedIndirect),
    def("LDX", Immediate),
    NIL,
    def("LDY", ZeroPage),
    def("LDA", ZeroPage),
    def("LDX", ZeroPage),
    NIL,
    def("TAY", Implicit),
    def("LDA", Immediate),
    def("TAX", Implicit),
    NIL,
    def("LDY", Absolute),
    def("LDA", Absolute),
    def("LDX", Absolute),
    NIL,

    // 0xBx
    def("BCS", Relative),
    def("LDA", IndirectIndexed),
    NIL,
    NIL,
    def("LDY", ZeroPageX),
    def("LDA", ZeroPageX),
    def("LDX", ZeroPageY),
    NIL,
    def("CLV", Implicit),
    def("LDA", AbsoluteY),
    def("TSX", Implicit),
    NIL,
    def("LDY", AbsoluteX),
    def("LDA", AbsoluteX),
    def("LDX", AbsoluteY),
    NIL,

    // 0xCx
    def("CPY", Immediate),
    def("CMP", IndexedIndirect),
    NIL,
    NIL,
    def("CPY", ZeroPage),
    def("CMP", ZeroPage),
    def("DEC", ZeroPage),
    NIL,
    def("INY", Implicit),
    def("CMP", Immediate),
    def("DEX", Implicit),
    NIL,
    def("CPY", Absolute),
    def("CMP", Absolute),
    def("DEC", Absolute),
    NIL,

    // 0xDx
    def("BNE", Relative),
    def("CMP", IndirectIndexed),
    NIL,
    NIL,
    NIL,
    def("CMP", ZeroPageX),
    def("DEC", ZeroPageX),
    NIL,
    def("CLD", Implicit),
    def("CMP", AbsoluteY),
    NIL,
    NIL,
    NIL,
    def("CMP", AbsoluteX),
    def("DEC", AbsoluteX),
    NIL,

    // 0xEx
    def("CPX", Immediate),
    def("SBC", IndexedIndirect),
    NIL,
    NIL,
    def("CPX", ZeroPage),
    def("SBC", ZeroPage),
    def("INC", ZeroPage),
    NIL,
    def("INX", Implicit),
    def("SBC", Immediate),
    def("NOP", Implicit),
    NIL,
    def("CPX", Absolute),
    def("SBC", Absolute),
    def("INC", Absolute),
    NIL,

    // 0xFx
    def("BEQ", Relative),
    def("SBC", IndirectIndexed),
    NIL,
    NIL,
    NIL,
    def("SBC", ZeroPageX),
    def("INC", ZeroPageX),
    NIL,
    def("SED", Implicit),
    def("SBC", AbsoluteY),
    NIL,
    NIL,
    NIL,
    def("SBC", AbsoluteX),
    def("INC", AbsoluteX),
    NIL,
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_table_documented_opcode_count() {
        let defined = MOS6502_TABLE.iter().filter(|(_, s)| s.is_defined()).count();
        assert_eq!(defined, 151);
    }

    #[test]
    fn test_from_pairs_round_trips_canonical_table() {
        let pairs: Vec<_> = MOS6502_TABLE
            .iter()
            .map(|(_, s)| (s.mnemonic(), s.mode()))
            .collect();

        let rebuilt = OpcodeTable::from_pairs(&pairs).unwrap();
        assert_eq!(rebuilt, MOS6502_TABLE);
    }

    #[test]
    fn test_from_pairs_rejects_wrong_length() {
        let short = vec![(None, None); 255];
        assert_eq!(
            OpcodeTable::from_pairs(&short),
            Err(crate::TableError::MalformedTable { length: 255 })
        );

        let long = vec![(None, None); 257];
        assert_eq!(
            OpcodeTable::from_pairs(&long),
            Err(crate::TableError::MalformedTable { length: 257 })
        );
    }

    #[test]
    fn test_from_pairs_rejects_half_defined_slot() {
        let mut pairs = vec![(None, None); 256];
        pairs[0x10] = (Some("BPL"), None);
        assert_eq!(
            OpcodeTable::from_pairs(&pairs),
            Err(crate::TableError::InconsistentSlot { opcode: 0x10 })
        );

        pairs[0x10] = (None, Some(Relative));
        assert_eq!(
            OpcodeTable::from_pairs(&pairs),
            Err(crate::TableError::InconsistentSlot { opcode: 0x10 })
        );
    }
}
