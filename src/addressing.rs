//! # Addressing Modes
//!
//! This module defines the 13 addressing modes supported by the 6502
//! processor. The set is closed: it is fixed at compile time and never
//! extended at runtime. Each mode determines how an instruction interprets
//! the operand bytes that follow its opcode.

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines how an instruction's operand location is
/// computed. Together with a mnemonic it forms the decoded meaning of an
/// opcode slot.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative,
///   IndexedIndirect, IndirectIndexed
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register.
    ///
    /// Example: LDA $80,X (wraps within zero page)
    ZeroPageX,

    /// Zero page address indexed by Y register.
    ///
    /// Example: LDX $80,Y (wraps within zero page)
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label (offset is relative to PC)
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Indirect jump through 16-bit pointer.
    ///
    /// Example: JMP ($FFFC). Only used by JMP.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndexedIndirect,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    IndirectIndexed,
}

impl AddressingMode {
    /// Number of addressing modes.
    pub const COUNT: usize = 13;

    /// All addressing modes in declaration order.
    pub const ALL: [AddressingMode; Self::COUNT] = [
        AddressingMode::Implicit,
        AddressingMode::Accumulator,
        AddressingMode::Immediate,
        AddressingMode::ZeroPage,
        AddressingMode::ZeroPageX,
        AddressingMode::ZeroPageY,
        AddressingMode::Relative,
        AddressingMode::Absolute,
        AddressingMode::AbsoluteX,
        AddressingMode::AbsoluteY,
        AddressingMode::Indirect,
        AddressingMode::IndexedIndirect,
        AddressingMode::IndirectIndexed,
    ];

    /// Canonical textual tag for this mode, as emitted in generated tables.
    ///
    /// # Examples
    ///
    /// ```
    /// use optab6502::AddressingMode;
    ///
    /// assert_eq!(AddressingMode::ZeroPageX.name(), "ZERO_PAGE_X");
    /// assert_eq!(AddressingMode::IndexedIndirect.name(), "INDEXED_INDIRECT");
    /// ```
    pub const fn name(&self) -> &'static str {
        match self {
            AddressingMode::Implicit => "IMPLICIT",
            AddressingMode::Accumulator => "ACCUMULATOR",
            AddressingMode::Immediate => "IMMEDIATE",
            AddressingMode::ZeroPage => "ZERO_PAGE",
            AddressingMode::ZeroPageX => "ZERO_PAGE_X",
            AddressingMode::ZeroPageY => "ZERO_PAGE_Y",
            AddressingMode::Relative => "RELATIVE",
            AddressingMode::Absolute => "ABSOLUTE",
            AddressingMode::AbsoluteX => "ABSOLUTE_X",
            AddressingMode::AbsoluteY => "ABSOLUTE_Y",
            AddressingMode::Indirect => "INDIRECT",
            AddressingMode::IndexedIndirect => "INDEXED_INDIRECT",
            AddressingMode::IndirectIndexed => "INDIRECT_INDEXED",
        }
    }

    /// Number of operand bytes following the opcode byte (0, 1, or 2).
    ///
    /// Static metadata only; this crate does not execute instructions.
    pub const fn operand_size(&self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndexedIndirect
            | AddressingMode::IndirectIndexed => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}
