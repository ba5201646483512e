//! # Artifact Generation
//!
//! The three projections handed to an external renderer: the identifier
//! enumeration, the ordinal-indexed name table, and the 256-entry dispatch
//! table. Each is a pure function of a validated [`OpcodeTable`] (and, for
//! the enumeration and names, of the derived [`InstructionCatalog`]).
//!
//! The generators assume validated input and never fail; calling them on a
//! table that has not passed [`crate::validate`] is a caller error, not a
//! recoverable condition. [`compile`] bundles the gate and all three
//! generators into one pipeline.

use crate::addressing::AddressingMode;
use crate::catalog::InstructionCatalog;
use crate::table::OpcodeTable;
use crate::validator::validate;
use crate::TableError;

/// Identifier of the sentinel enumeration entry standing for "no
/// instruction". Always assigned the highest ordinal.
pub const SENTINEL_IDENTIFIER: &str = "NONE";

/// Display name of the sentinel in the name-table artifact.
pub const SENTINEL_NAME: &str = "INVALID";

/// Textual tag for the sentinel addressing mode in dispatch entries.
pub const SENTINEL_MODE: &str = "NONE";

/// One entry of the enumeration artifact: an identifier and its dense,
/// zero-based ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumEntry {
    /// Instruction identifier, or [`SENTINEL_IDENTIFIER`] for the trailing
    /// sentinel entry.
    pub identifier: &'static str,

    /// Ordinal assigned by catalog rank; the sentinel holds the highest.
    pub ordinal: usize,
}

/// One entry of the dispatch-table artifact: the decoded meaning of a single
/// opcode byte.
///
/// `None` in either field is the sentinel for an undefined opcode; the two
/// fields are always `Some` together or `None` together, mirroring the slot
/// they were rendered from. The `opcode` field is diagnostic annotation
/// only - position in the dispatch table is what identifies the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchEntry {
    /// The opcode byte this entry was generated from.
    pub opcode: u8,

    /// Instruction identifier, or None for the sentinel.
    pub instruction: Option<&'static str>,

    /// Addressing mode, or None for the sentinel.
    pub mode: Option<AddressingMode>,
}

impl DispatchEntry {
    /// The instruction identifier tag, resolving the sentinel to
    /// [`SENTINEL_IDENTIFIER`].
    pub fn instruction_tag(&self) -> &'static str {
        self.instruction.unwrap_or(SENTINEL_IDENTIFIER)
    }

    /// The addressing mode tag, resolving the sentinel to [`SENTINEL_MODE`].
    pub fn mode_tag(&self) -> &'static str {
        match self.mode {
            Some(mode) => mode.name(),
            None => SENTINEL_MODE,
        }
    }

    /// The dense instruction ordinal for dispatch consumers.
    ///
    /// Resolves through the catalog the entry was generated alongside;
    /// undefined opcodes resolve to the catalog's sentinel ordinal.
    pub fn instruction_ordinal(&self, catalog: &InstructionCatalog) -> usize {
        self.instruction
            .and_then(|mnemonic| catalog.ordinal_of(mnemonic))
            .unwrap_or_else(|| catalog.sentinel_ordinal())
    }
}

/// All three artifacts of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    /// Enumeration artifact: catalog entries in sorted order plus the
    /// trailing sentinel. Ordinals are contiguous, zero-based, and gapless.
    pub enumeration: Vec<EnumEntry>,

    /// Name-table artifact: `names[ordinal]` is the display name of the
    /// instruction holding that ordinal, including the sentinel.
    pub names: Vec<&'static str>,

    /// Dispatch-table artifact: entry `i` is the decoded meaning of opcode
    /// byte `i`.
    pub dispatch: [DispatchEntry; 256],
}

/// Generate the enumeration artifact.
///
/// One (identifier, ordinal) record per catalog entry in sorted order,
/// followed by the sentinel record with ordinal equal to the catalog size.
pub fn enumeration(catalog: &InstructionCatalog) -> Vec<EnumEntry> {
    let mut entries: Vec<EnumEntry> = catalog
        .iter()
        .enumerate()
        .map(|(ordinal, identifier)| EnumEntry {
            identifier,
            ordinal,
        })
        .collect();

    entries.push(EnumEntry {
        identifier: SENTINEL_IDENTIFIER,
        ordinal: catalog.sentinel_ordinal(),
    });

    entries
}

/// Generate the name-table artifact.
///
/// Same traversal order as [`enumeration`], so indexing by ordinal never
/// diverges between the two artifacts.
pub fn name_table(catalog: &InstructionCatalog) -> Vec<&'static str> {
    let mut names: Vec<&'static str> = catalog.iter().collect();
    names.push(SENTINEL_NAME);
    names
}

/// Generate the dispatch-table artifact.
///
/// Exactly 256 entries in the table's original order: entry `i` always
/// corresponds to opcode byte `i`. Defined slots reference their mnemonic
/// and mode directly; undefined slots reference the sentinel pair.
pub fn dispatch_table(table: &OpcodeTable) -> [DispatchEntry; 256] {
    std::array::from_fn(|i| {
        let slot = table.slot(i as u8);
        DispatchEntry {
            opcode: i as u8,
            instruction: slot.mnemonic(),
            mode: slot.mode(),
        }
    })
}

/// Run the whole pipeline: validate, derive the catalog, generate all three
/// artifacts.
///
/// The only fallible step is validation; a table that passes it always
/// yields a complete artifact set. There is no partial output: on error,
/// nothing is generated.
///
/// # Examples
///
/// ```
/// use optab6502::{artifacts, MOS6502_TABLE};
///
/// let artifacts = artifacts::compile(&MOS6502_TABLE).unwrap();
/// assert_eq!(artifacts.dispatch.len(), 256);
/// assert_eq!(artifacts.enumeration.len(), artifacts.names.len());
/// ```
pub fn compile(table: &OpcodeTable) -> Result<Artifacts, TableError> {
    validate(table)?;
    let catalog = InstructionCatalog::derive(table);

    Ok(Artifacts {
        enumeration: enumeration(&catalog),
        names: name_table(&catalog),
        dispatch: dispatch_table(table),
    })
}
