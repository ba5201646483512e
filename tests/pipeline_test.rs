//! End-to-end pipeline tests: construction, validation, derivation, and
//! artifact generation, including the documented rejection scenarios.

use optab6502::{
    artifacts, validate, AddressingMode, InstructionCatalog, InstructionSlot, OpcodeTable,
    TableError, MOS6502_TABLE,
};

#[test]
fn test_dispatch_positional_correspondence() {
    let dispatch = artifacts::dispatch_table(&MOS6502_TABLE);

    assert_eq!(dispatch.len(), 256);
    for (i, entry) in dispatch.iter().enumerate() {
        assert_eq!(entry.opcode as usize, i);

        let slot = MOS6502_TABLE.slot(i as u8);
        assert_eq!(entry.instruction, slot.mnemonic());
        assert_eq!(entry.mode, slot.mode());
    }
}

#[test]
fn test_sentinel_holds_highest_ordinal_alone() {
    let catalog = InstructionCatalog::derive(&MOS6502_TABLE);
    let entries = artifacts::enumeration(&catalog);

    let sentinel = entries.last().unwrap();
    assert_eq!(sentinel.identifier, artifacts::SENTINEL_IDENTIFIER);
    assert_eq!(sentinel.ordinal, catalog.len());

    for entry in &entries[..entries.len() - 1] {
        assert_ne!(entry.ordinal, sentinel.ordinal);
        assert_ne!(entry.identifier, artifacts::SENTINEL_IDENTIFIER);
    }
}

#[test]
fn test_name_table_aligns_with_enumeration() {
    let catalog = InstructionCatalog::derive(&MOS6502_TABLE);
    let entries = artifacts::enumeration(&catalog);
    let names = artifacts::name_table(&catalog);

    assert_eq!(entries.len(), names.len());
    for entry in &entries[..entries.len() - 1] {
        assert_eq!(names[entry.ordinal], entry.identifier);
    }
    assert_eq!(names[catalog.sentinel_ordinal()], artifacts::SENTINEL_NAME);
}

#[test]
fn test_pipeline_is_idempotent() {
    let first = artifacts::compile(&MOS6502_TABLE).unwrap();
    let second = artifacts::compile(&MOS6502_TABLE).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_rejects_wrong_length() {
    for length in [255usize, 257] {
        let pairs = vec![(None, None); length];
        assert_eq!(
            OpcodeTable::from_pairs(&pairs).unwrap_err(),
            TableError::MalformedTable { length }
        );
    }
}

#[test]
fn test_rejects_half_defined_slot() {
    let mut pairs: Vec<(Option<&'static str>, Option<AddressingMode>)> = vec![(None, None); 256];
    pairs[0x10] = (Some("BPL"), None);

    assert_eq!(
        OpcodeTable::from_pairs(&pairs).unwrap_err(),
        TableError::InconsistentSlot { opcode: 0x10 }
    );
}

#[test]
fn test_rejects_duplicate_encoding() {
    let mut slots = [InstructionSlot::Undefined; 256];
    slots[0x05] = InstructionSlot::Defined {
        mnemonic: "ORA",
        mode: AddressingMode::ZeroPage,
    };
    slots[0x65] = InstructionSlot::Defined {
        mnemonic: "ORA",
        mode: AddressingMode::ZeroPage,
    };

    assert_eq!(
        validate(&OpcodeTable::new(slots)).unwrap_err(),
        TableError::DuplicateEncoding {
            mnemonic: "ORA",
            mode: AddressingMode::ZeroPage,
            first_opcode: 0x05,
            second_opcode: 0x65,
        }
    );
}

#[test]
fn test_single_brk_table() {
    let mut slots = [InstructionSlot::Undefined; 256];
    slots[0x00] = InstructionSlot::Defined {
        mnemonic: "BRK",
        mode: AddressingMode::Implicit,
    };
    let table = OpcodeTable::new(slots);

    assert!(validate(&table).is_ok());

    let catalog = InstructionCatalog::derive(&table);
    assert_eq!(catalog.mnemonics(), &["BRK"]);
    assert_eq!(catalog.ordinal_of("BRK"), Some(0));
    assert_eq!(catalog.sentinel_ordinal(), 1);

    let generated = artifacts::compile(&table).unwrap();
    assert_eq!(generated.enumeration.len(), 2);
    assert_eq!(generated.names, vec!["BRK", "INVALID"]);

    assert_eq!(generated.dispatch[0x00].instruction, Some("BRK"));
    assert_eq!(
        generated.dispatch[0x00].mode,
        Some(AddressingMode::Implicit)
    );
    for entry in &generated.dispatch[1..] {
        assert_eq!(entry.instruction, None);
        assert_eq!(entry.mode, None);
        assert_eq!(entry.instruction_ordinal(&catalog), 1);
    }
}

#[test]
fn test_error_messages_name_the_offenders() {
    let duplicate = TableError::DuplicateEncoding {
        mnemonic: "ORA",
        mode: AddressingMode::ZeroPage,
        first_opcode: 0x05,
        second_opcode: 0x65,
    };
    let rendered = duplicate.to_string();
    assert!(rendered.contains("ORA"));
    assert!(rendered.contains("ZERO_PAGE"));
    assert!(rendered.contains("0x05"));
    assert!(rendered.contains("0x65"));

    assert!(TableError::InconsistentSlot { opcode: 0x10 }
        .to_string()
        .contains("0x10"));
    assert!(TableError::MalformedTable { length: 255 }
        .to_string()
        .contains("255"));
}
