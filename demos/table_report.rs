//! Prints a summary report of the canonical table.

use optab6502::{validate, InstructionCatalog, MOS6502_TABLE};

fn main() {
    if let Err(err) = validate(&MOS6502_TABLE) {
        eprintln!("table rejected: {}", err);
        std::process::exit(1);
    }

    let defined = MOS6502_TABLE
        .iter()
        .filter(|(_, slot)| slot.is_defined())
        .count();
    let catalog = InstructionCatalog::derive(&MOS6502_TABLE);

    println!("Opcode table report");
    println!("  defined opcodes:    {}", defined);
    println!("  undefined opcodes:  {}", 256 - defined);
    println!("  distinct mnemonics: {}", catalog.len());
    println!();

    for (ordinal, mnemonic) in catalog.iter().enumerate() {
        let encodings = MOS6502_TABLE
            .iter()
            .filter(|(_, slot)| slot.mnemonic() == Some(mnemonic))
            .count();
        println!("  {:>2}  {}  ({} encodings)", ordinal, mnemonic, encodings);
    }
}
