//! Renders all three artifacts as C-style source text.
//!
//! This is the renderer collaborator the core hands its artifacts to: a thin
//! shell that supplies the static table, runs validation and generation, and
//! prints. The core itself performs no output.

use optab6502::{artifacts, MOS6502_TABLE};

fn main() {
    let artifacts = match artifacts::compile(&MOS6502_TABLE) {
        Ok(artifacts) => artifacts,
        Err(err) => {
            eprintln!("table rejected: {}", err);
            std::process::exit(1);
        }
    };

    println!("// --- instruction identifier enumeration ---");
    for entry in &artifacts.enumeration {
        println!("{} = {},", entry.identifier, entry.ordinal);
    }

    println!();
    println!("// --- instruction name table ---");
    for name in &artifacts.names {
        println!("\"{}\",", name);
    }

    println!();
    println!("// --- opcode dispatch table ---");
    for entry in &artifacts.dispatch {
        let instruction = format!("InstructionId::{},", entry.instruction_tag());
        let mode = format!("AddressMode::{} }},", entry.mode_tag());
        println!("{{ {:<21} {:<32} /* 0x{:02x} */", instruction, mode, entry.opcode);
    }
}
