//! Opcode table validation tests
//!
//! Verifies that every official opcode decodes to its documented
//! (mnemonic, addressing mode) pair and that everything else traps.

use interp6502::{
    AddressingMode, ExecutionError, FlatMemory, Mnemonic, CPU, EXTENSION_OPCODE, OPCODE_TABLE,
};
use std::collections::HashMap;

fn documented() -> HashMap<u8, (Mnemonic, AddressingMode)> {
    use AddressingMode::*;
    use Mnemonic::*;

    #[rustfmt::skip]
    let groups: &[(Mnemonic, &[(u8, AddressingMode)])] = &[
        (Adc, &[(0x69, Immediate), (0x65, ZeroPage), (0x75, ZeroPageX), (0x6D, Absolute), (0x7D, AbsoluteX), (0x79, AbsoluteY), (0x61, IndirectX), (0x71, IndirectY)]),
        (And, &[(0x29, Immediate), (0x25, ZeroPage), (0x35, ZeroPageX), (0x2D, Absolute), (0x3D, AbsoluteX), (0x39, AbsoluteY), (0x21, IndirectX), (0x31, IndirectY)]),
        (Asl, &[(0x0A, Accumulator), (0x06, ZeroPage), (0x16, ZeroPageX), (0x0E, Absolute), (0x1E, AbsoluteX)]),
        (Bcc, &[(0x90, Relative)]),
        (Bcs, &[(0xB0, Relative)]),
        (Beq, &[(0xF0, Relative)]),
        (Bit, &[(0x24, ZeroPage), (0x2C, Absolute)]),
        (Bmi, &[(0x30, Relative)]),
        (Bne, &[(0xD0, Relative)]),
        (Bpl, &[(0x10, Relative)]),
        (Brk, &[(0x00, Implicit)]),
        (Bvc, &[(0x50, Relative)]),
        (Bvs, &[(0x70, Relative)]),
        (Clc, &[(0x18, Implicit)]),
        (Cld, &[(0xD8, Implicit)]),
        (Cli, &[(0x58, Implicit)]),
        (Clv, &[(0xB8, Implicit)]),
        (Cmp, &[(0xC9, Immediate), (0xC5, ZeroPage), (0xD5, ZeroPageX), (0xCD, Absolute), (0xDD, AbsoluteX), (0xD9, AbsoluteY), (0xC1, IndirectX), (0xD1, IndirectY)]),
        (Cpx, &[(0xE0, Immediate), (0xE4, ZeroPage), (0xEC, Absolute)]),
        (Cpy, &[(0xC0, Immediate), (0xC4, ZeroPage), (0xCC, Absolute)]),
        (Dec, &[(0xC6, ZeroPage), (0xD6, ZeroPageX), (0xCE, Absolute), (0xDE, AbsoluteX)]),
        (Dex, &[(0xCA, Implicit)]),
        (Dey, &[(0x88, Implicit)]),
        (Eor, &[(0x49, Immediate), (0x45, ZeroPage), (0x55, ZeroPageX), (0x4D, Absolute), (0x5D, AbsoluteX), (0x59, AbsoluteY), (0x41, IndirectX), (0x51, IndirectY)]),
        (Inc, &[(0xE6, ZeroPage), (0xF6, ZeroPageX), (0xEE, Absolute), (0xFE, AbsoluteX)]),
        (Inx, &[(0xE8, Implicit)]),
        (Iny, &[(0xC8, Implicit)]),
        (Jmp, &[(0x4C, Absolute), (0x6C, Indirect)]),
        (Jsr, &[(0x20, Absolute)]),
        (Lda, &[(0xA9, Immediate), (0xA5, ZeroPage), (0xB5, ZeroPageX), (0xAD, Absolute), (0xBD, AbsoluteX), (0xB9, AbsoluteY), (0xA1, IndirectX), (0xB1, IndirectY)]),
        (Ldx, &[(0xA2, Immediate), (0xA6, ZeroPage), (0xB6, ZeroPageY), (0xAE, Absolute), (0xBE, AbsoluteY)]),
        (Ldy, &[(0xA0, Immediate), (0xA4, ZeroPage), (0xB4, ZeroPageX), (0xAC, Absolute), (0xBC, AbsoluteX)]),
        (Lsr, &[(0x4A, Accumulator), (0x46, ZeroPage), (0x56, ZeroPageX), (0x4E, Absolute), (0x5E, AbsoluteX)]),
        (Nop, &[(0xEA, Implicit)]),
        (Ora, &[(0x09, Immediate), (0x05, ZeroPage), (0x15, ZeroPageX), (0x0D, Absolute), (0x1D, AbsoluteX), (0x19, AbsoluteY), (0x01, IndirectX), (0x11, IndirectY)]),
        (Pha, &[(0x48, Implicit)]),
        (Php, &[(0x08, Implicit)]),
        (Pla, &[(0x68, Implicit)]),
        (Plp, &[(0x28, Implicit)]),
        (Rol, &[(0x2A, Accumulator), (0x26, ZeroPage), (0x36, ZeroPageX), (0x2E, Absolute), (0x3E, AbsoluteX)]),
        (Ror, &[(0x6A, Accumulator), (0x66, ZeroPage), (0x76, ZeroPageX), (0x6E, Absolute), (0x7E, AbsoluteX)]),
        (Rti, &[(0x40, Implicit)]),
        (Rts, &[(0x60, Implicit)]),
        (Sbc, &[(0xE9, Immediate), (0xE5, ZeroPage), (0xF5, ZeroPageX), (0xED, Absolute), (0xFD, AbsoluteX), (0xF9, AbsoluteY), (0xE1, IndirectX), (0xF1, IndirectY)]),
        (Sec, &[(0x38, Implicit)]),
        (Sed, &[(0xF8, Implicit)]),
        (Sei, &[(0x78, Implicit)]),
        (Sta, &[(0x85, ZeroPage), (0x95, ZeroPageX), (0x8D, Absolute), (0x9D, AbsoluteX), (0x99, AbsoluteY), (0x81, IndirectX), (0x91, IndirectY)]),
        (Stx, &[(0x86, ZeroPage), (0x96, ZeroPageY), (0x8E, Absolute)]),
        (Sty, &[(0x84, ZeroPage), (0x94, ZeroPageX), (0x8C, Absolute)]),
        (Tax, &[(0xAA, Implicit)]),
        (Tay, &[(0xA8, Implicit)]),
        (Tsx, &[(0xBA, Implicit)]),
        (Txa, &[(0x8A, Implicit)]),
        (Txs, &[(0x9A, Implicit)]),
        (Tya, &[(0x98, Implicit)]),
    ];

    let mut map = HashMap::new();
    for &(mnemonic, opcodes) in groups {
        for &(opcode, mode) in opcodes {
            assert!(
                map.insert(opcode, (mnemonic, mode)).is_none(),
                "0x{:02X} listed twice",
                opcode
            );
        }
    }
    map
}

#[test]
fn test_documented_opcodes_decode() {
    let documented = documented();
    assert_eq!(documented.len(), 151);

    for (&opcode, &(mnemonic, mode)) in &documented {
        let metadata = &OPCODE_TABLE[opcode as usize];
        assert_eq!(
            (metadata.mnemonic, metadata.addressing_mode),
            (mnemonic, mode),
            "Opcode 0x{:02X} decodes wrongly",
            opcode
        );
        assert!(metadata.is_official());
    }
}

#[test]
fn test_undocumented_opcodes_are_illegal() {
    let documented = documented();

    for opcode in 0..=255u8 {
        if documented.contains_key(&opcode) || opcode == EXTENSION_OPCODE {
            continue;
        }
        assert_eq!(
            OPCODE_TABLE[opcode as usize].mnemonic,
            Mnemonic::Illegal,
            "Opcode 0x{:02X} should be illegal",
            opcode
        );
    }
}

#[test]
fn test_every_illegal_opcode_traps() {
    for opcode in 0..=255u8 {
        if OPCODE_TABLE[opcode as usize].mnemonic != Mnemonic::Illegal {
            continue;
        }

        let mut memory = FlatMemory::new();
        memory.load(0x4000, &[opcode]);
        let mut cpu = CPU::new(memory, 0x4000);

        assert_eq!(
            cpu.step(),
            Err(ExecutionError::IllegalOpcode { opcode, pc: 0x4000 })
        );
    }
}

#[test]
fn test_extension_slot() {
    let ext = &OPCODE_TABLE[EXTENSION_OPCODE as usize];

    assert_eq!(EXTENSION_OPCODE, 0xFF);
    assert_eq!(ext.mnemonic, Mnemonic::Ext);
    assert_eq!(ext.addressing_mode, AddressingMode::Immediate);
    assert_eq!(ext.size_bytes, 2);
}

#[test]
fn test_size_matches_addressing_mode() {
    for (opcode, metadata) in OPCODE_TABLE.iter().enumerate() {
        let expected = match metadata.mnemonic {
            Mnemonic::Brk => 2,
            _ => 1 + metadata.addressing_mode.operand_bytes(),
        };

        assert_eq!(
            metadata.size_bytes, expected,
            "Opcode 0x{:02X} ({}) size mismatch",
            opcode, metadata.mnemonic
        );
    }
}

#[test]
fn test_official_instructions_advance_pc_by_size() {
    // Everything except control flow lands on the next instruction
    for (opcode, metadata) in OPCODE_TABLE.iter().enumerate() {
        if !metadata.is_official()
            || matches!(
                metadata.mnemonic,
                Mnemonic::Jmp | Mnemonic::Jsr | Mnemonic::Rts | Mnemonic::Rti | Mnemonic::Brk
            )
        {
            continue;
        }

        let mut memory = FlatMemory::new();
        // Zero displacement so taken branches land on the next instruction too
        memory.load(0x4000, &[opcode as u8, 0x00, 0x30]);
        let mut cpu = CPU::new(memory, 0x4000);

        cpu.step().unwrap();
        assert_eq!(
            cpu.pc(),
            0x4000 + metadata.size_bytes as u16,
            "{} (0x{:02X})",
            metadata.mnemonic,
            opcode
        );
    }
}

#[test]
fn test_instruction_variety() {
    let mnemonics: std::collections::HashSet<_> = OPCODE_TABLE
        .iter()
        .filter(|m| m.is_official())
        .map(|m| m.mnemonic)
        .collect();

    assert_eq!(mnemonics.len(), 56);
}
