//! # Opcode Table
//!
//! The 256-entry opcode table is the single source of truth for decoding.
//! It is built at compile time from [`OFFICIAL_OPCODES`], the declarative list
//! of the 151 documented NMOS 6502 opcodes. Every slot not named there
//! decodes to [`Mnemonic::Illegal`], except [`EXTENSION_OPCODE`] which is
//! reserved for the host extension hook.

use crate::addressing::AddressingMode;
use std::fmt;

/// Opcode reserved for the host extension hook (`$FF op`).
pub const EXTENSION_OPCODE: u8 = 0xFF;

/// Instruction mnemonics.
///
/// The 56 official instructions, plus [`Mnemonic::Ext`] for the extension
/// hook and [`Mnemonic::Illegal`] for every undefined opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    /// Host extension hook.
    Ext,
    /// No defined instruction; executing it traps.
    Illegal,
}

impl Mnemonic {
    /// Upper-case assembler spelling ("LDA", "EXT", "???").
    pub const fn as_str(self) -> &'static str {
        match self {
            Mnemonic::Adc => "ADC",
            Mnemonic::And => "AND",
            Mnemonic::Asl => "ASL",
            Mnemonic::Bcc => "BCC",
            Mnemonic::Bcs => "BCS",
            Mnemonic::Beq => "BEQ",
            Mnemonic::Bit => "BIT",
            Mnemonic::Bmi => "BMI",
            Mnemonic::Bne => "BNE",
            Mnemonic::Bpl => "BPL",
            Mnemonic::Brk => "BRK",
            Mnemonic::Bvc => "BVC",
            Mnemonic::Bvs => "BVS",
            Mnemonic::Clc => "CLC",
            Mnemonic::Cld => "CLD",
            Mnemonic::Cli => "CLI",
            Mnemonic::Clv => "CLV",
            Mnemonic::Cmp => "CMP",
            Mnemonic::Cpx => "CPX",
            Mnemonic::Cpy => "CPY",
            Mnemonic::Dec => "DEC",
            Mnemonic::Dex => "DEX",
            Mnemonic::Dey => "DEY",
            Mnemonic::Eor => "EOR",
            Mnemonic::Inc => "INC",
            Mnemonic::Inx => "INX",
            Mnemonic::Iny => "INY",
            Mnemonic::Jmp => "JMP",
            Mnemonic::Jsr => "JSR",
            Mnemonic::Lda => "LDA",
            Mnemonic::Ldx => "LDX",
            Mnemonic::Ldy => "LDY",
            Mnemonic::Lsr => "LSR",
            Mnemonic::Nop => "NOP",
            Mnemonic::Ora => "ORA",
            Mnemonic::Pha => "PHA",
            Mnemonic::Php => "PHP",
            Mnemonic::Pla => "PLA",
            Mnemonic::Plp => "PLP",
            Mnemonic::Rol => "ROL",
            Mnemonic::Ror => "ROR",
            Mnemonic::Rti => "RTI",
            Mnemonic::Rts => "RTS",
            Mnemonic::Sbc => "SBC",
            Mnemonic::Sec => "SEC",
            Mnemonic::Sed => "SED",
            Mnemonic::Sei => "SEI",
            Mnemonic::Sta => "STA",
            Mnemonic::Stx => "STX",
            Mnemonic::Sty => "STY",
            Mnemonic::Tax => "TAX",
            Mnemonic::Tay => "TAY",
            Mnemonic::Tsx => "TSX",
            Mnemonic::Txa => "TXA",
            Mnemonic::Txs => "TXS",
            Mnemonic::Tya => "TYA",
            Mnemonic::Ext => "EXT",
            Mnemonic::Illegal => "???",
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use interp6502::{AddressingMode, Mnemonic, OPCODE_TABLE};
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.size_bytes, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic.
    pub mnemonic: Mnemonic,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Total instruction size in bytes (opcode + operands).
    ///
    /// BRK counts its padding byte, so it is 2 despite its implied mode.
    pub size_bytes: u8,
}

impl OpcodeMetadata {
    const ILLEGAL: Self = Self {
        mnemonic: Mnemonic::Illegal,
        addressing_mode: AddressingMode::Implicit,
        size_bytes: 1,
    };

    const fn new(mnemonic: Mnemonic, addressing_mode: AddressingMode) -> Self {
        let size_bytes = match mnemonic {
            Mnemonic::Brk => 2,
            _ => 1 + addressing_mode.operand_bytes(),
        };
        Self {
            mnemonic,
            addressing_mode,
            size_bytes,
        }
    }

    /// True for the 151 documented opcodes.
    pub const fn is_official(&self) -> bool {
        !matches!(self.mnemonic, Mnemonic::Illegal | Mnemonic::Ext)
    }
}

/// The documented NMOS 6502 opcodes, in opcode order.
#[rustfmt::skip]
pub const OFFICIAL_OPCODES: [(u8, Mnemonic, AddressingMode); 151] = {
    use AddressingMode::*;
    use Mnemonic::*;
    [
        (0x00, Brk, Implicit),  (0x01, Ora, IndirectX), (0x05, Ora, ZeroPage),  (0x06, Asl, ZeroPage),
        (0x08, Php, Implicit),  (0x09, Ora, Immediate), (0x0A, Asl, Accumulator), (0x0D, Ora, Absolute),
        (0x0E, Asl, Absolute),  (0x10, Bpl, Relative),  (0x11, Ora, IndirectY), (0x15, Ora, ZeroPageX),
        (0x16, Asl, ZeroPageX), (0x18, Clc, Implicit),  (0x19, Ora, AbsoluteY), (0x1D, Ora, AbsoluteX),
        (0x1E, Asl, AbsoluteX), (0x20, Jsr, Absolute),  (0x21, And, IndirectX), (0x24, Bit, ZeroPage),
        (0x25, And, ZeroPage),  (0x26, Rol, ZeroPage),  (0x28, Plp, Implicit),  (0x29, And, Immediate),
        (0x2A, Rol, Accumulator), (0x2C, Bit, Absolute), (0x2D, And, Absolute), (0x2E, Rol, Absolute),
        (0x30, Bmi, Relative),  (0x31, And, IndirectY), (0x35, And, ZeroPageX), (0x36, Rol, ZeroPageX),
        (0x38, Sec, Implicit),  (0x39, And, AbsoluteY), (0x3D, And, AbsoluteX), (0x3E, Rol, AbsoluteX),
        (0x40, Rti, Implicit),  (0x41, Eor, IndirectX), (0x45, Eor, ZeroPage),  (0x46, Lsr, ZeroPage),
        (0x48, Pha, Implicit),  (0x49, Eor, Immediate), (0x4A, Lsr, Accumulator), (0x4C, Jmp, Absolute),
        (0x4D, Eor, Absolute),  (0x4E, Lsr, Absolute),  (0x50, Bvc, Relative),  (0x51, Eor, IndirectY),
        (0x55, Eor, ZeroPageX), (0x56, Lsr, ZeroPageX), (0x58, Cli, Implicit),  (0x59, Eor, AbsoluteY),
        (0x5D, Eor, AbsoluteX), (0x5E, Lsr, AbsoluteX), (0x60, Rts, Implicit),  (0x61, Adc, IndirectX),
        (0x65, Adc, ZeroPage),  (0x66, Ror, ZeroPage),  (0x68, Pla, Implicit),  (0x69, Adc, Immediate),
        (0x6A, Ror, Accumulator), (0x6C, Jmp, Indirect), (0x6D, Adc, Absolute), (0x6E, Ror, Absolute),
        (0x70, Bvs, Relative),  (0x71, Adc, IndirectY), (0x75, Adc, ZeroPageX), (0x76, Ror, ZeroPageX),
        (0x78, Sei, Implicit),  (0x79, Adc, AbsoluteY), (0x7D, Adc, AbsoluteX), (0x7E, Ror, AbsoluteX),
        (0x81, Sta, IndirectX), (0x84, Sty, ZeroPage),  (0x85, Sta, ZeroPage),  (0x86, Stx, ZeroPage),
        (0x88, Dey, Implicit),  (0x8A, Txa, Implicit),  (0x8C, Sty, Absolute),  (0x8D, Sta, Absolute),
        (0x8E, Stx, Absolute),  (0x90, Bcc, Relative),  (0x91, Sta, IndirectY), (0x94, Sty, ZeroPageX),
        (0x95, Sta, ZeroPageX), (0x96, Stx, ZeroPageY), (0x98, Tya, Implicit),  (0x99, Sta, AbsoluteY),
        (0x9A, Txs, Implicit),  (0x9D, Sta, AbsoluteX), (0xA0, Ldy, Immediate), (0xA1, Lda, IndirectX),
        (0xA2, Ldx, Immediate), (0xA4, Ldy, ZeroPage),  (0xA5, Lda, ZeroPage),  (0xA6, Ldx, ZeroPage),
        (0xA8, Tay, Implicit),  (0xA9, Lda, Immediate), (0xAA, Tax, Implicit),  (0xAC, Ldy, Absolute),
        (0xAD, Lda, Absolute),  (0xAE, Ldx, Absolute),  (0xB0, Bcs, Relative),  (0xB1, Lda, IndirectY),
        (0xB4, Ldy, ZeroPageX), (0xB5, Lda, ZeroPageX), (0xB6, Ldx, ZeroPageY), (0xB8, Clv, Implicit),
        (0xB9, Lda, AbsoluteY), (0xBA, Tsx, Implicit),  (0xBC, Ldy, AbsoluteX), (0xBD, Lda, AbsoluteX),
        (0xBE, Ldx, AbsoluteY), (0xC0, Cpy, Immediate), (0xC1, Cmp, IndirectX), (0xC4, Cpy, ZeroPage),
        (0xC5, Cmp, ZeroPage),  (0xC6, Dec, ZeroPage),  (0xC8, Iny, Implicit),  (0xC9, Cmp, Immediate),
        (0xCA, Dex, Implicit),  (0xCC, Cpy, Absolute),  (0xCD, Cmp, Absolute),  (0xCE, Dec, Absolute),
        (0xD0, Bne, Relative),  (0xD1, Cmp, IndirectY), (0xD5, Cmp, ZeroPageX), (0xD6, Dec, ZeroPageX),
        (0xD8, Cld, Implicit),  (0xD9, Cmp, AbsoluteY), (0xDD, Cmp, AbsoluteX), (0xDE, Dec, AbsoluteX),
        (0xE0, Cpx, Immediate), (0xE1, Sbc, IndirectX), (0xE4, Cpx, ZeroPage),  (0xE5, Sbc, ZeroPage),
        (0xE6, Inc, ZeroPage),  (0xE8, Inx, Implicit),  (0xE9, Sbc, Immediate), (0xEA, Nop, Implicit),
        (0xEC, Cpx, Absolute),  (0xED, Sbc, Absolute),  (0xEE, Inc, Absolute),  (0xF0, Beq, Relative),
        (0xF1, Sbc, IndirectY), (0xF5, Sbc, ZeroPageX), (0xF6, Inc, ZeroPageX), (0xF8, Sed, Implicit),
        (0xF9, Sbc, AbsoluteY), (0xFD, Sbc, AbsoluteX), (0xFE, Inc, AbsoluteX),
    ]
};

const fn build_table() -> [OpcodeMetadata; 256] {
    let mut table = [OpcodeMetadata::ILLEGAL; 256];

    let mut i = 0;
    while i < OFFICIAL_OPCODES.len() {
        let (opcode, mnemonic, mode) = OFFICIAL_OPCODES[i];
        table[opcode as usize] = OpcodeMetadata::new(mnemonic, mode);
        i += 1;
    }

    // $FF op: the operation code byte is read like an immediate operand
    table[EXTENSION_OPCODE as usize] =
        OpcodeMetadata::new(Mnemonic::Ext, AddressingMode::Immediate);

    table
}

/// Complete 256-entry opcode table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use interp6502::{Mnemonic, OPCODE_TABLE};
///
/// assert_eq!(OPCODE_TABLE[0x00].mnemonic, Mnemonic::Brk);
/// assert_eq!(OPCODE_TABLE[0x02].mnemonic, Mnemonic::Illegal);
/// assert_eq!(OPCODE_TABLE[0xFF].mnemonic, Mnemonic::Ext);
/// ```
pub static OPCODE_TABLE: [OpcodeMetadata; 256] = build_table();
