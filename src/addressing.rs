//! # Addressing Modes
//!
//! This module defines the 13 addressing modes supported by the 6502 processor
//! and the resolver that turns the operand bytes following an opcode into a
//! resolved operand.
//!
//! Resolution consumes the operand bytes: when it returns, the program counter
//! points at the next opcode. All address arithmetic wraps:
//!
//! - Zero Page,X / Zero Page,Y wrap modulo 256 and never leave page zero
//! - (Indirect,X) and (Indirect),Y read their pointer from page zero, with the
//!   pointer's high byte wrapping inside page zero as well
//! - Absolute,X / Absolute,Y / (Indirect),Y add the index modulo 0x10000
//! - Operand fetches advance the program counter modulo 0x10000

use crate::{MemoryBus, CPU};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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

    /// Zero page address indexed by X register, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit displacement for branch instructions.
    ///
    /// Example: BEQ label
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

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// A resolved operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operand {
    /// No operand (implied instructions).
    None,
    /// The accumulator register.
    Accumulator,
    /// The byte following the opcode.
    Immediate(u8),
    /// A branch displacement.
    Relative(i8),
    /// An effective memory address.
    Address(u16),
}

impl<M: MemoryBus> CPU<M> {
    /// Reads the byte at PC and advances PC by one.
    #[inline]
    pub(crate) fn fetch_byte(&mut self) -> u8 {
        let value = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Reads a little-endian word at PC and advances PC by two.
    #[inline]
    pub(crate) fn fetch_word(&mut self) -> u16 {
        let lo = self.fetch_byte() as u16;
        let hi = self.fetch_byte() as u16;
        (hi << 8) | lo
    }

    /// Consumes the operand bytes for `mode` and resolves them.
    pub(crate) fn resolve(&mut self, mode: AddressingMode) -> Operand {
        match mode {
            AddressingMode::Implicit => Operand::None,
            AddressingMode::Accumulator => Operand::Accumulator,
            AddressingMode::Immediate => Operand::Immediate(self.fetch_byte()),
            AddressingMode::Relative => Operand::Relative(self.fetch_byte() as i8),
            AddressingMode::ZeroPage => Operand::Address(self.fetch_byte() as u16),
            AddressingMode::ZeroPageX => {
                let base = self.fetch_byte();
                Operand::Address(base.wrapping_add(self.x) as u16)
            }
            AddressingMode::ZeroPageY => {
                let base = self.fetch_byte();
                Operand::Address(base.wrapping_add(self.y) as u16)
            }
            AddressingMode::Absolute => Operand::Address(self.fetch_word()),
            AddressingMode::AbsoluteX => {
                let base = self.fetch_word();
                Operand::Address(base.wrapping_add(self.x as u16))
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_word();
                Operand::Address(base.wrapping_add(self.y as u16))
            }
            AddressingMode::Indirect => {
                let ptr = self.fetch_word();
                Operand::Address(self.read_indirect_pointer(ptr))
            }
            AddressingMode::IndirectX => {
                let zp = self.fetch_byte().wrapping_add(self.x);
                Operand::Address(self.memory.read_u16_zero_page(zp))
            }
            AddressingMode::IndirectY => {
                let zp = self.fetch_byte();
                let base = self.memory.read_u16_zero_page(zp);
                Operand::Address(base.wrapping_add(self.y as u16))
            }
        }
    }

    /// Dereferences a JMP indirect pointer.
    ///
    /// With `indirect_jmp_page_wrap` set, a pointer at `$xxFF` takes its high
    /// byte from `$xx00` like the NMOS part does.
    fn read_indirect_pointer(&self, ptr: u16) -> u16 {
        if self.config.indirect_jmp_page_wrap && ptr & 0x00FF == 0x00FF {
            let lo = self.memory.read(ptr) as u16;
            let hi = self.memory.read(ptr & 0xFF00) as u16;
            (hi << 8) | lo
        } else {
            self.memory.read_u16(ptr)
        }
    }

    /// Resolves `mode` and reads the operand value.
    ///
    /// Implied operands read as the accumulator; the opcode table never pairs a
    /// reading instruction with `Implicit` or `Relative`.
    pub(crate) fn read_operand(&mut self, mode: AddressingMode) -> u8 {
        match self.resolve(mode) {
            Operand::Immediate(value) => value,
            Operand::Address(addr) => self.memory.read(addr),
            Operand::Relative(offset) => offset as u8,
            Operand::Accumulator | Operand::None => self.a,
        }
    }

    /// Resolves `mode` and writes `value` to the effective address.
    pub(crate) fn write_operand(&mut self, mode: AddressingMode, value: u8) {
        match self.resolve(mode) {
            Operand::Address(addr) => self.memory.write(addr, value),
            Operand::Accumulator => self.a = value,
            Operand::None | Operand::Immediate(_) | Operand::Relative(_) => {}
        }
    }

    /// Read-modify-write on the accumulator or a memory byte.
    ///
    /// Returns the value written back.
    pub(crate) fn modify_operand(
        &mut self,
        mode: AddressingMode,
        op: impl FnOnce(&mut Self, u8) -> u8,
    ) -> u8 {
        match self.resolve(mode) {
            Operand::Address(addr) => {
                let value = self.memory.read(addr);
                let result = op(self, value);
                self.memory.write(addr, result);
                result
            }
            Operand::Accumulator | Operand::None => {
                let value = self.a;
                let result = op(self, value);
                self.a = result;
                result
            }
            Operand::Immediate(value) => op(self, value),
            Operand::Relative(offset) => op(self, offset as u8),
        }
    }

    /// Resolves `mode` to an effective address, if it names one.
    pub(crate) fn effective_address(&mut self, mode: AddressingMode) -> Option<u16> {
        match self.resolve(mode) {
            Operand::Address(addr) => Some(addr),
            _ => None,
        }
    }
}
