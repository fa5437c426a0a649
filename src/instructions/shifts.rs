//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each works on the accumulator or a memory byte (read-modify-write). The bit
//! shifted out lands in C; N and Z come from the 8-bit result.

use crate::{AddressingMode, MemoryBus, CPU};

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 0 is set to 0 and bit 7 is placed in the carry flag.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let result = cpu.modify_operand(mode, |cpu, value| {
        cpu.flags.carry = value & 0x80 != 0;
        value << 1
    });
    cpu.flags.set_nz(result);
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 7 is set to 0 and bit 0 is placed in the carry flag, so N always ends
/// up clear.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let result = cpu.modify_operand(mode, |cpu, value| {
        cpu.flags.carry = value & 0x01 != 0;
        value >> 1
    });
    cpu.flags.set_nz(result);
}

/// Executes the ROL (Rotate Left) instruction.
///
/// The old carry enters bit 0; old bit 7 becomes the new carry.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let result = cpu.modify_operand(mode, |cpu, value| {
        let carry_in = cpu.flags.carry as u8;
        cpu.flags.carry = value & 0x80 != 0;
        (value << 1) | carry_in
    });
    cpu.flags.set_nz(result);
}

/// Executes the ROR (Rotate Right) instruction.
///
/// The old carry enters bit 7; old bit 0 becomes the new carry.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let result = cpu.modify_operand(mode, |cpu, value| {
        let carry_in = cpu.flags.carry as u8;
        cpu.flags.carry = value & 0x01 != 0;
        (value >> 1) | (carry_in << 7)
    });
    cpu.flags.set_nz(result);
}
