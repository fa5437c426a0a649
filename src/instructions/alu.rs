//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic, logic and compare operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic into the accumulator
//! - BIT: Bit test
//! - CMP, CPX, CPY: Compare register with memory
//!
//! ADC and SBC are binary only. The D flag is stored and pushed like any other
//! flag but never changes how the sum is computed.

use crate::{AddressingMode, MemoryBus, CPU};

/// Adds `value` and the carry flag to the accumulator, updating N, V, Z, C.
fn add_with_carry<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.a;
    let carry_in = cpu.flags.carry as u16;

    let result16 = a as u16 + value as u16 + carry_in;
    let result = result16 as u8;

    // Carry flag: Set if result > 255
    cpu.flags.carry = result16 > 0xFF;

    // Overflow: both inputs share a sign that differs from the result's
    cpu.flags.overflow = (a ^ result) & (value ^ result) & 0x80 != 0;

    cpu.flags.set_nz(result);
    cpu.a = result;
}

/// Sets N, Z and C as `register - value` would. V is left alone.
fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, value: u8) {
    let result = register.wrapping_sub(value);
    cpu.flags.carry = register >= value;
    cpu.flags.set_nz(result);
}

/// Executes the ADC (Add with Carry) instruction.
///
/// Flags affected: N, V, Z, C
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    add_with_carry(cpu, value);
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// `A - M - (1 - C)` is computed as `A + !M + C`, so C ends up set when no
/// borrow occurred.
///
/// Flags affected: N, V, Z, C
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    add_with_carry(cpu, !value);
}

/// Executes the AND (Logical AND) instruction.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    cpu.a &= value;
    cpu.flags.set_nz(cpu.a);
}

/// Executes the ORA (Logical Inclusive OR) instruction.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    cpu.a |= value;
    cpu.flags.set_nz(cpu.a);
}

/// Executes the EOR (Exclusive OR) instruction.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    cpu.a ^= value;
    cpu.flags.set_nz(cpu.a);
}

/// Executes the BIT (Bit Test) instruction.
///
/// - Z: set if `A & M` is zero (the AND result is discarded)
/// - N: bit 7 of M
/// - V: bit 6 of M
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    cpu.flags.zero = cpu.a & value == 0;
    cpu.flags.negative = value & 0x80 != 0;
    cpu.flags.overflow = value & 0x40 != 0;
}

/// Executes the CMP (Compare Accumulator) instruction.
///
/// Flags affected: N, Z, C. V keeps its previous value.
pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    let register = cpu.a;
    compare(cpu, register, value);
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    let register = cpu.x;
    compare(cpu, register, value);
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    let register = cpu.y;
    compare(cpu, register, value);
}
