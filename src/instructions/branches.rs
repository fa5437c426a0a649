//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! - BCC / BCS: Carry clear / set
//! - BEQ / BNE: Zero set / clear
//! - BMI / BPL: Negative set / clear
//! - BVC / BVS: Overflow clear / set
//!
//! All branches use relative addressing with a signed 8-bit displacement
//! added to the address of the next instruction. The displacement byte is
//! always consumed; the target wraps modulo 0x10000. No flags are affected.

use crate::addressing::Operand;
use crate::{AddressingMode, MemoryBus, CPU};

fn branch_if<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, taken: bool) {
    if let Operand::Relative(offset) = cpu.resolve(mode) {
        if taken {
            cpu.pc = cpu.pc.wrapping_add_signed(offset as i16);
        }
    }
}

/// Executes the BCC (Branch if Carry Clear) instruction.
pub(crate) fn execute_bcc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let taken = !cpu.flags.carry;
    branch_if(cpu, mode, taken);
}

/// Executes the BCS (Branch if Carry Set) instruction.
pub(crate) fn execute_bcs<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let taken = cpu.flags.carry;
    branch_if(cpu, mode, taken);
}

/// Executes the BEQ (Branch if Equal) instruction.
pub(crate) fn execute_beq<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let taken = cpu.flags.zero;
    branch_if(cpu, mode, taken);
}

/// Executes the BNE (Branch if Not Equal) instruction.
pub(crate) fn execute_bne<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let taken = !cpu.flags.zero;
    branch_if(cpu, mode, taken);
}

/// Executes the BMI (Branch if Minus) instruction.
pub(crate) fn execute_bmi<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let taken = cpu.flags.negative;
    branch_if(cpu, mode, taken);
}

/// Executes the BPL (Branch if Positive) instruction.
pub(crate) fn execute_bpl<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let taken = !cpu.flags.negative;
    branch_if(cpu, mode, taken);
}

/// Executes the BVC (Branch if Overflow Clear) instruction.
pub(crate) fn execute_bvc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let taken = !cpu.flags.overflow;
    branch_if(cpu, mode, taken);
}

/// Executes the BVS (Branch if Overflow Set) instruction.
pub(crate) fn execute_bvs<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let taken = cpu.flags.overflow;
    branch_if(cpu, mode, taken);
}
