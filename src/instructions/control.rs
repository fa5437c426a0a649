//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address
//! - JSR / RTS: Subroutine call and return
//! - BRK / RTI: Software interrupt and return
//!
//! JSR pushes the address of its own last byte (high byte first); RTS pulls
//! it and adds one. BRK skips its padding byte, pushes PC and the status
//! byte (B set), sets I and loads PC from the vector at $FFFE/F.

use crate::cpu::IRQ_VECTOR;
use crate::status::StatusFlags;
use crate::{AddressingMode, MemoryBus, CPU};

/// Executes the JMP (Jump) instruction.
///
/// Addressing modes:
/// - Absolute (0x4C): JMP $1234
/// - Indirect (0x6C): JMP ($1234), see `CpuConfig::indirect_jmp_page_wrap`
///
/// Flags affected: None
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    if let Some(target) = cpu.effective_address(mode) {
        cpu.pc = target;
    }
}

/// Executes the JSR (Jump to Subroutine) instruction.
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>) {
    let target = cpu.fetch_word();

    // PC now points past the operand; push the address of its last byte
    let return_address = cpu.pc.wrapping_sub(1);
    cpu.push_u16(return_address);

    cpu.pc = target;
}

/// Executes the RTS (Return from Subroutine) instruction.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.pc = cpu.pull_u16().wrapping_add(1);
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// Flags affected:
/// - B: Set in the pushed status byte only
/// - I: Set to 1
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>) {
    // Padding byte is ignored
    cpu.fetch_byte();

    cpu.push_u16(cpu.pc);
    cpu.push(cpu.flags.to_byte());

    cpu.flags.interrupt_disable = true;
    cpu.pc = cpu.memory.read_u16(IRQ_VECTOR);
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Restores N, V, D, I, Z and C from the stack, then PC. Unlike RTS, the
/// pulled PC is used as is.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.pull();
    cpu.flags = StatusFlags::from_byte(status);
    cpu.pc = cpu.pull_u16();
}
