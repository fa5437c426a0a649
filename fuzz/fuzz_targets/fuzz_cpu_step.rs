//! Fuzz target for CPU step execution.
//!
//! Builds an arbitrary CPU state and memory layout, executes a few
//! instructions, and checks that every step either continues or halts with
//! `IllegalOpcode` at a legal opcode slot.

#![no_main]

use arbitrary::Arbitrary;
use interp6502::{ExecutionError, FlatMemory, Mnemonic, CPU, OPCODE_TABLE};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    pc: u16,
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    /// Packed status byte, loaded as PLP would
    status: u8,
    trace_enabled: bool,
}

/// Memory region for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instructions + operands)
    instruction_bytes: [u8; 8],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// BRK vector
    irq_vector: u16,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();

    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(0xFFFE, &input.memory.irq_vector.to_le_bytes());
    // Instructions last so they win over overlapping regions
    memory.load(input.cpu_state.pc, &input.memory.instruction_bytes);

    let mut cpu = CPU::new(memory, input.cpu_state.pc);
    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);
    cpu.set_trace_enabled(input.cpu_state.trace_enabled);
    cpu.set_trace_observer(|_: &interp6502::TraceSnapshot| {});
    cpu.set_extension_handler(|op: u8, a: u8| op ^ a);

    for _ in 0..4 {
        match cpu.step() {
            Ok(_) => {
                // Bits 4 and 5 are synthesized on every read
                assert_eq!(cpu.status() & 0x30, 0x30);
            }
            Err(ExecutionError::IllegalOpcode { opcode, pc }) => {
                assert_eq!(OPCODE_TABLE[opcode as usize].mnemonic, Mnemonic::Illegal);
                assert_eq!(cpu.pc(), pc);
                assert!(cpu.step().is_err());
                break;
            }
        }
    }
});
