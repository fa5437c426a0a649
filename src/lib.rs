//! # 6502 Instruction Interpreter
//!
//! An embeddable NMOS 6502 interpreter that runs machine code against a flat
//! 64KB memory image.
//!
//! The crate is the interpretation core only: opcode fetch and dispatch,
//! effective-address resolution for every addressing mode, the status flag
//! model, and the semantics of every official opcode. Bootstrap, printing and
//! the origin of the memory buffer belong to the host.
//!
//! ## Quick Start
//!
//! ```rust
//! use interp6502::{CPU, FlatMemory, MemoryBus, StepOutcome};
//!
//! let mut memory = FlatMemory::new();
//! // LDA #$7F; ADC #$01
//! memory.load(0x0600, &[0xA9, 0x7F, 0x69, 0x01]);
//!
//! let mut cpu = CPU::new(memory, 0x0600);
//! assert_eq!(cpu.step(), Ok(StepOutcome::Continue));
//! assert_eq!(cpu.step(), Ok(StepOutcome::Continue));
//!
//! assert_eq!(cpu.a(), 0x80);
//! assert!(cpu.flag_v());
//! assert!(cpu.flag_n());
//! ```
//!
//! ## Host Hooks
//!
//! - [`TraceObserver`]: called with a [`TraceSnapshot`] before every
//!   instruction while tracing is enabled
//! - [`ExtensionHandler`]: receives `$FF op` with the accumulator and returns
//!   the new accumulator; `$FF $FF` toggles tracing instead
//!
//! ## Limitations
//!
//! - Decimal mode is stored but ADC/SBC always compute in binary.
//! - IRQ and NMI lines are not modelled.
//! - No cycle counting.
//!
//! ## Modules
//!
//! - `cpu` - CPU state and execution logic
//! - `memory` - MemoryBus trait and implementations
//! - `opcodes` - Opcode table
//! - `addressing` - Addressing modes and operand resolution
//! - `status` - Status byte packing

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod status;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::{
    CpuConfig, ExtensionHandler, StepOutcome, TraceObserver, TraceSnapshot, CPU, IRQ_VECTOR,
    STACK_BASE,
};
pub use instructions::extension::TRACE_TOGGLE;
pub use memory::{FlatMemory, MemoryBus, MEMORY_SIZE};
pub use opcodes::{Mnemonic, OpcodeMetadata, EXTENSION_OPCODE, OPCODE_TABLE};
pub use status::StatusFlags;

/// Errors that end an execution session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// The fetched opcode has no instruction.
    ///
    /// `pc` is the address the opcode was fetched from.
    #[error("illegal opcode 0x{opcode:02X} at 0x{pc:04X}")]
    IllegalOpcode { opcode: u8, pc: u16 },
}
