//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: N, V, D, I, Z, C (see [`StatusFlags`])
//! - **Trace flag**: host-side switch for the trace observer, not part of the ISA
//!
//! ## Execution Model
//!
//! - `step()`: Execute one instruction
//! - `run()`: Step until the extension handler asks to stop or a trap halts
//! - `run_for()`: Step at most N instructions
//!
//! An illegal opcode halts the session for good: the error is recorded and
//! every later call returns it again without executing anything.

use crate::instructions;
use crate::opcodes::{Mnemonic, OPCODE_TABLE};
use crate::status::StatusFlags;
use crate::{ExecutionError, MemoryBus};

/// Base address of the stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Address of the little-endian BRK vector.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Session options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpuConfig {
    /// Initial state of the trace flag.
    pub trace_enabled: bool,

    /// Reproduce the NMOS JMP ($xxFF) bug: the pointer's high byte is read
    /// from $xx00 instead of the next page.
    pub indirect_jmp_page_wrap: bool,
}

/// What a successful `step()` asks of its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Keep stepping.
    Continue,
    /// The extension handler requested a stop during this instruction.
    Stopped,
}

/// Register and flag snapshot handed to the trace observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceSnapshot {
    /// Address of the opcode about to execute
    pub pc: u16,
    /// Accumulator
    pub a: u8,
    /// X index register
    pub x: u8,
    /// Y index register
    pub y: u8,
    /// Stack pointer
    pub sp: u8,
    /// Packed status byte, as PHP would push it
    pub status: u8,
    /// Opcode about to execute
    pub opcode: u8,
}

/// Observer called before each instruction while tracing is enabled.
pub trait TraceObserver {
    fn on_instruction(&mut self, snapshot: &TraceSnapshot);
}

impl<F: FnMut(&TraceSnapshot)> TraceObserver for F {
    fn on_instruction(&mut self, snapshot: &TraceSnapshot) {
        self(snapshot)
    }
}

/// Host handler for the extension opcode (`$FF op`).
///
/// `call` receives the operation byte and the accumulator and returns the new
/// accumulator. No flags are derived from the result.
pub trait ExtensionHandler {
    fn call(&mut self, operation: u8, a: u8) -> u8;

    /// Polled right after `call`; `true` ends the current `run()`.
    fn stop_requested(&self) -> bool {
        false
    }
}

impl<F: FnMut(u8, u8) -> u8> ExtensionHandler for F {
    fn call(&mut self, operation: u8, a: u8) -> u8 {
        self(operation, a)
    }
}

/// 6502 CPU state and execution context.
///
/// Generic over the memory implementation via the `MemoryBus` trait.
///
/// # Examples
///
/// ```
/// use interp6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x8000, &[0xA9, 0x00]); // LDA #$00
///
/// let mut cpu = CPU::new(memory, 0x8000);
/// assert_eq!(cpu.sp(), 0xFF);
/// assert_eq!(cpu.status(), 0x3C);
///
/// cpu.step().unwrap();
/// assert!(cpu.flag_z());
/// assert_eq!(cpu.pc(), 0x8002);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    pub(crate) flags: StatusFlags,

    pub(crate) config: CpuConfig,

    pub(crate) trace_enabled: bool,

    /// Set by the extension hook, consumed at the end of `step()`
    pub(crate) stop_requested: bool,

    /// Trap that ended the session, if any
    halted: Option<ExecutionError>,

    /// Instructions executed since session start
    instructions: u64,

    observer: Option<Box<dyn TraceObserver>>,

    pub(crate) extension: Option<Box<dyn ExtensionHandler>>,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Starts a session at `pc` with the default configuration.
    ///
    /// A, X and Y start at zero and SP at 0xFF. D and I start set, N, V, Z
    /// and C clear, so the packed status byte reads 0x3C. Memory contents are
    /// not inspected.
    pub fn new(memory: M, pc: u16) -> Self {
        Self::with_config(memory, pc, CpuConfig::default())
    }

    /// Starts a session at `pc` with an explicit configuration.
    pub fn with_config(memory: M, pc: u16, config: CpuConfig) -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc,
            sp: 0xFF,
            flags: StatusFlags {
                decimal: true,
                interrupt_disable: true,
                ..StatusFlags::default()
            },
            config,
            trace_enabled: config.trace_enabled,
            stop_requested: false,
            halted: None,
            instructions: 0,
            observer: None,
            extension: None,
            memory,
        }
    }

    /// Executes one instruction.
    ///
    /// 1. Notify the trace observer (if tracing is enabled and one is attached)
    /// 2. Fetch the opcode at PC and advance PC
    /// 3. Look up the opcode table and execute the handler
    ///
    /// # Errors
    ///
    /// `IllegalOpcode` when the opcode has no instruction. PC is left at the
    /// faulting opcode and the session stays halted.
    ///
    /// # Examples
    ///
    /// ```
    /// use interp6502::{CPU, ExecutionError, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0x8000, 0x02);
    ///
    /// let mut cpu = CPU::new(mem, 0x8000);
    /// assert_eq!(
    ///     cpu.step(),
    ///     Err(ExecutionError::IllegalOpcode { opcode: 0x02, pc: 0x8000 })
    /// );
    /// ```
    pub fn step(&mut self) -> Result<StepOutcome, ExecutionError> {
        if let Some(error) = &self.halted {
            return Err(error.clone());
        }

        if self.trace_enabled {
            let snapshot = self.snapshot();
            if let Some(observer) = self.observer.as_mut() {
                observer.on_instruction(&snapshot);
            }
        }

        let fetch_pc = self.pc;
        let opcode = self.fetch_byte();
        let metadata = &OPCODE_TABLE[opcode as usize];

        if metadata.mnemonic == Mnemonic::Illegal {
            self.pc = fetch_pc;
            let error = ExecutionError::IllegalOpcode {
                opcode,
                pc: fetch_pc,
            };
            log::error!("{error}, halting");
            self.halted = Some(error.clone());
            return Err(error);
        }

        log::trace!("{fetch_pc:04X}  {opcode:02X}  {}", metadata.mnemonic);

        instructions::execute(self, metadata.mnemonic, metadata.addressing_mode);
        self.instructions += 1;

        if std::mem::take(&mut self.stop_requested) {
            Ok(StepOutcome::Stopped)
        } else {
            Ok(StepOutcome::Continue)
        }
    }

    /// Steps until the extension handler requests a stop.
    ///
    /// Returns the number of instructions executed by this call.
    ///
    /// # Errors
    ///
    /// Propagates the `IllegalOpcode` trap.
    pub fn run(&mut self) -> Result<u64, ExecutionError> {
        let start = self.instructions;

        while self.step()? == StepOutcome::Continue {}

        Ok(self.instructions - start)
    }

    /// Steps at most `max_instructions` times, stopping early on request.
    ///
    /// Returns the number of instructions executed by this call.
    ///
    /// # Errors
    ///
    /// Propagates the `IllegalOpcode` trap.
    pub fn run_for(&mut self, max_instructions: u64) -> Result<u64, ExecutionError> {
        let start = self.instructions;

        for _ in 0..max_instructions {
            if self.step()? == StepOutcome::Stopped {
                break;
            }
        }

        Ok(self.instructions - start)
    }

    fn snapshot(&self) -> TraceSnapshot {
        TraceSnapshot {
            pc: self.pc,
            a: self.a,
            x: self.x,
            y: self.y,
            sp: self.sp,
            status: self.flags.to_byte(),
            opcode: self.memory.read(self.pc),
        }
    }

    // ========== Stack ==========

    /// Pushes a byte at 0x0100 | SP, then decrements SP modulo 256.
    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Increments SP modulo 256, then reads the byte at 0x0100 | SP.
    pub(crate) fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_BASE | self.sp as u16)
    }

    /// Pushes high byte then low byte.
    pub(crate) fn push_u16(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push(value as u8);
    }

    /// Pulls low byte then high byte.
    pub(crate) fn pull_u16(&mut self) -> u16 {
        let lo = self.pull() as u16;
        let hi = self.pull() as u16;
        (hi << 8) | lo
    }

    // ========== Session ==========

    /// Returns the trap that halted this session, if any.
    pub fn halted(&self) -> Option<&ExecutionError> {
        self.halted.as_ref()
    }

    /// Returns the number of instructions executed since session start.
    pub fn instructions(&self) -> u64 {
        self.instructions
    }

    /// Returns the options this session was started with.
    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    /// Returns true while the trace observer is being called.
    pub fn trace_enabled(&self) -> bool {
        self.trace_enabled
    }

    /// Turns observer calls on or off, as `$FF $FF` does.
    pub fn set_trace_enabled(&mut self, enabled: bool) {
        self.trace_enabled = enabled;
    }

    /// Attaches the trace observer, replacing any previous one.
    pub fn set_trace_observer(&mut self, observer: impl TraceObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Detaches the trace observer.
    pub fn clear_trace_observer(&mut self) {
        self.observer = None;
    }

    /// Attaches the extension handler, replacing any previous one.
    ///
    /// # Examples
    ///
    /// ```
    /// use interp6502::{CPU, FlatMemory};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.load(0x8000, &[0xA9, 0x20, 0xFF, 0x01]); // LDA #$20; EXT $01
    ///
    /// let mut cpu = CPU::new(memory, 0x8000);
    /// cpu.set_extension_handler(|op: u8, a: u8| a + op);
    ///
    /// cpu.run_for(2).unwrap();
    /// assert_eq!(cpu.a(), 0x21);
    /// ```
    pub fn set_extension_handler(&mut self, handler: impl ExtensionHandler + 'static) {
        self.extension = Some(Box::new(handler));
    }

    /// Detaches the extension handler; `$FF` then leaves A unchanged.
    pub fn clear_extension_handler(&mut self) {
        self.extension = None;
    }

    /// Returns a shared reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Ends the session and hands the memory back.
    pub fn into_memory(self) -> M {
        self.memory
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as a packed byte (bits 4 and 5 always set).
    pub fn status(&self) -> u8 {
        self.flags.to_byte()
    }

    /// Returns the unpacked status flags.
    pub fn flags(&self) -> StatusFlags {
        self.flags
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flags.negative
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flags.overflow
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.flags.decimal
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flags.interrupt_disable
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flags.zero
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flags.carry
    }

    // ========== Setters ==========

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Loads the flags from a packed status byte, as PLP does.
    pub fn set_status(&mut self, status: u8) {
        self.flags = StatusFlags::from_byte(status);
    }

    /// Replaces all six stored flags.
    pub fn set_flags(&mut self, flags: StatusFlags) {
        self.flags = flags;
    }

    /// Sets or clears the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.flags.negative = value;
    }

    /// Sets or clears the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.flags.overflow = value;
    }

    /// Sets or clears the Decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.flags.decimal = value;
    }

    /// Sets or clears the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.flags.interrupt_disable = value;
    }

    /// Sets or clears the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.flags.zero = value;
    }

    /// Sets or clears the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.flags.carry = value;
    }
}
