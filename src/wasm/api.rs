//! WASM API for the 6502 interpreter.
//!
//! Provides JavaScript-callable interfaces for session control, program
//! loading, state inspection and the extension hook.

use crate::{ExtensionHandler, FlatMemory, MemoryBus, StepOutcome, CPU};
use wasm_bindgen::prelude::*;

/// Extension handler backed by a JavaScript function `(op, a) => a`.
///
/// A non-numeric return value leaves the accumulator unchanged.
struct JsExtension {
    callback: js_sys::Function,
}

impl ExtensionHandler for JsExtension {
    fn call(&mut self, operation: u8, a: u8) -> u8 {
        self.callback
            .call2(&JsValue::NULL, &JsValue::from(operation), &JsValue::from(a))
            .ok()
            .and_then(|value| value.as_f64())
            .map_or(a, accumulator_from_js)
    }
}

/// Truncates a JavaScript number to its low 8 bits, so 300 gives 0x2C and -1
/// gives 0xFF.
fn accumulator_from_js(value: f64) -> u8 {
    value as i64 as u8
}

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator6502 {
    cpu: CPU<FlatMemory>,
    extension: Option<js_sys::Function>,
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Start a session at `start_pc` over zeroed memory
    #[wasm_bindgen(constructor)]
    pub fn new(start_pc: u16) -> Self {
        Emulator6502 {
            cpu: CPU::new(FlatMemory::new(), start_pc),
            extension: None,
        }
    }

    /// Copy a program image into memory
    pub fn load(&mut self, start: u16, bytes: &[u8]) {
        self.cpu.memory_mut().load(start, bytes);
    }

    /// Start a fresh session at `start_pc`, keeping memory contents
    pub fn restart(&mut self, start_pc: u16) {
        let previous = std::mem::replace(&mut self.cpu, CPU::new(FlatMemory::new(), start_pc));
        self.cpu = CPU::new(previous.into_memory(), start_pc);
        if let Some(callback) = self.extension.clone() {
            self.cpu.set_extension_handler(JsExtension { callback });
        }
    }

    /// Route the extension opcode to `callback(op, a)`
    pub fn set_extension_handler(&mut self, callback: js_sys::Function) {
        self.extension = Some(callback.clone());
        self.cpu.set_extension_handler(JsExtension { callback });
    }

    /// Execute a single instruction; returns true if the host asked to stop
    pub fn step(&mut self) -> Result<bool, JsError> {
        self.cpu
            .step()
            .map(|outcome| outcome == StepOutcome::Stopped)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Execute up to `max_instructions` and return how many ran
    pub fn run_for(&mut self, max_instructions: u32) -> Result<u32, JsError> {
        self.cpu
            .run_for(max_instructions as u64)
            .map(|count| count as u32)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.memory().read(addr)
    }

    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.memory_mut().write(addr, value);
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    #[wasm_bindgen(getter)]
    pub fn instructions(&self) -> f64 {
        self.cpu.instructions() as f64 // Convert u64 to f64 for JavaScript
    }

    #[wasm_bindgen(getter)]
    pub fn trace_enabled(&self) -> bool {
        self.cpu.trace_enabled()
    }

    /// Message of the trap that halted the session, if any
    #[wasm_bindgen(getter)]
    pub fn halted(&self) -> Option<String> {
        self.cpu.halted().map(|e| e.to_string())
    }
}
