//! WebAssembly bindings for the interpreter.
//!
//! This module provides JavaScript-callable interfaces to the 6502 CPU,
//! enabling browser-based execution of 6502 machine code.

#[cfg(feature = "wasm")]
pub mod api;

#[cfg(feature = "wasm")]
pub use api::Emulator6502;
