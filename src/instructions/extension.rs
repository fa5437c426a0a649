//! # Extension Hook
//!
//! `$FF op` hands `op` and the accumulator to the host's
//! [`ExtensionHandler`](crate::ExtensionHandler); its return value becomes the
//! new accumulator. No flags change on this path.
//!
//! `$FF $FF` is handled here and never reaches the host: it toggles the trace
//! flag.

use crate::{AddressingMode, MemoryBus, CPU};

/// Operation code that toggles tracing instead of calling the handler.
pub const TRACE_TOGGLE: u8 = 0xFF;

pub(crate) fn execute_ext<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let operation = cpu.read_operand(mode);

    if operation == TRACE_TOGGLE {
        cpu.trace_enabled = !cpu.trace_enabled;
        log::debug!(
            "trace {} at {:04X}",
            if cpu.trace_enabled { "on" } else { "off" },
            cpu.pc.wrapping_sub(2)
        );
        return;
    }

    let a = cpu.a;
    match cpu.extension.as_mut() {
        Some(handler) => {
            let result = handler.call(operation, a);
            let stop = handler.stop_requested();
            cpu.a = result;
            if stop {
                log::debug!("host requested stop after extension op {operation:02X}");
                cpu.stop_requested = true;
            }
        }
        None => {
            log::warn!(
                "extension op {operation:02X} at {:04X} with no handler attached",
                cpu.pc.wrapping_sub(2)
            );
        }
    }
}
