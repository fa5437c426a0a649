//! # Processor Status Flags
//!
//! Converts between the packed 8-bit status byte (as pushed by PHP and BRK
//! and pulled by PLP and RTI) and the discrete flags the CPU works with.
//!
//! Bit layout (NV1BDIZC):
//! - Bit 7: N (Negative)
//! - Bit 6: V (Overflow)
//! - Bit 5: unused, always 1 when serialized
//! - Bit 4: B (Break), always 1 when serialized
//! - Bit 3: D (Decimal)
//! - Bit 2: I (Interrupt Disable)
//! - Bit 1: Z (Zero)
//! - Bit 0: C (Carry)
//!
//! Break and the unused bit have no storage. They exist only in the byte
//! produced by [`StatusFlags::to_byte`] and are discarded by
//! [`StatusFlags::from_byte`].

/// Negative flag bit.
pub const NEGATIVE: u8 = 0b1000_0000;
/// Overflow flag bit.
pub const OVERFLOW: u8 = 0b0100_0000;
/// Unused bit, reads as 1.
pub const UNUSED: u8 = 0b0010_0000;
/// Break bit, set in every serialized status byte.
pub const BREAK: u8 = 0b0001_0000;
/// Decimal mode flag bit.
pub const DECIMAL: u8 = 0b0000_1000;
/// Interrupt disable flag bit.
pub const INTERRUPT: u8 = 0b0000_0100;
/// Zero flag bit.
pub const ZERO: u8 = 0b0000_0010;
/// Carry flag bit.
pub const CARRY: u8 = 0b0000_0001;

/// The architecturally stored processor flags.
///
/// N, Z, C and V are derived from the last flag-affecting result. D and I are
/// sticky: only the flag instructions, BRK, PLP and RTI change them.
///
/// # Examples
///
/// ```
/// use interp6502::StatusFlags;
///
/// let flags = StatusFlags { carry: true, negative: true, ..Default::default() };
/// assert_eq!(flags.to_byte(), 0b1011_0001);
/// assert_eq!(StatusFlags::from_byte(flags.to_byte()), flags);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusFlags {
    /// Negative (bit 7 of the last result)
    pub negative: bool,
    /// Signed overflow
    pub overflow: bool,
    /// Decimal mode (stored, but arithmetic stays binary)
    pub decimal: bool,
    /// Interrupt disable
    pub interrupt_disable: bool,
    /// Zero
    pub zero: bool,
    /// Carry / not-borrow
    pub carry: bool,
}

impl StatusFlags {
    /// Packs the flags into a status byte with Break and bit 5 forced to 1.
    pub const fn to_byte(self) -> u8 {
        let mut status = UNUSED | BREAK;

        if self.negative {
            status |= NEGATIVE;
        }
        if self.overflow {
            status |= OVERFLOW;
        }
        if self.decimal {
            status |= DECIMAL;
        }
        if self.interrupt_disable {
            status |= INTERRUPT;
        }
        if self.zero {
            status |= ZERO;
        }
        if self.carry {
            status |= CARRY;
        }

        status
    }

    /// Unpacks a status byte. Break and bit 5 are ignored.
    pub const fn from_byte(status: u8) -> Self {
        Self {
            negative: status & NEGATIVE != 0,
            overflow: status & OVERFLOW != 0,
            decimal: status & DECIMAL != 0,
            interrupt_disable: status & INTERRUPT != 0,
            zero: status & ZERO != 0,
            carry: status & CARRY != 0,
        }
    }

    /// Sets N and Z from an 8-bit result.
    #[inline]
    pub fn set_nz(&mut self, value: u8) {
        self.zero = value == 0;
        self.negative = value & 0x80 != 0;
    }
}
