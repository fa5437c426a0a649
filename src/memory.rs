//! # Memory Bus Abstraction
//!
//! The interpreter reaches memory only through the `MemoryBus` trait. The
//! address space is flat and exactly 64KB; the CPU never resizes or
//! reallocates it.
//!
//! Two 16-bit little-endian reads are provided on top of the byte accessors:
//!
//! - `read_u16`: high byte from `addr + 1`, wrapping from 0xFFFF to 0x0000
//! - `read_u16_zero_page`: high byte from `(addr + 1) & 0xFF`, never leaving
//!   page zero

/// Size of the 6502 address space in bytes.
pub const MEMORY_SIZE: usize = 0x10000;

/// Memory bus trait for CPU to read/write bytes.
///
/// Implementations provide the memory backend for the CPU. Reads and writes
/// always succeed; the 6502 has no bus error mechanism.
///
/// # Examples
///
/// ```
/// use interp6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Lending a buffer to a session
///
/// `&mut T` is itself a bus, so a host can keep ownership of its memory:
///
/// ```
/// use interp6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x8000, 0xEA); // NOP
///
/// {
///     let mut cpu = CPU::new(&mut mem, 0x8000);
///     cpu.step().unwrap();
///     assert_eq!(cpu.pc(), 0x8001);
/// }
///
/// assert_eq!(mem.read(0x8000), 0xEA);
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian 16-bit value at `addr`.
    ///
    /// The high byte comes from `addr + 1` modulo 0x10000, so a read at
    /// 0xFFFF takes its high byte from 0x0000.
    fn read_u16(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Reads a little-endian 16-bit pointer stored in page zero.
    ///
    /// The high byte comes from `(zp_addr + 1) mod 256`.
    fn read_u16_zero_page(&self, zp_addr: u8) -> u16 {
        let lo = self.read(zp_addr as u16) as u16;
        let hi = self.read(zp_addr.wrapping_add(1) as u16) as u16;
        (hi << 8) | lo
    }
}

impl<T: MemoryBus + ?Sized> MemoryBus for &mut T {
    fn read(&self, addr: u16) -> u8 {
        (**self).read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        (**self).write(addr, value);
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses map to a single contiguous RAM array.
///
/// # Examples
///
/// ```
/// use interp6502::{CPU, FlatMemory};
///
/// // LDA #$42
/// let mut memory = FlatMemory::new();
/// memory.load(0x0600, &[0xA9, 0x42]);
///
/// let mut cpu = CPU::new(memory, 0x0600);
/// cpu.step().unwrap();
/// assert_eq!(cpu.a(), 0x42);
/// ```
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; MEMORY_SIZE]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; MEMORY_SIZE]),
        }
    }

    /// Wraps a caller-supplied 64KB image without copying it.
    pub fn from_image(image: Box<[u8; MEMORY_SIZE]>) -> Self {
        Self { data: image }
    }

    /// Copies `bytes` into memory starting at `start`.
    ///
    /// Bytes past 0xFFFF wrap around to 0x0000, the same way the program
    /// counter does.
    pub fn load(&mut self, start: u16, bytes: &[u8]) {
        let mut addr = start;
        for &byte in bytes {
            self.data[addr as usize] = byte;
            addr = addr.wrapping_add(1);
        }
    }

    /// Returns the underlying image, ending the memory's use as a bus.
    pub fn into_image(self) -> Box<[u8; MEMORY_SIZE]> {
        self.data
    }

    /// Read-only view of the whole address space.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
