//! Session start tests.

use interp6502::{CpuConfig, FlatMemory, MemoryBus, CPU};

#[test]
fn test_registers_after_start() {
    let cpu = CPU::new(FlatMemory::new(), 0x1234);

    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.x(), 0x00);
    assert_eq!(cpu.y(), 0x00);
    assert_eq!(cpu.sp(), 0xFF);
}

#[test]
fn test_flags_after_start() {
    let cpu = CPU::new(FlatMemory::new(), 0x0000);

    assert!(!cpu.flag_n());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_c());

    // D and I come up set
    assert!(cpu.flag_d() && cpu.flag_i());

    // Break and bit 5 are synthesized
    assert_eq!(cpu.status(), 0x3C);
}

#[test]
fn test_cld_cli_clear_start_flags() {
    let mut memory = FlatMemory::new();
    memory.load(0x8000, &[0xD8, 0x58]); // CLD; CLI

    let mut cpu = CPU::new(memory, 0x8000);
    cpu.run_for(2).unwrap();

    assert!(!cpu.flag_d());
    assert!(!cpu.flag_i());
    assert_eq!(cpu.status(), 0x30);
}

#[test]
fn test_with_config_sets_start_flags() {
    let config = CpuConfig {
        indirect_jmp_page_wrap: true,
        ..CpuConfig::default()
    };
    let cpu = CPU::with_config(FlatMemory::new(), 0x0200, config);

    assert_eq!(cpu.status(), 0x3C);
}

#[test]
fn test_start_does_not_touch_memory() {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);

    // PC comes from the caller, not the reset vector
    let cpu = CPU::new(memory, 0x0600);
    assert_eq!(cpu.pc(), 0x0600);
    assert_eq!(cpu.memory().read(0xFFFD), 0x80);
}

#[test]
fn test_default_config() {
    let cpu = CPU::new(FlatMemory::new(), 0);

    assert_eq!(cpu.config(), &CpuConfig::default());
    assert!(!cpu.trace_enabled());
    assert!(!cpu.config().indirect_jmp_page_wrap);
}

#[test]
fn test_borrowed_memory_outlives_session() {
    let mut memory = FlatMemory::new();
    memory.load(0x8000, &[0xA9, 0x42, 0x8D, 0x00, 0x20]); // LDA #$42; STA $2000

    {
        let mut cpu = CPU::new(&mut memory, 0x8000);
        cpu.run_for(2).unwrap();
    }

    assert_eq!(memory.read(0x2000), 0x42);
}
