//! Tests for the ADC (Add with Carry) instruction.
//!
//! Tests cover:
//! - All 8 addressing modes
//! - Carry in and carry out
//! - Signed overflow in both directions
//! - Decimal flag ignored (binary arithmetic only)

use interp6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with `program` loaded at 0x8000
fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.load(0x8000, program);
    CPU::new(memory, 0x8000)
}

// ========== Basic ADC Operation Tests ==========

#[test]
fn test_adc_immediate_basic() {
    let mut cpu = setup_cpu(&[0x69, 0x05]);
    cpu.set_a(0x10);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x15);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_adc_with_carry_in() {
    let mut cpu = setup_cpu(&[0x69, 0x05]);
    cpu.set_a(0x10);
    cpu.set_flag_c(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x16);
    assert!(!cpu.flag_c());
}

// ========== Flag Tests ==========

#[test]
fn test_adc_positive_overflow() {
    let mut cpu = setup_cpu(&[0x69, 0x01]);
    cpu.set_a(0x7F);
    cpu.set_flag_c(false);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_v());
    assert!(cpu.flag_n());
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
}

#[test]
fn test_adc_negative_overflow() {
    // -128 + -1 = +127 with overflow
    let mut cpu = setup_cpu(&[0x69, 0xFF]);
    cpu.set_a(0x80);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x7F);
    assert!(cpu.flag_v());
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
}

#[test]
fn test_adc_carry_out_to_zero() {
    let mut cpu = setup_cpu(&[0x69, 0x01]);
    cpu.set_a(0xFF);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_v());
}

#[test]
fn test_adc_mixed_signs_never_overflow() {
    let mut cpu = setup_cpu(&[0x69, 0x90]);
    cpu.set_a(0x50);
    cpu.set_flag_v(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xE0);
    assert!(!cpu.flag_v());
}

#[test]
fn test_adc_ignores_decimal_flag() {
    let mut cpu = setup_cpu(&[0x69, 0x01]);
    cpu.set_a(0x09);
    cpu.set_flag_d(true);

    cpu.step().unwrap();

    // BCD would give 0x10
    assert_eq!(cpu.a(), 0x0A);
    assert!(cpu.flag_d());
}

// ========== Addressing Mode Tests ==========

#[test]
fn test_adc_memory_modes() {
    let mut cpu = setup_cpu(&[
        0x65, 0x10, // ADC $10
        0x75, 0x10, // ADC $10,X
        0x6D, 0x00, 0x20, // ADC $2000
        0x7D, 0x00, 0x20, // ADC $2000,X
        0x79, 0x00, 0x20, // ADC $2000,Y
        0x61, 0x30, // ADC ($30,X)
        0x71, 0x40, // ADC ($40),Y
    ]);
    cpu.set_x(0x01);
    cpu.set_y(0x02);
    let mem = cpu.memory_mut();
    mem.write(0x0010, 0x01);
    mem.write(0x0011, 0x02);
    mem.write(0x2000, 0x04);
    mem.write(0x2001, 0x08);
    mem.write(0x2002, 0x10);
    mem.write(0x0031, 0x00);
    mem.write(0x0032, 0x50);
    mem.write(0x5000, 0x20);
    mem.write(0x0040, 0x00);
    mem.write(0x0041, 0x60);
    mem.write(0x6002, 0x40);

    cpu.run_for(7).unwrap();

    assert_eq!(cpu.a(), 0x7F);
    assert!(!cpu.flag_c());
    assert_eq!(cpu.pc(), 0x8011);
}

#[test]
fn test_adc_multi_byte_addition() {
    // 0x01FF + 0x0001 using the carry between bytes
    let mut cpu = setup_cpu(&[
        0x18, // CLC
        0xA9, 0xFF, // LDA #$FF
        0x69, 0x01, // ADC #$01
        0x85, 0x00, // STA $00
        0xA9, 0x01, // LDA #$01
        0x69, 0x00, // ADC #$00
        0x85, 0x01, // STA $01
    ]);

    cpu.run_for(7).unwrap();

    assert_eq!(cpu.memory().read(0x0000), 0x00);
    assert_eq!(cpu.memory().read(0x0001), 0x02);
}
