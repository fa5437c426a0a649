//! Tests for BRK and RTI.

use interp6502::{FlatMemory, MemoryBus, CPU, IRQ_VECTOR};

/// Helper function to create a CPU with `program` at 0x8000 and the BRK
/// vector pointing at 0x9000
fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.load(0x8000, program);
    memory.write(IRQ_VECTOR, 0x00);
    memory.write(IRQ_VECTOR + 1, 0x90);
    CPU::new(memory, 0x8000)
}

#[test]
fn test_brk_vectors_and_pushes_state() {
    let mut cpu = setup_cpu(&[0x00, 0xEA]);
    cpu.set_flag_c(true);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.sp(), 0xFC);
    assert!(cpu.flag_i());

    // Return address skips the padding byte
    assert_eq!(cpu.memory().read(0x01FF), 0x80);
    assert_eq!(cpu.memory().read(0x01FE), 0x02);

    // Pushed status has B and the unused bit set, I as it was before
    let pushed = cpu.memory().read(0x01FD);
    assert_eq!(pushed, 0x3D);
}

#[test]
fn test_brk_rti_round_trip() {
    let mut cpu = setup_cpu(&[0x00, 0xEA, 0xE8]);
    cpu.memory_mut().write(0x9000, 0x40); // RTI
    cpu.set_flag_n(true);
    cpu.set_flag_c(true);
    cpu.set_flag_i(false);

    cpu.step().unwrap();
    assert!(cpu.flag_i());
    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.sp(), 0xFF);
    assert!(cpu.flag_n());
    assert!(cpu.flag_c());
    // I is restored from the pushed byte
    assert!(!cpu.flag_i());

    cpu.step().unwrap();
    assert_eq!(cpu.x(), 1);
}

#[test]
fn test_rti_restores_flags_and_pc_as_is() {
    let mut cpu = setup_cpu(&[0x40]);
    cpu.memory_mut().write(0x01FD, 0xFF); // status
    cpu.memory_mut().write(0x01FE, 0x34); // PCL
    cpu.memory_mut().write(0x01FF, 0x12); // PCH
    cpu.set_sp(0xFC);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.sp(), 0xFF);
    assert!(cpu.flag_n());
    assert!(cpu.flag_v());
    assert!(cpu.flag_d());
    assert!(cpu.flag_i());
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
    assert_eq!(cpu.status(), 0xFF);
}

#[test]
fn test_rti_ignores_break_and_unused_bits() {
    let mut cpu = setup_cpu(&[0x40]);
    cpu.memory_mut().write(0x01FD, 0x00);
    cpu.memory_mut().write(0x01FE, 0x00);
    cpu.memory_mut().write(0x01FF, 0x20);
    cpu.set_sp(0xFC);
    cpu.set_flag_z(true);

    cpu.step().unwrap();

    assert!(!cpu.flag_z());
    assert_eq!(cpu.status(), 0x30);
}

#[test]
fn test_brk_with_unset_vector_lands_at_zero() {
    let mut memory = FlatMemory::new();
    memory.write(0x8000, 0x00);
    let mut cpu = CPU::new(memory, 0x8000);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x0000);
}
