//! End-to-end opcode scenarios, driven entirely through `I8080::step` against
//! a plain `Memory` rather than through the internal per-instruction helpers,
//! the way a reader would actually exercise the interpreter from outside.

use invaders_core::prelude::{I8080, Memory};

fn cpu_and_mem() -> (I8080, Memory) {
    (I8080::new(), Memory::new())
}

#[test]
fn sub_b_from_equal_operands_clears_accumulator() {
    let (mut cpu, mut mem) = cpu_and_mem();
    cpu.a = 0x3e;
    cpu.b = 0x3e;
    mem.write(0x0000, 0x90); // SUB B
    cpu.step(&mut mem);

    assert_eq!(cpu.a, 0x00);
    assert!(cpu.flag(invaders_core::prelude::Flags::Z));
    assert!(!cpu.flag(invaders_core::prelude::Flags::C));
    assert!(cpu.flag(invaders_core::prelude::Flags::AC));
    assert!(cpu.flag(invaders_core::prelude::Flags::P));
    assert!(!cpu.flag(invaders_core::prelude::Flags::S));
}

#[test]
fn adi_0x74_against_0x2e_sets_sign_and_half_carry_only() {
    let (mut cpu, mut mem) = cpu_and_mem();
    cpu.a = 0x2e;
    mem.write(0x0000, 0xc6); // ADI
    mem.write(0x0001, 0x74);
    cpu.step(&mut mem);

    use invaders_core::prelude::Flags;
    assert_eq!(cpu.a, 0xa2);
    assert!(cpu.flag(Flags::S));
    assert!(!cpu.flag(Flags::Z));
    assert!(cpu.flag(Flags::AC));
    assert!(!cpu.flag(Flags::P));
    assert!(!cpu.flag(Flags::C));
}

#[test]
fn dad_h_doubles_hl_without_overflow() {
    let (mut cpu, mut mem) = cpu_and_mem();
    cpu.h = 0x24;
    cpu.l = 0x00;
    mem.write(0x0000, 0x29); // DAD H
    cpu.step(&mut mem);

    assert_eq!(cpu.h, 0x48);
    assert_eq!(cpu.l, 0x00);
    assert!(!cpu.flag(invaders_core::prelude::Flags::C));
}

#[test]
fn ret_pops_pc_from_the_stack_and_advances_sp_by_two() {
    let (mut cpu, mut mem) = cpu_and_mem();
    cpu.sp = 0x23fe;
    mem.write(0x23fe, 0x34);
    mem.write(0x23ff, 0x12);
    mem.write(0x0000, 0xc9); // RET
    cpu.step(&mut mem);

    assert_eq!(cpu.pc, 0x1234);
    assert_eq!(cpu.sp, 0x2400);
}

#[test]
fn call_then_ret_round_trips_to_the_instruction_after_the_call() {
    let (mut cpu, mut mem) = cpu_and_mem();
    cpu.sp = 0x2400;
    mem.write(0x0000, 0xcd); // CALL 0x2000
    mem.write(0x0001, 0x00);
    mem.write(0x0002, 0x20);
    mem.write(0x2000, 0xc9); // RET

    cpu.step(&mut mem); // CALL
    assert_eq!(cpu.pc, 0x2000);
    cpu.step(&mut mem); // RET
    assert_eq!(cpu.pc, 0x0003);
    assert_eq!(cpu.sp, 0x2400);
}
