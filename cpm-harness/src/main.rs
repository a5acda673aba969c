//! CP/M test-ROM harness: drives `invaders-core`'s bare `I8080` interpreter
//! against a classic 8080 test image (TST8080, CPUTEST, 8080PRE, 8080EXM)
//! using the minimal BDOS stub those ROMs expect, rather than the Space
//! Invaders cabinet. This is the reference correctness oracle from the
//! original emulator's `run_testrom`, not part of the cabinet's own tests.

use std::io::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use invaders_core::prelude::{I8080, Memory};

/// Address CP/M programs call through for console I/O; test ROMs expect a
/// `RET` patched in here so the call returns immediately after the harness
/// has already handled the C=2/C=9 BDOS functions below.
const BDOS_ENTRY: u16 = 0x0005;
const LOAD_OFFSET: u16 = 0x0100;

#[derive(Parser)]
#[command(name = "cpm-harness", about = "Run an 8080 CP/M test ROM against invaders-core's interpreter")]
struct Args {
    /// Path to a .COM test ROM (TST8080.COM, CPUTEST.COM, 8080PRE.COM, 8080EXM.COM, ...)
    rom: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let image = match std::fs::read(&args.rom) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("failed to read {}: {e}", args.rom.display());
            return ExitCode::FAILURE;
        }
    };

    let mut memory = Memory::new();
    memory.load_at(LOAD_OFFSET, &image);
    memory.write(BDOS_ENTRY, 0xc9); // RET

    let mut cpu = I8080::new();
    cpu.pc = LOAD_OFFSET;

    run_test_rom(&mut cpu, &mut memory);
    ExitCode::SUCCESS
}

/// Step `cpu` until it jumps to address 0, handling the two CP/M BDOS
/// functions the test ROMs rely on (print-string at C=9, print-char at C=2)
/// whenever execution reaches the patched entry point.
fn run_test_rom(cpu: &mut I8080, memory: &mut Memory) {
    loop {
        let current_pc = cpu.pc;

        if memory.read(cpu.pc) == 0x76 {
            log::warn!("HLT at {current_pc:#06x}");
        }

        if cpu.pc == BDOS_ENTRY {
            match cpu.c {
                9 => {
                    let mut addr = cpu.de();
                    while memory.read(addr) != b'$' {
                        print!("{}", memory.read(addr) as char);
                        addr = addr.wrapping_add(1);
                    }
                }
                2 => print!("{}", cpu.e as char),
                _ => {}
            }
            std::io::stdout().flush().ok();
        }

        cpu.step(memory);

        if cpu.pc == 0 {
            println!("\nJumped to 0x0000 from {current_pc:#06x}");
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halts_on_jump_to_zero() {
        let mut memory = Memory::new();
        // JMP 0x0000 at the load point.
        memory.write(LOAD_OFFSET, 0xc3);
        memory.write(LOAD_OFFSET + 1, 0x00);
        memory.write(LOAD_OFFSET + 2, 0x00);

        let mut cpu = I8080::new();
        cpu.pc = LOAD_OFFSET;
        run_test_rom(&mut cpu, &mut memory);
        assert_eq!(cpu.pc, 0);
    }

    #[test]
    fn bdos_print_char_writes_e_register() {
        let mut memory = Memory::new();
        memory.write(BDOS_ENTRY, 0xc9); // RET
        // CALL BDOS_ENTRY, then JMP 0x0000.
        memory.write(LOAD_OFFSET, 0xcd);
        memory.write(LOAD_OFFSET + 1, BDOS_ENTRY as u8);
        memory.write(LOAD_OFFSET + 2, (BDOS_ENTRY >> 8) as u8);
        memory.write(LOAD_OFFSET + 3, 0xc3);
        memory.write(LOAD_OFFSET + 4, 0x00);
        memory.write(LOAD_OFFSET + 5, 0x00);

        let mut cpu = I8080::new();
        cpu.pc = LOAD_OFFSET;
        cpu.c = 2;
        cpu.e = b'!';
        run_test_rom(&mut cpu, &mut memory);
    }
}
