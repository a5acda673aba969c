use clap::Parser;
use invaders_core::prelude::{Cabinet, Machine};

mod config;
mod emulator;
mod input;
mod rom_path;
mod video;

/// Space Invaders arcade cabinet.
#[derive(Parser)]
#[command(name = "invaders", about = "Space Invaders arcade cabinet emulator")]
struct Args {
    /// Path to invaders.zip, a directory containing it, or a directory of loose ROM files.
    rom_path: String,

    /// Window scale factor.
    #[arg(long, default_value_t = 3)]
    scale: u32,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let rom_set = rom_path::load_rom_set(&args.rom_path).unwrap_or_else(|e| {
        eprintln!("failed to load ROMs from {}: {e}", args.rom_path);
        std::process::exit(1);
    });

    let mut cabinet = Cabinet::new(&rom_set).unwrap_or_else(|e| {
        eprintln!("failed to initialize cabinet: {e}");
        std::process::exit(1);
    });
    log::info!("loaded ROM set from {}", args.rom_path);

    let mut key_map = input::default_key_map(cabinet.input_map());
    let overrides = config::load();
    input::apply_overrides(&mut key_map, cabinet.input_map(), &overrides);

    cabinet.reset();
    emulator::run(&mut cabinet, &key_map, args.scale);
}
