/// Generic CPU interface shared by the (currently single) CPU implementation.
pub trait Cpu: state::CpuStateTrait {
    /// Reset vector fetch.
    fn reset(&mut self);

    /// Query if the CPU is internally halted (HLT) and waiting on an interrupt.
    fn is_sleeping(&self) -> bool;
}

pub mod state;
pub use state::{CpuStateTrait, I8080State};

pub mod regs;
pub use regs::{Reg8, Reg16};

pub mod i8080;
pub use i8080::{Flags, I8080};
