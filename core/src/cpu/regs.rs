//! Register addressing. The reference implementation threads raw
//! `(first, second)` pointer pairs plus an out-of-band pointer to SP to mean
//! "some 16-bit register-ish thing", and a bare `uint8_t*` for "some
//! 8-bit register-ish thing including the M pseudo-register". These two
//! enums name the cases instead; `I8080` provides the typed getters and
//! setters that interpret them.

/// A single-byte operand: one of the seven registers, or `M`, the byte at
/// the address held in HL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reg8 {
    A,
    B,
    C,
    D,
    E,
    H,
    L,
    M,
}

/// A register pair used by 16-bit instructions (LXI, DAD, INX/DCX, PUSH/POP).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reg16 {
    BC,
    DE,
    HL,
    SP,
    /// Accumulator + packed flags byte, used only by PUSH/POP PSW.
    PSW,
}
