//! PMU low-level register access.
//!
//! One function per hardware field. Every function takes the [`Pmu`](super::Pmu)
//! handle first; setters do a single read-modify-write of the register
//! copy selected by mode or domain, getters a single read.
//!
//! - [`hp`], [`lp`]: registers replicated per power mode. A write only takes
//!   effect when the chip enters that mode.
//! - [`imm`]: immediate strobes, effective as soon as they are written.
//! - [`power`]: power domain force controls and power sequencing waits.
//! - [`wakeup`]: sleep request, wakeup and reject control, PMU interrupts and
//!   EXT1 wakeup pins.

pub mod hp;
pub mod imm;
pub mod lp;
pub mod power;
pub mod wakeup;

#[cfg(test)]
mod tests;
