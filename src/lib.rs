#![no_std]
#![doc = include_str!("../README.md")]
#![allow(unsafe_op_in_unsafe_fn)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod common;

pub mod efuse;
pub mod io_mux;
pub mod pmu;
pub mod retention;
pub mod rmt;
pub mod spi_flash;
pub mod timer;
