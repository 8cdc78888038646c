//! IO MUX register map, ESP32-C61

// Shadowed for `bitfield-struct`, see `pmu/regs.rs`.
#[allow(unused_macros)]
macro_rules! panic {
    ($($x:tt)*) => {
        ::core::panic!($($x)*)
    };
}

use core::mem::{offset_of, size_of};

use bitfield_struct::bitfield;

use crate::common::{Reg, RW};

/// Base address of the IO MUX register block.
pub const IO_MUX_BASE: usize = 0x6009_0000;

/// Number of GPIOs with an IO MUX configuration word.
pub const GPIO_COUNT: usize = 25;

/// The IO MUX register block at its fixed address.
pub const IO_MUX: IoMux = unsafe { IoMux::from_ptr(IO_MUX_BASE as *mut ()) };

/// IO MUX configuration of one GPIO.
///
/// The `mcu_*` fields apply while the pad is in sleep mode (`slp_sel` set),
/// the `fun_*` fields otherwise.
#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct IoMuxGpio {
    /// [0] Output enable in sleep mode
    pub mcu_oe: bool,
    /// [1] Put the pad into sleep mode
    pub slp_sel: bool,
    /// [2] Pull-down in sleep mode
    pub mcu_wpd: bool,
    /// [3] Pull-up in sleep mode
    pub mcu_wpu: bool,
    /// [4] Input enable in sleep mode
    pub mcu_ie: bool,
    /// [6:5] Drive strength in sleep mode
    #[bits(2)]
    pub mcu_drv: u8,
    /// [7] Pull-down
    pub fun_wpd: bool,
    /// [8] Pull-up
    pub fun_wpu: bool,
    /// [9] Input enable
    pub fun_ie: bool,
    /// [11:10] Drive strength, 0 (~5 mA) to 3 (~40 mA)
    #[bits(2, default = 2)]
    pub fun_drv: u8,
    /// [14:12] IO MUX function. Function 1 routes the pad through the GPIO matrix.
    #[bits(3, default = 1)]
    pub mcu_sel: u8,
    /// [15] Input glitch filter
    pub filter_en: bool,
    /// [16] Input hysteresis, when `hys_sel` selects software control
    pub hys_en: bool,
    /// [17] 0: hysteresis from efuse, 1: from `hys_en`
    pub hys_sel: bool,
    #[bits(14)]
    __reserved: u16,
}

impl IoMuxGpio {
    /// Value of the word after reset.
    pub const RESET: Self = Self::new();
}

/// Version control register.
#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct IoMuxDate {
    #[bits(28, default = 0x231_2190)]
    pub date: u32,
    #[bits(4)]
    __reserved: u8,
}

/// Memory layout of the IO MUX block.
#[repr(C)]
pub struct RegisterBlock {
    pub gpio: [IoMuxGpio; GPIO_COUNT],
    _reserved_064: [u32; 102],
    pub date: IoMuxDate,
}

const _: () = ::core::assert!(size_of::<RegisterBlock>() == 0x200);
const _: () = ::core::assert!(offset_of!(RegisterBlock, gpio) == 0x000);
const _: () = ::core::assert!(offset_of!(RegisterBlock, _reserved_064) == 0x064);
const _: () = ::core::assert!(offset_of!(RegisterBlock, date) == 0x1fc);

/// IO MUX register block.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct IoMux {
    ptr: *mut u8,
}

unsafe impl Send for IoMux {}
unsafe impl Sync for IoMux {}

impl IoMux {
    /// # Safety
    ///
    /// `ptr` must point to a [`RegisterBlock`] valid for volatile access.
    #[inline(always)]
    pub const unsafe fn from_ptr(ptr: *mut ()) -> Self {
        Self { ptr: ptr as _ }
    }

    #[inline(always)]
    pub const fn as_ptr(&self) -> *mut () {
        self.ptr as _
    }

    /// Configuration word of GPIO `n`.
    #[inline(always)]
    pub fn gpio(self, n: usize) -> Reg<IoMuxGpio, RW> {
        assert!(n < GPIO_COUNT);
        unsafe {
            Reg::from_ptr(self.ptr.add(offset_of!(RegisterBlock, gpio) + n * size_of::<IoMuxGpio>()) as _)
        }
    }

    #[inline(always)]
    pub const fn date(self) -> Reg<IoMuxDate, RW> {
        unsafe { Reg::from_ptr(self.ptr.add(offset_of!(RegisterBlock, date)) as _) }
    }
}
