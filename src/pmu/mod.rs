//! PMU (power management unit), ESP32-P4
//!
//! The PMU holds one copy of most HP-domain registers per HP mode and one copy
//! of the LP-domain registers per LP mode. The copy belonging to the target
//! mode is applied by hardware when the chip transitions into that mode.
//! [`param`] provides the default contents of each copy, [`ll`] writes them.

use bitflags::bitflags;

use crate::common::{Reg, R, RW, W};

pub mod ll;
pub mod param;
pub mod regs;

use regs::*;

#[cfg(test)]
mod tests;

/// Base address of the PMU register block.
pub const PMU_BASE: usize = 0x5011_5000;
/// Size of the PMU register block, in bytes.
pub const PMU_BLOCK_SIZE: usize = 0x400;

/// The PMU register block at its fixed address.
pub const PMU: Pmu = unsafe { Pmu::from_ptr(PMU_BASE as *mut ()) };

const HP_SYS_OFFSET: usize = 0x000;
const HP_SYS_STRIDE: usize = 0x34;
const LP_SYS_OFFSET: usize = 0x09c;
const LP_SYS_STRIDE: usize = 0x18;
const IMM_OFFSET: usize = 0x0cc;
const POWER_OFFSET: usize = 0x0ec;
const WAKEUP_OFFSET: usize = 0x10c;
const HP_EXT_OFFSET: usize = 0x13c;
const LP_EXT_OFFSET: usize = 0x150;

const _: () = ::core::assert!(HP_SYS_OFFSET + HpMode::COUNT * HP_SYS_STRIDE <= LP_SYS_OFFSET);
const _: () = ::core::assert!(LP_SYS_OFFSET + LpMode::COUNT * LP_SYS_STRIDE <= IMM_OFFSET);
const _: () = ::core::assert!(IMM_OFFSET + 0x20 <= POWER_OFFSET);
const _: () = ::core::assert!(POWER_OFFSET + 0x20 <= WAKEUP_OFFSET);
const _: () = ::core::assert!(WAKEUP_OFFSET + 0x30 <= HP_EXT_OFFSET);
const _: () = ::core::assert!(HP_EXT_OFFSET + 0x14 <= LP_EXT_OFFSET);
const _: () = ::core::assert!(LP_EXT_OFFSET + 0x20 <= PMU_BLOCK_SIZE);

/// HP power mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum HpMode {
    Active = 0,
    /// Modem-only mode. The parameter tables treat it as "no modem".
    Modem = 1,
    Sleep = 2,
}

impl HpMode {
    pub const COUNT: usize = 3;
    pub const ALL: [HpMode; Self::COUNT] = [HpMode::Active, HpMode::Modem, HpMode::Sleep];

    /// Convert a raw mode index. Panics if `index >= HpMode::COUNT`.
    pub fn from_index(index: usize) -> Self {
        assert!(index < Self::COUNT, "invalid HP mode index {}", index);
        Self::ALL[index]
    }

    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// LP power mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum LpMode {
    Active = 0,
    Sleep = 1,
}

impl LpMode {
    pub const COUNT: usize = 2;
    pub const ALL: [LpMode; Self::COUNT] = [LpMode::Active, LpMode::Sleep];

    /// Convert a raw mode index. Panics if `index >= LpMode::COUNT`.
    pub fn from_index(index: usize) -> Self {
        assert!(index < Self::COUNT, "invalid LP mode index {}", index);
        Self::ALL[index]
    }

    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// HP power domains with software force controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum HpPowerDomain {
    Top = 0,
    Cnnt = 1,
    HpMem = 2,
}

impl HpPowerDomain {
    pub const COUNT: usize = 3;
}

/// HP system clock source, the value of `HpSysclk::dig_sysclk_sel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SysclkSource {
    Xtal = 0,
    Cpll = 1,
    RcFast = 2,
}

impl SysclkSource {
    pub const fn from_bits(val: u8) -> Option<Self> {
        match val {
            0 => Some(SysclkSource::Xtal),
            1 => Some(SysclkSource::Cpll),
            2 => Some(SysclkSource::RcFast),
            _ => None,
        }
    }

    pub const fn to_bits(self) -> u8 {
        self as u8
    }
}

bitflags! {
    /// HP functional clock gates, as laid out in the `icg_func` and
    /// `backup_clk` registers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct IcgFunc: u32 {
        const GDMA = 1 << 0;
        const ICM_CPU = 1 << 1;
        const ICM_APB = 1 << 2;
        const ICM_SYS = 1 << 3;
        const ICM_MEM = 1 << 4;
        const INTRMTX_APB = 1 << 5;
        const SYSTIMER = 1 << 6;
        const UART0 = 1 << 7;
        const IOMUX = 1 << 8;
        const HP_CLKRST = 1 << 9;
        const SYSREG_APB = 1 << 10;
        const TIMERGROUP0 = 1 << 11;
        const REGDMA = 1 << 12;
        const SPIMEM = 1 << 13;
        const L2MEM_SYS = 1 << 20;
        const L2MEM_MEM = 1 << 21;
    }
}

/// PMU register block.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Pmu {
    ptr: *mut u8,
}

unsafe impl Send for Pmu {}
unsafe impl Sync for Pmu {}

impl Pmu {
    /// # Safety
    ///
    /// `ptr` must point to `PMU_BLOCK_SIZE` bytes valid for volatile access.
    #[inline(always)]
    pub const unsafe fn from_ptr(ptr: *mut ()) -> Self {
        Self { ptr: ptr as _ }
    }

    #[inline(always)]
    pub const fn as_ptr(&self) -> *mut () {
        self.ptr as _
    }

    /// HP system registers of mode `n`.
    #[inline(always)]
    pub fn hp_sys(self, n: usize) -> HpSys {
        assert!(n < HpMode::COUNT);
        unsafe { HpSys::from_ptr(self.ptr.add(HP_SYS_OFFSET + n * HP_SYS_STRIDE) as _) }
    }

    /// LP system registers of mode `n`.
    #[inline(always)]
    pub fn lp_sys(self, n: usize) -> LpSys {
        assert!(n < LpMode::COUNT);
        unsafe { LpSys::from_ptr(self.ptr.add(LP_SYS_OFFSET + n * LP_SYS_STRIDE) as _) }
    }

    #[inline(always)]
    pub const fn imm(self) -> Imm {
        unsafe { Imm::from_ptr(self.ptr.add(IMM_OFFSET) as _) }
    }

    #[inline(always)]
    pub const fn power(self) -> Power {
        unsafe { Power::from_ptr(self.ptr.add(POWER_OFFSET) as _) }
    }

    #[inline(always)]
    pub const fn wakeup(self) -> Wakeup {
        unsafe { Wakeup::from_ptr(self.ptr.add(WAKEUP_OFFSET) as _) }
    }

    #[inline(always)]
    pub const fn hp_ext(self) -> HpExt {
        unsafe { HpExt::from_ptr(self.ptr.add(HP_EXT_OFFSET) as _) }
    }

    #[inline(always)]
    pub const fn lp_ext(self) -> LpExt {
        unsafe { LpExt::from_ptr(self.ptr.add(LP_EXT_OFFSET) as _) }
    }
}

macro_rules! register_block {
    (
        $(#[$attr:meta])*
        $name:ident {
            $( $(#[$reg_attr:meta])* $reg:ident @ $offset:literal : $ty:ty, $access:ty; )*
        }
    ) => {
        $(#[$attr])*
        #[derive(Copy, Clone, Eq, PartialEq)]
        pub struct $name {
            ptr: *mut u8,
        }

        unsafe impl Send for $name {}
        unsafe impl Sync for $name {}

        impl $name {
            /// # Safety
            ///
            /// `ptr` must point to this block inside a live PMU register block.
            #[inline(always)]
            pub const unsafe fn from_ptr(ptr: *mut ()) -> Self {
                Self { ptr: ptr as _ }
            }

            #[inline(always)]
            pub const fn as_ptr(&self) -> *mut () {
                self.ptr as _
            }

            $(
                $(#[$reg_attr])*
                #[inline(always)]
                pub const fn $reg(self) -> Reg<$ty, $access> {
                    unsafe { Reg::from_ptr(self.ptr.add($offset) as _) }
                }
            )*
        }
    };
}

register_block! {
    /// HP system registers of one HP mode.
    HpSys {
        dig_power @ 0x00: HpDigPower, RW;
        icg_func @ 0x04: u32, RW;
        icg_apb @ 0x08: u32, RW;
        icg_modem @ 0x0c: u32, RW;
        syscntl @ 0x10: HpSysCntl, RW;
        clk_power @ 0x14: HpClkPower, RW;
        bias @ 0x18: HpBias, RW;
        /// Seen as [`HpActiveBackup`] from the ACTIVE slot and [`HpSleepBackup`]
        /// from the SLEEP slot.
        backup @ 0x1c: u32, RW;
        backup_clk @ 0x20: u32, RW;
        sysclk @ 0x24: HpSysclk, RW;
        regulator0 @ 0x28: HpRegulator0, RW;
        regulator1 @ 0x2c: HpRegulator1, RW;
        xtal @ 0x30: HpXtal, RW;
    }
}

register_block! {
    /// LP system registers of one LP mode.
    LpSys {
        regulator0 @ 0x00: LpRegulator0, RW;
        regulator1 @ 0x04: LpRegulator1, RW;
        xtal @ 0x08: LpXtal, RW;
        dig_power @ 0x0c: LpDigPower, RW;
        clk_power @ 0x10: LpClkPower, RW;
        bias @ 0x14: LpBias, RW;
    }
}

register_block! {
    /// Immediate controls, effective as soon as they are written.
    Imm {
        clk_power @ 0x00: u32, RW;
        sleep_sysclk @ 0x04: ImmSleepSysclk, W;
        hp_func_icg @ 0x08: ImmHpFuncIcg, W;
        hp_apb_icg @ 0x0c: ImmHpApbIcg, W;
        modem_icg @ 0x10: u32, W;
        lp_icg @ 0x14: ImmLpIcg, W;
        pad_hold_all @ 0x18: ImmPadHoldAll, W;
        i2c_iso @ 0x1c: u32, W;
    }
}

register_block! {
    /// Power domain sequencing and force controls.
    Power {
        wait_timer0 @ 0x00: PowerWaitTimer, RW;
        wait_timer1 @ 0x04: PowerWaitTimer, RW;
        lp_peri @ 0x14: PowerPd, RW;
        clk_wait @ 0x18: PowerClkWait, RW;
        dcdc_switch @ 0x1c: PowerDcdcSwitch, RW;
    }
}

impl Power {
    /// Force controls of HP power domain `n`, see [`HpPowerDomain`].
    #[inline(always)]
    pub fn hp_pd(self, n: usize) -> Reg<PowerPd, RW> {
        assert!(n < HpPowerDomain::COUNT);
        unsafe { Reg::from_ptr(self.ptr.add(0x08 + n * 4) as _) }
    }
}

register_block! {
    /// Sleep request and wakeup control.
    Wakeup {
        cntl0 @ 0x00: WakeupCntl0, W;
        cntl1 @ 0x04: WakeupCntl1, RW;
        cntl2 @ 0x08: u32, RW;
        cntl3 @ 0x0c: WakeupCntl3, RW;
        cntl4 @ 0x10: WakeupCntl4, W;
        cntl5 @ 0x14: WakeupCntl5, RW;
        cntl6 @ 0x18: u32, RW;
        cntl7 @ 0x1c: WakeupCntl7, RW;
        cntl8 @ 0x20: WakeupCntl8, RW;
        status0 @ 0x24: u32, R;
        status1 @ 0x28: u32, R;
        status2 @ 0x2c: u32, R;
    }
}

register_block! {
    /// HP-side clock wait and interrupt registers.
    HpExt {
        clk_cntl @ 0x00: HpClkCntl, RW;
        int_raw @ 0x04: HpIntr, R;
        int_st @ 0x08: HpIntr, R;
        int_ena @ 0x0c: HpIntr, RW;
        int_clr @ 0x10: HpIntr, W;
    }
}

register_block! {
    /// LP-side interrupt and EXT1 wakeup registers.
    LpExt {
        int_raw @ 0x00: LpIntr, R;
        int_st @ 0x04: LpIntr, R;
        int_ena @ 0x08: LpIntr, RW;
        int_clr @ 0x0c: LpIntr, W;
        ext_wakeup_lv @ 0x10: ExtWakeupPins, RW;
        ext_wakeup_sel @ 0x14: ExtWakeupPins, RW;
        ext_wakeup_st @ 0x18: ExtWakeupPins, R;
        ext_wakeup_cntl @ 0x1c: ExtWakeupCntl, RW;
    }
}
