//! Immediate controls.
//!
//! These registers are write-only strobes. A "tie" setter pulses either the
//! tie-high or the tie-low bit; the other bit is written as zero and has no
//! effect.

use crate::pmu::regs::*;
use crate::pmu::Pmu;

#[inline(always)]
pub fn set_clk_power(hw: Pmu, flag: u32) {
    hw.imm().clk_power().write_value(flag);
}

#[inline(always)]
pub fn get_clk_power(hw: Pmu) -> u32 {
    hw.imm().clk_power().read()
}

#[inline(always)]
pub fn set_icg_slp_sel(hw: Pmu, slp_sel: bool) {
    hw.imm().sleep_sysclk().write(|w| {
        if slp_sel {
            w.set_tie_high_icg_slp_sel(true);
        } else {
            w.set_tie_low_icg_slp_sel(true);
        }
    });
}

#[inline(always)]
pub fn update_dig_sysclk_sel(hw: Pmu, update: bool) {
    hw.imm().sleep_sysclk().write(|w| w.set_update_dig_sysclk_sel(update));
}

#[inline(always)]
pub fn update_dig_icg_switch(hw: Pmu, update: bool) {
    hw.imm().sleep_sysclk().write(|w| w.set_update_dig_icg_switch(update));
}

#[inline(always)]
pub fn update_dig_icg_func(hw: Pmu, icg_func_update: bool) {
    hw.imm().hp_func_icg().write(|w| w.set_update_dig_icg_func_en(icg_func_update));
}

#[inline(always)]
pub fn update_dig_icg_apb(hw: Pmu, icg_apb_update: bool) {
    hw.imm().hp_apb_icg().write(|w| w.set_update_dig_icg_apb_en(icg_apb_update));
}

#[inline(always)]
pub fn set_lp_rootclk_sel(hw: Pmu, rootclk_sel: bool) {
    hw.imm().lp_icg().write(|w| {
        if rootclk_sel {
            w.set_tie_high_lp_rootclk_sel(true);
        } else {
            w.set_tie_low_lp_rootclk_sel(true);
        }
    });
}

#[inline(always)]
pub fn set_hp_pad_hold_all(hw: Pmu, hold_all: bool) {
    hw.imm().pad_hold_all().write(|w| {
        if hold_all {
            w.set_tie_high_hp_pad_hold_all(true);
        } else {
            w.set_tie_low_hp_pad_hold_all(true);
        }
    });
}

#[inline(always)]
pub fn set_lp_pad_hold_all(hw: Pmu, hold_all: bool) {
    hw.imm().pad_hold_all().write(|w| {
        if hold_all {
            w.set_tie_high_lp_pad_hold_all(true);
        } else {
            w.set_tie_low_lp_pad_hold_all(true);
        }
    });
}
