//! LP system registers, one copy per [`LpMode`].
//!
//! The crystal and bias registers only exist in the SLEEP copy.

use crate::pmu::regs::*;
use crate::pmu::{LpMode, Pmu};

#[inline(always)]
pub fn set_regulator_slp_xpd(hw: Pmu, mode: LpMode, slp_xpd: bool) {
    hw.lp_sys(mode.index()).regulator0().modify(|w| w.set_slp_xpd(slp_xpd));
}

#[inline(always)]
pub fn set_regulator_xpd(hw: Pmu, mode: LpMode, xpd: bool) {
    hw.lp_sys(mode.index()).regulator0().modify(|w| w.set_xpd(xpd));
}

#[inline(always)]
pub fn set_regulator_sleep_dbias(hw: Pmu, mode: LpMode, slp_dbias: u8) {
    hw.lp_sys(mode.index()).regulator0().modify(|w| w.set_slp_dbias(slp_dbias));
}

#[inline(always)]
pub fn set_regulator_dbias(hw: Pmu, mode: LpMode, dbias: u8) {
    hw.lp_sys(mode.index()).regulator0().modify(|w| w.set_dbias(dbias));
}

#[inline(always)]
pub fn get_regulator0(hw: Pmu, mode: LpMode) -> LpRegulator0 {
    hw.lp_sys(mode.index()).regulator0().read()
}

#[inline(always)]
pub fn set_regulator_driver_bar(hw: Pmu, mode: LpMode, drv_b: u8) {
    hw.lp_sys(mode.index()).regulator1().modify(|w| w.set_drv_b(drv_b));
}

#[inline(always)]
pub fn get_regulator_driver_bar(hw: Pmu, mode: LpMode) -> u8 {
    hw.lp_sys(mode.index()).regulator1().read().drv_b()
}

/// SLEEP only.
#[inline(always)]
pub fn set_xtal_xpd(hw: Pmu, mode: LpMode, xpd_xtal: bool) {
    assert!(mode == LpMode::Sleep);
    hw.lp_sys(mode.index()).xtal().modify(|w| w.set_xpd_xtal(xpd_xtal));
}

#[inline(always)]
pub fn get_xtal_xpd(hw: Pmu, mode: LpMode) -> bool {
    assert!(mode == LpMode::Sleep);
    hw.lp_sys(mode.index()).xtal().read().xpd_xtal()
}

#[inline(always)]
pub fn set_dig_power(hw: Pmu, mode: LpMode, flag: LpDigPower) {
    hw.lp_sys(mode.index()).dig_power().write_value(flag);
}

#[inline(always)]
pub fn get_dig_power(hw: Pmu, mode: LpMode) -> LpDigPower {
    hw.lp_sys(mode.index()).dig_power().read()
}

#[inline(always)]
pub fn set_clk_power(hw: Pmu, mode: LpMode, xpd_flag: LpClkPower) {
    hw.lp_sys(mode.index()).clk_power().write_value(xpd_flag);
}

#[inline(always)]
pub fn get_clk_power(hw: Pmu, mode: LpMode) -> LpClkPower {
    hw.lp_sys(mode.index()).clk_power().read()
}

/// SLEEP only.
#[inline(always)]
pub fn set_bias_xpd(hw: Pmu, mode: LpMode, xpd_bias: bool) {
    assert!(mode == LpMode::Sleep);
    hw.lp_sys(mode.index()).bias().modify(|w| w.set_xpd_bias(xpd_bias));
}

/// SLEEP only.
#[inline(always)]
pub fn set_dbg_atten(hw: Pmu, mode: LpMode, value: u8) {
    assert!(mode == LpMode::Sleep);
    hw.lp_sys(mode.index()).bias().modify(|w| w.set_dbg_atten(value));
}

/// SLEEP only.
#[inline(always)]
pub fn set_current_power_off(hw: Pmu, mode: LpMode, off: bool) {
    assert!(mode == LpMode::Sleep);
    hw.lp_sys(mode.index()).bias().modify(|w| w.set_pd_cur(off));
}

/// SLEEP only.
#[inline(always)]
pub fn set_bias_sleep_enable(hw: Pmu, mode: LpMode, en: bool) {
    assert!(mode == LpMode::Sleep);
    hw.lp_sys(mode.index()).bias().modify(|w| w.set_bias_sleep(en));
}

#[inline(always)]
pub fn get_bias(hw: Pmu, mode: LpMode) -> LpBias {
    assert!(mode == LpMode::Sleep);
    hw.lp_sys(mode.index()).bias().read()
}
