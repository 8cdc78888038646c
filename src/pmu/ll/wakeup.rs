//! Sleep request, wakeup and reject control, PMU interrupts and EXT1 wakeup.

use crate::pmu::regs::*;
use crate::pmu::Pmu;

/// Request the HP system to enter sleep.
#[inline(always)]
pub fn set_sleep_enable(hw: Pmu) {
    hw.wakeup().cntl0().write(|w| w.set_sleep_req(true));
}

/// Let the sources in `reject` abort a sleep request.
#[inline(always)]
pub fn set_reject_enable(hw: Pmu, reject: u32) {
    hw.wakeup().cntl1().modify(|w| {
        w.set_sleep_reject_ena(reject);
        w.set_slp_reject_en(true);
    });
}

#[inline(always)]
pub fn set_reject_disable(hw: Pmu) {
    hw.wakeup().cntl1().modify(|w| w.set_slp_reject_en(false));
}

#[inline(always)]
pub fn get_reject_config(hw: Pmu) -> WakeupCntl1 {
    hw.wakeup().cntl1().read()
}

#[inline(always)]
pub fn set_wakeup_enable(hw: Pmu, wakeup: u32) {
    hw.wakeup().cntl2().write_value(wakeup);
}

#[inline(always)]
pub fn get_wakeup_enable(hw: Pmu) -> u32 {
    hw.wakeup().cntl2().read()
}

#[inline(always)]
pub fn set_sleep_protect_mode(hw: Pmu, mode: u8) {
    hw.wakeup().cntl3().modify(|w| w.set_sleep_prt_sel(mode));
}

#[inline(always)]
pub fn get_sleep_protect_mode(hw: Pmu) -> u8 {
    hw.wakeup().cntl3().read().sleep_prt_sel()
}

#[inline(always)]
pub fn set_hp_min_sleep_cycle(hw: Pmu, slow_clk_cycle: u8) {
    hw.wakeup().cntl3().modify(|w| w.set_hp_min_slp_val(slow_clk_cycle));
}

#[inline(always)]
pub fn get_hp_min_sleep_cycle(hw: Pmu) -> u8 {
    hw.wakeup().cntl3().read().hp_min_slp_val()
}

#[inline(always)]
pub fn set_lp_min_sleep_cycle(hw: Pmu, slow_clk_cycle: u8) {
    hw.wakeup().cntl3().modify(|w| w.set_lp_min_slp_val(slow_clk_cycle));
}

#[inline(always)]
pub fn get_lp_min_sleep_cycle(hw: Pmu) -> u8 {
    hw.wakeup().cntl3().read().lp_min_slp_val()
}

#[inline(always)]
pub fn clear_reject_cause(hw: Pmu) {
    hw.wakeup().cntl4().write(|w| w.set_slp_reject_cause_clr(true));
}

#[inline(always)]
pub fn set_lp_analog_wait_target_cycle(hw: Pmu, slow_clk_cycle: u8) {
    hw.wakeup().cntl5().modify(|w| w.set_lp_ana_wait_target(slow_clk_cycle));
}

#[inline(always)]
pub fn get_lp_analog_wait_target_cycle(hw: Pmu) -> u8 {
    hw.wakeup().cntl5().read().lp_ana_wait_target()
}

#[inline(always)]
pub fn set_hp_analog_wait_target_cycle(hw: Pmu, cycle: u16) {
    hw.wakeup().cntl7().modify(|w| w.set_ana_wait_target(cycle));
}

#[inline(always)]
pub fn get_hp_analog_wait_target_cycle(hw: Pmu) -> u16 {
    hw.wakeup().cntl7().read().ana_wait_target()
}

#[inline(always)]
pub fn set_lite_wakeup_enable(hw: Pmu, wakeup_en: bool) {
    hw.wakeup().cntl8().modify(|w| w.set_lp_lite_wakeup_ena(wakeup_en));
}

#[inline(always)]
pub fn get_lite_wakeup_enable(hw: Pmu) -> bool {
    hw.wakeup().cntl8().read().lp_lite_wakeup_ena()
}

#[inline(always)]
pub fn get_wakeup_cause(hw: Pmu) -> u32 {
    hw.wakeup().status0().read()
}

#[inline(always)]
pub fn get_reject_cause(hw: Pmu) -> u32 {
    hw.wakeup().status1().read()
}

#[inline(always)]
pub fn get_lite_wakeup_cause(hw: Pmu) -> u32 {
    hw.wakeup().status2().read()
}

// HP interrupts

#[inline(always)]
pub fn is_sleep_wakeup(hw: Pmu) -> bool {
    hw.hp_ext().int_raw().read().wakeup()
}

#[inline(always)]
pub fn is_sleep_reject(hw: Pmu) -> bool {
    hw.hp_ext().int_raw().read().reject()
}

#[inline(always)]
pub fn clear_hp_sw_intr_status(hw: Pmu) {
    hw.hp_ext().int_clr().write(|w| w.set_sw(true));
}

#[inline(always)]
pub fn clear_wakeup_intr_status(hw: Pmu) {
    hw.hp_ext().int_clr().write(|w| w.set_wakeup(true));
}

#[inline(always)]
pub fn clear_reject_intr_status(hw: Pmu) {
    hw.hp_ext().int_clr().write(|w| w.set_reject(true));
}

#[inline(always)]
pub fn set_hp_intr_enable(hw: Pmu, ena: HpIntr) {
    hw.hp_ext().int_ena().write_value(ena);
}

#[inline(always)]
pub fn get_hp_intr_enable(hw: Pmu) -> HpIntr {
    hw.hp_ext().int_ena().read()
}

// LP interrupts

#[inline(always)]
pub fn get_lp_interrupt_raw(hw: Pmu) -> u32 {
    hw.lp_ext().int_raw().read().into_bits()
}

#[inline(always)]
pub fn clear_lp_intsts_mask(hw: Pmu, mask: u32) {
    hw.lp_ext().int_clr().write_value(LpIntr::from_bits(mask));
}

#[inline(always)]
pub fn clear_lp_sw_intr_status(hw: Pmu) {
    hw.lp_ext().int_clr().write(|w| w.set_hp_sw_trigger(true));
}

#[inline(always)]
pub fn enable_lp_sw_intr(hw: Pmu, enable: bool) {
    hw.lp_ext().int_ena().modify(|w| w.set_hp_sw_trigger(enable));
}

#[inline(always)]
pub fn is_lp_sw_intr_enabled(hw: Pmu) -> bool {
    hw.lp_ext().int_ena().read().hp_sw_trigger()
}

// EXT1 wakeup. Bit n of every pin mask is LP_IO n.

/// Select the EXT1 wakeup pins.
///
/// `level_mask` picks the trigger: 0 wakes the chip when all selected pins
/// are low, 1 when any selected pin is high.
pub fn ext1_set_wakeup_pins(hw: Pmu, io_mask: u8, level_mask: u8) {
    hw.lp_ext().ext_wakeup_sel().modify(|w| w.set_pins(io_mask));
    hw.lp_ext().ext_wakeup_lv().modify(|w| w.set_pins(level_mask));
}

pub fn ext1_clear_wakeup_pins(hw: Pmu) {
    hw.lp_ext().ext_wakeup_sel().modify(|w| w.set_pins(0));
}

pub fn ext1_get_wakeup_pins(hw: Pmu) -> u8 {
    hw.lp_ext().ext_wakeup_sel().read().pins()
}

pub fn ext1_get_wakeup_status(hw: Pmu) -> u8 {
    hw.lp_ext().ext_wakeup_st().read().pins()
}

pub fn ext1_clear_wakeup_status(hw: Pmu) {
    hw.lp_ext().ext_wakeup_cntl().modify(|w| w.set_status_clr(true));
}
