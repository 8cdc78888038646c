//! Power domain force controls and power sequencing waits.

use crate::pmu::regs::*;
use crate::pmu::{HpPowerDomain, Pmu};

#[inline(always)]
fn modify_hp_pd(hw: Pmu, domain: HpPowerDomain, f: impl FnOnce(&mut PowerPd)) {
    hw.power().hp_pd(domain as usize).modify(f);
}

pub fn set_hp_force_reset(hw: Pmu, domain: HpPowerDomain, rst: bool) {
    modify_hp_pd(hw, domain, |w| w.set_force_reset(rst));
}

pub fn set_hp_force_isolate(hw: Pmu, domain: HpPowerDomain, iso: bool) {
    modify_hp_pd(hw, domain, |w| w.set_force_iso(iso));
}

pub fn set_hp_force_power_up(hw: Pmu, domain: HpPowerDomain, fpu: bool) {
    modify_hp_pd(hw, domain, |w| w.set_force_pu(fpu));
}

pub fn set_hp_force_no_reset(hw: Pmu, domain: HpPowerDomain, no_rst: bool) {
    modify_hp_pd(hw, domain, |w| w.set_force_no_reset(no_rst));
}

pub fn set_hp_force_no_isolate(hw: Pmu, domain: HpPowerDomain, no_iso: bool) {
    modify_hp_pd(hw, domain, |w| w.set_force_no_iso(no_iso));
}

pub fn set_hp_force_power_down(hw: Pmu, domain: HpPowerDomain, fpd: bool) {
    modify_hp_pd(hw, domain, |w| w.set_force_pd(fpd));
}

pub fn get_hp_force(hw: Pmu, domain: HpPowerDomain) -> PowerPd {
    hw.power().hp_pd(domain as usize).read()
}

pub fn set_lp_force_reset(hw: Pmu, rst: bool) {
    hw.power().lp_peri().modify(|w| w.set_force_reset(rst));
}

pub fn set_lp_force_isolate(hw: Pmu, iso: bool) {
    hw.power().lp_peri().modify(|w| w.set_force_iso(iso));
}

pub fn set_lp_force_power_up(hw: Pmu, fpu: bool) {
    hw.power().lp_peri().modify(|w| w.set_force_pu(fpu));
}

pub fn set_lp_force_no_reset(hw: Pmu, no_rst: bool) {
    hw.power().lp_peri().modify(|w| w.set_force_no_reset(no_rst));
}

pub fn set_lp_force_no_isolate(hw: Pmu, no_iso: bool) {
    hw.power().lp_peri().modify(|w| w.set_force_no_iso(no_iso));
}

pub fn set_lp_force_power_down(hw: Pmu, fpd: bool) {
    hw.power().lp_peri().modify(|w| w.set_force_pd(fpd));
}

pub fn get_lp_force(hw: Pmu) -> PowerPd {
    hw.power().lp_peri().read()
}

// HP memory shortcuts.

pub fn set_memory_isolate(hw: Pmu, iso: bool) {
    set_hp_force_isolate(hw, HpPowerDomain::HpMem, iso);
}

pub fn set_memory_power_down(hw: Pmu, fpd: bool) {
    set_hp_force_power_down(hw, HpPowerDomain::HpMem, fpd);
}

pub fn set_memory_no_isolate(hw: Pmu, no_iso: bool) {
    set_hp_force_no_isolate(hw, HpPowerDomain::HpMem, no_iso);
}

pub fn set_memory_power_up(hw: Pmu, fpu: bool) {
    set_hp_force_power_up(hw, HpPowerDomain::HpMem, fpu);
}

pub fn set_dcdc_force_power_up(hw: Pmu, fpu: bool) {
    hw.power().dcdc_switch().modify(|w| w.set_force_pu(fpu));
}

pub fn set_dcdc_force_power_down(hw: Pmu, fpd: bool) {
    hw.power().dcdc_switch().modify(|w| w.set_force_pd(fpd));
}

pub fn get_dcdc_switch(hw: Pmu) -> PowerDcdcSwitch {
    hw.power().dcdc_switch().read()
}

// Digital power sequencing. `wait_timer0` times the HP domain, `wait_timer1`
// the LP domain. All values are in slow clock cycles, 9 bits wide.

pub fn set_hp_digital_power_supply_wait_cycle(hw: Pmu, cycle: u16) {
    hw.power().wait_timer0().modify(|w| w.set_wait_timer(cycle));
}

pub fn get_hp_digital_power_supply_wait_cycle(hw: Pmu) -> u16 {
    hw.power().wait_timer0().read().wait_timer()
}

pub fn set_hp_digital_power_up_wait_cycle(hw: Pmu, cycle: u16) {
    hw.power().wait_timer0().modify(|w| w.set_powerup_timer(cycle));
}

pub fn get_hp_digital_power_up_wait_cycle(hw: Pmu) -> u16 {
    hw.power().wait_timer0().read().powerup_timer()
}

pub fn set_hp_digital_power_down_wait_cycle(hw: Pmu, cycle: u16) {
    hw.power().wait_timer0().modify(|w| w.set_powerdown_timer(cycle));
}

pub fn get_hp_digital_power_down_wait_cycle(hw: Pmu) -> u16 {
    hw.power().wait_timer0().read().powerdown_timer()
}

pub fn set_lp_digital_power_supply_wait_cycle(hw: Pmu, cycle: u16) {
    hw.power().wait_timer1().modify(|w| w.set_wait_timer(cycle));
}

pub fn get_lp_digital_power_supply_wait_cycle(hw: Pmu) -> u16 {
    hw.power().wait_timer1().read().wait_timer()
}

pub fn set_lp_digital_power_up_wait_cycle(hw: Pmu, cycle: u16) {
    hw.power().wait_timer1().modify(|w| w.set_powerup_timer(cycle));
}

pub fn get_lp_digital_power_up_wait_cycle(hw: Pmu) -> u16 {
    hw.power().wait_timer1().read().powerup_timer()
}

pub fn set_lp_digital_power_down_wait_cycle(hw: Pmu, cycle: u16) {
    hw.power().wait_timer1().modify(|w| w.set_powerdown_timer(cycle));
}

pub fn get_lp_digital_power_down_wait_cycle(hw: Pmu) -> u16 {
    hw.power().wait_timer1().read().powerdown_timer()
}

/// In fast clock cycles.
pub fn set_xtal_stable_wait_cycle(hw: Pmu, cycle: u16) {
    hw.power().clk_wait().modify(|w| w.set_wait_xtal_stable(cycle));
}

pub fn get_xtal_stable_wait_cycle(hw: Pmu) -> u16 {
    hw.power().clk_wait().read().wait_xtal_stable()
}

/// In fast clock cycles.
pub fn set_pll_stable_wait_cycle(hw: Pmu, cycle: u16) {
    hw.power().clk_wait().modify(|w| w.set_wait_pll_stable(cycle));
}

pub fn get_pll_stable_wait_cycle(hw: Pmu) -> u16 {
    hw.power().clk_wait().read().wait_pll_stable()
}

pub fn set_modify_icg_cntl_wait_cycle(hw: Pmu, cycle: u8) {
    hw.hp_ext().clk_cntl().modify(|w| w.set_modify_icg_cntl_wait(cycle));
}

pub fn get_modify_icg_cntl_wait_cycle(hw: Pmu) -> u8 {
    hw.hp_ext().clk_cntl().read().modify_icg_cntl_wait()
}

pub fn set_switch_icg_cntl_wait_cycle(hw: Pmu, cycle: u8) {
    hw.hp_ext().clk_cntl().modify(|w| w.set_switch_icg_cntl_wait(cycle));
}

pub fn get_switch_icg_cntl_wait_cycle(hw: Pmu) -> u8 {
    hw.hp_ext().clk_cntl().read().switch_icg_cntl_wait()
}
