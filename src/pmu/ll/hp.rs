//! HP system registers, one copy per [`HpMode`].

use crate::pmu::regs::*;
use crate::pmu::{HpMode, Pmu, SysclkSource};

#[inline(always)]
pub fn set_dig_power(hw: Pmu, mode: HpMode, flag: HpDigPower) {
    hw.hp_sys(mode.index()).dig_power().write_value(flag);
}

#[inline(always)]
pub fn get_dig_power(hw: Pmu, mode: HpMode) -> HpDigPower {
    hw.hp_sys(mode.index()).dig_power().read()
}

/// Set the functional clock gates that stay open in `mode`, see [`IcgFunc`](crate::pmu::IcgFunc).
#[inline(always)]
pub fn set_icg_func(hw: Pmu, mode: HpMode, icg_func: u32) {
    hw.hp_sys(mode.index()).icg_func().write_value(icg_func);
}

#[inline(always)]
pub fn get_icg_func(hw: Pmu, mode: HpMode) -> u32 {
    hw.hp_sys(mode.index()).icg_func().read()
}

#[inline(always)]
pub fn set_icg_apb(hw: Pmu, mode: HpMode, bitmap: u32) {
    hw.hp_sys(mode.index()).icg_apb().write_value(bitmap);
}

#[inline(always)]
pub fn get_icg_apb(hw: Pmu, mode: HpMode) -> u32 {
    hw.hp_sys(mode.index()).icg_apb().read()
}

#[inline(always)]
pub fn set_icg_modem(hw: Pmu, mode: HpMode, code: u32) {
    hw.hp_sys(mode.index()).icg_modem().write_value(code);
}

#[inline(always)]
pub fn get_icg_modem(hw: Pmu, mode: HpMode) -> u32 {
    hw.hp_sys(mode.index()).icg_modem().read()
}

/// Replace the whole system control word of `mode`.
#[inline(always)]
pub fn set_syscntl(hw: Pmu, mode: HpMode, syscntl: HpSysCntl) {
    hw.hp_sys(mode.index()).syscntl().write_value(syscntl);
}

#[inline(always)]
pub fn get_syscntl(hw: Pmu, mode: HpMode) -> HpSysCntl {
    hw.hp_sys(mode.index()).syscntl().read()
}

#[inline(always)]
pub fn set_power_detect_bypass_enable(hw: Pmu, mode: HpMode, bypass_en: bool) {
    hw.hp_sys(mode.index()).syscntl().modify(|w| w.set_power_det_bypass(bypass_en));
}

#[inline(always)]
pub fn set_uart_wakeup_enable(hw: Pmu, mode: HpMode, wakeup_en: bool) {
    hw.hp_sys(mode.index()).syscntl().modify(|w| w.set_uart_wakeup_en(wakeup_en));
}

#[inline(always)]
pub fn set_hold_all_lp_pad(hw: Pmu, mode: HpMode, hold_all: bool) {
    hw.hp_sys(mode.index()).syscntl().modify(|w| w.set_lp_pad_hold_all(hold_all));
}

#[inline(always)]
pub fn set_hold_all_hp_pad(hw: Pmu, mode: HpMode, hold_all: bool) {
    hw.hp_sys(mode.index()).syscntl().modify(|w| w.set_hp_pad_hold_all(hold_all));
}

#[inline(always)]
pub fn set_dig_pad_slp_sel(hw: Pmu, mode: HpMode, slp_sel: bool) {
    hw.hp_sys(mode.index()).syscntl().modify(|w| w.set_dig_pad_slp_sel(slp_sel));
}

#[inline(always)]
pub fn set_pause_watchdog(hw: Pmu, mode: HpMode, pause_wdt: bool) {
    hw.hp_sys(mode.index()).syscntl().modify(|w| w.set_dig_pause_wdt(pause_wdt));
}

#[inline(always)]
pub fn set_cpu_stall(hw: Pmu, mode: HpMode, cpu_stall: bool) {
    hw.hp_sys(mode.index()).syscntl().modify(|w| w.set_dig_cpu_stall(cpu_stall));
}

#[inline(always)]
pub fn set_clk_power(hw: Pmu, mode: HpMode, xpd_flag: HpClkPower) {
    hw.hp_sys(mode.index()).clk_power().write_value(xpd_flag);
}

#[inline(always)]
pub fn get_clk_power(hw: Pmu, mode: HpMode) -> HpClkPower {
    hw.hp_sys(mode.index()).clk_power().read()
}

#[inline(always)]
pub fn set_xtal_xpd(hw: Pmu, mode: HpMode, xpd_xtal: bool) {
    hw.hp_sys(mode.index()).xtal().modify(|w| w.set_xpd_xtal(xpd_xtal));
}

#[inline(always)]
pub fn get_xtal_xpd(hw: Pmu, mode: HpMode) -> bool {
    hw.hp_sys(mode.index()).xtal().read().xpd_xtal()
}

#[inline(always)]
pub fn set_dcm_mode(hw: Pmu, mode: HpMode, dcm_mode: u8) {
    hw.hp_sys(mode.index()).bias().modify(|w| w.set_dcm_mode(dcm_mode));
}

#[inline(always)]
pub fn set_dcm_vset(hw: Pmu, mode: HpMode, dcm_vset: u8) {
    hw.hp_sys(mode.index()).bias().modify(|w| w.set_dcm_vset(dcm_vset));
}

#[inline(always)]
pub fn set_bias_xpd(hw: Pmu, mode: HpMode, xpd_bias: bool) {
    hw.hp_sys(mode.index()).bias().modify(|w| w.set_xpd_bias(xpd_bias));
}

#[inline(always)]
pub fn set_dbg_atten(hw: Pmu, mode: HpMode, value: u8) {
    hw.hp_sys(mode.index()).bias().modify(|w| w.set_dbg_atten(value));
}

#[inline(always)]
pub fn set_current_power_off(hw: Pmu, mode: HpMode, off: bool) {
    hw.hp_sys(mode.index()).bias().modify(|w| w.set_pd_cur(off));
}

#[inline(always)]
pub fn set_bias_sleep_enable(hw: Pmu, mode: HpMode, en: bool) {
    hw.hp_sys(mode.index()).bias().modify(|w| w.set_bias_sleep(en));
}

#[inline(always)]
pub fn get_bias(hw: Pmu, mode: HpMode) -> HpBias {
    hw.hp_sys(mode.index()).bias().read()
}

/// Write the raw backup word of `mode`, see [`HpSystemRetentionParam`](crate::pmu::param::HpSystemRetentionParam).
#[inline(always)]
pub fn set_retention_param(hw: Pmu, mode: HpMode, param: u32) {
    hw.hp_sys(mode.index()).backup().write_value(param);
}

#[inline(always)]
pub fn get_retention_param(hw: Pmu, mode: HpMode) -> u32 {
    hw.hp_sys(mode.index()).backup().read()
}

fn modify_active_backup(hw: Pmu, f: impl FnOnce(&mut HpActiveBackup)) {
    hw.hp_sys(HpMode::Active.index()).backup().modify(|w| {
        let mut backup = HpActiveBackup::from_bits(*w);
        f(&mut backup);
        *w = backup.into_bits();
    });
}

fn modify_sleep_backup(hw: Pmu, f: impl FnOnce(&mut HpSleepBackup)) {
    hw.hp_sys(HpMode::Sleep.index()).backup().modify(|w| {
        let mut backup = HpSleepBackup::from_bits(*w);
        f(&mut backup);
        *w = backup.into_bits();
    });
}

#[inline(always)]
pub fn set_sleep_to_active_backup_enable(hw: Pmu) {
    modify_active_backup(hw, |w| w.set_sleep2active_backup_en(true));
}

#[inline(always)]
pub fn set_sleep_to_active_backup_disable(hw: Pmu) {
    modify_active_backup(hw, |w| w.set_sleep2active_backup_en(false));
}

#[inline(always)]
pub fn set_active_to_sleep_backup_enable(hw: Pmu) {
    modify_sleep_backup(hw, |w| w.set_active2sleep_backup_en(true));
}

#[inline(always)]
pub fn set_active_to_sleep_backup_disable(hw: Pmu) {
    modify_sleep_backup(hw, |w| w.set_active2sleep_backup_en(false));
}

#[inline(always)]
pub fn set_backup_icg_func(hw: Pmu, mode: HpMode, icg_func: u32) {
    hw.hp_sys(mode.index()).backup_clk().write_value(icg_func);
}

#[inline(always)]
pub fn get_backup_icg_func(hw: Pmu, mode: HpMode) -> u32 {
    hw.hp_sys(mode.index()).backup_clk().read()
}

#[inline(always)]
pub fn set_sysclk_nodiv(hw: Pmu, mode: HpMode, sysclk_nodiv: bool) {
    hw.hp_sys(mode.index()).sysclk().modify(|w| w.set_dig_sysclk_nodiv(sysclk_nodiv));
}

#[inline(always)]
pub fn set_icg_sysclk_enable(hw: Pmu, mode: HpMode, icg_sysclk_en: bool) {
    hw.hp_sys(mode.index()).sysclk().modify(|w| w.set_icg_sysclk_en(icg_sysclk_en));
}

#[inline(always)]
pub fn set_sysclk_slp_sel(hw: Pmu, mode: HpMode, slp_sel: bool) {
    hw.hp_sys(mode.index()).sysclk().modify(|w| w.set_sysclk_slp_sel(slp_sel));
}

#[inline(always)]
pub fn set_icg_sysclk_slp_sel(hw: Pmu, mode: HpMode, slp_sel: bool) {
    hw.hp_sys(mode.index()).sysclk().modify(|w| w.set_icg_slp_sel(slp_sel));
}

#[inline(always)]
pub fn set_dig_sysclk(hw: Pmu, mode: HpMode, sysclk_sel: SysclkSource) {
    hw.hp_sys(mode.index()).sysclk().modify(|w| w.set_dig_sysclk_sel(sysclk_sel.to_bits()));
}

/// Returns `None` if the register holds an undefined clock source.
#[inline(always)]
pub fn get_dig_sysclk(hw: Pmu, mode: HpMode) -> Option<SysclkSource> {
    SysclkSource::from_bits(hw.hp_sys(mode.index()).sysclk().read().dig_sysclk_sel())
}

#[inline(always)]
pub fn get_sysclk(hw: Pmu, mode: HpMode) -> HpSysclk {
    hw.hp_sys(mode.index()).sysclk().read()
}

#[inline(always)]
pub fn set_regulator_sleep_logic_xpd(hw: Pmu, mode: HpMode, slp_xpd: bool) {
    hw.hp_sys(mode.index()).regulator0().modify(|w| w.set_slp_logic_xpd(slp_xpd));
}

#[inline(always)]
pub fn set_regulator_sleep_memory_xpd(hw: Pmu, mode: HpMode, slp_xpd: bool) {
    hw.hp_sys(mode.index()).regulator0().modify(|w| w.set_slp_mem_xpd(slp_xpd));
}

#[inline(always)]
pub fn set_regulator_xpd(hw: Pmu, mode: HpMode, xpd: bool) {
    hw.hp_sys(mode.index()).regulator0().modify(|w| w.set_xpd(xpd));
}

#[inline(always)]
pub fn set_regulator_sleep_logic_dbias(hw: Pmu, mode: HpMode, slp_dbias: u8) {
    hw.hp_sys(mode.index()).regulator0().modify(|w| w.set_slp_logic_dbias(slp_dbias));
}

#[inline(always)]
pub fn set_regulator_sleep_memory_dbias(hw: Pmu, mode: HpMode, slp_dbias: u8) {
    hw.hp_sys(mode.index()).regulator0().modify(|w| w.set_slp_mem_dbias(slp_dbias));
}

/// Keep the flash LDO channel (VO1) powered in sleep.
///
/// Has no effect below chip revision v1.0.
#[inline(always)]
pub fn enable_sleep_flash_ldo_channel(hw: Pmu, enable: bool) {
    hw.hp_sys(HpMode::Sleep.index())
        .regulator0()
        .modify(|w| w.set_xpd_0p1a(if enable { 8 } else { 0 }));
}

#[inline(always)]
pub fn set_regulator_dbias(hw: Pmu, mode: HpMode, dbias: u8) {
    hw.hp_sys(mode.index()).regulator0().modify(|w| w.set_dbias(dbias));
}

#[inline(always)]
pub fn get_regulator0(hw: Pmu, mode: HpMode) -> HpRegulator0 {
    hw.hp_sys(mode.index()).regulator0().read()
}

#[inline(always)]
pub fn set_regulator_driver_bar(hw: Pmu, mode: HpMode, drv_b: u32) {
    hw.hp_sys(mode.index()).regulator1().modify(|w| w.set_drv_b(drv_b));
}

#[inline(always)]
pub fn get_regulator_driver_bar(hw: Pmu, mode: HpMode) -> u32 {
    hw.hp_sys(mode.index()).regulator1().read().drv_b()
}
