use super::*;
use crate::pmu::param::*;
use crate::pmu::regs::*;
use crate::pmu::*;

/// PMU register block backed by RAM.
struct FakePmu {
    mem: [u32; PMU_BLOCK_SIZE / 4],
}

impl FakePmu {
    fn new() -> Self {
        Self { mem: [0; PMU_BLOCK_SIZE / 4] }
    }

    fn hw(&mut self) -> Pmu {
        unsafe { Pmu::from_ptr(self.mem.as_mut_ptr() as *mut ()) }
    }
}

fn word(hw: Pmu, offset: usize) -> u32 {
    unsafe { (hw.as_ptr() as *mut u8).add(offset).cast::<u32>().read_volatile() }
}

fn set_word(hw: Pmu, offset: usize, val: u32) {
    unsafe { (hw.as_ptr() as *mut u8).add(offset).cast::<u32>().write_volatile(val) }
}

const fn hp_reg(mode: HpMode, reg: usize) -> usize {
    HP_SYS_OFFSET + mode as usize * HP_SYS_STRIDE + reg
}

#[test]
fn hp_dig_power_round_trip() {
    let mut pmu = FakePmu::new();
    let hw = pmu.hw();

    for flag in [
        HpDigPower::new(),
        HpDigPower::new().with_top_pd_en(true).with_cnnt_pd_en(true).with_mem_pd_en(true),
        HpDigPower::new().with_dcdc_switch_pd_en(true).with_mem_dslp(true),
    ] {
        hp::set_dig_power(hw, HpMode::Sleep, flag);
        assert_eq!(hp::get_dig_power(hw, HpMode::Sleep), flag);
    }
    assert_eq!(word(hw, hp_reg(HpMode::Sleep, 0x00)), 0x0060_0000);
}

#[test]
fn hp_sleep_write_leaves_active_untouched() {
    let mut pmu = FakePmu::new();
    let hw = pmu.hw();

    hp::set_icg_func(hw, HpMode::Active, 0xffff_ffff);
    hp::set_icg_func(hw, HpMode::Sleep, 0x1234_5678);
    hp::set_cpu_stall(hw, HpMode::Sleep, true);

    assert_eq!(hp::get_icg_func(hw, HpMode::Active), 0xffff_ffff);
    assert_eq!(hp::get_icg_func(hw, HpMode::Sleep), 0x1234_5678);
    assert_eq!(hp::get_icg_func(hw, HpMode::Modem), 0);
    assert!(!hp::get_syscntl(hw, HpMode::Active).dig_cpu_stall());
    assert!(hp::get_syscntl(hw, HpMode::Sleep).dig_cpu_stall());
}

#[test]
fn hp_icg_round_trip() {
    let mut pmu = FakePmu::new();
    let hw = pmu.hw();

    for val in [0, u32::MAX, 0x8000_0001] {
        hp::set_icg_apb(hw, HpMode::Modem, val);
        hp::set_icg_modem(hw, HpMode::Modem, val);
        hp::set_backup_icg_func(hw, HpMode::Modem, val);
        assert_eq!(hp::get_icg_apb(hw, HpMode::Modem), val);
        assert_eq!(hp::get_icg_modem(hw, HpMode::Modem), val);
        assert_eq!(hp::get_backup_icg_func(hw, HpMode::Modem), val);
    }
}

#[test]
fn hp_syscntl_fields() {
    let mut pmu = FakePmu::new();
    let hw = pmu.hw();
    let mode = HpMode::Active;

    hp::set_power_detect_bypass_enable(hw, mode, true);
    hp::set_uart_wakeup_enable(hw, mode, true);
    hp::set_hold_all_lp_pad(hw, mode, true);
    hp::set_hold_all_hp_pad(hw, mode, true);
    hp::set_dig_pad_slp_sel(hw, mode, true);
    hp::set_pause_watchdog(hw, mode, true);
    hp::set_cpu_stall(hw, mode, true);
    assert_eq!(word(hw, hp_reg(mode, 0x10)), 0x3f80_0000);

    hp::set_uart_wakeup_enable(hw, mode, false);
    hp::set_pause_watchdog(hw, mode, false);
    let syscntl = hp::get_syscntl(hw, mode);
    assert!(syscntl.power_det_bypass());
    assert!(!syscntl.uart_wakeup_en());
    assert!(syscntl.lp_pad_hold_all());
    assert!(syscntl.hp_pad_hold_all());
    assert!(syscntl.dig_pad_slp_sel());
    assert!(!syscntl.dig_pause_wdt());
    assert!(syscntl.dig_cpu_stall());
}

#[test]
fn hp_clk_power_and_xtal() {
    let mut pmu = FakePmu::new();
    let hw = pmu.hw();

    for (pll, i2c) in [(0, 0), (0xf, 0xf), (0x5, 0xa)] {
        let flag = HpClkPower::new().with_xpd_pll(pll).with_xpd_pll_i2c(i2c).with_i2c_iso_en(true);
        hp::set_clk_power(hw, HpMode::Active, flag);
        assert_eq!(hp::get_clk_power(hw, HpMode::Active), flag);
    }
    assert_eq!(word(hw, hp_reg(HpMode::Active, 0x14)), 0x5a40_0000);

    hp::set_xtal_xpd(hw, HpMode::Active, true);
    assert!(hp::get_xtal_xpd(hw, HpMode::Active));
    assert!(!hp::get_xtal_xpd(hw, HpMode::Sleep));
    assert_eq!(word(hw, hp_reg(HpMode::Active, 0x30)), 0x8000_0000);
}

#[test]
fn hp_bias_fields() {
    let mut pmu = FakePmu::new();
    let hw = pmu.hw();
    let mode = HpMode::Active;

    for (vset, dcm, atten) in [(0, 0, 0), (31, 3, 15), (27, 1, 6)] {
        hp::set_dcm_vset(hw, mode, vset);
        hp::set_dcm_mode(hw, mode, dcm);
        hp::set_dbg_atten(hw, mode, atten);
        let bias = hp::get_bias(hw, mode);
        assert_eq!(bias.dcm_vset(), vset);
        assert_eq!(bias.dcm_mode(), dcm);
        assert_eq!(bias.dbg_atten(), atten);
    }

    hp::set_bias_xpd(hw, mode, true);
    hp::set_current_power_off(hw, mode, true);
    hp::set_bias_sleep_enable(hw, mode, true);
    let bias = hp::get_bias(hw, mode);
    assert!(bias.xpd_bias() && bias.pd_cur() && bias.bias_sleep());

    hp::set_current_power_off(hw, mode, false);
    assert!(!hp::get_bias(hw, mode).pd_cur());
    assert_eq!(hp::get_bias(hw, mode).dcm_vset(), 27);
}

#[test]
fn hp_retention_backup_enable() {
    let mut pmu = FakePmu::new();
    let hw = pmu.hw();

    let active = hp_system_retention_param_default(HpMode::Active);
    let sleep = hp_system_retention_param_default(HpMode::Sleep);
    hp::set_retention_param(hw, HpMode::Active, active.retention);
    hp::set_retention_param(hw, HpMode::Sleep, sleep.retention);

    hp::set_sleep_to_active_backup_enable(hw);
    assert_eq!(hp::get_retention_param(hw, HpMode::Active), active.retention | 1 << 29);
    assert_eq!(hp::get_retention_param(hw, HpMode::Sleep), sleep.retention);

    hp::set_active_to_sleep_backup_enable(hw);
    assert_eq!(hp::get_retention_param(hw, HpMode::Sleep), sleep.retention | 1 << 30);
    assert!(HpSleepBackup::from_bits(hp::get_retention_param(hw, HpMode::Sleep)).active2sleep_backup_en());

    hp::set_sleep_to_active_backup_disable(hw);
    hp::set_active_to_sleep_backup_disable(hw);
    assert_eq!(hp::get_retention_param(hw, HpMode::Active), active.retention);
    assert_eq!(hp::get_retention_param(hw, HpMode::Sleep), sleep.retention);
}

#[test]
fn hp_sysclk_fields() {
    let mut pmu = FakePmu::new();
    let hw = pmu.hw();
    let mode = HpMode::Sleep;

    for src in [SysclkSource::Xtal, SysclkSource::RcFast, SysclkSource::Cpll] {
        hp::set_dig_sysclk(hw, mode, src);
        assert_eq!(hp::get_dig_sysclk(hw, mode), Some(src));
    }

    hp::set_sysclk_nodiv(hw, mode, true);
    hp::set_icg_sysclk_enable(hw, mode, true);
    hp::set_sysclk_slp_sel(hw, mode, true);
    hp::set_icg_sysclk_slp_sel(hw, mode, true);
    assert_eq!(word(hw, hp_reg(mode, 0x24)), 0x7c00_0000);

    hp::set_sysclk_slp_sel(hw, mode, false);
    let sysclk = hp::get_sysclk(hw, mode);
    assert!(sysclk.dig_sysclk_nodiv() && sysclk.icg_sysclk_en() && sysclk.icg_slp_sel());
    assert!(!sysclk.sysclk_slp_sel());

    set_word(hw, hp_reg(mode, 0x24), 0xc000_0000);
    assert_eq!(hp::get_dig_sysclk(hw, mode), None);
}

#[test]
fn hp_regulator_fields() {
    let mut pmu = FakePmu::new();
    let hw = pmu.hw();
    let mode = HpMode::Active;

    for (dbias, slp) in [(0, 0), (31, 15), (0x1c, 8)] {
        hp::set_regulator_dbias(hw, mode, dbias);
        hp::set_regulator_sleep_logic_dbias(hw, mode, slp);
        hp::set_regulator_sleep_memory_dbias(hw, mode, slp);
        let reg = hp::get_regulator0(hw, mode);
        assert_eq!(reg.dbias(), dbias);
        assert_eq!(reg.slp_logic_dbias(), slp);
        assert_eq!(reg.slp_mem_dbias(), slp);
    }

    hp::set_regulator_xpd(hw, mode, true);
    hp::set_regulator_sleep_logic_xpd(hw, mode, true);
    hp::set_regulator_sleep_memory_xpd(hw, mode, false);
    let reg = hp::get_regulator0(hw, mode);
    assert!(reg.xpd() && reg.slp_logic_xpd() && !reg.slp_mem_xpd());

    for drv_b in [0, 0x00ff_ffff, 0x0080_0001] {
        hp::set_regulator_driver_bar(hw, mode, drv_b);
        assert_eq!(hp::get_regulator_driver_bar(hw, mode), drv_b);
    }
    assert_eq!(word(hw, hp_reg(mode, 0x2c)), 0x8000_0100);
}

#[test]
fn hp_sleep_flash_ldo_channel() {
    let mut pmu = FakePmu::new();
    let hw = pmu.hw();

    hp::set_regulator_dbias(hw, HpMode::Sleep, 0x1f);
    hp::enable_sleep_flash_ldo_channel(hw, true);
    assert_eq!(hp::get_regulator0(hw, HpMode::Sleep).xpd_0p1a(), 8);
    assert_eq!(hp::get_regulator0(hw, HpMode::Sleep).dbias(), 0x1f);
    assert_eq!(hp::get_regulator0(hw, HpMode::Active).into_bits(), 0);

    hp::enable_sleep_flash_ldo_channel(hw, false);
    assert_eq!(hp::get_regulator0(hw, HpMode::Sleep).xpd_0p1a(), 0);
}

#[test]
fn hp_param_records_apply() {
    let mut pmu = FakePmu::new();
    let hw = pmu.hw();

    for mode in HpMode::ALL {
        let power = hp_system_power_param_default(mode);
        hp::set_dig_power(hw, mode, power.dig_power);
        hp::set_clk_power(hw, mode, power.clk_power);
        hp::set_xtal_xpd(hw, mode, power.xtal.xpd_xtal());

        let digital = hp_system_digital_param_default(mode);
        hp::set_syscntl(hw, mode, digital.syscntl);
    }

    assert_eq!(hp::get_clk_power(hw, HpMode::Active).xpd_pll(), 0xf);
    assert!(hp::get_dig_power(hw, HpMode::Sleep).dcdc_switch_pd_en());
    assert!(hp::get_xtal_xpd(hw, HpMode::Active));
    assert!(!hp::get_xtal_xpd(hw, HpMode::Sleep));
    assert!(hp::get_syscntl(hw, HpMode::Sleep).dig_cpu_stall());
    assert_eq!(hp::get_syscntl(hw, HpMode::Modem).into_bits(), 0);
}

#[test]
fn lp_regulator_fields() {
    let mut pmu = FakePmu::new();
    let hw = pmu.hw();

    for mode in LpMode::ALL {
        for (dbias, slp, drv_b) in [(0, 0, 0), (31, 15, 15), (0x12, 0x6, 0x9)] {
            lp::set_regulator_dbias(hw, mode, dbias);
            lp::set_regulator_sleep_dbias(hw, mode, slp);
            lp::set_regulator_driver_bar(hw, mode, drv_b);
            let reg = lp::get_regulator0(hw, mode);
            assert_eq!(reg.dbias(), dbias);
            assert_eq!(reg.slp_dbias(), slp);
            assert_eq!(lp::get_regulator_driver_bar(hw, mode), drv_b);
        }
    }

    lp::set_regulator_xpd(hw, LpMode::Sleep, true);
    lp::set_regulator_slp_xpd(hw, LpMode::Sleep, true);
    let reg = lp::get_regulator0(hw, LpMode::Sleep);
    assert!(reg.xpd() && reg.slp_xpd());
    assert!(!lp::get_regulator0(hw, LpMode::Active).xpd());
}

#[test]
fn lp_power_fields() {
    let mut pmu = FakePmu::new();
    let hw = pmu.hw();

    for mode in LpMode::ALL {
        let power = lp_system_power_param_default(mode);
        lp::set_dig_power(hw, mode, power.dig_power);
        lp::set_clk_power(hw, mode, power.clk_power);
        assert_eq!(lp::get_dig_power(hw, mode), power.dig_power);
        assert_eq!(lp::get_clk_power(hw, mode), power.clk_power);
    }
    assert!(lp::get_clk_power(hw, LpMode::Active).xpd_fosc());
    assert!(lp::get_dig_power(hw, LpMode::Sleep).mem_dslp());

    lp::set_xtal_xpd(hw, LpMode::Sleep, true);
    assert!(lp::get_xtal_xpd(hw, LpMode::Sleep));
    assert_eq!(word(hw, LP_SYS_OFFSET + LP_SYS_STRIDE + 0x08), 0x8000_0000);
}

#[test]
fn lp_bias_fields() {
    let mut pmu = FakePmu::new();
    let hw = pmu.hw();

    let analog = lp_system_analog_param_default(LpMode::Sleep);
    lp::set_bias_xpd(hw, LpMode::Sleep, analog.bias.xpd_bias());
    lp::set_dbg_atten(hw, LpMode::Sleep, analog.bias.dbg_atten());
    lp::set_current_power_off(hw, LpMode::Sleep, analog.bias.pd_cur());
    lp::set_bias_sleep_enable(hw, LpMode::Sleep, analog.bias.bias_sleep());
    assert_eq!(lp::get_bias(hw, LpMode::Sleep), analog.bias);

    for atten in [0, 15, 7] {
        lp::set_dbg_atten(hw, LpMode::Sleep, atten);
        assert_eq!(lp::get_bias(hw, LpMode::Sleep).dbg_atten(), atten);
    }
}

#[test]
#[should_panic]
fn lp_xtal_active_slot_rejected() {
    let mut pmu = FakePmu::new();
    lp::set_xtal_xpd(pmu.hw(), LpMode::Active, true);
}

#[test]
#[should_panic]
fn lp_bias_active_slot_rejected() {
    let mut pmu = FakePmu::new();
    lp::set_bias_sleep_enable(pmu.hw(), LpMode::Active, true);
}

#[test]
fn imm_pad_hold_strobes() {
    let mut pmu = FakePmu::new();
    let hw = pmu.hw();
    let pad_hold_all = IMM_OFFSET + 0x18;

    imm::set_hp_pad_hold_all(hw, true);
    assert_eq!(word(hw, pad_hold_all), 1 << 30);
    imm::set_hp_pad_hold_all(hw, false);
    assert_eq!(word(hw, pad_hold_all), 1 << 31);
    imm::set_lp_pad_hold_all(hw, true);
    assert_eq!(word(hw, pad_hold_all), 1 << 28);
    imm::set_lp_pad_hold_all(hw, false);
    assert_eq!(word(hw, pad_hold_all), 1 << 29);
}

#[test]
fn imm_clock_strobes() {
    let mut pmu = FakePmu::new();
    let hw = pmu.hw();
    let sleep_sysclk = IMM_OFFSET + 0x04;

    imm::set_icg_slp_sel(hw, true);
    assert_eq!(word(hw, sleep_sysclk), 1 << 30);
    imm::set_icg_slp_sel(hw, false);
    assert_eq!(word(hw, sleep_sysclk), 1 << 29);
    imm::update_dig_sysclk_sel(hw, true);
    assert_eq!(word(hw, sleep_sysclk), 1 << 31);
    imm::update_dig_icg_switch(hw, true);
    assert_eq!(word(hw, sleep_sysclk), 1 << 28);

    imm::update_dig_icg_func(hw, true);
    assert_eq!(word(hw, IMM_OFFSET + 0x08), 1 << 31);
    imm::update_dig_icg_apb(hw, true);
    assert_eq!(word(hw, IMM_OFFSET + 0x0c), 1 << 31);

    imm::set_lp_rootclk_sel(hw, true);
    assert_eq!(word(hw, IMM_OFFSET + 0x14), 1 << 31);
    imm::set_lp_rootclk_sel(hw, false);
    assert_eq!(word(hw, IMM_OFFSET + 0x14), 1 << 30);

    imm::set_clk_power(hw, 0xa5a5_0000);
    assert_eq!(imm::get_clk_power(hw), 0xa5a5_0000);
}

#[test]
fn power_domain_force() {
    let mut pmu = FakePmu::new();
    let hw = pmu.hw();

    power::set_hp_force_power_up(hw, HpPowerDomain::Top, true);
    power::set_hp_force_no_isolate(hw, HpPowerDomain::Top, true);
    power::set_hp_force_no_reset(hw, HpPowerDomain::Top, true);
    assert_eq!(word(hw, POWER_OFFSET + 0x08), 0b01_1100);

    power::set_hp_force_reset(hw, HpPowerDomain::Cnnt, true);
    power::set_hp_force_isolate(hw, HpPowerDomain::Cnnt, true);
    power::set_hp_force_power_down(hw, HpPowerDomain::Cnnt, true);
    let cnnt = power::get_hp_force(hw, HpPowerDomain::Cnnt);
    assert!(cnnt.force_reset() && cnnt.force_iso() && cnnt.force_pd());
    assert!(!cnnt.force_pu());

    power::set_memory_power_up(hw, true);
    power::set_memory_no_isolate(hw, true);
    power::set_memory_isolate(hw, true);
    power::set_memory_power_down(hw, true);
    power::set_memory_isolate(hw, false);
    let mem = power::get_hp_force(hw, HpPowerDomain::HpMem);
    assert!(mem.force_pu() && mem.force_no_iso() && mem.force_pd());
    assert!(!mem.force_iso());
    assert_eq!(word(hw, POWER_OFFSET + 0x10), 0b11_0100);

    power::set_lp_force_reset(hw, true);
    power::set_lp_force_isolate(hw, true);
    power::set_lp_force_power_up(hw, true);
    power::set_lp_force_no_reset(hw, true);
    power::set_lp_force_no_isolate(hw, true);
    power::set_lp_force_power_down(hw, true);
    assert_eq!(power::get_lp_force(hw).into_bits(), 0x3f);
    power::set_lp_force_power_down(hw, false);
    assert_eq!(power::get_lp_force(hw).into_bits(), 0x1f);

    power::set_dcdc_force_power_up(hw, true);
    power::set_dcdc_force_power_down(hw, true);
    power::set_dcdc_force_power_up(hw, false);
    let dcdc = power::get_dcdc_switch(hw);
    assert!(!dcdc.force_pu() && dcdc.force_pd());
}

#[test]
fn power_wait_cycles() {
    let mut pmu = FakePmu::new();
    let hw = pmu.hw();

    for cycle in [0, 0x1ff, 0x100] {
        power::set_hp_digital_power_supply_wait_cycle(hw, cycle);
        power::set_hp_digital_power_up_wait_cycle(hw, cycle);
        power::set_hp_digital_power_down_wait_cycle(hw, cycle);
        power::set_lp_digital_power_supply_wait_cycle(hw, cycle);
        power::set_lp_digital_power_up_wait_cycle(hw, cycle);
        power::set_lp_digital_power_down_wait_cycle(hw, cycle);
        assert_eq!(power::get_hp_digital_power_supply_wait_cycle(hw), cycle);
        assert_eq!(power::get_hp_digital_power_up_wait_cycle(hw), cycle);
        assert_eq!(power::get_hp_digital_power_down_wait_cycle(hw), cycle);
        assert_eq!(power::get_lp_digital_power_supply_wait_cycle(hw), cycle);
        assert_eq!(power::get_lp_digital_power_up_wait_cycle(hw), cycle);
        assert_eq!(power::get_lp_digital_power_down_wait_cycle(hw), cycle);
    }

    power::set_hp_digital_power_down_wait_cycle(hw, 1);
    assert_eq!(power::get_lp_digital_power_down_wait_cycle(hw), 0x100);
    assert_eq!(word(hw, POWER_OFFSET), (0x100 << 5) | (0x100 << 14) | (1 << 23));

    for cycle in [0, u16::MAX, 0x8000] {
        power::set_xtal_stable_wait_cycle(hw, cycle);
        power::set_pll_stable_wait_cycle(hw, !cycle);
        assert_eq!(power::get_xtal_stable_wait_cycle(hw), cycle);
        assert_eq!(power::get_pll_stable_wait_cycle(hw), !cycle);
    }

    for cycle in [0, u8::MAX, 0x80] {
        power::set_modify_icg_cntl_wait_cycle(hw, cycle);
        power::set_switch_icg_cntl_wait_cycle(hw, cycle);
        assert_eq!(power::get_modify_icg_cntl_wait_cycle(hw), cycle);
        assert_eq!(power::get_switch_icg_cntl_wait_cycle(hw), cycle);
    }
    assert_eq!(word(hw, HP_EXT_OFFSET), 0x8080);
}

#[test]
fn wakeup_sleep_and_reject() {
    let mut pmu = FakePmu::new();
    let hw = pmu.hw();

    wakeup::set_sleep_enable(hw);
    assert_eq!(word(hw, WAKEUP_OFFSET), 1 << 31);

    wakeup::set_reject_enable(hw, 0x1234);
    let reject = wakeup::get_reject_config(hw);
    assert_eq!(reject.sleep_reject_ena(), 0x1234);
    assert!(reject.slp_reject_en());
    wakeup::set_reject_disable(hw);
    assert_eq!(word(hw, WAKEUP_OFFSET + 0x04), 0x1234);

    wakeup::set_wakeup_enable(hw, 0x8000_0004);
    assert_eq!(wakeup::get_wakeup_enable(hw), 0x8000_0004);

    wakeup::clear_reject_cause(hw);
    assert_eq!(word(hw, WAKEUP_OFFSET + 0x10), 1 << 31);
}

#[test]
fn wakeup_cycles() {
    let mut pmu = FakePmu::new();
    let hw = pmu.hw();

    for val in [0, u8::MAX, 0x40] {
        wakeup::set_hp_min_sleep_cycle(hw, val);
        wakeup::set_lp_min_sleep_cycle(hw, val);
        wakeup::set_lp_analog_wait_target_cycle(hw, val);
        assert_eq!(wakeup::get_hp_min_sleep_cycle(hw), val);
        assert_eq!(wakeup::get_lp_min_sleep_cycle(hw), val);
        assert_eq!(wakeup::get_lp_analog_wait_target_cycle(hw), val);
    }
    for mode in [0, 3, 2] {
        wakeup::set_sleep_protect_mode(hw, mode);
        assert_eq!(wakeup::get_sleep_protect_mode(hw), mode);
    }
    assert_eq!(word(hw, WAKEUP_OFFSET + 0x0c), 0x0002_4040);

    for cycle in [0, u16::MAX, 0x0100] {
        wakeup::set_hp_analog_wait_target_cycle(hw, cycle);
        assert_eq!(wakeup::get_hp_analog_wait_target_cycle(hw), cycle);
    }

    wakeup::set_lite_wakeup_enable(hw, true);
    assert!(wakeup::get_lite_wakeup_enable(hw));
    wakeup::set_lite_wakeup_enable(hw, false);
    assert!(!wakeup::get_lite_wakeup_enable(hw));
}

#[test]
fn wakeup_causes_and_interrupts() {
    let mut pmu = FakePmu::new();
    let hw = pmu.hw();

    set_word(hw, WAKEUP_OFFSET + 0x24, 0x11);
    set_word(hw, WAKEUP_OFFSET + 0x28, 0x22);
    set_word(hw, WAKEUP_OFFSET + 0x2c, 0x33);
    assert_eq!(wakeup::get_wakeup_cause(hw), 0x11);
    assert_eq!(wakeup::get_reject_cause(hw), 0x22);
    assert_eq!(wakeup::get_lite_wakeup_cause(hw), 0x33);

    assert!(!wakeup::is_sleep_wakeup(hw));
    set_word(hw, HP_EXT_OFFSET + 0x04, 1 << 31);
    assert!(wakeup::is_sleep_wakeup(hw));
    assert!(!wakeup::is_sleep_reject(hw));
    set_word(hw, HP_EXT_OFFSET + 0x04, 1 << 30);
    assert!(wakeup::is_sleep_reject(hw));

    wakeup::clear_wakeup_intr_status(hw);
    assert_eq!(word(hw, HP_EXT_OFFSET + 0x10), 1 << 31);
    wakeup::clear_reject_intr_status(hw);
    assert_eq!(word(hw, HP_EXT_OFFSET + 0x10), 1 << 30);
    wakeup::clear_hp_sw_intr_status(hw);
    assert_eq!(word(hw, HP_EXT_OFFSET + 0x10), 1 << 29);

    let ena = HpIntr::new().with_wakeup(true).with_reject(true);
    wakeup::set_hp_intr_enable(hw, ena);
    assert_eq!(wakeup::get_hp_intr_enable(hw), ena);

    set_word(hw, LP_EXT_OFFSET, 0x8000_0000);
    assert_eq!(wakeup::get_lp_interrupt_raw(hw), 0x8000_0000);
    wakeup::clear_lp_intsts_mask(hw, 0x8000_0000);
    assert_eq!(word(hw, LP_EXT_OFFSET + 0x0c), 0x8000_0000);
    wakeup::clear_lp_sw_intr_status(hw);
    assert_eq!(word(hw, LP_EXT_OFFSET + 0x0c), 1 << 31);

    wakeup::enable_lp_sw_intr(hw, true);
    assert!(wakeup::is_lp_sw_intr_enabled(hw));
    wakeup::enable_lp_sw_intr(hw, false);
    assert!(!wakeup::is_lp_sw_intr_enabled(hw));
}

#[test]
fn ext1_wakeup_pins() {
    let mut pmu = FakePmu::new();
    let hw = pmu.hw();

    wakeup::ext1_set_wakeup_pins(hw, 0b1000_0101, 0b0000_0100);
    assert_eq!(wakeup::ext1_get_wakeup_pins(hw), 0b1000_0101);
    assert_eq!(word(hw, LP_EXT_OFFSET + 0x10), 0b0000_0100);

    wakeup::ext1_clear_wakeup_pins(hw);
    assert_eq!(wakeup::ext1_get_wakeup_pins(hw), 0);

    set_word(hw, LP_EXT_OFFSET + 0x18, 0xffff_ff21);
    assert_eq!(wakeup::ext1_get_wakeup_status(hw), 0x21);

    wakeup::ext1_clear_wakeup_status(hw);
    assert_eq!(word(hw, LP_EXT_OFFSET + 0x1c), 1 << 30);
}
