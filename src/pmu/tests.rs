use super::param::*;
use super::regs::*;
use super::*;

#[test]
fn mode_from_index() {
    assert_eq!(HpMode::from_index(0), HpMode::Active);
    assert_eq!(HpMode::from_index(1), HpMode::Modem);
    assert_eq!(HpMode::from_index(2), HpMode::Sleep);
    assert_eq!(LpMode::from_index(0), LpMode::Active);
    assert_eq!(LpMode::from_index(1), LpMode::Sleep);
    for mode in HpMode::ALL {
        assert_eq!(HpMode::from_index(mode.index()), mode);
    }
}

#[test]
#[should_panic]
fn hp_mode_from_index_out_of_range() {
    HpMode::from_index(3);
}

#[test]
#[should_panic]
fn lp_mode_from_index_out_of_range() {
    LpMode::from_index(2);
}

#[test]
#[should_panic]
fn hp_sys_block_out_of_range() {
    let mut mem = [0u32; PMU_BLOCK_SIZE / 4];
    let hw = unsafe { Pmu::from_ptr(mem.as_mut_ptr() as *mut ()) };
    hw.hp_sys(3);
}

#[test]
fn hp_power_param() {
    let active = hp_system_power_param_default(HpMode::Active);
    assert_eq!(active.dig_power.into_bits(), 0);
    assert!(!active.dig_power.dcdc_switch_pd_en());
    assert!(!active.clk_power.i2c_iso_en());
    assert!(!active.clk_power.i2c_retention());
    assert_eq!(active.clk_power.xpd_pll_i2c(), 0xf);
    assert_eq!(active.clk_power.xpd_pll(), 0xf);
    assert!(active.xtal.xpd_xtal());

    let sleep = hp_system_power_param_default(HpMode::Sleep);
    assert!(sleep.dig_power.dcdc_switch_pd_en());
    assert!(!sleep.dig_power.mem_dslp());
    assert!(!sleep.dig_power.mem_pd_en());
    assert!(!sleep.dig_power.cnnt_pd_en());
    assert!(!sleep.dig_power.top_pd_en());
    assert!(sleep.clk_power.i2c_iso_en());
    assert!(sleep.clk_power.i2c_retention());
    assert_eq!(sleep.clk_power.xpd_pll_i2c(), 1);
    assert_eq!(sleep.clk_power.xpd_pll(), 0);
    assert!(!sleep.xtal.xpd_xtal());
}

#[test]
fn hp_clock_param() {
    let active = hp_system_clock_param_default(HpMode::Active);
    assert_eq!(active.icg_func, 0xffff_ffff);
    assert_eq!(active.icg_apb, 0xffff_ffff);
    assert_eq!(active.icg_modem, 0);
    assert!(active.sysclk.icg_sysclk_en());
    assert!(!active.sysclk.sysclk_slp_sel());
    assert!(!active.sysclk.icg_slp_sel());
    assert!(!active.sysclk.dig_sysclk_nodiv());
    assert_eq!(active.sysclk.dig_sysclk_sel(), SysclkSource::Xtal as u8);
    assert_eq!(active.sysclk.into_bits(), 0x0800_0000);

    let sleep = hp_system_clock_param_default(HpMode::Sleep);
    assert_eq!(sleep.icg_func, 0);
    assert_eq!(sleep.icg_apb, 0);
    assert_eq!(sleep.icg_modem, 0);
    assert!(!sleep.sysclk.icg_sysclk_en());
    assert!(sleep.sysclk.sysclk_slp_sel());
    assert!(sleep.sysclk.icg_slp_sel());
    assert_eq!(sleep.sysclk.dig_sysclk_sel(), SysclkSource::Xtal as u8);
    assert_eq!(sleep.sysclk.into_bits(), 0x3000_0000);
}

#[test]
fn hp_digital_param() {
    assert_eq!(hp_system_digital_param_default(HpMode::Active).syscntl.into_bits(), 0);

    let sleep = hp_system_digital_param_default(HpMode::Sleep).syscntl;
    assert!(sleep.uart_wakeup_en());
    assert!(!sleep.lp_pad_hold_all());
    assert!(!sleep.hp_pad_hold_all());
    assert!(!sleep.dig_pad_slp_sel());
    assert!(sleep.dig_pause_wdt());
    assert!(sleep.dig_cpu_stall());
    assert!(!sleep.power_det_bypass());
}

#[test]
fn hp_analog_param() {
    let active = hp_system_analog_param_default(HpMode::Active);
    assert_eq!(active.bias.dcm_vset(), 27);
    assert_eq!(active.bias.dcm_mode(), 1);
    assert!(active.bias.xpd_bias());
    assert_eq!(active.bias.dbg_atten(), 0);
    assert!(!active.bias.pd_cur());
    assert!(!active.bias.bias_sleep());
    assert_eq!(active.regulator0.lp_dbias_vol(), 0xd);
    assert_eq!(active.regulator0.hp_dbias_vol(), 0x1c);
    assert!(active.regulator0.dbias_sel());
    assert!(active.regulator0.dbias_init());
    assert!(!active.regulator0.slp_mem_xpd());
    assert!(!active.regulator0.slp_logic_xpd());
    assert_eq!(active.regulator0.slp_mem_dbias(), 0);
    assert_eq!(active.regulator0.slp_logic_dbias(), 0);
    assert_eq!(active.regulator1.drv_b(), 0);

    let sleep = hp_system_analog_param_default(HpMode::Sleep);
    assert_eq!(sleep.bias.dcm_vset(), 0);
    assert_eq!(sleep.bias.dcm_mode(), 0);
    assert!(!sleep.bias.xpd_bias());
    assert!(sleep.bias.pd_cur());
    assert!(sleep.bias.bias_sleep());
    assert_eq!(sleep.regulator0.into_bits(), 0);
    assert_eq!(sleep.regulator1.drv_b(), 0);
}

#[test]
fn regdma_encoding() {
    assert_eq!(regdma_config(0, 0), 0);
    assert_eq!(regdma_config(0, 2), 2);
    assert_eq!(regdma_config(1, 0), 4);
    assert_eq!(regdma_config(1, 1), 5);
    // Entry is masked to two bits, the result to three.
    assert_eq!(regdma_config(1, 7), 7);
    assert_eq!(regdma_config(3, 0), 4);
}

#[test]
fn hp_retention_param() {
    let active = hp_system_retention_param_default(HpMode::Active);
    let backup = HpActiveBackup::from_bits(active.retention);
    assert_eq!(backup.sleep2active_backup_modem_clk_code(), 2);
    assert_eq!(backup.modem2active_backup_modem_clk_code(), 2);
    assert_eq!(backup.sleep2active_backup_mode(), regdma_config(0, 0));
    assert_eq!(backup.modem2active_backup_mode(), regdma_config(0, 2));
    assert!(!backup.active_retention_mode());
    assert!(!backup.sleep2active_retention_en());
    assert!(!backup.modem2active_retention_en());
    assert!(!backup.sleep2active_backup_en());
    assert!(!backup.modem2active_backup_en());
    assert_eq!(active.retention, 0x0100_00a0);

    let sleep = hp_system_retention_param_default(HpMode::Sleep);
    let backup = HpSleepBackup::from_bits(sleep.retention);
    assert_eq!(backup.modem2sleep_backup_modem_clk_code(), 0);
    assert_eq!(backup.active2sleep_backup_modem_clk_code(), 2);
    assert_eq!(backup.modem2sleep_backup_mode(), regdma_config(1, 1));
    assert_eq!(backup.active2sleep_backup_mode(), regdma_config(1, 0));
    assert!(!backup.modem2sleep_backup_en());
    assert!(!backup.active2sleep_backup_en());
    assert_eq!(sleep.retention, 0x0250_0080);

    let backup_clk = IcgFunc::L2MEM_MEM
        | IcgFunc::L2MEM_SYS
        | IcgFunc::REGDMA
        | IcgFunc::HP_CLKRST
        | IcgFunc::SYSREG_APB
        | IcgFunc::ICM_CPU
        | IcgFunc::ICM_APB
        | IcgFunc::ICM_SYS
        | IcgFunc::ICM_MEM
        | IcgFunc::INTRMTX_APB;
    assert_eq!(active.backup_clk, backup_clk.bits());
    assert_eq!(sleep.backup_clk, backup_clk.bits());
    assert_eq!(active.backup_clk, 0x0030_163e);
}

#[test]
fn hp_modem_slot_is_zero() {
    let power = hp_system_power_param_default(HpMode::Modem);
    assert_eq!(power.dig_power.into_bits(), 0);
    assert_eq!(power.clk_power.into_bits(), 0);
    assert_eq!(power.xtal.into_bits(), 0);

    let clock = hp_system_clock_param_default(HpMode::Modem);
    assert_eq!((clock.icg_func, clock.icg_apb, clock.icg_modem), (0, 0, 0));
    assert_eq!(clock.sysclk.into_bits(), 0);

    assert_eq!(hp_system_digital_param_default(HpMode::Modem).syscntl.into_bits(), 0);

    let analog = hp_system_analog_param_default(HpMode::Modem);
    assert_eq!(analog.bias.into_bits(), 0);
    assert_eq!(analog.regulator0.into_bits(), 0);
    assert_eq!(analog.regulator1.into_bits(), 0);

    let retention = hp_system_retention_param_default(HpMode::Modem);
    assert_eq!((retention.retention, retention.backup_clk), (0, 0));
}

#[test]
fn lp_power_param() {
    let active = lp_system_power_param_default(LpMode::Active);
    assert_eq!(active.dig_power.into_bits(), 0);
    assert!(active.clk_power.xpd_fosc());
    assert_eq!(active.clk_power.xpd_xtal32k(), cfg!(feature = "rtc-ext-xtal"));
    assert!(!active.clk_power.xpd_lppll());
    assert!(!active.clk_power.xpd_rc32k());
    assert!(!active.clk_power.pd_osc());

    let sleep = lp_system_power_param_default(LpMode::Sleep);
    assert!(sleep.dig_power.mem_dslp());
    assert!(!sleep.dig_power.peri_pd_en());
    assert_eq!(sleep.dig_power.vddbat_mode(), 0);
    assert_eq!(sleep.clk_power.into_bits(), 0);
    assert!(!sleep.xtal.xpd_xtal());
}

#[test]
fn lp_analog_param() {
    let active = lp_system_analog_param_default(LpMode::Active);
    assert_eq!(active.regulator0.into_bits(), 0);
    assert_eq!(active.regulator1.into_bits(), 0);

    let sleep = lp_system_analog_param_default(LpMode::Sleep);
    assert!(!sleep.bias.xpd_bias());
    assert_eq!(sleep.bias.dbg_atten(), 0);
    assert!(sleep.bias.pd_cur());
    assert!(sleep.bias.bias_sleep());
    assert_eq!(sleep.regulator0.into_bits(), 0);
    assert_eq!(sleep.regulator1.into_bits(), 0);
}

#[test]
fn param_lookup_is_stable() {
    for mode in HpMode::ALL {
        assert!(core::ptr::eq(
            hp_system_power_param_default(mode),
            hp_system_power_param_default(mode)
        ));
        assert!(core::ptr::eq(
            hp_system_retention_param_default(mode),
            hp_system_retention_param_default(mode)
        ));
        assert_eq!(hp_system_clock_param_default(mode), hp_system_clock_param_default(mode));
    }
    for mode in LpMode::ALL {
        assert!(core::ptr::eq(
            lp_system_analog_param_default(mode),
            lp_system_analog_param_default(mode)
        ));
    }
}

#[test]
fn register_words_are_32_bit() {
    assert_eq!(core::mem::size_of::<HpDigPower>(), 4);
    assert_eq!(core::mem::size_of::<HpActiveBackup>(), 4);
    assert_eq!(core::mem::size_of::<PowerWaitTimer>(), 4);
    assert_eq!(core::mem::size_of::<LpBias>(), 4);
    assert_eq!(core::mem::size_of::<ExtWakeupPins>(), 4);
}

#[test]
fn block_offsets() {
    let mut mem = [0u32; PMU_BLOCK_SIZE / 4];
    let hw = unsafe { Pmu::from_ptr(mem.as_mut_ptr() as *mut ()) };
    let base = hw.as_ptr() as usize;
    let offset = |p: *mut ()| p as usize - base;

    assert_eq!(offset(hw.hp_sys(0).as_ptr()), 0x000);
    assert_eq!(offset(hw.hp_sys(2).as_ptr()), 0x068);
    assert_eq!(offset(hw.hp_sys(2).xtal().as_ptr() as *mut ()), 0x098);
    assert_eq!(offset(hw.lp_sys(1).bias().as_ptr() as *mut ()), 0x0c8);
    assert_eq!(offset(hw.imm().i2c_iso().as_ptr() as *mut ()), 0x0e8);
    assert_eq!(offset(hw.power().hp_pd(2).as_ptr() as *mut ()), 0x0fc);
    assert_eq!(offset(hw.wakeup().status2().as_ptr() as *mut ()), 0x138);
    assert_eq!(offset(hw.hp_ext().int_clr().as_ptr() as *mut ()), 0x14c);
    assert_eq!(offset(hw.lp_ext().ext_wakeup_cntl().as_ptr() as *mut ()), 0x16c);
}
