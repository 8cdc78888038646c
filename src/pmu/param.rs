//! Default PMU parameters per power mode.
//!
//! Each accessor returns the record the sleep sequencer programs into the
//! register copy of the given mode. The HP MODEM slot is unused on this chip
//! and holds an all-zero record.

use super::regs::*;
use super::{HpMode, IcgFunc, LpMode, SysclkSource};

cfg_if::cfg_if! {
    if #[cfg(feature = "rtc-ext-xtal")] {
        const SLOW_CLK_USE_EXT_XTAL: bool = true;
    } else {
        const SLOW_CLK_USE_EXT_XTAL: bool = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HpSystemPowerParam {
    pub dig_power: HpDigPower,
    pub clk_power: HpClkPower,
    pub xtal: HpXtal,
}

impl HpSystemPowerParam {
    const ZERO: Self = Self {
        dig_power: HpDigPower::new(),
        clk_power: HpClkPower::new(),
        xtal: HpXtal::new(),
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HpSystemClockParam {
    pub icg_func: u32,
    pub icg_apb: u32,
    pub icg_modem: u32,
    pub sysclk: HpSysclk,
}

impl HpSystemClockParam {
    const ZERO: Self = Self {
        icg_func: 0,
        icg_apb: 0,
        icg_modem: 0,
        sysclk: HpSysclk::new(),
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HpSystemDigitalParam {
    pub syscntl: HpSysCntl,
}

impl HpSystemDigitalParam {
    const ZERO: Self = Self { syscntl: HpSysCntl::new() };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HpSystemAnalogParam {
    pub bias: HpBias,
    pub regulator0: HpRegulator0,
    pub regulator1: HpRegulator1,
}

impl HpSystemAnalogParam {
    const ZERO: Self = Self {
        bias: HpBias::new(),
        regulator0: HpRegulator0::new(),
        regulator1: HpRegulator1::new(),
    };
}

/// Retention setup of one HP mode.
///
/// `retention` is the raw backup register word: decode it with
/// [`HpActiveBackup`] for the ACTIVE slot and [`HpSleepBackup`] for the SLEEP slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HpSystemRetentionParam {
    pub retention: u32,
    pub backup_clk: u32,
}

impl HpSystemRetentionParam {
    const ZERO: Self = Self { retention: 0, backup_clk: 0 };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LpSystemPowerParam {
    pub dig_power: LpDigPower,
    pub clk_power: LpClkPower,
    pub xtal: LpXtal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LpSystemAnalogParam {
    pub bias: LpBias,
    pub regulator0: LpRegulator0,
    pub regulator1: LpRegulator1,
}

static HP_POWER: [HpSystemPowerParam; HpMode::COUNT] = [
    // Active
    HpSystemPowerParam {
        dig_power: HpDigPower::new(),
        clk_power: HpClkPower::new()
            .with_i2c_iso_en(false)
            .with_i2c_retention(false)
            .with_xpd_pll_i2c(0xf)
            .with_xpd_pll(0xf),
        xtal: HpXtal::new().with_xpd_xtal(true),
    },
    // No modem
    HpSystemPowerParam::ZERO,
    // Sleep
    HpSystemPowerParam {
        dig_power: HpDigPower::new().with_dcdc_switch_pd_en(true),
        clk_power: HpClkPower::new()
            .with_i2c_iso_en(true)
            .with_i2c_retention(true)
            .with_xpd_pll_i2c(1)
            .with_xpd_pll(0),
        xtal: HpXtal::new().with_xpd_xtal(false),
    },
];

/// Power domains, clock power and crystal of an HP mode.
pub fn hp_system_power_param_default(mode: HpMode) -> &'static HpSystemPowerParam {
    &HP_POWER[mode.index()]
}

static HP_CLOCK: [HpSystemClockParam; HpMode::COUNT] = [
    HpSystemClockParam {
        icg_func: 0xffff_ffff,
        icg_apb: 0xffff_ffff,
        icg_modem: 0,
        sysclk: HpSysclk::new()
            .with_dig_sysclk_nodiv(false)
            .with_icg_sysclk_en(true)
            .with_sysclk_slp_sel(false)
            .with_icg_slp_sel(false)
            .with_dig_sysclk_sel(SysclkSource::Xtal.to_bits()),
    },
    HpSystemClockParam::ZERO,
    HpSystemClockParam {
        icg_func: 0,
        icg_apb: 0,
        icg_modem: 0,
        sysclk: HpSysclk::new()
            .with_dig_sysclk_nodiv(false)
            .with_icg_sysclk_en(false)
            .with_sysclk_slp_sel(true)
            .with_icg_slp_sel(true)
            .with_dig_sysclk_sel(SysclkSource::Xtal.to_bits()),
    },
];

/// Clock gates and system clock selection of an HP mode.
pub fn hp_system_clock_param_default(mode: HpMode) -> &'static HpSystemClockParam {
    &HP_CLOCK[mode.index()]
}

static HP_DIGITAL: [HpSystemDigitalParam; HpMode::COUNT] = [
    HpSystemDigitalParam { syscntl: HpSysCntl::new() },
    HpSystemDigitalParam::ZERO,
    HpSystemDigitalParam {
        syscntl: HpSysCntl::new()
            .with_uart_wakeup_en(true)
            .with_lp_pad_hold_all(false)
            .with_hp_pad_hold_all(false)
            .with_dig_pad_slp_sel(false)
            .with_dig_pause_wdt(true)
            .with_dig_cpu_stall(true),
    },
];

pub fn hp_system_digital_param_default(mode: HpMode) -> &'static HpSystemDigitalParam {
    &HP_DIGITAL[mode.index()]
}

static HP_ANALOG: [HpSystemAnalogParam; HpMode::COUNT] = [
    HpSystemAnalogParam {
        bias: HpBias::new()
            .with_dcm_vset(27)
            .with_dcm_mode(1)
            .with_xpd_bias(true)
            .with_dbg_atten(0)
            .with_pd_cur(false)
            .with_bias_sleep(false),
        regulator0: HpRegulator0::new()
            .with_lp_dbias_vol(0xd)
            .with_hp_dbias_vol(0x1c)
            .with_dbias_sel(true)
            .with_dbias_init(true)
            .with_slp_mem_xpd(false)
            .with_slp_logic_xpd(false)
            .with_slp_mem_dbias(0)
            .with_slp_logic_dbias(0),
        regulator1: HpRegulator1::new().with_drv_b(0),
    },
    HpSystemAnalogParam::ZERO,
    HpSystemAnalogParam {
        bias: HpBias::new()
            .with_dcm_vset(0)
            .with_dcm_mode(0)
            .with_xpd_bias(false)
            .with_dbg_atten(0)
            .with_pd_cur(true)
            .with_bias_sleep(true),
        regulator0: HpRegulator0::new()
            .with_slp_mem_xpd(false)
            .with_slp_logic_xpd(false)
            .with_slp_mem_dbias(0)
            .with_slp_logic_dbias(0),
        regulator1: HpRegulator1::new().with_drv_b(0),
    },
];

/// Bias and regulator setup of an HP mode.
pub fn hp_system_analog_param_default(mode: HpMode) -> &'static HpSystemAnalogParam {
    &HP_ANALOG[mode.index()]
}

/// Clocks kept running while REGDMA saves or restores the HP domain.
const RETENTION_BACKUP_CLK: u32 = IcgFunc::L2MEM_MEM
    .union(IcgFunc::L2MEM_SYS)
    .union(IcgFunc::REGDMA)
    .union(IcgFunc::HP_CLKRST)
    .union(IcgFunc::SYSREG_APB)
    .union(IcgFunc::ICM_CPU)
    .union(IcgFunc::ICM_APB)
    .union(IcgFunc::ICM_SYS)
    .union(IcgFunc::ICM_MEM)
    .union(IcgFunc::INTRMTX_APB)
    .bits();

static HP_RETENTION: [HpSystemRetentionParam; HpMode::COUNT] = [
    HpSystemRetentionParam {
        retention: HpActiveBackup::new()
            .with_sleep2active_backup_modem_clk_code(2)
            .with_modem2active_backup_modem_clk_code(2)
            .with_active_retention_mode(false)
            .with_sleep2active_retention_en(false)
            .with_modem2active_retention_en(false)
            .with_sleep2active_backup_clk_sel(0)
            .with_modem2active_backup_clk_sel(0)
            .with_sleep2active_backup_mode(regdma_config(0, 0))
            .with_modem2active_backup_mode(regdma_config(0, 2))
            .with_sleep2active_backup_en(false)
            .with_modem2active_backup_en(false)
            .into_bits(),
        backup_clk: RETENTION_BACKUP_CLK,
    },
    HpSystemRetentionParam::ZERO,
    HpSystemRetentionParam {
        retention: HpSleepBackup::new()
            .with_modem2sleep_backup_modem_clk_code(0)
            .with_active2sleep_backup_modem_clk_code(2)
            .with_sleep_retention_mode(false)
            .with_modem2sleep_retention_en(false)
            .with_active2sleep_retention_en(false)
            .with_modem2sleep_backup_clk_sel(0)
            .with_active2sleep_backup_clk_sel(0)
            .with_modem2sleep_backup_mode(regdma_config(1, 1))
            .with_active2sleep_backup_mode(regdma_config(1, 0))
            .with_modem2sleep_backup_en(false)
            .with_active2sleep_backup_en(false)
            .into_bits(),
        backup_clk: RETENTION_BACKUP_CLK,
    },
];

/// Retention (REGDMA backup) setup of an HP mode.
pub fn hp_system_retention_param_default(mode: HpMode) -> &'static HpSystemRetentionParam {
    &HP_RETENTION[mode.index()]
}

static LP_POWER: [LpSystemPowerParam; LpMode::COUNT] = [
    LpSystemPowerParam {
        dig_power: LpDigPower::new()
            .with_lp_pad_slp_sel(false)
            .with_bod_source_sel(false)
            .with_vddbat_mode(0)
            .with_mem_dslp(false)
            .with_peri_pd_en(false),
        clk_power: LpClkPower::new()
            .with_xpd_lppll(false)
            .with_xpd_xtal32k(SLOW_CLK_USE_EXT_XTAL)
            .with_xpd_rc32k(false)
            .with_xpd_fosc(true)
            .with_pd_osc(false),
        xtal: LpXtal::new(),
    },
    LpSystemPowerParam {
        dig_power: LpDigPower::new()
            .with_lp_pad_slp_sel(false)
            .with_bod_source_sel(false)
            .with_vddbat_mode(0)
            .with_mem_dslp(true)
            .with_peri_pd_en(false),
        clk_power: LpClkPower::new(),
        xtal: LpXtal::new().with_xpd_xtal(false),
    },
];

/// Power domains, clock power and crystal of an LP mode.
pub fn lp_system_power_param_default(mode: LpMode) -> &'static LpSystemPowerParam {
    &LP_POWER[mode.index()]
}

static LP_ANALOG: [LpSystemAnalogParam; LpMode::COUNT] = [
    LpSystemAnalogParam {
        bias: LpBias::new(),
        regulator0: LpRegulator0::new().with_slp_xpd(false).with_slp_dbias(0),
        regulator1: LpRegulator1::new().with_drv_b(0),
    },
    LpSystemAnalogParam {
        bias: LpBias::new()
            .with_xpd_bias(false)
            .with_dbg_atten(0)
            .with_pd_cur(true)
            .with_bias_sleep(true),
        regulator0: LpRegulator0::new().with_slp_xpd(false).with_slp_dbias(0),
        regulator1: LpRegulator1::new().with_drv_b(0),
    },
];

/// Bias and regulator setup of an LP mode. Bias is only defined for SLEEP.
pub fn lp_system_analog_param_default(mode: LpMode) -> &'static LpSystemAnalogParam {
    &LP_ANALOG[mode.index()]
}
