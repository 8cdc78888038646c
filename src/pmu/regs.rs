//! ESP32-P4 PMU register values.
//!
//! Every type is one 32-bit register word. Field positions follow the PMU
//! register map; reserved ranges are padding and read back as written.

// `bitfield-struct` generates `const fn` setters that call `panic!` on out-of-range values.
// This crate defines a `panic!` macro that maps to `defmt::panic!` when `defmt` is enabled,
// which is not usable in const-eval. Shadow it here so the generated code uses `core::panic!`.
#[allow(unused_macros)]
macro_rules! panic {
    ($($x:tt)*) => {
        ::core::panic!($($x)*)
    };
}

use bitfield_struct::bitfield;

// ---------------------------------------------------------------------------
// HP system, replicated per HP mode
// ---------------------------------------------------------------------------

/// Digital power domains powered down while the mode is active.
#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct HpDigPower {
    #[bits(21)]
    __reserved0: u32,
    /// [21] DCDC switch power-down enable
    pub dcdc_switch_pd_en: bool,
    /// [22] HP memory deep-sleep
    pub mem_dslp: bool,
    /// [23] HP memory power-down enable
    pub mem_pd_en: bool,
    #[bits(6)]
    __reserved1: u8,
    /// [30] CNNT domain power-down enable
    pub cnnt_pd_en: bool,
    /// [31] TOP domain power-down enable
    pub top_pd_en: bool,
}

/// Analog clock sources and I2C bus power of the HP domain.
#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct HpClkPower {
    #[bits(22)]
    __reserved0: u32,
    /// [22] Isolate the analog I2C master
    pub i2c_iso_en: bool,
    /// [23] Retain the analog I2C master state
    pub i2c_retention: bool,
    /// [27:24] Power up the PLL I2C interfaces, one bit per PLL
    #[bits(4)]
    pub xpd_pll_i2c: u8,
    /// [31:28] Power up the PLLs, one bit per PLL
    #[bits(4)]
    pub xpd_pll: u8,
}

#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct HpXtal {
    #[bits(31)]
    __reserved0: u32,
    /// [31] Power up the main crystal
    pub xpd_xtal: bool,
}

/// HP system control flags.
#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct HpSysCntl {
    #[bits(23)]
    __reserved0: u32,
    /// [23] Bypass the power detector
    pub power_det_bypass: bool,
    /// [24] Allow UART activity to wake the chip
    pub uart_wakeup_en: bool,
    /// [25] Hold every LP pad
    pub lp_pad_hold_all: bool,
    /// [26] Hold every HP pad
    pub hp_pad_hold_all: bool,
    /// [27] Switch digital pads to their sleep configuration
    pub dig_pad_slp_sel: bool,
    /// [28] Pause the digital watchdogs
    pub dig_pause_wdt: bool,
    /// [29] Stall the HP CPU
    pub dig_cpu_stall: bool,
    #[bits(2)]
    __reserved1: u8,
}

/// Bias and DCDC converter control.
#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct HpBias {
    #[bits(18)]
    __reserved0: u32,
    /// [22:18] DCDC output voltage setting
    #[bits(5)]
    pub dcm_vset: u8,
    /// [24:23] DCDC operating mode
    #[bits(2)]
    pub dcm_mode: u8,
    /// [25] Power up the bias generator
    pub xpd_bias: bool,
    /// [29:26] Debug attenuation
    #[bits(4)]
    pub dbg_atten: u8,
    /// [30] Power off the bias current
    pub pd_cur: bool,
    /// [31] Bias sleep mode
    pub bias_sleep: bool,
}

/// Retention control as seen from the HP ACTIVE slot.
///
/// Each slot of the backup register describes the two transitions that end
/// in that slot's mode, so the same bits carry different names per slot.
#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct HpActiveBackup {
    #[bits(4)]
    __reserved0: u8,
    /// [5:4]
    #[bits(2)]
    pub sleep2active_backup_modem_clk_code: u8,
    /// [7:6]
    #[bits(2)]
    pub modem2active_backup_modem_clk_code: u8,
    #[bits(2)]
    __reserved1: u8,
    /// [10]
    pub active_retention_mode: bool,
    /// [11]
    pub sleep2active_retention_en: bool,
    /// [12]
    pub modem2active_retention_en: bool,
    #[bits(1)]
    __reserved2: u8,
    /// [15:14]
    #[bits(2)]
    pub sleep2active_backup_clk_sel: u8,
    /// [17:16]
    #[bits(2)]
    pub modem2active_backup_clk_sel: u8,
    #[bits(2)]
    __reserved3: u8,
    /// [22:20] REGDMA link direction and entry, see [`regdma_config`]
    #[bits(3)]
    pub sleep2active_backup_mode: u8,
    /// [25:23]
    #[bits(3)]
    pub modem2active_backup_mode: u8,
    #[bits(3)]
    __reserved4: u8,
    /// [29]
    pub sleep2active_backup_en: bool,
    /// [30]
    pub modem2active_backup_en: bool,
    #[bits(1)]
    __reserved5: u8,
}

/// Retention control as seen from the HP SLEEP slot.
#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct HpSleepBackup {
    #[bits(4)]
    __reserved0: u8,
    /// [5:4]
    #[bits(2)]
    pub modem2sleep_backup_modem_clk_code: u8,
    /// [7:6]
    #[bits(2)]
    pub active2sleep_backup_modem_clk_code: u8,
    #[bits(2)]
    __reserved1: u8,
    /// [10]
    pub sleep_retention_mode: bool,
    /// [11]
    pub modem2sleep_retention_en: bool,
    /// [12]
    pub active2sleep_retention_en: bool,
    #[bits(1)]
    __reserved2: u8,
    /// [15:14]
    #[bits(2)]
    pub modem2sleep_backup_clk_sel: u8,
    /// [17:16]
    #[bits(2)]
    pub active2sleep_backup_clk_sel: u8,
    #[bits(2)]
    __reserved3: u8,
    /// [22:20]
    #[bits(3)]
    pub modem2sleep_backup_mode: u8,
    /// [25:23]
    #[bits(3)]
    pub active2sleep_backup_mode: u8,
    #[bits(3)]
    __reserved4: u8,
    /// [29]
    pub modem2sleep_backup_en: bool,
    /// [30]
    pub active2sleep_backup_en: bool,
    #[bits(1)]
    __reserved5: u8,
}

/// Encode a REGDMA backup mode: link direction in bit 2, entry in bits 1:0.
pub const fn regdma_config(dir: u8, entry: u8) -> u8 {
    ((dir << 2) | (entry & 0x3)) & 0x7
}

/// System clock selection.
#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct HpSysclk {
    #[bits(26)]
    __reserved0: u32,
    /// [26] Bypass the system clock divider
    pub dig_sysclk_nodiv: bool,
    /// [27] Enable the system clock gate
    pub icg_sysclk_en: bool,
    /// [28] Use the sleep system clock selection
    pub sysclk_slp_sel: bool,
    /// [29] Use the sleep ICG selection
    pub icg_slp_sel: bool,
    /// [31:30] System clock source, see [`super::SysclkSource`]
    #[bits(2)]
    pub dig_sysclk_sel: u8,
}

/// HP regulator control.
#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct HpRegulator0 {
    /// [3:0] Flash LDO channel (VO1) in sleep. Only bit 3 is wired, and only
    /// on chip revision v1.0 and later.
    #[bits(4)]
    pub xpd_0p1a: u8,
    /// [8:4] LP rail bias voltage while active
    #[bits(5)]
    pub lp_dbias_vol: u8,
    /// [13:9] HP rail bias voltage while active
    #[bits(5)]
    pub hp_dbias_vol: u8,
    /// [14] Take the bias from `dbias` instead of the init value
    pub dbias_sel: bool,
    /// [15] Initialize the bias
    pub dbias_init: bool,
    /// [16] Power up the memory regulator in sleep
    pub slp_mem_xpd: bool,
    /// [17] Power up the logic regulator in sleep
    pub slp_logic_xpd: bool,
    /// [18] Power up the regulator
    pub xpd: bool,
    /// [22:19] Memory regulator bias in sleep
    #[bits(4)]
    pub slp_mem_dbias: u8,
    /// [26:23] Logic regulator bias in sleep
    #[bits(4)]
    pub slp_logic_dbias: u8,
    /// [31:27] Regulator bias
    #[bits(5)]
    pub dbias: u8,
}

#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct HpRegulator1 {
    #[bits(8)]
    __reserved0: u8,
    /// [31:8] Regulator driver strength, active low
    #[bits(24)]
    pub drv_b: u32,
}

// ---------------------------------------------------------------------------
// LP system, replicated per LP mode
// ---------------------------------------------------------------------------

#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct LpRegulator0 {
    #[bits(21)]
    __reserved0: u32,
    /// [21] Power up the regulator in sleep
    pub slp_xpd: bool,
    /// [22] Power up the regulator
    pub xpd: bool,
    /// [26:23] Regulator bias in sleep
    #[bits(4)]
    pub slp_dbias: u8,
    /// [31:27] Regulator bias
    #[bits(5)]
    pub dbias: u8,
}

#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct LpRegulator1 {
    #[bits(28)]
    __reserved0: u32,
    /// [31:28] Regulator driver strength, active low
    #[bits(4)]
    pub drv_b: u8,
}

/// LP crystal control. Only meaningful in the LP SLEEP slot.
#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct LpXtal {
    #[bits(31)]
    __reserved0: u32,
    /// [31]
    pub xpd_xtal: bool,
}

#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct LpDigPower {
    #[bits(26)]
    __reserved0: u32,
    /// [26] Switch LP pads to their sleep configuration
    pub lp_pad_slp_sel: bool,
    /// [27] Brown-out detector source
    pub bod_source_sel: bool,
    /// [29:28] VDDBAT mode
    #[bits(2)]
    pub vddbat_mode: u8,
    /// [30] LP memory deep-sleep
    pub mem_dslp: bool,
    /// [31] LP peripheral power-down enable
    pub peri_pd_en: bool,
}

#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct LpClkPower {
    #[bits(27)]
    __reserved0: u32,
    /// [27] Power up the LP PLL
    pub xpd_lppll: bool,
    /// [28] Power up the external 32 kHz crystal
    pub xpd_xtal32k: bool,
    /// [29] Power up the internal 32 kHz RC oscillator
    pub xpd_rc32k: bool,
    /// [30] Power up the fast RC oscillator
    pub xpd_fosc: bool,
    /// [31] Power down the oscillators
    pub pd_osc: bool,
}

/// LP bias control. Only meaningful in the LP SLEEP slot.
#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct LpBias {
    #[bits(25)]
    __reserved0: u32,
    /// [25]
    pub xpd_bias: bool,
    /// [29:26]
    #[bits(4)]
    pub dbg_atten: u8,
    /// [30]
    pub pd_cur: bool,
    /// [31]
    pub bias_sleep: bool,
}

// ---------------------------------------------------------------------------
// Immediate controls
// ---------------------------------------------------------------------------

#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct ImmSleepSysclk {
    #[bits(28)]
    __reserved0: u32,
    /// [28] WT
    pub update_dig_icg_switch: bool,
    /// [29] WT
    pub tie_low_icg_slp_sel: bool,
    /// [30] WT
    pub tie_high_icg_slp_sel: bool,
    /// [31] WT
    pub update_dig_sysclk_sel: bool,
}

#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct ImmHpFuncIcg {
    #[bits(31)]
    __reserved0: u32,
    /// [31] WT
    pub update_dig_icg_func_en: bool,
}

#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct ImmHpApbIcg {
    #[bits(31)]
    __reserved0: u32,
    /// [31] WT
    pub update_dig_icg_apb_en: bool,
}

#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct ImmLpIcg {
    #[bits(30)]
    __reserved0: u32,
    /// [30] WT
    pub tie_low_lp_rootclk_sel: bool,
    /// [31] WT
    pub tie_high_lp_rootclk_sel: bool,
}

#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct ImmPadHoldAll {
    #[bits(28)]
    __reserved0: u32,
    /// [28] WT
    pub tie_high_lp_pad_hold_all: bool,
    /// [29] WT
    pub tie_low_lp_pad_hold_all: bool,
    /// [30] WT
    pub tie_high_hp_pad_hold_all: bool,
    /// [31] WT
    pub tie_low_hp_pad_hold_all: bool,
}

// ---------------------------------------------------------------------------
// Power domain control
// ---------------------------------------------------------------------------

/// Digital power sequencing timers, in slow clock cycles.
#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct PowerWaitTimer {
    #[bits(5)]
    __reserved0: u8,
    /// [13:5]
    #[bits(9)]
    pub wait_timer: u16,
    /// [22:14]
    #[bits(9)]
    pub powerup_timer: u16,
    /// [31:23]
    #[bits(9)]
    pub powerdown_timer: u16,
}

/// Software force controls of one power domain.
#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct PowerPd {
    /// [0]
    pub force_reset: bool,
    /// [1]
    pub force_iso: bool,
    /// [2]
    pub force_pu: bool,
    /// [3]
    pub force_no_reset: bool,
    /// [4]
    pub force_no_iso: bool,
    /// [5]
    pub force_pd: bool,
    #[bits(26)]
    __reserved0: u32,
}

/// Clock stabilisation waits, in fast clock cycles.
#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct PowerClkWait {
    /// [15:0]
    #[bits(16)]
    pub wait_xtal_stable: u16,
    /// [31:16]
    #[bits(16)]
    pub wait_pll_stable: u16,
}

#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct PowerDcdcSwitch {
    /// [0]
    pub force_pu: bool,
    /// [1]
    pub force_pd: bool,
    #[bits(30)]
    __reserved0: u32,
}

// ---------------------------------------------------------------------------
// Sleep / wakeup control
// ---------------------------------------------------------------------------

#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct WakeupCntl0 {
    #[bits(31)]
    __reserved0: u32,
    /// [31] WT, request sleep
    pub sleep_req: bool,
}

#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct WakeupCntl1 {
    /// [30:0] Sources allowed to reject a sleep request
    #[bits(31)]
    pub sleep_reject_ena: u32,
    /// [31]
    pub slp_reject_en: bool,
}

#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct WakeupCntl3 {
    /// [7:0] Minimum LP sleep, in slow clock cycles
    #[bits(8)]
    pub lp_min_slp_val: u8,
    /// [15:8] Minimum HP sleep, in slow clock cycles
    #[bits(8)]
    pub hp_min_slp_val: u8,
    /// [17:16]
    #[bits(2)]
    pub sleep_prt_sel: u8,
    #[bits(14)]
    __reserved0: u16,
}

#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct WakeupCntl4 {
    #[bits(31)]
    __reserved0: u32,
    /// [31] WT
    pub slp_reject_cause_clr: bool,
}

#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct WakeupCntl5 {
    /// [19:0]
    #[bits(20)]
    pub modem_wait_target: u32,
    #[bits(4)]
    __reserved0: u8,
    /// [31:24] LP analog wait, in slow clock cycles
    #[bits(8)]
    pub lp_ana_wait_target: u8,
}

#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct WakeupCntl7 {
    #[bits(16)]
    __reserved0: u16,
    /// [31:16] HP analog wait, in slow clock cycles
    #[bits(16)]
    pub ana_wait_target: u16,
}

#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct WakeupCntl8 {
    #[bits(31)]
    __reserved0: u32,
    /// [31]
    pub lp_lite_wakeup_ena: bool,
}

// ---------------------------------------------------------------------------
// HP / LP extension registers
// ---------------------------------------------------------------------------

#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct HpClkCntl {
    /// [7:0]
    #[bits(8)]
    pub modify_icg_cntl_wait: u8,
    /// [15:8]
    #[bits(8)]
    pub switch_icg_cntl_wait: u8,
    #[bits(16)]
    __reserved0: u16,
}

/// HP interrupt bits, shared by raw/status/enable/clear.
#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct HpIntr {
    #[bits(29)]
    __reserved0: u32,
    /// [29]
    pub sw: bool,
    /// [30]
    pub reject: bool,
    /// [31]
    pub wakeup: bool,
}

/// LP interrupt bits, shared by raw/status/enable/clear.
#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct LpIntr {
    #[bits(31)]
    __reserved0: u32,
    /// [31] Software trigger from the HP CPU
    pub hp_sw_trigger: bool,
}

/// EXT1 wakeup pin bitmap, bit n is LP_IO n.
#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct ExtWakeupPins {
    /// [7:0]
    #[bits(8)]
    pub pins: u8,
    #[bits(24)]
    __reserved0: u32,
}

#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct ExtWakeupCntl {
    #[bits(30)]
    __reserved0: u32,
    /// [30] WT
    pub status_clr: bool,
    /// [31]
    pub filter: bool,
}
