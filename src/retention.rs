//! Sleep retention modules, ESP32-H2
//!
//! Each module whose register state can be backed up across a power-down has
//! a fixed bit position. The positions are shared with the sleep code running
//! from ROM and other images and must never be renumbered.

use bitflags::bitflags;

/// A retainable hardware module. The discriminant is its bit position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum RetentionModule {
    // Clock
    ClockSystem = 1,
    ClockModem = 2,

    // Modem
    BleMac = 12,
    BtBb = 13,
    Ieee802154Mac = 14,

    // Digital peripherals
    IntrMatrix = 16,
    HpSystem = 17,
    TeeApm = 18,
    Uart0 = 19,
    Tg0 = 20,
    Iomux = 21,
    Spimem = 22,
    Systimer = 23,
    GdmaCh0 = 24,
    GdmaCh1 = 25,
    GdmaCh2 = 26,
    I2c0 = 27,
    I2c1 = 28,
}

impl RetentionModule {
    /// Lowest bit position a module may use.
    pub const MIN: u8 = 0;
    /// Highest bit position a module may use.
    pub const MAX: u8 = 31;

    pub const ALL: [RetentionModule; 18] = [
        RetentionModule::ClockSystem,
        RetentionModule::ClockModem,
        RetentionModule::BleMac,
        RetentionModule::BtBb,
        RetentionModule::Ieee802154Mac,
        RetentionModule::IntrMatrix,
        RetentionModule::HpSystem,
        RetentionModule::TeeApm,
        RetentionModule::Uart0,
        RetentionModule::Tg0,
        RetentionModule::Iomux,
        RetentionModule::Spimem,
        RetentionModule::Systimer,
        RetentionModule::GdmaCh0,
        RetentionModule::GdmaCh1,
        RetentionModule::GdmaCh2,
        RetentionModule::I2c0,
        RetentionModule::I2c1,
    ];

    pub const fn bit(self) -> u8 {
        self as u8
    }

    pub const fn bitmap(self) -> RetentionModuleBitmap {
        RetentionModuleBitmap::from_bits_retain(1 << self.bit())
    }

    pub fn from_bit(bit: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.bit() == bit)
    }
}

bitflags! {
    /// Set of retention modules.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RetentionModuleBitmap: u32 {
        const CLOCK_SYSTEM = 1 << 1;
        const CLOCK_MODEM = 1 << 2;

        const BLE_MAC = 1 << 12;
        const BT_BB = 1 << 13;
        const IEEE802154_MAC = 1 << 14;

        const INTR_MATRIX = 1 << 16;
        const HP_SYSTEM = 1 << 17;
        const TEE_APM = 1 << 18;
        const UART0 = 1 << 19;
        const TG0 = 1 << 20;
        const IOMUX = 1 << 21;
        const SPIMEM = 1 << 22;
        const SYSTIMER = 1 << 23;
        const GDMA_CH0 = 1 << 24;
        const GDMA_CH1 = 1 << 25;
        const GDMA_CH2 = 1 << 26;
        const I2C0 = 1 << 27;
        const I2C1 = 1 << 28;
    }
}

impl RetentionModuleBitmap {
    /// Every defined module.
    pub const ALL: Self = Self::all();

    pub fn contains_module(self, module: RetentionModule) -> bool {
        self.contains(module.bitmap())
    }
}

impl From<RetentionModule> for RetentionModuleBitmap {
    fn from(module: RetentionModule) -> Self {
        module.bitmap()
    }
}

impl FromIterator<RetentionModule> for RetentionModuleBitmap {
    fn from_iter<I: IntoIterator<Item = RetentionModule>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |acc, m| acc.union(m.bitmap()))
    }
}
