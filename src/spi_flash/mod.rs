//! SPI flash HAL (common part)
//!
//! [`SpiFlashHalContext`] is the driver data shared with the ROM flash
//! driver, so its layout is fixed. [`init`] fills it from a
//! [`SpiFlashHalConfig`]. The host operations themselves are provided by the
//! host driver through [`SpiFlashHost`]; [`nor::SpiFlash`] wraps any host as
//! an `embedded-storage` NOR flash.

use embedded_storage::nor_flash::{NorFlashError, NorFlashErrorKind};

pub mod nor;


/// Largest transfer a single host program operation accepts.
pub const MAX_WRITE_BYTES: usize = 64;
/// Largest transfer a single host read operation accepts.
pub const MAX_READ_BYTES: usize = 64;

/// Number of CS lines of the SPI flash hosts.
pub const CS_NUM: u32 = 3;

const APB_CLK_FREQ: u32 = 80_000_000;
const APB_CLK_KHZ: u32 = APB_CLK_FREQ / 1000;
/// Input delay added when signals go through the GPIO matrix instead of IO MUX.
const GPIO_MATRIX_DELAY_NS: u32 = 25;

/// SPI flash error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A configuration value is out of range.
    InvalidArgument,
    /// The address is not aligned to the required granularity.
    NotAligned,
    /// The range lies outside the flash.
    OutOfBounds,
}

impl NorFlashError for Error {
    fn kind(&self) -> NorFlashErrorKind {
        match self {
            Self::NotAligned => NorFlashErrorKind::NotAligned,
            Self::OutOfBounds => NorFlashErrorKind::OutOfBounds,
            Self::InvalidArgument => NorFlashErrorKind::Other,
        }
    }
}

impl From<NorFlashErrorKind> for Error {
    fn from(value: NorFlashErrorKind) -> Self {
        match value {
            NorFlashErrorKind::NotAligned => Self::NotAligned,
            NorFlashErrorKind::OutOfBounds => Self::OutOfBounds,
            _ => Self::InvalidArgument,
        }
    }
}

/// SPI peripheral a flash chip is attached to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiHost {
    Spi1,
    Spi2,
    Spi3,
}

impl SpiHost {
    /// Register block base address.
    pub const fn base(self) -> usize {
        match self {
            SpiHost::Spi1 => 0x3ff4_2000,
            SpiHost::Spi2 => 0x3ff6_4000,
            SpiHost::Spi3 => 0x3ff6_5000,
        }
    }
}

/// SPI flash clock speed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum FlashSpeed {
    Mhz5 = 0,
    Mhz10,
    Mhz20,
    Mhz26,
    Mhz40,
    Mhz80,
}

impl FlashSpeed {
    pub const fn mhz(self) -> u32 {
        match self {
            FlashSpeed::Mhz5 => 5,
            FlashSpeed::Mhz10 => 10,
            FlashSpeed::Mhz20 => 20,
            FlashSpeed::Mhz26 => 26,
            FlashSpeed::Mhz40 => 40,
            FlashSpeed::Mhz80 => 80,
        }
    }

    /// APB clock divider producing this speed.
    pub const fn divider(self) -> u32 {
        APB_CLK_FREQ / 1_000_000 / self.mhz()
    }
}

/// Read mode of the flash data phase.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum IoMode {
    /// Data read using single I/O, some limits on speed.
    #[default]
    SlowRd = 0,
    /// Data read using single I/O, no limit on speed.
    FastRd,
    /// Data read using dual I/O.
    Dout,
    /// Both address and data transferred using dual I/O.
    Dio,
    /// Data read using quad I/O.
    Qout,
    /// Both address and data transferred using quad I/O.
    Qio,
}

/// Clock register value for a divider of the APB clock.
///
/// A divider of 1 sets `clk_equ_sysclk` (bit 31). Otherwise the low, high and
/// count fields at `[5:0]`, `[11:6]` and `[17:12]` describe one SPI clock
/// period in APB cycles. The clock goes high after `clkdiv / 2` cycles, so odd
/// dividers get the shorter half high.
pub const fn clock_reg_val(clkdiv: u32) -> u32 {
    if clkdiv <= 1 {
        1 << 31
    } else {
        let n = clkdiv - 1;
        n | (((clkdiv / 2 - 1) & 0xff) << 6) | ((n & 0xff) << 12)
    }
}

/// Extra dummy cycles compensating the MISO input delay.
///
/// `gpio_is_used` adds the GPIO matrix delay when the pins do not go through IO MUX.
pub fn extra_dummy_cycles(gpio_is_used: bool, input_delay_ns: i32, speed: FlashSpeed) -> u8 {
    let gpio_delay_ns = if gpio_is_used { GPIO_MATRIX_DELAY_NS as i64 } else { 0 };
    // One extra ns absorbs rounding of `input_delay_ns`. A negative total
    // means no compensation.
    let delay_ns = 1 + input_delay_ns as i64 + gpio_delay_ns;
    let apb_period_n = (delay_ns * APB_CLK_KHZ as i64 / 1000 / 1000).max(0);
    (apb_period_n / speed.divider() as i64) as u8
}

/// Driver data shared with the ROM flash driver.
///
/// Place it at the head of a host driver's own data. The layout is fixed at
/// 28 bytes on the 32-bit targets.
#[derive(Debug, Clone, Eq, PartialEq)]
#[repr(C)]
pub struct SpiFlashHalContext {
    /// Host driver function table, owned by the host driver.
    pub inst: *const (),
    /// SPI peripheral registers.
    pub spi: *mut (),
    /// CS line, `0..CS_NUM`.
    pub cs_num: i32,
    /// Pre-calculated extra dummy cycles.
    pub extra_dummy: u8,
    reserved1: u8,
    /// CS hold time.
    pub cs_hold: u8,
    reserved2: u8,
    /// Pre-calculated clock register value.
    pub clock_conf: u32,
    /// Default IO mode for common commands.
    pub base_io_mode: IoMode,
    reserved_config: [u32; 1],
}

#[cfg(target_pointer_width = "32")]
const _: () = ::core::assert!(::core::mem::size_of::<SpiFlashHalContext>() == 28);

impl Default for SpiFlashHalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SpiFlashHalContext {
    pub const fn new() -> Self {
        Self {
            inst: ::core::ptr::null(),
            spi: ::core::ptr::null_mut(),
            cs_num: 0,
            extra_dummy: 0,
            reserved1: 0,
            cs_hold: 0,
            reserved2: 0,
            clock_conf: 0,
            base_io_mode: IoMode::SlowRd,
            reserved_config: [0],
        }
    }
}

/// SPI flash HAL configuration.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub struct SpiFlashHalConfig {
    pub host_id: SpiHost,
    /// CS line, `0..CS_NUM`.
    pub cs_num: u32,
    /// Pins go through IO MUX. Used for timing compensation.
    pub iomux: bool,
    /// MISO input delay after the launch clock, in ns.
    pub input_delay_ns: i32,
    pub speed: FlashSpeed,
    pub cs_hold: u8,
}

impl Default for SpiFlashHalConfig {
    fn default() -> Self {
        Self {
            host_id: SpiHost::Spi1,
            cs_num: 0,
            iomux: true,
            input_delay_ns: 0,
            speed: FlashSpeed::Mhz40,
            cs_hold: 0,
        }
    }
}

/// Fill `ctx` from `cfg`.
///
/// `ctx.inst` is kept. Everything else is overwritten; `base_io_mode` and the
/// reserved fields are cleared.
///
/// Besides a CS line out of range, 80 MHz with the pins on the GPIO matrix is
/// rejected: the matrix delay leaves no valid sampling point at that speed.
pub fn init(ctx: &mut SpiFlashHalContext, cfg: &SpiFlashHalConfig) -> Result<(), Error> {
    if cfg.cs_num >= CS_NUM {
        return Err(Error::InvalidArgument);
    }
    if cfg.speed == FlashSpeed::Mhz80 && !cfg.iomux {
        return Err(Error::InvalidArgument);
    }

    let extra_dummy = extra_dummy_cycles(!cfg.iomux, cfg.input_delay_ns, cfg.speed);
    let clock_conf = clock_reg_val(cfg.speed.divider());
    debug!(
        "spi flash init: cs {} {} MHz extra_dummy {} clock {:#x}",
        cfg.cs_num,
        cfg.speed.mhz(),
        extra_dummy,
        clock_conf
    );

    *ctx = SpiFlashHalContext {
        inst: ctx.inst,
        spi: cfg.host_id.base() as *mut (),
        cs_num: cfg.cs_num as i32,
        extra_dummy,
        cs_hold: cfg.cs_hold,
        clock_conf,
        ..SpiFlashHalContext::new()
    };
    Ok(())
}

/// A user defined transaction.
#[derive(Debug)]
pub struct SpiFlashTrans<'a> {
    pub command: u16,
    pub address: u32,
    /// Length of the address phase in bits, 0 for none.
    pub address_bitlen: u8,
    pub dummy_bitlen: u8,
    /// Data sent after the address phase.
    pub mosi: &'a [u8],
    /// Data received, at most [`MAX_READ_BYTES`].
    pub miso: &'a mut [u8],
}

/// Operations of a SPI flash host.
///
/// Length limits: `program_page` takes at most [`MAX_WRITE_BYTES`], `read`
/// at most [`MAX_READ_BYTES`]. Callers split larger transfers.
pub trait SpiFlashHost {
    /// Configure the device related registers before transactions.
    fn device_config(&mut self);

    /// Send a user defined transaction, receiving into `trans.miso`.
    fn common_command(&mut self, trans: &mut SpiFlashTrans<'_>);

    /// Erase the whole chip (C7h).
    fn erase_chip(&mut self);

    /// Erase the 4 KiB sector at `start_address` (20h). 24-bit addresses only.
    fn erase_sector(&mut self, start_address: u32);

    /// Erase the 64 KiB block at `start_address` (D8h). 24-bit addresses only.
    fn erase_block(&mut self, start_address: u32);

    /// Program `buffer` at `address` (02h). 24-bit addresses only.
    fn program_page(&mut self, buffer: &[u8], address: u32);

    /// Read into `buffer` from `address` with the configured read mode.
    fn read(&mut self, buffer: &mut [u8], address: u32);

    /// Send write disable (04h) when `wp`, write enable (06h) otherwise.
    fn set_write_protect(&mut self, wp: bool);

    fn host_idle(&self) -> bool;

    /// Configure the read command phases for `io_mode`.
    ///
    /// `dummy_cyclelen_base` is extended by the context's extra dummy cycles.
    fn configure_host_io_mode(
        &mut self,
        command: u8,
        addr_bitlen: u32,
        dummy_cyclelen_base: u32,
        io_mode: IoMode,
    );

    /// Wait until the last operation is done.
    fn poll_cmd_done(&mut self);

    fn setup_auto_suspend_mode(&mut self);

    /// Whether `buffer` can be sent directly, without a bounce copy.
    fn supports_direct_write(&self, buffer: &[u8]) -> bool;

    /// Whether `buffer` can receive data directly, without a bounce copy.
    fn supports_direct_read(&self, buffer: &[u8]) -> bool;
}
