//! ESP32-P4 efuse field table.
//!
//! Every field is a `&'static [EfuseDesc]` constant. Multi-descriptor fields are read
//! as one bit sequence in declaration order.

use super::EfuseBlock::*;
use super::EfuseDesc;

macro_rules! efuse_fields {
    ($($(#[$attr:meta])* $name:ident = [$(($block:ident, $start:literal, $count:literal)),+ $(,)?];)*) => {
        $(
            $(#[$attr])*
            pub const $name: &[EfuseDesc] = &[$(EfuseDesc::new($block, $start, $count)),+];
        )*
    };
}

efuse_fields! {
    // Write protection (BLK0 word 0)

    /// Disable programming of individual efuses.
    WR_DIS = [(Blk0, 0, 32)];
    WR_DIS_RD_DIS = [(Blk0, 0, 1)];
    WR_DIS_GROUP_1 = [(Blk0, 1, 1)];
    WR_DIS_GROUP_2 = [(Blk0, 2, 1)];
    WR_DIS_HP_PWR_SRC_SEL = [(Blk0, 3, 1)];
    WR_DIS_SPI_BOOT_CRYPT_CNT = [(Blk0, 4, 1)];
    WR_DIS_SECURE_BOOT_KEY_REVOKE0 = [(Blk0, 5, 1)];
    WR_DIS_SECURE_BOOT_KEY_REVOKE1 = [(Blk0, 6, 1)];
    WR_DIS_SECURE_BOOT_KEY_REVOKE2 = [(Blk0, 7, 1)];
    WR_DIS_KEY0_PURPOSE = [(Blk0, 8, 1)];
    WR_DIS_KEY1_PURPOSE = [(Blk0, 9, 1)];
    WR_DIS_KEY2_PURPOSE = [(Blk0, 10, 1)];
    WR_DIS_KEY3_PURPOSE = [(Blk0, 11, 1)];
    WR_DIS_KEY4_PURPOSE = [(Blk0, 12, 1)];
    WR_DIS_KEY5_PURPOSE = [(Blk0, 13, 1)];
    WR_DIS_GROUP_3 = [(Blk0, 14, 1)];
    WR_DIS_SECURE_BOOT_EN = [(Blk0, 15, 1)];
    WR_DIS_SECURE_BOOT_AGGRESSIVE_REVOKE = [(Blk0, 16, 1)];
    WR_DIS_ECDSA_FORCE_USE_HARDWARE_K = [(Blk0, 17, 1)];
    WR_DIS_GROUP_4 = [(Blk0, 18, 1)];
    WR_DIS_HUK_GEN_STATE = [(Blk0, 19, 1)];
    WR_DIS_BLK1 = [(Blk0, 20, 1)];
    WR_DIS_SYS_DATA_PART1 = [(Blk0, 21, 1)];
    WR_DIS_USER_DATA = [(Blk0, 22, 1)];
    WR_DIS_KEY0 = [(Blk0, 23, 1)];
    WR_DIS_KEY1 = [(Blk0, 24, 1)];
    WR_DIS_KEY2 = [(Blk0, 25, 1)];
    WR_DIS_KEY3 = [(Blk0, 26, 1)];
    WR_DIS_KEY4 = [(Blk0, 27, 1)];
    WR_DIS_KEY5 = [(Blk0, 28, 1)];
    WR_DIS_SYS_DATA_PART2 = [(Blk0, 29, 1)];
    WR_DIS_GROUP_5 = [(Blk0, 30, 1)];
    WR_DIS_SOFT_DIS_JTAG = [(Blk0, 31, 1)];

    // Read protection

    /// Disable reading from BLOCK4-10.
    RD_DIS = [(Blk0, 32, 7)];
    RD_DIS_KEY0 = [(Blk0, 32, 1)];
    RD_DIS_KEY1 = [(Blk0, 33, 1)];
    RD_DIS_KEY2 = [(Blk0, 34, 1)];
    RD_DIS_KEY3 = [(Blk0, 35, 1)];
    RD_DIS_KEY4 = [(Blk0, 36, 1)];
    RD_DIS_KEY5 = [(Blk0, 37, 1)];
    RD_DIS_SYS_DATA_PART2 = [(Blk0, 38, 1)];

    // System configuration (BLK0)

    /// Exchange the USB serial JTAG D+/D- pins.
    USB_DEVICE_EXCHG_PINS = [(Blk0, 39, 1)];
    USB_OTG11_EXCHG_PINS = [(Blk0, 40, 1)];
    /// Disable the USB serial JTAG to JTAG bridge.
    DIS_USB_JTAG = [(Blk0, 41, 1)];
    POWERGLITCH_EN = [(Blk0, 42, 1)];
    DIS_USB_SERIAL_JTAG = [(Blk0, 43, 1)];
    DIS_FORCE_DOWNLOAD = [(Blk0, 44, 1)];
    DIS_SPI_DOWNLOAD_MSPI = [(Blk0, 45, 1)];
    DIS_TWAI = [(Blk0, 46, 1)];
    JTAG_SEL_ENABLE = [(Blk0, 47, 1)];
    /// JTAG is soft-disabled while an odd number of these bits is set.
    SOFT_DIS_JTAG = [(Blk0, 48, 3)];
    DIS_PAD_JTAG = [(Blk0, 51, 1)];
    DIS_DOWNLOAD_MANUAL_ENCRYPT = [(Blk0, 52, 1)];
    USB_DEVICE_DREFH = [(Blk0, 53, 2)];
    USB_OTG11_DREFH = [(Blk0, 55, 2)];
    USB_PHY_SEL = [(Blk0, 57, 1)];
    HUK_GEN_STATE = [(Blk0, 58, 9)];
    KM_RND_SWITCH_CYCLE = [(Blk0, 67, 2)];
    KM_DEPLOY_ONLY_ONCE = [(Blk0, 69, 4)];
    FORCE_USE_KEY_MANAGER_KEY = [(Blk0, 73, 4)];
    FORCE_DISABLE_SW_INIT_KEY = [(Blk0, 77, 1)];
    WDT_DELAY_SEL = [(Blk0, 80, 2)];
    /// Flash encryption is enabled while an odd number of these bits is set.
    SPI_BOOT_CRYPT_CNT = [(Blk0, 82, 3)];
    SECURE_BOOT_KEY_REVOKE0 = [(Blk0, 85, 1)];
    SECURE_BOOT_KEY_REVOKE1 = [(Blk0, 86, 1)];
    SECURE_BOOT_KEY_REVOKE2 = [(Blk0, 87, 1)];
    KEY_PURPOSE_0 = [(Blk0, 88, 4)];
    KEY_PURPOSE_1 = [(Blk0, 92, 4)];
    KEY_PURPOSE_2 = [(Blk0, 96, 4)];
    KEY_PURPOSE_3 = [(Blk0, 100, 4)];
    KEY_PURPOSE_4 = [(Blk0, 104, 4)];
    KEY_PURPOSE_5 = [(Blk0, 108, 4)];
    SEC_DPA_LEVEL = [(Blk0, 112, 2)];
    ECDSA_FORCE_USE_HARDWARE_K = [(Blk0, 114, 1)];
    CRYPT_DPA_ENABLE = [(Blk0, 115, 1)];
    SECURE_BOOT_EN = [(Blk0, 116, 1)];
    SECURE_BOOT_AGGRESSIVE_REVOKE = [(Blk0, 117, 1)];
    /// 0: four data lines, 1: eight data lines.
    FLASH_TYPE = [(Blk0, 119, 1)];
    FLASH_PAGE_SIZE = [(Blk0, 120, 2)];
    FLASH_ECC_EN = [(Blk0, 122, 1)];
    DIS_USB_OTG_DOWNLOAD_MODE = [(Blk0, 123, 1)];
    FLASH_TPUW = [(Blk0, 124, 4)];
    DIS_DOWNLOAD_MODE = [(Blk0, 128, 1)];
    DIS_DIRECT_BOOT = [(Blk0, 129, 1)];
    DIS_USB_SERIAL_JTAG_ROM_PRINT = [(Blk0, 130, 1)];
    DIS_USB_SERIAL_JTAG_DOWNLOAD_MODE = [(Blk0, 132, 1)];
    ENABLE_SECURITY_DOWNLOAD = [(Blk0, 133, 1)];
    UART_PRINT_CONTROL = [(Blk0, 134, 2)];
    FORCE_SEND_RESUME = [(Blk0, 136, 1)];
    /// Secure version used by the anti-rollback check.
    SECURE_VERSION = [(Blk0, 137, 16)];
    SECURE_BOOT_DISABLE_FAST_WAKE = [(Blk0, 153, 1)];
    HYS_EN_PAD = [(Blk0, 154, 1)];
    DCDC_VSET = [(Blk0, 155, 5)];
    /// `_0PXA_TIEH_SEL_0` in the vendor table header.
    PXA0_TIEH_SEL_0 = [(Blk0, 160, 2)];
    /// `_0PXA_TIEH_SEL_1` in the vendor table header.
    PXA0_TIEH_SEL_1 = [(Blk0, 162, 2)];
    /// `_0PXA_TIEH_SEL_2` in the vendor table header.
    PXA0_TIEH_SEL_2 = [(Blk0, 164, 2)];
    /// `_0PXA_TIEH_SEL_3` in the vendor table header.
    PXA0_TIEH_SEL_3 = [(Blk0, 166, 2)];
    USB_DEVICE_DREFL = [(Blk0, 172, 2)];
    USB_OTG11_DREFL = [(Blk0, 174, 2)];
    HP_PWR_SRC_SEL = [(Blk0, 178, 1)];
    DCDC_VSET_EN = [(Blk0, 179, 1)];
    DIS_WDT = [(Blk0, 180, 1)];
    DIS_SWD = [(Blk0, 181, 1)];

    // BLK1: MAC address and system data part 1

    /// Factory MAC address, one descriptor per byte, most significant byte first.
    MAC_FACTORY = [(Blk1, 40, 8), (Blk1, 32, 8), (Blk1, 24, 8), (Blk1, 16, 8), (Blk1, 8, 8), (Blk1, 0, 8)];
    MAC_EXT = [(Blk1, 48, 16)];
    WAFER_VERSION_MINOR = [(Blk1, 114, 3)];
    PKG_VERSION = [(Blk1, 117, 3)];
    BLK_VERSION_MINOR = [(Blk1, 120, 3)];
    K_RTC_LDO = [(Blk1, 135, 7)];
    K_DIG_LDO = [(Blk1, 142, 7)];
    V_RTC_DBIAS20 = [(Blk1, 149, 8)];
    V_DIG_DBIAS20 = [(Blk1, 157, 8)];
    DIG_DBIAS_HVT = [(Blk1, 165, 5)];
    THRES_HVT = [(Blk1, 170, 10)];

    // BLK2: system data part 1, calibration

    OPTIONAL_UNIQUE_ID = [(Blk2, 0, 128)];
    /// Calibration data layout version.
    BLK_VERSION_MAJOR = [(Blk2, 128, 2)];
    /// Temperature sensor calibration, sign and magnitude.
    TEMP_CALIB = [(Blk2, 130, 9)];
    OCODE = [(Blk2, 139, 8)];
    ADC1_INIT_CODE_ATTEN0 = [(Blk2, 147, 10)];
    ADC1_INIT_CODE_ATTEN1 = [(Blk2, 157, 10)];
    ADC1_INIT_CODE_ATTEN2 = [(Blk2, 167, 10)];
    ADC1_INIT_CODE_ATTEN3 = [(Blk2, 177, 10)];
    ADC1_CAL_VOL_ATTEN0 = [(Blk2, 187, 10)];
    ADC1_CAL_VOL_ATTEN1 = [(Blk2, 197, 10)];
    ADC1_CAL_VOL_ATTEN2 = [(Blk2, 207, 10)];
    ADC1_CAL_VOL_ATTEN3 = [(Blk2, 217, 10)];

    // BLK3..BLK10

    USER_DATA = [(Blk3, 0, 256)];
    /// Custom MAC address stored in user data.
    USER_DATA_MAC_CUSTOM = [(Blk3, 200, 48)];
    KEY0 = [(Blk4, 0, 256)];
    KEY1 = [(Blk5, 0, 256)];
    KEY2 = [(Blk6, 0, 256)];
    KEY3 = [(Blk7, 0, 256)];
    KEY4 = [(Blk8, 0, 256)];
    KEY5 = [(Blk9, 0, 256)];
    SYS_DATA_PART2 = [(Blk10, 0, 256)];
}
