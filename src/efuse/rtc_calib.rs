//! ADC and temperature sensor calibration data stored in efuse.

use super::{field_size, table, EfuseDesc, EfuseRead, Error};

/// Calibration layout version this module understands.
pub const SUPPORTED_VERSION: u32 = 1;

/// Number of ADC attenuation levels with calibration data.
pub const ATTEN_COUNT: u32 = 4;

const INIT_CODE: [&[EfuseDesc]; ATTEN_COUNT as usize] = [
    table::ADC1_INIT_CODE_ATTEN0,
    table::ADC1_INIT_CODE_ATTEN1,
    table::ADC1_INIT_CODE_ATTEN2,
    table::ADC1_INIT_CODE_ATTEN3,
];

const CAL_VOL: [&[EfuseDesc]; ATTEN_COUNT as usize] = [
    table::ADC1_CAL_VOL_ATTEN0,
    table::ADC1_CAL_VOL_ATTEN1,
    table::ADC1_CAL_VOL_ATTEN2,
    table::ADC1_CAL_VOL_ATTEN3,
];

/// Input voltage, in mV, the calibration reading of each attenuation was taken at.
const CAL_VOLTAGE_MV: [u32; ATTEN_COUNT as usize] = [400, 550, 750, 1370];

const CAL_SIGN_BIT: u32 = 1 << 9;

/// A calibration point: ADC reading `digi` for an input of `vol_mv`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalVoltage {
    pub digi: u32,
    pub vol_mv: u32,
}

/// Version of the calibration data layout (`BLK_VERSION_MAJOR`).
pub fn get_ver(efuse: &impl EfuseRead) -> u32 {
    efuse.read_desc(&table::BLK_VERSION_MAJOR[0])
}

/// ADC init code for `atten`.
///
/// Panics unless `version` is [`SUPPORTED_VERSION`] and `atten` is below
/// [`ATTEN_COUNT`].
pub fn get_init_code(efuse: &impl EfuseRead, version: u32, _adc_unit: u32, atten: u32) -> u32 {
    assert!(version == SUPPORTED_VERSION);
    assert!(atten < ATTEN_COUNT);

    let field = INIT_CODE[atten as usize];
    assert!(field_size(field) == 10);

    let raw = unwrap!(efuse.read_field_u32(field));
    debug!("adc init code atten{}: raw {}", atten, raw);
    raw + 1000
}

/// Calibration point for `atten`.
///
/// The stored reading is a 10-bit sign and magnitude offset from 2000.
pub fn get_cal_voltage(
    efuse: &impl EfuseRead,
    version: u32,
    _adc_unit: u32,
    atten: u32,
) -> Result<CalVoltage, Error> {
    if version != SUPPORTED_VERSION {
        warn!("unsupported calibration version {}", version);
        return Err(Error::InvalidArgument);
    }
    if atten >= ATTEN_COUNT {
        return Err(Error::InvalidArgument);
    }

    let field = CAL_VOL[atten as usize];
    assert!(field[0].bit_count == 10);

    let cal_vol = efuse.read_field_u32(field)?;
    let digi = if cal_vol & CAL_SIGN_BIT != 0 {
        2000 - (cal_vol & !CAL_SIGN_BIT)
    } else {
        2000 + cal_vol
    };
    let vol_mv = CAL_VOLTAGE_MV[atten as usize];
    debug!("adc cal atten{}: {} @ {} mV", atten, digi, vol_mv);

    Ok(CalVoltage { digi, vol_mv })
}

/// Temperature sensor calibration offset.
///
/// Always `0.0`: the temperature sensor has no characterised calibration yet.
pub fn get_tsens_val(_efuse: &impl EfuseRead) -> f32 {
    0.0
}
