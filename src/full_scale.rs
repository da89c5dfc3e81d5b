//! Full-scale range selection for the gyroscope and accelerometer.
//!
//! Both `GYRO_CONFIG` and `ACCEL_CONFIG` carry the range in their `FS_SEL` field,
//! bits `[4:3]`. Every other bit (self-test enables, `FCHOICE_B`) is written as zero.

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::regs::{MPU6500_FS_SEL_MASK, MPU6500_FS_SEL_SHIFT};

/// Gyroscope full-scale range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, FromPrimitive)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[repr(u8)]
pub enum GyroFullScale {
    /// ±250 °/s
    #[default]
    Dps250 = 0,
    /// ±500 °/s
    Dps500 = 1,
    /// ±1000 °/s
    Dps1000 = 2,
    /// ±2000 °/s
    Dps2000 = 3,
}

impl GyroFullScale {
    /// Builds a range from its numeric code.
    /// Codes outside `0..=3` fall back to [`GyroFullScale::Dps250`].
    pub fn from_code(code: u8) -> Self {
        Self::from_u8(code).unwrap_or_default()
    }

    /// Decodes the `FS_SEL` field of a `GYRO_CONFIG` register value.
    pub fn from_register(value: u8) -> Self {
        Self::from_code((value & MPU6500_FS_SEL_MASK) >> MPU6500_FS_SEL_SHIFT)
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Value to write into `GYRO_CONFIG` to select this range.
    pub fn register_value(self) -> u8 {
        self.code() << MPU6500_FS_SEL_SHIFT
    }

    /// Sensitivity in LSB per °/s.
    pub fn lsb_per_dps(self) -> f32 {
        match self {
            Self::Dps250 => 131.0,
            Self::Dps500 => 65.5,
            Self::Dps1000 => 32.8,
            Self::Dps2000 => 16.4,
        }
    }
}

impl From<u8> for GyroFullScale {
    fn from(code: u8) -> Self {
        Self::from_code(code)
    }
}

/// Accelerometer full-scale range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, FromPrimitive)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[repr(u8)]
pub enum AccelFullScale {
    /// ±2 g
    #[default]
    G2 = 0,
    /// ±4 g
    G4 = 1,
    /// ±8 g
    G8 = 2,
    /// ±16 g
    G16 = 3,
}

impl AccelFullScale {
    /// Builds a range from its numeric code.
    /// Codes outside `0..=3` fall back to [`AccelFullScale::G2`].
    pub fn from_code(code: u8) -> Self {
        Self::from_u8(code).unwrap_or_default()
    }

    /// Decodes the `ACCEL_FS_SEL` field of an `ACCEL_CONFIG` register value.
    pub fn from_register(value: u8) -> Self {
        Self::from_code((value & MPU6500_FS_SEL_MASK) >> MPU6500_FS_SEL_SHIFT)
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Value to write into `ACCEL_CONFIG` to select this range.
    pub fn register_value(self) -> u8 {
        self.code() << MPU6500_FS_SEL_SHIFT
    }

    /// Sensitivity in LSB per g.
    pub fn lsb_per_g(self) -> f32 {
        match self {
            Self::G2 => 16384.0,
            Self::G4 => 8192.0,
            Self::G8 => 4096.0,
            Self::G16 => 2048.0,
        }
    }
}

impl From<u8> for AccelFullScale {
    fn from(code: u8) -> Self {
        Self::from_code(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GYRO_ALL: [GyroFullScale; 4] = [
        GyroFullScale::Dps250,
        GyroFullScale::Dps500,
        GyroFullScale::Dps1000,
        GyroFullScale::Dps2000,
    ];

    const ACCEL_ALL: [AccelFullScale; 4] = [
        AccelFullScale::G2,
        AccelFullScale::G4,
        AccelFullScale::G8,
        AccelFullScale::G16,
    ];

    #[test]
    fn gyro_register_value_is_code_shifted_by_three() {
        for (code, fs) in GYRO_ALL.iter().enumerate() {
            assert_eq!(fs.code(), code as u8);
            assert_eq!(fs.register_value(), (code as u8) << 3);
        }
        assert_eq!(GyroFullScale::Dps2000.register_value(), 0b0001_1000);
    }

    #[test]
    fn accel_register_value_is_code_shifted_by_three() {
        for (code, fs) in ACCEL_ALL.iter().enumerate() {
            assert_eq!(fs.code(), code as u8);
            assert_eq!(fs.register_value(), (code as u8) << 3);
        }
    }

    #[test]
    fn sensitivity_tables() {
        let gyro: [f32; 4] = [131.0, 65.5, 32.8, 16.4];
        let accel: [f32; 4] = [16384.0, 8192.0, 4096.0, 2048.0];

        for (fs, lsb) in GYRO_ALL.iter().zip(gyro.iter()) {
            assert_eq!(fs.lsb_per_dps(), *lsb);
        }
        for (fs, lsb) in ACCEL_ALL.iter().zip(accel.iter()) {
            assert_eq!(fs.lsb_per_g(), *lsb);
        }
    }

    #[test]
    fn out_of_range_code_falls_back_to_lowest_range() {
        assert_eq!(GyroFullScale::from_code(4), GyroFullScale::Dps250);
        assert_eq!(GyroFullScale::from(0xFF), GyroFullScale::Dps250);
        assert_eq!(AccelFullScale::from_code(7), AccelFullScale::G2);
        assert_eq!(AccelFullScale::from(200), AccelFullScale::G2);

        assert_eq!(GyroFullScale::from_code(2), GyroFullScale::Dps1000);
        assert_eq!(AccelFullScale::from_code(3), AccelFullScale::G16);
    }

    #[test]
    fn from_register_ignores_other_bits() {
        // XG_ST | YG_ST | ZG_ST set, FS_SEL = 0b01, FCHOICE_B = 0b11
        assert_eq!(GyroFullScale::from_register(0b1110_1011), GyroFullScale::Dps500);
        // AX_ST_EN set, ACCEL_FS_SEL = 0b10
        assert_eq!(AccelFullScale::from_register(0b1001_0000), AccelFullScale::G8);

        for fs in GYRO_ALL.iter() {
            assert_eq!(GyroFullScale::from_register(fs.register_value()), *fs);
        }
    }
}
