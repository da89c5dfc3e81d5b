#[cfg(not(feature = "defmt-03"))]
use bitflags::bitflags;
#[cfg(feature = "defmt-03")]
use defmt::bitflags;

use byteorder::{BigEndian, ByteOrder};
pub use mint;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::full_scale::{AccelFullScale, GyroFullScale};
use crate::regs::{MPU6500_SENSOR_DATA_LEN, MPU6500_TEMP_OFFSET, MPU6500_TEMP_SENSITIVITY};

bitflags! {
    /// `PWR_MGMT_1` register bits.
    #[cfg_attr(not(feature = "defmt-03"), derive(Debug, Clone, Copy, PartialEq, Eq))]
    pub struct PowerManagement: u8 {
        const DEVICE_RESET = 0b1000_0000;
        const SLEEP = 0b0100_0000;
        const CYCLE = 0b0010_0000;
        const GYRO_STANDBY = 0b0001_0000;
        const PD_PTAT = 0b0000_1000;
        /// `CLKSEL = 1`: PLL when ready, internal oscillator otherwise.
        const CLKSEL_AUTO = 0b0000_0001;
    }
}

/// One burst of sensor output, as twos-complement counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct RawSample {
    pub ax: i16,
    pub ay: i16,
    pub az: i16,
    pub gx: i16,
    pub gy: i16,
    pub gz: i16,
    pub temp: i16,
}

impl RawSample {
    /// Decodes the `ACCEL_XOUT_H..=GYRO_ZOUT_L` burst.
    ///
    /// Big-endian pairs, in register order: accel X/Y/Z, temperature, gyro X/Y/Z.
    pub fn from_bytes(buf: &[u8; MPU6500_SENSOR_DATA_LEN]) -> Self {
        RawSample {
            ax: BigEndian::read_i16(&buf[0..2]),
            ay: BigEndian::read_i16(&buf[2..4]),
            az: BigEndian::read_i16(&buf[4..6]),
            temp: BigEndian::read_i16(&buf[6..8]),
            gx: BigEndian::read_i16(&buf[8..10]),
            gy: BigEndian::read_i16(&buf[10..12]),
            gz: BigEndian::read_i16(&buf[12..14]),
        }
    }

    /// Converts counts to physical units using the given ranges.
    pub fn scale(&self, gyro: GyroFullScale, accel: AccelFullScale) -> ScaledSample {
        let accel_lsb = accel.lsb_per_g();
        let gyro_lsb = gyro.lsb_per_dps();

        ScaledSample {
            ax_g: self.ax as f32 / accel_lsb,
            ay_g: self.ay as f32 / accel_lsb,
            az_g: self.az as f32 / accel_lsb,
            gx_dps: self.gx as f32 / gyro_lsb,
            gy_dps: self.gy as f32 / gyro_lsb,
            gz_dps: self.gz as f32 / gyro_lsb,
            temp_c: temp_raw_to_celsius(self.temp),
        }
    }

    pub fn accel(&self) -> mint::Vector3<i16> {
        mint::Vector3::from([self.ax, self.ay, self.az])
    }

    pub fn gyro(&self) -> mint::Vector3<i16> {
        mint::Vector3::from([self.gx, self.gy, self.gz])
    }
}

/// One burst of sensor output in g, °/s and °C.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct ScaledSample {
    pub ax_g: f32,
    pub ay_g: f32,
    pub az_g: f32,
    pub gx_dps: f32,
    pub gy_dps: f32,
    pub gz_dps: f32,
    pub temp_c: f32,
}

impl ScaledSample {
    /// Acceleration in g.
    pub fn accel(&self) -> mint::Vector3<f32> {
        mint::Vector3::from([self.ax_g, self.ay_g, self.az_g])
    }

    /// Angular rate in °/s.
    pub fn gyro(&self) -> mint::Vector3<f32> {
        mint::Vector3::from([self.gx_dps, self.gy_dps, self.gz_dps])
    }
}

/// `TEMP_degC = TEMP_OUT / 333.87 + 21.0`
pub fn temp_raw_to_celsius(raw: i16) -> f32 {
    raw as f32 / MPU6500_TEMP_SENSITIVITY + MPU6500_TEMP_OFFSET
}
