//! MPU-6500 register map.
//! Register Map and Descriptions, document RM-MPU-6500A-00.
#![allow(dead_code)]

pub const MPU6500_DEFAULT_ADDR: u8 = 0x68;
/// Address with the AD0 pin pulled high.
pub const MPU6500_ALTERNATE_ADDR: u8 = 0x69;

/// `WHO_AM_I` value of the MPU-6500.
pub const MPU6500_ID: u8 = 0x70;
pub(crate) const MPU6050_ID: u8 = 0x68;
pub(crate) const MPU9250_ID: u8 = 0x71;
pub(crate) const MPU9255_ID: u8 = 0x73;

pub(crate) const MPU6500_GYRO_CONFIG: u8 = 0x1B;
pub(crate) const MPU6500_ACCEL_CONFIG: u8 = 0x1C;

pub(crate) const MPU6500_ACCEL_XOUT_H: u8 = 0x3B;
pub(crate) const MPU6500_ACCEL_XOUT_L: u8 = 0x3C;
pub(crate) const MPU6500_ACCEL_YOUT_H: u8 = 0x3D;
pub(crate) const MPU6500_ACCEL_YOUT_L: u8 = 0x3E;
pub(crate) const MPU6500_ACCEL_ZOUT_H: u8 = 0x3F;
pub(crate) const MPU6500_ACCEL_ZOUT_L: u8 = 0x40;
pub(crate) const MPU6500_TEMP_OUT_H: u8 = 0x41;
pub(crate) const MPU6500_TEMP_OUT_L: u8 = 0x42;
pub(crate) const MPU6500_GYRO_XOUT_H: u8 = 0x43;
pub(crate) const MPU6500_GYRO_XOUT_L: u8 = 0x44;
pub(crate) const MPU6500_GYRO_YOUT_H: u8 = 0x45;
pub(crate) const MPU6500_GYRO_YOUT_L: u8 = 0x46;
pub(crate) const MPU6500_GYRO_ZOUT_H: u8 = 0x47;
pub(crate) const MPU6500_GYRO_ZOUT_L: u8 = 0x48;

pub(crate) const MPU6500_PWR_MGMT_1: u8 = 0x6B;
pub(crate) const MPU6500_WHO_AM_I: u8 = 0x75;

/// Length of the `ACCEL_XOUT_H..=GYRO_ZOUT_L` burst.
pub(crate) const MPU6500_SENSOR_DATA_LEN: usize =
    (MPU6500_GYRO_ZOUT_L - MPU6500_ACCEL_XOUT_H + 1) as usize;

/// Bit position of the `FS_SEL` field in `GYRO_CONFIG` and `ACCEL_CONFIG`.
pub(crate) const MPU6500_FS_SEL_SHIFT: u8 = 3;
pub(crate) const MPU6500_FS_SEL_MASK: u8 = 0b0001_1000;

/// Temperature sensitivity, LSB per °C.
pub(crate) const MPU6500_TEMP_SENSITIVITY: f32 = 333.87;
/// Reading of 0 corresponds to this temperature, °C.
pub(crate) const MPU6500_TEMP_OFFSET: f32 = 21.0;

pub(crate) fn is_known_id(id: u8) -> bool {
    matches!(id, MPU6500_ID | MPU6050_ID | MPU9250_ID | MPU9255_ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_covers_accel_temp_gyro() {
        assert_eq!(MPU6500_SENSOR_DATA_LEN, 14);
        assert_eq!(MPU6500_TEMP_OUT_H - MPU6500_ACCEL_XOUT_H, 6);
        assert_eq!(MPU6500_GYRO_XOUT_H - MPU6500_ACCEL_XOUT_H, 8);
    }

    #[test]
    fn fs_sel_mask_matches_shift() {
        assert_eq!(0b11 << MPU6500_FS_SEL_SHIFT, MPU6500_FS_SEL_MASK);
    }

    #[test]
    fn known_ids() {
        assert!(is_known_id(0x70));
        assert!(is_known_id(0x68));
        assert!(!is_known_id(0x00));
        assert!(!is_known_id(0xFF));
    }
}
