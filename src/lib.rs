#![doc(html_root_url = "https://docs.rs/mpu6500/0.1.0")]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

//! InvenSense MPU-6500 6-axis IMU driver.
//!
//! Blocking driver: [`Mpu6500I2c`]. Async driver: [`Mpu6500I2cAsync`].
//! Both talk to the device through a [`RegisterBus`] / [`AsyncRegisterBus`],
//! implemented for every `embedded-hal` 1.0 I2C bus.

pub mod full_scale;
pub mod i2c;
pub mod i2c_async;
pub mod interface;
pub mod regs;
pub mod types;

#[cfg(test)]
mod fake;

pub use full_scale::{AccelFullScale, GyroFullScale};
pub use i2c::{Error, Mpu6500I2c};
pub use i2c_async::Mpu6500I2cAsync;
pub use interface::{AsyncRegisterBus, RegisterBus};
pub use regs::{MPU6500_ALTERNATE_ADDR, MPU6500_DEFAULT_ADDR, MPU6500_ID};
pub use mint;
pub use types::{RawSample, ScaledSample};
