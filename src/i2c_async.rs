//! InvenSense MPU-6500 6-axis IMU driver, async I2C.
//!
//! Same register logic as [`Mpu6500I2c`](crate::Mpu6500I2c), one `.await` per bus transaction.
use crate::full_scale::{AccelFullScale, GyroFullScale};
use crate::i2c::Error;
use crate::interface::AsyncRegisterBus;
use crate::regs;
use crate::types::*;

#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Mpu6500I2cAsync<I> {
    i2c: I,
    addr: u8,
    gyro_fs: GyroFullScale,
    accel_fs: AccelFullScale,
}

impl<I, E> Mpu6500I2cAsync<I>
where
    I: AsyncRegisterBus<Error = E>,
{
    /// Side-effect-free constructor.
    /// Nothing will be read or written before `init()` call.
    pub fn new(i2c: I) -> Self {
        Mpu6500I2cAsync {
            i2c,
            addr: regs::MPU6500_DEFAULT_ADDR,
            gyro_fs: GyroFullScale::Dps250,
            accel_fs: AccelFullScale::G2,
        }
    }

    /// Destroy driver instance, return I2C bus instance.
    pub fn destroy(self) -> I {
        self.i2c
    }

    pub fn with_alternative_address(self) -> Self {
        self.with_address(regs::MPU6500_ALTERNATE_ADDR)
    }

    pub fn with_address(mut self, addr: u8) -> Self {
        self.addr = addr;

        self
    }

    pub fn address(&self) -> u8 {
        self.addr
    }

    pub fn gyro_full_scale(&self) -> GyroFullScale {
        self.gyro_fs
    }

    pub fn accel_full_scale(&self) -> AccelFullScale {
        self.accel_fs
    }

    /// Wakes the device and applies ±250 °/s and ±2 g, stopping at the first failing write.
    pub async fn init(&mut self) -> Result<(), Error<E>> {
        #[cfg(feature = "defmt-03")]
        defmt::debug!("MPU-6500 wake-up at {=u8:#x}", self.addr);

        self.write_u8(regs::MPU6500_PWR_MGMT_1, PowerManagement::CLKSEL_AUTO.bits())
            .await
            .map_err(Error::I2c)?;

        self.set_gyro_full_scale(GyroFullScale::Dps250).await?;
        self.set_accel_full_scale(AccelFullScale::G2).await?;

        #[cfg(feature = "defmt-03")]
        defmt::info!("MPU-6500 initialized");

        Ok(())
    }

    pub async fn set_gyro_full_scale(&mut self, fs: GyroFullScale) -> Result<(), Error<E>> {
        self.write_u8(regs::MPU6500_GYRO_CONFIG, fs.register_value())
            .await
            .map_err(Error::I2c)?;
        self.gyro_fs = fs;

        Ok(())
    }

    pub async fn set_accel_full_scale(&mut self, fs: AccelFullScale) -> Result<(), Error<E>> {
        self.write_u8(regs::MPU6500_ACCEL_CONFIG, fs.register_value())
            .await
            .map_err(Error::I2c)?;
        self.accel_fs = fs;

        Ok(())
    }

    pub async fn read_gyro_config(&mut self) -> Result<GyroFullScale, Error<E>> {
        let value = self
            .read_u8(regs::MPU6500_GYRO_CONFIG)
            .await
            .map_err(Error::I2c)?;

        Ok(GyroFullScale::from_register(value))
    }

    pub async fn read_accel_config(&mut self) -> Result<AccelFullScale, Error<E>> {
        let value = self
            .read_u8(regs::MPU6500_ACCEL_CONFIG)
            .await
            .map_err(Error::I2c)?;

        Ok(AccelFullScale::from_register(value))
    }

    pub async fn read_identity(&mut self) -> Result<u8, Error<E>> {
        self.read_u8(regs::MPU6500_WHO_AM_I).await.map_err(Error::I2c)
    }

    pub async fn verify_identity(&mut self) -> Result<u8, Error<E>> {
        let id = self.read_identity().await?;
        if !regs::is_known_id(id) {
            return Err(Error::InvalidChipId(id));
        }

        Ok(id)
    }

    pub async fn read_raw(&mut self) -> Result<RawSample, Error<E>> {
        let mut buf = [0u8; regs::MPU6500_SENSOR_DATA_LEN];

        self.read_bytes(regs::MPU6500_ACCEL_XOUT_H, &mut buf)
            .await
            .map_err(Error::I2c)?;

        Ok(RawSample::from_bytes(&buf))
    }

    pub async fn read_scaled(&mut self) -> Result<ScaledSample, Error<E>> {
        let raw = self.read_raw().await?;

        Ok(raw.scale(self.gyro_fs, self.accel_fs))
    }

    pub async fn read_accel(&mut self) -> Result<mint::Vector3<f32>, Error<E>> {
        Ok(self.read_scaled().await?.accel())
    }

    pub async fn read_gyro(&mut self) -> Result<mint::Vector3<f32>, Error<E>> {
        Ok(self.read_scaled().await?.gyro())
    }

    async fn read_u8(&mut self, reg: u8) -> Result<u8, E> {
        let mut byte: [u8; 1] = [0; 1];
        self.i2c.write_then_read(self.addr, reg, &mut byte).await?;
        Ok(byte[0])
    }

    async fn read_bytes(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), E> {
        self.i2c.write_then_read(self.addr, reg, buf).await
    }

    async fn write_u8(&mut self, reg: u8, value: u8) -> Result<(), E> {
        self.i2c.write_register(self.addr, reg, value).await
    }
}
