//! InvenSense MPU-6500 6-axis IMU driver, blocking I2C.
//! Register map: RM-MPU-6500A-00, product specification: PS-MPU-6500A-01.
use crate::full_scale::{AccelFullScale, GyroFullScale};
use crate::interface::RegisterBus;
use crate::regs;
use crate::types::*;

/// All possible errors in this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Error<E> {
    /// I2C bus error
    I2c(E),

    /// Invalid chip ID was read
    InvalidChipId(u8),
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::I2c(e) => write!(f, "I2C bus error: {:?}", e),
            Error::InvalidChipId(id) => write!(f, "unexpected WHO_AM_I value {:#04x}", id),
        }
    }
}

#[cfg(feature = "std")]
impl<E: core::fmt::Debug> std::error::Error for Error<E> {}

#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Mpu6500I2c<I> {
    i2c: I,
    addr: u8,
    gyro_fs: GyroFullScale,
    accel_fs: AccelFullScale,
}

impl<I, E> Mpu6500I2c<I>
where
    I: RegisterBus<Error = E>,
{
    /// Side-effect-free constructor.
    /// Nothing will be read or written before `init()` call.
    pub fn new(i2c: I) -> Self {
        Mpu6500I2c {
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

    /// Enables use of alternative I2C address `regs::MPU6500_ALTERNATE_ADDR` (AD0 high).
    pub fn with_alternative_address(self) -> Self {
        self.with_address(regs::MPU6500_ALTERNATE_ADDR)
    }

    /// Uses an arbitrary 7-bit I2C address.
    pub fn with_address(mut self, addr: u8) -> Self {
        self.addr = addr;

        self
    }

    pub fn address(&self) -> u8 {
        self.addr
    }

    /// Gyroscope range used by [`read_scaled`](Self::read_scaled).
    pub fn gyro_full_scale(&self) -> GyroFullScale {
        self.gyro_fs
    }

    /// Accelerometer range used by [`read_scaled`](Self::read_scaled).
    pub fn accel_full_scale(&self) -> AccelFullScale {
        self.accel_fs
    }

    /// Initializes the MPU-6500.
    ///
    /// Side-effects:
    /// - Clears `SLEEP` and selects the auto clock source (`PWR_MGMT_1 = 0x01`)
    /// - Sets the gyroscope range to ±250 °/s
    /// - Sets the accelerometer range to ±2 g
    ///
    /// Stops at the first failing write.
    ///
    /// # Usage Example
    ///
    /// ```rust
    /// // use your_chip_hal::I2c; // <- import your chip's I2c
    /// use mpu6500::{AccelFullScale, GyroFullScale, Mpu6500I2c};
    /// #
    /// # use embedded_hal::i2c::{I2c as I2cTrait, Operation, ErrorType, ErrorKind};
    /// # struct I2c {}
    /// # impl I2c { pub fn new() -> Self { I2c { } }}
    /// # impl ErrorType for I2c { type Error = ErrorKind; }
    /// # impl I2cTrait for I2c { fn transaction(&mut self, _address: u8, _operations: &mut [Operation<'_>]) -> Result<(), Self::Error> { Ok(()) } }
    /// #
    /// let i2c = I2c::new(/* ... */);
    /// let mut imu = Mpu6500I2c::new(i2c);
    /// imu.init()?;
    /// imu.set_gyro_full_scale(GyroFullScale::Dps500)?;
    /// imu.set_accel_full_scale(AccelFullScale::G8)?;
    ///
    /// let sample = imu.read_scaled()?;
    /// assert_eq!(sample.temp_c, 21.0);
    /// # Result::<(), mpu6500::Error<ErrorKind>>::Ok(())
    /// ```
    pub fn init(&mut self) -> Result<(), Error<E>> {
        #[cfg(feature = "defmt-03")]
        defmt::debug!("MPU-6500 wake-up at {=u8:#x}", self.addr);

        self.write_u8(regs::MPU6500_PWR_MGMT_1, PowerManagement::CLKSEL_AUTO.bits())
            .map_err(Error::I2c)?;

        self.set_gyro_full_scale(GyroFullScale::Dps250)?;
        self.set_accel_full_scale(AccelFullScale::G2)?;

        #[cfg(feature = "defmt-03")]
        defmt::info!("MPU-6500 initialized");

        Ok(())
    }

    /// Sets the gyroscope range. The stored range only changes if the write succeeds.
    pub fn set_gyro_full_scale(&mut self, fs: GyroFullScale) -> Result<(), Error<E>> {
        self.write_u8(regs::MPU6500_GYRO_CONFIG, fs.register_value())
            .map_err(Error::I2c)?;
        self.gyro_fs = fs;

        #[cfg(feature = "defmt-03")]
        defmt::debug!("gyro full scale: {}", fs);

        Ok(())
    }

    /// Sets the accelerometer range. The stored range only changes if the write succeeds.
    pub fn set_accel_full_scale(&mut self, fs: AccelFullScale) -> Result<(), Error<E>> {
        self.write_u8(regs::MPU6500_ACCEL_CONFIG, fs.register_value())
            .map_err(Error::I2c)?;
        self.accel_fs = fs;

        #[cfg(feature = "defmt-03")]
        defmt::debug!("accel full scale: {}", fs);

        Ok(())
    }

    /// Reads the gyroscope range back from `GYRO_CONFIG`.
    /// Does not change the stored range.
    pub fn read_gyro_config(&mut self) -> Result<GyroFullScale, Error<E>> {
        let value = self.read_u8(regs::MPU6500_GYRO_CONFIG).map_err(Error::I2c)?;

        Ok(GyroFullScale::from_register(value))
    }

    /// Reads the accelerometer range back from `ACCEL_CONFIG`.
    /// Does not change the stored range.
    pub fn read_accel_config(&mut self) -> Result<AccelFullScale, Error<E>> {
        let value = self.read_u8(regs::MPU6500_ACCEL_CONFIG).map_err(Error::I2c)?;

        Ok(AccelFullScale::from_register(value))
    }

    /// Returns the raw `WHO_AM_I` byte.
    pub fn read_identity(&mut self) -> Result<u8, Error<E>> {
        self.read_u8(regs::MPU6500_WHO_AM_I).map_err(Error::I2c)
    }

    /// Reads `WHO_AM_I` and checks it against the known MPU-6xxx identities.
    pub fn verify_identity(&mut self) -> Result<u8, Error<E>> {
        let id = self.read_identity()?;
        if !regs::is_known_id(id) {
            return Err(Error::InvalidChipId(id));
        }

        Ok(id)
    }

    /// Reads accelerometer, temperature and gyroscope output in one burst.
    pub fn read_raw(&mut self) -> Result<RawSample, Error<E>> {
        let mut buf = [0u8; regs::MPU6500_SENSOR_DATA_LEN];

        self.read_bytes(regs::MPU6500_ACCEL_XOUT_H, &mut buf)
            .map_err(Error::I2c)?;

        Ok(RawSample::from_bytes(&buf))
    }

    /// Reads one burst and converts it with the current ranges.
    pub fn read_scaled(&mut self) -> Result<ScaledSample, Error<E>> {
        let raw = self.read_raw()?;

        Ok(raw.scale(self.gyro_fs, self.accel_fs))
    }

    /// Returns current accelerometer data in g.
    pub fn read_accel(&mut self) -> Result<mint::Vector3<f32>, Error<E>> {
        Ok(self.read_scaled()?.accel())
    }

    /// Returns current gyroscope data in °/s.
    pub fn read_gyro(&mut self) -> Result<mint::Vector3<f32>, Error<E>> {
        Ok(self.read_scaled()?.gyro())
    }

    fn read_u8(&mut self, reg: u8) -> Result<u8, E> {
        let mut byte: [u8; 1] = [0; 1];
        self.i2c.write_then_read(self.addr, reg, &mut byte)?;
        Ok(byte[0])
    }

    fn read_bytes(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), E> {
        self.i2c.write_then_read(self.addr, reg, buf)
    }

    fn write_u8(&mut self, reg: u8, value: u8) -> Result<(), E> {
        self.i2c.write_register(self.addr, reg, value)
    }
}
