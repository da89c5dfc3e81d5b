//! Register-level bus access.
//!
//! The driver only needs two primitives from the bus: a single-byte register write and a
//! register-address write followed by a read, as one transaction. Timeouts, retries and
//! sharing the bus between devices are up to the implementation.

use embedded_hal::i2c::I2c;
use embedded_hal_async::i2c::I2c as AsyncI2c;

/// Blocking register access.
pub trait RegisterBus {
    type Error;

    /// Writes `value` to register `reg` of the device at `addr`.
    fn write_register(&mut self, addr: u8, reg: u8, value: u8) -> Result<(), Self::Error>;

    /// Writes the register address `reg`, then reads `buf.len()` bytes into `buf`.
    fn write_then_read(&mut self, addr: u8, reg: u8, buf: &mut [u8]) -> Result<(), Self::Error>;
}

impl<I: I2c> RegisterBus for I {
    type Error = I::Error;

    fn write_register(&mut self, addr: u8, reg: u8, value: u8) -> Result<(), Self::Error> {
        self.write(addr, &[reg, value])
    }

    fn write_then_read(&mut self, addr: u8, reg: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.write_read(addr, &[reg], buf)
    }
}

/// Async register access.
#[allow(async_fn_in_trait)]
pub trait AsyncRegisterBus {
    type Error;

    async fn write_register(&mut self, addr: u8, reg: u8, value: u8) -> Result<(), Self::Error>;

    async fn write_then_read(
        &mut self,
        addr: u8,
        reg: u8,
        buf: &mut [u8],
    ) -> Result<(), Self::Error>;
}

impl<I: AsyncI2c> AsyncRegisterBus for I {
    type Error = I::Error;

    async fn write_register(&mut self, addr: u8, reg: u8, value: u8) -> Result<(), Self::Error> {
        self.write(addr, &[reg, value]).await
    }

    async fn write_then_read(
        &mut self,
        addr: u8,
        reg: u8,
        buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.write_read(addr, &[reg], buf).await
    }
}
