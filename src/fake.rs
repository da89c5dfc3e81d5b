//! Recording I2C bus for tests.

use std::collections::VecDeque;

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};
use embedded_hal_async::i2c::I2c as AsyncI2c;

pub const NACK: ErrorKind = ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address);

/// Bus transaction as seen by the fake
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Write { addr: u8, data: Vec<u8> },
    WriteRead { addr: u8, write: Vec<u8>, read_len: usize },
    Other { addr: u8 },
}

/// Records every transaction and serves reads from a byte queue.
///
/// Failures are scheduled per transaction index; a failing transaction is still recorded
/// but moves no data.
#[derive(Debug, Default)]
pub struct FakeBus {
    ops: Vec<Op>,
    read_data: VecDeque<u8>,
    fail_at: Vec<usize>,
}

impl FakeBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_read_data(mut self, data: &[u8]) -> Self {
        self.push_read_data(data);
        self
    }

    pub fn push_read_data(&mut self, data: &[u8]) {
        self.read_data.extend(data.iter().copied());
    }

    /// Makes the next transaction fail.
    pub fn fail_next(&mut self) {
        let next = self.ops.len();
        self.fail_at.push(next);
    }

    /// Makes the `n`-th transaction from now (0-based) fail.
    pub fn fail_after(&mut self, n: usize) {
        let at = self.ops.len() + n;
        self.fail_at.push(at);
    }

    pub fn ops(&self) -> Vec<Op> {
        self.ops.clone()
    }

    fn run(&mut self, addr: u8, operations: &mut [Operation<'_>]) -> Result<(), ErrorKind> {
        let index = self.ops.len();

        let op = match operations {
            [Operation::Write(data)] => Op::Write { addr, data: data.to_vec() },
            [Operation::Write(write), Operation::Read(read)] => Op::WriteRead {
                addr,
                write: write.to_vec(),
                read_len: read.len(),
            },
            _ => Op::Other { addr },
        };
        self.ops.push(op);

        if self.fail_at.contains(&index) {
            return Err(NACK);
        }

        for operation in operations.iter_mut() {
            if let Operation::Read(buf) = operation {
                for byte in buf.iter_mut() {
                    *byte = self.read_data.pop_front().unwrap_or(0);
                }
            }
        }

        Ok(())
    }
}

impl ErrorType for FakeBus {
    type Error = ErrorKind;
}

impl I2c for FakeBus {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.run(address, operations)
    }
}

impl AsyncI2c for FakeBus {
    async fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.run(address, operations)
    }
}
