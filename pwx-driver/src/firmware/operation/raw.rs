use crate::{
    error::PwxDriverError,
    firmware::{fpga::params::ADDR_MAX, operation::Operation, spi::SpiFrame},
};

/// A write frame to an arbitrary register address.
///
/// Addresses outside the recognized register map are accepted by the
/// peripheral at the protocol level and silently ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawWrite {
    addr: u8,
    data: u8,
}

impl RawWrite {
    pub fn new(addr: u8, data: u8) -> Result<Self, PwxDriverError> {
        if addr > ADDR_MAX {
            return Err(PwxDriverError::AddressOutOfRange(addr));
        }
        Ok(Self { addr, data })
    }
}

impl Operation for RawWrite {
    fn frame(&self) -> SpiFrame {
        SpiFrame::new()
            .with_write(true)
            .with_addr(self.addr)
            .with_data(self.data)
    }
}

/// A read-type frame; completes the protocol exchange but mutates nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawRead {
    addr: u8,
    data: u8,
}

impl RawRead {
    pub fn new(addr: u8, data: u8) -> Result<Self, PwxDriverError> {
        if addr > ADDR_MAX {
            return Err(PwxDriverError::AddressOutOfRange(addr));
        }
        Ok(Self { addr, data })
    }
}

impl Operation for RawRead {
    fn frame(&self) -> SpiFrame {
        SpiFrame::new()
            .with_write(false)
            .with_addr(self.addr)
            .with_data(self.data)
    }
}
