use thiserror::Error;

use crate::firmware::fpga::params::ADDR_MAX;

/// An interface for error handling in pwx-driver.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[non_exhaustive]
pub enum PwxDriverError {
    /// Register address does not fit in the 7-bit address field.
    #[error(
        "Register address ({0:#04X}) is out of range ([0x00, {max:#04X}])",
        max = ADDR_MAX
    )]
    AddressOutOfRange(u8),

    /// SPI serial clock half period must be at least one system clock cycle.
    #[error("SPI half period must be at least 1 clock cycle")]
    InvalidHalfPeriod,
}
