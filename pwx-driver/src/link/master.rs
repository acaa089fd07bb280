use crate::{
    error::PwxDriverError,
    firmware::{fpga::params::SPI_DEFAULT_HALF_PERIOD, spi::SpiFrame},
    link::SpiPinState,
};

/// Bit-banged SPI master.
///
/// Expands one frame into the per-clock-tick pin levels of a full
/// transaction: chip select asserted, 16 bits shifted MSB first with the
/// data line held through one low and one high half period of the serial
/// clock, chip select deasserted.
pub struct SpiMaster {
    half_period: u32,
}

impl SpiMaster {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            half_period: SPI_DEFAULT_HALF_PERIOD,
        }
    }

    pub fn with_half_period(half_period: u32) -> Result<Self, PwxDriverError> {
        if half_period == 0 {
            return Err(PwxDriverError::InvalidHalfPeriod);
        }
        Ok(Self { half_period })
    }

    /// Serial clock half period in system clock cycles.
    #[must_use]
    pub const fn half_period(&self) -> u32 {
        self.half_period
    }

    #[must_use]
    pub fn transaction(&self, frame: SpiFrame) -> Vec<SpiPinState> {
        let mut seq = Vec::with_capacity(2 + 32 * self.half_period as usize);
        seq.push(SpiPinState::new(false, false, false));
        (0..16).for_each(|i| {
            let bit = frame.wire_bit(i);
            (0..self.half_period).for_each(|_| seq.push(SpiPinState::new(false, bit, false)));
            (0..self.half_period).for_each(|_| seq.push(SpiPinState::new(false, bit, true)));
        });
        seq.push(SpiPinState::IDLE);
        seq
    }
}

impl Default for SpiMaster {
    fn default() -> Self {
        Self::new()
    }
}
