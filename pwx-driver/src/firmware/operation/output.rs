use derive_new::new;

use crate::firmware::{
    fpga::params::{ADDR_SECONDARY_OUT, ADDR_STATIC_OUT},
    operation::Operation,
    spi::SpiFrame,
};

/// Sets the static output byte driving the primary output port.
#[derive(Clone, Copy, Debug, PartialEq, Eq, new)]
pub struct StaticOutput {
    value: u8,
}

impl Operation for StaticOutput {
    fn frame(&self) -> SpiFrame {
        SpiFrame::new()
            .with_write(true)
            .with_addr(ADDR_STATIC_OUT)
            .with_data(self.value)
    }
}

/// Sets the secondary output port byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, new)]
pub struct SecondaryOutput {
    value: u8,
}

impl Operation for SecondaryOutput {
    fn frame(&self) -> SpiFrame {
        SpiFrame::new()
            .with_write(true)
            .with_addr(ADDR_SECONDARY_OUT)
            .with_data(self.value)
    }
}
