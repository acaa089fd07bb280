mod master;

pub use master::SpiMaster;

use derive_new::new;

/// Logical levels of the three serial link lines for one clock tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, new)]
pub struct SpiPinState {
    /// Chip select, active low.
    pub cs_n: bool,
    /// Serial data into the peripheral.
    pub copi: bool,
    /// Serial clock.
    pub sclk: bool,
}

impl SpiPinState {
    /// Bus at rest: chip deselected, data and clock low.
    pub const IDLE: Self = Self {
        cs_n: true,
        copi: false,
        sclk: false,
    };
}
