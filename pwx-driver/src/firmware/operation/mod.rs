mod output;
mod pwm;
mod raw;

pub use output::{SecondaryOutput, StaticOutput};
pub use pwm::{PwmDuty, PwmEnable};
pub use raw::{RawRead, RawWrite};

use crate::firmware::spi::SpiFrame;

/// A host-side command that packs into one serial frame.
pub trait Operation {
    fn frame(&self) -> SpiFrame;
}
