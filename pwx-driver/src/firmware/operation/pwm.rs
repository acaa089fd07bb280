use derive_new::new;

use crate::firmware::{
    fpga::{
        params::{ADDR_PWM_DUTY, ADDR_PWM_ENABLE},
        Duty, PwmMask,
    },
    operation::Operation,
    spi::SpiFrame,
};

/// Selects which primary output bits are driven by the PWM generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, new)]
pub struct PwmEnable {
    mask: PwmMask,
}

impl Operation for PwmEnable {
    fn frame(&self) -> SpiFrame {
        SpiFrame::new()
            .with_write(true)
            .with_addr(ADDR_PWM_ENABLE)
            .with_data(self.mask.bits())
    }
}

/// Sets the duty value shared by all PWM-driven bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, new)]
pub struct PwmDuty {
    duty: Duty,
}

impl Operation for PwmDuty {
    fn frame(&self) -> SpiFrame {
        SpiFrame::new()
            .with_write(true)
            .with_addr(ADDR_PWM_DUTY)
            .with_data(self.duty.value())
    }
}
