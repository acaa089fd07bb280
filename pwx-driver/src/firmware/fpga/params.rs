use crate::common::Freq;

/// The system clock driving the peripheral.
pub const SYSTEM_CLK_FREQ: Freq<u32> = Freq { freq: 10_000_000 };

/// The fixed PWM carrier frequency.
pub const PWM_CARRIER_FREQ: Freq<u32> = Freq { freq: 3_000 };

/// The PWM carrier period in system clock cycles.
pub const PWM_PERIOD: u32 = SYSTEM_CLK_FREQ.hz() / PWM_CARRIER_FREQ.hz();

/// Default serial clock half period in system clock cycles (5 us at 10 MHz).
pub const SPI_DEFAULT_HALF_PERIOD: u32 = 50;

pub const ADDR_STATIC_OUT: u8 = 0x00;
pub const ADDR_SECONDARY_OUT: u8 = 0x01;
pub const ADDR_PWM_ENABLE: u8 = 0x02;
pub const ADDR_PWM_DUTY: u8 = 0x04;

/// Largest address representable in the 7-bit address field.
pub const ADDR_MAX: u8 = 0x7F;

/// The counter value below which a PWM-driven bit is held high.
///
/// Integer rounding of `duty / 255 * PWM_PERIOD`; 0x00 maps to 0 (never
/// high) and 0xFF maps to `PWM_PERIOD` (never low).
pub const fn duty_threshold(duty: u8) -> u32 {
    (duty as u32 * PWM_PERIOD + 127) / 255
}
