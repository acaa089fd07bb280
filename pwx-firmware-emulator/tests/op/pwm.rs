use pwx_driver::firmware::{
    fpga::{
        params::{PWM_CARRIER_FREQ, SYSTEM_CLK_FREQ},
        Duty, PwmMask,
    },
    operation::{PwmDuty, PwmEnable, StaticOutput},
};

use crate::{idle, send, spawn_chip, ticks_until_falling, ticks_until_rising, MEASURE_TIMEOUT};

fn arm_pwm(duty: u8, mask: u8) -> pwx_firmware_emulator::ChipEmulator {
    let mut chip = spawn_chip();
    send(&mut chip, StaticOutput::new(0x01));
    send(&mut chip, PwmDuty::new(Duty::new(duty)));
    send(&mut chip, PwmEnable::new(PwmMask::new(mask)));
    idle(&mut chip, 100);
    chip
}

#[rstest::rstest]
#[test]
#[case(0x40)]
#[case(0x80)]
#[case(0xC0)]
fn carrier_frequency_is_3khz(#[case] duty: u8) {
    let mut chip = arm_pwm(duty, 0x01);

    ticks_until_rising(&mut chip, 0, MEASURE_TIMEOUT).unwrap();
    let period = ticks_until_rising(&mut chip, 0, MEASURE_TIMEOUT).unwrap();

    let freq = SYSTEM_CLK_FREQ.hz() as f64 / period as f64;
    let nominal = PWM_CARRIER_FREQ.hz() as f64;
    approx::assert_abs_diff_eq!(freq, nominal, epsilon = nominal * 0.01);
}

#[test]
fn duty_half_gives_half_high_phase() {
    let mut chip = arm_pwm(0x80, 0x01);

    ticks_until_rising(&mut chip, 0, MEASURE_TIMEOUT).unwrap();
    let high = ticks_until_falling(&mut chip, 0, MEASURE_TIMEOUT).unwrap();
    let low = ticks_until_rising(&mut chip, 0, MEASURE_TIMEOUT).unwrap();

    let measured = high as f64 / (high + low) as f64 * 100.0;
    approx::assert_abs_diff_eq!(measured, 50.0, epsilon = 1.0);
}

#[test]
fn duty_zero_never_rises() {
    let mut chip = arm_pwm(0x00, 0x01);
    assert_eq!(0x00, chip.primary_out() & 0x01);
    assert_eq!(None, ticks_until_rising(&mut chip, 0, MEASURE_TIMEOUT));
}

#[test]
fn duty_full_never_falls() {
    let mut chip = arm_pwm(0xFF, 0x01);
    assert_eq!(0x01, chip.primary_out() & 0x01);
    assert_eq!(None, ticks_until_falling(&mut chip, 0, MEASURE_TIMEOUT));
}

#[test]
fn enabled_bits_are_phase_locked() {
    itertools::iproduct!([0x40u8, 0x80], [0x03u8, 0x81]).for_each(|(duty, mask)| {
        let mut chip = arm_pwm(duty, mask);
        let low_bit = mask.trailing_zeros();
        let high_bit = 7 - mask.leading_zeros();
        (0..MEASURE_TIMEOUT).for_each(|_| {
            chip.tick();
            let out = chip.primary_out();
            assert_eq!((out >> low_bit) & 1, (out >> high_bit) & 1);
        });
    });
}

#[test]
fn disabling_reverts_to_static_value() {
    let mut chip = arm_pwm(0x00, 0x01);
    assert_eq!(0x00, chip.primary_out());

    send(&mut chip, PwmEnable::new(PwmMask::NONE));
    assert_eq!(0x01, chip.primary_out());
    assert_eq!(None, ticks_until_falling(&mut chip, 0, MEASURE_TIMEOUT));
}

#[test]
fn unmasked_bits_stay_static_while_masked_bits_follow_carrier() {
    let mut chip = spawn_chip();
    send(&mut chip, StaticOutput::new(0xAA));
    send(&mut chip, PwmDuty::new(Duty::MAX));
    send(&mut chip, PwmEnable::new(PwmMask::new(0x0F)));
    idle(&mut chip, 100);
    assert_eq!(0xAF, chip.primary_out());

    send(&mut chip, PwmDuty::new(Duty::MIN));
    idle(&mut chip, 100);
    assert_eq!(0xA0, chip.primary_out());
}
