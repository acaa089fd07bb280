use pwx_driver::link::SpiPinState;

use crate::{fpga::emulator::FPGAEmulator, spi::FrameDecoder};

/// The PWX peripheral, advanced one system clock tick at a time.
///
/// Samples the serial link pins on each tick, feeds the frame decoder on
/// serial clock rising edges while the chip is selected, commits completed
/// write frames to the register file, and keeps the output stage running.
pub struct ChipEmulator {
    pins: SpiPinState,
    rst_n: bool,
    ena: bool,
    prev_sclk: bool,
    decoder: FrameDecoder,
    fpga: FPGAEmulator,
}

impl ChipEmulator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pins: SpiPinState::IDLE,
            rst_n: true,
            ena: true,
            prev_sclk: false,
            decoder: FrameDecoder::new(),
            fpga: FPGAEmulator::new(),
        }
    }

    pub fn init(&mut self) {
        self.decoder.init();
        self.fpga.init();
        self.prev_sclk = false;
    }

    #[must_use]
    pub const fn fpga(&self) -> &FPGAEmulator {
        &self.fpga
    }

    /// Reset line, active low.
    pub fn set_reset(&mut self, rst_n: bool) {
        self.rst_n = rst_n;
    }

    /// Enable line; while deasserted no state advances.
    pub fn set_enable(&mut self, ena: bool) {
        self.ena = ena;
    }

    pub fn set_spi(&mut self, pins: SpiPinState) {
        self.pins = pins;
    }

    #[must_use]
    pub fn primary_out(&self) -> u8 {
        self.fpga.primary_out()
    }

    #[must_use]
    pub fn secondary_out(&self) -> u8 {
        self.fpga.secondary_out()
    }

    /// Advances the peripheral by one system clock tick.
    pub fn tick(&mut self) {
        if !self.ena {
            return;
        }
        if !self.rst_n {
            // Synchronous level-sensitive reset: hold everything at the
            // initial state, dropping any frame in flight.
            self.init();
            self.prev_sclk = self.pins.sclk;
            return;
        }

        let rising = self.pins.sclk && !self.prev_sclk;
        self.prev_sclk = self.pins.sclk;

        if self.pins.cs_n {
            self.decoder.deselect();
        } else if rising {
            if let Some(frame) = self.decoder.shift(self.pins.copi) {
                if frame.write() {
                    tracing::debug!(
                        "write frame: addr={:#04X}, data={:#04X}",
                        frame.addr(),
                        frame.data()
                    );
                    self.fpga.write(frame.addr(), frame.data());
                } else {
                    tracing::debug!("read frame to {:#04X} ignored", frame.addr());
                }
            }
        }

        self.fpga.update();
    }
}

impl Default for ChipEmulator {
    fn default() -> Self {
        Self::new()
    }
}
