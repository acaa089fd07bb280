use pwx_driver::firmware::spi::SpiFrame;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
enum State {
    /// Chip deselected, nothing in flight.
    #[default]
    Idle,
    /// Shifting the write flag and 7 address bits, MSB first.
    ShiftingHeader { count: u8, shift: u8 },
    /// Shifting the 8 data bits, MSB first.
    ShiftingData { header: u8, count: u8, shift: u8 },
    /// A full frame was delivered; further bits are ignored until the
    /// chip is deselected.
    Complete,
}

/// Assembles 16-bit command frames from bits sampled on serial clock
/// rising edges.
///
/// Purely edge-driven: the caller detects clock edges and chip-select
/// levels; the decoder only sequences bits. Deselecting mid-frame drops
/// the partial frame with no side effect.
pub struct FrameDecoder {
    state: State,
}

impl FrameDecoder {
    #[must_use]
    pub const fn new() -> Self {
        Self { state: State::Idle }
    }

    pub fn init(&mut self) {
        self.state = State::Idle;
    }

    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self.state, State::Idle)
    }

    /// Chip select deasserted: abort any partial frame and re-arm.
    pub fn deselect(&mut self) {
        if !self.is_idle() {
            if !matches!(self.state, State::Complete) {
                tracing::debug!("partial frame dropped on deselect");
            }
            self.state = State::Idle;
        }
    }

    /// Consumes one bit sampled on a serial clock rising edge while the
    /// chip is selected. Returns the completed frame on the 16th bit.
    pub fn shift(&mut self, bit: bool) -> Option<SpiFrame> {
        match self.state {
            State::Idle => {
                self.state = State::ShiftingHeader {
                    count: 1,
                    shift: bit as u8,
                };
                None
            }
            State::ShiftingHeader { count, shift } => {
                let shift = (shift << 1) | bit as u8;
                self.state = if count + 1 == 8 {
                    State::ShiftingData {
                        header: shift,
                        count: 0,
                        shift: 0,
                    }
                } else {
                    State::ShiftingHeader {
                        count: count + 1,
                        shift,
                    }
                };
                None
            }
            State::ShiftingData {
                header,
                count,
                shift,
            } => {
                let shift = (shift << 1) | bit as u8;
                if count + 1 == 8 {
                    self.state = State::Complete;
                    Some(SpiFrame::from_bits(((header as u16) << 8) | shift as u16))
                } else {
                    self.state = State::ShiftingData {
                        header,
                        count: count + 1,
                        shift,
                    };
                    None
                }
            }
            State::Complete => None,
        }
    }
}

impl Default for FrameDecoder {
    fn default() -> Self {
        Self::new()
    }
}
