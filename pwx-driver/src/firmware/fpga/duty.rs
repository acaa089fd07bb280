use derive_more::Debug;
use derive_new::new;

/// The PWM duty value shared by all PWM-driven bits.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, new)]
#[debug("{:#04X}", self.value)]
pub struct Duty {
    value: u8,
}

impl Duty {
    /// Output held low for the entire carrier period.
    pub const MIN: Self = Self { value: 0x00 };
    /// Output held high for the entire carrier period.
    pub const MAX: Self = Self { value: 0xFF };

    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Creates a [`Duty`] from a high-phase ratio.
    #[must_use]
    pub fn from_ratio(ratio: f32) -> Self {
        let ratio = if !(0.0..=1.0).contains(&ratio) {
            tracing::warn!(
                "Duty ratio must be between 0 and 1, but got {}. Clamping to 0-1.",
                ratio
            );
            ratio.clamp(0.0, 1.0)
        } else {
            ratio
        };
        Self {
            value: (ratio * 255.0).round() as u8,
        }
    }

    /// The high-phase fraction this duty value requests.
    #[must_use]
    pub fn ratio(&self) -> f32 {
        self.value as f32 / 255.0
    }
}

impl From<u8> for Duty {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}
