use derive_more::Debug;
use derive_new::new;
use getset::CopyGetters;

/// Selects which primary output bits are driven by the PWM carrier.
#[derive(Clone, Copy, PartialEq, Eq, Debug, new, CopyGetters)]
#[debug("{:#010b}", self.bits)]
pub struct PwmMask {
    #[getset(get_copy = "pub")]
    bits: u8,
}

impl PwmMask {
    pub const NONE: Self = Self { bits: 0x00 };
    pub const ALL: Self = Self { bits: 0xFF };

    #[must_use]
    pub const fn bit(index: u8) -> Self {
        Self {
            bits: 1 << (index & 0x07),
        }
    }

    #[must_use]
    pub const fn is_enabled(&self, index: u8) -> bool {
        (self.bits >> (index & 0x07)) & 1 == 1
    }
}

impl From<u8> for PwmMask {
    fn from(bits: u8) -> Self {
        Self::new(bits)
    }
}

impl core::ops::BitOr for PwmMask {
    type Output = PwmMask;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}
