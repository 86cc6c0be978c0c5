use crate::clamp_u8;

/// An 8-bit channel value with saturating stores.
///
/// Shares the storage of `u8`, but conversion from a host number clamps into
/// `0..=255` instead of wrapping.
#[repr(transparent)]
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    bytemuck::Pod,
    bytemuck::Zeroable,
)]
pub struct Pixel(pub u8);

impl Pixel {
    pub fn clamped(value: f64) -> Self {
        Self(clamp_u8(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl From<u8> for Pixel {
    fn from(v: u8) -> Self {
        Self(v)
    }
}

impl From<Pixel> for u8 {
    fn from(p: Pixel) -> Self {
        p.0
    }
}

impl num_traits::AsPrimitive<f64> for Pixel {
    fn as_(self) -> f64 {
        self.0 as f64
    }
}
