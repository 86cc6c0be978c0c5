use num_traits::AsPrimitive;

mod convert;
mod pixel;

pub use convert::*;
pub use pixel::*;

#[cfg(test)]
use test_strategy::Arbitrary;

/// The numeric interpretation applied to the bytes behind a view.
///
/// Variants are declared in tag resolution priority order. The textual tags
/// are the names hosts use to request a type, e.g `"float"` for `Float32`.
#[cfg_attr(test, derive(Arbitrary))]
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Default,
    Hash,
    strum_macros::EnumIter,
    strum_macros::EnumString,
    strum_macros::Display,
    strum_macros::IntoStaticStr,
)]
pub enum ElementType {
    #[strum(serialize = "int8")]
    Int8,
    #[default]
    #[strum(serialize = "uint8")]
    Uint8,
    #[strum(serialize = "int16")]
    Int16,
    #[strum(serialize = "uint16")]
    Uint16,
    #[strum(serialize = "int32")]
    Int32,
    #[strum(serialize = "uint32")]
    Uint32,
    #[strum(serialize = "float")]
    Float32,
    #[strum(serialize = "double")]
    Float64,
    #[strum(serialize = "pixel")]
    Pixel,
}

impl ElementType {
    /// Returns the size of the type in bytes.
    pub fn size_of(self) -> usize {
        match self {
            ElementType::Int8 => 1,
            ElementType::Uint8 => 1,
            ElementType::Int16 => 2,
            ElementType::Uint16 => 2,
            ElementType::Int32 => 4,
            ElementType::Uint32 => 4,
            ElementType::Float32 => 4,
            ElementType::Float64 => 8,
            ElementType::Pixel => 1,
        }
    }

    pub fn tag(self) -> &'static str {
        self.into()
    }

    /// Stores through a clamped type saturate instead of wrapping.
    pub fn is_clamped(self) -> bool {
        matches!(self, ElementType::Pixel)
    }

    /// Whether `offset` is a multiple of the element size.
    ///
    /// Every element size is a power of two, so a mask is sufficient.
    pub fn is_aligned(self, offset: usize) -> bool {
        offset & (self.size_of() - 1) == 0
    }
}

/// A Rust type that can be read out of, and written into, a bound view.
pub trait ViewElement:
    Copy + std::fmt::Debug + PartialEq + Send + Sync + 'static + bytemuck::Pod + AsPrimitive<f64>
{
    fn ty() -> ElementType;

    /// Converts a host number using the store semantics of `Self::ty()`.
    fn from_number(value: f64) -> Self;

    fn to_number(self) -> f64 {
        self.as_()
    }
}

macro_rules! map_int_type {
    ($t:ty, $v:ident) => {
        impl ViewElement for $t {
            fn ty() -> ElementType {
                ElementType::$v
            }

            fn from_number(value: f64) -> Self {
                to_uint32(value) as $t
            }
        }
    };
}

macro_rules! map_float_type {
    ($t:ty, $v:ident) => {
        impl ViewElement for $t {
            fn ty() -> ElementType {
                ElementType::$v
            }

            fn from_number(value: f64) -> Self {
                value as $t
            }
        }
    };
}

map_int_type!(i8, Int8);
map_int_type!(u8, Uint8);
map_int_type!(i16, Int16);
map_int_type!(u16, Uint16);
map_int_type!(i32, Int32);
map_int_type!(u32, Uint32);
map_float_type!(f32, Float32);
map_float_type!(f64, Float64);

impl ViewElement for Pixel {
    fn ty() -> ElementType {
        ElementType::Pixel
    }

    fn from_number(value: f64) -> Self {
        Pixel::clamped(value)
    }
}
