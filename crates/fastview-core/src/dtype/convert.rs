//! Number conversions applied when a host number is stored into a view.
//!
//! Integer stores truncate toward zero and wrap modulo 2^32 before being
//! narrowed to the element width, so `to_uint32(v) as i8` yields the same bits
//! a scripting host would store into an `int8` slot.

const TWO_POW_32: f64 = 4_294_967_296.0;

/// Truncates `value` and wraps it into `0..2^32`. Non-finite input maps to 0.
pub fn to_uint32(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    value.trunc().rem_euclid(TWO_POW_32) as u32
}

/// Same bits as [`to_uint32`], reinterpreted as signed.
pub fn to_int32(value: f64) -> i32 {
    to_uint32(value) as i32
}

/// Saturates `value` into `0..=255`, rounding halfway cases to even.
pub fn clamp_u8(value: f64) -> u8 {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    if value >= 255.0 {
        return 255;
    }
    value.round_ties_even() as u8
}
