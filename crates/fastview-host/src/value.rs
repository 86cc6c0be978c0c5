use fastview::{to_uint32, View};

/// A dynamically typed call argument.
///
/// `'v` is the borrow of the target view, `'b` the borrow of the buffer the
/// view will alias.
#[derive(Debug, Default)]
pub enum HostValue<'v, 'b> {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Buffer(&'b mut [u8]),
    View(&'v mut View<'b>),
}

impl<'v, 'b> HostValue<'v, 'b> {
    pub fn is_undefined(&self) -> bool {
        matches!(self, HostValue::Undefined)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            HostValue::Undefined => "undefined",
            HostValue::Null => "null",
            HostValue::Bool(_) => "boolean",
            HostValue::Number(_) => "number",
            HostValue::String(_) => "string",
            HostValue::Buffer(_) => "Buffer",
            HostValue::View(_) => "View",
        }
    }

    /// Numeric coercion: numeric strings parse after trimming, the empty
    /// string is 0, objects and undefined are NaN.
    pub fn to_number(&self) -> f64 {
        match self {
            HostValue::Undefined => f64::NAN,
            HostValue::Null => 0.0,
            HostValue::Bool(b) => *b as u8 as f64,
            HostValue::Number(n) => *n,
            HostValue::String(s) => {
                let s = s.trim();
                if s.is_empty() {
                    0.0
                } else {
                    s.parse().unwrap_or(f64::NAN)
                }
            }
            HostValue::Buffer(_) | HostValue::View(_) => f64::NAN,
        }
    }

    pub fn to_uint32(&self) -> u32 {
        to_uint32(self.to_number())
    }
}

impl From<f64> for HostValue<'_, '_> {
    fn from(n: f64) -> Self {
        HostValue::Number(n)
    }
}

impl From<u32> for HostValue<'_, '_> {
    fn from(n: u32) -> Self {
        HostValue::Number(n as f64)
    }
}

impl From<bool> for HostValue<'_, '_> {
    fn from(b: bool) -> Self {
        HostValue::Bool(b)
    }
}

impl From<&str> for HostValue<'_, '_> {
    fn from(s: &str) -> Self {
        HostValue::String(s.to_string())
    }
}

impl<'b> From<&'b mut [u8]> for HostValue<'_, 'b> {
    fn from(buf: &'b mut [u8]) -> Self {
        HostValue::Buffer(buf)
    }
}

impl<'v, 'b> From<&'v mut View<'b>> for HostValue<'v, 'b> {
    fn from(view: &'v mut View<'b>) -> Self {
        HostValue::View(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_coercion() {
        assert!(HostValue::Undefined.to_number().is_nan());
        assert_eq!(HostValue::Null.to_number(), 0.0);
        assert_eq!(HostValue::from(true).to_number(), 1.0);
        assert_eq!(HostValue::from(" 12 ").to_number(), 12.0);
        assert_eq!(HostValue::from("").to_number(), 0.0);
        assert!(HostValue::from("twelve").to_number().is_nan());
    }

    #[test]
    fn uint32_coercion() {
        assert_eq!(HostValue::from(-1.0).to_uint32(), u32::MAX);
        assert_eq!(HostValue::from(3.7).to_uint32(), 3);
        assert_eq!(HostValue::Undefined.to_uint32(), 0);
        assert_eq!(HostValue::from("8").to_uint32(), 8);
    }
}
