//! Group code / value pairs

use crate::types::Handle;
use std::fmt;

/// Value carried by a [`Tag`]
///
/// Values keep the type they were supplied with so that rendering never
/// has to guess: integers print without a decimal point, booleans as `0`/`1`,
/// reals with the shortest text that reproduces the same `f64`.
///
/// Reals must be finite; DXF has no spelling for NaN or infinity, and
/// debug builds panic when one is rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    Str(String),
    Int(i64),
    Real(f64),
    Bool(bool),
    Handle(Handle),
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValue::Str(s) => f.write_str(s),
            TagValue::Int(i) => write!(f, "{}", i),
            // -0.0 would otherwise print as "-0"
            TagValue::Real(v) if *v == 0.0 => f.write_str("0"),
            TagValue::Real(v) => {
                debug_assert!(v.is_finite(), "non-finite real {}", v);
                write!(f, "{}", v)
            }
            TagValue::Bool(b) => f.write_str(if *b { "1" } else { "0" }),
            TagValue::Handle(h) => write!(f, "{}", h),
        }
    }
}

impl From<&str> for TagValue {
    fn from(value: &str) -> Self {
        TagValue::Str(value.to_string())
    }
}

impl From<String> for TagValue {
    fn from(value: String) -> Self {
        TagValue::Str(value)
    }
}

impl From<&String> for TagValue {
    fn from(value: &String) -> Self {
        TagValue::Str(value.clone())
    }
}

impl From<f64> for TagValue {
    fn from(value: f64) -> Self {
        TagValue::Real(value)
    }
}

impl From<i16> for TagValue {
    fn from(value: i16) -> Self {
        TagValue::Int(value as i64)
    }
}

impl From<i32> for TagValue {
    fn from(value: i32) -> Self {
        TagValue::Int(value as i64)
    }
}

impl From<i64> for TagValue {
    fn from(value: i64) -> Self {
        TagValue::Int(value)
    }
}

impl From<u8> for TagValue {
    fn from(value: u8) -> Self {
        TagValue::Int(value as i64)
    }
}

impl From<usize> for TagValue {
    fn from(value: usize) -> Self {
        TagValue::Int(value as i64)
    }
}

impl From<bool> for TagValue {
    fn from(value: bool) -> Self {
        TagValue::Bool(value)
    }
}

impl From<Handle> for TagValue {
    fn from(value: Handle) -> Self {
        TagValue::Handle(value)
    }
}

/// An immutable group code / value pair
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    code: i32,
    value: TagValue,
}

impl Tag {
    /// Create a new tag
    pub fn new(code: i32, value: impl Into<TagValue>) -> Self {
        Tag {
            code,
            value: value.into(),
        }
    }

    /// Group code
    pub fn code(&self) -> i32 {
        self.code
    }

    /// Value
    pub fn value(&self) -> &TagValue {
        &self.value
    }

    /// Code 0 starts a new record
    pub fn is_record_start(&self) -> bool {
        self.code == 0
    }
}

/// Two lines: the code, then the value.
impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.code, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "non-finite real")]
    fn test_non_finite_real_panics_in_debug() {
        let _ = TagValue::Real(f64::NAN).to_string();
    }

    #[test]
    fn test_tag_display() {
        assert_eq!(Tag::new(0, "LINE").to_string(), "0\nLINE");
        assert_eq!(Tag::new(70, 4i16).to_string(), "70\n4");
        assert_eq!(Tag::new(5, Handle::new(0x2A)).to_string(), "5\n2A");
    }

    #[test]
    fn test_integers_have_no_decimal_point() {
        assert_eq!(TagValue::from(12i32).to_string(), "12");
        assert_eq!(TagValue::from(-3i64).to_string(), "-3");
        assert_eq!(TagValue::from(7usize).to_string(), "7");
    }

    #[test]
    fn test_booleans_render_as_digits() {
        assert_eq!(TagValue::from(true).to_string(), "1");
        assert_eq!(TagValue::from(false).to_string(), "0");
    }

    #[test]
    fn test_reals_keep_full_precision() {
        assert_eq!(TagValue::from(24445787874545.336).to_string(), "24445787874545.336");
        assert_eq!(TagValue::from(47854548454.54874).to_string(), "47854548454.54874");
        assert_eq!(TagValue::from(0.14111122215556).to_string(), "0.14111122215556");
        assert_eq!(TagValue::from(0.0000001).to_string(), "0.0000001");
        assert_eq!(TagValue::from(1e21).to_string(), "1000000000000000000000");
    }

    #[test]
    fn test_whole_reals_print_like_integers() {
        assert_eq!(TagValue::from(1.0).to_string(), "1");
        assert_eq!(TagValue::from(0.0).to_string(), "0");
        assert_eq!(TagValue::from(-0.0).to_string(), "0");
        assert_eq!(TagValue::from(-2.5).to_string(), "-2.5");
    }

    #[test]
    fn test_record_start() {
        assert!(Tag::new(0, "SECTION").is_record_start());
        assert!(!Tag::new(2, "HEADER").is_record_start());
    }
}
