//! Pin identifiers and command arguments

use alloc::string::String;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum length of a named pin
pub const MAX_PIN_NAME_LEN: usize = 16;

/// Logical address of a widget in the mobile app
///
/// The layer never checks ranges or uniqueness; the app decides what a
/// pin means.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum Pin {
    /// Numbered virtual pin (V0, V1, ...)
    Number(u16),
    /// Named pin, sent verbatim
    Name(heapless::String<MAX_PIN_NAME_LEN>),
}

impl Pin {
    /// Create a named pin
    ///
    /// Returns `None` if the name does not fit in `MAX_PIN_NAME_LEN` bytes.
    pub fn named(name: &str) -> Option<Self> {
        let mut s = heapless::String::new();
        s.push_str(name).ok()?;
        Some(Pin::Name(s))
    }

    /// Pin number, if this is a numbered pin
    pub fn number(&self) -> Option<u16> {
        match self {
            Pin::Number(n) => Some(*n),
            Pin::Name(_) => None,
        }
    }
}

impl From<u16> for Pin {
    fn from(n: u16) -> Self {
        Pin::Number(n)
    }
}

impl From<u8> for Pin {
    fn from(n: u8) -> Self {
        Pin::Number(n.into())
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pin::Number(n) => write!(f, "{}", n),
            Pin::Name(name) => f.write_str(name),
        }
    }
}

/// One positional argument of a command
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Value {
    /// Text, sent as-is
    Str(String),
    /// Signed integer
    Int(i64),
    /// Unsigned integer
    UInt(u64),
    /// Floating point number
    Float(f64),
}

impl Value {
    /// Borrow the text if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Int(n) => write!(f, "{}", n),
            Value::UInt(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(String::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Str(s.clone())
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty: $($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::$variant(<$target>::from(n))
                }
            }
        )*
    };
}

impl_from_int!(Int, i64: i8, i16, i32, i64);
impl_from_int!(UInt, u64: u8, u16, u32, u64);

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::UInt(n as u64)
    }
}

impl From<isize> for Value {
    fn from(n: isize) -> Self {
        Value::Int(n as i64)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}
