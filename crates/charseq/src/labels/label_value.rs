//! # Raw Label Values

use core::fmt::{Display, Formatter};

use crate::labels::Truthy;

/// A raw label, in any of the accepted representations.
///
/// With the ``serde`` feature, this deserializes from any JSON scalar.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum LabelValue {
    /// An absent label.
    #[default]
    Null,

    /// A boolean label.
    Bool(bool),

    /// A signed integer label.
    Int(i64),

    /// An unsigned integer label too wide for [`LabelValue::Int`].
    UInt(u64),

    /// A floating point label.
    Float(f64),

    /// A text label.
    Text(String),
}

impl Truthy for LabelValue {
    fn truthy(&self) -> bool {
        match self {
            LabelValue::Null => false,
            LabelValue::Bool(b) => b.truthy(),
            LabelValue::Int(i) => i.truthy(),
            LabelValue::UInt(u) => u.truthy(),
            LabelValue::Float(f) => f.truthy(),
            LabelValue::Text(s) => s.truthy(),
        }
    }
}

impl Display for LabelValue {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> core::fmt::Result {
        match self {
            LabelValue::Null => f.write_str("null"),
            LabelValue::Bool(b) => write!(f, "{b}"),
            LabelValue::Int(i) => write!(f, "{i}"),
            LabelValue::UInt(u) => write!(f, "{u}"),
            LabelValue::Float(x) => write!(f, "{x}"),
            LabelValue::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<bool> for LabelValue {
    fn from(value: bool) -> Self {
        LabelValue::Bool(value)
    }
}

macro_rules! from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for LabelValue {
                fn from(value: $t) -> Self {
                    LabelValue::Int(value as i64)
                }
            }
        )*
    };
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for LabelValue {
                fn from(value: $t) -> Self {
                    LabelValue::UInt(value as u64)
                }
            }
        )*
    };
}

from_signed!(i8, i16, i32, i64, isize);
from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for LabelValue {
    fn from(value: f32) -> Self {
        LabelValue::Float(value as f64)
    }
}

impl From<f64> for LabelValue {
    fn from(value: f64) -> Self {
        LabelValue::Float(value)
    }
}

impl From<&str> for LabelValue {
    fn from(value: &str) -> Self {
        LabelValue::Text(value.to_string())
    }
}

impl From<String> for LabelValue {
    fn from(value: String) -> Self {
        LabelValue::Text(value)
    }
}

impl<V: Into<LabelValue>> From<Option<V>> for LabelValue {
    fn from(value: Option<V>) -> Self {
        value.map_or(LabelValue::Null, Into::into)
    }
}
