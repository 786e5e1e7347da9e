//! # Normalized Text

use core::fmt::{Display, Formatter};

/// A cleaned, sentinel-wrapped record.
///
/// Only [`TextNormalizer`](crate::normalize::TextNormalizer) constructs these;
/// so holding one means the record was normalized exactly once.
///
/// The first char is always `<`, the last always `>`,
/// and neither sentinel appears anywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub(crate) fn from_body(body: &str) -> Self {
        let mut text = String::with_capacity(body.len() + 2);
        text.push(crate::vocab::START_SENTINEL);
        text.push_str(body);
        text.push(crate::vocab::END_SENTINEL);
        Self(text)
    }

    /// The full text, including both sentinels.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The text between the sentinels.
    pub fn body(&self) -> &str {
        // Both sentinels are single-byte.
        &self.0[1..self.0.len() - 1]
    }

    /// The number of chars, including both sentinels.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    /// Unwrap into the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Display for NormalizedText {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<NormalizedText> for String {
    fn from(text: NormalizedText) -> Self {
        text.into_string()
    }
}
