//! # Legal Character Set
//!
//! The fixed alphabet the encoder will ever emit indices for.
//!
//! The default set is the standard printable characters,
//! minus newline and carriage return:
//! ``{ '\t', '\x0b', '\x0c' } + ' '..='~'``; 98 characters.

use std::sync::Arc;

/// Record start sentinel.
pub const START_SENTINEL: char = '<';

/// Record end sentinel.
pub const END_SENTINEL: char = '>';

/// The size of the printable legal character set.
pub const PRINTABLE_CHAR_COUNT: usize = 98;

/// Is `c` a member of the printable legal character set?
#[inline(always)]
pub fn is_printable_legal(c: char) -> bool {
    matches!(c, '\t' | '\x0b' | '\x0c' | ' '..='~')
}

/// Is `c` one of the two record sentinels?
#[inline(always)]
pub fn is_sentinel(c: char) -> bool {
    c == START_SENTINEL || c == END_SENTINEL
}

/// An immutable, code point ordered set of legal characters.
///
/// Every set contains the space character and both sentinels;
/// the normalizer needs all three to build a record.
///
/// Cloning is cheap; the underlying storage is shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegalChars {
    chars: Arc<[char]>,
}

impl Default for LegalChars {
    fn default() -> Self {
        Self::printable()
    }
}

impl LegalChars {
    /// The standard printable set, minus newline and carriage return.
    pub fn printable() -> Self {
        let chars = ['\t', '\x0b', '\x0c']
            .into_iter()
            .chain(' '..='~')
            .collect::<Vec<_>>();
        Self {
            chars: chars.into(),
        }
    }

    /// Build a reduced alphabet from the given characters.
    ///
    /// Duplicates are dropped, and the space character and
    /// both sentinels are always added.
    ///
    /// ## Arguments
    /// * `chars` - The characters to admit.
    pub fn from_chars<I>(chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut chars = chars
            .into_iter()
            .chain([' ', START_SENTINEL, END_SENTINEL])
            .collect::<Vec<_>>();
        chars.sort_unstable();
        chars.dedup();
        Self {
            chars: chars.into(),
        }
    }

    /// The number of legal characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; every set holds at least the space and sentinels.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Is `c` legal in this set?
    #[inline]
    pub fn contains(
        &self,
        c: char,
    ) -> bool {
        self.chars.binary_search(&c).is_ok()
    }

    /// The legal characters, in code point order.
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    /// Iterate the legal characters, in code point order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}
