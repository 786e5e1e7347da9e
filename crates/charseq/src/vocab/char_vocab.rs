//! # Char/Index Bijection Table

use core::fmt::Debug;

use crate::{
    errors::{CSResult, CharSeqError},
    types::{CSHashMap, IndexType, hash_map_with_capacity},
    vocab::legal_chars::LegalChars,
};

/// Legal Char/Index Bijection Table
///
/// Characters are assigned indices ``0..len`` in code point order;
/// the padding value is ``len``, one past the largest index.
#[derive(Clone, PartialEq)]
pub struct CharVocab<T: IndexType> {
    /// The alphabet this vocabulary was built from.
    legal: LegalChars,

    /// Hash map from char to index.
    char_indices: CSHashMap<char, T>,

    /// The padding value; ``legal.len()``.
    padding: T,
}

impl<T: IndexType> Debug for CharVocab<T> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("CharVocab")
            .field("len", &self.len())
            .field("padding", &self.padding)
            .finish()
    }
}

impl<T: IndexType> CharVocab<T> {
    /// Build the vocabulary over the printable legal character set.
    ///
    /// ## Returns
    /// The vocabulary; or [`CharSeqError::IndexOverflow`] if `T`
    /// cannot hold the padding value.
    pub fn build() -> CSResult<Self> {
        Self::from_legal_chars(LegalChars::printable())
    }

    /// Build a vocabulary over the given alphabet.
    ///
    /// ## Arguments
    /// * `legal` - The alphabet; already code point ordered.
    ///
    /// ## Returns
    /// The vocabulary; or [`CharSeqError::IndexOverflow`] if `T`
    /// cannot hold the padding value.
    pub fn from_legal_chars(legal: LegalChars) -> CSResult<Self> {
        let size = legal.len();
        let padding = T::from_usize(size).ok_or(CharSeqError::IndexOverflow { size })?;

        let mut char_indices = hash_map_with_capacity(size);
        for (idx, c) in legal.iter().enumerate() {
            let index = T::from_usize(idx).ok_or(CharSeqError::IndexOverflow { size })?;
            char_indices.insert(c, index);
        }

        log::debug!("built char vocab: {size} chars, padding {padding}");

        Ok(Self {
            legal,
            char_indices,
            padding,
        })
    }

    /// Convert to a different index type.
    pub fn to_index_type<G: IndexType>(&self) -> CSResult<CharVocab<G>> {
        CharVocab::<G>::from_legal_chars(self.legal.clone())
    }

    /// The alphabet this vocabulary covers.
    pub fn legal_chars(&self) -> &LegalChars {
        &self.legal
    }

    /// The number of characters in the vocabulary.
    pub fn len(&self) -> usize {
        self.legal.len()
    }

    /// Always false; see [`LegalChars::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.legal.is_empty()
    }

    /// The padding value; one past the largest valid index.
    pub fn padding_value(&self) -> T {
        self.padding
    }

    /// Is `index` the padding value?
    #[inline(always)]
    pub fn is_padding(
        &self,
        index: T,
    ) -> bool {
        index == self.padding
    }

    /// Get the index for a character, if it is legal.
    #[inline(always)]
    pub fn encode(
        &self,
        c: char,
    ) -> Option<T> {
        self.char_indices.get(&c).copied()
    }

    /// Get the character for an index, if any.
    ///
    /// The padding value decodes to `None`.
    #[inline(always)]
    pub fn decode(
        &self,
        index: T,
    ) -> Option<char> {
        self.legal.as_slice().get(index.to_usize()?).copied()
    }

    /// Iterate ``(index, char)`` pairs in index order.
    pub fn chars(&self) -> impl Iterator<Item = (T, char)> + '_ {
        self.legal
            .iter()
            .enumerate()
            .filter_map(|(idx, c)| Some((T::from_usize(idx)?, c)))
    }

    /// Decode an index sequence back to text.
    ///
    /// Padding positions are skipped;
    /// out-of-range indices decode to [`char::REPLACEMENT_CHARACTER`].
    pub fn decode_sequence(
        &self,
        indices: &[T],
    ) -> String {
        indices
            .iter()
            .filter(|&&index| !self.is_padding(index))
            .map(|&index| self.decode(index).unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }
}
