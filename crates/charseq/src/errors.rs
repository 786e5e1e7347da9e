//! # Error Types

/// Errors from charseq operations.
///
/// Illegal input characters never surface here; the normalizer
/// absorbs them by substitution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CharSeqError {
    /// A character reached the encoder that the vocabulary does not contain.
    ///
    /// Normalized text only holds legal characters, so this indicates
    /// drift between the normalizer and the vocabulary.
    #[error("unknown character {ch:?} at position {position}")]
    UnknownCharacter {
        /// The offending character.
        ch: char,

        /// The char position within the normalized text.
        position: usize,
    },

    /// The label count does not match the record count.
    #[error("length mismatch: {texts} texts vs {labels} labels")]
    LengthMismatch {
        /// The number of text records.
        texts: usize,

        /// The number of labels.
        labels: usize,
    },

    /// The padding value does not fit the target index type.
    #[error("vocab size ({size}) exceeds index type capacity")]
    IndexOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },
}

/// Result type for charseq operations.
pub type CSResult<T> = core::result::Result<T, CharSeqError>;
