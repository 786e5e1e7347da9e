//! # `charseq` Character Sequence Encoder
//!
//! This crate prepares raw text records for a downstream sequence model.
//!
//! Each record is normalized, mapped onto a small fixed character vocabulary,
//! and aligned to a fixed width; parallel labels are coerced to `bool`.
//!
//! See:
//! * [`vocab`] for the legal character set and the [`vocab::CharVocab`] bijection.
//! * [`normalize`] for record cleaning and sentinel wrapping.
//! * [`encoders`] to encode normalized text and align it to a fixed width.
//! * [`labels`] to coerce raw label values into a boolean vector.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//!
//! #### feature: ``ahash``
//!
//! This swaps the char/index ``HashMap`` for ``ahash``.
//!
//! This is done by the ``types::CSHashMap`` type alias machinery.
//!
//! #### feature: ``rayon``
//!
//! This enables parallel batch encoding using the ``rayon`` crate.
//!
//! #### feature: ``serde``
//!
//! This enables deserialization of [`labels::LabelValue`] from JSON scalars.
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//!
//! ## Encoding a Batch
//!
//! ```rust
//! use charseq::{SequenceEncoder, labels::{LabelValue, build_labels}};
//!
//! let encoder = SequenceEncoder::<u16>::new()?;
//!
//! let x = encoder.encode_batch(&["Hello, World!", "Hi"], 10)?;
//! assert_eq!(x.shape(), (2, 10));
//!
//! let y = build_labels(&[LabelValue::from(true), LabelValue::from(0)]);
//! assert_eq!(y, vec![true, false]);
//! # Ok::<(), charseq::errors::CharSeqError>(())
//! ```
#![warn(missing_docs, unused)]

pub mod encoders;
pub mod errors;
pub mod labels;
pub mod normalize;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use encoders::{EncodedBatch, SequenceEncoder, SequenceMatrix};
#[doc(inline)]
pub use errors::{CSResult, CharSeqError};
#[doc(inline)]
pub use normalize::{NormalizedText, TextNormalizer};
#[doc(inline)]
pub use types::IndexType;
#[doc(inline)]
pub use vocab::{CharVocab, shared_vocab};

/// The vocabulary size of the shared vocabulary.
///
/// This is the number of legal characters.
pub fn vocabulary_size() -> usize {
    shared_vocab().len()
}

/// The padding value of the shared vocabulary.
///
/// Always equal to [`vocabulary_size`]; one past the largest valid index.
pub fn padding_value() -> usize {
    shared_vocab().len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert_eq!(vocabulary_size(), 98);
        assert_eq!(padding_value(), vocabulary_size());
        assert_eq!(shared_vocab().padding_value() as usize, padding_value());
    }
}
