//! # Normalization
//!
//! Cleans raw records into a canonical, sentinel-wrapped form.
//!
//! * [`TextNormalizer`] performs the cleaning.
//! * [`NormalizedText`] is its only product, and the only thing the
//!   [`SequenceEncoder`](crate::encoders::SequenceEncoder) will encode.
pub mod normalized_text;
pub mod text_normalizer;

#[doc(inline)]
pub use normalized_text::NormalizedText;
#[doc(inline)]
pub use text_normalizer::TextNormalizer;
