//! # Sequence Encoders
//!
//! * [`SequenceEncoder`] maps normalized text onto vocabulary indices,
//!   and aligns the result to a fixed width.
//! * [`alignment`] holds the padding / truncation policy.
//! * [`SequenceMatrix`] is the ``N x width`` batch output.
//! * [`EncodedBatch`] pairs a matrix with parallel labels.
pub mod alignment;
pub mod encoded_batch;
pub mod sequence_encoder;
pub mod sequence_matrix;

#[doc(inline)]
pub use alignment::{AlignOptions, Side};
#[doc(inline)]
pub use encoded_batch::EncodedBatch;
#[doc(inline)]
pub use sequence_encoder::SequenceEncoder;
#[doc(inline)]
pub use sequence_matrix::SequenceMatrix;
