//! # Label Vectors
//!
//! Coerces parallel raw labels into a boolean vector.
//!
//! Coercion is explicit; see [`Truthy`] for the per-representation rules,
//! and [`LabelValue`] for heterogeneous label lists.
pub mod label_value;
pub mod truthy;

#[doc(inline)]
pub use label_value::LabelValue;
#[doc(inline)]
pub use truthy::Truthy;

use crate::errors::{CSResult, CharSeqError};

/// Coerce raw labels into a boolean vector.
///
/// The output has one entry per input, in order.
/// No validation against any text batch is performed;
/// see [`check_aligned`].
pub fn build_labels<I>(labels: I) -> Vec<bool>
where
    I: IntoIterator,
    I::Item: Truthy,
{
    labels.into_iter().map(|label| label.truthy()).collect()
}

/// Check that a label count matches a record count.
///
/// ## Returns
/// [`CharSeqError::LengthMismatch`] if they differ.
pub fn check_aligned(
    texts: usize,
    labels: usize,
) -> CSResult<()> {
    if texts == labels {
        Ok(())
    } else {
        Err(CharSeqError::LengthMismatch { texts, labels })
    }
}
