//! # Encoded Batch

use crate::{
    encoders::SequenceMatrix,
    errors::{CSResult, CharSeqError},
};

/// An encoded ``x`` matrix, with optional parallel ``y`` labels.
///
/// When labels are present, there is exactly one per row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedBatch<T> {
    x: SequenceMatrix<T>,
    y: Option<Vec<bool>>,
}

impl<T: Copy> EncodedBatch<T> {
    /// Pair an encoded matrix with labels.
    ///
    /// ## Returns
    /// The batch; or [`CharSeqError::LengthMismatch`] if the
    /// label count differs from the row count.
    pub fn new(
        x: SequenceMatrix<T>,
        y: Option<Vec<bool>>,
    ) -> CSResult<Self> {
        if let Some(y) = y.as_ref().filter(|y| y.len() != x.rows()) {
            return Err(CharSeqError::LengthMismatch {
                texts: x.rows(),
                labels: y.len(),
            });
        }
        Ok(Self { x, y })
    }

    /// The number of records.
    pub fn len(&self) -> usize {
        self.x.rows()
    }

    /// Are there no records?
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// The encoded matrix.
    pub fn x(&self) -> &SequenceMatrix<T> {
        &self.x
    }

    /// The labels, if any.
    pub fn y(&self) -> Option<&[bool]> {
        self.y.as_deref()
    }

    /// Iterate ``(row, label)`` pairs.
    ///
    /// The label is `None` when the batch is unlabeled.
    pub fn iter(&self) -> impl Iterator<Item = (&[T], Option<bool>)> + '_ {
        self.x
            .iter_rows()
            .enumerate()
            .map(|(idx, row)| (row, self.y.as_ref().map(|y| y[idx])))
    }

    /// Unwrap into the ``(x, y)`` parts.
    pub fn into_parts(self) -> (SequenceMatrix<T>, Option<Vec<bool>>) {
        (self.x, self.y)
    }
}
