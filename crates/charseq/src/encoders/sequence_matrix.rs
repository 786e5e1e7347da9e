//! # Sequence Matrix

use core::ops::Index;

/// A row-major ``rows x width`` matrix of aligned sequences.
///
/// Row `i` holds the aligned encoding of record `i`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceMatrix<T> {
    rows: usize,
    width: usize,
    data: Vec<T>,
}

impl<T: Copy> SequenceMatrix<T> {
    /// Create an empty matrix with capacity for `rows` rows.
    pub fn with_capacity(
        rows: usize,
        width: usize,
    ) -> Self {
        Self {
            rows: 0,
            width,
            data: Vec::with_capacity(rows * width),
        }
    }

    /// Build a matrix from rows.
    ///
    /// ## Returns
    /// `None` if any row is not exactly `width` long.
    pub fn from_rows<I, R>(
        width: usize,
        rows: I,
    ) -> Option<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[T]>,
    {
        let mut matrix = Self::with_capacity(0, width);
        for row in rows {
            let row = row.as_ref();
            if row.len() != width {
                return None;
            }
            matrix.data.extend_from_slice(row);
            matrix.rows += 1;
        }
        Some(matrix)
    }

    /// Append a row through a writer closure.
    ///
    /// The closure must append exactly `width` elements.
    pub(crate) fn push_row_with<F, E>(
        &mut self,
        write: F,
    ) -> Result<(), E>
    where
        F: FnOnce(&mut Vec<T>) -> Result<(), E>,
    {
        let start = self.data.len();
        write(&mut self.data)?;
        debug_assert_eq!(self.data.len() - start, self.width);
        self.rows += 1;
        Ok(())
    }

    /// The number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The fixed row width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The ``(rows, width)`` shape.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.width)
    }

    /// Are there no rows?
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Get row `idx`, if present.
    pub fn row(
        &self,
        idx: usize,
    ) -> Option<&[T]> {
        if idx < self.rows {
            Some(&self.data[idx * self.width..(idx + 1) * self.width])
        } else {
            None
        }
    }

    /// Iterate the rows in order.
    pub fn iter_rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        let width = self.width;
        (0..self.rows).map(move |idx| &self.data[idx * width..(idx + 1) * width])
    }

    /// The row-major backing data.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Unwrap into the row-major backing data.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Copy out as a vector of rows.
    pub fn to_nested(&self) -> Vec<Vec<T>> {
        self.iter_rows().map(<[T]>::to_vec).collect()
    }
}

impl<T: Copy> Index<usize> for SequenceMatrix<T> {
    type Output = [T];

    fn index(
        &self,
        idx: usize,
    ) -> &Self::Output {
        self.row(idx).expect("row index out of range")
    }
}
