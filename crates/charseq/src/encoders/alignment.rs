//! # Fixed-Width Alignment
//!
//! Aligns variable length index sequences to a fixed width.
//!
//! The default policy is pre-padding and pre-truncation:
//! real content is right-aligned against the end of the window,
//! so the end-of-record sentinel always survives truncation.

use std::iter::repeat_n;

/// Which end of a sequence an alignment operation acts upon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Side {
    /// The front of the sequence.
    #[default]
    Pre,

    /// The back of the sequence.
    Post,
}

/// Options for aligning a sequence to a fixed width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AlignOptions {
    /// Where padding is inserted when a sequence is short.
    pub padding: Side,

    /// Where elements are dropped when a sequence is long.
    pub truncating: Side,
}

impl AlignOptions {
    /// Get the padding side.
    pub fn padding(&self) -> Side {
        self.padding
    }

    /// Set the padding side.
    pub fn set_padding(
        &mut self,
        padding: Side,
    ) {
        self.padding = padding;
    }

    /// Set the padding side and return the options.
    pub fn with_padding(
        mut self,
        padding: Side,
    ) -> Self {
        self.set_padding(padding);
        self
    }

    /// Get the truncating side.
    pub fn truncating(&self) -> Side {
        self.truncating
    }

    /// Set the truncating side.
    pub fn set_truncating(
        &mut self,
        truncating: Side,
    ) {
        self.truncating = truncating;
    }

    /// Set the truncating side and return the options.
    pub fn with_truncating(
        mut self,
        truncating: Side,
    ) -> Self {
        self.set_truncating(truncating);
        self
    }
}

/// Align a sequence to `width`, appending the result to a target buffer.
///
/// Exactly `width` elements are appended.
///
/// ## Arguments
/// * `sequence` - The unaligned sequence.
/// * `width` - The target width.
/// * `pad` - The padding value.
/// * `options` - The padding and truncation sides.
/// * `target` - The buffer to append to.
pub fn align_append<T: Copy>(
    sequence: &[T],
    width: usize,
    pad: T,
    options: AlignOptions,
    target: &mut Vec<T>,
) {
    let len = sequence.len();

    if len >= width {
        let kept = match options.truncating {
            Side::Pre => &sequence[len - width..],
            Side::Post => &sequence[..width],
        };
        target.extend_from_slice(kept);
        return;
    }

    let fill = width - len;
    match options.padding {
        Side::Pre => {
            target.extend(repeat_n(pad, fill));
            target.extend_from_slice(sequence);
        }
        Side::Post => {
            target.extend_from_slice(sequence);
            target.extend(repeat_n(pad, fill));
        }
    }
}

/// Align a sequence to `width`.
///
/// * `len == width`: returned unchanged.
/// * `len > width`: truncated on the `options.truncating` side.
/// * `len < width`: padded with `pad` on the `options.padding` side.
///
/// ## Returns
/// A vector of exactly `width` elements.
pub fn align<T: Copy>(
    sequence: &[T],
    width: usize,
    pad: T,
    options: AlignOptions,
) -> Vec<T> {
    let mut aligned = Vec::with_capacity(width);
    align_append(sequence, width, pad, options, &mut aligned);
    aligned
}
