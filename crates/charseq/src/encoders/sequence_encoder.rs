//! # Sequence Encoder

use std::sync::Arc;

use crate::{
    encoders::{
        EncodedBatch,
        SequenceMatrix,
        alignment::{AlignOptions, align},
    },
    errors::{CSResult, CharSeqError},
    labels::Truthy,
    normalize::{NormalizedText, TextNormalizer},
    types::IndexType,
    vocab::CharVocab,
};

/// Normalizes, encodes, and aligns text records.
///
/// The normalizer is derived from the vocabulary's alphabet,
/// so every normalized char has an index.
#[derive(Debug, Clone)]
pub struct SequenceEncoder<T: IndexType> {
    vocab: Arc<CharVocab<T>>,
    normalizer: TextNormalizer,
    options: AlignOptions,
}

impl<T: IndexType> SequenceEncoder<T> {
    /// Create an encoder over the printable vocabulary.
    ///
    /// ## Returns
    /// The encoder; or [`CharSeqError::IndexOverflow`] if `T`
    /// cannot hold the padding value.
    pub fn new() -> CSResult<Self> {
        Ok(Self::from_vocab(Arc::new(CharVocab::build()?)))
    }

    /// Create an encoder over an existing vocabulary.
    pub fn from_vocab(vocab: Arc<CharVocab<T>>) -> Self {
        let normalizer = TextNormalizer::new(vocab.legal_chars().clone());
        Self {
            vocab,
            normalizer,
            options: AlignOptions::default(),
        }
    }

    /// Set the alignment options and return the encoder.
    pub fn with_align_options(
        mut self,
        options: AlignOptions,
    ) -> Self {
        self.options = options;
        self
    }

    /// The vocabulary.
    pub fn vocab(&self) -> &Arc<CharVocab<T>> {
        &self.vocab
    }

    /// The normalizer.
    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// The alignment options.
    pub fn align_options(&self) -> AlignOptions {
        self.options
    }

    /// The padding value.
    pub fn padding_value(&self) -> T {
        self.vocab.padding_value()
    }

    /// Normalize one raw record.
    pub fn normalize(
        &self,
        raw: &str,
    ) -> NormalizedText {
        self.normalizer.normalize(raw)
    }

    /// Encode normalized text, appending to a target buffer.
    ///
    /// ## Arguments
    /// * `text` - The normalized record.
    /// * `indices` - The target buffer to append to.
    ///
    /// ## Returns
    /// [`CharSeqError::UnknownCharacter`] if a char has no index;
    /// `indices` may then hold a partial encoding.
    pub fn encode_append(
        &self,
        text: &NormalizedText,
        indices: &mut Vec<T>,
    ) -> CSResult<()> {
        for (position, ch) in text.as_str().chars().enumerate() {
            let index = self
                .vocab
                .encode(ch)
                .ok_or(CharSeqError::UnknownCharacter { ch, position })?;
            indices.push(index);
        }
        Ok(())
    }

    /// Encode normalized text into an unaligned index sequence.
    pub fn encode(
        &self,
        text: &NormalizedText,
    ) -> CSResult<Vec<T>> {
        let mut indices = Vec::with_capacity(text.as_str().len());
        self.encode_append(text, &mut indices)?;
        Ok(indices)
    }

    /// Align an index sequence to `width` with this encoder's padding and options.
    pub fn align(
        &self,
        sequence: &[T],
        width: usize,
    ) -> Vec<T> {
        align(sequence, width, self.padding_value(), self.options)
    }

    /// Normalize, encode, and align one raw record.
    pub fn encode_text(
        &self,
        raw: &str,
        width: usize,
    ) -> CSResult<Vec<T>> {
        let indices = self.encode(&self.normalize(raw))?;
        Ok(self.align(&indices, width))
    }

    /// Encode a batch of raw records into a ``N x width`` matrix.
    ///
    /// Records are encoded independently; row `i` is record `i`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, texts)))]
    pub fn encode_batch<S>(
        &self,
        texts: &[S],
        width: usize,
    ) -> CSResult<SequenceMatrix<T>>
    where
        S: AsRef<str> + Sync,
    {
        log::info!("encoding batch: {} records, width {width}", texts.len());

        self.encode_rows(texts, width)
    }

    #[cfg(feature = "rayon")]
    fn encode_rows<S>(
        &self,
        texts: &[S],
        width: usize,
    ) -> CSResult<SequenceMatrix<T>>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        let rows = texts
            .par_iter()
            .map(|text| self.encode_text(text.as_ref(), width))
            .collect::<CSResult<Vec<_>>>()?;

        let mut matrix = SequenceMatrix::with_capacity(rows.len(), width);
        for row in rows {
            matrix.push_row_with(|data| {
                data.extend_from_slice(&row);
                Ok::<(), CharSeqError>(())
            })?;
        }
        Ok(matrix)
    }

    #[cfg(not(feature = "rayon"))]
    fn encode_rows<S>(
        &self,
        texts: &[S],
        width: usize,
    ) -> CSResult<SequenceMatrix<T>>
    where
        S: AsRef<str> + Sync,
    {
        use crate::encoders::alignment::align_append;

        let mut matrix = SequenceMatrix::with_capacity(texts.len(), width);
        let mut scratch = Vec::new();
        for text in texts {
            scratch.clear();
            self.encode_append(&self.normalize(text.as_ref()), &mut scratch)?;
            matrix.push_row_with(|data| {
                align_append(&scratch, width, self.padding_value(), self.options, data);
                Ok::<(), CharSeqError>(())
            })?;
        }
        Ok(matrix)
    }

    /// Encode a batch of records with optional parallel labels.
    ///
    /// ## Returns
    /// The [`EncodedBatch`]; or [`CharSeqError::LengthMismatch`]
    /// if the label count differs from the record count.
    pub fn encode_xy<S, L>(
        &self,
        texts: &[S],
        labels: Option<&[L]>,
        width: usize,
    ) -> CSResult<EncodedBatch<T>>
    where
        S: AsRef<str> + Sync,
        L: Truthy,
    {
        log::info!("generating x and y");

        if let Some(labels) = labels {
            crate::labels::check_aligned(texts.len(), labels.len())?;
        }

        let x = self.encode_batch(texts, width)?;
        let y = labels.map(crate::labels::build_labels);
        EncodedBatch::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        labels::LabelValue,
        types::{check_is_send, check_is_sync},
        vocab::LegalChars,
    };

    fn reduced_encoder() -> SequenceEncoder<u8> {
        let vocab =
            CharVocab::from_legal_chars(LegalChars::from_chars("hello, world!".chars())).unwrap();
        SequenceEncoder::from_vocab(Arc::new(vocab))
    }

    #[test]
    fn test_encoder_is_send_sync() {
        let encoder = SequenceEncoder::<u32>::new().unwrap();
        check_is_send(&encoder);
        check_is_sync(&encoder);
    }

    #[test]
    fn test_truncate_front() {
        let encoder = reduced_encoder();
        assert_eq!(encoder.padding_value(), 12);

        let text = encoder.normalize("Hello, World!");
        assert_eq!(text.as_str(), "<hello, world!>");

        let indices = encoder.encode(&text).unwrap();
        assert_eq!(indices, vec![3, 7, 6, 8, 8, 9, 2, 0, 11, 9, 10, 8, 5, 1, 4]);

        assert_eq!(
            encoder.encode_text("Hello, World!", 10).unwrap(),
            vec![9, 2, 0, 11, 9, 10, 8, 5, 1, 4]
        );
    }

    #[test]
    fn test_pad_front() {
        let encoder = reduced_encoder();
        assert_eq!(
            encoder.encode_text("Hi", 10).unwrap(),
            vec![12, 12, 12, 12, 12, 12, 12, 3, 7, 4]
        );
    }

    #[test]
    fn test_printable_encode_text() {
        let encoder = SequenceEncoder::<u16>::new().unwrap();
        let vocab = encoder.vocab().clone();

        let expected = "<hi>"
            .chars()
            .map(|c| vocab.encode(c).unwrap())
            .collect::<Vec<_>>();
        let aligned = encoder.encode_text("Hi", 6).unwrap();
        assert_eq!(&aligned[..2], &[98, 98]);
        assert_eq!(&aligned[2..], &expected[..]);

        let aligned = encoder.encode_text("Hello, World!", 10).unwrap();
        assert_eq!(vocab.decode_sequence(&aligned), "o, world!>");
    }

    #[test]
    fn test_encode_batch_shape() {
        let encoder = SequenceEncoder::<u16>::new().unwrap();
        let texts = ["a", "some longer record text", "", "\u{4f60}"];

        let matrix = encoder.encode_batch(&texts, 8).unwrap();
        assert_eq!(matrix.shape(), (4, 8));

        for (row, text) in matrix.iter_rows().zip(texts) {
            assert_eq!(row, &encoder.encode_text(text, 8).unwrap()[..]);
        }

        let empty: [&str; 0] = [];
        let matrix = encoder.encode_batch(&empty, 8).unwrap();
        assert_eq!(matrix.shape(), (0, 8));
    }

    #[test]
    fn test_encode_batch_owned_strings() {
        let encoder = SequenceEncoder::<u32>::new().unwrap();
        let texts = vec!["Hi".to_string(), "There".to_string()];
        let matrix = encoder.encode_batch(&texts, 3).unwrap();
        assert_eq!(
            encoder.vocab().decode_sequence(matrix.row(1).unwrap()),
            "re>"
        );
    }

    #[test]
    fn test_encode_xy() {
        let encoder = SequenceEncoder::<u16>::new().unwrap();
        let labels = [LabelValue::from(true), LabelValue::from(0)];

        let batch = encoder.encode_xy(&["a", "b"], Some(&labels[..]), 5).unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.x().shape(), (2, 5));
        assert_eq!(batch.y(), Some(&[true, false][..]));

        let batch = encoder.encode_xy::<_, bool>(&["a"], None, 5).unwrap();
        assert_eq!(batch.y(), None);
    }

    #[test]
    fn test_encode_xy_length_mismatch() {
        let encoder = SequenceEncoder::<u16>::new().unwrap();
        assert_eq!(
            encoder
                .encode_xy(&["a", "b"], Some(&[true][..]), 5)
                .unwrap_err(),
            CharSeqError::LengthMismatch {
                texts: 2,
                labels: 1
            }
        );
    }

    #[test]
    fn test_unknown_character_is_loud() {
        // A vocabulary that lacks chars the normalizer can emit.
        let legal = LegalChars::from_chars("ab".chars());
        let vocab = Arc::new(CharVocab::<u8>::from_legal_chars(legal).unwrap());
        let encoder = SequenceEncoder::from_vocab(vocab);

        let printable = TextNormalizer::default().normalize("a c");
        assert_eq!(
            encoder.encode(&printable).unwrap_err(),
            CharSeqError::UnknownCharacter {
                ch: 'c',
                position: 3
            }
        );
    }
}
