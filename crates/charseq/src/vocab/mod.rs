//! # Vocabulary
//!
//! This module provides the legal character set and the char/index bijection.
//!
//! ## Legal Characters
//!
//! The alphabet is fixed, never derived from input data:
//! * [`LegalChars`].
//!
//! ## Char Vocabulary
//!
//! [`CharVocab`] assigns contiguous indices to the legal characters
//! in code point order; the padding value is one past the largest index.
//!
//! A process-wide instance is available through [`shared_vocab`];
//! it is built once, on first access, and never invalidated.
pub mod char_vocab;
pub mod legal_chars;

use std::sync::{Arc, LazyLock};

#[doc(inline)]
pub use char_vocab::CharVocab;
#[doc(inline)]
pub use legal_chars::{END_SENTINEL, LegalChars, START_SENTINEL};

static SHARED_VOCAB: LazyLock<Arc<CharVocab<u32>>> = LazyLock::new(|| {
    log::info!("building shared char vocab");
    Arc::new(CharVocab::build().expect("u32 holds the printable vocab"))
});

/// Get the process-wide printable vocabulary.
///
/// Built under an init-once guard on first access;
/// every call returns the same instance.
pub fn shared_vocab() -> Arc<CharVocab<u32>> {
    SHARED_VOCAB.clone()
}
