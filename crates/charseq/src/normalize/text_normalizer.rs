//! # Text Normalizer

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    normalize::NormalizedText,
    vocab::{LegalChars, legal_chars::is_sentinel},
};

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static whitespace pattern"));

/// Collapse whitespace runs to a single space, and trim the ends.
fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Record cleaner.
///
/// Normalization steps, in order:
/// 1. lower-case every char;
/// 2. replace every char outside the legal set with a space;
/// 3. collapse whitespace runs to one space, and trim;
/// 4. replace surviving `<` / `>` with a space, then collapse and trim again;
/// 5. wrap the body in `<` .. `>`.
///
/// There is no failure mode; an empty or all-illegal record becomes `<>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextNormalizer {
    legal: LegalChars,
}

impl TextNormalizer {
    /// Create a normalizer over the given alphabet.
    pub fn new(legal: LegalChars) -> Self {
        Self { legal }
    }

    /// The alphabet this normalizer restricts text to.
    pub fn legal_chars(&self) -> &LegalChars {
        &self.legal
    }

    /// Normalize one raw record.
    ///
    /// ## Arguments
    /// * `raw` - The raw record text.
    ///
    /// ## Returns
    /// The sentinel-wrapped [`NormalizedText`].
    pub fn normalize(
        &self,
        raw: &str,
    ) -> NormalizedText {
        log::debug!("raw text: {raw:?}");

        let cleaned: String = raw
            .chars()
            .flat_map(char::to_lowercase)
            .map(|c| if self.legal.contains(c) { c } else { ' ' })
            .collect();

        let mut body = collapse_whitespace(&cleaned);

        if body.contains(is_sentinel) {
            body = collapse_whitespace(&body.replace(is_sentinel, " "));
        }

        let text = NormalizedText::from_body(&body);
        log::debug!("cleaned text: {:?}", text.as_str());
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(raw: &str) -> String {
        TextNormalizer::default().normalize(raw).into_string()
    }

    #[test]
    fn test_basic() {
        assert_eq!(normalize("Hello, World!"), "<hello, world!>");
        assert_eq!(normalize("123 + 456 = 789"), "<123 + 456 = 789>");
        assert_eq!(normalize("$$$!!!...---"), "<$$$!!!...--->");
    }

    #[test]
    fn test_empty_and_illegal() {
        assert_eq!(normalize(""), "<>");
        assert_eq!(normalize(" "), "<>");
        assert_eq!(normalize("\n\r\n"), "<>");
        assert_eq!(normalize("\u{4f60}\u{597d}"), "<>");
        assert_eq!(normalize("emoji: \u{1f600}\u{1f680}"), "<emoji:>");
    }

    #[test]
    fn test_whitespace() {
        assert_eq!(normalize("  multiple   spaces  "), "<multiple spaces>");
        assert_eq!(normalize("line1\nline2\r\nline3"), "<line1 line2 line3>");
        assert_eq!(normalize("\t\ttabs\tand\tspaces "), "<tabs and spaces>");
        assert_eq!(normalize("a\x0bb\x0cc"), "<a b c>");
        assert_eq!(normalize("hello\u{00a0}world\u{2003}wide"), "<hello world wide>");
    }

    #[test]
    fn test_foreign_letters() {
        assert_eq!(normalize("caf\u{00e9} na\u{00ef}ve"), "<caf na ve>");
        assert_eq!(normalize("\u{00c0}B"), "<b>");
    }

    #[test]
    fn test_literal_sentinels() {
        assert_eq!(normalize("a < b > c"), "<a b c>");
        assert_eq!(normalize("<tag>"), "<tag>");
        assert_eq!(normalize("<>"), "<>");
        assert_eq!(normalize(">>x<<"), "<x>");
        assert_eq!(normalize("x <b>bold</b> y"), "<x b bold /b y>");
    }

    #[test]
    fn test_reduced_alphabet() {
        let normalizer = TextNormalizer::new(LegalChars::from_chars("hello, world!".chars()));
        assert_eq!(normalizer.normalize("Hi").as_str(), "<h>");
        assert_eq!(
            normalizer.normalize("Hello, World!").as_str(),
            "<hello, world!>"
        );
    }

    #[test]
    fn test_single_application() {
        let normalizer = TextNormalizer::default();
        let once = normalizer.normalize("Some <b>Text</b>");
        let twice = normalizer.normalize(once.as_str());
        assert_eq!(once.as_str(), "<some b text /b>");
        assert_eq!(twice, once);
    }
}
