//! Diacritic removal: canonical decomposition, drop combining marks,
//! recompose. `ç` becomes `c`, `ã` becomes `a`.

use std::borrow::Cow;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Strip diacritics from `word`.
///
/// Returns the input unchanged (borrowed) when there is nothing to strip, so
/// callers can keep the word they already own.
pub fn strip_diacritics(word: &str) -> Cow<'_, str> {
    if word.is_ascii() {
        return Cow::Borrowed(word);
    }

    let stripped: String = word.nfd().filter(|c| !is_combining_mark(*c)).nfc().collect();

    if super::debug_enabled() {
        eprintln!("[normalize] input=\"{}\" output=\"{}\"", word, stripped);
    }

    if stripped == word { Cow::Borrowed(word) } else { Cow::Owned(stripped) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_portuguese_accents() {
        assert_eq!(strip_diacritics("coraçã"), "coraca");
        assert_eq!(strip_diacritics("polêm"), "polem");
        assert_eq!(strip_diacritics("lençol"), "lencol");
        assert_eq!(strip_diacritics("vilã"), "vila");
    }

    #[test]
    fn ascii_input_is_borrowed() {
        assert!(matches!(strip_diacritics("cant"), Cow::Borrowed("cant")));
    }

    #[test]
    fn non_ascii_without_marks_is_borrowed() {
        assert!(matches!(strip_diacritics("straße"), Cow::Borrowed(_)));
    }

    #[test]
    fn decomposed_input_is_handled() {
        assert_eq!(strip_diacritics("cafe\u{0301}"), "cafe");
        assert_eq!(strip_diacritics("cora\u{00e7}\u{00e3}o"), "coracao");
    }
}
