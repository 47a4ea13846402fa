//! Accent- and case-insensitive text folding for keyword matching.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Lower-case, decompose (NFD) and drop combining marks.
///
/// Total: any input, including the empty string, produces a string.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "")]
    #[case("Petición", "peticion")]
    #[case("NO CONFIAR EN ÉL", "no confiar en el")]
    #[case("Pingüino año", "pinguino ano")]
    #[case("¿Qué pasó?", "¿que paso?")]
    #[case("plain ascii", "plain ascii")]
    fn folds_case_and_accents(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize(input), expected);
    }

    #[test]
    fn precomposed_and_decomposed_forms_agree() {
        assert_eq!(normalize("dicotom\u{00ED}a"), normalize("dicotomi\u{0301}a"));
    }
}
