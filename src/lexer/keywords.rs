//! Reserved words of C.
//!
//! Any identifier whose spelling is in this set is reclassified from
//! [`TokenKind::Id`](super::TokenKind::Id) to
//! [`TokenKind::Keyword`](super::TokenKind::Keyword).

use rustc_hash::FxHashSet;
use std::sync::LazyLock;

/// C89 keywords plus the C99 additions `inline`, `restrict`, `_Bool`,
/// `_Complex` and `_Imaginary`.
const RESERVED_WORDS: [&str; 37] = [
    "_Bool",
    "_Complex",
    "_Imaginary",
    "auto",
    "break",
    "case",
    "char",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extern",
    "float",
    "for",
    "goto",
    "if",
    "inline",
    "int",
    "long",
    "register",
    "restrict",
    "return",
    "short",
    "signed",
    "sizeof",
    "static",
    "struct",
    "switch",
    "typedef",
    "union",
    "unsigned",
    "void",
    "volatile",
    "while",
];

static RESERVED: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| RESERVED_WORDS.iter().copied().collect());

/// Returns `true` if `word` is a C keyword. Matching is case-sensitive.
pub fn is_reserved(word: &str) -> bool {
    RESERVED.contains(word)
}

/// All reserved spellings in byte order.
pub fn reserved_words() -> impl Iterator<Item = &'static str> {
    RESERVED_WORDS.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_recognized() {
        for word in ["int", "while", "sizeof", "_Bool", "restrict", "typedef"] {
            assert!(is_reserved(word), "{word} should be reserved");
        }
    }

    #[test]
    fn test_non_keywords() {
        for word in ["Int", "main", "NULL", "bool", "printf", "_bool", ""] {
            assert!(!is_reserved(word), "{word} should not be reserved");
        }
    }

    #[test]
    fn test_table_is_sorted_and_unique() {
        let words: Vec<_> = reserved_words().collect();
        assert!(words.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(words.len(), RESERVED.len());
    }
}
