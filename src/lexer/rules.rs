//! The ordered pattern table.
//!
//! At each cursor position the scanner tries [`Rule::TABLE`] top to bottom
//! and takes the first rule that matches *some* prefix. This is not maximal
//! munch: token boundaries follow from the order of the rows and from each
//! matcher being exact about what it accepts. In particular the
//! multi-character operator row precedes the single-character one, which is
//! how `==` wins over `=`, and the float row precedes the integer row, which
//! is how `3.` becomes one float rather than `3` followed by `.`.

use super::token::{TokenKind, TriviaKind};

/// Operators of two or three characters, longest first so that `<<=` is
/// preferred over `<<`.
const MULTI_CHAR_OPERATORS: [&str; 21] = [
    "<<=", ">>=", "++", "--", "==", "!=", ">=", "<=", "->", "<<", ">>", "&&", "||", "+=", "-=",
    "*=", "/=", "%=", "&=", "|=", "^=",
];

const SINGLE_CHAR_OPERATORS: &[u8] = b"+-*/%&|^~!<>=?:";

/// What a matched rule contributes to the output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// Consumed without producing a token.
    Trivia(TriviaKind),
    /// Produces a token of this kind. Identifiers are reported as
    /// [`TokenKind::Id`]; keyword reclassification is up to the scanner.
    Token(TokenKind),
    /// The catch-all row: the matched character is a lexical error.
    Invalid,
}

/// One row of the pattern table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Whitespace,
    Newline,
    BlockComment,
    LineComment,
    Preprocessor,
    StringLiteral,
    CharLiteral,
    FloatLiteral,
    IntegerLiteral,
    Identifier,
    MultiCharOperator,
    SingleCharOperator,
    Semicolon,
    Comma,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Dot,
    Invalid,
}

impl Rule {
    /// The pattern table in declaration order. The order is significant.
    pub const TABLE: [Rule; 22] = [
        Rule::Whitespace,
        Rule::Newline,
        Rule::BlockComment,
        Rule::LineComment,
        Rule::Preprocessor,
        Rule::StringLiteral,
        Rule::CharLiteral,
        Rule::FloatLiteral,
        Rule::IntegerLiteral,
        Rule::Identifier,
        Rule::MultiCharOperator,
        Rule::SingleCharOperator,
        Rule::Semicolon,
        Rule::Comma,
        Rule::LParen,
        Rule::RParen,
        Rule::LBrace,
        Rule::RBrace,
        Rule::LBracket,
        Rule::RBracket,
        Rule::Dot,
        Rule::Invalid,
    ];

    pub fn output(self) -> Output {
        match self {
            Rule::Whitespace => Output::Trivia(TriviaKind::Whitespace),
            Rule::Newline => Output::Trivia(TriviaKind::Newline),
            Rule::BlockComment => Output::Trivia(TriviaKind::BlockComment),
            Rule::LineComment => Output::Trivia(TriviaKind::LineComment),
            Rule::Preprocessor => Output::Token(TokenKind::Preprocessor),
            Rule::StringLiteral => Output::Token(TokenKind::String),
            Rule::CharLiteral => Output::Token(TokenKind::Char),
            Rule::FloatLiteral => Output::Token(TokenKind::Float),
            Rule::IntegerLiteral => Output::Token(TokenKind::Integer),
            Rule::Identifier => Output::Token(TokenKind::Id),
            Rule::MultiCharOperator | Rule::SingleCharOperator => {
                Output::Token(TokenKind::Operator)
            }
            Rule::Semicolon => Output::Token(TokenKind::Semicolon),
            Rule::Comma => Output::Token(TokenKind::Comma),
            Rule::LParen => Output::Token(TokenKind::LParen),
            Rule::RParen => Output::Token(TokenKind::RParen),
            Rule::LBrace => Output::Token(TokenKind::LBrace),
            Rule::RBrace => Output::Token(TokenKind::RBrace),
            Rule::LBracket => Output::Token(TokenKind::LBracket),
            Rule::RBracket => Output::Token(TokenKind::RBracket),
            Rule::Dot => Output::Token(TokenKind::Dot),
            Rule::Invalid => Output::Invalid,
        }
    }

    /// Length in bytes of the prefix of `rest` this rule accepts, or `None`.
    ///
    /// A returned length is never zero and always ends on a character
    /// boundary.
    pub fn match_len(self, rest: &str) -> Option<usize> {
        let bytes = rest.as_bytes();
        let len = match self {
            Rule::Whitespace => count_while(bytes, 0, is_horizontal_space),
            Rule::Newline => usize::from(bytes.first() == Some(&b'\n')),
            Rule::BlockComment => block_comment(bytes)?,
            Rule::LineComment => {
                if bytes.starts_with(b"//") {
                    to_line_end(bytes, 2)
                } else {
                    0
                }
            }
            Rule::Preprocessor => preprocessor(bytes)?,
            Rule::StringLiteral => quoted(rest, '"')?,
            Rule::CharLiteral => char_literal(rest)?,
            Rule::FloatLiteral => float_literal(bytes)?,
            Rule::IntegerLiteral => integer_literal(bytes),
            Rule::Identifier => identifier(bytes, 0),
            Rule::MultiCharOperator => MULTI_CHAR_OPERATORS
                .iter()
                .find(|op| rest.starts_with(*op))
                .map_or(0, |op| op.len()),
            Rule::SingleCharOperator => {
                usize::from(bytes.first().is_some_and(|b| SINGLE_CHAR_OPERATORS.contains(b)))
            }
            Rule::Semicolon => single(bytes, b';'),
            Rule::Comma => single(bytes, b','),
            Rule::LParen => single(bytes, b'('),
            Rule::RParen => single(bytes, b')'),
            Rule::LBrace => single(bytes, b'{'),
            Rule::RBrace => single(bytes, b'}'),
            Rule::LBracket => single(bytes, b'['),
            Rule::RBracket => single(bytes, b']'),
            Rule::Dot => single(bytes, b'.'),
            Rule::Invalid => rest.chars().next().map_or(0, char::len_utf8),
        };

        (len > 0).then_some(len)
    }
}

/// Space, tab, carriage return, vertical tab and form feed.
fn is_horizontal_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | 0x0b | 0x0c)
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Number of consecutive bytes from `start` satisfying `pred`.
fn count_while(bytes: &[u8], start: usize, pred: impl Fn(u8) -> bool) -> usize {
    bytes
        .get(start..)
        .map_or(0, |tail| tail.iter().take_while(|&&b| pred(b)).count())
}

fn single(bytes: &[u8], expected: u8) -> usize {
    usize::from(bytes.first() == Some(&expected))
}

/// Offset of the next newline at or after `start`, or the end of input.
fn to_line_end(bytes: &[u8], start: usize) -> usize {
    start + count_while(bytes, start, |b| b != b'\n')
}

/// `/*` up to and including the first `*/`, spanning newlines.
fn block_comment(bytes: &[u8]) -> Option<usize> {
    if !bytes.starts_with(b"/*") {
        return None;
    }
    bytes[2..]
        .windows(2)
        .position(|w| w == b"*/")
        .map(|offset| offset + 4)
}

/// `#`, horizontal whitespace, a directive name, then the rest of the line.
fn preprocessor(bytes: &[u8]) -> Option<usize> {
    if bytes.first() != Some(&b'#') {
        return None;
    }
    let name = 1 + count_while(bytes, 1, is_horizontal_space);
    if identifier(bytes, name) == 0 {
        return None;
    }
    Some(to_line_end(bytes, name))
}

fn identifier(bytes: &[u8], start: usize) -> usize {
    match bytes.get(start) {
        Some(&b) if is_ident_start(b) => 1 + count_while(bytes, start + 1, is_ident_continue),
        _ => 0,
    }
}

/// Body of a quoted literal: an escape is a backslash followed by any
/// character other than a newline; anything else except the delimiter and
/// a backslash stands for itself.
///
/// Returns the byte length of one body element starting at `rest`, or `None`
/// if the next element cannot be part of the literal.
fn quoted_element(rest: &str, delimiter: char) -> Option<usize> {
    let mut chars = rest.chars();
    match chars.next()? {
        '\\' => match chars.next()? {
            '\n' => None,
            escaped => Some(1 + escaped.len_utf8()),
        },
        ch if ch == delimiter => None,
        ch => Some(ch.len_utf8()),
    }
}

/// A delimited literal with any number of body elements.
fn quoted(rest: &str, delimiter: char) -> Option<usize> {
    if !rest.starts_with(delimiter) {
        return None;
    }
    let mut len = 1;
    while let Some(step) = quoted_element(&rest[len..], delimiter) {
        len += step;
    }
    rest[len..].starts_with(delimiter).then_some(len + 1)
}

/// A single-quoted literal with exactly one body element.
fn char_literal(rest: &str) -> Option<usize> {
    if !rest.starts_with('\'') {
        return None;
    }
    let len = 1 + quoted_element(&rest[1..], '\'')?;
    rest[len..].starts_with('\'').then_some(len + 1)
}

/// `digits . digits?` or `. digits`, an optional exponent, and an optional
/// `f`/`F`/`l`/`L` suffix. An exponent marker without digits is left for
/// the next token.
fn float_literal(bytes: &[u8]) -> Option<usize> {
    let int_digits = count_while(bytes, 0, |b| b.is_ascii_digit());
    let mut len = if int_digits > 0 {
        if bytes.get(int_digits) != Some(&b'.') {
            return None;
        }
        let frac = int_digits + 1;
        frac + count_while(bytes, frac, |b| b.is_ascii_digit())
    } else {
        if bytes.first() != Some(&b'.') {
            return None;
        }
        let frac_digits = count_while(bytes, 1, |b| b.is_ascii_digit());
        if frac_digits == 0 {
            return None;
        }
        1 + frac_digits
    };

    if matches!(bytes.get(len), Some(b'e' | b'E')) {
        let mut exp = len + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_while(bytes, exp, |b| b.is_ascii_digit());
        if exp_digits > 0 {
            len = exp + exp_digits;
        }
    }

    if matches!(bytes.get(len), Some(b'f' | b'F' | b'l' | b'L')) {
        len += 1;
    }
    Some(len)
}

/// Digits followed by any run of `u`/`U`/`l`/`L` suffix letters.
fn integer_literal(bytes: &[u8]) -> usize {
    let digits = count_while(bytes, 0, |b| b.is_ascii_digit());
    if digits == 0 {
        return 0;
    }
    digits + count_while(bytes, digits, |b| matches!(b, b'u' | b'U' | b'l' | b'L'))
}

/// Facts about the remaining input carried from one [`select`] to the next.
///
/// Only valid while every `rest` passed to [`select`] is a suffix of the
/// previous one, which holds for a forward-only scanner.
#[derive(Debug, Clone, Default)]
pub struct Lookahead {
    /// A search for `*/` has already failed. No later offset can find one.
    unclosed_comment: bool,
}

impl Lookahead {
    fn block_comment(&mut self, bytes: &[u8]) -> Option<usize> {
        if self.unclosed_comment || !bytes.starts_with(b"/*") {
            return None;
        }
        let len = block_comment(bytes);
        self.unclosed_comment = len.is_none();
        len
    }
}

/// First rule in table order that matches at the start of `rest`, with the
/// length of its match. `None` only for empty input.
pub fn select(rest: &str, lookahead: &mut Lookahead) -> Option<(Rule, usize)> {
    Rule::TABLE.iter().find_map(|&rule| {
        let len = match rule {
            Rule::BlockComment => lookahead.block_comment(rest.as_bytes()),
            _ => rule.match_len(rest),
        };
        len.map(|len| (rule, len))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first(rest: &str) -> (Rule, &str) {
        let (rule, len) =
            select(rest, &mut Lookahead::default()).expect("non-empty input always matches");
        (rule, &rest[..len])
    }

    #[test]
    fn test_table_ends_with_catch_all() {
        assert_eq!(Rule::TABLE.last(), Some(&Rule::Invalid));
        assert_eq!(Rule::TABLE[0], Rule::Whitespace);
        assert_eq!(select("", &mut Lookahead::default()), None);
    }

    #[test]
    fn test_whitespace_excludes_newline() {
        assert_eq!(first(" \t\r\nx"), (Rule::Whitespace, " \t\r"));
        assert_eq!(first("\n\n"), (Rule::Newline, "\n"));
    }

    #[test]
    fn test_block_comment_is_shortest() {
        assert_eq!(
            first("/* a */ b /* c */"),
            (Rule::BlockComment, "/* a */")
        );
        assert_eq!(first("/*\n*/"), (Rule::BlockComment, "/*\n*/"));
        assert_eq!(first("/**/"), (Rule::BlockComment, "/**/"));
        assert_eq!(first("/*/ x */"), (Rule::BlockComment, "/*/ x */"));
    }

    #[test]
    fn test_unterminated_block_comment_falls_through() {
        assert_eq!(first("/* open"), (Rule::SingleCharOperator, "/"));
    }

    #[test]
    fn test_line_comment_stops_before_newline() {
        assert_eq!(first("// hi\nx"), (Rule::LineComment, "// hi"));
        assert_eq!(first("//"), (Rule::LineComment, "//"));
    }

    #[test]
    fn test_preprocessor() {
        assert_eq!(
            first("#include <stdio.h>\nint"),
            (Rule::Preprocessor, "#include <stdio.h>")
        );
        assert_eq!(first("#  define X 1"), (Rule::Preprocessor, "#  define X 1"));
        assert_eq!(first("#\tif"), (Rule::Preprocessor, "#\tif"));
        assert_eq!(first("# 1 \"file.c\""), (Rule::Invalid, "#"));
        assert_eq!(first("#\ndefine"), (Rule::Invalid, "#"));
    }

    #[test]
    fn test_string_literal() {
        assert_eq!(first(r#""a\"b" x"#), (Rule::StringLiteral, r#""a\"b""#));
        assert_eq!(first(r#""""#), (Rule::StringLiteral, r#""""#));
        assert_eq!(first(r#""\\" x"#), (Rule::StringLiteral, r#""\\""#));
        assert_eq!(first("\"é\""), (Rule::StringLiteral, "\"é\""));
    }

    #[test]
    fn test_unterminated_string_is_invalid() {
        assert_eq!(first("\"abc"), (Rule::Invalid, "\""));
        assert_eq!(first("\"abc\\"), (Rule::Invalid, "\""));
        assert_eq!(first("\"a\\\nb\""), (Rule::Invalid, "\""));
    }

    #[test]
    fn test_char_literal() {
        assert_eq!(first("'a'"), (Rule::CharLiteral, "'a'"));
        assert_eq!(first(r"'\n'"), (Rule::CharLiteral, r"'\n'"));
        assert_eq!(first(r"'\''"), (Rule::CharLiteral, r"'\''"));
        assert_eq!(first("'ab'"), (Rule::Invalid, "'"));
        assert_eq!(first("''"), (Rule::Invalid, "'"));
    }

    #[test]
    fn test_float_forms() {
        assert_eq!(first("3.14f;"), (Rule::FloatLiteral, "3.14f"));
        assert_eq!(first("3."), (Rule::FloatLiteral, "3."));
        assert_eq!(first(".5"), (Rule::FloatLiteral, ".5"));
        assert_eq!(first("1.5e-3L"), (Rule::FloatLiteral, "1.5e-3L"));
        assert_eq!(first("2.E10"), (Rule::FloatLiteral, "2.E10"));
    }

    #[test]
    fn test_float_exponent_without_digits_is_not_consumed() {
        assert_eq!(first("1.e"), (Rule::FloatLiteral, "1."));
        assert_eq!(first("1.5e+x"), (Rule::FloatLiteral, "1.5"));
        assert_eq!(first("1.ef"), (Rule::FloatLiteral, "1."));
    }

    #[test]
    fn test_integer_forms() {
        assert_eq!(first("42UL"), (Rule::IntegerLiteral, "42UL"));
        assert_eq!(first("7ulLu;"), (Rule::IntegerLiteral, "7ulLu"));
        assert_eq!(first("1e10"), (Rule::IntegerLiteral, "1"));
        assert_eq!(first("0x1F"), (Rule::IntegerLiteral, "0"));
    }

    #[test]
    fn test_identifier() {
        assert_eq!(first("_foo1 bar"), (Rule::Identifier, "_foo1"));
        assert_eq!(first("Lx"), (Rule::Identifier, "Lx"));
    }

    #[test]
    fn test_operator_prefixes() {
        assert_eq!(first("=="), (Rule::MultiCharOperator, "=="));
        assert_eq!(first("="), (Rule::SingleCharOperator, "="));
        assert_eq!(first("<<="), (Rule::MultiCharOperator, "<<="));
        assert_eq!(first("<<"), (Rule::MultiCharOperator, "<<"));
        assert_eq!(first("<"), (Rule::SingleCharOperator, "<"));
        assert_eq!(first("->x"), (Rule::MultiCharOperator, "->"));
        assert_eq!(first("+++"), (Rule::MultiCharOperator, "++"));
    }

    #[test]
    fn test_dot_and_punctuation() {
        assert_eq!(first(".x"), (Rule::Dot, "."));
        assert_eq!(first("..5"), (Rule::Dot, "."));
        assert_eq!(first("]"), (Rule::RBracket, "]"));
    }

    #[test]
    fn test_catch_all_takes_one_character() {
        assert_eq!(first("@x"), (Rule::Invalid, "@"));
        assert_eq!(first("λx"), (Rule::Invalid, "λ"));
        assert_eq!(first("$"), (Rule::Invalid, "$"));
    }

    #[test]
    fn test_outputs() {
        assert_eq!(Rule::Identifier.output(), Output::Token(TokenKind::Id));
        assert_eq!(
            Rule::LineComment.output(),
            Output::Trivia(TriviaKind::LineComment)
        );
        assert_eq!(Rule::Invalid.output(), Output::Invalid);
    }

    #[test]
    fn test_failed_comment_search_is_remembered() {
        let source = "/* a /* b";
        let mut lookahead = Lookahead::default();
        assert_eq!(
            select(source, &mut lookahead),
            Some((Rule::SingleCharOperator, 1))
        );
        assert!(lookahead.unclosed_comment);

        // A later `/*` is not searched again.
        assert_eq!(
            select(&source[5..], &mut lookahead),
            Some((Rule::SingleCharOperator, 1))
        );
        assert!(lookahead.unclosed_comment);
    }

    #[test]
    fn test_closed_comment_leaves_lookahead_clear() {
        let mut lookahead = Lookahead::default();
        assert_eq!(
            select("/* a */ /* b */", &mut lookahead),
            Some((Rule::BlockComment, 7))
        );
        assert!(!lookahead.unclosed_comment);
    }
}
