// Scanner behaviour over small inputs

use cscan::lexer::keywords::reserved_words;
use cscan::lexer::{tokenize, LexError, Scanner, SourceLocation, Token, TokenKind};
use pretty_assertions::assert_eq;

fn kinds_and_texts(source: &str) -> Vec<(TokenKind, String)> {
    tokenize(source)
        .expect("Lexing failed")
        .into_iter()
        .map(|t| (t.kind, t.text))
        .collect()
}

fn single(source: &str) -> Token {
    let mut tokens = tokenize(source).expect("Lexing failed");
    assert_eq!(tokens.len(), 1, "expected one token for {:?}", source);
    tokens.remove(0)
}

#[test]
fn test_declaration_positions() {
    let tokens = tokenize("int x;\n").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Keyword, "int", SourceLocation::new(1, 1)),
            Token::new(TokenKind::Id, "x", SourceLocation::new(1, 5)),
            Token::new(TokenKind::Semicolon, ";", SourceLocation::new(1, 6)),
        ]
    );
}

#[test]
fn test_equality_beats_assignment() {
    let eq = single("==");
    assert_eq!((eq.kind, eq.text.as_str()), (TokenKind::Operator, "=="));
    let assign = single("=");
    assert_eq!((assign.kind, assign.text.as_str()), (TokenKind::Operator, "="));
}

#[test]
fn test_prefix_colliding_operators() {
    let cases = [
        ("a<<=b", vec!["a", "<<=", "b"]),
        ("a<<b", vec!["a", "<<", "b"]),
        ("a<b", vec!["a", "<", "b"]),
        ("a>>=b", vec!["a", ">>=", "b"]),
        ("a<=b", vec!["a", "<=", "b"]),
        ("a---b", vec!["a", "--", "-", "b"]),
        ("p->x", vec!["p", "->", "x"]),
        ("a&&&b", vec!["a", "&&", "&", "b"]),
        ("x!==y", vec!["x", "!=", "=", "y"]),
        ("a|=b^=c", vec!["a", "|=", "b", "^=", "c"]),
    ];
    for (source, expected) in cases {
        let texts: Vec<String> = tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| t.text)
            .collect();
        assert_eq!(texts, expected, "splitting {:?}", source);
    }
}

#[test]
fn test_single_character_operators() {
    for op in ["+", "-", "*", "/", "%", "&", "|", "^", "~", "!", "<", ">", "=", "?", ":"] {
        let token = single(op);
        assert_eq!(token.kind, TokenKind::Operator, "{op}");
    }
}

#[test]
fn test_punctuation_categories() {
    assert_eq!(
        kinds_and_texts(";,(){}[]."),
        vec![
            (TokenKind::Semicolon, ";".to_string()),
            (TokenKind::Comma, ",".to_string()),
            (TokenKind::LParen, "(".to_string()),
            (TokenKind::RParen, ")".to_string()),
            (TokenKind::LBrace, "{".to_string()),
            (TokenKind::RBrace, "}".to_string()),
            (TokenKind::LBracket, "[".to_string()),
            (TokenKind::RBracket, "]".to_string()),
            (TokenKind::Dot, ".".to_string()),
        ]
    );
}

#[test]
fn test_numeric_literals() {
    assert_eq!(single("3.14f").kind, TokenKind::Float);
    assert_eq!(single("42UL").kind, TokenKind::Integer);
    assert_eq!(single("3.").kind, TokenKind::Float);
    assert_eq!(single(".25").kind, TokenKind::Float);
    assert_eq!(single("6.02e23").kind, TokenKind::Float);
    assert_eq!(single("0").kind, TokenKind::Integer);
}

#[test]
fn test_numbers_without_a_dot_are_not_floats() {
    assert_eq!(
        kinds_and_texts("1e5 0x1F"),
        vec![
            (TokenKind::Integer, "1".to_string()),
            (TokenKind::Id, "e5".to_string()),
            (TokenKind::Integer, "0".to_string()),
            (TokenKind::Id, "x1F".to_string()),
        ]
    );
}

#[test]
fn test_every_reserved_word_is_keyword() {
    for word in reserved_words() {
        let token = single(word);
        assert_eq!(token.kind, TokenKind::Keyword, "{word}");
        assert_eq!(token.text, word);
    }
}

#[test]
fn test_near_keywords_are_identifiers() {
    for word in ["integer", "If", "_Boolean", "whilex", "do_", "NULL"] {
        assert_eq!(single(word).kind, TokenKind::Id, "{word}");
    }
}

#[test]
fn test_line_comment_then_indented_code() {
    let tokens = tokenize("// header\n    value = 1;").unwrap();
    assert_eq!(tokens[0].text, "value");
    assert_eq!(tokens[0].location, SourceLocation::new(2, 5));
}

#[test]
fn test_block_comment_spanning_lines_moves_position() {
    let tokens = tokenize("/* one\n two\n three */ x").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].location, SourceLocation::new(3, 11));
}

#[test]
fn test_preprocessor_mid_line_and_trimmed() {
    let tokens = tokenize("x; #pragma once \t\ny").unwrap();
    assert_eq!(tokens[2].kind, TokenKind::Preprocessor);
    assert_eq!(tokens[2].text, "#pragma once");
    assert_eq!(tokens[2].location, SourceLocation::new(1, 4));
    assert_eq!(tokens[3].location, SourceLocation::new(2, 1));
}

#[test]
fn test_preprocessor_swallows_comment_on_same_line() {
    let tokens = tokenize("#define X 1 // one\nX").unwrap();
    assert_eq!(tokens[0].text, "#define X 1 // one");
    assert_eq!(tokens.len(), 2);
}

#[test]
fn test_bare_invalid_character() {
    let err = tokenize("@").unwrap_err();
    assert_eq!(
        err,
        LexError {
            message: "Invalid character: '@'".to_string(),
            location: SourceLocation::new(1, 1),
        }
    );
}

#[test]
fn test_invalid_character_position_is_the_character_itself() {
    let err = tokenize("int main() {\n\treturn `0;\n}").unwrap_err();
    assert_eq!(err.location, SourceLocation::new(2, 9));
    assert_eq!(err.message, "Invalid character: '`'");
}

#[test]
fn test_unterminated_string_fails_at_opening_quote() {
    let err = tokenize("s = \"abc;\n").unwrap_err();
    assert_eq!(err.location, SourceLocation::new(1, 5));
    assert_eq!(err.message, "Invalid character: '\"'");
}

#[test]
fn test_unterminated_char_fails_at_opening_quote() {
    let err = tokenize("c = 'ab';").unwrap_err();
    assert_eq!(err.location, SourceLocation::new(1, 5));
}

#[test]
fn test_unterminated_block_comment_lexes_as_operators() {
    assert_eq!(
        kinds_and_texts("/* open"),
        vec![
            (TokenKind::Operator, "/".to_string()),
            (TokenKind::Operator, "*".to_string()),
            (TokenKind::Id, "open".to_string()),
        ]
    );
}

#[test]
fn test_closed_comment_before_unclosed_one() {
    assert_eq!(
        kinds_and_texts("/* a */ x /* y"),
        vec![
            (TokenKind::Id, "x".to_string()),
            (TokenKind::Operator, "/".to_string()),
            (TokenKind::Operator, "*".to_string()),
            (TokenKind::Id, "y".to_string()),
        ]
    );
}

#[test]
fn test_many_unclosed_comment_openers() {
    // Each opener would rescan the rest of the input if the failed search
    // for `*/` were not remembered.
    let count = 200_000;
    let source = "/* ".repeat(count);
    let tokens = tokenize(&source).unwrap();
    assert_eq!(tokens.len(), 2 * count);
    let last = &tokens[tokens.len() - 1];
    assert_eq!(last.text, "*");
    assert_eq!(last.location, SourceLocation::new(1, 3 * count - 1));
}

#[test]
fn test_non_ascii_identifier_is_invalid() {
    let err = tokenize("int naïve;").unwrap_err();
    assert_eq!(err.location, SourceLocation::new(1, 7));
    assert_eq!(err.message, "Invalid character: 'ï'");
}

#[test]
fn test_non_ascii_inside_string_is_fine() {
    let tokens = tokenize("\"héllo\" x").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[1].location, SourceLocation::new(1, 9));
}

#[test]
fn test_scanner_pulls_lazily_and_stops_at_error() {
    let mut scanner = Scanner::new("a b $ c");
    assert_eq!(scanner.next().unwrap().unwrap().text, "a");
    assert_eq!(scanner.location(), SourceLocation::new(1, 2));
    assert_eq!(scanner.next().unwrap().unwrap().text, "b");
    let err = scanner.next().unwrap().unwrap_err();
    assert_eq!(err.location, SourceLocation::new(1, 5));
    assert!(scanner.next().is_none());
}

#[test]
fn test_multi_line_string_advances_lines() {
    let tokens = tokenize("\"a\nb\" c").unwrap();
    assert_eq!(tokens[0].text, "\"a\nb\"");
    assert_eq!(tokens[1].location, SourceLocation::new(2, 4));
}
