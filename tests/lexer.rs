use parencalc::{
    error::{ErrorCategory, ParseError},
    interpreter::{
        lexer::{Token, tokenize},
        value::kind::Kind,
    },
};

fn kinds_and_text(tokens: &[Token]) -> Vec<(Kind, &str)> {
    tokens.iter().map(|t| (t.kind, t.text.as_str())).collect()
}

#[test]
fn simple_call_is_classified() {
    let tokens = tokenize("(+ 2 3)").unwrap();

    assert_eq!(kinds_and_text(&tokens),
               [(Kind::GroupOpen, "("),
                (Kind::Procedure, "+"),
                (Kind::Integer, "2"),
                (Kind::Integer, "3"),
                (Kind::GroupClose, ")")]);
}

#[test]
fn parentheses_split_words_without_spaces() {
    let tokens = tokenize("(*(+ 1 2)x)").unwrap();

    assert_eq!(kinds_and_text(&tokens),
               [(Kind::GroupOpen, "("),
                (Kind::Procedure, "*"),
                (Kind::GroupOpen, "("),
                (Kind::Procedure, "+"),
                (Kind::Integer, "1"),
                (Kind::Integer, "2"),
                (Kind::GroupClose, ")"),
                (Kind::Name, "x"),
                (Kind::GroupClose, ")")]);
}

#[test]
fn numbers_are_float_only_with_a_decimal_point() {
    let tokens = tokenize("(+ 3.25 -4 +7 -0.5 1e5 12abc)").unwrap();
    let kinds: Vec<Kind> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(kinds,
               [Kind::GroupOpen,
                Kind::Procedure,
                Kind::Float,
                Kind::Integer,
                Kind::Integer,
                Kind::Float,
                Kind::Integer,
                Kind::Integer,
                Kind::GroupClose]);
}

#[test]
fn a_lone_sign_is_a_name() {
    let tokens = tokenize("(- - -x)").unwrap();

    assert_eq!(kinds_and_text(&tokens),
               [(Kind::GroupOpen, "("),
                (Kind::Procedure, "-"),
                (Kind::Name, "-"),
                (Kind::Name, "-x"),
                (Kind::GroupClose, ")")]);
}

#[test]
fn unicode_names_are_single_words() {
    let tokens = tokenize("(* π 2.0)").unwrap();

    assert_eq!(tokens[2].kind, Kind::Name);
    assert_eq!(tokens[2].text, "π");
}

#[test]
fn line_must_start_with_group_open() {
    let err = tokenize("+ 1 2").unwrap_err();

    assert_eq!(err,
               ParseError::MustStartWithGroupOpen { word:   "+".to_string(),
                                                    column: 1, });
    assert_eq!(err.category(), ErrorCategory::Lex);
}

#[test]
fn leading_whitespace_is_ignored_for_the_first_word_check() {
    let err = tokenize("   hello").unwrap_err();

    assert!(matches!(err, ParseError::MustStartWithGroupOpen { column: 4, .. }));
}

#[test]
fn a_leading_number_is_accepted() {
    let tokens = tokenize("42").unwrap();

    assert_eq!(kinds_and_text(&tokens), [(Kind::Integer, "42")]);
}

#[test]
fn unicode_whitespace_separates_words() {
    let tokens = tokenize("(+\u{00A0}1\u{2003}2)").unwrap();

    assert_eq!(kinds_and_text(&tokens),
               [(Kind::GroupOpen, "("),
                (Kind::Procedure, "+"),
                (Kind::Integer, "1"),
                (Kind::Integer, "2"),
                (Kind::GroupClose, ")")]);
    assert_eq!(tokens[3].column, 6);
}

#[test]
fn columns_count_characters() {
    let tokens = tokenize("(* π x)").unwrap();

    let columns: Vec<usize> = tokens.iter().map(|t| t.column).collect();
    assert_eq!(columns, [1, 2, 4, 6, 7]);
}

#[test]
fn empty_and_blank_lines_have_no_tokens() {
    assert!(tokenize("").unwrap().is_empty());
    assert!(tokenize(" \t ").unwrap().is_empty());
    assert!(tokenize("\u{3000}\u{00A0}").unwrap().is_empty());
}

#[test]
fn tokens_display_kind_and_text() {
    let tokens = tokenize("(+ 1 x)").unwrap();
    let rendered: Vec<String> = tokens.iter().map(ToString::to_string).collect();

    assert_eq!(rendered, ["{GroupOpen, (}", "{Procedure, +}", "{Integer, 1}", "{Name, x}", "{GroupClose, )}"]);
}
