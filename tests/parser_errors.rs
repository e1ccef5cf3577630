// Additional parser error path tests
// These systematically test unhappy paths to improve coverage

use agtype_core::parse;

#[test]
fn test_parser_error_missing_closing_brace() {
    let source = r#"{"key": 123"#;
    let result = parse(source);
    assert!(result.is_err(), "Should fail with missing }}");
}

#[test]
fn test_parser_error_missing_closing_bracket() {
    let source = r#"{"arr": [1, 2, 3 }"#;
    let result = parse(source);
    assert!(result.is_err(), "Should fail with missing ]");
}

#[test]
fn test_parser_error_missing_colon() {
    let source = r#"{"key" 123}"#;
    let result = parse(source);
    assert!(result.is_err(), "Should fail with missing :");
}

#[test]
fn test_parser_error_unexpected_eof() {
    let source = r#"{"key": "#;
    let result = parse(source);
    assert!(result.is_err(), "Should fail with unexpected EOF");
}

#[test]
fn test_parser_error_empty_input() {
    let result = parse("");
    assert!(result.is_err(), "Should fail on empty input");
}

#[test]
fn test_parser_error_bare_annotation() {
    let result = parse("::vertex");
    assert!(result.is_err(), "Should fail without a value to annotate");
}

#[test]
fn test_parser_error_incomplete_annotation() {
    let result = parse("{}::");
    assert!(result.is_err(), "Should fail with incomplete annotation");
}

#[test]
fn test_parser_error_annotation_not_identifier() {
    let result = parse(r#"{}::"vertex""#);
    assert!(result.is_err(), "Should fail with non-identifier annotation");
}

#[test]
fn test_parser_error_double_comma() {
    let source = r#"{"a": 1,, "b": 2}"#;
    let result = parse(source);
    assert!(result.is_err(), "Should fail with double comma");
}

#[test]
fn test_parser_error_comma_before_close() {
    let result = parse("[1, 2,]");
    assert!(result.is_err(), "Should fail with trailing comma");
}

#[test]
fn test_parser_error_unquoted_key() {
    let result = parse("{key: 1}");
    assert!(result.is_err(), "Should fail with unquoted key");
}

#[test]
fn test_parser_error_bare_identifier_value() {
    let result = parse(r#"{"key": value}"#);
    assert!(result.is_err(), "Should fail with bare identifier value");
}

#[test]
fn test_parser_error_lone_minus() {
    let result = parse("-");
    assert!(result.is_err(), "Should fail with lone minus sign");
}

#[test]
fn test_parser_error_unclosed_string() {
    let result = parse(r#""never ends"#);
    assert!(result.is_err(), "Should fail with unclosed string");
}

#[test]
fn test_parser_error_trailing_value() {
    let result = parse("1 2");
    assert!(result.is_err(), "Should fail with trailing input");
}

#[test]
fn test_parser_error_mismatched_close() {
    let result = parse(r#"{"a": [1, 2}"#);
    assert!(result.is_err(), "Should fail with mismatched delimiters");
}
