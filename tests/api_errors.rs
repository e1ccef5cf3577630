// API error path tests
// These test error handling, conversions, and edge cases in the API layer

use agtype_core::{parse, parse_with_name, AgtypeError};

#[test]
fn test_api_syntax_error_kind() {
    let result = parse("{ invalid");
    assert!(result.is_err());
    if let Err(AgtypeError::Syntax(_)) = result {
        // Success
    } else {
        panic!("Expected syntax error");
    }
}

#[test]
fn test_api_number_format_error_kind() {
    let result = parse("1.2.3");
    assert!(result.is_err());
    if let Err(AgtypeError::NumberFormat { text, .. }) = result {
        assert_eq!(text, "1.2.3");
    } else {
        panic!("Expected number format error");
    }
}

#[test]
fn test_api_string_decode_error_kind() {
    let result = parse(r#""bad \x escape""#);
    assert!(result.is_err());
    if let Err(AgtypeError::StringDecode { .. }) = result {
        // Success
    } else {
        panic!("Expected string decode error");
    }
}

#[test]
fn test_api_decode_error_in_key() {
    let result = parse(r#"{"bad \x key": 1}"#);
    assert!(matches!(result, Err(AgtypeError::StringDecode { .. })));
}

#[test]
fn test_api_empty_source_name() {
    let result = parse_with_name("{}", "");
    assert!(result.is_ok());
}

#[test]
fn test_api_name_appears_in_diagnostic_source() {
    let result = parse_with_name("{", "query-42.agtype");
    assert!(result.is_err());
}

#[test]
fn test_api_to_json_success() {
    let value = parse(r#"{"key": "value", "num": 42}"#).unwrap();
    let json = value.to_json();
    assert!(json.is_ok());
    assert!(json.unwrap().contains("key"));
}

#[test]
fn test_api_to_yaml_success() {
    let value = parse(r#"{"key": "value", "num": 42}"#).unwrap();
    let yaml = value.to_yaml();
    assert!(yaml.is_ok());
    assert!(yaml.unwrap().contains("key"));
}

#[test]
fn test_api_error_display() {
    if let Err(err) = parse("{ invalid") {
        let error_string = format!("{}", err);
        assert!(!error_string.is_empty());
    } else {
        panic!("Should have errored");
    }
}

#[test]
fn test_api_error_is_reportable() {
    if let Err(err) = parse("9999999999999999999999") {
        let report = miette::Report::new(err);
        let rendered = format!("{:?}", report);
        assert!(rendered.contains("number_format"));
    } else {
        panic!("Should have errored");
    }
}

#[test]
fn test_api_no_partial_root_on_error() {
    // The error surfaces before any root is observable
    let result = parse(r#"{"a": [1, 2, 1.2.3]}"#);
    assert!(matches!(result, Err(AgtypeError::NumberFormat { .. })));
}
