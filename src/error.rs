use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, Clone)]
pub enum AgtypeError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] SyntaxError),

    #[error("Malformed number literal")]
    #[diagnostic(
        code(agtype::number_format),
        help("Integer literals must fit in a signed 64-bit value; float literals must be valid IEEE-754 doubles.")
    )]
    NumberFormat {
        #[source_code]
        src: NamedSource<String>,
        #[label("could not decode `{text}`")]
        span: SourceSpan,
        text: String,
    },

    #[error("Malformed string literal")]
    #[diagnostic(
        code(agtype::string_decode),
        help("String literals use JSON escapes: \\\" \\\\ \\/ \\b \\f \\n \\r \\t and \\uXXXX.")
    )]
    StringDecode {
        #[source_code]
        src: NamedSource<String>,
        #[label("{reason}")]
        span: SourceSpan,
        reason: String,
    },

    #[error("Builder state out of sync with the traversal: {context}")]
    #[diagnostic(
        code(agtype::structural_inconsistency),
        help("This indicates a defect in the event source / tree builder contract, not an input error.")
    )]
    StructuralInconsistency { context: &'static str },
}

#[derive(Error, Debug, Diagnostic, Clone)]
pub enum SyntaxError {
    #[error("Unexpected token")]
    #[diagnostic(
        code(agtype::unexpected_token),
        help("The parser found a token it did not expect in this position.")
    )]
    UnexpectedToken {
        #[source_code]
        src: NamedSource<String>,
        #[label("Expected {expected}, but found this")]
        span: SourceSpan,
        expected: String,
    },

    #[error("Unexpected end of input")]
    #[diagnostic(
        code(agtype::unexpected_eof),
        help("The literal ended before the value was complete.")
    )]
    UnexpectedEof {
        #[source_code]
        src: NamedSource<String>,
        #[label("Input ended unexpectedly here")]
        span: SourceSpan,
    },

    #[error("Trailing input after the root value")]
    #[diagnostic(
        code(agtype::trailing_input),
        help("An agtype literal holds exactly one value.")
    )]
    TrailingInput {
        #[source_code]
        src: NamedSource<String>,
        #[label("this was left over")]
        span: SourceSpan,
    },
}
