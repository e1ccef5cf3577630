use crate::builder::AgtypeBuilder;
use crate::error::AgtypeError;
use crate::parser::Parser;
use crate::value::Agtype;
use log::debug;

/// Parses an agtype literal into an [`Agtype`] value tree.
///
/// This is the primary entry point. It wires a fresh traversal driver to a
/// fresh tree builder; neither is reused across parses.
///
/// # Errors
///
/// Returns an [`AgtypeError`] if the literal is syntactically invalid or a
/// scalar fails to decode. No partial value is ever returned.
pub fn parse(source: &str) -> Result<Agtype, AgtypeError> {
    parse_with_name(source, "agtype")
}

/// Like [`parse`], with a source name used in error diagnostics.
///
/// # Errors
///
/// Same as [`parse`].
pub fn parse_with_name(source: &str, name: &str) -> Result<Agtype, AgtypeError> {
    debug!("parsing agtype literal `{name}` ({} bytes)", source.len());
    let mut parser = Parser::new_with_name(source, name);
    let mut builder = AgtypeBuilder::new(parser.source());
    parser.parse_agtype(&mut builder)?;
    builder
        .into_output()
        .ok_or(AgtypeError::StructuralInconsistency {
            context: "traversal finished without producing a root value",
        })
}

impl Agtype {
    /// Serializes this value into a pretty-printed JSON string. Annotations
    /// are dropped; the decorated containers serialize as plain JSON.
    ///
    /// # Errors
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Serializes this value into a YAML string.
    ///
    /// # Errors
    /// Returns a `serde_yaml::Error` if serialization fails.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}
