use crate::error::AgtypeError;
use miette::SourceSpan;

/// Callback interface for a grammar-driven traversal of an agtype literal.
///
/// A traversal driver (see [`crate::parser::Parser`]) invokes one
/// enter/exit pair per matched production, in source order: children fire
/// between their parent's enter and exit. Scalar, pair and annotation
/// callbacks carry the exact matched source text plus its span.
///
/// Every method has a no-op default, so an implementation only overrides
/// the productions it cares about.
#[allow(unused_variables)]
pub trait AgtypeListener {
    /// The root production wrapping the whole literal.
    fn enter_agtype(&mut self) -> Result<(), AgtypeError> {
        Ok(())
    }
    fn exit_agtype(&mut self) -> Result<(), AgtypeError> {
        Ok(())
    }

    /// An object value: `{ pair, ... }`.
    fn enter_object_value(&mut self) -> Result<(), AgtypeError> {
        Ok(())
    }
    fn exit_object_value(&mut self) -> Result<(), AgtypeError> {
        Ok(())
    }

    /// An array value: `[ value, ... ]`.
    fn enter_array_value(&mut self) -> Result<(), AgtypeError> {
        Ok(())
    }
    fn exit_array_value(&mut self) -> Result<(), AgtypeError> {
        Ok(())
    }

    /// A key-value pair inside an object body. `raw_key` is the key's
    /// string literal, quotes and escapes intact.
    fn enter_pair(&mut self, raw_key: &str, span: SourceSpan) -> Result<(), AgtypeError> {
        Ok(())
    }
    fn exit_pair(&mut self, raw_key: &str, span: SourceSpan) -> Result<(), AgtypeError> {
        Ok(())
    }

    fn enter_string_value(&mut self, raw: &str, span: SourceSpan) -> Result<(), AgtypeError> {
        Ok(())
    }
    fn exit_string_value(&mut self, raw: &str, span: SourceSpan) -> Result<(), AgtypeError> {
        Ok(())
    }

    fn enter_integer_value(&mut self, raw: &str, span: SourceSpan) -> Result<(), AgtypeError> {
        Ok(())
    }
    fn exit_integer_value(&mut self, raw: &str, span: SourceSpan) -> Result<(), AgtypeError> {
        Ok(())
    }

    fn enter_float_value(&mut self, raw: &str, span: SourceSpan) -> Result<(), AgtypeError> {
        Ok(())
    }
    fn exit_float_value(&mut self, raw: &str, span: SourceSpan) -> Result<(), AgtypeError> {
        Ok(())
    }

    fn enter_true(&mut self) -> Result<(), AgtypeError> {
        Ok(())
    }
    fn exit_true(&mut self) -> Result<(), AgtypeError> {
        Ok(())
    }

    fn enter_false(&mut self) -> Result<(), AgtypeError> {
        Ok(())
    }
    fn exit_false(&mut self) -> Result<(), AgtypeError> {
        Ok(())
    }

    fn enter_null(&mut self) -> Result<(), AgtypeError> {
        Ok(())
    }
    fn exit_null(&mut self) -> Result<(), AgtypeError> {
        Ok(())
    }

    /// A trailing type annotation: `::ident`. `ident` is the bare
    /// identifier, without the `::`.
    fn enter_type_annotation(&mut self, ident: &str, span: SourceSpan) -> Result<(), AgtypeError> {
        Ok(())
    }
    fn exit_type_annotation(&mut self, ident: &str, span: SourceSpan) -> Result<(), AgtypeError> {
        Ok(())
    }
}
