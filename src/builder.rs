use crate::error::AgtypeError;
use crate::event::AgtypeListener;
use crate::scalar::{self, DecodeFailure};
use crate::value::{Agtype, Annotated};
use log::trace;
use miette::{NamedSource, SourceSpan};
use std::collections::HashMap;
use std::sync::Arc;

/// An in-progress container on the object stack. The annotation slot is
/// filled when a `::ident` production closes while this container is on
/// top, and is materialized into [`Agtype::Annotated`] once the container
/// leaves the stack.
#[derive(Debug)]
enum Container {
    List {
        items: Vec<Agtype>,
        annotation: Option<String>,
    },
    Map {
        entries: HashMap<String, Agtype>,
        annotation: Option<String>,
    },
}

impl Container {
    fn list() -> Self {
        Container::List {
            items: Vec::new(),
            annotation: None,
        }
    }

    fn map() -> Self {
        Container::Map {
            entries: HashMap::new(),
            annotation: None,
        }
    }

    fn set_annotation(&mut self, label: String) {
        match self {
            Container::List { annotation, .. } | Container::Map { annotation, .. } => {
                *annotation = Some(label);
            }
        }
    }

    fn into_value(self) -> Agtype {
        let (value, annotation) = match self {
            Container::List { items, annotation } => (Agtype::List(items), annotation),
            Container::Map {
                entries,
                annotation,
            } => (Agtype::Map(entries), annotation),
        };
        match annotation {
            Some(label) => Agtype::Annotated(Box::new(Annotated { value, label })),
            None => value,
        }
    }
}

/// Assembles an [`Agtype`] tree from the ordered enter/exit events of a
/// grammar traversal.
///
/// The central decision happens when a value finishes: a list parent needs
/// no key, so it absorbs the value immediately; a map parent cannot place
/// the value until the enclosing pair closes and supplies the key, so
/// placement is deferred: scalars wait in the pending slot, composites
/// stay on the object stack.
///
/// One builder serves exactly one traversal; construct a fresh one per
/// parse.
pub struct AgtypeBuilder {
    source: Arc<NamedSource<String>>,
    /// Object stack: one entry per unclosed container.
    containers: Vec<Container>,
    /// Pending `::ident` annotations, innermost last.
    annotations: Vec<String>,
    /// Pending value slot. `last_value` is only meaningful while
    /// `last_value_pending` is set.
    last_value: Agtype,
    last_value_pending: bool,
    root: Option<Agtype>,
}

impl AgtypeBuilder {
    pub fn new(source: Arc<NamedSource<String>>) -> Self {
        Self {
            source,
            containers: Vec::new(),
            annotations: Vec::new(),
            last_value: Agtype::Null,
            last_value_pending: false,
            root: None,
        }
    }

    /// The completed root value, once the traversal has finished.
    pub fn into_output(self) -> Option<Agtype> {
        self.root
    }

    /// Records a finished scalar. If the enclosing container is a list it
    /// takes the value right away; otherwise the value waits in the pending
    /// slot for its key.
    fn record_scalar(&mut self, value: Agtype) {
        if let Some(Container::List { items, .. }) = self.containers.last_mut() {
            trace!("scalar appended to enclosing list");
            items.push(value);
            self.last_value_pending = false;
            return;
        }
        self.last_value = value;
        self.last_value_pending = true;
    }

    /// Called when a composite closes. A list parent absorbs the child now;
    /// any other parent leaves the child on the stack for the pair-exit
    /// event to place.
    fn merge_if_parent_is_list(&mut self) {
        let Some(child) = self.containers.pop() else {
            return;
        };
        match self.containers.last_mut() {
            Some(Container::List { items, .. }) => {
                trace!("composite appended to enclosing list");
                items.push(child.into_value());
            }
            _ => self.containers.push(child),
        }
    }

    fn string_decode_error(&self, failure: DecodeFailure, span: SourceSpan) -> AgtypeError {
        AgtypeError::StringDecode {
            src: (*self.source).clone(),
            span,
            reason: failure.to_string(),
        }
    }

    fn number_format_error(&self, raw: &str, span: SourceSpan) -> AgtypeError {
        AgtypeError::NumberFormat {
            src: (*self.source).clone(),
            span,
            text: raw.to_string(),
        }
    }
}

impl AgtypeListener for AgtypeBuilder {
    fn enter_object_value(&mut self) -> Result<(), AgtypeError> {
        trace!("push map (depth {})", self.containers.len() + 1);
        self.containers.push(Container::map());
        Ok(())
    }

    fn exit_object_value(&mut self) -> Result<(), AgtypeError> {
        self.merge_if_parent_is_list();
        Ok(())
    }

    fn enter_array_value(&mut self) -> Result<(), AgtypeError> {
        trace!("push list (depth {})", self.containers.len() + 1);
        self.containers.push(Container::list());
        Ok(())
    }

    fn exit_array_value(&mut self) -> Result<(), AgtypeError> {
        self.merge_if_parent_is_list();
        Ok(())
    }

    fn exit_pair(&mut self, raw_key: &str, span: SourceSpan) -> Result<(), AgtypeError> {
        let key = scalar::decode_string(raw_key)
            .map_err(|failure| self.string_decode_error(failure, span))?;

        if self.last_value_pending {
            // The pair's value was a scalar waiting for this key.
            let value = std::mem::replace(&mut self.last_value, Agtype::Null);
            self.last_value_pending = false;
            match self.containers.last_mut() {
                Some(Container::Map { entries, .. }) => {
                    entries.insert(key, value);
                    Ok(())
                }
                _ => Err(AgtypeError::StructuralInconsistency {
                    context: "pair closed without an enclosing map",
                }),
            }
        } else {
            // The pair's value was a composite, still sitting on the stack
            // above its parent.
            let child = self
                .containers
                .pop()
                .ok_or(AgtypeError::StructuralInconsistency {
                    context: "pair closed but no completed value is available",
                })?;
            match self.containers.last_mut() {
                Some(Container::List { items, .. }) => {
                    items.push(child.into_value());
                    Ok(())
                }
                Some(Container::Map { entries, .. }) => {
                    entries.insert(key, child.into_value());
                    Ok(())
                }
                None => Err(AgtypeError::StructuralInconsistency {
                    context: "pair closed with an empty object stack",
                }),
            }
        }
    }

    fn exit_string_value(&mut self, raw: &str, span: SourceSpan) -> Result<(), AgtypeError> {
        let decoded = scalar::decode_string(raw)
            .map_err(|failure| self.string_decode_error(failure, span))?;
        self.record_scalar(Agtype::String(decoded));
        Ok(())
    }

    fn exit_integer_value(&mut self, raw: &str, span: SourceSpan) -> Result<(), AgtypeError> {
        let decoded =
            scalar::decode_integer(raw).map_err(|_| self.number_format_error(raw, span))?;
        self.record_scalar(Agtype::Integer(decoded));
        Ok(())
    }

    fn exit_float_value(&mut self, raw: &str, span: SourceSpan) -> Result<(), AgtypeError> {
        let decoded =
            scalar::decode_float(raw).map_err(|_| self.number_format_error(raw, span))?;
        self.record_scalar(Agtype::Float(decoded));
        Ok(())
    }

    fn exit_true(&mut self) -> Result<(), AgtypeError> {
        self.record_scalar(Agtype::Bool(true));
        Ok(())
    }

    fn exit_false(&mut self) -> Result<(), AgtypeError> {
        self.record_scalar(Agtype::Bool(false));
        Ok(())
    }

    fn exit_null(&mut self) -> Result<(), AgtypeError> {
        self.record_scalar(Agtype::Null);
        Ok(())
    }

    fn enter_type_annotation(&mut self, ident: &str, _span: SourceSpan) -> Result<(), AgtypeError> {
        self.annotations.push(ident.to_string());
        Ok(())
    }

    fn exit_type_annotation(&mut self, _ident: &str, _span: SourceSpan) -> Result<(), AgtypeError> {
        let label = self
            .annotations
            .pop()
            .ok_or(AgtypeError::StructuralInconsistency {
                context: "annotation closed but none was pending",
            })?;
        // Annotations decorate containers. A scalar can carry one
        // syntactically; it has nowhere to go and is dropped.
        if let Some(top) = self.containers.last_mut() {
            trace!("annotation `{label}` attached");
            top.set_annotation(label);
        }
        Ok(())
    }

    fn exit_agtype(&mut self) -> Result<(), AgtypeError> {
        self.root = Some(match self.containers.pop() {
            Some(container) => container.into_value(),
            // Bare scalar input: the root is whatever the pending slot holds.
            None => std::mem::replace(&mut self.last_value, Agtype::Null),
        });
        trace!("root completed");
        Ok(())
    }
}
