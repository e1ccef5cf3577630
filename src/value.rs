use std::collections::HashMap;

/// A decoded agtype value.
///
/// Agtype is a superset of JSON: any value may carry a trailing type
/// annotation (`::name`), which shows up here as the [`Agtype::Annotated`]
/// wrapper around the container it decorates.
#[derive(Debug, PartialEq, Clone)]
pub enum Agtype {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<Agtype>),
    Map(HashMap<String, Agtype>),
    Annotated(Box<Annotated>),
}

/// A list or map together with the type annotation that followed it,
/// e.g. `{"id": 1}::vertex`.
#[derive(Debug, PartialEq, Clone)]
pub struct Annotated {
    pub value: Agtype,
    pub label: String,
}

impl Agtype {
    pub fn is_null(&self) -> bool {
        matches!(self, Agtype::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Agtype::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Agtype::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Agtype::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Agtype::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the list elements, looking through an annotation wrapper.
    pub fn as_list(&self) -> Option<&[Agtype]> {
        match self {
            Agtype::List(items) => Some(items),
            Agtype::Annotated(a) => a.value.as_list(),
            _ => None,
        }
    }

    /// Returns the map entries, looking through an annotation wrapper.
    pub fn as_map(&self) -> Option<&HashMap<String, Agtype>> {
        match self {
            Agtype::Map(entries) => Some(entries),
            Agtype::Annotated(a) => a.value.as_map(),
            _ => None,
        }
    }

    /// The type annotation attached to this value, if any.
    pub fn annotation(&self) -> Option<&str> {
        match self {
            Agtype::Annotated(a) => Some(&a.label),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_look_through_annotation() {
        let inner = Agtype::Map(HashMap::from([("id".to_string(), Agtype::Integer(1))]));
        let value = Agtype::Annotated(Box::new(Annotated {
            value: inner,
            label: "vertex".to_string(),
        }));

        assert_eq!(value.annotation(), Some("vertex"));
        let map = value.as_map().unwrap();
        assert_eq!(map.get("id"), Some(&Agtype::Integer(1)));
        assert!(value.as_list().is_none());
    }

    #[test]
    fn test_scalar_accessors() {
        assert!(Agtype::Null.is_null());
        assert_eq!(Agtype::Bool(true).as_bool(), Some(true));
        assert_eq!(Agtype::Integer(-7).as_i64(), Some(-7));
        assert_eq!(Agtype::Float(1.5).as_f64(), Some(1.5));
        assert_eq!(Agtype::String("x".to_string()).as_str(), Some("x"));
        assert_eq!(Agtype::Integer(1).as_bool(), None);
    }
}
