use crate::value::Agtype;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

impl Serialize for Agtype {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Agtype::Null => serializer.serialize_unit(),
            Agtype::Bool(b) => serializer.serialize_bool(*b),
            Agtype::Integer(n) => serializer.serialize_i64(*n),
            Agtype::Float(n) => serializer.serialize_f64(*n),
            Agtype::String(s) => serializer.serialize_str(s),
            Agtype::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Agtype::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            // The annotation is type metadata (`::vertex` is a cast, not
            // data); serialization emits the inner container.
            Agtype::Annotated(a) => a.value.serialize(serializer),
        }
    }
}
