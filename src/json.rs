//! JSON rendering of values for deep-equality descriptions.
//!
//! Follows the classic stringify contract: undefined-valued object entries
//! and function entries are omitted, undefined/function list elements render
//! as `null`, non-finite numbers render as `null`, dates render as ISO
//! strings (invalid dates as `null`), regexps and errors render as empty
//! objects, and a top-level unrepresentable value renders as the literal
//! text `undefined`.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::value::Value;

struct Json<'a>(&'a Value);

fn representable(v: &Value) -> bool {
    !matches!(v, Value::Undefined | Value::Function(_))
}

impl Serialize for Json<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Value::Undefined | Value::Null | Value::Function(_) => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => {
                if !n.is_finite() {
                    serializer.serialize_unit()
                } else if *n == n.trunc() && n.abs() < 9.0e15 {
                    serializer.serialize_i64(*n as i64)
                } else {
                    serializer.serialize_f64(*n)
                }
            }
            Value::String(s) => serializer.serialize_str(s),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    seq.serialize_element(&Json(item))?;
                }
                seq.end()
            }
            Value::Object(o) => {
                let kept: Vec<_> = o
                    .entries()
                    .iter()
                    .filter(|(_, v)| representable(v))
                    .collect();
                let mut map = serializer.serialize_map(Some(kept.len()))?;
                for (key, value) in kept {
                    map.serialize_entry(key, &Json(value))?;
                }
                map.end()
            }
            Value::Date(d) => match d.to_iso_string() {
                Some(iso) => serializer.serialize_str(&iso),
                None => serializer.serialize_unit(),
            },
            Value::Regexp(_) | Value::Error(_) => {
                let map = serializer.serialize_map(Some(0))?;
                map.end()
            }
        }
    }
}

/// Renders a value the way deep-equality descriptions show it.
pub fn stringify(value: &Value) -> String {
    if !representable(value) {
        return "undefined".to_string();
    }
    serde_json::to_string(&Json(value)).unwrap_or_else(|_| "undefined".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives() {
        assert_eq!(stringify(&Value::from(1)), "1");
        assert_eq!(stringify(&Value::from(3.25)), "3.25");
        assert_eq!(stringify(&Value::from("a")), "\"a\"");
        assert_eq!(stringify(&Value::from(true)), "true");
        assert_eq!(stringify(&Value::Null), "null");
        assert_eq!(stringify(&Value::from(f64::NAN)), "null");
    }

    #[test]
    fn unrepresentable_top_level_values() {
        assert_eq!(stringify(&Value::Undefined), "undefined");
        let f = Value::function("f", |_| Ok(Value::Undefined));
        assert_eq!(stringify(&f), "undefined");
    }

    #[test]
    fn containers_elide_or_null_out_unrepresentable_members() {
        let object = Value::object([
            ("a", Value::from(1)),
            ("gone", Value::Undefined),
            ("f", Value::function("f", |_| Ok(Value::Undefined))),
        ]);
        assert_eq!(stringify(&object), r#"{"a":1}"#);

        let list = Value::list([Value::from(1), Value::Undefined, Value::from(2)]);
        assert_eq!(stringify(&list), "[1,null,2]");
    }

    #[test]
    fn special_objects() {
        assert_eq!(
            stringify(&Value::date(0.0)),
            "\"1970-01-01T00:00:00.000Z\""
        );
        assert_eq!(stringify(&Value::invalid_date()), "null");
        assert_eq!(stringify(&Value::regexp("a", "g").unwrap()), "{}");
        assert_eq!(stringify(&Value::error("Error", "m")), "{}");
    }
}
