//! Field accessors over JSON records.
//!
//! `get` and `get_path` return closures so they compose with iterator
//! adapters the way the operator sections do; absence is `None`
//! rather than an error.

use crate::error::RecordError;
use serde_json::Value;

/// Accessor for a top-level field: `get("name")(&record)`.
pub fn get(key: impl Into<String>) -> impl Fn(&Value) -> Option<&Value> {
    let key = key.into();
    move |record| record.get(key.as_str())
}

/// Accessor for a dotted path: `get_path("a.b.c")`.
///
/// Traversal stops with `None` at the first missing or non-object
/// segment.
pub fn get_path(path: impl Into<String>) -> impl Fn(&Value) -> Option<&Value> {
    let segments: Vec<String> = path.into().split('.').map(String::from).collect();
    move |record| {
        let mut cur = record;
        for seg in &segments {
            cur = cur.get(seg.as_str())?;
        }
        Some(cur)
    }
}

/// Extract one field from every record: the `map(get(key))` of a
/// record list. Records missing the field contribute `None`.
pub fn pluck<'a>(key: &str, records: &'a [Value]) -> Vec<Option<&'a Value>> {
    records.iter().map(|r| r.get(key)).collect()
}

/// Set a field on a record, overwriting any existing value.
///
/// Fails when the record is not a JSON object.
pub fn set(record: &mut Value, key: impl Into<String>, value: Value) -> Result<(), RecordError> {
    let key = key.into();
    match record.as_object_mut() {
        Some(map) => {
            map.insert(key, value);
            Ok(())
        }
        None => Err(RecordError::NotAnObject { key }),
    }
}

/// Set `key` on every record to `value_fn(record)`, in place.
///
/// The value function sees the record before its own update. Stops at
/// the first non-object record.
pub fn set_each<F>(records: &mut [Value], key: &str, value_fn: F) -> Result<(), RecordError>
where
    F: Fn(&Value) -> Value,
{
    for record in records.iter_mut() {
        let value = value_fn(record);
        set(record, key, value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn get_present_and_absent() {
        let rec = json!({"a": 1, "b": {"c": 2}});
        assert_eq!(get("a")(&rec), Some(&json!(1)));
        assert_eq!(get("missing")(&rec), None);
    }

    #[test]
    fn get_path_traverses() {
        let rec = json!({"a": {"b": {"c": 3}}});
        assert_eq!(get_path("a.b.c")(&rec), Some(&json!(3)));
        assert_eq!(get_path("a.b")(&rec), Some(&json!({"c": 3})));
        assert_eq!(get_path("a.x.c")(&rec), None);
        assert_eq!(get_path("a.b.c.d")(&rec), None);
    }

    #[test]
    fn pluck_collects_options() {
        let recs = vec![json!({"n": 1}), json!({}), json!({"n": 3})];
        assert_eq!(pluck("n", &recs), [Some(&json!(1)), None, Some(&json!(3))]);
    }

    #[test]
    fn set_inserts_and_overwrites() {
        let mut rec = json!({"a": 1});
        set(&mut rec, "b", json!(2)).unwrap();
        set(&mut rec, "a", json!(9)).unwrap();
        assert_eq!(rec, json!({"a": 9, "b": 2}));
    }

    #[test]
    fn set_rejects_non_objects() {
        let mut rec = json!([1, 2]);
        let err = set(&mut rec, "a", json!(1)).unwrap_err();
        assert!(matches!(err, RecordError::NotAnObject { .. }));
    }

    #[test]
    fn set_each_sees_record_before_update() {
        let mut recs = vec![json!({"n": 1}), json!({"n": 2})];
        set_each(&mut recs, "double", |r| {
            json!(r["n"].as_i64().unwrap_or(0) * 2)
        })
        .unwrap();
        assert_eq!(recs, [json!({"n": 1, "double": 2}), json!({"n": 2, "double": 4})]);
    }
}
