//! Stable content hashing for records.
//!
//! Two records with the same fields hash identically regardless of
//! field insertion order: object keys are serialized sorted. The
//! digest doubles as a memoization key for record-valued arguments.

use serde_json::Value;
use sha2::{Digest, Sha256};

/// SHA-256 hex digest of the canonical (sorted-key) serialization.
pub fn content_hash(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    let hash = Sha256::digest(out.as_bytes());
    format!("{hash:x}")
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Array(xs) => {
            out.push('[');
            for (i, x) in xs.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(x, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            out.push('{');
            for (i, key) in keys.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                // map key serialization cannot fail
                out.push_str(&Value::String((*key).clone()).to_string());
                out.push(':');
                write_canonical(&map[*key], out);
            }
            out.push('}');
        }
        // scalars already serialize deterministically
        scalar => out.push_str(&scalar.to_string()),
    }
}
