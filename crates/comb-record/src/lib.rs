//! # Comb record helpers
//!
//! Utilities for "plain records" — open-shaped JSON objects
//! represented as [`serde_json::Value`]:
//!
//! - [`access`]: `get`, `get_path` (dotted traversal), `pluck`,
//!   `set`, `set_each`. Absent fields are `None`.
//! - [`order`]: a total order over JSON values and the
//!   `comparing_keys` comparator for sorting records by named fields.
//! - [`hash`]: `content_hash` — stable SHA-256 of the canonical
//!   (sorted-key) serialization, usable as a memoization key for
//!   record arguments.
//!
//! ```
//! use comb_record::{comparing_keys, get};
//! use serde_json::json;
//!
//! let mut people = vec![
//!     json!({"name": "ada", "age": 36}),
//!     json!({"name": "bob", "age": 29}),
//! ];
//! people.sort_by(comparing_keys(&["age"]));
//! assert_eq!(get("name")(&people[0]), Some(&json!("bob")));
//! ```

pub mod access;
pub mod error;
pub mod hash;
pub mod order;

pub use access::{get, get_path, pluck, set, set_each};
pub use error::RecordError;
pub use hash::content_hash;
pub use order::{comparing_keys, value_cmp};
