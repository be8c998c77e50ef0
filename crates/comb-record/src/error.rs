//! Error types for record operations.

/// Errors arising from structural misuse of a record.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// A field write targeted a value that is not a JSON object.
    #[error("cannot set field {key:?}: target is not an object")]
    NotAnObject { key: String },
}
