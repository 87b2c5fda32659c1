//! Error types.
//!
//! Only kind-level failures are errors. Missing destination fields, unregistered
//! tags, type mismatches under direct assignment and non-collection arguments to
//! the migrate, sum and filter operations are soft skips and never surface here.

use std::path::PathBuf;

use thiserror::Error;

use crate::value::Kind;

/// Result type alias using FieldwiseError
pub type Result<T> = std::result::Result<T, FieldwiseError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldwiseError {
    /// Source and destination fields of the same name have different kinds
    #[error("param kind need to be same: field '{field}' is {source_kind} in source, {dest_kind} in destination")]
    ParamKindMismatch {
        field: String,
        source_kind: Kind,
        dest_kind: Kind,
    },

    /// A list of records can only be migrated into a list of records
    #[error("slice elem kind need to be record: field '{field}' has {element_kind} elements in destination")]
    SliceElementKindMismatch { field: String, element_kind: Kind },

    #[error("param need to be slice kind, got {0}")]
    NotSliceKind(Kind),

    /// A tag parser returned a value that cannot be stored in the destination field
    #[error("tag parser '{tag}' produced {produced}, field '{field}' expects {expected}")]
    TagParserOutput {
        field: String,
        tag: String,
        produced: &'static str,
        expected: &'static str,
    },

    #[error("{0} parser is already registered")]
    DuplicateTagParser(String),
}

/// Failure to transform one element while migrating a list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("element {index}: {source}")]
pub struct ElementError {
    pub index: usize,
    #[source]
    pub source: FieldwiseError,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_kind_mismatch_message() {
        let err = FieldwiseError::ParamKindMismatch {
            field: "id".to_string(),
            source_kind: Kind::Int32,
            dest_kind: Kind::String,
        };

        let message = err.to_string();
        assert!(message.contains("'id'"));
        assert!(message.contains("int32"));
        assert!(message.contains("string"));
    }

    #[test]
    fn test_element_error_exposes_source() {
        let err = ElementError {
            index: 2,
            source: FieldwiseError::NotSliceKind(Kind::Record),
        };

        assert!(err.to_string().starts_with("element 2:"));
        assert!(err.source().is_some());
    }
}
