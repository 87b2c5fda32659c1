//! # Fieldwise: Name-Based Record Conversion Utilities
//!
//! Fieldwise copies, converts and inspects records by field name instead of by
//! type, so that a domain model can be turned into a transport shape (or the
//! other way round) without hand-writing every field assignment.
//!
//! ## Features
//!
//! - **Record transform**: copy every same-named, same-kind field from one record into another
//! - **Tag parsers**: per-field hooks that turn a list of strings into the destination field type
//! - **List migration**: convert a list of one record type into a list of another
//! - **List comparison**: added/removed elements between two lists by deep equality
//! - **Aggregation and filtering**: sum a named field, drop or keep records by field value
//!
//! ## Example
//!
//! ```ignore
//! use fieldwise::{reflect_record, register_tag_parser, transform_struct};
//!
//! #[derive(Debug, Clone, PartialEq, Default)]
//! struct Model {
//!     name: String,
//!     labels: Vec<String>,
//! }
//!
//! #[derive(Debug, Clone, PartialEq, Default)]
//! struct ModelDto {
//!     name: String,
//!     labels: Vec<String>,
//! }
//!
//! reflect_record!(Model { name, labels: tag = "upper_labels" });
//! reflect_record!(ModelDto { name, labels });
//!
//! register_tag_parser("upper_labels", |values: &[String]| {
//!     values.iter().map(|v| v.to_uppercase()).collect::<Vec<String>>()
//! });
//!
//! let model = Model {
//!     name: "a".to_string(),
//!     labels: vec!["x".to_string(), "y".to_string()],
//! };
//! let mut dto = ModelDto::default();
//! transform_struct(&model, &mut dto)?;
//! assert_eq!(dto.labels, vec!["X", "Y"]);
//! ```

#[macro_use]
mod macros;

// Reflection layer
pub mod value;
pub mod record;
pub mod list;

// Operations
pub mod tag_parser;
pub mod transform;
pub mod migrate;
pub mod compare;
pub mod aggregate;
pub mod filter;

// Ambient
pub mod config;
pub mod error;
pub mod logging;

// Re-export key types
pub use value::{Kind, Reflect};
pub use record::{FieldDescriptor, Record};
pub use list::{List, ListIter};

// Re-export operations
pub use tag_parser::{global_tag_parsers, register_tag_parser, TagParser, TagParsers};
pub use transform::{transform_struct, Transformer};
pub use migrate::migrate_slice;
pub use compare::{compare_slice, Comparison};
pub use aggregate::sum_slice_params_value;
pub use filter::{filter_slice, filter_slice_with, FilterMode};

pub use config::{MigrateErrorPolicy, TransformConfig};
pub use error::{ConfigError, ElementError, FieldwiseError, Result};
