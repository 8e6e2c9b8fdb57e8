//! Introspected table metadata for the mapsmith generator passes.
//!
//! This crate provides the read-only query surface the transformation
//! passes consume: per-table name, remarks, ordered columns, primary-key
//! columns, named-column lookup, plus the metadata-to-identifier naming
//! rules shared by every pass.
//!
//! # Architecture
//!
//! ```text
//! schema introspection → mapsmith-meta (metadata) → mapsmith-plugins (passes)
//! ```
//!
//! The metadata types are designed to be:
//! - Owned by the host, read-only to the passes
//! - Scoped to one table-processing cycle
//! - Serializable, so an external introspection step can hand them over

mod column;
mod naming;
mod table;

pub use column::ColumnMetadata;
pub use naming::{calculate_field_name, to_camel_case, to_pascal_case, valid_property_name};
pub use table::{FullyQualifiedTable, TableMetadata};
