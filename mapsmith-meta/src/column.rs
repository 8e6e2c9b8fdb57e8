//! Introspected column metadata.

use serde::{Deserialize, Serialize};

use crate::naming::to_camel_case;

/// Metadata for a single introspected column.
///
/// `java_property` defaults to the camelCase form of the actual column
/// name but can be set explicitly when the introspection step provides
/// its own mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMetadata {
    actual_name: String,
    java_property: String,
    remarks: String,
    java_type: String,
    primary_key: bool,
}

impl ColumnMetadata {
    /// Create a new column with the given actual name and fully qualified
    /// Java type.
    pub fn new(actual_name: impl Into<String>, java_type: impl Into<String>) -> Self {
        let actual_name = actual_name.into();
        let java_property = to_camel_case(&actual_name);
        Self {
            actual_name,
            java_property,
            remarks: String::new(),
            java_type: java_type.into(),
            primary_key: false,
        }
    }

    /// Set the column remarks (free-text comment).
    pub fn remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = remarks.into();
        self
    }

    /// Override the derived Java property name.
    pub fn java_property(mut self, property: impl Into<String>) -> Self {
        self.java_property = property.into();
        self
    }

    /// Mark this column as part of the primary key.
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// The column name as declared in the schema.
    pub fn actual_name(&self) -> &str {
        &self.actual_name
    }

    /// The Java-level property name for this column.
    pub fn property(&self) -> &str {
        &self.java_property
    }

    /// The column remarks; empty when the schema declares none.
    pub fn column_remarks(&self) -> &str {
        &self.remarks
    }

    /// Returns true if the schema declares remarks for this column.
    pub fn has_remarks(&self) -> bool {
        !self.remarks.is_empty()
    }

    /// The fully qualified Java type of the mapped property.
    pub fn java_type(&self) -> &str {
        &self.java_type
    }

    /// Returns true if this column is part of the primary key.
    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }
}
