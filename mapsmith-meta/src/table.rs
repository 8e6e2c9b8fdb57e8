//! Introspected table metadata.

use serde::{Deserialize, Serialize};

use crate::{ColumnMetadata, naming::to_pascal_case};

/// A table name qualified by its optional schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullyQualifiedTable {
    schema: Option<String>,
    name: String,
}

impl FullyQualifiedTable {
    /// Create a table name without a schema qualifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: None,
            name: name.into(),
        }
    }

    /// Create a schema-qualified table name.
    pub fn with_schema(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: Some(schema.into()),
            name: name.into(),
        }
    }

    /// The bare table name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The PascalCase domain object name derived from the table name
    /// (e.g., "dept_info" -> "DeptInfo").
    pub fn domain_object_name(&self) -> String {
        to_pascal_case(&self.name)
    }
}

impl std::fmt::Display for FullyQualifiedTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.schema {
            Some(schema) => write!(f, "{}.{}", schema, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Metadata for a single introspected table.
///
/// Owned by the host introspection step; read-only to the passes. One
/// instance lives for one table-processing cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableMetadata {
    table: FullyQualifiedTable,
    remarks: String,
    base_record_type: String,
    columns: Vec<ColumnMetadata>,
}

impl TableMetadata {
    /// Create table metadata with the fully qualified Java type of the
    /// generated record class.
    pub fn new(table: FullyQualifiedTable, base_record_type: impl Into<String>) -> Self {
        Self {
            table,
            remarks: String::new(),
            base_record_type: base_record_type.into(),
            columns: Vec::new(),
        }
    }

    /// Set the table remarks (free-text comment).
    pub fn remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = remarks.into();
        self
    }

    /// Append a column, preserving declaration order.
    pub fn column(mut self, column: ColumnMetadata) -> Self {
        self.columns.push(column);
        self
    }

    /// The qualified table name.
    pub fn table(&self) -> &FullyQualifiedTable {
        &self.table
    }

    /// The table remarks; empty when the schema declares none.
    pub fn table_remarks(&self) -> &str {
        &self.remarks
    }

    /// Returns true if the schema declares remarks for this table.
    pub fn has_remarks(&self) -> bool {
        !self.remarks.is_empty()
    }

    /// The fully qualified Java type of the generated record class.
    pub fn base_record_type(&self) -> &str {
        &self.base_record_type
    }

    /// All columns in declaration order.
    pub fn columns(&self) -> &[ColumnMetadata] {
        &self.columns
    }

    /// The primary-key columns, in declaration order.
    pub fn primary_key_columns(&self) -> impl Iterator<Item = &ColumnMetadata> {
        self.columns.iter().filter(|c| c.is_primary_key())
    }

    /// Returns true if the table declares at least one primary-key column.
    pub fn has_primary_key_columns(&self) -> bool {
        self.columns.iter().any(|c| c.is_primary_key())
    }

    /// Look up a column by its actual (schema-level) name.
    pub fn get_column(&self, actual_name: &str) -> Option<&ColumnMetadata> {
        self.columns.iter().find(|c| c.actual_name() == actual_name)
    }
}
