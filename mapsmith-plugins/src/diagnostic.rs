//! Diagnostic types for the generation run.
//!
//! Missing metadata and unsupported table shapes are never fatal; they are
//! recorded as diagnostics and generation proceeds.

use serde::Serialize;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    /// A fatal error that prevents further processing.
    Error,
    /// A warning that doesn't prevent processing but should be addressed.
    Warning,
    /// Informational message about the generation run.
    Info,
}

impl Severity {
    /// Returns true if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A diagnostic message from a generation plugin.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The plugin that produced this diagnostic.
    pub plugin: String,
    /// The diagnostic message.
    pub message: String,
    /// Optional qualified table name the diagnostic refers to.
    pub table: Option<String>,
}

impl Diagnostic {
    /// Create a new warning diagnostic.
    pub fn warning(plugin: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            plugin: plugin.into(),
            message: message.into(),
            table: None,
        }
    }

    /// Create a new info diagnostic.
    pub fn info(plugin: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            plugin: plugin.into(),
            message: message.into(),
            table: None,
        }
    }

    /// Attach the qualified table name this diagnostic refers to.
    pub fn for_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(table) = &self.table {
            write!(f, " (table {})", table)?;
        }
        Ok(())
    }
}
