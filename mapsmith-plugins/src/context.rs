//! Generation context threaded through plugin hooks.

use crate::diagnostic::{Diagnostic, Severity};

/// Context passed to every plugin hook.
///
/// Carries the diagnostics accumulated over a generation run. The host
/// owns one instance per run and decides how to surface the collected
/// messages once generation finishes.
#[derive(Debug, Default)]
pub struct GenerationContext {
    diagnostics: Vec<Diagnostic>,
}

impl GenerationContext {
    /// Create an empty generation context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a warning diagnostic.
    pub fn add_warning(&mut self, plugin: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(plugin, message));
    }

    /// Add an info diagnostic.
    pub fn add_info(&mut self, plugin: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(plugin, message));
    }

    /// All diagnostics in the order they were recorded.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    /// Count the number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
            .count()
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }
}
