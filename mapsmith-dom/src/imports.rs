//! Ordered import sets for compilation units.

use indexmap::IndexSet;

use crate::JavaType;

/// The set of imported type names owned by a compilation unit.
///
/// Insertion order is preserved for mutation bookkeeping; rendering sorts
/// the names so output stays deterministic regardless of pass order.
#[derive(Debug, Clone, Default)]
pub struct ImportList {
    types: IndexSet<String>,
}

impl ImportList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import for the given type and, recursively, its type
    /// arguments. Primitives and `java.lang` types are skipped.
    pub fn add(&mut self, ty: &JavaType) {
        if ty.requires_import() {
            self.types.insert(ty.fully_qualified().to_string());
        }
        for argument in ty.type_arguments() {
            self.add(argument);
        }
    }

    /// Remove an import by its fully qualified name. Returns true if it
    /// was present.
    pub fn remove(&mut self, fully_qualified: &str) -> bool {
        self.types.shift_remove(fully_qualified)
    }

    /// Returns true if the fully qualified name is imported.
    pub fn contains(&self, fully_qualified: &str) -> bool {
        self.types.contains(fully_qualified)
    }

    /// The imported names in sorted order, ready for rendering.
    pub fn sorted(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
