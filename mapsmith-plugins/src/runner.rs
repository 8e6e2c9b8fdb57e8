//! Plugin chain orchestration and event dispatch.

use mapsmith_dom::{Field, Interface, Method, TopLevelClass};
use mapsmith_meta::{ColumnMetadata, TableMetadata};

use crate::{
    GenerationContext, Plugin,
    passes::{CodeStylePlugin, CommentPlugin, LogicalDeletePlugin, LombokPlugin},
};

/// A single artifact-generation event, carrying the mutable artifact the
/// plugins may rewrite in place.
pub enum GenerationEvent<'a> {
    /// The record (model) class has been generated.
    RecordClass(&'a mut TopLevelClass),
    /// A field has been generated on the record class.
    RecordField {
        field: &'a mut Field,
        column: &'a ColumnMetadata,
    },
    /// A getter has been generated for a record-class field.
    Getter {
        method: &'a mut Method,
        column: &'a ColumnMetadata,
    },
    /// A setter has been generated for a record-class field.
    Setter {
        method: &'a mut Method,
        column: &'a ColumnMetadata,
    },
    /// The dynamic SQL support class has been generated.
    SupportClass(&'a mut TopLevelClass),
    /// The mapper (client) interface has been generated.
    Client(&'a mut Interface),
}

/// An ordered chain of plugins sharing one artifact tree per table.
///
/// The host builds the tree, then calls [`PluginChain::initialize`] once
/// per table and [`PluginChain::dispatch`] per artifact event. Dispatch
/// short-circuits: the first plugin returning `false` suppresses the
/// artifact and later plugins are not consulted.
///
/// # Example
///
/// ```ignore
/// let mut chain = PluginChain::standard();
/// chain.initialize(&table, &mut ctx);
/// chain.dispatch(GenerationEvent::Client(&mut mapper), &table, &mut ctx);
/// ```
#[derive(Default)]
pub struct PluginChain {
    plugins: Vec<Box<dyn Plugin>>,
}

impl PluginChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a plugin to the chain.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// The standard chain in the host's fixed order: logical-delete
    /// synthesis, style normalization, comment synthesis, accessor
    /// suppression. Style runs after synthesis so the new methods are
    /// sorted and renamed with everything else; comments run after style
    /// so parameter docs use the final names.
    pub fn standard() -> Self {
        Self::new()
            .plugin(LogicalDeletePlugin::default())
            .plugin(CodeStylePlugin)
            .plugin(CommentPlugin::default())
            .plugin(LombokPlugin)
    }

    /// The number of registered plugins.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Run every plugin's `initialized` hook for a new table.
    pub fn initialize(&mut self, table: &TableMetadata, ctx: &mut GenerationContext) {
        for plugin in &mut self.plugins {
            plugin.initialized(table, ctx);
        }
    }

    /// Dispatch one artifact event to every plugin in order. Returns the
    /// combined continuation signal.
    pub fn dispatch(
        &mut self,
        event: GenerationEvent<'_>,
        table: &TableMetadata,
        ctx: &mut GenerationContext,
    ) -> bool {
        match event {
            GenerationEvent::RecordClass(class) => self
                .plugins
                .iter_mut()
                .all(|p| p.model_record_class_generated(class, table, ctx)),
            GenerationEvent::RecordField { field, column } => self
                .plugins
                .iter_mut()
                .all(|p| p.model_field_generated(field, column, table, ctx)),
            GenerationEvent::Getter { method, column } => self
                .plugins
                .iter_mut()
                .all(|p| p.model_getter_generated(method, column, table, ctx)),
            GenerationEvent::Setter { method, column } => self
                .plugins
                .iter_mut()
                .all(|p| p.model_setter_generated(method, column, table, ctx)),
            GenerationEvent::SupportClass(class) => self
                .plugins
                .iter_mut()
                .all(|p| p.support_class_generated(class, table, ctx)),
            GenerationEvent::Client(interface) => self
                .plugins
                .iter_mut()
                .all(|p| p.client_generated(interface, table, ctx)),
        }
    }
}
