//! Plugin trait for the generation hook set.

use mapsmith_dom::{Field, Interface, Method, TopLevelClass};
use mapsmith_meta::{ColumnMetadata, TableMetadata};

use crate::GenerationContext;

/// A plugin hooked into the host generator's per-table artifact events.
///
/// The host invokes `initialized` once per table before any artifact hook,
/// then each artifact hook as the corresponding artifact is generated.
/// Artifact hooks return a continuation signal: `true` keeps the artifact,
/// `false` suppresses its generation entirely.
///
/// Plugins may cache per-table state in `initialized`; the same instance is
/// re-initialized for every table, so nothing carries over between tables.
pub trait Plugin {
    /// The name of this plugin (used in diagnostics).
    fn name(&self) -> &'static str;

    /// Called once per table, before any artifact is generated.
    #[allow(unused_variables)]
    fn initialized(&mut self, table: &TableMetadata, ctx: &mut GenerationContext) {}

    /// Called when the record (model) class has been generated.
    #[allow(unused_variables)]
    fn model_record_class_generated(
        &mut self,
        class: &mut TopLevelClass,
        table: &TableMetadata,
        ctx: &mut GenerationContext,
    ) -> bool {
        true
    }

    /// Called for each field generated on the record class.
    #[allow(unused_variables)]
    fn model_field_generated(
        &mut self,
        field: &mut Field,
        column: &ColumnMetadata,
        table: &TableMetadata,
        ctx: &mut GenerationContext,
    ) -> bool {
        true
    }

    /// Called for each getter generated on the record class.
    #[allow(unused_variables)]
    fn model_getter_generated(
        &mut self,
        method: &mut Method,
        column: &ColumnMetadata,
        table: &TableMetadata,
        ctx: &mut GenerationContext,
    ) -> bool {
        true
    }

    /// Called for each setter generated on the record class.
    #[allow(unused_variables)]
    fn model_setter_generated(
        &mut self,
        method: &mut Method,
        column: &ColumnMetadata,
        table: &TableMetadata,
        ctx: &mut GenerationContext,
    ) -> bool {
        true
    }

    /// Called when the dynamic SQL support class has been generated.
    #[allow(unused_variables)]
    fn support_class_generated(
        &mut self,
        class: &mut TopLevelClass,
        table: &TableMetadata,
        ctx: &mut GenerationContext,
    ) -> bool {
        true
    }

    /// Called when the mapper (client) interface has been generated.
    #[allow(unused_variables)]
    fn client_generated(
        &mut self,
        interface: &mut Interface,
        table: &TableMetadata,
        ctx: &mut GenerationContext,
    ) -> bool {
        true
    }
}
