//! Lombok annotation injection for record classes.

use mapsmith_dom::{JavaElement, JavaType, Method, TopLevelClass};
use mapsmith_meta::{ColumnMetadata, TableMetadata};

use crate::{GenerationContext, Plugin};

/// Replaces hand-written accessors on record classes with Lombok: the
/// class gains `@Data` and `@EqualsAndHashCode(callSuper = true)` plus the
/// matching imports, and every getter and setter is suppressed so Lombok
/// generates them at compile time instead.
pub struct LombokPlugin;

impl Plugin for LombokPlugin {
    fn name(&self) -> &'static str {
        "lombok"
    }

    fn model_record_class_generated(
        &mut self,
        class: &mut TopLevelClass,
        _table: &TableMetadata,
        _ctx: &mut GenerationContext,
    ) -> bool {
        class.add_imported_type(&JavaType::new("lombok.Data"));
        class.add_imported_type(&JavaType::new("lombok.EqualsAndHashCode"));
        class.add_annotation("@Data");
        class.add_annotation("@EqualsAndHashCode(callSuper = true)");
        true
    }

    fn model_getter_generated(
        &mut self,
        _method: &mut Method,
        _column: &ColumnMetadata,
        _table: &TableMetadata,
        _ctx: &mut GenerationContext,
    ) -> bool {
        false
    }

    fn model_setter_generated(
        &mut self,
        _method: &mut Method,
        _column: &ColumnMetadata,
        _table: &TableMetadata,
        _ctx: &mut GenerationContext,
    ) -> bool {
        false
    }
}
