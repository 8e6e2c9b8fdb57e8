//! Javadoc synthesis from table and column remarks.

use mapsmith_dom::{Field, Interface, JavaElement, TopLevelClass};
use mapsmith_meta::{ColumnMetadata, TableMetadata, valid_property_name};

use crate::{GenerationContext, Plugin};

/// The fully qualified name of the generator's auto-generated marker.
const GENERATED_IMPORT: &str = "javax.annotation.Generated";

/// Attaches javadoc derived from table/column remarks to every generated
/// artifact and strips the generator's `@Generated` marker, which would
/// otherwise suppress the custom documentation downstream.
///
/// Absent remarks are warnings, never failures: the doc block is still
/// attached with empty text.
#[derive(Default)]
pub struct CommentPlugin {
    table_remarks: String,
}

impl CommentPlugin {
    fn strip_generated(element: &mut impl JavaElement) {
        element.remove_annotations_where(|a| a.starts_with("@Generated"));
    }

    /// Javadoc for a column-definition constant, composed from the table
    /// remarks and the matching column's remarks. Fields matching no
    /// column are silently skipped.
    fn add_column_field_doc(&self, field: &mut Field, columns: &[ColumnMetadata]) {
        if let Some(column) = columns.iter().find(|c| c.property() == field.name()) {
            field.add_doc_line(format!(
                "/** {}.{}. */",
                self.table_remarks,
                column.column_remarks()
            ));
        }
    }
}

impl Plugin for CommentPlugin {
    fn name(&self) -> &'static str {
        "comment"
    }

    fn initialized(&mut self, table: &TableMetadata, ctx: &mut GenerationContext) {
        self.table_remarks = table.table_remarks().to_string();

        if !table.has_remarks() {
            ctx.add_warning(
                self.name(),
                format!(
                    "{} has no table comment, javadoc falls back to empty text",
                    table.table()
                ),
            );
        }
        for column in table.columns() {
            if !column.has_remarks() {
                ctx.add_warning(
                    self.name(),
                    format!(
                        "{}.{} has no column comment, javadoc falls back to empty text",
                        table.table(),
                        column.actual_name()
                    ),
                );
            }
        }
    }

    fn model_record_class_generated(
        &mut self,
        class: &mut TopLevelClass,
        _table: &TableMetadata,
        _ctx: &mut GenerationContext,
    ) -> bool {
        class.add_doc_line("/**");
        class.add_doc_line(format!(" * {} entity.", self.table_remarks));
        class.add_doc_line(" */");
        class.remove_imported_type(GENERATED_IMPORT);
        true
    }

    fn model_field_generated(
        &mut self,
        field: &mut Field,
        column: &ColumnMetadata,
        _table: &TableMetadata,
        _ctx: &mut GenerationContext,
    ) -> bool {
        field.add_doc_line(format!("/** {}. */", column.column_remarks()));
        Self::strip_generated(field);
        true
    }

    fn support_class_generated(
        &mut self,
        class: &mut TopLevelClass,
        table: &TableMetadata,
        _ctx: &mut GenerationContext,
    ) -> bool {
        class.add_doc_line("/**");
        class.add_doc_line(format!(" * {} dynamic SQL support.", self.table_remarks));
        class.add_doc_line(" */");
        class.remove_imported_type(GENERATED_IMPORT);

        // The table-definition constant comes first; only the fields after
        // it are column-definition constants documented via column matching.
        // The table field itself may share a name with a column property, so
        // it must stay out of the matching loop.
        let table_field_name = valid_property_name(&table.table().domain_object_name());
        if let Some(position) = class
            .fields()
            .iter()
            .position(|f| f.name() == table_field_name)
        {
            let table_field = &mut class.fields_mut()[position];
            table_field.add_doc_line(format!("/** {} table definition. */", self.table_remarks));
            Self::strip_generated(table_field);
            for field in &mut class.fields_mut()[position + 1..] {
                Self::strip_generated(field);
                self.add_column_field_doc(field, table.columns());
            }
        }

        if let Some(inner) = class.inner_classes_mut().first_mut() {
            inner.add_doc_line("/**");
            inner.add_doc_line(format!(" * {} table definition class.", self.table_remarks));
            inner.add_doc_line(" */");
            Self::strip_generated(inner);
            for field in inner.fields_mut() {
                self.add_column_field_doc(field, table.columns());
            }
        }
        true
    }

    fn client_generated(
        &mut self,
        interface: &mut Interface,
        _table: &TableMetadata,
        _ctx: &mut GenerationContext,
    ) -> bool {
        interface.add_doc_line("/**");
        interface.add_doc_line(format!(" * {} mapper interface.", self.table_remarks));
        interface.add_doc_line(" */");

        for method in interface.methods_mut() {
            method.add_doc_line("/**");
            method.add_doc_line(" * Auto-generated method.");
            let parameter_names: Vec<String> = method
                .parameters()
                .iter()
                .map(|p| p.name().to_string())
                .collect();
            for name in parameter_names {
                method.add_doc_line(format!(" * @{name} {name}"));
            }
            method.add_doc_line(" */");
            Self::strip_generated(method);
        }

        for field in interface.fields_mut() {
            if field.ty().short_name() == "BasicColumn[]" {
                field.add_doc_line(format!("/** {} column set. */", self.table_remarks));
            }
            Self::strip_generated(field);
        }
        interface.remove_imported_type(GENERATED_IMPORT);
        true
    }
}
