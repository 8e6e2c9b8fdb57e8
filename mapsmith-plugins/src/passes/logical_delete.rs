//! Logical-delete method synthesis for mapper interfaces.

use mapsmith_dom::{Interface, JavaType, Method, Parameter};
use mapsmith_meta::{ColumnMetadata, TableMetadata, calculate_field_name, valid_property_name};

use crate::{GenerationContext, Plugin};

/// The column that carries the logical-delete flag.
const DELETE_FLAG_COLUMN: &str = "delete_flg";

/// Synthesizes `selectByPrimaryKeyNotDeleted` and
/// `deleteByPrimaryKeyLogically` on the mapper interface of any table that
/// has both a primary key and a `delete_flg` column. Tables missing either
/// precondition get a warning and are otherwise left untouched.
///
/// Parameters are named `{property}_` to dodge collisions with the column
/// fields referenced in the same lambda; a later style pass rewrites them
/// to readable names together with the body lines.
#[derive(Default)]
pub struct LogicalDeletePlugin {
    has_primary_key: bool,
    delete_flag_column: Option<ColumnMetadata>,
}

impl Plugin for LogicalDeletePlugin {
    fn name(&self) -> &'static str {
        "logical-delete"
    }

    fn initialized(&mut self, table: &TableMetadata, ctx: &mut GenerationContext) {
        self.has_primary_key = table.has_primary_key_columns();
        if !self.has_primary_key {
            ctx.add_warning(
                self.name(),
                format!(
                    "{} has no primary key, logical delete methods are not generated",
                    table.table()
                ),
            );
        }
        self.delete_flag_column = table.get_column(DELETE_FLAG_COLUMN).cloned();
        if self.delete_flag_column.is_none() {
            ctx.add_warning(
                self.name(),
                format!(
                    "{}.{DELETE_FLAG_COLUMN} does not exist, logical delete methods are not generated",
                    table.table()
                ),
            );
        }
    }

    fn client_generated(
        &mut self,
        interface: &mut Interface,
        table: &TableMetadata,
        _ctx: &mut GenerationContext,
    ) -> bool {
        let Some(flag_column) = self.delete_flag_column.clone() else {
            return true;
        };
        if !self.has_primary_key {
            return true;
        }
        let table_field_name = valid_property_name(&table.table().domain_object_name());
        let flag_field = calculate_field_name(&table_field_name, &flag_column);

        add_select_not_deleted(interface, table, &table_field_name, &flag_field);
        add_delete_logically(interface, table, &table_field_name, &flag_field);
        true
    }
}

/// ```java
/// default Optional<Department> selectByPrimaryKeyNotDeleted(Integer id_) {
///   return selectOne(c -> c
///       .where(id, isEqualTo(id_))
///       .and(deleteFlg, isEqualTo("1"))
///   );
/// }
/// ```
fn add_select_not_deleted(
    interface: &mut Interface,
    table: &TableMetadata,
    table_field_name: &str,
    flag_field: &str,
) {
    interface.add_static_import("org.mybatis.dynamic.sql.SqlBuilder.*");

    let return_type =
        JavaType::new("java.util.Optional").with_argument(JavaType::new(table.base_record_type()));
    interface.add_imported_type(&return_type);

    let mut method = Method::new("selectByPrimaryKeyNotDeleted");
    method.set_default(true);
    method.set_return_type(return_type);

    method.add_body_line("return selectOne(c -> c");
    add_primary_key_predicate(interface, table, &mut method, table_field_name);
    method.add_body_line(format!("    .and({flag_field}, isEqualTo(\"1\"))"));
    method.add_body_line(");");
    interface.add_method(method);
}

/// ```java
/// default int deleteByPrimaryKeyLogically(Integer id_) {
///   return update(c -> c
///       .set(deleteFlg).equalTo("1")
///       .where(id, isEqualTo(id_))
///       .and(deleteFlg, isEqualTo("0"))
///   );
/// }
/// ```
fn add_delete_logically(
    interface: &mut Interface,
    table: &TableMetadata,
    table_field_name: &str,
    flag_field: &str,
) {
    interface.add_imported_type(&JavaType::new(table.base_record_type()));

    let mut method = Method::new("deleteByPrimaryKeyLogically");
    method.set_default(true);
    method.set_return_type(JavaType::int());

    method.add_body_line("return update(c -> c");
    method.add_body_line(format!("    .set({flag_field}).equalTo(\"1\")"));
    add_primary_key_predicate(interface, table, &mut method, table_field_name);
    method.add_body_line(format!("    .and({flag_field}, isEqualTo(\"0\"))"));
    method.add_body_line(");");
    interface.add_method(method);
}

/// Equality predicate over every primary-key column, one parameter per
/// column. The first column opens with `.where`, the rest chain `.and`.
fn add_primary_key_predicate(
    interface: &mut Interface,
    table: &TableMetadata,
    method: &mut Method,
    table_field_name: &str,
) {
    let mut first = true;
    for column in table.primary_key_columns() {
        let field_name = calculate_field_name(table_field_name, column);
        let column_type = JavaType::new(column.java_type());
        interface.add_imported_type(&column_type);
        method.add_parameter(Parameter::new(column_type, format!("{}_", column.property())));
        let keyword = if first { "where" } else { "and" };
        first = false;
        method.add_body_line(format!(
            "    .{keyword}({field_name}, isEqualTo({}_))",
            column.property()
        ));
    }
}

#[cfg(test)]
mod tests {
    use mapsmith_meta::FullyQualifiedTable;

    use super::*;

    fn department() -> TableMetadata {
        TableMetadata::new(
            FullyQualifiedTable::new("department"),
            "com.example.dao.model.Department",
        )
        .column(ColumnMetadata::new("id", "java.lang.Integer").primary_key())
        .column(ColumnMetadata::new("name", "java.lang.String"))
        .column(ColumnMetadata::new("delete_flg", "java.lang.String"))
    }

    fn run(table: &TableMetadata) -> (Interface, GenerationContext) {
        let mut ctx = GenerationContext::new();
        let mut plugin = LogicalDeletePlugin::default();
        plugin.initialized(table, &mut ctx);
        let mut interface = Interface::new(JavaType::new("com.example.dao.DepartmentMapper"));
        assert!(plugin.client_generated(&mut interface, table, &mut ctx));
        (interface, ctx)
    }

    #[test]
    fn test_select_not_deleted_shape() {
        let (interface, ctx) = run(&department());

        assert!(!ctx.has_warnings());
        let select = &interface.methods()[0];
        assert_eq!(select.name(), "selectByPrimaryKeyNotDeleted");
        assert!(select.is_default());
        assert_eq!(
            select.return_type().map(JavaType::short_name_with_arguments),
            Some("Optional<Department>".to_string())
        );
        assert_eq!(select.parameters()[0].name(), "id_");
        assert_eq!(
            select.body_lines(),
            [
                "return selectOne(c -> c",
                "    .where(id, isEqualTo(id_))",
                "    .and(deleteFlg, isEqualTo(\"1\"))",
                ");",
            ]
        );
        assert!(
            interface
                .static_imports()
                .any(|i| i == "org.mybatis.dynamic.sql.SqlBuilder.*")
        );
        assert!(interface.imports().contains("java.util.Optional"));
        assert!(interface.imports().contains("com.example.dao.model.Department"));
    }

    #[test]
    fn test_delete_logically_shape() {
        let (interface, _ctx) = run(&department());

        let delete = &interface.methods()[1];
        assert_eq!(delete.name(), "deleteByPrimaryKeyLogically");
        assert!(delete.is_default());
        assert_eq!(delete.return_type().map(JavaType::fully_qualified), Some("int"));
        assert_eq!(
            delete.body_lines(),
            [
                "return update(c -> c",
                "    .set(deleteFlg).equalTo(\"1\")",
                "    .where(id, isEqualTo(id_))",
                "    .and(deleteFlg, isEqualTo(\"0\"))",
                ");",
            ]
        );
    }

    #[test]
    fn test_composite_key_folds_where_then_and() {
        let table = TableMetadata::new(
            FullyQualifiedTable::new("employment"),
            "com.example.dao.model.Employment",
        )
        .column(ColumnMetadata::new("company_id", "java.lang.Integer").primary_key())
        .column(ColumnMetadata::new("employee_id", "java.lang.Integer").primary_key())
        .column(ColumnMetadata::new("delete_flg", "java.lang.String"));

        let (interface, _ctx) = run(&table);
        let select = &interface.methods()[0];
        assert_eq!(select.parameters().len(), 2);
        assert_eq!(select.parameters()[0].name(), "companyId_");
        assert_eq!(select.parameters()[1].name(), "employeeId_");
        assert_eq!(select.body_lines()[1], "    .where(companyId, isEqualTo(companyId_))");
        assert_eq!(select.body_lines()[2], "    .and(employeeId, isEqualTo(employeeId_))");
    }

    #[test]
    fn test_no_primary_key_warns_and_skips() {
        let table = TableMetadata::new(
            FullyQualifiedTable::new("audit_log"),
            "com.example.dao.model.AuditLog",
        )
        .column(ColumnMetadata::new("delete_flg", "java.lang.String"));

        let (interface, ctx) = run(&table);
        assert!(interface.methods().is_empty());
        assert_eq!(ctx.warning_count(), 1);
        assert!(
            ctx.warnings()
                .next()
                .is_some_and(|w| w.message.contains("no primary key"))
        );
    }

    #[test]
    fn test_no_delete_flag_warns_and_skips() {
        let table = TableMetadata::new(
            FullyQualifiedTable::new("department"),
            "com.example.dao.model.Department",
        )
        .column(ColumnMetadata::new("id", "java.lang.Integer").primary_key());

        let (interface, ctx) = run(&table);
        assert!(interface.methods().is_empty());
        assert_eq!(ctx.warning_count(), 1);
        assert!(
            ctx.warnings()
                .next()
                .is_some_and(|w| w.message.contains("delete_flg does not exist"))
        );
    }

    #[test]
    fn test_colliding_field_name_qualified_through_table() {
        // A column whose property equals the table field name must be
        // referenced through the table definition constant.
        let table = TableMetadata::new(
            FullyQualifiedTable::new("department"),
            "com.example.dao.model.Department",
        )
        .column(ColumnMetadata::new("department", "java.lang.String").primary_key())
        .column(ColumnMetadata::new("delete_flg", "java.lang.String"));

        let (interface, _ctx) = run(&table);
        let select = &interface.methods()[0];
        assert_eq!(
            select.body_lines()[1],
            "    .where(department.department, isEqualTo(department_))"
        );
    }
}
