//! A simulated host generator.
//!
//! Builds the per-table artifact tree the way the real generator does,
//! dispatching each artifact event through a [`PluginChain`] as it goes.
//! Used by the integration tests and usable as a harness for trying out
//! plugin combinations.

use mapsmith_dom::{
    Field, InnerClass, Interface, JavaElement, JavaType, Method, Parameter, TopLevelClass,
    Visibility,
};
use mapsmith_meta::{ColumnMetadata, FullyQualifiedTable, TableMetadata, valid_property_name};

use crate::{GenerationContext, GenerationEvent, PluginChain};

/// The marker annotation the host stamps on everything it generates.
const GENERATED_ANNOTATION: &str = "@Generated(\"org.mybatis.generator.api.MyBatisGenerator\")";

const GENERATED_TYPE: &str = "javax.annotation.Generated";

/// The artifact tree produced for one table.
pub struct GeneratedArtifacts {
    pub record_class: TopLevelClass,
    pub support_class: TopLevelClass,
    pub mapper: Interface,
}

/// A department table with remarks on the table and every column, a
/// single-column primary key and a `delete_flg` column.
pub fn department_table() -> TableMetadata {
    TableMetadata::new(
        FullyQualifiedTable::new("department"),
        "com.example.dao.model.Department",
    )
    .remarks("部门")
    .column(
        ColumnMetadata::new("id", "java.lang.Integer")
            .remarks("主键")
            .primary_key(),
    )
    .column(ColumnMetadata::new("name", "java.lang.String").remarks("名称"))
    .column(ColumnMetadata::new("delete_flg", "java.lang.String").remarks("删除标志"))
}

/// An employment table keyed by a two-column composite primary key.
pub fn composite_key_table() -> TableMetadata {
    TableMetadata::new(
        FullyQualifiedTable::new("employment"),
        "com.example.dao.model.Employment",
    )
    .remarks("雇佣关系")
    .column(
        ColumnMetadata::new("company_id", "java.lang.Integer")
            .remarks("公司ID")
            .primary_key(),
    )
    .column(
        ColumnMetadata::new("employee_id", "java.lang.Integer")
            .remarks("员工ID")
            .primary_key(),
    )
    .column(ColumnMetadata::new("delete_flg", "java.lang.String").remarks("删除标志"))
}

/// Generate the artifact tree for one table, dispatching every event
/// through the chain in the host's fixed order: record-class members,
/// record class, support class, mapper interface.
pub fn generate_table(
    chain: &mut PluginChain,
    table: &TableMetadata,
    ctx: &mut GenerationContext,
) -> GeneratedArtifacts {
    chain.initialize(table, ctx);
    GeneratedArtifacts {
        record_class: generate_record_class(chain, table, ctx),
        support_class: generate_support_class(chain, table, ctx),
        mapper: generate_mapper(chain, table, ctx),
    }
}

fn generate_record_class(
    chain: &mut PluginChain,
    table: &TableMetadata,
    ctx: &mut GenerationContext,
) -> TopLevelClass {
    let record_type = JavaType::new(table.base_record_type());
    let mut class = TopLevelClass::new(record_type.clone());
    class.add_imported_type(&JavaType::new(GENERATED_TYPE));
    if let Some(package) = record_type.package_name() {
        class.set_superclass(JavaType::new(format!("{package}.BaseEntity")));
    }

    for column in table.columns() {
        let column_type = JavaType::new(column.java_type());

        let mut field = Field::new(column_type.clone(), column.property())
            .visibility(Visibility::Private);
        field.add_annotation(GENERATED_ANNOTATION);
        if chain.dispatch(
            GenerationEvent::RecordField {
                field: &mut field,
                column,
            },
            table,
            ctx,
        ) {
            class.add_imported_type(&column_type);
            class.add_field(field);
        }

        let mut getter = build_getter(column, &column_type);
        if chain.dispatch(
            GenerationEvent::Getter {
                method: &mut getter,
                column,
            },
            table,
            ctx,
        ) {
            class.add_method(getter);
        }

        let mut setter = build_setter(column, &column_type);
        if chain.dispatch(
            GenerationEvent::Setter {
                method: &mut setter,
                column,
            },
            table,
            ctx,
        ) {
            class.add_method(setter);
        }
    }

    chain.dispatch(GenerationEvent::RecordClass(&mut class), table, ctx);
    class
}

fn build_getter(column: &ColumnMetadata, column_type: &JavaType) -> Method {
    let mut getter = Method::new(format!("get{}", accessor_suffix(column.property())));
    getter.set_visibility(Visibility::Public);
    getter.set_return_type(column_type.clone());
    getter.add_body_line(format!("return {};", column.property()));
    getter.add_annotation(GENERATED_ANNOTATION);
    getter
}

fn build_setter(column: &ColumnMetadata, column_type: &JavaType) -> Method {
    let mut setter = Method::new(format!("set{}", accessor_suffix(column.property())));
    setter.set_visibility(Visibility::Public);
    setter.add_parameter(Parameter::new(column_type.clone(), column.property()));
    setter.add_body_line(format!("this.{0} = {0};", column.property()));
    setter.add_annotation(GENERATED_ANNOTATION);
    setter
}

fn generate_support_class(
    chain: &mut PluginChain,
    table: &TableMetadata,
    ctx: &mut GenerationContext,
) -> TopLevelClass {
    let domain = table.table().domain_object_name();
    let table_field_name = valid_property_name(&domain);
    let mut class = TopLevelClass::new(JavaType::new(format!(
        "{}DynamicSqlSupport",
        table.base_record_type()
    )));
    class.add_imported_type(&JavaType::new(GENERATED_TYPE));
    class.add_imported_type(&JavaType::new("org.mybatis.dynamic.sql.SqlColumn"));
    class.add_imported_type(&JavaType::new("org.mybatis.dynamic.sql.SqlTable"));

    let mut table_field = Field::new(JavaType::new(domain.clone()), &table_field_name)
        .visibility(Visibility::Public)
        .static_()
        .final_()
        .initializer(format!("new {domain}()"));
    table_field.add_annotation(GENERATED_ANNOTATION);
    class.add_field(table_field);

    let mut inner = InnerClass::new(JavaType::new(domain))
        .static_()
        .final_()
        .superclass(JavaType::new("org.mybatis.dynamic.sql.SqlTable"));
    inner.add_annotation(GENERATED_ANNOTATION);

    for column in table.columns() {
        let column_type = JavaType::new("org.mybatis.dynamic.sql.SqlColumn")
            .with_argument(JavaType::new(column.java_type()));
        let mut column_field = Field::new(column_type.clone(), column.property())
            .visibility(Visibility::Public)
            .static_()
            .final_()
            .initializer(format!("{table_field_name}.{}", column.property()));
        column_field.add_annotation(GENERATED_ANNOTATION);
        class.add_field(column_field);

        inner.add_field(
            Field::new(column_type, column.property())
                .visibility(Visibility::Public)
                .final_()
                .initializer(format!("column(\"{}\")", column.actual_name())),
        );
    }
    class.add_inner_class(inner);

    chain.dispatch(GenerationEvent::SupportClass(&mut class), table, ctx);
    class
}

fn generate_mapper(
    chain: &mut PluginChain,
    table: &TableMetadata,
    ctx: &mut GenerationContext,
) -> Interface {
    let record_type = JavaType::new(table.base_record_type());
    let mut mapper = Interface::new(JavaType::new(format!("{}Mapper", table.base_record_type())));
    mapper.add_imported_type(&JavaType::new(GENERATED_TYPE));
    mapper.add_imported_type(&record_type);
    mapper.add_static_import("org.mybatis.dynamic.sql.SqlBuilder.*");

    let mut select_list = Field::new(JavaType::new("BasicColumn[]"), "selectList")
        .static_()
        .final_()
        .initializer(format!(
            "BasicColumn.columnList({})",
            table
                .columns()
                .iter()
                .map(ColumnMetadata::property)
                .collect::<Vec<_>>()
                .join(", ")
        ));
    select_list.add_annotation(GENERATED_ANNOTATION);
    mapper.add_field(select_list);

    // The host emits methods in generation order, not name order.
    let mut insert = Method::new("insert");
    insert.set_return_type(JavaType::int());
    insert.add_parameter(Parameter::new(record_type.clone(), "row"));
    insert.add_annotation(GENERATED_ANNOTATION);
    mapper.add_method(insert);

    let mut update = Method::new("updateByPrimaryKey");
    update.set_return_type(JavaType::int());
    update.add_parameter(Parameter::new(record_type.clone(), "row"));
    update.add_annotation(GENERATED_ANNOTATION);
    mapper.add_method(update);

    if table.has_primary_key_columns() {
        mapper.add_method(build_select_by_primary_key(table, &record_type));
        mapper.add_method(build_delete_by_primary_key(table));
    }

    let mut count = Method::new("count");
    count.set_return_type(JavaType::new("long"));
    count.add_annotation(GENERATED_ANNOTATION);
    mapper.add_method(count);

    chain.dispatch(GenerationEvent::Client(&mut mapper), table, ctx);
    mapper
}

fn build_select_by_primary_key(table: &TableMetadata, record_type: &JavaType) -> Method {
    let mut method = Method::new("selectByPrimaryKey");
    method.set_default(true);
    method.set_return_type(JavaType::new("java.util.Optional").with_argument(record_type.clone()));
    method.add_annotation(GENERATED_ANNOTATION);
    method.add_body_line("return selectOne(c -> c");
    add_primary_key_clause(table, &mut method);
    method.add_body_line(");");
    method
}

fn build_delete_by_primary_key(table: &TableMetadata) -> Method {
    let mut method = Method::new("deleteByPrimaryKey");
    method.set_default(true);
    method.set_return_type(JavaType::int());
    method.add_annotation(GENERATED_ANNOTATION);
    method.add_body_line("return delete(c -> c");
    add_primary_key_clause(table, &mut method);
    method.add_body_line(");");
    method
}

fn add_primary_key_clause(table: &TableMetadata, method: &mut Method) {
    let mut first = true;
    for column in table.primary_key_columns() {
        method.add_parameter(Parameter::new(
            JavaType::new(column.java_type()),
            format!("{}_", column.property()),
        ));
        let keyword = if first { "where" } else { "and" };
        first = false;
        method.add_body_line(format!(
            "    .{keyword}({0}, isEqualTo({0}_))",
            column.property()
        ));
    }
}

fn accessor_suffix(property: &str) -> String {
    let mut chars = property.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
