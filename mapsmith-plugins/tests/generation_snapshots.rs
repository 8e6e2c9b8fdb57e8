//! End-to-end tests for the standard plugin chain.
//!
//! Each test runs the simulated host over a table and checks the rewritten
//! artifact tree, either structurally or as a rendered-source snapshot.
//! Run `cargo insta review` to update snapshots when making intentional
//! changes.

use mapsmith_dom::JavaElement;
use mapsmith_dom::format::{format_class, format_interface};
use mapsmith_meta::{ColumnMetadata, FullyQualifiedTable, TableMetadata};
use mapsmith_plugins::{
    GenerationContext, PluginChain,
    testing::{GeneratedArtifacts, composite_key_table, department_table, generate_table},
};

fn run_standard(table: &TableMetadata) -> (GeneratedArtifacts, GenerationContext) {
    let mut chain = PluginChain::standard();
    let mut ctx = GenerationContext::new();
    let artifacts = generate_table(&mut chain, table, &mut ctx);
    (artifacts, ctx)
}

#[test]
fn test_department_mapper_snapshot() {
    let (artifacts, ctx) = run_standard(&department_table());
    assert!(!ctx.has_warnings());

    let source = format_interface(&artifacts.mapper).expect("mapper renders");
    insta::assert_snapshot!(source, @r#"
    package com.example.dao.model;

    import com.example.dao.model.Department;
    import java.util.Optional;

    import static org.mybatis.dynamic.sql.SqlBuilder.*;

    /**
     * 部门 mapper interface.
     */
    public interface DepartmentMapper {
      /** 部门 column set. */
      static final BasicColumn[] selectList = BasicColumn.columnList(id, name, deleteFlg);

      /**
       * Auto-generated method.
       */
      long count();

      /**
       * Auto-generated method.
       * @idParam idParam
       */
      default int deleteByPrimaryKey(Integer idParam) {
        return delete(c -> c
            .where(id, isEqualTo(idParam))
        );
      }

      /**
       * Auto-generated method.
       * @idParam idParam
       */
      default int deleteByPrimaryKeyLogically(Integer idParam) {
        return update(c -> c
            .set(deleteFlg).equalTo("1")
            .where(id, isEqualTo(idParam))
            .and(deleteFlg, isEqualTo("0"))
        );
      }

      /**
       * Auto-generated method.
       * @row row
       */
      int insert(Department row);

      /**
       * Auto-generated method.
       * @idParam idParam
       */
      default Optional<Department> selectByPrimaryKey(Integer idParam) {
        return selectOne(c -> c
            .where(id, isEqualTo(idParam))
        );
      }

      /**
       * Auto-generated method.
       * @idParam idParam
       */
      default Optional<Department> selectByPrimaryKeyNotDeleted(Integer idParam) {
        return selectOne(c -> c
            .where(id, isEqualTo(idParam))
            .and(deleteFlg, isEqualTo("1"))
        );
      }

      /**
       * Auto-generated method.
       * @row row
       */
      int updateByPrimaryKey(Department row);
    }
    "#);
}

#[test]
fn test_department_record_class_snapshot() {
    let (artifacts, _ctx) = run_standard(&department_table());

    let source = format_class(&artifacts.record_class).expect("record class renders");
    insta::assert_snapshot!(source, @r#"
    package com.example.dao.model;

    import com.example.dao.model.BaseEntity;
    import lombok.Data;
    import lombok.EqualsAndHashCode;

    /**
     * 部门 entity.
     */
    @Data
    @EqualsAndHashCode(callSuper = true)
    public class Department extends BaseEntity {
      /** 主键. */
      private Integer id;

      /** 名称. */
      private String name;

      /** 删除标志. */
      private String deleteFlg;
    }
    "#);
}

#[test]
fn test_department_support_class_snapshot() {
    let (artifacts, _ctx) = run_standard(&department_table());

    let source = format_class(&artifacts.support_class).expect("support class renders");
    insta::assert_snapshot!(source, @r#"
    package com.example.dao.model;

    import org.mybatis.dynamic.sql.SqlColumn;
    import org.mybatis.dynamic.sql.SqlTable;

    /**
     * 部门 dynamic SQL support.
     */
    public class DepartmentDynamicSqlSupport {
      /** 部门 table definition. */
      public static final Department department = new Department();

      /** 部门.主键. */
      public static final SqlColumn<Integer> id = department.id;

      /** 部门.名称. */
      public static final SqlColumn<String> name = department.name;

      /** 部门.删除标志. */
      public static final SqlColumn<String> deleteFlg = department.deleteFlg;

      /**
       * 部门 table definition class.
       */
      public static final class Department extends SqlTable {
        /** 部门.主键. */
        public final SqlColumn<Integer> id = column("id");

        /** 部门.名称. */
        public final SqlColumn<String> name = column("name");

        /** 部门.删除标志. */
        public final SqlColumn<String> deleteFlg = column("delete_flg");
      }
    }
    "#);
}

#[test]
fn test_accessors_suppressed_on_record_class() {
    let (artifacts, _ctx) = run_standard(&department_table());

    assert!(artifacts.record_class.methods().is_empty());
    assert_eq!(
        artifacts.record_class.annotations(),
        ["@Data", "@EqualsAndHashCode(callSuper = true)"]
    );
}

#[test]
fn test_mapper_methods_sorted_and_renamed() {
    let (artifacts, _ctx) = run_standard(&department_table());

    let names: Vec<&str> = artifacts.mapper.methods().iter().map(|m| m.name()).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);

    for method in artifacts.mapper.methods() {
        for parameter in method.parameters() {
            assert!(!parameter.name().contains('_'), "unrenamed: {}", parameter.name());
        }
        for line in method.body_lines() {
            assert!(!line.contains('_'), "unrenamed body line: {line}");
        }
    }
}

#[test]
fn test_generated_markers_stripped_everywhere() {
    let (artifacts, _ctx) = run_standard(&department_table());

    assert!(!artifacts.mapper.imports().contains("javax.annotation.Generated"));
    assert!(!artifacts.record_class.imports().contains("javax.annotation.Generated"));
    assert!(!artifacts.support_class.imports().contains("javax.annotation.Generated"));

    let no_generated = |annotations: &[String]| {
        annotations.iter().all(|a| !a.starts_with("@Generated"))
    };
    for field in artifacts.record_class.fields() {
        assert!(no_generated(field.annotations()));
    }
    for field in artifacts.support_class.fields() {
        assert!(no_generated(field.annotations()));
    }
    for method in artifacts.mapper.methods() {
        assert!(no_generated(method.annotations()));
    }
    for field in artifacts.mapper.fields() {
        assert!(no_generated(field.annotations()));
    }
}

#[test]
fn test_composite_key_predicates_fold_where_then_and() {
    let (artifacts, ctx) = run_standard(&composite_key_table());
    assert!(!ctx.has_warnings());

    let select = artifacts
        .mapper
        .methods()
        .iter()
        .find(|m| m.name() == "selectByPrimaryKeyNotDeleted")
        .expect("synthesized select");
    let params: Vec<&str> = select.parameters().iter().map(|p| p.name()).collect();
    assert_eq!(params, ["companyIdParam", "employeeIdParam"]);
    assert_eq!(
        select.body_lines(),
        [
            "return selectOne(c -> c",
            "    .where(companyId, isEqualTo(companyIdParam))",
            "    .and(employeeId, isEqualTo(employeeIdParam))",
            "    .and(deleteFlg, isEqualTo(\"1\"))",
            ");",
        ]
    );
}

#[test]
fn test_table_without_primary_key_warns_and_skips_synthesis() {
    let table = TableMetadata::new(
        FullyQualifiedTable::new("audit_log"),
        "com.example.dao.model.AuditLog",
    )
    .remarks("审计日志")
    .column(ColumnMetadata::new("message", "java.lang.String").remarks("内容"))
    .column(ColumnMetadata::new("delete_flg", "java.lang.String").remarks("删除标志"));

    let (artifacts, ctx) = run_standard(&table);

    assert!(
        artifacts
            .mapper
            .methods()
            .iter()
            .all(|m| m.name() != "selectByPrimaryKeyNotDeleted"
                && m.name() != "deleteByPrimaryKeyLogically")
    );
    assert_eq!(ctx.warning_count(), 1);
    assert!(
        ctx.warnings()
            .all(|w| w.plugin == "logical-delete" && w.message.contains("no primary key"))
    );
}

#[test]
fn test_table_without_delete_flag_warns_and_skips_synthesis() {
    let table = TableMetadata::new(
        FullyQualifiedTable::new("currency"),
        "com.example.dao.model.Currency",
    )
    .remarks("货币")
    .column(
        ColumnMetadata::new("code", "java.lang.String")
            .remarks("代码")
            .primary_key(),
    );

    let (artifacts, ctx) = run_standard(&table);

    assert!(
        artifacts
            .mapper
            .methods()
            .iter()
            .all(|m| m.name() != "deleteByPrimaryKeyLogically")
    );
    assert_eq!(ctx.warning_count(), 1);
    assert!(ctx.warnings().all(|w| w.message.contains("delete_flg does not exist")));
}

#[test]
fn test_missing_remarks_accumulate_without_aborting() {
    let table = TableMetadata::new(
        FullyQualifiedTable::new("department"),
        "com.example.dao.model.Department",
    )
    .column(
        ColumnMetadata::new("id", "java.lang.Integer").primary_key(),
    )
    .column(ColumnMetadata::new("delete_flg", "java.lang.String"));

    let (artifacts, ctx) = run_standard(&table);

    // Table plus two columns without remarks.
    assert_eq!(ctx.warning_count(), 3);
    assert!(format_interface(&artifacts.mapper).is_ok());
    assert!(format_class(&artifacts.record_class).is_ok());
}
