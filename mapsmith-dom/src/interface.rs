//! Generated mapper interfaces.

use indexmap::IndexSet;

use crate::{
    CodeBuilder, Field, ImportList, JavaType, Method, class::render_member_blocks,
    element::impl_java_element,
};

/// A generated data-access interface: ordered fields and methods plus the
/// compilation unit's imports and static imports.
#[derive(Debug, Clone)]
pub struct Interface {
    ty: JavaType,
    imports: ImportList,
    static_imports: IndexSet<String>,
    fields: Vec<Field>,
    methods: Vec<Method>,
    doc_lines: Vec<String>,
    annotations: Vec<String>,
}

impl_java_element!(Interface);

impl Interface {
    pub fn new(ty: JavaType) -> Self {
        Self {
            ty,
            imports: ImportList::new(),
            static_imports: IndexSet::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            doc_lines: Vec::new(),
            annotations: Vec::new(),
        }
    }

    pub fn ty(&self) -> &JavaType {
        &self.ty
    }

    pub fn add_imported_type(&mut self, ty: &JavaType) {
        self.imports.add(ty);
    }

    pub fn remove_imported_type(&mut self, fully_qualified: &str) -> bool {
        self.imports.remove(fully_qualified)
    }

    pub fn imports(&self) -> &ImportList {
        &self.imports
    }

    /// Add a static import (e.g., `org.mybatis.dynamic.sql.SqlBuilder.*`).
    pub fn add_static_import(&mut self, import: impl Into<String>) {
        self.static_imports.insert(import.into());
    }

    pub fn static_imports(&self) -> impl Iterator<Item = &str> {
        self.static_imports.iter().map(String::as_str)
    }

    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut Vec<Field> {
        &mut self.fields
    }

    pub fn add_method(&mut self, method: Method) {
        self.methods.push(method);
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn methods_mut(&mut self) -> &mut Vec<Method> {
        &mut self.methods
    }

    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        let builder = match self.ty.package_name() {
            Some(package) => builder.line(&format!("package {};", package)).blank(),
            None => builder,
        };
        let builder = builder
            .when(!self.imports.is_empty(), |b| {
                self.imports
                    .sorted()
                    .into_iter()
                    .fold(b, |b, name| b.line(&format!("import {};", name)))
                    .blank()
            })
            .when(!self.static_imports.is_empty(), |b| {
                let mut names: Vec<&str> = self.static_imports.iter().map(String::as_str).collect();
                names.sort_unstable();
                names
                    .into_iter()
                    .fold(b, |b, name| b.line(&format!("import static {};", name)))
                    .blank()
            })
            .each(self.doc_lines.iter(), |b, line| b.line(line))
            .each(self.annotations.iter(), |b, a| b.line(a));

        let builder = builder
            .line(&format!(
                "public interface {} {{",
                self.ty.short_name_with_arguments()
            ))
            .indent();
        let builder = render_member_blocks(builder, &self.fields, &self.methods);
        builder.dedent().line("}")
    }

    /// Build the interface as a string.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::java()).build()
    }
}
