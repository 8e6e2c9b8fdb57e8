//! Generated top-level and inner classes.

use crate::{
    CodeBuilder, Field, ImportList, JavaType, Method, Visibility, element::impl_java_element,
};

/// A class nested inside a top-level class, such as the table-definition
/// type inside a dynamic SQL support class.
#[derive(Debug, Clone)]
pub struct InnerClass {
    ty: JavaType,
    visibility: Visibility,
    is_static: bool,
    is_final: bool,
    superclass: Option<JavaType>,
    fields: Vec<Field>,
    methods: Vec<Method>,
    doc_lines: Vec<String>,
    annotations: Vec<String>,
}

impl_java_element!(InnerClass);

impl InnerClass {
    pub fn new(ty: JavaType) -> Self {
        Self {
            ty,
            visibility: Visibility::Public,
            is_static: false,
            is_final: false,
            superclass: None,
            fields: Vec::new(),
            methods: Vec::new(),
            doc_lines: Vec::new(),
            annotations: Vec::new(),
        }
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn final_(mut self) -> Self {
        self.is_final = true;
        self
    }

    pub fn superclass(mut self, superclass: JavaType) -> Self {
        self.superclass = Some(superclass);
        self
    }

    pub fn ty(&self) -> &JavaType {
        &self.ty
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

    fn header(&self) -> String {
        let mut header = format!(
            "{}{}{}class {}",
            self.visibility.as_prefix(),
            if self.is_static { "static " } else { "" },
            if self.is_final { "final " } else { "" },
            self.ty.short_name_with_arguments()
        );
        if let Some(superclass) = &self.superclass {
            header.push_str(" extends ");
            header.push_str(&superclass.short_name_with_arguments());
        }
        header.push_str(" {");
        header
    }

    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        let builder = self.doc_lines.iter().fold(builder, |b, line| b.line(line));
        let builder = self.annotations.iter().fold(builder, |b, a| b.line(a));
        let builder = builder.line(&self.header()).indent();
        let builder = render_members(builder, &self.fields, &self.methods, &[]);
        builder.dedent().line("}")
    }
}

/// A generated top-level class: the record class or the dynamic SQL
/// support class. Owns the compilation unit's import list.
#[derive(Debug, Clone)]
pub struct TopLevelClass {
    ty: JavaType,
    superclass: Option<JavaType>,
    imports: ImportList,
    fields: Vec<Field>,
    methods: Vec<Method>,
    inner_classes: Vec<InnerClass>,
    doc_lines: Vec<String>,
    annotations: Vec<String>,
}

impl_java_element!(TopLevelClass);

impl TopLevelClass {
    pub fn new(ty: JavaType) -> Self {
        Self {
            ty,
            superclass: None,
            imports: ImportList::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            inner_classes: Vec::new(),
            doc_lines: Vec::new(),
            annotations: Vec::new(),
        }
    }

    pub fn ty(&self) -> &JavaType {
        &self.ty
    }

    pub fn set_superclass(&mut self, superclass: JavaType) {
        self.imports.add(&superclass);
        self.superclass = Some(superclass);
    }

    pub fn superclass(&self) -> Option<&JavaType> {
        self.superclass.as_ref()
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

    pub fn add_inner_class(&mut self, inner_class: InnerClass) {
        self.inner_classes.push(inner_class);
    }

    pub fn inner_classes(&self) -> &[InnerClass] {
        &self.inner_classes
    }

    pub fn inner_classes_mut(&mut self) -> &mut Vec<InnerClass> {
        &mut self.inner_classes
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
            .each(self.doc_lines.iter(), |b, line| b.line(line))
            .each(self.annotations.iter(), |b, a| b.line(a));

        let mut header = format!("public class {}", self.ty.short_name_with_arguments());
        if let Some(superclass) = &self.superclass {
            header.push_str(" extends ");
            header.push_str(&superclass.short_name_with_arguments());
        }
        header.push_str(" {");

        let builder = builder.line(&header).indent();
        let builder = render_members(builder, &self.fields, &self.methods, &self.inner_classes);
        builder.dedent().line("}")
    }

    /// Build the class as a string.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::java()).build()
    }
}

/// Render fields, methods and inner classes with a blank line between
/// consecutive members.
fn render_members(
    mut builder: CodeBuilder,
    fields: &[Field],
    methods: &[Method],
    inner_classes: &[InnerClass],
) -> CodeBuilder {
    let mut first = true;
    for field in fields {
        if !first {
            builder = builder.blank();
        }
        builder = field.render(builder);
        first = false;
    }
    for method in methods {
        if !first {
            builder = builder.blank();
        }
        builder = method.render(builder);
        first = false;
    }
    for inner_class in inner_classes {
        if !first {
            builder = builder.blank();
        }
        builder = inner_class.render(builder);
        first = false;
    }
    builder
}

pub(crate) fn render_member_blocks(
    builder: CodeBuilder,
    fields: &[Field],
    methods: &[Method],
) -> CodeBuilder {
    render_members(builder, fields, methods, &[])
}
