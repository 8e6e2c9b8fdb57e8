//! Generated fields.

use crate::{CodeBuilder, JavaType, Visibility, element::impl_java_element};

/// A generated field on a class or interface.
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    ty: JavaType,
    visibility: Visibility,
    is_static: bool,
    is_final: bool,
    initializer: Option<String>,
    doc_lines: Vec<String>,
    annotations: Vec<String>,
}

impl_java_element!(Field);

impl Field {
    pub fn new(ty: JavaType, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty,
            visibility: Visibility::Default,
            is_static: false,
            is_final: false,
            initializer: None,
            doc_lines: Vec::new(),
            annotations: Vec::new(),
        }
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn final_(mut self) -> Self {
        self.is_final = true;
        self
    }

    pub fn initializer(mut self, initializer: impl Into<String>) -> Self {
        self.initializer = Some(initializer.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &JavaType {
        &self.ty
    }

    /// Render the field declaration, including doc lines and annotations.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        let builder = self.doc_lines.iter().fold(builder, |b, line| b.line(line));
        let builder = self.annotations.iter().fold(builder, |b, a| b.line(a));

        let mut declaration = format!(
            "{}{}{}{} {}",
            self.visibility.as_prefix(),
            if self.is_static { "static " } else { "" },
            if self.is_final { "final " } else { "" },
            self.ty.short_name_with_arguments(),
            self.name
        );
        if let Some(initializer) = &self.initializer {
            declaration.push_str(" = ");
            declaration.push_str(initializer);
        }
        declaration.push(';');
        builder.line(&declaration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JavaElement;

    #[test]
    fn test_render_plain_field() {
        let field = Field::new(JavaType::new("java.lang.Integer"), "id");
        assert_eq!(field.render(CodeBuilder::java()).build(), "Integer id;\n");
    }

    #[test]
    fn test_render_constant_with_initializer() {
        let ty = JavaType::new("org.mybatis.dynamic.sql.SqlColumn")
            .with_argument(JavaType::new("java.lang.Integer"));
        let field = Field::new(ty, "id")
            .visibility(Visibility::Public)
            .static_()
            .final_()
            .initializer("department.id");
        assert_eq!(
            field.render(CodeBuilder::java()).build(),
            "public static final SqlColumn<Integer> id = department.id;\n"
        );
    }

    #[test]
    fn test_render_doc_and_annotations() {
        let mut field = Field::new(JavaType::new("java.lang.String"), "name");
        field.add_doc_line("/** 名称. */");
        field.add_annotation("@Generated(\"...\")");
        let rendered = field.render(CodeBuilder::java()).build();
        assert_eq!(rendered, "/** 名称. */\n@Generated(\"...\")\nString name;\n");
    }
}
