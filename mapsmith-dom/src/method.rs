//! Generated methods and their parameters.

use crate::{CodeBuilder, JavaType, Visibility, element::impl_java_element};

/// A method parameter.
#[derive(Debug, Clone)]
pub struct Parameter {
    ty: JavaType,
    name: String,
    doc_lines: Vec<String>,
    annotations: Vec<String>,
}

impl_java_element!(Parameter);

impl Parameter {
    pub fn new(ty: JavaType, name: impl Into<String>) -> Self {
        Self {
            ty,
            name: name.into(),
            doc_lines: Vec::new(),
            annotations: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the parameter. Callers renaming a parameter must rewrite the
    /// owning method's body lines to match, or the generated source refers
    /// to a name that no longer exists.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn ty(&self) -> &JavaType {
        &self.ty
    }

    /// The parameter as it appears in a method signature.
    pub fn render(&self) -> String {
        let mut rendered = String::new();
        for annotation in &self.annotations {
            rendered.push_str(annotation);
            rendered.push(' ');
        }
        rendered.push_str(&self.ty.short_name_with_arguments());
        rendered.push(' ');
        rendered.push_str(&self.name);
        rendered
    }
}

/// A generated method: parameters, an optional return type, and an ordered
/// sequence of body-text lines.
///
/// A method without body lines renders as an abstract declaration; a
/// method marked `default` renders with its body, interface-style.
#[derive(Debug, Clone)]
pub struct Method {
    name: String,
    visibility: Visibility,
    is_default: bool,
    return_type: Option<JavaType>,
    parameters: Vec<Parameter>,
    body_lines: Vec<String>,
    doc_lines: Vec<String>,
    annotations: Vec<String>,
}

impl_java_element!(Method);

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Default,
            is_default: false,
            return_type: None,
            parameters: Vec::new(),
            body_lines: Vec::new(),
            doc_lines: Vec::new(),
            annotations: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    /// Mark this method as a `default` interface method.
    pub fn set_default(&mut self, is_default: bool) {
        self.is_default = is_default;
    }

    pub fn is_default(&self) -> bool {
        self.is_default
    }

    pub fn set_return_type(&mut self, ty: JavaType) {
        self.return_type = Some(ty);
    }

    pub fn return_type(&self) -> Option<&JavaType> {
        self.return_type.as_ref()
    }

    pub fn add_parameter(&mut self, parameter: Parameter) {
        self.parameters.push(parameter);
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn parameters_mut(&mut self) -> &mut Vec<Parameter> {
        &mut self.parameters
    }

    pub fn add_body_line(&mut self, line: impl Into<String>) {
        self.body_lines.push(line.into());
    }

    pub fn body_lines(&self) -> &[String] {
        &self.body_lines
    }

    pub fn body_lines_mut(&mut self) -> &mut Vec<String> {
        &mut self.body_lines
    }

    fn signature(&self) -> String {
        let parameters = self
            .parameters
            .iter()
            .map(Parameter::render)
            .collect::<Vec<_>>()
            .join(", ");
        let return_type = match &self.return_type {
            Some(ty) => ty.short_name_with_arguments(),
            None => "void".to_string(),
        };
        format!(
            "{}{}{} {}({})",
            self.visibility.as_prefix(),
            if self.is_default { "default " } else { "" },
            return_type,
            self.name,
            parameters
        )
    }

    /// Render the method, including doc lines and annotations. Abstract
    /// methods (no body) render as a single declaration line.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        let builder = self.doc_lines.iter().fold(builder, |b, line| b.line(line));
        let builder = self.annotations.iter().fold(builder, |b, a| b.line(a));

        if self.body_lines.is_empty() && !self.is_default {
            return builder.line(&format!("{};", self.signature()));
        }
        let builder = builder.line(&format!("{} {{", self.signature())).indent();
        self.body_lines
            .iter()
            .fold(builder, |b, line| b.line(line))
            .dedent()
            .line("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JavaElement;

    #[test]
    fn test_render_abstract_method() {
        let mut method = Method::new("selectByPrimaryKey");
        method.set_return_type(
            JavaType::new("java.util.Optional")
                .with_argument(JavaType::new("com.example.dao.model.Department")),
        );
        method.add_parameter(Parameter::new(JavaType::new("java.lang.Integer"), "id_"));
        assert_eq!(
            method.render(CodeBuilder::java()).build(),
            "Optional<Department> selectByPrimaryKey(Integer id_);\n"
        );
    }

    #[test]
    fn test_render_default_method_with_body() {
        let mut method = Method::new("deleteByPrimaryKeyLogically");
        method.set_default(true);
        method.set_return_type(JavaType::int());
        method.add_parameter(Parameter::new(JavaType::new("java.lang.Integer"), "id_"));
        method.add_body_line("return update(c -> c");
        method.add_body_line("    .set(deleteFlg).equalTo(\"1\")");
        method.add_body_line(");");
        let rendered = method.render(CodeBuilder::java()).build();
        assert!(rendered.starts_with("default int deleteByPrimaryKeyLogically(Integer id_) {\n"));
        assert!(rendered.contains("  return update(c -> c\n"));
        assert!(rendered.ends_with("  );\n}\n"));
    }

    #[test]
    fn test_render_doc_lines_precede_signature() {
        let mut method = Method::new("insert");
        method.set_return_type(JavaType::int());
        method.add_doc_line("/**");
        method.add_doc_line(" * Auto-generated method.");
        method.add_doc_line(" */");
        let rendered = method.render(CodeBuilder::java()).build();
        assert_eq!(rendered, "/**\n * Auto-generated method.\n */\nint insert();\n");
    }

    #[test]
    fn test_parameter_render_with_annotation() {
        let mut parameter = Parameter::new(JavaType::new("java.lang.String"), "name_");
        parameter.add_annotation("@Nullable");
        assert_eq!(parameter.render(), "@Nullable String name_");
    }
}
