//! Fully qualified Java type references.

/// A fully qualified Java type, optionally carrying generic type arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JavaType {
    fully_qualified: String,
    type_arguments: Vec<JavaType>,
}

impl JavaType {
    /// Create a type from its fully qualified name (e.g., "java.util.Optional").
    pub fn new(fully_qualified: impl Into<String>) -> Self {
        Self {
            fully_qualified: fully_qualified.into(),
            type_arguments: Vec::new(),
        }
    }

    /// The primitive `int` type.
    pub fn int() -> Self {
        Self::new("int")
    }

    /// Append a generic type argument.
    pub fn add_type_argument(&mut self, argument: JavaType) {
        self.type_arguments.push(argument);
    }

    /// Builder-style variant of [`JavaType::add_type_argument`].
    pub fn with_argument(mut self, argument: JavaType) -> Self {
        self.add_type_argument(argument);
        self
    }

    /// The fully qualified name, without type arguments.
    pub fn fully_qualified(&self) -> &str {
        &self.fully_qualified
    }

    /// The short name, without package or type arguments
    /// (e.g., "Optional" for "java.util.Optional").
    pub fn short_name(&self) -> &str {
        match self.fully_qualified.rsplit_once('.') {
            Some((_, short)) => short,
            None => &self.fully_qualified,
        }
    }

    /// The short name including rendered type arguments
    /// (e.g., "Optional<Department>").
    pub fn short_name_with_arguments(&self) -> String {
        if self.type_arguments.is_empty() {
            return self.short_name().to_string();
        }
        let arguments = self
            .type_arguments
            .iter()
            .map(|a| a.short_name_with_arguments())
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}<{}>", self.short_name(), arguments)
    }

    /// The package portion of the name, if any.
    pub fn package_name(&self) -> Option<&str> {
        self.fully_qualified.rsplit_once('.').map(|(pkg, _)| pkg)
    }

    /// The generic type arguments.
    pub fn type_arguments(&self) -> &[JavaType] {
        &self.type_arguments
    }

    /// Returns true if referencing this type requires an import statement.
    /// Primitives and `java.lang` types do not.
    pub fn requires_import(&self) -> bool {
        self.fully_qualified.contains('.') && !self.fully_qualified.starts_with("java.lang.")
    }
}

impl std::fmt::Display for JavaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name_with_arguments())
    }
}

/// Java member visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    Public,
    Protected,
    Private,
    /// Package-private, or the implicit visibility of interface members.
    #[default]
    Default,
}

impl Visibility {
    /// The rendered modifier including its trailing space, or "" for default.
    pub fn as_prefix(&self) -> &'static str {
        match self {
            Visibility::Public => "public ",
            Visibility::Protected => "protected ",
            Visibility::Private => "private ",
            Visibility::Default => "",
        }
    }
}
