//! Code builder utility for generating properly indented source text.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 2-space indentation, the house style of the generated Java.
    pub const JAVA: Self = Self::Spaces(2);

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            // Fallback to 4 whitespaces
            Self::Spaces(_) => "    ",
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JAVA
    }
}

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use mapsmith_dom::CodeBuilder;
///
/// let code = CodeBuilder::java()
///     .line("public interface Foo {")
///     .indent()
///     .line("int bar();")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "public interface Foo {\n  int bar();\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 2-space indentation (Java default).
    pub fn java() -> Self {
        Self::new(Indent::JAVA)
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::java()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::java().line("int x = 1;").build();
        assert_eq!(code, "int x = 1;\n");
    }

    #[test]
    fn test_indentation() {
        let code = CodeBuilder::java()
            .line("class Foo {")
            .indent()
            .line("int x;")
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "class Foo {\n  int x;\n}\n");
    }

    #[test]
    fn test_blank_line() {
        let code = CodeBuilder::java()
            .line("package com.example;")
            .blank()
            .line("class Foo {}")
            .build();

        assert_eq!(code, "package com.example;\n\nclass Foo {}\n");
    }

    #[test]
    fn test_conditional() {
        let with_anno = CodeBuilder::java()
            .when(true, |b| b.line("@Deprecated"))
            .line("class Foo {}")
            .build();

        let without_anno = CodeBuilder::java()
            .when(false, |b| b.line("@Deprecated"))
            .line("class Foo {}")
            .build();

        assert_eq!(with_anno, "@Deprecated\nclass Foo {}\n");
        assert_eq!(without_anno, "class Foo {}\n");
    }

    #[test]
    fn test_each() {
        let code = CodeBuilder::java()
            .line("enum Color {")
            .indent()
            .each(["RED", "GREEN", "BLUE"], |b, color| {
                b.line(&format!("{},", color))
            })
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "enum Color {\n  RED,\n  GREEN,\n  BLUE,\n}\n");
    }

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Spaces(2).as_str(), "  ");
        assert_eq!(Indent::Spaces(4).as_str(), "    ");
        assert_eq!(Indent::Tab.as_str(), "\t");
        assert_eq!(Indent::default(), Indent::JAVA);
    }
}
