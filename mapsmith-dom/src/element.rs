//! The shared mutation surface for documentation and annotation markers.

/// An artifact carrying an ordered list of doc lines and an ordered list of
/// annotation markers, both mutable in place.
///
/// Doc lines are stored verbatim (including the `/**` and `*/` delimiters)
/// and rendered above the artifact. Annotation markers are stored as their
/// literal source form (e.g., `@Data`).
pub trait JavaElement {
    /// The documentation lines attached to this artifact, in order.
    fn doc_lines(&self) -> &[String];

    /// Mutable access to the documentation lines.
    fn doc_lines_mut(&mut self) -> &mut Vec<String>;

    /// The annotation markers attached to this artifact, in order.
    fn annotations(&self) -> &[String];

    /// Mutable access to the annotation markers.
    fn annotations_mut(&mut self) -> &mut Vec<String>;

    /// Append a documentation line.
    fn add_doc_line(&mut self, line: impl Into<String>)
    where
        Self: Sized,
    {
        self.doc_lines_mut().push(line.into());
    }

    /// Append an annotation marker.
    fn add_annotation(&mut self, annotation: impl Into<String>)
    where
        Self: Sized,
    {
        self.annotations_mut().push(annotation.into());
    }

    /// Remove every annotation the predicate matches.
    fn remove_annotations_where<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&str) -> bool,
        Self: Sized,
    {
        self.annotations_mut().retain(|a| !predicate(a));
    }
}

/// Implements the [`JavaElement`] accessors for a type holding `doc_lines`
/// and `annotations` fields.
macro_rules! impl_java_element {
    ($ty:ty) => {
        impl crate::JavaElement for $ty {
            fn doc_lines(&self) -> &[String] {
                &self.doc_lines
            }

            fn doc_lines_mut(&mut self) -> &mut Vec<String> {
                &mut self.doc_lines
            }

            fn annotations(&self) -> &[String] {
                &self.annotations
            }

            fn annotations_mut(&mut self) -> &mut Vec<String> {
                &mut self.annotations
            }
        }
    };
}

pub(crate) use impl_java_element;
