//! Ordered container of code objects.

use std::fmt;

use crate::formatter::Formatter;
use crate::tree::{CodeText, Node};

/// Ordered container of code objects, stringified on demand.
///
/// Children are joined with the formatter's separator. Lazy children are
/// re-evaluated on every render, so the output always reflects the current
/// state of every referenced construct.
#[derive(Debug, Clone, Default)]
pub struct CodeWriter {
    nodes: Vec<Node>,
    formatter: Formatter,
}

impl CodeWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_formatter(formatter: Formatter) -> Self {
        Self {
            nodes: Vec::new(),
            formatter,
        }
    }

    /// Append a child: literal text, a text block, a lazy reference, or a
    /// construct (wrapped lazily via its `From<&_> for Node` conversion).
    pub fn add(&mut self, item: impl Into<Node>) {
        self.nodes.push(item.into());
    }

    /// Splice another writer's children into this one, in order. The other
    /// writer is not nested; lazy children stay bound to their constructs.
    pub fn append(&mut self, other: &CodeWriter) {
        self.nodes.extend(other.nodes.iter().cloned());
    }

    /// Clear all children in place. Constructs referenced from other
    /// containers are unaffected.
    pub fn empty(&mut self) {
        self.nodes.clear();
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Render with this writer's own formatter.
    pub fn render(&self) -> String {
        self.render_at(&self.formatter, 0)
    }

    /// Render against an explicit formatting context and indent level.
    pub fn render_at(&self, formatter: &Formatter, level: usize) -> String {
        let parts: Vec<String> = self
            .nodes
            .iter()
            .map(|node| node.render(formatter, level))
            .collect();
        parts.join(formatter.separator())
    }

    /// Prepend nothing, append a comment block stating that the output was
    /// generated, by which tool, and under which license.
    pub fn add_generated_banner(&mut self, license: Option<&str>, authors: &[&str]) {
        let mut text = CodeText::new("/*");
        text.push(format!(
            "This code was automatically generated using quill {}",
            env!("CARGO_PKG_VERSION")
        ));
        text.push(format!(
            "quill source code is available at: {}",
            env!("CARGO_PKG_REPOSITORY")
        ));
        if !authors.is_empty() {
            text.push(format!("Author(s): {}", authors.join(", ")));
        }
        if let Some(license) = license {
            text.push(format!("This code is licensed under: {license}"));
        }
        text.push("*/");
        self.add(text);
    }
}

impl fmt::Display for CodeWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::Indent;
    use crate::tree::LazyString;

    #[test]
    fn test_add_text() {
        let mut w = CodeWriter::new();
        w.add("Line 1");
        w.add("Line 2");
        assert_eq!(w.len(), 2);
        assert_eq!(w.render(), "Line 1\nLine 2");
    }

    #[test]
    fn test_append_splices() {
        let mut a = CodeWriter::new();
        a.add("Line 1");
        let mut b = CodeWriter::new();
        b.add("Line 2");
        a.append(&b);
        assert_eq!(a.len(), 2);
        assert_eq!(a.render(), "Line 1\nLine 2");
    }

    #[test]
    fn test_empty_clears_in_place() {
        let mut w = CodeWriter::new();
        w.add("text");
        w.empty();
        assert!(w.is_empty());
        assert_eq!(w.render(), "");
    }

    #[test]
    fn test_custom_separator() {
        let mut w =
            CodeWriter::with_formatter(Formatter::new(Indent::DEFAULT, "; "));
        w.add("a");
        w.add("b");
        assert_eq!(w.render(), "a; b");
    }

    #[test]
    fn test_generated_banner() {
        let mut w = CodeWriter::new();
        w.add_generated_banner(
            Some("MIT"),
            &["Author_1 <author@mail.com>", "Author 2 <author2@book.com>"],
        );
        let out = w.render();
        assert!(out.starts_with("/*\n"));
        assert!(out.ends_with("\n*/"));
        assert!(out.contains("automatically generated using quill"));
        assert!(out.contains(
            "Author(s): Author_1 <author@mail.com>, Author 2 <author2@book.com>"
        ));
        assert!(out.contains("This code is licensed under: MIT"));
    }

    #[test]
    fn test_banner_without_args() {
        let mut w = CodeWriter::new();
        w.add_generated_banner(None, &[]);
        let out = w.render();
        assert!(!out.contains("Author(s)"));
        assert!(!out.contains("licensed under"));
    }

    #[test]
    fn test_struct_declaration_is_lazy() {
        let s = quill_types::Struct::new("S", [("A", "u8")]).unwrap();
        let mut w = CodeWriter::new();
        w.add(LazyString::declaration(s));
        assert_eq!(w.render(), "struct S {\n    A: u8,\n}");
    }
}
