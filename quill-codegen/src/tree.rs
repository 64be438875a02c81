//! Code objects and lazy rendering.
//!
//! The tree has two kinds of children: [`CodeText`] leaves holding literal
//! lines, and [`LazyString`]s holding a shared reference to a construct
//! plus one of its render methods. A lazy child is evaluated fresh on every
//! render, so mutating the referenced construct between renders changes the
//! output of every tree it was inserted into. Nothing is cached.

use std::fmt;
use std::rc::Rc;

use quill_types::Struct;

use crate::formatter::Formatter;

/// Capability for objects that render a standalone declaration.
pub trait Declarable {
    fn declaration(&self, formatter: &Formatter, level: usize) -> String;
}

/// Capability for objects that render a full definition with a body.
pub trait Definable {
    fn definition(&self, formatter: &Formatter, level: usize) -> String;
}

/// A block of literal lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeText {
    lines: Vec<String>,
}

impl CodeText {
    pub fn new(text: impl Into<String>) -> Self {
        let mut this = Self::default();
        this.push(text);
        this
    }

    /// Append text; embedded newlines split into separate lines.
    pub fn push(&mut self, text: impl Into<String>) {
        for line in text.into().split('\n') {
            self.lines.push(line.to_string());
        }
    }

    /// Append an empty line.
    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Append all lines of another text block.
    pub fn extend(&mut self, other: &CodeText) {
        self.lines.extend(other.lines.iter().cloned());
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn render(&self, formatter: &Formatter, level: usize) -> String {
        let pad = formatter.indent_str(level);
        let lines: Vec<String> = self
            .lines
            .iter()
            .map(|line| {
                if line.is_empty() {
                    String::new()
                } else {
                    format!("{pad}{line}")
                }
            })
            .collect();
        lines.join(formatter.separator())
    }
}

impl fmt::Display for CodeText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Formatter::default(), 0))
    }
}

impl From<&str> for CodeText {
    fn from(text: &str) -> Self {
        CodeText::new(text)
    }
}

impl From<String> for CodeText {
    fn from(text: String) -> Self {
        CodeText::new(text)
    }
}

/// A deferred reference to a construct's render method.
///
/// The handle is shared: the same construct may be reachable from many
/// containers, and it lives as long as any of them holds it.
#[derive(Clone)]
pub struct LazyString {
    target: Target,
}

#[derive(Clone)]
enum Target {
    Declaration(Rc<dyn Declarable>),
    Definition(Rc<dyn Definable>),
}

impl LazyString {
    /// Bind to an object's declaration.
    pub fn declaration(of: impl Declarable + 'static) -> Self {
        Self {
            target: Target::Declaration(Rc::new(of)),
        }
    }

    /// Bind to an object's definition.
    pub fn definition(of: impl Definable + 'static) -> Self {
        Self {
            target: Target::Definition(Rc::new(of)),
        }
    }

    /// Invoke the bound render method against the construct's current state.
    pub fn render(&self, formatter: &Formatter, level: usize) -> String {
        match &self.target {
            Target::Declaration(target) => target.declaration(formatter, level),
            Target::Definition(target) => target.definition(formatter, level),
        }
    }
}

impl fmt::Display for LazyString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Formatter::default(), 0))
    }
}

impl fmt::Debug for LazyString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target {
            Target::Declaration(_) => f.write_str("LazyString(declaration)"),
            Target::Definition(_) => f.write_str("LazyString(definition)"),
        }
    }
}

/// A child of a container.
#[derive(Debug, Clone)]
pub enum Node {
    Text(CodeText),
    Lazy(LazyString),
}

impl Node {
    pub fn render(&self, formatter: &Formatter, level: usize) -> String {
        match self {
            Node::Text(text) => text.render(formatter, level),
            Node::Lazy(lazy) => lazy.render(formatter, level),
        }
    }
}

impl From<CodeText> for Node {
    fn from(text: CodeText) -> Self {
        Node::Text(text)
    }
}

impl From<LazyString> for Node {
    fn from(lazy: LazyString) -> Self {
        Node::Lazy(lazy)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(CodeText::new(text))
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(CodeText::new(text))
    }
}

impl Declarable for Struct {
    fn declaration(&self, formatter: &Formatter, level: usize) -> String {
        let pad = formatter.indent_str(level);
        let field_pad = formatter.indent_str(level + 1);
        let mut lines = vec![format!("{pad}struct {} {{", self.name())];
        for (field, ty) in self.fields() {
            lines.push(format!("{field_pad}{field}: {ty},"));
        }
        lines.push(format!("{pad}}}"));
        lines.join(formatter.separator())
    }
}

impl From<&Struct> for Node {
    fn from(s: &Struct) -> Self {
        Node::Lazy(LazyString::declaration(s.clone()))
    }
}
