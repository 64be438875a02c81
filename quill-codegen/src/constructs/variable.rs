//! The `let` binding construct.

use std::fmt;

use quill_types::{is_identifier, RType, Raw, TypeSpec, Value};

use crate::error::{Error, Result};
use crate::formatter::Formatter;
use crate::tree::{Declarable, LazyString, Node};

/// A `let` binding with a validated name, resolved type, and coerced value.
///
/// Variables are immutable once built. Displaying one yields its bare name,
/// so a variable can be passed as the value of another variable and renders
/// as a reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    name: String,
    ty: RType,
    value: Option<Value>,
    macros: Vec<String>,
}

impl Variable {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeSpec>) -> Result<Self> {
        let name = name.into();
        if !is_identifier(&name) {
            return Err(Error::InvalidName(name));
        }
        let ty = RType::resolve(ty.into())?;
        Ok(Self {
            name,
            ty,
            value: None,
            macros: Vec::new(),
        })
    }

    /// Coerce and attach a value through this variable's type.
    pub fn with_value(mut self, value: impl Into<Raw>) -> Result<Self> {
        let raw = value.into();
        self.value = Some(self.ty.value_from(&raw)?);
        Ok(self)
    }

    /// Attach a pre-rendered attribute line (`#[...]`), emitted above the
    /// declaration in insertion order.
    pub fn with_macro(mut self, line: impl Into<String>) -> Self {
        self.macros.push(line.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &RType {
        &self.ty
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// A deferred reference to this variable's declaration.
    pub fn lazy_declaration(&self) -> LazyString {
        LazyString::declaration(self.clone())
    }
}

impl Declarable for Variable {
    fn declaration(&self, formatter: &Formatter, level: usize) -> String {
        let pad = formatter.indent_str(level);
        let mut lines = Vec::with_capacity(self.macros.len() + 1);
        for line in &self.macros {
            lines.push(format!("{pad}{line}"));
        }
        lines.push(match &self.value {
            Some(value) => format!("{pad}let {}: {} = {};", self.name, self.ty, value),
            None => format!("{pad}let {}: {};", self.name, self.ty),
        });
        lines.join(formatter.separator())
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&Variable> for Node {
    fn from(v: &Variable) -> Self {
        Node::Lazy(v.lazy_declaration())
    }
}

impl From<Variable> for Node {
    fn from(v: Variable) -> Self {
        Node::Lazy(LazyString::declaration(v))
    }
}

impl From<&Variable> for Raw {
    fn from(v: &Variable) -> Self {
        Raw::Ident(v.name.clone())
    }
}
