//! The function construct.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use quill_types::{is_identifier, RType, TypeSpec};

use crate::error::{Error, Result};
use crate::formatter::Formatter;
use crate::tree::{Declarable, Definable, LazyString, Node};
use crate::writer::CodeWriter;

/// A function: a declarable signature plus a container body.
///
/// Clones share identity. A function inserted into several containers is
/// the same object everywhere; `add` and `empty` through any handle are
/// visible from every tree on its next render. A function must not be
/// added to its own body.
#[derive(Clone)]
pub struct Function {
    inner: Rc<RefCell<Inner>>,
}

#[derive(Debug)]
struct Inner {
    name: String,
    params: Vec<(String, RType)>,
    returns: Option<RType>,
    body: Vec<Node>,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if !is_identifier(&name) {
            return Err(Error::InvalidName(name));
        }
        Ok(Self {
            inner: Rc::new(RefCell::new(Inner {
                name,
                params: Vec::new(),
                returns: None,
                body: Vec::new(),
            })),
        })
    }

    /// Append one parameter.
    pub fn param(self, name: impl Into<String>, ty: impl Into<TypeSpec>) -> Result<Self> {
        let name = name.into();
        if !is_identifier(&name) {
            return Err(Error::InvalidParameter(name));
        }
        let ty = RType::resolve(ty.into())?;
        self.inner.borrow_mut().params.push((name, ty));
        Ok(self)
    }

    /// Append parameters from `(name, type)` pairs, in order.
    pub fn params<I, K, T>(self, params: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<TypeSpec>,
    {
        let mut this = self;
        for (name, ty) in params {
            this = this.param(name, ty)?;
        }
        Ok(this)
    }

    pub fn returns(self, ty: impl Into<TypeSpec>) -> Result<Self> {
        let ty = RType::resolve(ty.into())?;
        self.inner.borrow_mut().returns = Some(ty);
        Ok(self)
    }

    pub fn name(&self) -> String {
        self.inner.borrow().name.clone()
    }

    /// Append a body child.
    pub fn add(&self, item: impl Into<Node>) {
        self.inner.borrow_mut().body.push(item.into());
    }

    /// Splice a writer's children into the body.
    pub fn append(&self, writer: &CodeWriter) {
        self.inner
            .borrow_mut()
            .body
            .extend(writer.nodes().iter().cloned());
    }

    /// Clear the body in place.
    pub fn empty(&self) {
        self.inner.borrow_mut().body.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().body.is_empty()
    }

    /// A deferred reference to this function's declaration.
    pub fn lazy_declaration(&self) -> LazyString {
        LazyString::declaration(self.clone())
    }

    /// A deferred reference to this function's definition.
    pub fn lazy_definition(&self) -> LazyString {
        LazyString::definition(self.clone())
    }

    fn signature(&self) -> String {
        let inner = self.inner.borrow();
        let params = inner
            .params
            .iter()
            .map(|(name, ty)| format!("{name}: {ty}"))
            .collect::<Vec<_>>()
            .join(", ");
        match &inner.returns {
            Some(ret) => format!("fn {}({}) -> {}", inner.name, params, ret),
            None => format!("fn {}({})", inner.name, params),
        }
    }
}

impl Declarable for Function {
    fn declaration(&self, formatter: &Formatter, level: usize) -> String {
        format!("{}{};", formatter.indent_str(level), self.signature())
    }
}

impl Definable for Function {
    fn definition(&self, formatter: &Formatter, level: usize) -> String {
        let pad = formatter.indent_str(level);
        let mut out = format!("{pad}{} {{", self.signature());
        let inner = self.inner.borrow();
        for node in &inner.body {
            out.push_str(formatter.separator());
            out.push_str(&node.render(formatter, level + 1));
        }
        out.push_str(formatter.separator());
        out.push_str(&pad);
        out.push('}');
        out
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.borrow().name)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Function({})", self.inner.borrow().name)
    }
}

impl From<&Function> for Node {
    fn from(func: &Function) -> Self {
        Node::Lazy(func.lazy_definition())
    }
}

impl From<Function> for Node {
    fn from(func: Function) -> Self {
        Node::Lazy(LazyString::definition(func))
    }
}
