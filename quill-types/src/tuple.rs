//! Ordered, unnamed composite types.
//!
//! A tuple is a tree: each element is a primitive leaf, a struct leaf, or a
//! nested tuple. The leaf count is fixed at construction and drives the
//! positional flatten/coerce algorithm in [`Tuple::value_from`].

use std::fmt;

use crate::error::{Error, Result};
use crate::rtype::{RType, TypeSpec};
use crate::value::{Raw, Value};

/// An ordered, arbitrarily nested composite of types.
#[derive(Debug, Clone, PartialEq)]
pub struct Tuple {
    items: Vec<RType>,
}

impl Tuple {
    /// Build a tuple from type specs. Spec lists are spliced into this
    /// level; existing tuples nest. Every name token must resolve against
    /// the registry.
    pub fn new<I, T>(specs: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeSpec>,
    {
        let mut items = Vec::new();
        for spec in specs {
            Self::push_spec(&mut items, spec.into())?;
        }
        Ok(Self { items })
    }

    fn push_spec(items: &mut Vec<RType>, spec: TypeSpec) -> Result<()> {
        match spec {
            TypeSpec::List(specs) => {
                for spec in specs {
                    Self::push_spec(items, spec)?;
                }
                Ok(())
            }
            other => {
                items.push(RType::resolve(other)?);
                Ok(())
            }
        }
    }

    /// Recursive leaf count. Nested tuples count their own leaves, not one.
    pub fn types_count(&self) -> usize {
        self.items.iter().map(RType::leaf_count).sum()
    }

    /// The direct elements of this tuple.
    pub fn items(&self) -> &[RType] {
        &self.items
    }

    /// Coerce supplied values positionally.
    ///
    /// Value lists are flattened first; the flattened count must equal
    /// [`Tuple::types_count`]. Each leaf is coerced by its own type and the
    /// result mirrors the type tree.
    pub fn value_from<I, T>(&self, values: I) -> Result<Value>
    where
        I: IntoIterator<Item = T>,
        T: Into<Raw>,
    {
        let leaves = flatten_all(values);
        let expected = self.types_count();
        if leaves.len() != expected {
            return Err(Error::ArgCount {
                expected,
                got: leaves.len(),
            });
        }
        let mut cursor = 0;
        self.build_value(&leaves, &mut cursor)
    }

    fn build_value(&self, leaves: &[Raw], cursor: &mut usize) -> Result<Value> {
        let mut out = Vec::with_capacity(self.items.len());
        for item in &self.items {
            match item {
                RType::Tuple(t) => out.push(t.build_value(leaves, cursor)?),
                leaf => {
                    let raw = leaves.get(*cursor).ok_or(Error::ArgCount {
                        expected: self.types_count(),
                        got: *cursor,
                    })?;
                    *cursor += 1;
                    out.push(leaf.value_from(raw)?);
                }
            }
        }
        Ok(Value::Tuple(out))
    }

    /// Shape and range check without error construction.
    pub fn is_ok<I, T>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = T>,
        T: Into<Raw>,
    {
        let leaves = flatten_all(values);
        if leaves.len() != self.types_count() {
            return false;
        }
        let mut cursor = 0;
        self.check_ok(&leaves, &mut cursor)
    }

    fn check_ok(&self, leaves: &[Raw], cursor: &mut usize) -> bool {
        for item in &self.items {
            match item {
                RType::Tuple(t) => {
                    if !t.check_ok(leaves, cursor) {
                        return false;
                    }
                }
                leaf => {
                    let Some(raw) = leaves.get(*cursor) else {
                        return false;
                    };
                    *cursor += 1;
                    if !leaf.is_ok(raw) {
                        return false;
                    }
                }
            }
        }
        true
    }
}

fn flatten_all<I, T>(values: I) -> Vec<Raw>
where
    I: IntoIterator<Item = T>,
    T: Into<Raw>,
{
    let mut out = Vec::new();
    for value in values {
        flatten(value.into(), &mut out);
    }
    out
}

fn flatten(raw: Raw, out: &mut Vec<Raw>) {
    match raw {
        Raw::List(items) => {
            for item in items {
                flatten(item, out);
            }
        }
        other => out.push(other),
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, ")")
    }
}
