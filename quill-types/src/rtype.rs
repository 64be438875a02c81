//! Resolved types and the input specification they are built from.

use std::fmt;

use crate::error::{Error, Result};
use crate::primitive::Primitive;
use crate::structs::Struct;
use crate::tuple::Tuple;
use crate::value::{Raw, Value};

/// Input specification for building composite types.
///
/// Conversions exist from type names (resolved against the primitive
/// registry), primitive handles, and existing composites, so call sites can
/// mix spellings freely.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeSpec {
    /// A type name resolved against the primitive registry.
    Name(String),
    /// A primitive handle.
    Prim(Primitive),
    /// An existing tuple, nested as one element.
    Tuple(Tuple),
    /// An existing struct, used as a single leaf.
    Struct(Struct),
    /// Specs spliced into the enclosing tuple level.
    List(Vec<TypeSpec>),
}

impl TypeSpec {
    /// Build a spec list that splices into the enclosing tuple level.
    pub fn list<I, T>(specs: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeSpec>,
    {
        TypeSpec::List(specs.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for TypeSpec {
    fn from(name: &str) -> Self {
        TypeSpec::Name(name.to_string())
    }
}

impl From<String> for TypeSpec {
    fn from(name: String) -> Self {
        TypeSpec::Name(name)
    }
}

impl From<Primitive> for TypeSpec {
    fn from(p: Primitive) -> Self {
        TypeSpec::Prim(p)
    }
}

impl From<Tuple> for TypeSpec {
    fn from(t: Tuple) -> Self {
        TypeSpec::Tuple(t)
    }
}

impl From<Struct> for TypeSpec {
    fn from(s: Struct) -> Self {
        TypeSpec::Struct(s)
    }
}

impl From<Vec<TypeSpec>> for TypeSpec {
    fn from(specs: Vec<TypeSpec>) -> Self {
        TypeSpec::List(specs)
    }
}

impl From<RType> for TypeSpec {
    fn from(ty: RType) -> Self {
        match ty {
            RType::Primitive(p) => TypeSpec::Prim(p),
            RType::Tuple(t) => TypeSpec::Tuple(t),
            RType::Struct(s) => TypeSpec::Struct(s),
        }
    }
}

/// A resolved type: primitive leaf, tuple, or struct.
#[derive(Debug, Clone, PartialEq)]
pub enum RType {
    Primitive(Primitive),
    Tuple(Tuple),
    Struct(Struct),
}

impl RType {
    /// Resolve a spec into a type, validating name tokens against the
    /// registry. A bare spec list becomes a tuple.
    pub fn resolve(spec: TypeSpec) -> Result<RType> {
        match spec {
            TypeSpec::Name(name) => match Primitive::lookup(&name) {
                Some(p) => Ok(RType::Primitive(p)),
                None => Err(Error::UnknownType(name)),
            },
            TypeSpec::Prim(p) => Ok(RType::Primitive(p)),
            TypeSpec::Tuple(t) => Ok(RType::Tuple(t)),
            TypeSpec::Struct(s) => Ok(RType::Struct(s)),
            TypeSpec::List(specs) => Ok(RType::Tuple(Tuple::new(specs)?)),
        }
    }

    /// Recursive leaf count: primitives and structs are one leaf each,
    /// tuples contribute the counts of their own leaves.
    pub fn leaf_count(&self) -> usize {
        match self {
            RType::Primitive(_) | RType::Struct(_) => 1,
            RType::Tuple(t) => t.types_count(),
        }
    }

    /// Coerce a raw input against this type.
    pub fn value_from(&self, raw: &Raw) -> Result<Value> {
        match self {
            RType::Primitive(p) => p.value_from(raw),
            RType::Tuple(t) => match raw {
                Raw::List(items) => t.value_from(items.iter().cloned()),
                Raw::Ident(name) => Ok(Value::Ref(name.clone())),
                other => Err(Error::Format {
                    ty: self.to_string(),
                    value: other.to_string(),
                }),
            },
            RType::Struct(s) => match raw {
                Raw::Map(entries) => {
                    s.value_from(entries.iter().map(|(k, v)| (k.clone(), v.clone())))
                }
                Raw::Ident(name) => Ok(Value::Ref(name.clone())),
                other => Err(Error::Format {
                    ty: s.name().to_string(),
                    value: other.to_string(),
                }),
            },
        }
    }

    /// Strict validity test; clamped numerics are not ok.
    pub fn is_ok(&self, raw: &Raw) -> bool {
        match self {
            RType::Primitive(p) => p.is_ok(raw),
            RType::Tuple(t) => match raw {
                Raw::List(items) => t.is_ok(items.iter().cloned()),
                Raw::Ident(_) => true,
                _ => false,
            },
            RType::Struct(s) => match raw {
                Raw::Map(entries) => {
                    s.is_ok(entries.iter().map(|(k, v)| (k.clone(), v.clone())))
                }
                Raw::Ident(_) => true,
                _ => false,
            },
        }
    }
}

impl fmt::Display for RType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RType::Primitive(p) => write!(f, "{p}"),
            RType::Tuple(t) => write!(f, "{t}"),
            RType::Struct(s) => f.write_str(s.name()),
        }
    }
}
