//! Raw host values and coerced literals.
//!
//! [`Raw`] is the input side: whatever the caller has on hand, before any
//! validation. [`Value`] is the output side: a literal already clamped and
//! format-normalized against a specific type, whose `Display` form is the
//! exact target-language text.

use std::fmt;

use indexmap::IndexMap;

/// A raw host value supplied to coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum Raw {
    Int(i128),
    UInt(u128),
    Bool(bool),
    Char(char),
    Str(String),
    /// Positional values for tuple leaves; flattened during coercion.
    List(Vec<Raw>),
    /// Keyed values for struct fields.
    Map(IndexMap<String, Raw>),
    /// A bare reference to an existing binding; passes through uncoerced.
    Ident(String),
}

impl Raw {
    /// Build a positional value list.
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Raw>,
    {
        Raw::List(items.into_iter().map(Into::into).collect())
    }

    /// Build a keyed value map for struct coercion.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Raw>,
    {
        Raw::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

macro_rules! raw_from_int {
    ($($ty:ty),* $(,)?) => {
        $(impl From<$ty> for Raw {
            fn from(v: $ty) -> Self {
                Raw::Int(v as i128)
            }
        })*
    };
}

raw_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<u128> for Raw {
    fn from(v: u128) -> Self {
        Raw::UInt(v)
    }
}

impl From<bool> for Raw {
    fn from(v: bool) -> Self {
        Raw::Bool(v)
    }
}

impl From<char> for Raw {
    fn from(v: char) -> Self {
        Raw::Char(v)
    }
}

impl From<&str> for Raw {
    fn from(v: &str) -> Self {
        Raw::Str(v.to_string())
    }
}

impl From<String> for Raw {
    fn from(v: String) -> Self {
        Raw::Str(v)
    }
}

impl From<Vec<Raw>> for Raw {
    fn from(v: Vec<Raw>) -> Self {
        Raw::List(v)
    }
}

impl From<IndexMap<String, Raw>> for Raw {
    fn from(v: IndexMap<String, Raw>) -> Self {
        Raw::Map(v)
    }
}

impl fmt::Display for Raw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Raw::Int(v) => write!(f, "{v}"),
            Raw::UInt(v) => write!(f, "{v}"),
            Raw::Bool(v) => write!(f, "{v}"),
            Raw::Char(v) => write!(f, "'{v}'"),
            Raw::Str(v) => write!(f, "\"{v}\""),
            Raw::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
            Raw::Map(entries) => {
                write!(f, "{{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
            Raw::Ident(name) => f.write_str(name),
        }
    }
}

/// A coerced literal mirroring the type tree it was validated against.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i128),
    UInt(u128),
    Bool(bool),
    Char(char),
    Str(String),
    Tuple(Vec<Value>),
    Struct {
        name: String,
        fields: Vec<(String, Value)>,
    },
    /// A bare name reference to another binding.
    Ref(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::UInt(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Char(v) => write!(f, "'{}'", v.escape_default()),
            Value::Str(v) => write!(f, "\"{}\"", v.escape_default()),
            Value::Tuple(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
            Value::Struct { name, fields } => {
                write!(f, "{name} {{ ")?;
                for (field, value) in fields {
                    write!(f, "{field}: {value}, ")?;
                }
                write!(f, "}}")
            }
            Value::Ref(name) => f.write_str(name),
        }
    }
}
