//! Named, ordered-field composite types.

use std::fmt;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::ident::is_identifier;
use crate::rtype::{RType, TypeSpec};
use crate::value::{Raw, Value};

/// A named composite with ordered fields.
///
/// Field order is the declaration order and is preserved through
/// [`Struct::value_from`] regardless of the order keys are supplied in.
/// Displaying a struct yields its bare name, so a struct can be used
/// directly as a type reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Struct {
    name: String,
    fields: IndexMap<String, RType>,
}

impl Struct {
    /// Build a struct from a name and `(field, type)` pairs.
    ///
    /// The name must be a non-empty identifier; every field name must match
    /// the identifier pattern and every field type must resolve.
    pub fn new<N, I, K, T>(name: N, fields: I) -> Result<Self>
    where
        N: Into<String>,
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<TypeSpec>,
    {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::MissingName);
        }
        if !is_identifier(&name) {
            return Err(Error::InvalidName(name));
        }
        let mut map = IndexMap::new();
        for (field, spec) in fields {
            let field = field.into();
            if !is_identifier(&field) {
                return Err(Error::InvalidFieldName(field));
            }
            map.insert(field, RType::resolve(spec.into())?);
        }
        Ok(Self { name, fields: map })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &RType)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Coerce keyed values into an initializer literal.
    ///
    /// The first occurrence of a duplicate key wins; later duplicates are
    /// silently ignored. Keys matching no declared field and declared
    /// fields left unsupplied are both errors. Output order is declaration
    /// order, not supply order.
    pub fn value_from<I, K, V>(&self, values: I) -> Result<Value>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Raw>,
    {
        let (supplied, unknown) = self.partition(values);
        if !unknown.is_empty() {
            return Err(Error::UnknownFields(unknown));
        }
        let missing = self.missing_from(&supplied);
        if !missing.is_empty() {
            return Err(Error::MissingFields(missing));
        }
        let mut out = Vec::with_capacity(self.fields.len());
        for (field, ty) in &self.fields {
            out.push((field.clone(), ty.value_from(&supplied[field])?));
        }
        Ok(Value::Struct {
            name: self.name.clone(),
            fields: out,
        })
    }

    /// Keyed validation without error construction.
    pub fn is_ok<I, K, V>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Raw>,
    {
        let (supplied, unknown) = self.partition(values);
        if !unknown.is_empty() || !self.missing_from(&supplied).is_empty() {
            return false;
        }
        self.fields
            .iter()
            .all(|(field, ty)| ty.is_ok(&supplied[field]))
    }

    fn partition<I, K, V>(&self, values: I) -> (IndexMap<String, Raw>, Vec<String>)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Raw>,
    {
        let mut supplied = IndexMap::new();
        let mut unknown = Vec::new();
        for (key, value) in values {
            let key = key.into();
            if !self.fields.contains_key(&key) {
                if !unknown.contains(&key) {
                    unknown.push(key);
                }
                continue;
            }
            supplied.entry(key).or_insert_with(|| value.into());
        }
        (supplied, unknown)
    }

    fn missing_from(&self, supplied: &IndexMap<String, Raw>) -> Vec<String> {
        self.fields
            .keys()
            .filter(|field| !supplied.contains_key(*field))
            .cloned()
            .collect()
    }

    /// Render the struct declaration.
    pub fn declaration(&self) -> String {
        let mut out = format!("struct {} {{\n", self.name);
        for (field, ty) in &self.fields {
            out.push_str(&format!("    {field}: {ty},\n"));
        }
        out.push('}');
        out
    }
}

impl fmt::Display for Struct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
