//! Attribute line helpers.
//!
//! These produce pre-rendered `#[...]` text; constructs store and emit the
//! finished lines without interpreting them.

use std::fmt;

/// A generic attribute line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Macro {
    text: String,
}

impl Macro {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The rendered attribute line.
    pub fn text(&self) -> String {
        format!("#[{}]", self.text)
    }
}

impl fmt::Display for Macro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

impl From<Macro> for String {
    fn from(m: Macro) -> Self {
        m.text()
    }
}

impl From<&Macro> for String {
    fn from(m: &Macro) -> Self {
        m.text()
    }
}

/// A `#[derive(...)]` attribute line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Derive {
    traits: Vec<String>,
}

impl Derive {
    pub fn new<I, T>(traits: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            traits: traits.into_iter().map(Into::into).collect(),
        }
    }

    pub fn push(&mut self, name: impl Into<String>) {
        self.traits.push(name.into());
    }

    /// The rendered attribute line.
    pub fn text(&self) -> String {
        format!("#[derive({})]", self.traits.join(","))
    }
}

impl fmt::Display for Derive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

impl From<Derive> for String {
    fn from(d: Derive) -> Self {
        d.text()
    }
}

impl From<&Derive> for String {
    fn from(d: &Derive) -> Self {
        d.text()
    }
}
