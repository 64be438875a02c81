//! Formatting configuration for rendered code.
//!
//! A [`Formatter`] is threaded through every render call; there is no
//! module-wide formatting state.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation, the Rust default.
    pub const DEFAULT: Self = Self::Spaces(4);

    /// The string for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            Self::Spaces(4) => "    ",
            Self::Spaces(8) => "        ",
            // Fallback to 4 whitespaces
            Self::Spaces(_) => "    ",
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Formatting context passed into every render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    indent: Indent,
    separator: String,
}

impl Formatter {
    pub fn new(indent: Indent, separator: impl Into<String>) -> Self {
        Self {
            indent,
            separator: separator.into(),
        }
    }

    pub fn indent(&self) -> Indent {
        self.indent
    }

    /// The separator joined between rendered children.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// The indentation prefix for the given nesting level.
    pub fn indent_str(&self, level: usize) -> String {
        self.indent.as_str().repeat(level)
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self {
            indent: Indent::DEFAULT,
            separator: "\n".to_string(),
        }
    }
}
