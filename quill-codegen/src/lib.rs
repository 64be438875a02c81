//! Lazy code-object tree and constructs for the quill source generator.
//!
//! Program constructs are composed into containers and stringified on
//! demand; references to constructs are deferred, so mutating a construct
//! after insertion changes the next render of every tree holding it.
//!
//! # Module Organization
//!
//! - [`CodeWriter`] / [`CodeText`] / [`LazyString`] - the code-object tree
//! - [`Variable`] / [`Function`] - constructs bound to the type model
//! - [`Macro`] / [`Derive`] - pre-rendered attribute lines
//! - [`Formatter`] / [`Indent`] - formatting context threaded through
//!   every render call

mod constructs;
mod error;
mod formatter;
mod macros;
mod tree;
mod writer;

pub use constructs::{Function, Variable};
pub use error::{Error, Result};
pub use formatter::{Formatter, Indent};
pub use macros::{Derive, Macro};
pub use tree::{CodeText, Declarable, Definable, LazyString, Node};
pub use writer::CodeWriter;
