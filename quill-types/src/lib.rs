//! Typed value model for the quill source generator.
//!
//! Host values are validated and coerced into literal text for generated
//! Rust source through three layers:
//!
//! - [`Primitive`] - leaf scalar descriptors with a range or format rule,
//!   registered once and looked up by name
//! - [`Tuple`] / [`Struct`] - recursive composites over primitives and
//!   other composites, with structural verification
//! - [`Raw`] / [`Value`] - the raw input side and the coerced literal side
//!   of every `value_from` call
//!
//! Integer coercion clamps out-of-range input to the nearest bound instead
//! of rejecting it; `is_ok` is the strict membership test for callers that
//! need rejection semantics.

mod error;
mod ident;
mod primitive;
mod rtype;
mod structs;
mod tuple;
mod value;

pub use error::{Error, Result};
pub use ident::is_identifier;
pub use primitive::{
    Primitive, Rule, BOOL, CHAR, I128, I16, I32, I64, I8, STR, U128, U16, U32, U64, U8,
};
pub use rtype::{RType, TypeSpec};
pub use structs::Struct;
pub use tuple::Tuple;
pub use value::{Raw, Value};
