//! Named program constructs bound to the type model and the code tree.

mod function;
mod variable;

pub use function::Function;
pub use variable::Variable;
