//! Converts a token sequence into a [`TermTree`](crate::tree::TermTree) with a shift-reduce
//! automaton.
mod parser;
mod reduce;
mod stack;

pub use parser::{parse, EMPTY_STATEMENT};
pub use reduce::EMPTY_GROUP;
