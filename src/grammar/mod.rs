//! The fixed lexical grammar: token kinds, their legal successors, and the
//! human-readable names used in diagnostics.
mod kind;
mod table;

pub use kind::{KindSet, LexicalKind};
pub use table::LexicalGrammar;
