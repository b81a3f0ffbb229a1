//! Parses sequences of pre-classified tokens into binary/unary term trees.
//!
//! Tokens arrive already tagged with a [`LexicalKind`]. [`validate`] checks a sequence
//! against the fixed [`LexicalGrammar`] without building anything, [`parse`] builds a
//! [`TermTree`] with a shift-reduce automaton, and [`render`] lays the tree out as text.
pub mod error;
pub mod grammar;
pub mod parser;
pub mod position;
pub mod tokens;
pub mod tree;
pub mod validator;

pub use error::{ErrorClass, PositionalError, SyntaxError};
pub use grammar::{KindSet, LexicalGrammar, LexicalKind};
pub use parser::parse;
pub use position::Position;
pub use tokens::Token;
pub use tree::{render, Term, TermId, TermTree};
pub use validator::validate;
