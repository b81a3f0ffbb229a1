//! The parse tree produced by the parser, and its text rendering.
mod post_order;
mod render;
mod term;

pub use post_order::PostOrder;
pub use render::render;
pub(crate) use term::TermArena;
pub use term::{Term, TermId, TermTree};
