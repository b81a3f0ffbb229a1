//! Diagnostics shared by the validator and the parser.
use std::fmt::{self, Display};

use thiserror::Error;

use crate::{
    grammar::{KindSet, LexicalGrammar, LexicalKind},
    position::Position,
};

pub trait PositionalError {
    fn position(&self) -> Position;
    fn describe(&self) -> String;
}

/// A rejected token sequence: the reason, and the position at which it was detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct SyntaxError {
    position: Position,
    reason: Reason,
}

impl SyntaxError {
    pub fn new(position: Position, reason: Reason) -> Self {
        Self { position, reason }
    }

    pub fn reason(&self) -> &Reason {
        &self.reason
    }

    pub fn class(&self) -> ErrorClass {
        self.reason.class()
    }
}

impl PositionalError for SyntaxError {
    fn position(&self) -> Position {
        self.position
    }

    fn describe(&self) -> String {
        format!("{} error: {}", self.class(), self.reason)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Unmatched or mismatched parentheses.
    Structural,
    /// An element that may not follow its predecessor.
    Transition,
    /// An element that may not open or close an expression.
    Boundary,
    /// Input ended before the expression was complete.
    Incomplete,
}
impl Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            ErrorClass::Structural => "structural",
            ErrorClass::Transition => "transition",
            ErrorClass::Boundary => "boundary",
            ErrorClass::Incomplete => "incomplete expression",
        })
    }
}

/// A token or term as cited in a diagnostic, e.g. `variable: v1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub kind: LexicalKind,
    pub label: String,
}
impl Element {
    pub fn new(kind: LexicalKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
        }
    }
}
impl Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.kind.name(), self.label)
    }
}

/// The kinds that would have been accepted instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expected(pub KindSet);
impl Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&LexicalGrammar.describe(self.0))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Reason {
    #[error("Parenthesis mismatch between {open} at position {open_at} and {close} at position {close_at}.")]
    ParenthesisMismatch {
        open: String,
        open_at: Position,
        close: String,
        close_at: Position,
    },
    #[error("Unexpected closing parenthesis: {close} at position {at}. Expected: {expected}.")]
    UnexpectedClose {
        close: String,
        at: Position,
        expected: Expected,
    },
    #[error("No closing parenthesis matching {open} at position {at}.")]
    Unclosed { open: String, at: Position },
    #[error("Expression must start with {expected}, not {element}.")]
    UnexpectedStart { element: Element, expected: Expected },
    #[error("Unexpected {element} following {previous} at position {at}. Expected: {expected}.")]
    UnexpectedElement {
        element: Element,
        previous: Element,
        at: Position,
        expected: Expected,
    },
    #[error("Expected: {expected} after final {last}.")]
    UnexpectedEnd { last: Element, expected: Expected },
    #[error("Incomplete expression. Expected: {expected} after final {last}.")]
    Incomplete { last: Element, expected: Expected },
    #[error("Empty expression. Expected: {expected}.")]
    Empty { expected: Expected },
}

impl Reason {
    pub fn class(&self) -> ErrorClass {
        match self {
            Reason::ParenthesisMismatch { .. }
            | Reason::UnexpectedClose { .. }
            | Reason::Unclosed { .. } => ErrorClass::Structural,
            Reason::UnexpectedElement { .. } => ErrorClass::Transition,
            Reason::UnexpectedStart { .. } | Reason::UnexpectedEnd { .. } => ErrorClass::Boundary,
            Reason::Incomplete { .. } | Reason::Empty { .. } => ErrorClass::Incomplete,
        }
    }
}

pub fn failure<R>(position: Position, reason: Reason) -> Result<R, SyntaxError> {
    Err(SyntaxError::new(position, reason))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_message_cites_both_elements_and_expectation() {
        let err = SyntaxError::new(
            Position(2),
            Reason::UnexpectedElement {
                element: Element::new(LexicalKind::Variable, "v2"),
                previous: Element::new(LexicalKind::Variable, "v1"),
                at: Position(2),
                expected: Expected(LexicalGrammar.next(LexicalKind::Variable)),
            },
        );

        assert_eq!(
            "Unexpected variable: v2 following variable: v1 at position 2. \
             Expected: assignment operator, closing parenthesis, dyadic operator, semi-colon or suffix operator.",
            err.to_string()
        );
        assert_eq!(ErrorClass::Transition, err.class());
        assert_eq!(Position(2), err.position());
    }

    #[test]
    fn describe_prefixes_the_class() {
        let err = SyntaxError::new(
            Position(1),
            Reason::Unclosed {
                open: "b".to_string(),
                at: Position(1),
            },
        );

        assert_eq!(
            "structural error: No closing parenthesis matching b at position 1.",
            err.describe()
        );
    }
}
