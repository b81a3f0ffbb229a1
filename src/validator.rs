//! Checks a token sequence for well-formedness without building a tree.
use log::debug;

use crate::{
    error::{failure, Element, Expected, Reason, SyntaxError},
    grammar::{LexicalGrammar, LexicalKind},
    position::Position,
    tokens::Token,
};

const GRAMMAR: LexicalGrammar = LexicalGrammar;

/// Validates `tokens` against the grammar. The checks run in a fixed order: parenthesis
/// matching, the opening element, every adjacent pair, and finally the closing element.
/// An empty sequence is valid.
pub fn validate(tokens: &[Token]) -> Result<(), SyntaxError> {
    debug!("Validating {} tokens", tokens.len());

    let (first, last) = match (tokens.first(), tokens.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Ok(()),
    };

    check_parentheses(tokens)?;
    check_first(first)?;
    check_transitions(tokens)?;
    check_last(last, Position(tokens.len()))
}

fn element(token: &Token) -> Element {
    Element::new(token.kind, token.label.clone())
}

fn check_parentheses(tokens: &[Token]) -> Result<(), SyntaxError> {
    let mut open: Vec<(Position, &Token)> = vec![];

    for (index, token) in tokens.iter().enumerate() {
        let position = Position::of_index(index);

        match token.kind {
            LexicalKind::Open => open.push((position, token)),
            LexicalKind::Close => match open.pop() {
                Some((open_at, opening)) if !opening.pairs_with(token) => {
                    return failure(
                        position,
                        Reason::ParenthesisMismatch {
                            open: opening.label.clone(),
                            open_at,
                            close: token.label.clone(),
                            close_at: position,
                        },
                    );
                }
                Some(_) => {}
                None => {
                    let previous = index.checked_sub(1).map(|i| tokens[i].kind);
                    return failure(
                        position,
                        Reason::UnexpectedClose {
                            close: token.label.clone(),
                            at: position,
                            expected: Expected(GRAMMAR.expected_after(previous)),
                        },
                    );
                }
            },
            _ => {}
        }
    }

    match open.pop() {
        Some((at, opening)) => failure(
            at,
            Reason::Unclosed {
                open: opening.label.clone(),
                at,
            },
        ),
        None => Ok(()),
    }
}

fn check_first(first: &Token) -> Result<(), SyntaxError> {
    if GRAMMAR.first().contains(first.kind) {
        Ok(())
    } else {
        failure(
            Position(1),
            Reason::UnexpectedStart {
                element: element(first),
                expected: Expected(GRAMMAR.first()),
            },
        )
    }
}

fn check_transitions(tokens: &[Token]) -> Result<(), SyntaxError> {
    for (index, pair) in tokens.windows(2).enumerate() {
        let (previous, token) = (&pair[0], &pair[1]);
        let expected = GRAMMAR.next(previous.kind);

        if !expected.contains(token.kind) {
            let at = Position::of_index(index + 1);
            return failure(
                at,
                Reason::UnexpectedElement {
                    element: element(token),
                    previous: element(previous),
                    at,
                    expected: Expected(expected),
                },
            );
        }
    }
    Ok(())
}

fn check_last(last: &Token, position: Position) -> Result<(), SyntaxError> {
    if GRAMMAR.last().contains(last.kind) {
        Ok(())
    } else {
        failure(
            position,
            Reason::UnexpectedEnd {
                last: element(last),
                expected: Expected(GRAMMAR.next(last.kind)),
            },
        )
    }
}
