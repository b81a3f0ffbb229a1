use log::{debug, trace};

use crate::{
    error::{failure, Element, Expected, Reason, SyntaxError},
    grammar::{LexicalGrammar, LexicalKind},
    position::Position,
    tokens::Token,
    tree::TermTree,
};

use super::stack::{Item, ParseStack};

const GRAMMAR: LexicalGrammar = LexicalGrammar;

/// Label of the placeholder standing in for a missing term before a semi-colon.
pub const EMPTY_STATEMENT: &str = "empty1";

/// Parses a token sequence into a tree.
///
/// Parsing is all-or-nothing: the first violation aborts with a diagnostic using the same
/// vocabulary as [`validate`](crate::validate), although the parser may describe the problem
/// in terms of partially reduced terms rather than raw tokens. The sequence must not be empty.
pub fn parse(tokens: &[Token]) -> Result<TermTree, SyntaxError> {
    debug!("Parsing {} tokens", tokens.len());

    let last_index = match tokens.len().checked_sub(1) {
        Some(last_index) => last_index,
        None => {
            return failure(
                Position(1),
                Reason::Empty {
                    expected: Expected(GRAMMAR.first()),
                },
            )
        }
    };

    let mut parser = Parser::new(tokens);
    for index in 0..tokens.len() {
        parser.accept(index)?;
    }
    let tree = parser.finish(last_index)?;

    debug!("Parsed {}", tree);
    Ok(tree)
}

struct Parser<'t> {
    stack: ParseStack<'t>,
}

impl<'t> Parser<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        Self {
            stack: ParseStack::new(tokens),
        }
    }

    fn accept(&mut self, index: usize) -> Result<(), SyntaxError> {
        self.expect_after_top(index)?;

        let token = self.stack.token(index);
        trace!("Shift {} onto {} items", token, self.stack.len());

        match token.kind {
            LexicalKind::Assign | LexicalKind::Dyad | LexicalKind::Open | LexicalKind::Prefix => {
                self.stack.push(Item::Token(index));
                Ok(())
            }
            LexicalKind::Close => self.close(index),
            LexicalKind::Suffix => self.suffix(index),
            LexicalKind::Semicolon => {
                self.semicolon(index);
                Ok(())
            }
            LexicalKind::Variable => {
                self.variable(index);
                Ok(())
            }
            LexicalKind::Term => Err(self.unexpected(index)),
        }
    }

    /// Fails unless the token at `index` may follow the current top of the stack.
    fn expect_after_top(&self, index: usize) -> Result<(), SyntaxError> {
        let expected = GRAMMAR.expected_after(self.stack.top_kind());
        if expected.contains(self.stack.token(index).kind) {
            Ok(())
        } else {
            Err(self.unexpected(index))
        }
    }

    fn unexpected(&self, index: usize) -> SyntaxError {
        let token = self.stack.token(index);
        let element = Element::new(token.kind, token.label.clone());
        let at = Position::of_index(index);

        let reason = match self.stack.top() {
            Some(top) => Reason::UnexpectedElement {
                element,
                previous: self.stack.element(top),
                at,
                expected: Expected(GRAMMAR.next(self.stack.kind_of(top))),
            },
            None => Reason::UnexpectedStart {
                element,
                expected: Expected(GRAMMAR.first()),
            },
        };
        SyntaxError::new(at, reason)
    }

    fn close(&mut self, index: usize) -> Result<(), SyntaxError> {
        self.stack.reduce_all();
        self.stack.push(Item::Token(index));
        self.stack.reduce_all();
        self.expect_resolved(index)
    }

    /// After a closing parenthesis has been shifted and reduced, it must have been consumed
    /// together with its opening parenthesis.
    fn expect_resolved(&self, index: usize) -> Result<(), SyntaxError> {
        if self.stack.top() != Some(Item::Token(index)) {
            return Ok(());
        }

        let close = self.stack.token(index);
        let close_at = Position::of_index(index);

        let open = match (self.stack.window::<3>(), self.stack.window::<2>()) {
            (Some([Item::Token(open), Item::Term(_), _]), _) | (_, Some([Item::Token(open), _]))
                if self.stack.token(open).kind == LexicalKind::Open =>
            {
                Some(open)
            }
            _ => None,
        };

        match open {
            Some(open) => failure(
                close_at,
                Reason::ParenthesisMismatch {
                    open: self.stack.token(open).label.clone(),
                    open_at: Position::of_index(open),
                    close: close.label.clone(),
                    close_at,
                },
            ),
            None => {
                let below = self
                    .stack
                    .window::<2>()
                    .map(|[below, _]| self.stack.kind_of(below));
                failure(
                    close_at,
                    Reason::UnexpectedClose {
                        close: close.label.clone(),
                        at: close_at,
                        expected: Expected(GRAMMAR.expected_after(below)),
                    },
                )
            }
        }
    }

    /// Suffixes bind at once to the term on their left.
    fn suffix(&mut self, index: usize) -> Result<(), SyntaxError> {
        let operand = match self.stack.top() {
            Some(operand @ Item::Term(_)) => operand,
            _ => return Err(self.unexpected(index)),
        };

        self.stack.replace(1, Item::Token(index));
        self.stack.push(operand);
        self.stack.reduce_unary();
        Ok(())
    }

    /// A semi-colon completes everything on its left, and acts as a low priority infix
    /// operator between statements.
    fn semicolon(&mut self, index: usize) {
        if !self.stack.top_is_term() {
            let empty = self
                .stack
                .terms()
                .leaf(LexicalKind::Term, EMPTY_STATEMENT);
            self.stack.push(Item::Term(empty));
        }
        self.stack.reduce_all();
        self.stack.push(Item::Token(index));
    }

    fn variable(&mut self, index: usize) {
        let token = self.stack.token(index);
        let term = self.stack.terms().leaf(token.kind, token.label.as_str());
        self.stack.push(Item::Term(term));
        self.stack.reduce_prefixes();
    }

    /// Completes the parse after the token at `last_index`, the final one, was accepted.
    fn finish(mut self, last_index: usize) -> Result<TermTree, SyntaxError> {
        let last = self.stack.token(last_index);

        if self.stack.top_is_token(LexicalKind::Semicolon) {
            self.stack.pop();
        }
        self.stack.reduce_all();

        let at = Position::of_index(last_index);
        let last_element = Element::new(last.kind, last.label.clone());

        let tree = match self.stack.into_tree() {
            Ok(tree) => tree,
            Err(stack) => {
                debug!("Parse ended with {} unreduced items", stack.len());
                return failure(
                    at,
                    Reason::Incomplete {
                        last: last_element,
                        expected: Expected(GRAMMAR.next(last.kind)),
                    },
                );
            }
        };

        if !GRAMMAR.last().contains(last.kind) {
            return failure(
                at,
                Reason::UnexpectedEnd {
                    last: last_element,
                    expected: Expected(GRAMMAR.next(last.kind)),
                },
            );
        }

        Ok(tree)
    }
}
