//! The rewrite rules applied to the top of the parse stack.
use log::trace;

use crate::grammar::LexicalKind;

use super::stack::{Item, ParseStack};

/// Label of the placeholder built from an empty pair of parentheses.
pub const EMPTY_GROUP: &str = "empty2";

impl ParseStack<'_> {
    /// Applies reductions to the top of the stack until none matches.
    pub fn reduce_all(&mut self) {
        while self.reduce() {}
    }

    /// Applies the first matching rule, returning `false` if no rule matches.
    pub fn reduce(&mut self) -> bool {
        self.reduce_infix()
            || self.reduce_group()
            || self.reduce_empty_group()
            || self.reduce_redundant_semicolon()
            || self.reduce_unary()
    }

    /// `term op term`, for an assignment, dyadic operator or semi-colon.
    fn reduce_infix(&mut self) -> bool {
        let tokens = self.tokens();
        match self.window::<3>() {
            Some([Item::Term(lhs), Item::Token(op), Item::Term(rhs)])
                if tokens[op].kind.is_infix() =>
            {
                let op = &tokens[op];
                trace!("Reduce {} over two operands", op.label);
                let term = self.terms().apply(op.kind, op.label.as_str(), vec![lhs, rhs]);
                self.replace(3, Item::Term(term));
                true
            }
            _ => false,
        }
    }

    /// `( term )`: once matched, the parentheses leave only the term they enclose.
    fn reduce_group(&mut self) -> bool {
        let tokens = self.tokens();
        match self.window::<3>() {
            Some([Item::Token(open), Item::Term(term), Item::Token(close)])
                if tokens[open].pairs_with(&tokens[close]) =>
            {
                trace!("Reduce {} {}", tokens[open], tokens[close]);
                self.replace(3, Item::Term(term));
                true
            }
            _ => false,
        }
    }

    /// `( )` becomes a placeholder term.
    fn reduce_empty_group(&mut self) -> bool {
        let tokens = self.tokens();
        match self.window::<2>() {
            Some([Item::Token(open), Item::Token(close)])
                if tokens[open].pairs_with(&tokens[close]) =>
            {
                trace!("Reduce empty {} {}", tokens[open], tokens[close]);
                let term = self.terms().leaf(LexicalKind::Term, EMPTY_GROUP);
                self.replace(2, Item::Term(term));
                true
            }
            _ => false,
        }
    }

    /// `; )`: a semi-colon directly before a closing parenthesis is dropped.
    fn reduce_redundant_semicolon(&mut self) -> bool {
        let tokens = self.tokens();
        match self.window::<2>() {
            Some([Item::Token(semicolon), close @ Item::Token(close_index)])
                if tokens[semicolon].kind == LexicalKind::Semicolon
                    && tokens[close_index].kind == LexicalKind::Close =>
            {
                trace!("Drop {} before {}", tokens[semicolon], tokens[close_index]);
                self.replace(2, close);
                true
            }
            _ => false,
        }
    }

    /// `op term` for a prefix operator, or a suffix operator that has been moved in front of
    /// its operand.
    pub fn reduce_unary(&mut self) -> bool {
        let tokens = self.tokens();
        match self.window::<2>() {
            Some([Item::Token(op), Item::Term(operand)]) if tokens[op].kind.is_unary() => {
                let op = &tokens[op];
                trace!("Reduce {} over one operand", op.label);
                let term = self.terms().apply(op.kind, op.label.as_str(), vec![operand]);
                self.replace(2, Item::Term(term));
                true
            }
            _ => false,
        }
    }

    /// Folds prefix operators directly beneath the top term into it, innermost first.
    pub fn reduce_prefixes(&mut self) {
        while matches!(
            self.window::<2>(),
            Some([Item::Token(op), Item::Term(_)]) if self.tokens()[op].kind == LexicalKind::Prefix
        ) {
            self.reduce_unary();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tokens::from_codes;

    use super::*;

    fn shift_all<'t>(stack: &mut ParseStack<'t>, count: usize) {
        for index in 0..count {
            let token = stack.token(index);
            let item = if token.kind == LexicalKind::Variable {
                Item::Term(stack.terms().leaf(token.kind, token.label.as_str()))
            } else {
                Item::Token(index)
            };
            stack.push(item);
        }
    }

    #[test]
    fn infix_chain_groups_from_the_right() {
        let tokens = from_codes(&["v1", "d2", "v3", "d4", "v5"]).unwrap();
        let mut stack = ParseStack::new(&tokens);
        shift_all(&mut stack, tokens.len());

        stack.reduce_all();

        assert_eq!("d2(v1, d4(v3, v5))", stack.into_tree().ok().unwrap().to_string());
    }

    #[test]
    fn semicolon_before_close_is_dropped() {
        let tokens = from_codes(&["b", "v1", "s1", "B"]).unwrap();
        let mut stack = ParseStack::new(&tokens);
        shift_all(&mut stack, tokens.len());

        assert!(stack.reduce());
        assert_eq!(3, stack.len());
        assert!(stack.reduce());
        assert_eq!("v1", stack.into_tree().ok().unwrap().to_string());
    }

    #[test]
    fn mismatched_parentheses_are_not_reduced() {
        let tokens = from_codes(&["b(", "B]"]).unwrap();
        let mut stack = ParseStack::new(&tokens);
        shift_all(&mut stack, tokens.len());

        assert!(!stack.reduce());
        assert_eq!(2, stack.len());
    }

    #[test]
    fn prefixes_fold_innermost_first() {
        let tokens = from_codes(&["p1", "p2", "v1"]).unwrap();
        let mut stack = ParseStack::new(&tokens);
        shift_all(&mut stack, tokens.len());

        stack.reduce_prefixes();

        assert_eq!("p1(p2(v1))", stack.into_tree().ok().unwrap().to_string());
    }
}
