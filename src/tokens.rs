//! Pre-classified input tokens.
use std::{
    fmt::{self, Display},
    str::FromStr,
};

use thiserror::Error;

use crate::grammar::LexicalKind;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: LexicalKind,
    /// Opaque text, used for display and as the operator label of the term built from it.
    pub label: String,
    /// Must be equal between an opening and its closing parenthesis. Empty for other kinds.
    pub discriminator: String,
}
impl Token {
    pub fn new(kind: LexicalKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            discriminator: String::new(),
        }
    }

    pub fn bracket(
        kind: LexicalKind,
        label: impl Into<String>,
        discriminator: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            label: label.into(),
            discriminator: discriminator.into(),
        }
    }

    /// Returns `true` if `self` is an opening parenthesis closed by `close`.
    pub fn pairs_with(&self, close: &Token) -> bool {
        self.kind == LexicalKind::Open
            && close.kind == LexicalKind::Close
            && self.discriminator == close.discriminator
    }
}
impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("empty token")]
    Empty,
    #[error("unknown lexical kind '{0}' in token: {1}")]
    UnknownKind(char, String),
    #[error("terms cannot appear in raw input: {0}")]
    SyntheticTerm(String),
}

/// Parses the code form of a token: a kind letter followed by free text, e.g. `v1` or `b(`.
/// For parentheses the text after the letter is the discriminator.
impl FromStr for Token {
    type Err = TokenError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let letter = code.chars().next().ok_or(TokenError::Empty)?;
        let kind = LexicalKind::from_code(letter)
            .ok_or_else(|| TokenError::UnknownKind(letter, code.to_string()))?;

        match kind {
            LexicalKind::Term => Err(TokenError::SyntheticTerm(code.to_string())),
            LexicalKind::Open | LexicalKind::Close => {
                Ok(Token::bracket(kind, code, &code[letter.len_utf8()..]))
            }
            _ => Ok(Token::new(kind, code)),
        }
    }
}

/// Converts a sequence of token codes into tokens.
pub fn from_codes<S: AsRef<str>>(codes: &[S]) -> Result<Vec<Token>, TokenError> {
    codes.iter().map(|code| code.as_ref().parse()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_letter_selects_the_kind() {
        let tokens = from_codes(&["v1", "a2", "p3", "q4", "d5", "s6"]).unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();

        assert_eq!(
            vec![
                LexicalKind::Variable,
                LexicalKind::Assign,
                LexicalKind::Prefix,
                LexicalKind::Suffix,
                LexicalKind::Dyad,
                LexicalKind::Semicolon,
            ],
            kinds
        );
        assert_eq!("v1", tokens[0].label);
        assert_eq!("", tokens[0].discriminator);
    }

    #[test]
    fn brackets_carry_their_discriminator() {
        let open: Token = "b[".parse().unwrap();
        let close: Token = "B[".parse().unwrap();
        let other: Token = "B(".parse().unwrap();

        assert_eq!("[", open.discriminator);
        assert!(open.pairs_with(&close));
        assert!(!open.pairs_with(&other));
        assert!(!close.pairs_with(&open));
    }

    #[test]
    fn bare_brackets_pair() {
        let tokens = from_codes(&["b", "B"]).unwrap();
        assert!(tokens[0].pairs_with(&tokens[1]));
    }

    #[test]
    fn invalid_codes_are_rejected() {
        assert_eq!(Err(TokenError::Empty), "".parse::<Token>());
        assert_eq!(
            Err(TokenError::UnknownKind('x', "x1".to_string())),
            "x1".parse::<Token>()
        );
        assert_eq!(
            Err(TokenError::SyntheticTerm("t1".to_string())),
            "t1".parse::<Token>()
        );
    }
}
