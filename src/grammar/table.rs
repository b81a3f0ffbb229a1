use super::kind::{KindSet, LexicalKind::{self, *}};

/// Read-only view of the grammar, for callers that want to enumerate kinds and their
/// transitions without re-deriving them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalGrammar;

impl LexicalGrammar {
    pub fn kinds(&self) -> &'static [LexicalKind] {
        &LexicalKind::ALL
    }

    /// Kinds that may open an expression.
    pub fn first(&self) -> KindSet {
        KindSet::of(&[Open, Prefix, Semicolon, Variable])
    }

    /// Kinds that may close an expression.
    pub fn last(&self) -> KindSet {
        KindSet::of(&[Close, Suffix, Semicolon, Variable])
    }

    /// Kinds that may legally follow an element of the given kind.
    pub fn next(&self, kind: LexicalKind) -> KindSet {
        match kind {
            Assign | Dyad | Prefix => KindSet::of(&[Open, Prefix, Variable]),
            Open | Semicolon => KindSet::of(&[Open, Close, Prefix, Semicolon, Variable]),
            Close | Suffix | Term | Variable => {
                KindSet::of(&[Assign, Close, Dyad, Semicolon, Suffix])
            }
        }
    }

    pub fn name(&self, kind: LexicalKind) -> &'static str {
        kind.name()
    }

    pub fn code(&self, kind: LexicalKind) -> char {
        kind.code()
    }

    /// Whether `successor` may directly follow `predecessor`, or open the expression when
    /// there is no predecessor.
    pub fn allows(&self, predecessor: Option<LexicalKind>, successor: LexicalKind) -> bool {
        self.expected_after(predecessor).contains(successor)
    }

    pub fn expected_after(&self, predecessor: Option<LexicalKind>) -> KindSet {
        match predecessor {
            Some(kind) => self.next(kind),
            None => self.first(),
        }
    }

    /// Renders the names of the kinds in `set`, sorted, e.g. `"prefix operator or variable"`.
    pub fn describe(&self, set: KindSet) -> String {
        let mut names: Vec<_> = set.iter().map(LexicalKind::name).collect();
        names.sort_unstable();

        match names.split_last() {
            None => String::new(),
            Some((last, [])) => last.to_string(),
            Some((last, init)) => format!("{} or {}", init.join(", "), last),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRAMMAR: LexicalGrammar = LexicalGrammar;

    #[test]
    fn operands_are_followed_by_operators() {
        for kind in [Close, Suffix, Term, Variable] {
            let next = GRAMMAR.next(kind);
            assert!(next.contains(Assign));
            assert!(next.contains(Dyad));
            assert!(!next.contains(Variable));
            assert!(!next.contains(Open));
        }
    }

    #[test]
    fn operators_are_followed_by_operands() {
        for kind in [Assign, Dyad, Prefix] {
            let next = GRAMMAR.next(kind);
            assert_eq!(KindSet::of(&[Open, Prefix, Variable]), next);
        }
    }

    #[test]
    fn term_is_never_a_legal_raw_successor() {
        for &kind in GRAMMAR.kinds() {
            assert!(!GRAMMAR.next(kind).contains(Term));
        }
        assert!(!GRAMMAR.first().contains(Term));
    }

    #[test]
    fn first_and_last_sets() {
        assert!(GRAMMAR.allows(None, Open));
        assert!(GRAMMAR.allows(None, Semicolon));
        assert!(!GRAMMAR.allows(None, Assign));
        assert!(!GRAMMAR.allows(None, Close));

        assert!(GRAMMAR.last().contains(Suffix));
        assert!(!GRAMMAR.last().contains(Open));
        assert!(!GRAMMAR.last().contains(Dyad));
    }

    #[test]
    fn describe_sorts_and_joins_names() {
        assert_eq!(
            "opening parenthesis, prefix operator, semi-colon or variable",
            GRAMMAR.describe(GRAMMAR.first())
        );
        assert_eq!(
            "assignment operator, closing parenthesis, dyadic operator, semi-colon or suffix operator",
            GRAMMAR.describe(GRAMMAR.next(Variable))
        );
    }

    #[test]
    fn describe_small_sets() {
        assert_eq!("variable", GRAMMAR.describe(KindSet::of(&[Variable])));
        assert_eq!(
            "prefix operator or variable",
            GRAMMAR.describe(KindSet::of(&[Variable, Prefix]))
        );
        assert_eq!("", GRAMMAR.describe(KindSet::empty()));
    }
}
