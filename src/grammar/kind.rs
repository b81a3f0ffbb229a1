//! Token kinds and sets of kinds.
use std::fmt::{self, Display};

/// The grammatical category of a token, or of an already reduced [`Term`](crate::tree::Term).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LexicalKind {
    Assign,
    Open,
    Close,
    Dyad,
    Prefix,
    Suffix,
    Semicolon,
    /// Synthetic kind of a reduced node. Never appears in raw input.
    Term,
    Variable,
}

impl LexicalKind {
    pub const ALL: [LexicalKind; 9] = [
        LexicalKind::Assign,
        LexicalKind::Open,
        LexicalKind::Close,
        LexicalKind::Dyad,
        LexicalKind::Prefix,
        LexicalKind::Suffix,
        LexicalKind::Semicolon,
        LexicalKind::Term,
        LexicalKind::Variable,
    ];

    /// The single letter identifying this kind in the code form of a token.
    pub fn code(self) -> char {
        match self {
            LexicalKind::Assign => 'a',
            LexicalKind::Open => 'b',
            LexicalKind::Close => 'B',
            LexicalKind::Dyad => 'd',
            LexicalKind::Prefix => 'p',
            LexicalKind::Suffix => 'q',
            LexicalKind::Semicolon => 's',
            LexicalKind::Term => 't',
            LexicalKind::Variable => 'v',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.code() == code)
    }

    pub fn name(self) -> &'static str {
        match self {
            LexicalKind::Assign => "assignment operator",
            LexicalKind::Open => "opening parenthesis",
            LexicalKind::Close => "closing parenthesis",
            LexicalKind::Dyad => "dyadic operator",
            LexicalKind::Prefix => "prefix operator",
            LexicalKind::Suffix => "suffix operator",
            LexicalKind::Semicolon => "semi-colon",
            LexicalKind::Term => "term",
            LexicalKind::Variable => "variable",
        }
    }

    /// Kinds that stand for a complete operand.
    pub fn is_term_like(self) -> bool {
        matches!(self, LexicalKind::Term | LexicalKind::Variable)
    }

    /// Kinds that combine a left and a right operand.
    pub fn is_infix(self) -> bool {
        matches!(
            self,
            LexicalKind::Assign | LexicalKind::Dyad | LexicalKind::Semicolon
        )
    }

    pub fn is_unary(self) -> bool {
        matches!(self, LexicalKind::Prefix | LexicalKind::Suffix)
    }

    pub fn is_bracket(self) -> bool {
        matches!(self, LexicalKind::Open | LexicalKind::Close)
    }

    fn bit(self) -> u16 {
        1 << self as u16
    }
}

impl Display for LexicalKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of [`LexicalKind`]s.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KindSet(u16);

impl KindSet {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn of(kinds: &[LexicalKind]) -> Self {
        kinds.iter().fold(Self::empty(), |set, &kind| set.with(kind))
    }

    pub fn with(self, kind: LexicalKind) -> Self {
        Self(self.0 | kind.bit())
    }

    pub fn contains(&self, kind: LexicalKind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates over the members in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = LexicalKind> + '_ {
        LexicalKind::ALL
            .iter()
            .copied()
            .filter(move |&kind| self.contains(kind))
    }
}

impl FromIterator<LexicalKind> for KindSet {
    fn from_iter<I: IntoIterator<Item = LexicalKind>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), KindSet::with)
    }
}

impl fmt::Debug for KindSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: String = self.iter().map(LexicalKind::code).collect();
        write!(f, "KindSet({codes})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_maps_back_to_its_kind() {
        for kind in LexicalKind::ALL {
            assert_eq!(Some(kind), LexicalKind::from_code(kind.code()));
        }
        assert_eq!(None, LexicalKind::from_code('x'));
    }

    #[test]
    fn open_and_close_codes_differ_only_by_case() {
        assert_eq!('b', LexicalKind::Open.code());
        assert_eq!('B', LexicalKind::Close.code());
    }

    #[test]
    fn set_membership() {
        let set = KindSet::of(&[LexicalKind::Open, LexicalKind::Variable]);

        assert!(set.contains(LexicalKind::Open));
        assert!(set.contains(LexicalKind::Variable));
        assert!(!set.contains(LexicalKind::Close));
        assert_eq!(2, set.len());
        assert_eq!(
            vec![LexicalKind::Open, LexicalKind::Variable],
            set.iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn collecting_kinds_builds_the_same_set() {
        let collected: KindSet = [LexicalKind::Dyad, LexicalKind::Assign, LexicalKind::Dyad]
            .into_iter()
            .collect();

        assert_eq!(KindSet::of(&[LexicalKind::Assign, LexicalKind::Dyad]), collected);
        assert_eq!("KindSet(ad)", format!("{collected:?}"));
    }

    #[test]
    fn predicates_partition_the_operators() {
        for kind in LexicalKind::ALL {
            let classes = [
                kind.is_term_like(),
                kind.is_infix(),
                kind.is_unary(),
                kind.is_bracket(),
            ];
            assert_eq!(1, classes.iter().filter(|&&c| c).count(), "{kind:?}");
        }
    }
}
