use crate::{
    error::Element,
    grammar::LexicalKind,
    tokens::Token,
    tree::{TermArena, TermId, TermTree},
};

/// An element of the parse stack: either a token that has not been reduced yet, identified
/// by its index in the input, or a term built by a reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Item {
    Token(usize),
    Term(TermId),
}

/// The mixed stack of raw tokens and reduced terms, live for a single parse.
pub(super) struct ParseStack<'t> {
    tokens: &'t [Token],
    items: Vec<Item>,
    terms: TermArena,
}

impl<'t> ParseStack<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            items: vec![],
            terms: TermArena::new(),
        }
    }

    pub fn tokens(&self) -> &'t [Token] {
        self.tokens
    }

    pub fn token(&self, index: usize) -> &'t Token {
        &self.tokens[index]
    }

    pub fn terms(&mut self) -> &mut TermArena {
        &mut self.terms
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn top(&self) -> Option<Item> {
        self.items.last().copied()
    }

    /// The topmost `N` items, bottom first.
    pub fn window<const N: usize>(&self) -> Option<[Item; N]> {
        let start = self.items.len().checked_sub(N)?;
        self.items[start..].try_into().ok()
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Option<Item> {
        self.items.pop()
    }

    /// Replaces the topmost `count` items with `item`.
    pub fn replace(&mut self, count: usize, item: Item) {
        self.items.truncate(self.items.len() - count);
        self.items.push(item);
    }

    pub fn kind_of(&self, item: Item) -> LexicalKind {
        match item {
            Item::Token(index) => self.tokens[index].kind,
            Item::Term(_) => LexicalKind::Term,
        }
    }

    pub fn top_kind(&self) -> Option<LexicalKind> {
        self.top().map(|item| self.kind_of(item))
    }

    pub fn top_is_term(&self) -> bool {
        matches!(self.top(), Some(Item::Term(_)))
    }

    /// Returns `true` if the top of the stack is an unreduced token of the given kind.
    pub fn top_is_token(&self, kind: LexicalKind) -> bool {
        matches!(self.top(), Some(Item::Token(index)) if self.tokens[index].kind == kind)
    }

    pub fn element(&self, item: Item) -> Element {
        match item {
            Item::Token(index) => {
                let token = &self.tokens[index];
                Element::new(token.kind, token.label.clone())
            }
            Item::Term(id) => Element::new(LexicalKind::Term, self.terms.get(id).label()),
        }
    }

    /// Consumes the stack, producing a tree if exactly one term remains.
    pub fn into_tree(self) -> Result<TermTree, Self> {
        match self.items.as_slice() {
            [Item::Term(root)] => {
                let root = *root;
                Ok(self.terms.finish(root))
            }
            _ => Err(self),
        }
    }
}
