use std::{
    fmt::{self, Display},
    ops::Index,
};

use crate::grammar::LexicalKind;

use super::{post_order::PostOrder, render::render};

/// Index of a [`Term`] within the tree that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TermId(usize);

/// A node of the parse tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    label: String,
    kind: LexicalKind,
    operands: Vec<TermId>,
    parent: Option<TermId>,
}
impl Term {
    /// The operator label: the text of the token that produced this term, or a placeholder name.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The kind of the token that produced this term. Placeholders have kind
    /// [`LexicalKind::Term`].
    pub fn kind(&self) -> LexicalKind {
        self.kind
    }

    pub fn operands(&self) -> &[TermId] {
        &self.operands
    }

    pub fn parent(&self) -> Option<TermId> {
        self.parent
    }

    pub fn is_leaf(&self) -> bool {
        self.operands.is_empty()
    }
}

/// Storage for the terms of a single parse. Terms are only ever appended; building a term
/// from operands records the new term as their parent.
#[derive(Debug, Default)]
pub(crate) struct TermArena {
    terms: Vec<Term>,
}
impl TermArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn leaf(&mut self, kind: LexicalKind, label: impl Into<String>) -> TermId {
        self.apply(kind, label, vec![])
    }

    pub fn apply(
        &mut self,
        kind: LexicalKind,
        label: impl Into<String>,
        operands: Vec<TermId>,
    ) -> TermId {
        let id = TermId(self.terms.len());
        for operand in operands.iter() {
            self.terms[operand.0].parent = Some(id);
        }
        self.terms.push(Term {
            label: label.into(),
            kind,
            operands,
            parent: None,
        });
        id
    }

    pub fn get(&self, id: TermId) -> &Term {
        &self.terms[id.0]
    }

    pub fn finish(self, root: TermId) -> TermTree {
        TermTree {
            terms: self.terms,
            root,
        }
    }
}

/// A finished parse tree. Every term is owned by the tree; the root has no parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermTree {
    terms: Vec<Term>,
    root: TermId,
}
impl TermTree {
    pub fn root(&self) -> TermId {
        self.root
    }

    pub fn root_term(&self) -> &Term {
        &self[self.root]
    }

    /// The number of terms reachable from the root.
    pub fn len(&self) -> usize {
        self.post_order().count()
    }

    /// 1 for the root, plus one for each parent hop above `id`.
    pub fn depth(&self, id: TermId) -> usize {
        let mut depth = 1;
        let mut current = self[id].parent;
        while let Some(parent) = current {
            depth += 1;
            current = self[parent].parent;
        }
        depth
    }

    pub fn max_depth(&self) -> usize {
        self.post_order()
            .map(|id| self.depth(id))
            .max()
            .unwrap_or(1)
    }

    /// Visits the first operand, then the term itself, then the remaining operands.
    pub fn post_order(&self) -> PostOrder<'_> {
        PostOrder::new(self, self.root)
    }

    /// Labels of the leaf terms, left to right.
    pub fn leaves(&self) -> Vec<&str> {
        self.post_order()
            .map(|id| &self[id])
            .filter(|term| term.is_leaf())
            .map(Term::label)
            .collect()
    }

    pub fn render(&self, title: &[&str]) -> String {
        render(self, title)
    }

    fn fmt_term(&self, id: TermId, f: &mut fmt::Formatter) -> fmt::Result {
        let term = &self[id];
        f.write_str(&term.label)?;
        if let Some((first, rest)) = term.operands.split_first() {
            f.write_str("(")?;
            self.fmt_term(*first, f)?;
            for operand in rest {
                f.write_str(", ")?;
                self.fmt_term(*operand, f)?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

impl Index<TermId> for TermTree {
    type Output = Term;

    fn index(&self, id: TermId) -> &Self::Output {
        &self.terms[id.0]
    }
}

impl Display for TermTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_term(self.root, f)
    }
}
