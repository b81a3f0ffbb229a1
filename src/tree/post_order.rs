use super::term::{TermId, TermTree};

enum Visit {
    Expand(TermId),
    Yield(TermId),
}

/// Iterator over a tree, visiting each term after its first operand and before its
/// remaining operands. Created by [`TermTree::post_order`].
pub struct PostOrder<'t> {
    tree: &'t TermTree,
    pending: Vec<Visit>,
}

impl<'t> PostOrder<'t> {
    pub(super) fn new(tree: &'t TermTree, root: TermId) -> Self {
        Self {
            tree,
            pending: vec![Visit::Expand(root)],
        }
    }
}

impl<'t> Iterator for PostOrder<'t> {
    type Item = TermId;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        loop {
            match self.pending.pop()? {
                Visit::Yield(id) => return Some(id),
                Visit::Expand(id) => {
                    let operands = tree[id].operands();
                    let (first, rest) = match operands.split_first() {
                        Some(split) => split,
                        None => return Some(id),
                    };

                    self.pending
                        .extend(rest.iter().rev().map(|&operand| Visit::Expand(operand)));
                    self.pending.push(Visit::Yield(id));
                    self.pending.push(Visit::Expand(*first));
                }
            }
        }
    }
}
