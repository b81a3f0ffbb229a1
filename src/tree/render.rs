//! Renders a tree as aligned text, one row per depth level.
use std::iter;

use crate::grammar::LexicalKind;

use super::term::TermTree;

/// Renders `tree` with each term on the row for its depth. Operands of an infix term sit
/// to its left and right on the row below; unary terms and variables share a column with
/// what follows them. A non-empty `title` is joined with spaces into a leading row.
pub fn render(tree: &TermTree, title: &[&str]) -> String {
    let mut rows = vec![String::new(); tree.max_depth() + 1];

    for id in tree.post_order() {
        let term = &tree[id];

        if term.kind().is_infix() {
            align(&mut rows);
        }

        let row = &mut rows[tree.depth(id)];
        row.push(' ');
        row.push_str(term.label());

        if !matches!(
            term.kind(),
            LexicalKind::Prefix | LexicalKind::Suffix | LexicalKind::Variable
        ) {
            align(&mut rows);
        }
    }

    let heading = title.join(" ");
    let lines = rows
        .iter()
        .map(|row| row.trim_end())
        .skip_while(|row| row.is_empty());

    iter::once(heading.as_str())
        .filter(|_| !title.is_empty())
        .chain(lines)
        .map(|line| format!("{line}\n"))
        .collect()
}

/// Pads every row with spaces to the length of the longest.
fn align(rows: &mut [String]) {
    let width = rows.iter().map(String::len).max().unwrap_or(0);
    for row in rows.iter_mut() {
        let padding = width - row.len();
        row.extend(iter::repeat(' ').take(padding));
    }
}

#[cfg(test)]
mod tests {
    use crate::tree::TermArena;

    use super::*;

    #[test]
    fn single_variable() {
        let mut arena = TermArena::new();
        let v1 = arena.leaf(LexicalKind::Variable, "v1");
        let tree = arena.finish(v1);

        assert_eq!(" v1\n", render(&tree, &[]));
    }

    #[test]
    fn infix_operands_are_split_around_the_operator() {
        let mut arena = TermArena::new();
        let v1 = arena.leaf(LexicalKind::Variable, "v1");
        let v3 = arena.leaf(LexicalKind::Variable, "v3");
        let d2 = arena.apply(LexicalKind::Dyad, "d2", vec![v1, v3]);
        let tree = arena.finish(d2);

        assert_eq!("    d2\n v1    v3\n", render(&tree, &[]));
    }

    #[test]
    fn title_is_prepended() {
        let mut arena = TermArena::new();
        let v1 = arena.leaf(LexicalKind::Variable, "v1");
        let p1 = arena.apply(LexicalKind::Prefix, "p1", vec![v1]);
        let tree = arena.finish(p1);

        assert_eq!("Prefix test\n p1\n v1\n", render(&tree, &["Prefix", "test"]));
    }

    #[test]
    fn lone_placeholder() {
        let mut arena = TermArena::new();
        let empty = arena.leaf(LexicalKind::Term, "empty2");
        let tree = arena.finish(empty);

        assert_eq!(" empty2\n", render(&tree, &[]));
    }
}
