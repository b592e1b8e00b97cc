//! Checks that run after a tree has been built.
//!
//! These reject constructs the grammar admits but the language forbids,
//! reported with the same fatal diagnostic as a parse error.

use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::query::{NodeId, NodeKind, NodeValue, Tree};

pub fn validate(tree: &Tree, root: NodeId) -> Result<(), Diagnostic> {
    for (_, id) in tree.preorder(root) {
        match tree.kind(id) {
            NodeKind::Path => check_exclusive(tree, id, NodeKind::Primary, &[
                NodeKind::Focus,
                NodeKind::FocusCapture,
            ])?,
            NodeKind::Move => {
                check_exclusive(tree, id, NodeKind::Legal, &[NodeKind::PseudoLegal])?
            }
            NodeKind::RepeatRange | NodeKind::Range => check_range(tree, id)?,
            _ => {}
        }
    }
    Ok(())
}

fn check_exclusive(
    tree: &Tree,
    id: NodeId,
    first: NodeKind,
    others: &[NodeKind],
) -> Result<(), Diagnostic> {
    let children = tree.children(id);
    let Some(&a) = children.iter().find(|&&c| tree.kind(c) == first) else {
        return Ok(());
    };
    let Some(&b) = children.iter().find(|&&c| others.contains(&tree.kind(c))) else {
        return Ok(());
    };
    Err(
        Diagnostic::new(DiagnosticKind::ConflictingParameters, tree.span(b))
            .message(format!(
                "`{}` cannot be combined with `{}`",
                tree.kind(b).name(),
                first.name()
            ))
            .related_to("conflicts with this", tree.span(a)),
    )
}

fn check_range(tree: &Tree, id: NodeId) -> Result<(), Diagnostic> {
    if let NodeValue::Range {
        min: Some(min),
        max: Some(max),
    } = tree.get(id).value
        && min > max
    {
        return Err(Diagnostic::new(DiagnosticKind::InvalidRange, tree.span(id))
            .message(format!("{min} > {max}")));
    }
    Ok(())
}
