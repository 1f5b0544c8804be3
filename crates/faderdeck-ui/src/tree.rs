//! Widget tree lookup helpers.

/// Read-only access to a widget's ordered child list.
pub trait UiNode: Sized {
    /// Child widgets, in declaration order.
    fn children(&self) -> &[Self];
}

/// Finds the first descendant of `root` matching `predicate`, in pre-order.
///
/// `root` itself is never tested. The first match wins even when it sits
/// deep inside an earlier sibling's subtree; a shallower match in a later
/// sibling is not preferred. The child relation must be acyclic or the
/// search will not terminate.
pub fn find_descendant<'a, N, P>(root: Option<&'a N>, predicate: P) -> Option<&'a N>
where
    N: UiNode,
    P: Fn(&N) -> bool,
{
    let root = root?;
    let found = search(root, &predicate);
    if found.is_none() {
        tracing::trace!(target: "faderdeck_ui", "descendant search exhausted the subtree");
    }
    found
}

fn search<'a, N, P>(node: &'a N, predicate: &P) -> Option<&'a N>
where
    N: UiNode,
    P: Fn(&N) -> bool,
{
    for child in node.children() {
        if predicate(child) {
            return Some(child);
        }
        if let Some(found) = search(child, predicate) {
            return Some(found);
        }
    }
    None
}
