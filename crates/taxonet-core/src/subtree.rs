//! Depth-first subtree collection over the children relation

use std::collections::HashSet;

use taxonet_textbase::NotationIndex;

use crate::error::NetworkError;

/// Collect every code reachable from `root` via the children relation.
///
/// Pre-order: a code appears before any of its descendants, and sibling
/// order follows the child lists (children are pushed in reverse so the
/// first child is processed next). Each code appears exactly once.
///
/// The seen-set also terminates traversal on cyclic child references. The
/// source format is nominally a tree, but external taxonomy data may
/// contain referential errors, so the guard stays.
pub fn collect_subtree(index: &NotationIndex, root: &str) -> Result<Vec<String>, NetworkError> {
    if !index.contains(root) {
        return Err(NetworkError::RootNotFound(root.to_string()));
    }

    let mut ordered = Vec::new();
    let mut seen = HashSet::new();
    let mut stack = vec![root.to_string()];

    while let Some(code) = stack.pop() {
        if !seen.insert(code.clone()) {
            continue;
        }
        // Codes missing from the index have no children: dangling
        // references become leaves, not errors.
        for child in index.children(&code).iter().rev() {
            stack.push(child.clone());
        }
        ordered.push(code);
    }

    Ok(ordered)
}
