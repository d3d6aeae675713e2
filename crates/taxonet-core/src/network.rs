//! Thematic network assembly

use std::collections::HashSet;

use taxonet_textbase::{LabelIndex, NotationIndex};

use crate::error::NetworkError;
use crate::model::{EdgeKind, NetworkEdge, NetworkNode, NodeGroup, ThematicNetwork};
use crate::subtree::collect_subtree;

/// Build the thematic network for the subtree rooted at `root`.
///
/// An empty or absent `anchor` skips the anchor node; the association edge
/// is emitted only when both `anchor` and `bridge` are non-empty. The
/// bridge code is never validated against any index.
///
/// The only failure is `RootNotFound`, propagated unchanged from the
/// subtree collection.
pub fn build_network(
    index: &NotationIndex,
    labels: &LabelIndex,
    root: &str,
    anchor: Option<&str>,
    bridge: Option<&str>,
) -> Result<ThematicNetwork, NetworkError> {
    let subtree = collect_subtree(index, root)?;
    let members: HashSet<&str> = subtree.iter().map(String::as_str).collect();

    let mut nodes: Vec<NetworkNode> = subtree
        .iter()
        .map(|code| NetworkNode {
            id: code.clone(),
            label: labels.label(code).to_string(),
            group: NodeGroup::Subtree,
        })
        .collect();

    let mut edges = narrower_edges(index, &subtree, &members);

    let anchor = anchor.filter(|code| !code.is_empty());
    let bridge = bridge.filter(|code| !code.is_empty());

    if let Some(anchor) = anchor {
        if !nodes.iter().any(|node| node.id == anchor) {
            nodes.push(NetworkNode {
                id: anchor.to_string(),
                label: labels.label(anchor).to_string(),
                group: NodeGroup::Anchor,
            });
        }
        if let Some(bridge) = bridge {
            // The manual cross-domain link. The bridge may point outside
            // the extracted region and gets no node of its own.
            edges.push(NetworkEdge {
                source: anchor.to_string(),
                target: bridge.to_string(),
                kind: EdgeKind::Association,
            });
        }
    }

    tracing::debug!(
        root,
        nodes = nodes.len(),
        edges = edges.len(),
        "network assembled"
    );

    Ok(ThematicNetwork {
        root: root.to_string(),
        root_label: labels.label(root).to_string(),
        subtree_size: subtree.len(),
        nodes,
        edges,
    })
}

/// Parent-to-child edges bounded to the given membership set.
///
/// Children recorded in the index but outside `members` are dropped, which
/// keeps the edge list confined to the extracted region.
pub fn narrower_edges(
    index: &NotationIndex,
    ordered: &[String],
    members: &HashSet<&str>,
) -> Vec<NetworkEdge> {
    let mut edges = Vec::new();
    for code in ordered {
        for child in index.children(code) {
            if members.contains(child.as_str()) {
                edges.push(NetworkEdge {
                    source: code.clone(),
                    target: child.clone(),
                    kind: EdgeKind::Narrower,
                });
            }
        }
    }
    edges
}
