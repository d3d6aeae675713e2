//! Core data structures for the thematic network

use serde::{Deserialize, Serialize};

/// Which region of the network a node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeGroup {
    /// Member of the extracted subtree.
    Subtree,
    /// The externally specified anchor notation.
    Anchor,
}

/// What kind of relationship an edge represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Parent-to-child link inside the extracted subtree.
    Narrower,
    /// The single manual cross-domain link from anchor to bridge.
    Association,
}

/// A node in the thematic network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkNode {
    pub id: String,
    pub label: String,
    pub group: NodeGroup,
}

/// A directed edge in the thematic network.
///
/// The association edge may target a code that is not a node in the
/// network; consumers must not assume every target resolves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkEdge {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub kind: EdgeKind,
}

/// The complete extraction result, in its serialized shape.
///
/// Constructed once per run and not mutated afterwards. Node ids are
/// unique; `nodes` and `edges` keep construction order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThematicNetwork {
    pub root: String,
    pub root_label: String,
    pub subtree_size: usize,
    pub nodes: Vec<NetworkNode>,
    pub edges: Vec<NetworkEdge>,
}

impl ThematicNetwork {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Serialize to the human-readable JSON document this tool emits.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
