//! Taxonomy adjacency graph for corpus diagnostics

use std::collections::HashMap;

use petgraph::algo::tarjan_scc;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};

use taxonet_textbase::NotationIndex;

/// A parent-to-child reference whose child has no record of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingRef {
    pub parent: String,
    pub child: String,
}

/// The whole children relation as an explicit directed graph.
///
/// Built once from a `NotationIndex` and read-only afterwards. Used to
/// report the referential errors real corpora accumulate: dangling child
/// references and cycles in a relation that should be a strict tree.
pub struct TaxonomyGraph {
    inner: StableDiGraph<String, ()>,
    ids: HashMap<String, NodeIndex>,
    dangling: Vec<DanglingRef>,
}

impl std::fmt::Debug for TaxonomyGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaxonomyGraph")
            .field("node_count", &self.inner.node_count())
            .field("edge_count", &self.inner.edge_count())
            .field("dangling", &self.dangling.len())
            .finish()
    }
}

impl TaxonomyGraph {
    /// Build the adjacency graph over every indexed notation.
    ///
    /// Nodes are added in sorted code order so reports are deterministic.
    /// Child links whose target is unindexed become dangling references
    /// instead of edges.
    pub fn from_index(index: &NotationIndex) -> Self {
        let mut inner = StableDiGraph::new();
        let mut ids = HashMap::new();

        let mut codes: Vec<&str> = index.codes().collect();
        codes.sort_unstable();

        for &code in &codes {
            let idx = inner.add_node(code.to_string());
            ids.insert(code.to_string(), idx);
        }

        let mut dangling = Vec::new();
        for &code in &codes {
            let parent = ids[code];
            for child in index.children(code) {
                match ids.get(child.as_str()) {
                    Some(&target) => {
                        inner.add_edge(parent, target, ());
                    }
                    None => dangling.push(DanglingRef {
                        parent: code.to_string(),
                        child: child.clone(),
                    }),
                }
            }
        }

        tracing::debug!(
            nodes = inner.node_count(),
            edges = inner.edge_count(),
            dangling = dangling.len(),
            "taxonomy graph built"
        );

        TaxonomyGraph {
            inner,
            ids,
            dangling,
        }
    }

    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.ids.contains_key(code)
    }

    /// Child references found while building whose target is unindexed.
    pub fn dangling_refs(&self) -> &[DanglingRef] {
        &self.dangling
    }

    /// Cycles in the children relation: strongly connected components with
    /// more than one member, plus self-loops. Members are sorted so the
    /// report is stable.
    pub fn cycles(&self) -> Vec<Vec<String>> {
        let mut cycles = Vec::new();
        for scc in tarjan_scc(&self.inner) {
            let is_cycle = scc.len() > 1
                || (scc.len() == 1 && self.inner.find_edge(scc[0], scc[0]).is_some());
            if is_cycle {
                let mut members: Vec<String> =
                    scc.iter().map(|&idx| self.inner[idx].clone()).collect();
                members.sort_unstable();
                cycles.push(members);
            }
        }
        cycles.sort();
        cycles
    }
}
