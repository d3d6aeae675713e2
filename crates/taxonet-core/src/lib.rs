//! Taxonet Core — network model, subtree collection, and taxonomy diagnostics

pub mod error;
pub mod graph;
pub mod model;
pub mod network;
pub mod subtree;


pub use error::NetworkError;
pub use graph::{DanglingRef, TaxonomyGraph};
pub use model::{EdgeKind, NetworkEdge, NetworkNode, NodeGroup, ThematicNetwork};
pub use network::{build_network, narrower_edges};
pub use subtree::collect_subtree;
