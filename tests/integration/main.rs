//! Integration tests for taxonet
//!
//! These exercise the full pipeline over an on-disk fixture corpus:
//! textbase parsing, label loading, network assembly, and JSON output.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use taxonet_core::{
    build_network, EdgeKind, NetworkError, NodeGroup, TaxonomyGraph, ThematicNetwork,
};
use taxonet_textbase::{LabelIndex, NotationIndex};

const TEXTBASE: &str = "\
N 48C51
T printmaking and graphic arts
C 48C511
C 48C513
; 48C514
$
N 48C511
$
N 48C513
$
N 48C514
$
N 31AA231
$
";

/// Lay out a corpus the way the source data ships: a textbase file next to
/// a per-language label directory.
fn write_corpus(root: &Path) {
    fs::write(root.join("notations.txt"), TEXTBASE).unwrap();

    let lang_dir = root.join("txt").join("en");
    fs::create_dir_all(&lang_dir).unwrap();
    fs::write(
        lang_dir.join("txt_en_0_1.txt"),
        "48C51|graphic arts\n48C511|engraving (stale)\n31AA231|standing figure\n",
    )
    .unwrap();
    fs::write(lang_dir.join("txt_en_1_2.txt"), "48C511|engraving\n").unwrap();
}

#[test]
fn test_end_to_end_extraction() {
    let dir = TempDir::new().unwrap();
    write_corpus(dir.path());

    let index = NotationIndex::load(&dir.path().join("notations.txt")).unwrap();
    let labels = LabelIndex::load_language(&dir.path().join("txt"), "en").unwrap();

    let network =
        build_network(&index, &labels, "48C51", Some("31AA231"), Some("48C514")).unwrap();

    // Pre-order with sibling order preserved, continuation child included.
    let ids: Vec<&str> = network.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, ["48C51", "48C511", "48C513", "48C514", "31AA231"]);
    assert_eq!(network.subtree_size, 4);
    assert_eq!(network.root_label, "graphic arts");

    // Later label file overrides the earlier one.
    assert_eq!(network.nodes[1].label, "engraving");

    assert_eq!(network.nodes.last().unwrap().group, NodeGroup::Anchor);
    let association = network.edges.last().unwrap();
    assert_eq!(association.kind, EdgeKind::Association);
    assert_eq!(association.source, "31AA231");
    assert_eq!(association.target, "48C514");
}

#[test]
fn test_written_document_round_trips() {
    let dir = TempDir::new().unwrap();
    write_corpus(dir.path());

    let index = NotationIndex::load(&dir.path().join("notations.txt")).unwrap();
    let labels = LabelIndex::load_language(&dir.path().join("txt"), "en").unwrap();
    let network =
        build_network(&index, &labels, "48C51", Some("31AA231"), Some("48C514")).unwrap();

    let output = dir.path().join("network_48C51_en.json");
    fs::write(&output, network.to_json_pretty().unwrap()).unwrap();

    let parsed: ThematicNetwork =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(parsed, network);
}

#[test]
fn test_root_not_found_surfaces() {
    let dir = TempDir::new().unwrap();
    write_corpus(dir.path());

    let index = NotationIndex::load(&dir.path().join("notations.txt")).unwrap();
    let labels = LabelIndex::new();

    let err = build_network(&index, &labels, "99Z99", None, None).unwrap_err();
    assert!(matches!(err, NetworkError::RootNotFound(ref code) if code == "99Z99"));
    assert!(err.to_string().contains("99Z99"));
}

#[test]
fn test_check_diagnostics_over_corpus() {
    let dir = TempDir::new().unwrap();
    // 48C512 is referenced but never defined.
    fs::write(
        dir.path().join("notations.txt"),
        "N 48C51\nC 48C511\nC 48C512\n$\nN 48C511\n$\n",
    )
    .unwrap();

    let index = NotationIndex::load(&dir.path().join("notations.txt")).unwrap();
    let graph = TaxonomyGraph::from_index(&index);

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.dangling_refs().len(), 1);
    assert_eq!(graph.dangling_refs()[0].child, "48C512");
    assert!(graph.cycles().is_empty());
}
