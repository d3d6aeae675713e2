//! CLI command implementations

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use taxonet_core::{build_network, TaxonomyGraph};
use taxonet_textbase::{LabelIndex, NotationIndex};

pub fn extract(
    textbase: &Path,
    labels_dir: &Path,
    root: &str,
    anchor: &str,
    bridge: &str,
    lang: &str,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let index = load_index(textbase)?;
    let labels = LabelIndex::load_language(labels_dir, lang)?;

    let anchor = (!anchor.is_empty()).then_some(anchor);
    let bridge = (!bridge.is_empty()).then_some(bridge);
    let network = build_network(&index, &labels, root, anchor, bridge)?;

    let path =
        output.unwrap_or_else(|| PathBuf::from(format!("network_{root}_{lang}.json")));
    let json = network.to_json_pretty()?;
    fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;

    tracing::info!(root, subtree_size = network.subtree_size, "network written");
    println!(
        "Wrote {}: {} nodes, {} edges",
        path.display(),
        network.node_count(),
        network.edge_count()
    );
    Ok(())
}

pub fn show(textbase: &Path, labels_dir: &Path, code: &str, lang: &str) -> anyhow::Result<()> {
    let index = load_index(textbase)?;
    let labels = LabelIndex::load_language(labels_dir, lang)?;

    let record = index
        .get(code)
        .with_context(|| format!("notation {code} not found in textbase"))?;

    println!("{}  {}", code, labels.label(code));
    let mut tags: Vec<&str> = record.tags().collect();
    tags.sort_unstable();
    for tag in tags {
        for value in record.values(tag) {
            println!("  {tag} {value}");
        }
    }
    Ok(())
}

pub fn check(textbase: &Path) -> anyhow::Result<()> {
    let index = load_index(textbase)?;
    let graph = TaxonomyGraph::from_index(&index);

    println!(
        "{} notations, {} child links",
        graph.node_count(),
        graph.edge_count()
    );

    let dangling = graph.dangling_refs();
    if dangling.is_empty() {
        println!("no dangling child references");
    } else {
        println!("{} dangling child references:", dangling.len());
        for reference in dangling {
            println!("  {} -> {}", reference.parent, reference.child);
        }
    }

    let cycles = graph.cycles();
    if cycles.is_empty() {
        println!("no cycles in the children relation");
    } else {
        println!("{} cycles:", cycles.len());
        for cycle in &cycles {
            println!("  {}", cycle.join(" <-> "));
        }
    }
    Ok(())
}

fn load_index(textbase: &Path) -> anyhow::Result<NotationIndex> {
    let index = NotationIndex::load(textbase)
        .with_context(|| format!("reading textbase {}", textbase.display()))?;
    tracing::info!(notations = index.len(), "textbase indexed");
    Ok(index)
}
