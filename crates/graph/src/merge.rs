use graphdoc_protocol::{Graph, Node, Relationship};
use std::collections::HashMap;

/// The single entity universe built from every input graph.
#[derive(Debug, Clone, Default)]
pub struct MergedGraph {
    nodes: Vec<Node>,
    relationships: Vec<Relationship>,
    positions: HashMap<String, usize>,
}

impl MergedGraph {
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[must_use]
    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    #[must_use]
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.positions.get(id).map(|&idx| &self.nodes[idx])
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Outcome of folding one graph into the merger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeReport {
    pub nodes_added: usize,
    pub duplicates_dropped: usize,
    pub relationships: usize,
}

/// Folds graphs in input order.
///
/// The first node seen for an identifier is kept and later copies are
/// dropped without merging properties. Relationships are concatenated as-is,
/// including ones that point at dropped copies or unknown identifiers.
#[derive(Debug, Default)]
pub struct GraphMerger {
    merged: MergedGraph,
}

impl GraphMerger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, graph: Graph) -> MergeReport {
        let mut report = MergeReport {
            relationships: graph.relationships.len(),
            ..MergeReport::default()
        };

        for node in graph.nodes {
            if self.merged.positions.contains_key(&node.id) {
                log::debug!("Dropping duplicate node {}", node.id);
                report.duplicates_dropped += 1;
                continue;
            }
            self.merged
                .positions
                .insert(node.id.clone(), self.merged.nodes.len());
            self.merged.nodes.push(node);
            report.nodes_added += 1;
        }
        self.merged.relationships.extend(graph.relationships);

        report
    }

    #[must_use]
    pub fn finish(self) -> MergedGraph {
        log::info!(
            "Total: {} unique nodes, {} relationships",
            self.merged.node_count(),
            self.merged.relationship_count()
        );
        self.merged
    }
}

/// Merge graphs in order; see [`GraphMerger`].
pub fn merge_graphs<I>(graphs: I) -> MergedGraph
where
    I: IntoIterator<Item = Graph>,
{
    let mut merger = GraphMerger::new();
    for graph in graphs {
        merger.push(graph);
    }
    merger.finish()
}
