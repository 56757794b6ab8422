use crate::catalog::IndexedGraph;
use crate::error::Result;
use crate::types::{EntityKind, Relation};
use graphdoc_protocol::Node;
use serde::Serialize;
use std::collections::HashSet;

/// Total node budget, center included.
pub const DEFAULT_NEIGHBORHOOD_CAP: usize = 31;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NeighborNode {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NeighborEdge {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub edge_type: &'static str,
}

/// A capped sample of the nodes around one entity, for graph widgets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Neighborhood {
    pub nodes: Vec<NeighborNode>,
    pub edges: Vec<NeighborEdge>,
}

/// One batch of neighbors sharing an edge type and direction.
struct RelationSet<'a> {
    ids: Vec<&'a str>,
    edge_type: &'static str,
    /// Edge points from the neighbor to the center.
    inbound: bool,
}

impl<'a> RelationSet<'a> {
    fn outbound(ids: impl IntoIterator<Item = &'a str>, edge_type: &'static str) -> Self {
        Self {
            ids: ids.into_iter().collect(),
            edge_type,
            inbound: false,
        }
    }

    fn inbound(ids: impl IntoIterator<Item = &'a str>, edge_type: &'static str) -> Self {
        Self {
            inbound: true,
            ..Self::outbound(ids, edge_type)
        }
    }
}

fn priority_order<'a>(
    graph: &'a IndexedGraph,
    center: &'a Node,
    kind: EntityKind,
) -> Vec<RelationSet<'a>> {
    let index = graph.index();
    let ownership = graph.ownership();
    let id = center.id.as_str();
    let related = move |relation: Relation| index.related(relation, id).iter().map(String::as_str);

    let mut sets = vec![
        RelationSet::outbound(related(Relation::Imports), "imports"),
        RelationSet::inbound(related(Relation::ImportedBy), "imports"),
        RelationSet::outbound(related(Relation::Calls), "calls"),
        RelationSet::inbound(related(Relation::CalledBy), "calls"),
        RelationSet::outbound(related(Relation::DefinesFunction), "defines"),
        RelationSet::outbound(related(Relation::DeclaresClass), "defines"),
        RelationSet::outbound(related(Relation::DefinesType), "defines"),
        RelationSet::outbound(related(Relation::Extends), "extends"),
        RelationSet::outbound(related(Relation::ContainsFile), "contains"),
        RelationSet::outbound(related(Relation::ChildDirectory), "contains"),
    ];

    for owner_kind in [EntityKind::Function, EntityKind::Class, EntityKind::Type] {
        if let Some(file) = index.defining_file(owner_kind, id) {
            sets.push(RelationSet::inbound([file.as_str()], "defines"));
        }
    }

    if let Some(domain) = ownership.domain(id).and_then(|name| index.domain_node(name)) {
        sets.push(RelationSet::outbound([domain.as_str()], "belongsTo"));
    }
    if let Some(sub) = ownership
        .subdomain(id)
        .and_then(|name| index.subdomain_node(name))
    {
        sets.push(RelationSet::outbound([sub.as_str()], "belongsTo"));
    }

    match kind {
        EntityKind::Domain => {
            let subs = index.domain_subdomains(center.name());
            sets.push(RelationSet::outbound(
                subs.iter().map(String::as_str),
                "contains",
            ));
        }
        EntityKind::Subdomain => {
            let parent = index
                .part_of_domain(id)
                .and_then(|name| index.domain_node(name));
            if let Some(parent) = parent {
                sets.push(RelationSet::outbound([parent.as_str()], "partOf"));
            }
        }
        _ => {}
    }

    sets
}

/// Collects nodes once each, in insertion order.
struct Sampler<'g> {
    graph: &'g IndexedGraph,
    seen: HashSet<&'g str>,
    out: Neighborhood,
}

impl<'g> Sampler<'g> {
    /// `false` when the node is unknown; a repeat counts as present.
    fn add(&mut self, id: &str) -> bool {
        if self.seen.contains(id) {
            return true;
        }
        let Some(node) = self.graph.node(id) else {
            return false;
        };
        self.seen.insert(node.id.as_str());
        self.out.nodes.push(NeighborNode {
            id: node.id.clone(),
            label: self.graph.display_name(&node.id).to_string(),
            node_type: node.primary_label().unwrap_or_default().to_string(),
            slug: self.graph.slug(&node.id).map(str::to_string),
        });
        true
    }
}

impl Neighborhood {
    /// Walk the label's relation sets in priority order until `cap` nodes
    /// are collected. Unknown neighbors are skipped along with their edge;
    /// a neighbor already collected only contributes its edge.
    #[must_use]
    pub fn sample(graph: &IndexedGraph, center: &Node, kind: EntityKind, cap: usize) -> Self {
        let mut sampler = Sampler {
            graph,
            seen: HashSet::new(),
            out: Self::default(),
        };
        if cap == 0 || !sampler.add(&center.id) {
            return sampler.out;
        }

        'sets: for set in priority_order(graph, center, kind) {
            for neighbor in set.ids {
                if sampler.seen.len() >= cap {
                    break 'sets;
                }
                if !sampler.add(neighbor) {
                    continue;
                }
                let (source, target) = if set.inbound {
                    (neighbor, center.id.as_str())
                } else {
                    (center.id.as_str(), neighbor)
                };
                sampler.out.edges.push(NeighborEdge {
                    source: source.to_string(),
                    target: target.to_string(),
                    edge_type: set.edge_type,
                });
            }
        }

        sampler.out
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Only the center was collected.
    #[must_use]
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() < 2
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
