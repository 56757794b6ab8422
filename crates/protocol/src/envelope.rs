use crate::error::{ProtocolError, Result};
use crate::types::Graph;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Which of the accepted document shapes produced the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeShape {
    /// `{ "result": { "graph": ... } }`
    ApiResponse,
    /// `{ "graph": ... }`
    GraphResult,
    /// `{ "nodes": ..., "relationships": ... }`
    BareGraph,
}

impl EnvelopeShape {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ApiResponse => "api_response",
            Self::GraphResult => "graph_result",
            Self::BareGraph => "bare_graph",
        }
    }
}

/// Summary counters some producers attach next to the graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphStats {
    #[serde(default)]
    pub node_count: usize,
    #[serde(default)]
    pub relationship_count: usize,
    #[serde(default)]
    pub node_types: BTreeMap<String, usize>,
    #[serde(default)]
    pub relationship_types: BTreeMap<String, usize>,
}

#[derive(Debug, Clone)]
pub struct DecodedGraph {
    pub graph: Graph,
    pub shape: EnvelopeShape,
    pub stats: Option<GraphStats>,
}

/// Decode one input document.
///
/// The bytes are parsed once; each envelope shape is then tried in order and
/// the first one whose graph has at least one node wins.
pub fn decode_graph(bytes: &[u8]) -> Result<DecodedGraph> {
    let root: Value = serde_json::from_slice(bytes)?;

    let result = root.get("result");
    let candidates = [
        (
            EnvelopeShape::ApiResponse,
            result.and_then(|r| r.get("graph")),
            result.and_then(|r| r.get("stats")),
        ),
        (
            EnvelopeShape::GraphResult,
            root.get("graph"),
            root.get("stats"),
        ),
        (EnvelopeShape::BareGraph, Some(&root), None),
    ];

    for (shape, graph, stats) in candidates {
        let Some(graph) = graph else {
            continue;
        };
        let Ok(graph) = Graph::deserialize(graph) else {
            continue;
        };
        if graph.is_empty() {
            continue;
        }
        let stats = stats.and_then(|s| GraphStats::deserialize(s).ok());
        return Ok(DecodedGraph {
            graph,
            shape,
            stats,
        });
    }

    Err(ProtocolError::UnrecognizedEnvelope)
}
