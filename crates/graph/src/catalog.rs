use crate::index::RelationIndex;
use crate::merge::MergedGraph;
use crate::ownership::Ownership;
use crate::slug::SlugTable;
use graphdoc_protocol::Node;

/// Output of phase 1: the merged graph plus every structure derived from it.
///
/// Rendering may only start once this exists, since any document can link to
/// any other entity's slug. Nothing here is mutated after [`build`](Self::build).
#[derive(Debug)]
pub struct IndexedGraph {
    graph: MergedGraph,
    index: RelationIndex,
    ownership: Ownership,
    slugs: SlugTable,
}

impl IndexedGraph {
    #[must_use]
    pub fn build(graph: MergedGraph) -> Self {
        let index = RelationIndex::build(&graph);
        let ownership = Ownership::resolve(&graph, &index);
        let slugs = SlugTable::allocate(&graph);
        log::info!("{} slugs allocated", slugs.len());

        Self {
            graph,
            index,
            ownership,
            slugs,
        }
    }

    #[must_use]
    pub fn graph(&self) -> &MergedGraph {
        &self.graph
    }

    #[must_use]
    pub fn index(&self) -> &RelationIndex {
        &self.index
    }

    #[must_use]
    pub fn ownership(&self) -> &Ownership {
        &self.ownership
    }

    #[must_use]
    pub fn slugs(&self) -> &SlugTable {
        &self.slugs
    }

    #[must_use]
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.graph.node(id)
    }

    #[must_use]
    pub fn slug(&self, id: &str) -> Option<&str> {
        self.slugs.get(id)
    }

    /// `name` of the node, falling back to the raw identifier for unknown or
    /// unnamed nodes.
    #[must_use]
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.node(id)
            .and_then(|n| n.properties.non_empty("name"))
            .unwrap_or(id)
    }

    /// Like [`display_name`](Self::display_name) but prefers `path`, then
    /// `filePath`.
    #[must_use]
    pub fn display_path<'a>(&'a self, id: &'a str) -> &'a str {
        let Some(node) = self.node(id) else {
            return id;
        };
        let props = &node.properties;
        props
            .non_empty("path")
            .or_else(|| props.non_empty("filePath"))
            .or_else(|| props.non_empty("name"))
            .unwrap_or(id)
    }
}
