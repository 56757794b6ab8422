//! # graphdoc graph engine
//!
//! Turns decoded code-property graphs into one documentation record per
//! entity (file, function, class, type, domain, subdomain, directory).
//!
//! ## Features
//!
//! - **Merge & dedup** - first node per identifier wins, edges concatenate
//! - **Relation index** - forward and reverse adjacency in edge order
//! - **Ownership inference** - domains and subdomains from contained symbols
//! - **Stable slugs** - readable identifiers with numeric collision suffixes
//! - **Multi-view rendering** - front matter, body, FAQs, neighborhood JSON,
//!   Mermaid diagram and architecture map from the same indices
//!
//! ## Architecture
//!
//! ```text
//! Graph[]
//!     │
//!     ├──> GraphMerger            (phase 1)
//!     │      └─ MergedGraph: unique nodes, all relationships
//!     │
//!     ├──> IndexedGraph::build    (phase 1)
//!     │      ├─ RelationIndex: adjacency, definitions, membership names
//!     │      ├─ Ownership: direct + inferred domain/subdomain
//!     │      └─ SlugTable: one slug per renderable entity
//!     │
//!     └──> Renderer               (phase 2, parallel per entity)
//!            ├─ EntityRecipe per label: metadata, sections, FAQs
//!            ├─ Neighborhood (cap 31) -> graph_data
//!            ├─ Mermaid diagram (cap 15) -> mermaid_diagram
//!            └─ ArchMap -> arch_map
//! ```
//!
//! Phase 2 needs the complete slug table, so [`IndexedGraph`] is the only way
//! in to [`Renderer`].

mod arch_map;
mod catalog;
mod diagram;
mod error;
mod index;
mod merge;
mod neighborhood;
mod ownership;
mod render;
mod slug;
mod types;

pub use arch_map::{ArchEntity, ArchMap, ArchRef};
pub use catalog::IndexedGraph;
pub use diagram::{mermaid_diagram, mermaid_escape, mermaid_id, DEFAULT_DIAGRAM_CAP};
pub use error::{GraphError, Result};
pub use index::RelationIndex;
pub use merge::{merge_graphs, GraphMerger, MergeReport, MergedGraph};
pub use neighborhood::{NeighborEdge, NeighborNode, Neighborhood, DEFAULT_NEIGHBORHOOD_CAP};
pub use ownership::Ownership;
pub use render::{
    html_escape, recipe_for, render_documents, EntityRecipe, Faq, MetaValue, Metadata,
    RenderConfig, RenderContext, RenderedDocument, Renderer, Section,
};
pub use slug::{base_slug, is_repo_root, slugify, SlugEntry, SlugTable, REPO_ROOT_MARKER};
pub use types::{EntityKind, Relation, RelationKind};
