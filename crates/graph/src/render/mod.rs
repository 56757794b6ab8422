//! Phase 2: one [`RenderedDocument`] per slugged entity.

mod class;
mod context;
mod directory;
mod document;
mod domain;
mod faq;
mod file;
mod function;
mod recipe;
mod subdomain;
mod symbol;
mod tags;
mod type_def;

pub use context::{html_escape, RenderContext};
pub use document::{Faq, MetaValue, Metadata, RenderedDocument, Section};
pub use recipe::{recipe_for, EntityRecipe};

use crate::arch_map::ArchMap;
use crate::catalog::IndexedGraph;
use crate::diagram::{mermaid_diagram, DEFAULT_DIAGRAM_CAP};
use crate::neighborhood::{Neighborhood, DEFAULT_NEIGHBORHOOD_CAP};
use crate::slug::SlugEntry;
use rayon::prelude::*;

/// Values substituted into rendered prose plus the export budgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub repo_name: String,
    /// Browse URL base; empty disables `Source` sections.
    pub repo_url: String,
    pub branch: String,
    pub neighborhood_cap: usize,
    pub diagram_cap: usize,
    /// Fewer candidate FAQs than this and the block is dropped.
    pub min_faqs: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            repo_name: "repository".to_string(),
            repo_url: String::new(),
            branch: "main".to_string(),
            neighborhood_cap: DEFAULT_NEIGHBORHOOD_CAP,
            diagram_cap: DEFAULT_DIAGRAM_CAP,
            min_faqs: 2,
        }
    }
}

/// Renders entities against a finished [`IndexedGraph`].
pub struct Renderer<'a> {
    graph: &'a IndexedGraph,
    config: &'a RenderConfig,
}

impl<'a> Renderer<'a> {
    #[must_use]
    pub fn new(graph: &'a IndexedGraph, config: &'a RenderConfig) -> Self {
        Self { graph, config }
    }

    #[must_use]
    pub fn render(&self, entry: &SlugEntry) -> RenderedDocument {
        let node = &self.graph.graph().nodes()[entry.node];
        let cx = RenderContext {
            graph: self.graph,
            config: self.config,
            node,
            kind: entry.kind,
            slug: &entry.slug,
        };
        let recipe = recipe_for(entry.kind);

        let mut metadata = recipe.metadata(&cx);
        metadata.list("tags", tags::tags(&cx));
        self.push_exports(&cx, &mut metadata);

        let mut faqs = recipe.faq_candidates(&cx);
        if faqs.len() < self.config.min_faqs {
            faqs.clear();
        }

        RenderedDocument {
            slug: entry.slug.clone(),
            kind: entry.kind,
            node_id: node.id.clone(),
            metadata,
            sections: recipe.body_sections(&cx),
            faqs,
        }
    }

    /// `graph_data`, `mermaid_diagram` and `arch_map`, each behind its own gate.
    fn push_exports(&self, cx: &RenderContext<'_>, metadata: &mut Metadata) {
        let neighborhood =
            Neighborhood::sample(self.graph, cx.node, cx.kind, self.config.neighborhood_cap);
        if !neighborhood.is_trivial() {
            match neighborhood.to_json() {
                Ok(json) => metadata.text("graph_data", json),
                Err(err) => log::warn!("Skipping graph_data for {}: {err}", cx.slug),
            }
        }

        let diagram = mermaid_diagram(self.graph, cx.node, cx.kind, self.config.diagram_cap);
        if let Some(diagram) = diagram {
            metadata.text("mermaid_diagram", diagram);
        }

        let arch = ArchMap::locate(self.graph, cx.node, cx.kind, cx.slug);
        if !arch.is_bare() {
            match arch.to_json() {
                Ok(json) => metadata.text("arch_map", json),
                Err(err) => log::warn!("Skipping arch_map for {}: {err}", cx.slug),
            }
        }
    }

    /// Every slugged entity, in slug allocation order. Entities render in
    /// parallel; nothing they read is mutable by then.
    #[must_use]
    pub fn render_all(&self) -> Vec<RenderedDocument> {
        let docs: Vec<RenderedDocument> = self
            .graph
            .slugs()
            .entries()
            .par_iter()
            .map(|entry| self.render(entry))
            .collect();
        log::info!("Rendered {} documents", docs.len());
        docs
    }
}

/// Render every entity of a finished phase 1.
#[must_use]
pub fn render_documents(graph: &IndexedGraph, config: &RenderConfig) -> Vec<RenderedDocument> {
    Renderer::new(graph, config).render_all()
}
