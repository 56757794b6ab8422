use super::class::ClassRecipe;
use super::context::RenderContext;
use super::directory::DirectoryRecipe;
use super::document::{Faq, Metadata, Section};
use super::domain::DomainRecipe;
use super::file::FileRecipe;
use super::function::FunctionRecipe;
use super::subdomain::SubdomainRecipe;
use super::type_def::TypeRecipe;
use crate::types::EntityKind;

/// Per-label content of a document.
///
/// `metadata` stops before `tags`; the renderer appends tags and the bounded
/// exports for every label alike.
pub trait EntityRecipe: Sync {
    fn metadata(&self, cx: &RenderContext<'_>) -> Metadata;

    /// Sections in their fixed order. Empty sections are left out.
    fn body_sections(&self, cx: &RenderContext<'_>) -> Vec<Section>;

    /// Every question this entity can answer, before the publication gate.
    fn faq_candidates(&self, cx: &RenderContext<'_>) -> Vec<Faq>;
}

#[must_use]
pub fn recipe_for(kind: EntityKind) -> &'static dyn EntityRecipe {
    match kind {
        EntityKind::File => &FileRecipe,
        EntityKind::Function => &FunctionRecipe,
        EntityKind::Class => &ClassRecipe,
        EntityKind::Type => &TypeRecipe,
        EntityKind::Domain => &DomainRecipe,
        EntityKind::Subdomain => &SubdomainRecipe,
        EntityKind::Directory => &DirectoryRecipe,
    }
}
