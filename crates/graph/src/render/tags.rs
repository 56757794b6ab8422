use super::context::RenderContext;
use crate::types::{EntityKind, Relation};

const HIGH_DEPENDENCY: usize = 5;
const MANY_IMPORTS: usize = 5;
const COMPLEX_FUNCTIONS: usize = 10;
const COMPLEX_CLASSES: usize = 5;

/// Raw labels, language, then the derived adjacency tags.
pub fn tags(cx: &RenderContext<'_>) -> Vec<String> {
    let mut tags: Vec<String> = cx.node.labels.clone();
    if let Some(language) = cx.props().non_empty("language") {
        tags.push(language.to_string());
    }

    let imports = cx.count(Relation::Imports);
    let imported_by = cx.count(Relation::ImportedBy);
    let called_by = cx.count(Relation::CalledBy);

    if imported_by >= HIGH_DEPENDENCY || called_by >= HIGH_DEPENDENCY {
        tags.push("High-Dependency".to_string());
    }
    if imports >= MANY_IMPORTS {
        tags.push("Many-Imports".to_string());
    }
    if cx.count(Relation::DefinesFunction) >= COMPLEX_FUNCTIONS
        || cx.count(Relation::DeclaresClass) >= COMPLEX_CLASSES
    {
        tags.push("Complex".to_string());
    }
    let isolated = imports == 0
        && imported_by == 0
        && called_by == 0
        && cx.count(Relation::Calls) == 0;
    if cx.kind == EntityKind::File && isolated {
        tags.push("Isolated".to_string());
    }

    tags
}
