use crate::merge::MergedGraph;
use crate::types::EntityKind;
use graphdoc_protocol::Node;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Directories under this prefix belong to the analyser's synthetic checkout
/// root and are never rendered.
pub const REPO_ROOT_MARKER: &str = "/app/repo-root/";

static NON_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new("[^a-z0-9]+").expect("valid regex"));

/// Lower-case, collapse every non `[a-z0-9]` run to one hyphen, trim hyphens.
#[must_use]
pub fn slugify(raw: &str) -> String {
    let lower = raw.to_lowercase();
    NON_ALNUM
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}

#[must_use]
pub fn is_repo_root(path: &str) -> bool {
    path.contains(REPO_ROOT_MARKER) || path == REPO_ROOT_MARKER.trim_end_matches('/')
}

pub(crate) fn base_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path)
}

/// Unsuffixed slug for a node, or `None` when its recipe has nothing to work
/// with (such nodes are not rendered).
#[must_use]
pub fn base_slug(node: &Node, kind: EntityKind) -> Option<String> {
    let props = &node.properties;
    let raw = match kind {
        EntityKind::File => format!("file-{}", props.non_empty("path")?),
        EntityKind::Function | EntityKind::Class | EntityKind::Type => {
            let prefix = match kind {
                EntityKind::Function => "fn",
                EntityKind::Class => "class",
                _ => "type",
            };
            let name = props.non_empty("name")?;
            match props.non_empty("filePath") {
                Some(file) => format!("{prefix}-{}-{name}", base_name(file)),
                None => format!("{prefix}-{name}"),
            }
        }
        EntityKind::Domain => format!("domain-{}", props.non_empty("name")?),
        EntityKind::Subdomain => format!("subdomain-{}", props.non_empty("name")?),
        EntityKind::Directory => {
            let path = props.non_empty("path")?;
            if is_repo_root(path) {
                return None;
            }
            format!("dir-{path}")
        }
    };
    Some(slugify(&raw)).filter(|s| !s.is_empty())
}

/// One renderable entity and its final slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugEntry {
    /// Position of the node in [`MergedGraph::nodes`].
    pub node: usize,
    pub kind: EntityKind,
    pub slug: String,
}

/// Claims slugs in order. The first claim of a string keeps it bare; later
/// claims get `-1`, `-2`, ... from a counter kept per base string, skipping
/// any suffixed form another entity already owns.
#[derive(Debug, Default)]
struct SlugAllocator {
    claimed: HashSet<String>,
    counters: HashMap<String, usize>,
}

impl SlugAllocator {
    fn claim(&mut self, base: String) -> String {
        if self.claimed.insert(base.clone()) {
            return base;
        }
        let counter = self.counters.entry(base.clone()).or_insert(0);
        loop {
            *counter += 1;
            let candidate = format!("{base}-{counter}");
            if self.claimed.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}

/// Node id to slug, for every renderable entity.
#[derive(Debug, Default)]
pub struct SlugTable {
    entries: Vec<SlugEntry>,
    by_node: HashMap<String, usize>,
}

impl SlugTable {
    #[must_use]
    pub fn allocate(graph: &MergedGraph) -> Self {
        let mut allocator = SlugAllocator::default();
        let mut table = Self::default();

        for (position, node) in graph.nodes().iter().enumerate() {
            let Some(kind) = node.primary_label().and_then(EntityKind::from_label) else {
                continue;
            };
            let Some(base) = base_slug(node, kind) else {
                log::debug!("No slug for {} node {}", kind.label(), node.id);
                continue;
            };
            let slug = allocator.claim(base);
            table.by_node.insert(node.id.clone(), table.entries.len());
            table.entries.push(SlugEntry {
                node: position,
                kind,
                slug,
            });
        }

        table
    }

    #[must_use]
    pub fn get(&self, node_id: &str) -> Option<&str> {
        self.by_node
            .get(node_id)
            .map(|&idx| self.entries[idx].slug.as_str())
    }

    /// Entities in allocation (node-list) order.
    #[must_use]
    pub fn entries(&self) -> &[SlugEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
