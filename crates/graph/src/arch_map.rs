use crate::catalog::IndexedGraph;
use crate::error::Result;
use crate::types::EntityKind;
use graphdoc_protocol::Node;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchRef {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchEntity {
    pub name: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub kind: EntityKind,
}

/// Where an entity sits: its domain, subdomain and, for symbols, file.
///
/// Keys serialise in alphabetical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchMap {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<ArchRef>,
    pub entity: ArchEntity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<ArchRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subdomain: Option<ArchRef>,
}

impl ArchMap {
    #[must_use]
    pub fn locate(graph: &IndexedGraph, node: &Node, kind: EntityKind, slug: &str) -> Self {
        let index = graph.index();
        let ownership = graph.ownership();
        let owned = |name: &str, node_id: Option<&String>| ArchRef {
            name: name.to_string(),
            slug: node_id
                .and_then(|id| graph.slug(id))
                .map(str::to_string),
        };

        let domain = ownership
            .domain(&node.id)
            .map(|name| owned(name, index.domain_node(name)));
        let subdomain = ownership
            .subdomain(&node.id)
            .map(|name| owned(name, index.subdomain_node(name)));
        let file = index.defining_file(kind, &node.id).map(|file| ArchRef {
            name: graph.display_name(file).to_string(),
            slug: graph.slug(file).map(str::to_string),
        });

        Self {
            domain,
            entity: ArchEntity {
                name: graph.display_name(&node.id).to_string(),
                slug: slug.to_string(),
                kind,
            },
            file,
            subdomain,
        }
    }

    /// Nothing beyond the entity itself is known.
    #[must_use]
    pub fn is_bare(&self) -> bool {
        self.domain.is_none() && self.file.is_none() && self.subdomain.is_none()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
