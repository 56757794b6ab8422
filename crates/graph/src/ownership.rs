use crate::index::RelationIndex;
use crate::merge::MergedGraph;
use crate::types::{EntityKind, Relation};
use std::collections::HashMap;

/// Domain and subdomain membership per node, explicit or inferred.
///
/// A node holds at most one domain and one subdomain. Once written, an
/// assignment never changes: direct `belongsTo` edges seed the maps and
/// inference only fills holes.
#[derive(Debug, Default)]
pub struct Ownership {
    domain: HashMap<String, String>,
    subdomain: HashMap<String, String>,
    domain_files: HashMap<String, Vec<String>>,
    subdomain_files: HashMap<String, Vec<String>>,
}

impl Ownership {
    #[must_use]
    pub fn resolve(graph: &MergedGraph, index: &RelationIndex) -> Self {
        let mut domain = HashMap::new();
        let mut subdomain = HashMap::new();
        for node in graph.nodes() {
            if let Some(name) = index.direct_domain(&node.id) {
                domain.insert(node.id.clone(), name.to_string());
            }
            if let Some(name) = index.direct_subdomain(&node.id) {
                subdomain.insert(node.id.clone(), name.to_string());
            }
        }
        let direct = (domain.len(), subdomain.len());

        let files = || {
            graph
                .nodes()
                .iter()
                .filter(|n| n.has_label(EntityKind::File.label()))
        };

        for file in files() {
            if domain.contains_key(&file.id) {
                continue;
            }
            if let Some(found) = infer_from_contents(index, &domain, &file.id) {
                domain.insert(file.id.clone(), found);
            }
        }

        for file in files() {
            if subdomain.contains_key(&file.id) {
                continue;
            }
            if let Some(found) = infer_from_contents(index, &subdomain, &file.id) {
                subdomain.insert(file.id.clone(), found);
            }
        }

        // A subdomain implies its parent domain.
        for node in graph.nodes() {
            if domain.contains_key(&node.id) {
                continue;
            }
            let parent = subdomain
                .get(&node.id)
                .and_then(|sub| index.subdomain_node(sub))
                .and_then(|sub_id| index.part_of_domain(sub_id));
            if let Some(parent) = parent {
                domain.insert(node.id.clone(), parent.to_string());
            }
        }

        log::debug!(
            "Ownership: {} domain and {} subdomain assignments ({} and {} direct)",
            domain.len(),
            subdomain.len(),
            direct.0,
            direct.1
        );

        let mut domain_files: HashMap<String, Vec<String>> = HashMap::new();
        let mut subdomain_files: HashMap<String, Vec<String>> = HashMap::new();
        for file in files() {
            if let Some(name) = domain.get(&file.id) {
                domain_files
                    .entry(name.clone())
                    .or_default()
                    .push(file.id.clone());
            }
            if let Some(name) = subdomain.get(&file.id) {
                subdomain_files
                    .entry(name.clone())
                    .or_default()
                    .push(file.id.clone());
            }
        }

        Self {
            domain,
            subdomain,
            domain_files,
            subdomain_files,
        }
    }

    #[must_use]
    pub fn domain(&self, id: &str) -> Option<&str> {
        self.domain.get(id).map(String::as_str)
    }

    #[must_use]
    pub fn subdomain(&self, id: &str) -> Option<&str> {
        self.subdomain.get(id).map(String::as_str)
    }

    /// File nodes assigned to the named domain, in node order.
    #[must_use]
    pub fn domain_files(&self, domain: &str) -> &[String] {
        self.domain_files
            .get(domain)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// File nodes assigned to the named subdomain, in node order.
    #[must_use]
    pub fn subdomain_files(&self, subdomain: &str) -> &[String] {
        self.subdomain_files
            .get(subdomain)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// First assignment found among a file's functions, then per declared class
/// the class itself followed by its methods.
fn infer_from_contents(
    index: &RelationIndex,
    assigned: &HashMap<String, String>,
    file_id: &str,
) -> Option<String> {
    let lookup = |id: &String| assigned.get(id).cloned();

    if let Some(found) = index
        .related(Relation::DefinesFunction, file_id)
        .iter()
        .find_map(lookup)
    {
        return Some(found);
    }

    index
        .related(Relation::DeclaresClass, file_id)
        .iter()
        .find_map(|class_id| {
            lookup(class_id).or_else(|| {
                index
                    .related(Relation::DefinesFunction, class_id)
                    .iter()
                    .find_map(lookup)
            })
        })
}
