use crate::merge::MergedGraph;
use crate::types::{EntityKind, Relation, RelationKind};
use std::collections::HashMap;

pub type Adjacency = HashMap<String, Vec<String>>;

/// Derived adjacency built once from the flat relationship list.
///
/// Lists keep relationship-list order; nothing is sorted here.
/// `belongsTo` and `partOf` edges are resolved straight to the target's
/// `name` because rendering needs the name, and the target may never be
/// rendered itself.
#[derive(Debug, Default)]
pub struct RelationIndex {
    imports: Adjacency,
    imported_by: Adjacency,
    calls: Adjacency,
    called_by: Adjacency,
    contains_file: Adjacency,
    defines_function: Adjacency,
    declares_class: Adjacency,
    defines_type: Adjacency,
    child_directory: Adjacency,
    extends: Adjacency,

    file_of_function: HashMap<String, String>,
    file_of_class: HashMap<String, String>,
    file_of_type: HashMap<String, String>,

    direct_domain: HashMap<String, String>,
    direct_subdomain: HashMap<String, String>,
    part_of_domain: HashMap<String, String>,

    domain_by_name: HashMap<String, String>,
    subdomain_by_name: HashMap<String, String>,
    domain_subdomains: HashMap<String, Vec<String>>,
    subdomain_functions: HashMap<String, Vec<String>>,
    subdomain_classes: HashMap<String, Vec<String>>,
}

fn append(map: &mut Adjacency, key: &str, value: &str) {
    map.entry(key.to_string())
        .or_default()
        .push(value.to_string());
}

impl RelationIndex {
    #[must_use]
    pub fn build(graph: &MergedGraph) -> Self {
        let mut index = Self::default();
        let mut ignored = 0usize;

        for rel in graph.relationships() {
            let (start, end) = (rel.start_node.as_str(), rel.end_node.as_str());
            let Some(kind) = RelationKind::parse(&rel.rel_type) else {
                ignored += 1;
                continue;
            };
            match kind {
                RelationKind::Imports => {
                    append(&mut index.imports, start, end);
                    append(&mut index.imported_by, end, start);
                }
                RelationKind::Calls => {
                    append(&mut index.calls, start, end);
                    append(&mut index.called_by, end, start);
                }
                RelationKind::ContainsFile => append(&mut index.contains_file, start, end),
                RelationKind::DefinesFunction => {
                    append(&mut index.defines_function, start, end);
                    index
                        .file_of_function
                        .insert(end.to_string(), start.to_string());
                }
                RelationKind::DeclaresClass => {
                    append(&mut index.declares_class, start, end);
                    index.file_of_class.insert(end.to_string(), start.to_string());
                }
                RelationKind::Defines => {
                    append(&mut index.defines_type, start, end);
                    index.file_of_type.insert(end.to_string(), start.to_string());
                }
                RelationKind::ChildDirectory => append(&mut index.child_directory, start, end),
                RelationKind::Extends => append(&mut index.extends, start, end),
                RelationKind::BelongsTo => {
                    let Some(target) = graph.node(end) else {
                        continue;
                    };
                    let Some(name) = target.properties.non_empty("name") else {
                        continue;
                    };
                    // Domain is checked first for nodes carrying both labels.
                    let slot = if target.has_label(EntityKind::Domain.label()) {
                        &mut index.direct_domain
                    } else if target.has_label(EntityKind::Subdomain.label()) {
                        &mut index.direct_subdomain
                    } else {
                        continue;
                    };
                    slot.entry(start.to_string())
                        .or_insert_with(|| name.to_string());
                }
                RelationKind::PartOf => {
                    let Some(name) = graph.node(end).and_then(|n| n.properties.non_empty("name"))
                    else {
                        continue;
                    };
                    if !index.part_of_domain.contains_key(start) {
                        index
                            .part_of_domain
                            .insert(start.to_string(), name.to_string());
                        index
                            .domain_subdomains
                            .entry(name.to_string())
                            .or_default()
                            .push(start.to_string());
                    }
                }
            }
        }

        for node in graph.nodes() {
            let Some(name) = node.properties.non_empty("name") else {
                continue;
            };
            if node.has_label(EntityKind::Domain.label()) {
                index
                    .domain_by_name
                    .entry(name.to_string())
                    .or_insert_with(|| node.id.clone());
            } else if node.has_label(EntityKind::Subdomain.label()) {
                index
                    .subdomain_by_name
                    .entry(name.to_string())
                    .or_insert_with(|| node.id.clone());
            }
        }

        for node in graph.nodes() {
            let Some(sub) = index.direct_subdomain.get(&node.id) else {
                continue;
            };
            let members = if node.has_label(EntityKind::Function.label()) {
                &mut index.subdomain_functions
            } else if node.has_label(EntityKind::Class.label()) {
                &mut index.subdomain_classes
            } else {
                continue;
            };
            members.entry(sub.clone()).or_default().push(node.id.clone());
        }

        if ignored > 0 {
            log::debug!("Ignored {ignored} relationships with unrecognized types");
        }

        index
    }

    fn adjacency(&self, relation: Relation) -> &Adjacency {
        match relation {
            Relation::Imports => &self.imports,
            Relation::ImportedBy => &self.imported_by,
            Relation::Calls => &self.calls,
            Relation::CalledBy => &self.called_by,
            Relation::ContainsFile => &self.contains_file,
            Relation::DefinesFunction => &self.defines_function,
            Relation::DeclaresClass => &self.declares_class,
            Relation::DefinesType => &self.defines_type,
            Relation::ChildDirectory => &self.child_directory,
            Relation::Extends => &self.extends,
        }
    }

    /// Identifiers related to `id` through `relation`, in edge order.
    #[must_use]
    pub fn related(&self, relation: Relation, id: &str) -> &[String] {
        self.adjacency(relation)
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn count(&self, relation: Relation, id: &str) -> usize {
        self.related(relation, id).len()
    }

    /// File (or class, for methods) that defines a function, class or type.
    #[must_use]
    pub fn defining_file(&self, kind: EntityKind, id: &str) -> Option<&String> {
        match kind {
            EntityKind::Function => self.file_of_function.get(id),
            EntityKind::Class => self.file_of_class.get(id),
            EntityKind::Type => self.file_of_type.get(id),
            _ => None,
        }
    }

    /// Domain name from a direct `belongsTo` edge.
    #[must_use]
    pub fn direct_domain(&self, id: &str) -> Option<&str> {
        self.direct_domain.get(id).map(String::as_str)
    }

    /// Subdomain name from a direct `belongsTo` edge.
    #[must_use]
    pub fn direct_subdomain(&self, id: &str) -> Option<&str> {
        self.direct_subdomain.get(id).map(String::as_str)
    }

    /// Parent domain name of a subdomain node.
    #[must_use]
    pub fn part_of_domain(&self, subdomain_id: &str) -> Option<&str> {
        self.part_of_domain.get(subdomain_id).map(String::as_str)
    }

    #[must_use]
    pub fn domain_node(&self, name: &str) -> Option<&String> {
        self.domain_by_name.get(name)
    }

    #[must_use]
    pub fn subdomain_node(&self, name: &str) -> Option<&String> {
        self.subdomain_by_name.get(name)
    }

    /// Subdomain node ids whose `partOf` edge names this domain.
    #[must_use]
    pub fn domain_subdomains(&self, domain: &str) -> &[String] {
        self.domain_subdomains
            .get(domain)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Functions with a direct `belongsTo` edge to this subdomain.
    #[must_use]
    pub fn subdomain_functions(&self, subdomain: &str) -> &[String] {
        self.subdomain_functions
            .get(subdomain)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Classes with a direct `belongsTo` edge to this subdomain.
    #[must_use]
    pub fn subdomain_classes(&self, subdomain: &str) -> &[String] {
        self.subdomain_classes
            .get(subdomain)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::merge_graphs;
    use graphdoc_protocol::{Graph, Node, Relationship};
    use pretty_assertions::assert_eq;

    fn index_of(nodes: Vec<Node>, rels: Vec<Relationship>) -> RelationIndex {
        RelationIndex::build(&merge_graphs([Graph::new(nodes, rels)]))
    }

    #[test]
    fn forward_and_reverse_lists_keep_edge_order() {
        let index = index_of(
            vec![],
            vec![
                Relationship::new("IMPORTS", "a", "c"),
                Relationship::new("IMPORTS", "a", "b"),
                Relationship::new("IMPORTS", "b", "c"),
                Relationship::new("calls", "fn1", "fn2"),
            ],
        );

        assert_eq!(index.related(Relation::Imports, "a"), ["c", "b"]);
        assert_eq!(index.related(Relation::ImportedBy, "c"), ["a", "b"]);
        assert_eq!(index.related(Relation::CalledBy, "fn2"), ["fn1"]);
        assert!(index.related(Relation::Calls, "fn2").is_empty());
    }

    #[test]
    fn defining_file_follows_definition_edges() {
        let index = index_of(
            vec![],
            vec![
                Relationship::new("DEFINES_FUNCTION", "f1", "fn1"),
                Relationship::new("DECLARES_CLASS", "f1", "c1"),
                Relationship::new("DEFINES", "f1", "t1"),
            ],
        );

        assert_eq!(
            index.defining_file(EntityKind::Function, "fn1").map(String::as_str),
            Some("f1")
        );
        assert_eq!(
            index.defining_file(EntityKind::Class, "c1").map(String::as_str),
            Some("f1")
        );
        assert_eq!(
            index.defining_file(EntityKind::Type, "t1").map(String::as_str),
            Some("f1")
        );
        assert_eq!(index.defining_file(EntityKind::Function, "c1"), None);
        assert_eq!(index.count(Relation::DefinesFunction, "f1"), 1);
    }

    #[test]
    fn membership_edges_resolve_to_names() {
        let index = index_of(
            vec![
                Node::new("d1", "Domain").with_property("name", "Auth"),
                Node::new("s1", "Subdomain").with_property("name", "Tokens"),
                Node::new("fn1", "Function").with_property("name", "issue"),
                Node::new("c1", "Class").with_property("name", "Issuer"),
            ],
            vec![
                Relationship::new("belongsTo", "fn1", "d1"),
                Relationship::new("belongsTo", "fn1", "s1"),
                Relationship::new("belongsTo", "c1", "s1"),
                Relationship::new("belongsTo", "fn1", "missing"),
                Relationship::new("partOf", "s1", "d1"),
            ],
        );

        assert_eq!(index.direct_domain("fn1"), Some("Auth"));
        assert_eq!(index.direct_subdomain("fn1"), Some("Tokens"));
        assert_eq!(index.part_of_domain("s1"), Some("Auth"));
        assert_eq!(index.domain_subdomains("Auth"), ["s1"]);
        assert_eq!(index.subdomain_functions("Tokens"), ["fn1"]);
        assert_eq!(index.subdomain_classes("Tokens"), ["c1"]);
        assert_eq!(index.domain_node("Auth").map(String::as_str), Some("d1"));
        assert_eq!(index.subdomain_node("Tokens").map(String::as_str), Some("s1"));
    }

    #[test]
    fn unknown_relationship_types_are_ignored() {
        let index = index_of(vec![], vec![Relationship::new("USES", "a", "b")]);
        for relation in [Relation::Imports, Relation::Calls, Relation::Extends] {
            assert!(index.related(relation, "a").is_empty());
        }
    }
}
