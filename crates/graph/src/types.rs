use serde::Serialize;

/// Primary labels that produce a rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EntityKind {
    File,
    Function,
    Class,
    Type,
    Domain,
    Subdomain,
    Directory,
}

impl EntityKind {
    pub const ALL: [Self; 7] = [
        Self::File,
        Self::Function,
        Self::Class,
        Self::Type,
        Self::Domain,
        Self::Subdomain,
        Self::Directory,
    ];

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::File => "File",
            Self::Function => "Function",
            Self::Class => "Class",
            Self::Type => "Type",
            Self::Domain => "Domain",
            Self::Subdomain => "Subdomain",
            Self::Directory => "Directory",
        }
    }
}

/// Relationship types understood by the indexer. Anything else is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    Imports,
    Calls,
    ContainsFile,
    DefinesFunction,
    DeclaresClass,
    Defines,
    ChildDirectory,
    Extends,
    BelongsTo,
    PartOf,
}

impl RelationKind {
    #[must_use]
    pub fn parse(rel_type: &str) -> Option<Self> {
        let kind = match rel_type {
            "IMPORTS" => Self::Imports,
            "calls" => Self::Calls,
            "CONTAINS_FILE" => Self::ContainsFile,
            "DEFINES_FUNCTION" => Self::DefinesFunction,
            "DECLARES_CLASS" => Self::DeclaresClass,
            "DEFINES" => Self::Defines,
            "CHILD_DIRECTORY" => Self::ChildDirectory,
            "EXTENDS" => Self::Extends,
            "belongsTo" => Self::BelongsTo,
            "partOf" => Self::PartOf,
            _ => return None,
        };
        Some(kind)
    }
}

/// One (relationship type, direction) adjacency kept by the indexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Imports,
    ImportedBy,
    Calls,
    CalledBy,
    ContainsFile,
    DefinesFunction,
    DeclaresClass,
    DefinesType,
    ChildDirectory,
    Extends,
}
