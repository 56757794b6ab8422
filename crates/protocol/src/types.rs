use crate::properties::PropertyBag;
use serde::{Deserialize, Deserializer, Serialize};

/// One codebase entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub labels: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: PropertyBag,
}

impl Node {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            labels: vec![label.into()],
            properties: PropertyBag::new(),
        }
    }

    #[must_use]
    pub fn with_property(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.properties.insert(key, value);
        self
    }

    /// First label; it decides how the node is rendered.
    #[must_use]
    pub fn primary_label(&self) -> Option<&str> {
        self.labels.first().map(String::as_str)
    }

    #[must_use]
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// The `name` property, `""` when absent.
    #[must_use]
    pub fn name(&self) -> &str {
        self.properties.get_str("name")
    }
}

/// Directed, typed edge between two node identifiers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub rel_type: String,
    #[serde(rename = "startNode", default, deserialize_with = "null_as_default")]
    pub start_node: String,
    #[serde(rename = "endNode", default, deserialize_with = "null_as_default")]
    pub end_node: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: PropertyBag,
}

impl Relationship {
    pub fn new(
        rel_type: impl Into<String>,
        start_node: impl Into<String>,
        end_node: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            rel_type: rel_type.into(),
            start_node: start_node.into(),
            end_node: end_node.into(),
            properties: PropertyBag::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default, deserialize_with = "null_as_default")]
    pub nodes: Vec<Node>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub relationships: Vec<Relationship>,
}

impl Graph {
    #[must_use]
    pub fn new(nodes: Vec<Node>, relationships: Vec<Relationship>) -> Self {
        Self {
            nodes,
            relationships,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
