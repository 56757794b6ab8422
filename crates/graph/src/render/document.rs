use crate::types::EntityKind;
use serde_json::Value;

/// One front-matter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaValue {
    Text(String),
    Number(i64),
    List(Vec<String>),
}

/// Ordered key/value block written between `---` fences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    entries: Vec<(String, MetaValue)>,
}

impl Metadata {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&mut self, key: &str, value: impl Into<String>) {
        self.entries
            .push((key.to_string(), MetaValue::Text(value.into())));
    }

    /// Adds the key only when a value is present.
    pub fn text_opt(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.text(key, value);
        }
    }

    pub fn number(&mut self, key: &str, value: impl TryInto<i64>) {
        let value = value.try_into().unwrap_or(i64::MAX);
        self.entries.push((key.to_string(), MetaValue::Number(value)));
    }

    pub fn list(&mut self, key: &str, items: Vec<String>) {
        if !items.is_empty() {
            self.entries.push((key.to_string(), MetaValue::List(items)));
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    #[must_use]
    pub fn get_text(&self, key: &str) -> Option<&str> {
        match self.get(key)? {
            MetaValue::Text(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub fn get_number(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            MetaValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|(k, _)| k.as_str()).collect()
    }

    fn write_to(&self, out: &mut String) {
        for (key, value) in &self.entries {
            match value {
                MetaValue::Text(text) => {
                    out.push_str(&format!("{key}: {}\n", quote(text)));
                }
                MetaValue::Number(n) => out.push_str(&format!("{key}: {n}\n")),
                MetaValue::List(items) => {
                    out.push_str(&format!("{key}:\n"));
                    for item in items {
                        out.push_str(&format!("  - {}\n", quote(item)));
                    }
                }
            }
        }
    }
}

/// Double-quoted scalar with JSON escapes, which YAML front matter accepts.
fn quote(text: &str) -> String {
    Value::String(text.to_string()).to_string()
}

/// A `##` body section: a title and its bullet items, already rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub items: Vec<String>,
}

impl Section {
    #[must_use]
    pub fn new(title: &'static str, items: Vec<String>) -> Self {
        Self { title, items }
    }

    #[must_use]
    pub fn single(title: &'static str, item: String) -> Self {
        Self::new(title, vec![item])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

impl Faq {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Everything produced for one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub slug: String,
    pub kind: EntityKind,
    pub node_id: String,
    pub metadata: Metadata,
    pub sections: Vec<Section>,
    /// Empty when the entity did not produce enough questions to publish.
    pub faqs: Vec<Faq>,
}

impl RenderedDocument {
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.md", self.slug)
    }

    #[must_use]
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }

    #[must_use]
    pub fn section_titles(&self) -> Vec<&'static str> {
        self.sections.iter().map(|s| s.title).collect()
    }

    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::from("---\n");
        self.metadata.write_to(&mut out);
        out.push_str("---\n\n");

        for section in &self.sections {
            out.push_str(&format!("## {}\n\n", section.title));
            for item in &section.items {
                out.push_str(&format!("- {item}\n"));
            }
            out.push('\n');
        }

        if !self.faqs.is_empty() {
            out.push_str("## FAQs\n\n");
            for faq in &self.faqs {
                out.push_str(&format!("### {}\n\n{}\n\n", faq.question, faq.answer));
            }
        }

        out
    }
}
