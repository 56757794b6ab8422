use super::document::Section;
use super::RenderConfig;
use crate::catalog::IndexedGraph;
use crate::types::{EntityKind, Relation};
use graphdoc_protocol::{Node, PropertyBag};
use std::path::Path;

/// Escape text for inclusion in HTML element content or attribute values.
#[must_use]
pub fn html_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Parent directory of a repository path; `None` for top-level entries.
#[must_use]
pub fn parent_dir(path: &str) -> Option<&str> {
    Path::new(path)
        .parent()
        .and_then(|p| p.to_str())
        .filter(|dir| !dir.is_empty() && *dir != ".")
}

/// First path segment.
#[must_use]
pub fn top_segment(path: &str) -> Option<&str> {
    path.split('/').next().filter(|s| !s.is_empty())
}

/// Read-only view handed to every recipe while rendering one entity.
pub struct RenderContext<'a> {
    pub graph: &'a IndexedGraph,
    pub config: &'a RenderConfig,
    pub node: &'a Node,
    pub kind: EntityKind,
    pub slug: &'a str,
}

impl<'a> RenderContext<'a> {
    #[must_use]
    pub fn id(&self) -> &'a str {
        &self.node.id
    }

    #[must_use]
    pub fn props(&self) -> &'a PropertyBag {
        &self.node.properties
    }

    /// `name`, or the identifier when unnamed.
    #[must_use]
    pub fn name(&self) -> &'a str {
        self.props().non_empty("name").unwrap_or(&self.node.id)
    }

    #[must_use]
    pub fn repo(&self) -> &'a str {
        &self.config.repo_name
    }

    #[must_use]
    pub fn related(&self, relation: Relation) -> &'a [String] {
        self.graph.index().related(relation, self.id())
    }

    #[must_use]
    pub fn count(&self, relation: Relation) -> usize {
        self.related(relation).len()
    }

    #[must_use]
    pub fn domain(&self) -> Option<&'a str> {
        self.graph.ownership().domain(self.id())
    }

    #[must_use]
    pub fn subdomain(&self) -> Option<&'a str> {
        self.graph.ownership().subdomain(self.id())
    }

    #[must_use]
    pub fn defining_file(&self) -> Option<&'a str> {
        self.graph
            .index()
            .defining_file(self.kind, self.id())
            .map(String::as_str)
    }

    #[must_use]
    pub fn display_name<'b>(&'b self, id: &'b str) -> &'b str {
        self.graph.display_name(id)
    }

    #[must_use]
    pub fn display_path<'b>(&'b self, id: &'b str) -> &'b str {
        self.graph.display_path(id)
    }

    /// Anchor to the target's page, or escaped text when it has no page.
    #[must_use]
    pub fn link(&self, id: &str, label: &str) -> String {
        match self.graph.slug(id) {
            Some(slug) => format!("<a href=\"/{slug}.html\">{}</a>", html_escape(label)),
            None => html_escape(label),
        }
    }

    #[must_use]
    pub fn domain_link(&self, name: &str) -> String {
        match self.graph.index().domain_node(name) {
            Some(id) => self.link(id, name),
            None => html_escape(name),
        }
    }

    #[must_use]
    pub fn subdomain_link(&self, name: &str) -> String {
        match self.graph.index().subdomain_node(name) {
            Some(id) => self.link(id, name),
            None => html_escape(name),
        }
    }

    /// Section listing `ids` sorted by display name, or `None` when empty.
    /// `label` picks the visible text of each link.
    pub fn linked_section<F>(
        &self,
        title: &'static str,
        ids: &[String],
        label: F,
    ) -> Option<Section>
    where
        F: Fn(&str) -> String,
    {
        if ids.is_empty() {
            return None;
        }
        let mut sorted: Vec<(&str, &str)> = ids
            .iter()
            .map(|id| (self.display_name(id), id.as_str()))
            .collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));

        let items = sorted
            .into_iter()
            .map(|(_, id)| self.link(id, &label(id)))
            .collect();
        Some(Section::new(title, items))
    }

    /// `Domain`, then `Subdomains` only under an assigned domain.
    pub fn push_ownership_sections(&self, sections: &mut Vec<Section>) {
        let Some(domain) = self.domain() else {
            return;
        };
        sections.push(Section::single("Domain", self.domain_link(domain)));
        if let Some(subdomain) = self.subdomain() {
            sections.push(Section::single("Subdomains", self.subdomain_link(subdomain)));
        }
    }

    pub fn push_defined_in_section(&self, sections: &mut Vec<Section>) {
        if let Some(file) = self.defining_file() {
            sections.push(Section::single(
                "Defined In",
                self.link(file, self.display_path(file)),
            ));
        }
    }

    /// Browse URL for a repository path, anchored at `line` when positive.
    #[must_use]
    pub fn source_url(&self, path: &str, line: i64) -> Option<String> {
        if path.is_empty() || self.config.repo_url.is_empty() {
            return None;
        }
        let base = self.config.repo_url.trim_end_matches('/');
        let mut url = format!("{base}/blob/{}/{path}", self.config.branch);
        if line > 0 {
            url.push_str(&format!("#L{line}"));
        }
        Some(url)
    }

    pub fn push_source_section(&self, sections: &mut Vec<Section>, path: &str, line: i64) {
        if let Some(url) = self.source_url(path, line) {
            sections.push(Section::single(
                "Source",
                format!("<a href=\"{url}\">View source</a>"),
            ));
        }
    }
}
