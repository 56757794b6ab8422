use crate::catalog::IndexedGraph;
use crate::slug::base_name;
use crate::types::{EntityKind, Relation};
use graphdoc_protocol::Node;
use std::collections::HashSet;

/// Total node budget, center included.
pub const DEFAULT_DIAGRAM_CAP: usize = 15;

const CENTER_STYLE: &str = "fill:#6366f1,stroke:#818cf8,color:#fff";

/// Escape characters that break a quoted Mermaid label.
#[must_use]
pub fn mermaid_escape(label: &str) -> String {
    label
        .replace('"', "#quot;")
        .replace('<', "#lt;")
        .replace('>', "#gt;")
}

/// Mermaid-safe node id: every char outside `[A-Za-z0-9_]` becomes `_`.
#[must_use]
pub fn mermaid_id(node_id: &str) -> String {
    let id: String = node_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if id.is_empty() {
        "node".to_string()
    } else {
        id
    }
}

/// Accumulates flowchart lines under a node budget.
struct Flowchart<'g> {
    graph: &'g IndexedGraph,
    lines: Vec<String>,
    placed: HashSet<String>,
    center: String,
    cap: usize,
}

impl<'g> Flowchart<'g> {
    fn new(
        graph: &'g IndexedGraph,
        direction: &str,
        center_id: &str,
        center_label: &str,
        cap: usize,
    ) -> Self {
        let center = mermaid_id(center_id);
        let lines = vec![
            format!("graph {direction}"),
            format!("  {center}[\"{}\"]", mermaid_escape(center_label)),
        ];
        Self {
            graph,
            lines,
            placed: HashSet::from([center.clone()]),
            center,
            cap,
        }
    }

    fn is_full(&self) -> bool {
        self.placed.len() >= self.cap
    }

    /// Declares the node unless already placed; `None` once the budget is spent.
    fn place(&mut self, id: &str, suffix: &str) -> Option<String> {
        if self.is_full() {
            return None;
        }
        let mid = mermaid_id(id);
        if self.placed.insert(mid.clone()) {
            let label = mermaid_escape(self.graph.display_name(id));
            self.lines.push(format!("  {mid}[\"{label}{suffix}\"]"));
        }
        Some(mid)
    }

    fn edge(&mut self, from: &str, to: &str, label: Option<&str>) {
        match label {
            Some(label) => self.lines.push(format!("  {from} -->|{label}| {to}")),
            None => self.lines.push(format!("  {from} --> {to}")),
        }
    }

    /// Edge from the center to each of `ids` until the budget runs out.
    fn fan_out(&mut self, ids: &[String], suffix: &str, label: Option<&str>) {
        for id in ids {
            let Some(mid) = self.place(id, suffix) else {
                break;
            };
            let center = self.center.clone();
            self.edge(&center, &mid, label);
        }
    }

    /// Edge from each of `ids` to the center until the budget runs out.
    fn fan_in(&mut self, ids: &[String], suffix: &str, label: Option<&str>) {
        for id in ids {
            let Some(mid) = self.place(id, suffix) else {
                break;
            };
            let center = self.center.clone();
            self.edge(&mid, &center, label);
        }
    }

    fn finish(mut self) -> Option<String> {
        if self.placed.len() < 2 {
            return None;
        }
        self.lines
            .push(format!("  style {} {CENTER_STYLE}", self.center));
        Some(self.lines.join("\n"))
    }
}

/// Mermaid flowchart around one entity, or `None` when nothing but the
/// center would be drawn.
#[must_use]
pub fn mermaid_diagram(
    graph: &IndexedGraph,
    center: &Node,
    kind: EntityKind,
    cap: usize,
) -> Option<String> {
    let index = graph.index();
    let id = center.id.as_str();
    let name = graph.display_name(id);
    let related = move |relation: Relation| index.related(relation, id);
    let defining_file = index.defining_file(kind, id).map(std::slice::from_ref);

    let (direction, center_label) = match kind {
        EntityKind::File => ("LR", name.to_string()),
        EntityKind::Function => ("TD", format!("{name}()")),
        EntityKind::Directory => {
            let dir = center
                .properties
                .non_empty("name")
                .unwrap_or_else(|| base_name(center.properties.get_str("path")));
            ("TD", format!("{dir}/"))
        }
        _ => ("TD", name.to_string()),
    };
    let mut chart = Flowchart::new(graph, direction, id, &center_label, cap);

    match kind {
        EntityKind::File => {
            chart.fan_out(related(Relation::Imports), "", None);
            chart.fan_in(related(Relation::ImportedBy), "", None);
        }
        EntityKind::Function => {
            chart.fan_out(defining_file.unwrap_or_default(), "", Some("defined in"));
            chart.fan_in(related(Relation::CalledBy), "()", Some("calls"));
            chart.fan_out(related(Relation::Calls), "()", Some("calls"));
        }
        EntityKind::Class => {
            chart.fan_out(related(Relation::Extends), "", Some("extends"));
            chart.fan_out(defining_file.unwrap_or_default(), "", Some("defined in"));
            chart.fan_out(related(Relation::DefinesFunction), "()", Some("method"));
        }
        EntityKind::Type => {
            chart.fan_out(defining_file.unwrap_or_default(), "", Some("defined in"));
        }
        EntityKind::Domain => {
            chart.fan_out(index.domain_subdomains(center.name()), "", None);
        }
        EntityKind::Subdomain => {
            chart.fan_out(graph.ownership().subdomain_files(center.name()), "", None);
        }
        EntityKind::Directory => {
            chart.fan_out(related(Relation::ChildDirectory), "/", None);
            chart.fan_out(related(Relation::ContainsFile), "", None);
        }
    }

    chart.finish()
}
