use super::context::RenderContext;
use super::document::{Faq, Metadata, Section};
use super::recipe::EntityRecipe;

pub struct DomainRecipe;

impl EntityRecipe for DomainRecipe {
    fn metadata(&self, cx: &RenderContext<'_>) -> Metadata {
        let name = cx.name();
        let summary = cx.props().non_empty("description");
        let file_count = cx.graph.ownership().domain_files(name).len();

        let mut desc = summary.map(|s| format!("{s} ")).unwrap_or_default();
        desc.push_str(&format!(
            "Architectural overview of the {name} domain in the {} codebase. Contains {file_count} source files.",
            cx.repo()
        ));

        let mut meta = Metadata::new();
        meta.text("title", format!("{name} Domain | {} Architecture", cx.repo()));
        meta.text("description", desc);
        meta.text("node_type", "Domain");
        meta.text("domain", name);
        meta.text("repo", cx.repo());
        meta.number("file_count", file_count);
        meta.text_opt("summary", summary);
        meta
    }

    fn body_sections(&self, cx: &RenderContext<'_>) -> Vec<Section> {
        let name = cx.name();
        let index = cx.graph.index();
        let ownership = cx.graph.ownership();

        let mut sections = Vec::new();
        sections.extend(cx.linked_section(
            "Subdomains",
            index.domain_subdomains(name),
            |id| cx.display_name(id).to_string(),
        ));
        sections.extend(cx.linked_section(
            "Source Files",
            ownership.domain_files(name),
            |id| cx.display_path(id).to_string(),
        ));
        sections
    }

    fn faq_candidates(&self, cx: &RenderContext<'_>) -> Vec<Faq> {
        let name = cx.name();
        let file_count = cx.graph.ownership().domain_files(name).len();
        let subdomains = cx.graph.index().domain_subdomains(name);

        let mut summary = format!(
            "The {name} domain is an architectural grouping in the {} codebase",
            cx.repo()
        );
        if let Some(description) = cx.props().non_empty("description") {
            summary.push_str(&format!(". {description}"));
        }
        summary.push_str(&format!(" It contains {file_count} source files."));

        let mut faqs = vec![Faq::new(format!("What is the {name} domain?"), summary)];

        if !subdomains.is_empty() {
            let mut names: Vec<&str> = subdomains.iter().map(|id| cx.display_name(id)).collect();
            names.sort_unstable();
            faqs.push(Faq::new(
                format!("What subdomains are in {name}?"),
                format!(
                    "The {name} domain contains {} subdomain(s): {}.",
                    subdomains.len(),
                    names.join(", ")
                ),
            ));
        }

        faqs.push(Faq::new(
            format!("How many files are in {name}?"),
            format!("The {name} domain contains {file_count} source files."),
        ));
        faqs
    }
}
