use super::context::RenderContext;
use super::document::{Faq, Metadata, Section};
use super::faq::listing;
use super::recipe::EntityRecipe;

const FUNCTION_LIMIT: usize = 8;

pub struct SubdomainRecipe;

fn parent_domain<'a>(cx: &RenderContext<'a>) -> Option<&'a str> {
    cx.graph.index().part_of_domain(cx.id())
}

impl EntityRecipe for SubdomainRecipe {
    fn metadata(&self, cx: &RenderContext<'_>) -> Metadata {
        let name = cx.name();
        let summary = cx.props().non_empty("description");
        let parent = parent_domain(cx);
        let file_count = cx.graph.ownership().subdomain_files(name).len();

        let mut desc = summary.map(|s| format!("{s} ")).unwrap_or_default();
        desc.push_str(&format!(
            "Architecture documentation for the {name} subdomain"
        ));
        if let Some(parent) = parent {
            desc.push_str(&format!(" (part of {parent} domain)"));
        }
        desc.push_str(&format!(
            " in the {} codebase. Contains {file_count} source files.",
            cx.repo()
        ));

        let mut meta = Metadata::new();
        meta.text("title", format!("{name} | {} Architecture", cx.repo()));
        meta.text("description", desc);
        meta.text("node_type", "Subdomain");
        meta.text("subdomain", name);
        meta.text_opt("domain", parent);
        meta.text("repo", cx.repo());
        meta.number("file_count", file_count);
        meta.text_opt("summary", summary);
        meta
    }

    fn body_sections(&self, cx: &RenderContext<'_>) -> Vec<Section> {
        let name = cx.name();
        let index = cx.graph.index();

        let mut sections = Vec::new();
        if let Some(parent) = parent_domain(cx) {
            sections.push(Section::single("Domain", cx.domain_link(parent)));
        }
        sections.extend(cx.linked_section(
            "Functions",
            index.subdomain_functions(name),
            |id| format!("{}()", cx.display_name(id)),
        ));
        sections.extend(cx.linked_section(
            "Classes",
            index.subdomain_classes(name),
            |id| cx.display_name(id).to_string(),
        ));
        sections.extend(cx.linked_section(
            "Source Files",
            cx.graph.ownership().subdomain_files(name),
            |id| cx.display_path(id).to_string(),
        ));
        sections
    }

    fn faq_candidates(&self, cx: &RenderContext<'_>) -> Vec<Faq> {
        let name = cx.name();
        let parent = parent_domain(cx);
        let file_count = cx.graph.ownership().subdomain_files(name).len();
        let functions = cx.graph.index().subdomain_functions(name);

        let mut summary = format!("{name} is a subdomain in the {} codebase", cx.repo());
        if let Some(parent) = parent {
            summary.push_str(&format!(", part of the {parent} domain"));
        }
        if let Some(description) = cx.props().non_empty("description") {
            summary.push_str(&format!(". {description}"));
        }
        summary.push_str(&format!(" It contains {file_count} source files."));

        let mut faqs = vec![Faq::new(format!("What is the {name} subdomain?"), summary)];

        if let Some(parent) = parent {
            faqs.push(Faq::new(
                format!("Which domain does {name} belong to?"),
                format!("{name} belongs to the {parent} domain."),
            ));
        }

        if !functions.is_empty() {
            faqs.push(Faq::new(
                format!("What functions are in {name}?"),
                format!(
                    "The {name} subdomain contains {} function(s): {}.",
                    functions.len(),
                    listing(cx, functions, FUNCTION_LIMIT)
                ),
            ));
        }

        faqs
    }
}
