use super::context::{parent_dir, top_segment, RenderContext};
use super::document::{Faq, Metadata, Section};
use super::faq::listing;
use super::recipe::EntityRecipe;
use crate::slug::base_name;
use crate::types::Relation;

const FUNCTION_LIMIT: usize = 10;
const IMPORT_LIMIT: usize = 8;

pub struct FileRecipe;

/// `name`, or the last component of `path`.
fn file_name<'a>(cx: &RenderContext<'a>) -> &'a str {
    cx.props()
        .non_empty("name")
        .unwrap_or_else(|| base_name(cx.props().get_str("path")))
}

/// Extension with its leading dot, as found after the last `.` of the name.
fn extension(name: &str) -> Option<&str> {
    name.rfind('.').map(|idx| &name[idx..])
}

impl EntityRecipe for FileRecipe {
    fn metadata(&self, cx: &RenderContext<'_>) -> Metadata {
        let path = cx.props().get_str("path");
        let name = file_name(cx);
        let language = cx.props().non_empty("language");
        let imports = cx.count(Relation::Imports);
        let imported_by = cx.count(Relation::ImportedBy);

        let mut desc = format!("Architecture documentation for {name}");
        if let Some(language) = language {
            desc.push_str(&format!(", a {language} file"));
        }
        desc.push_str(&format!(" in the {} codebase.", cx.repo()));
        if imports > 0 || imported_by > 0 {
            desc.push_str(&format!(" {imports} imports, {imported_by} dependents."));
        }

        let mut meta = Metadata::new();
        meta.text("title", format!("{name} | {} Source File", cx.repo()));
        meta.text("description", desc);
        meta.text("node_type", "File");
        meta.text("file_path", path);
        meta.text("file_name", name);
        meta.text_opt("language", language);
        meta.text("repo", cx.repo());
        meta.text("repo_url", cx.config.repo_url.as_str());
        if let Some(dir) = parent_dir(path) {
            meta.text("directory", dir);
            meta.text_opt("top_directory", top_segment(dir));
        }
        meta.text_opt("extension", extension(name));
        meta.text_opt("domain", cx.domain());
        meta.text_opt("subdomain", cx.subdomain());
        meta.number("import_count", imports);
        meta.number("imported_by_count", imported_by);
        meta.number("function_count", cx.count(Relation::DefinesFunction));
        meta.number("class_count", cx.count(Relation::DeclaresClass));
        meta.number("type_count", cx.count(Relation::DefinesType));
        meta
    }

    fn body_sections(&self, cx: &RenderContext<'_>) -> Vec<Section> {
        let by_name = |id: &str| cx.display_name(id).to_string();

        let mut sections = Vec::new();
        cx.push_ownership_sections(&mut sections);
        sections.extend(cx.linked_section(
            "Functions",
            cx.related(Relation::DefinesFunction),
            |id| format!("{}()", cx.display_name(id)),
        ));
        sections.extend(cx.linked_section("Classes", cx.related(Relation::DeclaresClass), by_name));
        sections.extend(cx.linked_section("Types", cx.related(Relation::DefinesType), by_name));
        sections.extend(cx.linked_section("Dependencies", cx.related(Relation::Imports), by_name));
        sections.extend(cx.linked_section(
            "Imported By",
            cx.related(Relation::ImportedBy),
            |id| cx.display_path(id).to_string(),
        ));
        cx.push_source_section(&mut sections, cx.props().get_str("path"), 0);
        sections
    }

    fn faq_candidates(&self, cx: &RenderContext<'_>) -> Vec<Faq> {
        let name = file_name(cx);
        let path = cx.props().get_str("path");
        let mut faqs = Vec::new();

        let mut summary = format!("{name} is a source file in the {} codebase", cx.repo());
        if let Some(language) = cx.props().non_empty("language") {
            summary.push_str(&format!(", written in {language}"));
        }
        summary.push('.');
        if let Some(domain) = cx.domain() {
            summary.push_str(&format!(" It belongs to the {domain} domain"));
            if let Some(subdomain) = cx.subdomain() {
                summary.push_str(&format!(", {subdomain} subdomain"));
            }
            summary.push('.');
        }
        faqs.push(Faq::new(format!("What does {name} do?"), summary));

        let functions = cx.related(Relation::DefinesFunction);
        if !functions.is_empty() {
            faqs.push(Faq::new(
                format!("What functions are defined in {name}?"),
                format!(
                    "{name} defines {} function(s): {}.",
                    functions.len(),
                    listing(cx, functions, FUNCTION_LIMIT)
                ),
            ));
        }

        let imports = cx.related(Relation::Imports);
        if !imports.is_empty() {
            faqs.push(Faq::new(
                format!("What does {name} depend on?"),
                format!(
                    "{name} imports {} module(s): {}.",
                    imports.len(),
                    listing(cx, imports, IMPORT_LIMIT)
                ),
            ));
        }

        let importers = cx.related(Relation::ImportedBy);
        if !importers.is_empty() {
            faqs.push(Faq::new(
                format!("What files import {name}?"),
                format!(
                    "{name} is imported by {} file(s): {}.",
                    importers.len(),
                    listing(cx, importers, IMPORT_LIMIT)
                ),
            ));
        }

        let mut position = Vec::new();
        if let Some(domain) = cx.domain() {
            position.push(format!("domain: {domain}"));
        }
        if let Some(subdomain) = cx.subdomain() {
            position.push(format!("subdomain: {subdomain}"));
        }
        if let Some(dir) = parent_dir(path) {
            position.push(format!("directory: {dir}"));
        }
        if !position.is_empty() {
            faqs.push(Faq::new(
                format!("Where is {name} in the architecture?"),
                format!("{name} is located at {path} ({}).", position.join(", ")),
            ));
        }

        faqs
    }
}
