use super::context::{top_segment, RenderContext};
use super::document::{Faq, Metadata, Section};
use super::recipe::EntityRecipe;
use crate::slug::base_name;
use crate::types::Relation;

pub struct DirectoryRecipe;

/// `(name, path)`, each falling back to the other.
fn name_and_path<'a>(cx: &RenderContext<'a>) -> (&'a str, &'a str) {
    let path = cx.props().get_str("path");
    let name = cx
        .props()
        .non_empty("name")
        .unwrap_or_else(|| base_name(path));
    let path = if path.is_empty() { name } else { path };
    (name, path)
}

impl EntityRecipe for DirectoryRecipe {
    fn metadata(&self, cx: &RenderContext<'_>) -> Metadata {
        let (name, path) = name_and_path(cx);
        let files = cx.count(Relation::ContainsFile);
        let subdirs = cx.count(Relation::ChildDirectory);

        let mut meta = Metadata::new();
        meta.text("title", format!("{path}/ | {} Directory Structure", cx.repo()));
        meta.text(
            "description",
            format!(
                "Directory listing for {path}/ in the {} codebase. Contains {files} files and {subdirs} subdirectories.",
                cx.repo()
            ),
        );
        meta.text("node_type", "Directory");
        meta.text("dir_name", name);
        meta.text("dir_path", path);
        meta.text("repo", cx.repo());
        meta.number("file_count", files);
        meta.number("subdir_count", subdirs);
        meta.text_opt("top_directory", top_segment(path));
        meta
    }

    fn body_sections(&self, cx: &RenderContext<'_>) -> Vec<Section> {
        let mut sections = Vec::new();
        sections.extend(cx.linked_section(
            "Subdirectories",
            cx.related(Relation::ChildDirectory),
            |id| format!("{}/", cx.display_path(id)),
        ));
        sections.extend(cx.linked_section(
            "Files",
            cx.related(Relation::ContainsFile),
            |id| cx.display_name(id).to_string(),
        ));
        sections
    }

    fn faq_candidates(&self, cx: &RenderContext<'_>) -> Vec<Faq> {
        let (name, _) = name_and_path(cx);
        let files = cx.related(Relation::ContainsFile);
        let subdirs = cx.related(Relation::ChildDirectory);

        let mut faqs = vec![Faq::new(
            format!("What's in the {name}/ directory?"),
            format!(
                "The {name}/ directory contains {} files and {} subdirectories in the {} codebase.",
                files.len(),
                subdirs.len(),
                cx.repo()
            ),
        )];

        if !subdirs.is_empty() {
            let mut names: Vec<&str> = subdirs.iter().map(|id| cx.display_name(id)).collect();
            names.sort_unstable();
            faqs.push(Faq::new(
                format!("What subdirectories does {name}/ contain?"),
                format!(
                    "{name}/ contains {} subdirectory(ies): {}.",
                    subdirs.len(),
                    names.join(", ")
                ),
            ));
        }

        faqs
    }
}
