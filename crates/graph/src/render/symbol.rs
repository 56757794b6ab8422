//! Pieces shared by the function, class and type recipes.

use super::context::{parent_dir, RenderContext};
use super::document::{Metadata, Section};
use crate::slug::base_name;

/// `"Architecture documentation for the <what>[ in <file>] from the <repo> codebase."`
pub fn description(cx: &RenderContext<'_>, what: &str) -> String {
    let mut desc = format!("Architecture documentation for the {what}");
    if let Some(file) = cx.props().non_empty("filePath") {
        desc.push_str(&format!(" in {}", base_name(file)));
    }
    desc.push_str(&format!(" from the {} codebase.", cx.repo()));
    desc
}

/// `file_path`, `directory`, `language`, line span, then `repo`.
pub fn push_location(meta: &mut Metadata, cx: &RenderContext<'_>) {
    let props = cx.props();
    if let Some(file) = props.non_empty("filePath") {
        meta.text("file_path", file);
        meta.text_opt("directory", parent_dir(file));
    }
    meta.text_opt("language", props.non_empty("language"));

    let start = props.get_int("startLine");
    let end = props.get_int("endLine");
    if start > 0 {
        meta.number("start_line", start);
    }
    if end > 0 {
        meta.number("end_line", end);
        meta.number("line_count", end.saturating_sub(start).saturating_add(1));
    }
    meta.text("repo", cx.repo());
}

pub fn push_ownership(meta: &mut Metadata, cx: &RenderContext<'_>) {
    meta.text_opt("domain", cx.domain());
    meta.text_opt("subdomain", cx.subdomain());
}

/// Defined In, ownership, `extra`, then the source link.
pub fn body(cx: &RenderContext<'_>, extra: impl FnOnce(&mut Vec<Section>)) -> Vec<Section> {
    let mut sections = Vec::new();
    cx.push_defined_in_section(&mut sections);
    cx.push_ownership_sections(&mut sections);
    extra(&mut sections);
    cx.push_source_section(
        &mut sections,
        cx.props().get_str("filePath"),
        cx.props().get_int("startLine"),
    );
    sections
}

/// `"<subject> is a <what> in the <repo> codebase[, defined in <path>]."`
pub fn summary(cx: &RenderContext<'_>, subject: &str, what: &str) -> String {
    let mut desc = format!("{subject} is a {what} in the {} codebase", cx.repo());
    if let Some(file) = cx.defining_file() {
        desc.push_str(&format!(", defined in {}", cx.display_path(file)));
    }
    desc.push('.');
    desc
}
