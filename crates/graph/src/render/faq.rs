use super::context::RenderContext;

/// Display names of `ids`, byte-sorted, joined with `", "` and cut after
/// `limit` entries with an `and N more` tail.
pub fn listing(cx: &RenderContext<'_>, ids: &[String], limit: usize) -> String {
    let mut names: Vec<&str> = ids.iter().map(|id| cx.graph.display_name(id)).collect();
    names.sort_unstable();
    summarize(&names, limit)
}

pub fn summarize(names: &[&str], limit: usize) -> String {
    if names.len() <= limit {
        return names.join(", ");
    }
    format!(
        "{}, and {} more",
        names[..limit].join(", "),
        names.len() - limit
    )
}

/// `"<subject> is defined in <path>[ at line N]."` when a defining file is
/// known.
pub fn defined_at(cx: &RenderContext<'_>, subject: &str) -> Option<String> {
    let file = cx.defining_file()?;
    let mut answer = format!("{subject} is defined in {}", cx.display_path(file));
    let line = cx.props().get_int("startLine");
    if line > 0 {
        answer.push_str(&format!(" at line {line}"));
    }
    answer.push('.');
    Some(answer)
}
