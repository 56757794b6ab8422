use super::context::RenderContext;
use super::document::{Faq, Metadata};
use super::faq::{defined_at, listing};
use super::recipe::EntityRecipe;
use super::{symbol, Section};
use crate::types::Relation;

const CALL_LIMIT: usize = 8;

pub struct FunctionRecipe;

impl EntityRecipe for FunctionRecipe {
    fn metadata(&self, cx: &RenderContext<'_>) -> Metadata {
        let name = cx.props().get_str("name");
        let mut meta = Metadata::new();
        meta.text("title", format!("{name}() | {} Function Reference", cx.repo()));
        meta.text("description", symbol::description(cx, &format!("{name}() function")));
        meta.text("node_type", "Function");
        meta.text("function_name", name);
        symbol::push_location(&mut meta, cx);
        meta.number("call_count", cx.count(Relation::Calls));
        meta.number("called_by_count", cx.count(Relation::CalledBy));
        symbol::push_ownership(&mut meta, cx);
        meta
    }

    fn body_sections(&self, cx: &RenderContext<'_>) -> Vec<Section> {
        let call_label = |id: &str| format!("{}()", cx.display_name(id));
        symbol::body(cx, |sections| {
            sections.extend(cx.linked_section("Calls", cx.related(Relation::Calls), call_label));
            sections.extend(cx.linked_section(
                "Called By",
                cx.related(Relation::CalledBy),
                call_label,
            ));
        })
    }

    fn faq_candidates(&self, cx: &RenderContext<'_>) -> Vec<Faq> {
        let subject = format!("{}()", cx.name());
        let mut faqs = vec![Faq::new(
            format!("What does {subject} do?"),
            symbol::summary(cx, &subject, "function"),
        )];

        if let Some(answer) = defined_at(cx, &subject) {
            faqs.push(Faq::new(format!("Where is {subject} defined?"), answer));
        }

        let calls = cx.related(Relation::Calls);
        if !calls.is_empty() {
            faqs.push(Faq::new(
                format!("What does {subject} call?"),
                format!(
                    "{subject} calls {} function(s): {}.",
                    calls.len(),
                    listing(cx, calls, CALL_LIMIT)
                ),
            ));
        }

        let callers = cx.related(Relation::CalledBy);
        if !callers.is_empty() {
            faqs.push(Faq::new(
                format!("What calls {subject}?"),
                format!(
                    "{subject} is called by {} function(s): {}.",
                    callers.len(),
                    listing(cx, callers, CALL_LIMIT)
                ),
            ));
        }

        faqs
    }
}
