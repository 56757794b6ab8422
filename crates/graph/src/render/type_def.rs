use super::context::RenderContext;
use super::document::{Faq, Metadata, Section};
use super::faq::defined_at;
use super::recipe::EntityRecipe;
use super::symbol;

pub struct TypeRecipe;

impl EntityRecipe for TypeRecipe {
    fn metadata(&self, cx: &RenderContext<'_>) -> Metadata {
        let name = cx.props().get_str("name");
        let mut meta = Metadata::new();
        meta.text("title", format!("{name} Type | {} Architecture", cx.repo()));
        meta.text(
            "description",
            symbol::description(cx, &format!("{name} type/interface")),
        );
        meta.text("node_type", "Type");
        meta.text("type_name", name);
        symbol::push_location(&mut meta, cx);
        symbol::push_ownership(&mut meta, cx);
        meta
    }

    fn body_sections(&self, cx: &RenderContext<'_>) -> Vec<Section> {
        symbol::body(cx, |_| {})
    }

    fn faq_candidates(&self, cx: &RenderContext<'_>) -> Vec<Faq> {
        let name = cx.name();
        let mut faqs = vec![Faq::new(
            format!("What is the {name} type?"),
            symbol::summary(cx, name, "type/interface"),
        )];
        if let Some(answer) = defined_at(cx, name) {
            faqs.push(Faq::new(format!("Where is {name} defined?"), answer));
        }
        faqs
    }
}
