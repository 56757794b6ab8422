use super::context::RenderContext;
use super::document::{Faq, Metadata, Section};
use super::faq::defined_at;
use super::recipe::EntityRecipe;
use super::symbol;
use crate::types::Relation;

pub struct ClassRecipe;

impl ClassRecipe {
    /// Extended class names in edge order.
    fn parents<'a>(cx: &'a RenderContext<'_>) -> Vec<&'a str> {
        cx.related(Relation::Extends)
            .iter()
            .map(|id| cx.display_name(id))
            .collect()
    }
}

impl EntityRecipe for ClassRecipe {
    fn metadata(&self, cx: &RenderContext<'_>) -> Metadata {
        let name = cx.props().get_str("name");
        let mut meta = Metadata::new();
        meta.text("title", format!("{name} Class | {} Architecture", cx.repo()));
        meta.text("description", symbol::description(cx, &format!("{name} class")));
        meta.text("node_type", "Class");
        meta.text("class_name", name);
        symbol::push_location(&mut meta, cx);
        symbol::push_ownership(&mut meta, cx);

        let parents = Self::parents(cx);
        if !parents.is_empty() {
            meta.text("extends", parents.join(", "));
        }
        meta
    }

    fn body_sections(&self, cx: &RenderContext<'_>) -> Vec<Section> {
        symbol::body(cx, |sections| {
            let parents: Vec<String> = cx
                .related(Relation::Extends)
                .iter()
                .map(|id| cx.link(id, cx.display_name(id)))
                .collect();
            if !parents.is_empty() {
                sections.push(Section::new("Extends", parents));
            }
        })
    }

    fn faq_candidates(&self, cx: &RenderContext<'_>) -> Vec<Faq> {
        let name = cx.name();
        let mut faqs = vec![Faq::new(
            format!("What is the {name} class?"),
            symbol::summary(cx, name, "class"),
        )];

        if let Some(answer) = defined_at(cx, name) {
            faqs.push(Faq::new(format!("Where is {name} defined?"), answer));
        }

        let parents = Self::parents(cx);
        if !parents.is_empty() {
            faqs.push(Faq::new(
                format!("What does {name} extend?"),
                format!("{name} extends {}.", parents.join(", ")),
            ));
        }

        faqs
    }
}
