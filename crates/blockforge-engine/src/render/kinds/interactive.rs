//! Interactive kinds: accordion, tabs. Rendered as static markup; behavior
//! is layered on by the frontend's scripts and styles.

use crate::blocks::{AccordionItem, TabItem};
use crate::html::TrustedHtml;
use crate::render::tree::{Element, RenderNode};
use crate::richtext::serialize_rich_text;

pub(crate) fn accordion(items: &[AccordionItem]) -> Option<RenderNode> {
    let rendered: Vec<RenderNode> = items
        .iter()
        .filter_map(|item| {
            let title = item.title.as_deref()?;
            let mut details = Element::new("details").class("accordion-item");
            if item.is_open {
                details = details.flag("open");
            }
            Some(
                details
                    .child(
                        Element::new("summary")
                            .class("accordion-title")
                            .text(title)
                            .into_node(),
                    )
                    .child(
                        Element::new("div")
                            .class("accordion-content prose")
                            .html(serialize_rich_text(item.content.as_ref()))
                            .into_node(),
                    )
                    .into_node(),
            )
        })
        .collect();
    if rendered.is_empty() {
        return None;
    }
    Some(
        Element::new("div")
            .class("accordion-block")
            .children(rendered)
            .into_node(),
    )
}

pub(crate) fn tabs(items: &[TabItem]) -> Option<RenderNode> {
    let titled: Vec<&TabItem> = items.iter().filter(|item| item.title.is_some()).collect();
    if titled.is_empty() {
        return None;
    }

    let mut nav = Element::new("div").class("tabs-nav").attr("role", "tablist");
    for (index, item) in titled.iter().enumerate() {
        let mut label = Element::new("button")
            .class(if index == 0 {
                "tab-label active"
            } else {
                "tab-label"
            })
            .attr("role", "tab");
        if let Some(icon) = &item.icon {
            label = label.child(
                Element::new("span")
                    .class("tab-icon")
                    .html(TrustedHtml::from_trusted(icon.clone()))
                    .into_node(),
            );
        }
        if let Some(title) = &item.title {
            label = label.text(title.clone());
        }
        nav = nav.child(label.into_node());
    }

    let mut panels = Element::new("div").class("tabs-panels");
    for (index, item) in titled.iter().enumerate() {
        panels = panels.child(
            Element::new("div")
                .class(if index == 0 {
                    "tab-panel active prose"
                } else {
                    "tab-panel prose"
                })
                .attr("role", "tabpanel")
                .html(serialize_rich_text(item.content.as_ref()))
                .into_node(),
        );
    }

    Some(
        Element::new("div")
            .class("tabs-block")
            .child(nav.into_node())
            .child(panels.into_node())
            .into_node(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tree::RenderTree;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn html_of(node: Option<RenderNode>) -> String {
        match node {
            Some(node) => RenderTree::from(vec![node]).to_html().into_string(),
            None => String::new(),
        }
    }

    #[test]
    fn accordion_without_items_renders_nothing() {
        assert_eq!(html_of(accordion(&[])), "");
    }

    #[test]
    fn accordion_opens_items_marked_open() {
        let items: Vec<AccordionItem> = serde_json::from_value(json!([
            { "title": "One", "content": "first", "isOpen": true },
            { "title": "Two", "content": "second" }
        ]))
        .unwrap();
        let html = html_of(accordion(&items));
        assert!(
            html.contains("<details class=\"accordion-item\" open>"),
            "{html}"
        );
        let one = html.find("One").unwrap();
        let two = html.find("Two").unwrap();
        assert!(one < two);
    }

    #[test]
    fn accordion_items_without_titles_are_skipped() {
        let items: Vec<AccordionItem> =
            serde_json::from_value(json!([{ "content": "orphan" }])).unwrap();
        assert_eq!(html_of(accordion(&items)), "");
    }

    #[test]
    fn tabs_render_nav_and_panels_with_first_active() {
        let items: Vec<TabItem> = serde_json::from_value(json!([
            { "title": "Details", "content": "details body" },
            { "title": "Reviews", "content": "review body" }
        ]))
        .unwrap();
        let html = html_of(tabs(&items));
        assert!(html.contains("class=\"tab-label active\""), "{html}");
        assert!(html.contains("class=\"tab-panel active prose\""), "{html}");
        let nav = html.find("Details").unwrap();
        let body = html.find("details body").unwrap();
        assert!(nav < body);
    }
}
