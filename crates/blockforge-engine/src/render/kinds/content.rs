//! Content kinds: text, heading, quote, button, icon box, features, raw HTML.

use crate::blocks::{
    ButtonConfig, ButtonSize, ButtonStyle, FeatureItem, HeadingConfig, IconBoxConfig, QuoteConfig,
    StyleDecl,
};
use crate::html::TrustedHtml;
use crate::render::placeholders;
use crate::render::tree::{Element, RenderNode};
use crate::richtext::{RichTextContent, serialize_rich_text};

pub(crate) fn text(content: Option<&RichTextContent>) -> Option<RenderNode> {
    let content = content?;
    Some(
        Element::new("div")
            .class("text-block prose max-w-none")
            .html(serialize_rich_text(Some(content)))
            .into_node(),
    )
}

pub(crate) fn heading(heading: Option<&HeadingConfig>) -> Option<RenderNode> {
    let heading = heading?;
    let text = heading.text.as_deref()?;
    let mut el = Element::new(heading.tag.as_str()).class("heading-block");
    if let Some(color) = &heading.color {
        el = el.style(StyleDecl::default().with("color", color.clone()));
    }
    Some(el.text(text).into_node())
}

pub(crate) fn quote(quote: Option<&QuoteConfig>) -> Option<RenderNode> {
    let quote = quote?;
    let text = quote.text.as_deref()?;
    let mut el = Element::new("blockquote")
        .class("quote-block")
        .child(Element::new("p").class("quote-text").text(text).into_node());
    if quote.author.is_some() || quote.author_title.is_some() {
        let mut footer = Element::new("footer").class("quote-attribution");
        if let Some(url) = quote
            .author_image
            .as_ref()
            .and_then(|image| image.resolved())
            .and_then(|media| media.url.as_deref())
        {
            footer = footer.child(
                Element::new("img")
                    .class("quote-author-image")
                    .attr("src", url)
                    .attr("alt", "")
                    .into_node(),
            );
        }
        if let Some(author) = &quote.author {
            footer = footer.child(
                Element::new("cite")
                    .class("quote-author")
                    .text(author.clone())
                    .into_node(),
            );
        }
        if let Some(title) = &quote.author_title {
            footer = footer.child(
                Element::new("span")
                    .class("quote-author-title")
                    .text(title.clone())
                    .into_node(),
            );
        }
        el = el.child(footer.into_node());
    }
    Some(el.into_node())
}

pub(crate) fn button(button: Option<&ButtonConfig>) -> Option<RenderNode> {
    let button = button?;
    let text = button.text.as_deref()?;
    let url = button.url.as_deref()?;

    let inner = Element::new("span")
        .class("inline-block px-6 py-3 font-semibold text-center no-underline transition-all duration-200 rounded")
        .class(style_classes(button.style))
        .class(size_classes(button.size))
        .text(text);

    let mut anchor = Element::new("a").class("button-block").attr("href", url);
    let external = url.starts_with("http") || url.starts_with("//");
    if external && button.open_in_new_tab {
        anchor = anchor
            .attr("target", "_blank")
            .attr("rel", "noopener noreferrer");
    }
    Some(anchor.child(inner.into_node()).into_node())
}

fn style_classes(style: ButtonStyle) -> &'static str {
    match style {
        ButtonStyle::Primary => "bg-blue-600 text-white hover:bg-blue-700",
        ButtonStyle::Secondary => "bg-gray-600 text-white hover:bg-gray-700",
        ButtonStyle::Outline => {
            "border-2 border-blue-600 text-blue-600 hover:bg-blue-600 hover:text-white"
        }
        ButtonStyle::Ghost => "text-blue-600 hover:bg-blue-50",
    }
}

fn size_classes(size: ButtonSize) -> &'static str {
    match size {
        ButtonSize::Sm => "px-4 py-2 text-sm",
        ButtonSize::Md => "px-6 py-3",
        ButtonSize::Lg => "px-8 py-4 text-lg",
    }
}

pub(crate) fn icon_box(icon_box: Option<&IconBoxConfig>) -> Option<RenderNode> {
    let icon_box = icon_box?;
    let title = icon_box.title.as_deref()?;
    let mut el = Element::new("div").class("icon-box-block");
    if let Some(icon) = &icon_box.icon {
        // Icon fields hold an icon class or inline SVG: trusted markup.
        el = el.child(
            Element::new("span")
                .class("icon-box-icon")
                .html(TrustedHtml::from_trusted(icon.clone()))
                .into_node(),
        );
    }
    el = el.child(
        Element::new("h3")
            .class("icon-box-title")
            .text(title)
            .into_node(),
    );
    if let Some(description) = &icon_box.description {
        el = el.child(
            Element::new("p")
                .class("icon-box-description")
                .text(description.clone())
                .into_node(),
        );
    }
    if let Some(link) = &icon_box.link {
        el = el.child(
            Element::new("a")
                .class("icon-box-link")
                .attr("href", link.clone())
                .text("Learn more")
                .into_node(),
        );
    }
    Some(el.into_node())
}

pub(crate) fn features(features: &[FeatureItem]) -> Option<RenderNode> {
    if features.is_empty() {
        return None;
    }
    let mut grid = Element::new("div").class("grid grid-cols-1 md:grid-cols-3 gap-6");
    for item in features {
        let Some(title) = item.title.as_deref() else {
            continue;
        };
        let mut feature = Element::new("div").class("feature-item");
        if let Some(icon) = &item.icon {
            feature = feature.child(
                Element::new("span")
                    .class("feature-icon")
                    .html(TrustedHtml::from_trusted(icon.clone()))
                    .into_node(),
            );
        }
        feature = feature.child(
            Element::new("h3")
                .class("feature-title")
                .text(title)
                .into_node(),
        );
        if let Some(description) = &item.description {
            feature = feature.child(
                Element::new("p")
                    .class("feature-description")
                    .text(description.clone())
                    .into_node(),
            );
        }
        if let Some(link) = &item.link {
            feature = feature.child(
                Element::new("a")
                    .class("feature-link")
                    .attr("href", link.clone())
                    .text("Learn more")
                    .into_node(),
            );
        }
        grid = grid.child(feature.into_node());
    }
    Some(
        Element::new("div")
            .class("features-block")
            .child(grid.into_node())
            .into_node(),
    )
}

pub(crate) fn raw_html(html: Option<&str>, css: Option<&str>) -> RenderNode {
    let Some(html) = html else {
        return Element::new("div")
            .class("raw-html-block")
            .child(placeholders::notice(
                "No HTML content provided",
                "Please add HTML content to display",
            ))
            .into_node();
    };
    let mut el = Element::new("div").class("raw-html-block");
    if let Some(css) = css {
        el = el.child(
            Element::new("style")
                .html(TrustedHtml::from_trusted(css.to_string()))
                .into_node(),
        );
    }
    el.child(
        Element::new("div")
            .class("raw-html-content")
            .html(TrustedHtml::from_trusted(html.to_string()))
            .into_node(),
    )
    .into_node()
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
    fn text_without_content_renders_nothing() {
        assert_eq!(html_of(text(None)), "");
    }

    #[test]
    fn heading_applies_tag_and_color() {
        let config: HeadingConfig = serde_json::from_value(json!({
            "text": "Hello",
            "tag": "h3",
            "color": "#112233"
        }))
        .unwrap();
        assert_eq!(
            html_of(heading(Some(&config))),
            "<h3 class=\"heading-block\" style=\"color:#112233\">Hello</h3>"
        );
    }

    #[test]
    fn heading_without_text_renders_nothing() {
        let config: HeadingConfig = serde_json::from_value(json!({ "tag": "h1" })).unwrap();
        assert_eq!(html_of(heading(Some(&config))), "");
    }

    #[test]
    fn button_requires_both_text_and_url() {
        let no_url: ButtonConfig =
            serde_json::from_value(json!({ "text": "Click" })).unwrap();
        assert_eq!(html_of(button(Some(&no_url))), "");

        let no_text: ButtonConfig =
            serde_json::from_value(json!({ "url": "/go" })).unwrap();
        assert_eq!(html_of(button(Some(&no_text))), "");
    }

    #[test]
    fn internal_button_never_gets_target_blank() {
        let config: ButtonConfig = serde_json::from_value(json!({
            "text": "Go",
            "url": "/about",
            "openInNewTab": true
        }))
        .unwrap();
        let html = html_of(button(Some(&config)));
        assert!(html.starts_with("<a class=\"button-block\" href=\"/about\">"), "{html}");
        assert!(!html.contains("target"), "{html}");
    }

    #[test]
    fn external_button_with_new_tab_gets_target_and_rel() {
        let config: ButtonConfig = serde_json::from_value(json!({
            "text": "Go",
            "url": "https://example.com",
            "openInNewTab": true
        }))
        .unwrap();
        let html = html_of(button(Some(&config)));
        assert!(
            html.contains("target=\"_blank\" rel=\"noopener noreferrer\""),
            "{html}"
        );
    }

    #[test]
    fn quote_requires_text_and_renders_attribution() {
        let config: QuoteConfig = serde_json::from_value(json!({
            "text": "Well begun is half done.",
            "author": "Aristotle",
            "authorTitle": "Philosopher"
        }))
        .unwrap();
        let html = html_of(quote(Some(&config)));
        assert!(html.starts_with("<blockquote class=\"quote-block\">"), "{html}");
        assert!(html.contains("<cite class=\"quote-author\">Aristotle</cite>"), "{html}");
        assert!(
            html.contains("<span class=\"quote-author-title\">Philosopher</span>"),
            "{html}"
        );
    }

    #[test]
    fn features_skip_items_without_titles_but_keep_order() {
        let items: Vec<FeatureItem> = serde_json::from_value(json!([
            { "title": "Fast", "description": "Quick." },
            { "description": "No title, skipped." },
            { "title": "Safe" }
        ]))
        .unwrap();
        let html = html_of(features(&items));
        let fast = html.find("Fast").unwrap();
        let safe = html.find("Safe").unwrap();
        assert!(fast < safe);
        assert!(!html.contains("skipped"));
    }

    #[test]
    fn raw_html_passes_markup_and_css_verbatim() {
        let html = RenderTree::from(vec![raw_html(
            Some("<marquee>hi</marquee>"),
            Some(".x { color: red }"),
        )])
        .to_html()
        .into_string();
        assert_eq!(
            html,
            "<div class=\"raw-html-block\">\
             <style>.x { color: red }</style>\
             <div class=\"raw-html-content\"><marquee>hi</marquee></div>\
             </div>"
        );
    }

    #[test]
    fn raw_html_without_markup_shows_notice() {
        let html = RenderTree::from(vec![raw_html(None, None)])
            .to_html()
            .into_string();
        assert!(html.contains("No HTML content provided"), "{html}");
    }
}
