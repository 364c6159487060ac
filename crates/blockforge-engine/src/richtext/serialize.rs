use crate::html::TrustedHtml;
use crate::richtext::{LexicalNode, ListType, RichTextContent, TextFormat};

/// Serialize a rich-text field to an HTML fragment.
///
/// `None` produces the empty string, legacy plain strings pass through
/// unchanged, and Lexical documents serialize their top-level children in
/// document order. The output is trusted markup: no escaping is applied at
/// any level (see [`TrustedHtml`]). Malformed or unrecognized nodes degrade
/// to the empty string; this function never fails.
pub fn serialize_rich_text(content: Option<&RichTextContent>) -> TrustedHtml {
    let html = match content {
        None => String::new(),
        Some(RichTextContent::Plain(text)) => text.clone(),
        Some(RichTextContent::Document(doc)) => serialize_children(&doc.root.children),
    };
    TrustedHtml::from_trusted(html)
}

/// Serialize block-level nodes: the document's direct children.
fn serialize_children(nodes: &[LexicalNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            LexicalNode::Paragraph { children } => {
                out.push_str("<p>");
                out.push_str(&serialize_inline(children));
                out.push_str("</p>");
            }
            LexicalNode::Heading { tag, children } => {
                let tag = tag.as_str();
                out.push('<');
                out.push_str(tag);
                out.push('>');
                out.push_str(&serialize_inline(children));
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
            LexicalNode::List { list_type, items } => {
                let tag = match list_type {
                    ListType::Number => "ol",
                    ListType::Bullet => "ul",
                };
                out.push('<');
                out.push_str(tag);
                out.push('>');
                for item in items {
                    out.push_str("<li>");
                    out.push_str(&serialize_inline(item.children()));
                    out.push_str("</li>");
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
            LexicalNode::Quote { children } => {
                out.push_str("<blockquote>");
                out.push_str(&serialize_inline(children));
                out.push_str("</blockquote>");
            }
            LexicalNode::Link {
                url,
                new_tab,
                children,
            } => out.push_str(&link_html(url.as_deref(), *new_tab, children)),
            LexicalNode::Text { text, format } => out.push_str(&formatted_text(text, format)),
            // Unrecognized nodes contribute nothing at block level.
            LexicalNode::Container { .. } => {}
        }
    }
    out
}

/// Serialize inline content inside a paragraph, heading, list item or link.
///
/// Block constructs are not valid here and contribute nothing; only links
/// and text leaves render.
fn serialize_inline(nodes: &[LexicalNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            LexicalNode::Link {
                url,
                new_tab,
                children,
            } => out.push_str(&link_html(url.as_deref(), *new_tab, children)),
            LexicalNode::Text { text, format } => out.push_str(&formatted_text(text, format)),
            LexicalNode::Paragraph { .. }
            | LexicalNode::Heading { .. }
            | LexicalNode::List { .. }
            | LexicalNode::Quote { .. }
            | LexicalNode::Container { .. } => {}
        }
    }
    out
}

fn link_html(url: Option<&str>, new_tab: bool, children: &[LexicalNode]) -> String {
    let url = url.unwrap_or("#");
    let target = if new_tab {
        " target=\"_blank\" rel=\"noopener noreferrer\""
    } else {
        ""
    };
    format!(
        "<a href=\"{url}\"{target}>{}</a>",
        serialize_inline(children)
    )
}

/// Apply formatting wraps to a text leaf. Each active flag contributes one
/// tag, applied in a fixed order (bold innermost, code outermost).
fn formatted_text(text: &str, format: &TextFormat) -> String {
    let mut text = text.to_string();
    if format.bold {
        text = format!("<strong>{text}</strong>");
    }
    if format.italic {
        text = format!("<em>{text}</em>");
    }
    if format.underline {
        text = format!("<u>{text}</u>");
    }
    if format.strikethrough {
        text = format!("<s>{text}</s>");
    }
    if format.code {
        text = format!("<code>{text}</code>");
    }
    text
}
