use crate::blocks::StyleDecl;
use crate::html::TrustedHtml;

/// A renderable unit in the output tree.
///
/// `Text` is escaped when written; `Html` is emitted verbatim under the
/// trusted-output contract. Frontends either walk the tree themselves or
/// flatten it with [`RenderTree::to_html`].
#[derive(Debug, Clone, PartialEq)]
pub enum RenderNode {
    Element(Element),
    Text(String),
    Html(TrustedHtml),
}

/// An HTML element node with classes, an inline style declaration and
/// plain attributes, built up through the chained constructors.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: &'static str,
    classes: Vec<String>,
    style: StyleDecl,
    attrs: Vec<(&'static str, Option<String>)>,
    children: Vec<RenderNode>,
}

// Elements that never take children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "source"];

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            style: StyleDecl::default(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn classes(mut self, classes: impl IntoIterator<Item = String>) -> Self {
        self.classes.extend(classes);
        self
    }

    pub fn style(mut self, style: StyleDecl) -> Self {
        self.style = style;
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, Some(value.into())));
        self
    }

    /// A boolean attribute, written as the bare name (`controls`, `open`).
    pub fn flag(mut self, name: &'static str) -> Self {
        self.attrs.push((name, None));
        self
    }

    pub fn child(mut self, node: RenderNode) -> Self {
        self.children.push(node);
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = RenderNode>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(RenderNode::Text(text.into()))
    }

    pub fn html(self, html: TrustedHtml) -> Self {
        self.child(RenderNode::Html(html))
    }

    pub fn into_node(self) -> RenderNode {
        RenderNode::Element(self)
    }

    fn write(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        if !self.classes.is_empty() {
            out.push_str(" class=\"");
            let joined = self.classes.join(" ");
            out.push_str(&html_escape::encode_double_quoted_attribute(&joined));
            out.push('"');
        }
        if !self.style.is_empty() {
            out.push_str(" style=\"");
            let css = self.style.to_string();
            out.push_str(&html_escape::encode_double_quoted_attribute(&css));
            out.push('"');
        }
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            if let Some(value) = value {
                out.push_str("=\"");
                out.push_str(&html_escape::encode_double_quoted_attribute(value));
                out.push('"');
            }
        }
        out.push('>');
        if VOID_ELEMENTS.contains(&self.tag) {
            return;
        }
        for child in &self.children {
            child.write(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

impl From<Element> for RenderNode {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl RenderNode {
    fn write(&self, out: &mut String) {
        match self {
            Self::Element(element) => element.write(out),
            Self::Text(text) => out.push_str(&html_escape::encode_text(text)),
            Self::Html(html) => out.push_str(html.as_str()),
        }
    }
}

/// The ordered output of a render pass. Sibling order mirrors input order
/// exactly; nothing is reordered or deduplicated.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderTree {
    pub nodes: Vec<RenderNode>,
}

impl RenderTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Flatten the tree to a trusted HTML fragment.
    pub fn to_html(&self) -> TrustedHtml {
        let mut out = String::new();
        for node in &self.nodes {
            node.write(&mut out);
        }
        TrustedHtml::from_trusted(out)
    }
}

impl From<Vec<RenderNode>> for RenderTree {
    fn from(nodes: Vec<RenderNode>) -> Self {
        Self { nodes }
    }
}

impl Extend<RenderNode> for RenderTree {
    fn extend<T: IntoIterator<Item = RenderNode>>(&mut self, iter: T) {
        self.nodes.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn html_of(node: RenderNode) -> String {
        RenderTree::from(vec![node]).to_html().into_string()
    }

    #[test]
    fn element_writes_classes_style_then_attrs() {
        let node = Element::new("div")
            .class("a")
            .class("b")
            .style(StyleDecl::default().with("color", "#333"))
            .attr("data-kind", "demo")
            .text("hi")
            .into_node();
        assert_eq!(
            html_of(node),
            "<div class=\"a b\" style=\"color:#333\" data-kind=\"demo\">hi</div>"
        );
    }

    #[test]
    fn text_nodes_are_escaped() {
        let node = Element::new("p").text("a < b & c").into_node();
        assert_eq!(html_of(node), "<p>a &lt; b &amp; c</p>");
    }

    #[test]
    fn html_nodes_pass_through_verbatim() {
        let node = Element::new("div")
            .html(TrustedHtml::from_trusted("<em>kept</em>"))
            .into_node();
        assert_eq!(html_of(node), "<div><em>kept</em></div>");
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let node = Element::new("img").attr("src", "/a.jpg").into_node();
        assert_eq!(html_of(node), "<img src=\"/a.jpg\">");
    }

    #[test]
    fn flag_attributes_write_the_bare_name() {
        let node = Element::new("video")
            .attr("src", "/clip.mp4")
            .flag("controls")
            .into_node();
        assert_eq!(html_of(node), "<video src=\"/clip.mp4\" controls></video>");
    }

    #[test]
    fn sibling_order_is_preserved() {
        let tree = RenderTree::from(vec![
            Element::new("p").text("1").into_node(),
            Element::new("p").text("2").into_node(),
            Element::new("p").text("3").into_node(),
        ]);
        assert_eq!(tree.to_html().into_string(), "<p>1</p><p>2</p><p>3</p>");
    }
}
