use serde::Deserialize;

/// A rich-text field value as stored by the CMS.
///
/// Legacy fields hold a plain string; newer fields hold a Lexical document
/// tree. Both shapes arrive through the same JSON column, so the model is an
/// untagged union.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RichTextContent {
    Plain(String),
    Document(LexicalDocument),
}

/// A Lexical editor document: a root wrapping the ordered top-level blocks.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LexicalDocument {
    pub root: LexicalRoot,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LexicalRoot {
    #[serde(default)]
    pub children: Vec<LexicalNode>,
}

/// A node in a Lexical document tree.
///
/// The editor emits loosely-typed JSON objects; deserialization goes through
/// a raw shape and classifies each object by its `type` discriminant first,
/// then by the presence of a `text` attribute. Anything else becomes a
/// [`LexicalNode::Container`], which serializes to nothing itself but still
/// exposes its children (list items arrive this way).
#[derive(Debug, Clone, PartialEq)]
pub enum LexicalNode {
    Paragraph {
        children: Vec<LexicalNode>,
    },
    Heading {
        tag: HeadingTag,
        children: Vec<LexicalNode>,
    },
    List {
        list_type: ListType,
        items: Vec<LexicalNode>,
    },
    Quote {
        children: Vec<LexicalNode>,
    },
    Link {
        url: Option<String>,
        new_tab: bool,
        children: Vec<LexicalNode>,
    },
    /// A text leaf with independent formatting flags.
    Text {
        text: String,
        format: TextFormat,
    },
    /// A node with no recognized type and no text of its own.
    Container {
        children: Vec<LexicalNode>,
    },
}

impl LexicalNode {
    /// Child nodes, in document order. Text leaves have none.
    pub fn children(&self) -> &[LexicalNode] {
        match self {
            Self::Paragraph { children }
            | Self::Heading { children, .. }
            | Self::Quote { children }
            | Self::Link { children, .. }
            | Self::Container { children } => children,
            Self::List { items, .. } => items,
            Self::Text { .. } => &[],
        }
    }
}

/// Formatting flags on a text leaf. All independent; any combination may be
/// active at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextFormat {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub code: bool,
}

impl TextFormat {
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }
}

/// Heading level, `h1` through `h6`. Defaults to `h2` when the document
/// leaves the tag unspecified or carries a value outside the known set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingTag {
    H1,
    #[default]
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingTag {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
        }
    }

    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "h1" => Some(Self::H1),
            "h2" => Some(Self::H2),
            "h3" => Some(Self::H3),
            "h4" => Some(Self::H4),
            "h5" => Some(Self::H5),
            "h6" => Some(Self::H6),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for HeadingTag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::parse(&tag).unwrap_or_default())
    }
}

/// List style. `number` renders `<ol>`; anything else renders `<ul>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListType {
    #[default]
    Bullet,
    Number,
}

/// The loose JSON shape a Lexical node arrives in. Unknown fields are
/// ignored; classification happens in the `From` conversion below.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawNode {
    #[serde(rename = "type")]
    node_type: Option<String>,
    tag: Option<HeadingTag>,
    #[serde(rename = "listType")]
    list_type: Option<String>,
    url: Option<String>,
    #[serde(rename = "newTab")]
    new_tab: Option<bool>,
    text: Option<String>,
    bold: Option<bool>,
    italic: Option<bool>,
    underline: Option<bool>,
    strikethrough: Option<bool>,
    code: Option<bool>,
    children: Option<Vec<LexicalNode>>,
}

impl From<RawNode> for LexicalNode {
    fn from(raw: RawNode) -> Self {
        let children = raw.children.unwrap_or_default();
        match raw.node_type.as_deref() {
            Some("paragraph") => Self::Paragraph { children },
            Some("heading") => Self::Heading {
                tag: raw.tag.unwrap_or_default(),
                children,
            },
            Some("list") => Self::List {
                list_type: match raw.list_type.as_deref() {
                    Some("number") => ListType::Number,
                    _ => ListType::Bullet,
                },
                items: children,
            },
            Some("quote") => Self::Quote { children },
            Some("link") => Self::Link {
                url: raw.url,
                new_tab: raw.new_tab.unwrap_or(false),
                children,
            },
            _ => match raw.text {
                Some(text) => Self::Text {
                    text,
                    format: TextFormat {
                        bold: raw.bold.unwrap_or(false),
                        italic: raw.italic.unwrap_or(false),
                        underline: raw.underline.unwrap_or(false),
                        strikethrough: raw.strikethrough.unwrap_or(false),
                        code: raw.code.unwrap_or(false),
                    },
                },
                None => Self::Container { children },
            },
        }
    }
}

impl<'de> Deserialize<'de> for LexicalNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        RawNode::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(value: serde_json::Value) -> LexicalNode {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn text_leaf_without_type_is_classified_by_text_presence() {
        let parsed = node(json!({ "text": "hello", "bold": true }));
        assert_eq!(
            parsed,
            LexicalNode::Text {
                text: "hello".to_string(),
                format: TextFormat {
                    bold: true,
                    ..TextFormat::default()
                },
            }
        );
    }

    #[test]
    fn type_discriminant_wins_over_text_attribute() {
        // A malformed node carrying both a block type and a text attribute
        // classifies by type, matching the original dispatch order.
        let parsed = node(json!({ "type": "paragraph", "text": "ignored" }));
        assert_eq!(parsed, LexicalNode::Paragraph { children: vec![] });
    }

    #[test]
    fn unrecognized_type_with_children_becomes_container() {
        let parsed = node(json!({
            "type": "listitem",
            "children": [{ "text": "A" }]
        }));
        match parsed {
            LexicalNode::Container { children } => assert_eq!(children.len(), 1),
            other => panic!("expected container, got {other:?}"),
        }
    }

    #[test]
    fn heading_tag_outside_known_set_falls_back_to_h2() {
        let parsed = node(json!({ "type": "heading", "tag": "h9" }));
        assert_eq!(
            parsed,
            LexicalNode::Heading {
                tag: HeadingTag::H2,
                children: vec![],
            }
        );
    }

    #[test]
    fn plain_string_content_deserializes_as_legacy_text() {
        let content: RichTextContent = serde_json::from_value(json!("just text")).unwrap();
        assert_eq!(content, RichTextContent::Plain("just text".to_string()));
    }

    #[test]
    fn document_content_deserializes_root_children_in_order() {
        let content: RichTextContent = serde_json::from_value(json!({
            "root": {
                "children": [
                    { "type": "paragraph", "children": [{ "text": "one" }] },
                    { "type": "paragraph", "children": [{ "text": "two" }] }
                ]
            }
        }))
        .unwrap();
        let RichTextContent::Document(doc) = content else {
            panic!("expected document");
        };
        assert_eq!(doc.root.children.len(), 2);
    }
}
