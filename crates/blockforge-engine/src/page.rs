//! Top-level page assembly: resolving the page-builder entry sequence a
//! Page or Template aggregate owns into a render tree.

use crate::blocks::{Block, RecordId};
use crate::html::TrustedHtml;
use crate::render::{Element, RenderNode, RenderTree, placeholders, render_block_at};
use crate::richtext::{RichTextContent, serialize_rich_text};
use serde::Deserialize;

/// A page document as projected by the content store.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub page_builder: Vec<PageBuilderEntry>,
}

/// One entry in a page's builder sequence, discriminated by `blockType`.
///
/// Entries are owned by the page aggregate and read-only at render time.
/// An entry kind outside the known set keeps its raw value for the
/// diagnostic panel instead of failing the page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageBuilderEntry {
    ContentBlock {
        id: Option<RecordId>,
        block: Option<BlockRef>,
    },
    RichText {
        id: Option<RecordId>,
        content: Option<RichTextContent>,
    },
    CustomHtml {
        id: Option<RecordId>,
        html: Option<String>,
        css: Option<String>,
    },
    Unknown(serde_json::Value),
}

/// A relationship to a content block: either the bare record id (left
/// unresolved by the upstream query) or the populated block. Only the
/// resolved form renders; the renderer performs no fetches of its own.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BlockRef {
    Unresolved(RecordId),
    Resolved(Box<Block>),
}

impl BlockRef {
    pub fn resolved(&self) -> Option<&Block> {
        match self {
            Self::Resolved(block) => Some(block),
            Self::Unresolved(_) => None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "blockType")]
enum KnownEntry {
    #[serde(rename = "contentBlock")]
    ContentBlock {
        #[serde(default)]
        id: Option<RecordId>,
        #[serde(default)]
        block: Option<BlockRef>,
    },
    #[serde(rename = "richText")]
    RichText {
        #[serde(default)]
        id: Option<RecordId>,
        #[serde(default)]
        content: Option<RichTextContent>,
    },
    #[serde(rename = "customHTML")]
    CustomHtml {
        #[serde(default)]
        id: Option<RecordId>,
        #[serde(default)]
        html: Option<String>,
        #[serde(default)]
        css: Option<String>,
    },
}

impl From<KnownEntry> for PageBuilderEntry {
    fn from(entry: KnownEntry) -> Self {
        match entry {
            KnownEntry::ContentBlock { id, block } => Self::ContentBlock { id, block },
            KnownEntry::RichText { id, content } => Self::RichText { id, content },
            KnownEntry::CustomHtml { id, html, css } => Self::CustomHtml { id, html, css },
        }
    }
}

impl<'de> Deserialize<'de> for PageBuilderEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        match serde_json::from_value::<KnownEntry>(value.clone()) {
            Ok(entry) => Ok(entry.into()),
            Err(_) => Ok(Self::Unknown(value)),
        }
    }
}

/// Assemble a page's builder entries into a render tree.
///
/// The output is a single `page-builder` element wrapping the entries in
/// order; an empty sequence renders the empty-state panel instead. Every
/// per-entry failure degrades to a local diagnostic.
pub fn render_page(entries: &[PageBuilderEntry]) -> RenderTree {
    if entries.is_empty() {
        let wrapper = Element::new("div")
            .class("page-builder-empty")
            .child(placeholders::empty_page());
        return RenderTree::from(vec![wrapper.into_node()]);
    }

    let mut wrapper = Element::new("div").class("page-builder");
    for entry in entries {
        wrapper = wrapper.children(render_entry(entry));
    }
    RenderTree::from(vec![wrapper.into_node()])
}

fn render_entry(entry: &PageBuilderEntry) -> Vec<RenderNode> {
    match entry {
        PageBuilderEntry::ContentBlock { block, .. } => match block {
            Some(BlockRef::Resolved(block)) => render_block_at(block, 0, Some("mb-6")),
            Some(BlockRef::Unresolved(_)) | None => vec![placeholders::missing_reference()],
        },
        PageBuilderEntry::RichText { content, .. } => match content {
            Some(content) => vec![
                Element::new("div")
                    .class("prose max-w-none mb-6")
                    .html(serialize_rich_text(Some(content)))
                    .into_node(),
            ],
            None => vec![placeholders::missing_rich_text()],
        },
        PageBuilderEntry::CustomHtml { html, css, .. } => {
            let mut el = Element::new("div").class("custom-html-block mb-6");
            if let Some(css) = css {
                el = el.child(
                    Element::new("style")
                        .html(TrustedHtml::from_trusted(css.clone()))
                        .into_node(),
                );
            }
            vec![
                el.child(
                    Element::new("div")
                        .html(TrustedHtml::from_trusted(html.clone().unwrap_or_default()))
                        .into_node(),
                )
                .into_node(),
            ]
        }
        PageBuilderEntry::Unknown(value) => vec![placeholders::unknown_entry(value)],
    }
}
