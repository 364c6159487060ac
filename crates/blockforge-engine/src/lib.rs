//! Render core for a CMS page builder.
//!
//! Consumes already-parsed content projections (Lexical rich-text documents,
//! typed page-builder blocks) and produces trusted HTML fragments or a
//! renderable tree. Pure and synchronous: no I/O, no shared state, and no
//! failure channel past the parse boundary.

pub mod blocks;
pub mod html;
pub mod input;
pub mod page;
pub mod render;
pub mod richtext;

// Re-export key types for easier usage
pub use blocks::{Block, BlockKind, Column, MediaRef, RecordId, StyleDecl, Styling};
pub use html::TrustedHtml;
pub use input::{InputError, parse_blocks, parse_page, parse_rich_text};
pub use page::{BlockRef, Page, PageBuilderEntry, render_page};
pub use render::{Element, RenderNode, RenderTree, render_block, render_blocks};
pub use richtext::{LexicalDocument, LexicalNode, RichTextContent, serialize_rich_text};
