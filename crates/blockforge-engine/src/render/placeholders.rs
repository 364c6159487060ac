//! Diagnostic and empty-state panels.
//!
//! Every failure mode in the renderer degrades to one of these locally,
//! keeping a malformed block from invalidating its siblings or aborting the
//! page render.

use crate::render::tree::{Element, RenderNode};

/// Notice shown inside a block whose required content is missing but which
/// still renders a visible hint (video without a URL, raw HTML without
/// markup).
pub(crate) fn notice(message: &str, detail: &str) -> RenderNode {
    Element::new("div")
        .class("bg-yellow-100 p-4 text-center text-yellow-800 rounded")
        .child(Element::new("p").text(message).into_node())
        .child(Element::new("small").text(detail).into_node())
        .into_node()
}

/// Placeholder for recognized kinds whose layout has not shipped yet.
pub(crate) fn coming_soon(type_name: &str) -> RenderNode {
    let label = type_name.replace('_', " ").to_uppercase();
    Element::new("div")
        .class("bg-blue-50 p-6 text-center text-blue-800 rounded-lg border border-blue-200")
        .child(
            Element::new("p")
                .class("font-medium")
                .text(format!("{label} Block"))
                .into_node(),
        )
        .child(
            Element::new("small")
                .class("text-blue-600")
                .text("This block type will be implemented soon")
                .into_node(),
        )
        .into_node()
}

/// Diagnostic for a `blockType` value outside the catalogue.
pub(crate) fn unknown_block(block_type: &str) -> RenderNode {
    Element::new("div")
        .class("bg-gray-100 p-4 text-center text-gray-600")
        .child(
            Element::new("p")
                .text(format!("Unknown block type: {block_type}"))
                .into_node(),
        )
        .into_node()
}

/// Empty state for a row with no columns.
pub(crate) fn empty_row() -> RenderNode {
    Element::new("div")
        .class("bg-gray-50 p-8 text-center text-gray-500 border-2 border-dashed border-gray-300 rounded-lg")
        .child(
            Element::new("p")
                .text("No columns defined for this row.")
                .into_node(),
        )
        .into_node()
}

/// Diagnostic emitted when block nesting passes the traversal bound. The
/// CMS does not stop operators from authoring cyclic row/column references,
/// so the renderer cuts the subtree off instead of recursing forever.
pub(crate) fn nesting_too_deep() -> RenderNode {
    Element::new("div")
        .class("bg-red-100 p-4 text-red-800 rounded")
        .child(
            Element::new("p")
                .text("Block nesting too deep; possible cyclic block reference")
                .into_node(),
        )
        .into_node()
}

/// Diagnostic for a content-block entry whose relationship was not resolved
/// to a full block by the upstream query.
pub(crate) fn missing_reference() -> RenderNode {
    Element::new("div")
        .class("bg-red-100 p-4 text-red-800 rounded mb-6")
        .child(
            Element::new("p")
                .text("Content block reference is missing")
                .into_node(),
        )
        .into_node()
}

/// Notice for a rich-text page entry without content.
pub(crate) fn missing_rich_text() -> RenderNode {
    Element::new("div")
        .class("bg-yellow-100 p-4 text-yellow-800 rounded mb-6")
        .child(
            Element::new("p")
                .text("Rich text content is missing")
                .into_node(),
        )
        .into_node()
}

/// Diagnostic for a page entry kind the assembler does not recognize.
pub(crate) fn unknown_entry(entry: &serde_json::Value) -> RenderNode {
    let raw = serde_json::to_string(entry).unwrap_or_default();
    Element::new("div")
        .class("bg-gray-100 p-4 text-gray-600 rounded mb-6")
        .child(
            Element::new("p")
                .text(format!("Unknown block type: {raw}"))
                .into_node(),
        )
        .into_node()
}

/// Empty state for a page with no builder entries at all.
pub(crate) fn empty_page() -> RenderNode {
    Element::new("div")
        .class("bg-gray-50 p-8 text-center text-gray-500 border-2 border-dashed border-gray-300 rounded-lg")
        .child(
            Element::new("p")
                .text("No content blocks found. Start building your page!")
                .into_node(),
        )
        .into_node()
}
