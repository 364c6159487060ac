//! Layout kinds: row, column, section.

use crate::blocks::Column;
use crate::render::dispatch::render_blocks_at;
use crate::render::placeholders;
use crate::render::tree::{Element, RenderNode};
use crate::richtext::{RichTextContent, serialize_rich_text};

/// A row of columns on a 12-unit grid.
///
/// Each column renders either its nested block sequence (recursing through
/// block dispatch, one level deeper) or its legacy rich-text content. Column
/// order is preserved exactly.
pub(crate) fn row(columns: &[Column], depth: usize) -> RenderNode {
    let container = Element::new("div").class("container mx-auto px-4");
    if columns.is_empty() {
        return container.child(placeholders::empty_row()).into_node();
    }

    let mut grid = Element::new("div").class("grid grid-cols-12 gap-4");
    for column in columns {
        let span = column.grid_span();
        let mut cell = Element::new("div").class(format!("col-span-12 lg:col-span-{span}"));
        match &column.blocks {
            Some(blocks) if !blocks.is_empty() => {
                cell = cell.children(render_blocks_at(blocks, depth + 1).nodes);
            }
            _ => {
                if let Some(content) = &column.content {
                    cell = cell.child(prose(content));
                }
            }
        }
        grid = grid.child(cell.into_node());
    }
    container.child(grid.into_node()).into_node()
}

/// A standalone column block: legacy rich-text content only.
pub(crate) fn column(content: Option<&RichTextContent>) -> RenderNode {
    let mut el = Element::new("div").class("column-block");
    if let Some(content) = content {
        el = el.child(prose(content));
    }
    el.into_node()
}

pub(crate) fn section(content: Option<&RichTextContent>) -> RenderNode {
    let mut el = Element::new("section").class("section-block py-8");
    if let Some(content) = content {
        el = el.child(prose(content));
    }
    el.into_node()
}

fn prose(content: &RichTextContent) -> RenderNode {
    Element::new("div")
        .class("prose max-w-none")
        .html(serialize_rich_text(Some(content)))
        .into_node()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tree::RenderTree;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn html_of(node: RenderNode) -> String {
        RenderTree::from(vec![node]).to_html().into_string()
    }

    #[test]
    fn row_without_columns_renders_empty_row_placeholder() {
        let html = html_of(row(&[], 0));
        assert!(html.contains("No columns defined for this row."), "{html}");
    }

    #[test]
    fn row_maps_column_widths_to_grid_spans_in_order() {
        let columns: Vec<Column> = serde_json::from_value(json!([
            { "width": "8", "content": "main" },
            { "width": "4", "content": "side" }
        ]))
        .unwrap();
        let html = html_of(row(&columns, 0));
        assert_eq!(
            html,
            "<div class=\"container mx-auto px-4\">\
             <div class=\"grid grid-cols-12 gap-4\">\
             <div class=\"col-span-12 lg:col-span-8\">\
             <div class=\"prose max-w-none\">main</div></div>\
             <div class=\"col-span-12 lg:col-span-4\">\
             <div class=\"prose max-w-none\">side</div></div>\
             </div></div>"
        );
    }

    #[test]
    fn nested_blocks_take_precedence_over_legacy_content() {
        let columns: Vec<Column> = serde_json::from_value(json!([{
            "width": "6",
            "content": "legacy ignored",
            "blocks": [{
                "blockType": "heading",
                "isActive": true,
                "heading": { "text": "Nested" }
            }]
        }]))
        .unwrap();
        let html = html_of(row(&columns, 0));
        assert!(html.contains("<h2 class=\"heading-block\">Nested</h2>"), "{html}");
        assert!(!html.contains("legacy ignored"), "{html}");
    }

    #[test]
    fn empty_nested_block_list_falls_back_to_legacy_content() {
        let columns: Vec<Column> = serde_json::from_value(json!([{
            "content": "legacy",
            "blocks": []
        }]))
        .unwrap();
        let html = html_of(row(&columns, 0));
        assert!(html.contains("legacy"), "{html}");
    }

    #[test]
    fn section_renders_without_content() {
        let html = html_of(section(None));
        assert_eq!(html, "<section class=\"section-block py-8\"></section>");
    }
}
