use crate::blocks::{Block, BlockKind};
use crate::html::TrustedHtml;
use crate::render::kinds::{content, interactive, layout, media};
use crate::render::placeholders;
use crate::render::tree::{Element, RenderNode, RenderTree};

/// Bound on row/column/block nesting. The CMS schema allows operators to
/// author cyclic block references; traversal past this depth renders a
/// diagnostic instead of recursing.
pub const MAX_NESTING_DEPTH: usize = 16;

/// Render an ordered block sequence into a render tree.
///
/// Inactive blocks contribute nothing. Unknown kinds and not-yet-implemented
/// kinds contribute diagnostic panels. This never fails; one malformed block
/// is isolated to its own (possibly empty) output.
pub fn render_blocks(blocks: &[Block]) -> RenderTree {
    render_blocks_at(blocks, 0)
}

/// Render a single block, wrapper and scoped styles included.
///
/// Returns zero, one or two nodes: nothing for an inactive or
/// empty-rendering block, the wrapper element, and a scoped `<style>` node
/// when the block carries custom CSS.
pub fn render_block(block: &Block) -> Vec<RenderNode> {
    render_block_at(block, 0, None)
}

pub(crate) fn render_blocks_at(blocks: &[Block], depth: usize) -> RenderTree {
    let mut tree = RenderTree::new();
    for block in blocks {
        tree.extend(render_block_at(block, depth, None));
    }
    tree
}

pub(crate) fn render_block_at(
    block: &Block,
    depth: usize,
    extra_class: Option<&str>,
) -> Vec<RenderNode> {
    if !block.is_active {
        return Vec::new();
    }
    if depth > MAX_NESTING_DEPTH {
        return vec![placeholders::nesting_too_deep()];
    }
    let Some(body) = render_kind(block, depth) else {
        return Vec::new();
    };

    let mut wrapper = Element::new("div");
    if let Some(id) = &block.id {
        wrapper = wrapper.class(format!("block-{id}"));
    }
    if let Some(class) = extra_class {
        wrapper = wrapper.class(class);
    }
    if let Some(styling) = &block.styling {
        wrapper = wrapper
            .classes(styling.class_names())
            .style(styling.style_declaration());
    }

    let mut nodes = vec![wrapper.child(body).into_node()];
    if let (Some(id), Some(css)) = (
        &block.id,
        block.styling.as_ref().and_then(|s| s.custom_css.as_deref()),
    ) {
        nodes.push(scoped_style(&format!("block-{id}"), css));
    }
    nodes
}

/// Emit operator CSS scoped to the block's stable class so it cannot leak
/// into the rest of the page. The CSS body itself is trusted input.
fn scoped_style(scope_class: &str, css: &str) -> RenderNode {
    Element::new("style")
        .html(TrustedHtml::from_trusted(format!(
            ".{scope_class} {{{css}}}"
        )))
        .into_node()
}

/// Exactly one render strategy per block kind. `None` means the block is
/// missing data it needs and renders nothing at all.
fn render_kind(block: &Block, depth: usize) -> Option<RenderNode> {
    match &block.kind {
        BlockKind::Row { columns } => Some(layout::row(columns, depth)),
        BlockKind::Column { content } => Some(layout::column(content.as_ref())),
        BlockKind::Section { content } => Some(layout::section(content.as_ref())),
        BlockKind::Text { content } => content::text(content.as_ref()),
        BlockKind::Heading { heading } => content::heading(heading.as_ref()),
        BlockKind::Image { image } => media::image(image.as_ref()),
        BlockKind::Gallery { gallery } => media::gallery(gallery),
        BlockKind::Video { video } => Some(media::video(video.as_ref())),
        BlockKind::Quote { quote } => content::quote(quote.as_ref()),
        BlockKind::Button { button } => content::button(button.as_ref()),
        BlockKind::IconBox { icon_box } => content::icon_box(icon_box.as_ref()),
        BlockKind::Accordion { accordion } => interactive::accordion(accordion),
        BlockKind::Tabs { tabs } => interactive::tabs(tabs),
        BlockKind::Carousel { gallery } => media::carousel(gallery),
        BlockKind::Features { features } => content::features(features),
        BlockKind::RawHtml { html, css } => {
            Some(content::raw_html(html.as_deref(), css.as_deref()))
        }
        BlockKind::ContactForm
        | BlockKind::GoogleMaps
        | BlockKind::Stats
        | BlockKind::TeamGrid
        | BlockKind::PostsGrid
        | BlockKind::Cta
        | BlockKind::ProgressBar
        | BlockKind::Separator => Some(placeholders::coming_soon(block.kind.type_name())),
        BlockKind::Unknown { block_type } => Some(placeholders::unknown_block(block_type)),
    }
}
