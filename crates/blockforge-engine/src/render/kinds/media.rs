//! Media kinds: image, gallery, video, carousel.

use crate::blocks::{GalleryItem, Media, MediaRef, StyleDecl, VideoConfig};
use crate::render::placeholders;
use crate::render::tree::{Element, RenderNode};

pub(crate) fn image(image: Option<&MediaRef>) -> Option<RenderNode> {
    let media = image?.resolved()?;
    let url = media.url.as_deref()?;
    Some(
        Element::new("div")
            .class("image-block")
            .child(img(media, url, "max-w-full h-auto"))
            .into_node(),
    )
}

fn img(media: &Media, url: &str, classes: &'static str) -> RenderNode {
    Element::new("img")
        .class(classes)
        .attr("src", url)
        .attr("alt", media.alt.clone().unwrap_or_default())
        .attr("width", media.width.unwrap_or(800).to_string())
        .attr("height", media.height.unwrap_or(600).to_string())
        .into_node()
}

pub(crate) fn gallery(items: &[GalleryItem]) -> Option<RenderNode> {
    let figures: Vec<RenderNode> = items.iter().filter_map(gallery_figure).collect();
    if figures.is_empty() {
        return None;
    }
    Some(
        Element::new("div")
            .class("gallery-block")
            .child(
                Element::new("div")
                    .class("grid grid-cols-2 md:grid-cols-3 gap-4")
                    .children(figures)
                    .into_node(),
            )
            .into_node(),
    )
}

fn gallery_figure(item: &GalleryItem) -> Option<RenderNode> {
    let media = item.image.as_ref()?.resolved()?;
    let url = media.url.as_deref()?;
    let mut figure =
        Element::new("figure").child(img(media, url, "w-full h-auto rounded"));
    if let Some(caption) = &item.caption {
        figure = figure.child(
            Element::new("figcaption")
                .class("text-sm text-gray-500")
                .text(caption.clone())
                .into_node(),
        );
    }
    Some(figure.into_node())
}

pub(crate) fn carousel(items: &[GalleryItem]) -> Option<RenderNode> {
    let slides: Vec<RenderNode> = items
        .iter()
        .filter_map(|item| {
            let media = item.image.as_ref()?.resolved()?;
            let url = media.url.as_deref()?;
            let mut slide = Element::new("div")
                .class("carousel-slide")
                .child(img(media, url, "w-full h-auto"));
            if let Some(caption) = &item.caption {
                slide = slide.child(
                    Element::new("div")
                        .class("carousel-caption")
                        .text(caption.clone())
                        .into_node(),
                );
            }
            Some(slide.into_node())
        })
        .collect();
    if slides.is_empty() {
        return None;
    }
    Some(
        Element::new("div")
            .class("carousel-block")
            .child(
                Element::new("div")
                    .class("carousel-track")
                    .children(slides)
                    .into_node(),
            )
            .into_node(),
    )
}

/// A video block: iframe embed for Vimeo/YouTube URLs, an HTML5 `<video>`
/// element for direct files. A missing URL shows a visible notice rather
/// than rendering empty, matching the original block's behavior.
pub(crate) fn video(video: Option<&VideoConfig>) -> RenderNode {
    let url = video.and_then(|v| v.url.as_deref());
    let (Some(video), Some(url)) = (video, url) else {
        return Element::new("div")
            .class("video-block")
            .child(placeholders::notice(
                "No video URL provided",
                "Please add a video URL to display content",
            ))
            .into_node();
    };

    // Admin text fields sometimes arrive with entity-encoded query strings.
    let url = url.replace("&amp;", "&");

    let container_style = StyleDecl::default()
        .with("max-width", video.size.max_width())
        .with("width", "100%")
        .with("margin", "0 auto");

    let is_embed = url.contains("player.vimeo.com")
        || url.contains("youtube.com/embed")
        || url.contains("youtu.be");

    let player = if is_embed {
        let wrapper_style = StyleDecl::default()
            .with("position", "relative")
            .with("padding-bottom", video.aspect_ratio.padding_bottom())
            .with("height", "0")
            .with("overflow", "hidden");
        let iframe_style = StyleDecl::default()
            .with("position", "absolute")
            .with("top", "0")
            .with("left", "0")
            .with("width", "100%")
            .with("height", "100%");
        Element::new("div")
            .class("video-wrapper")
            .style(wrapper_style)
            .child(
                Element::new("iframe")
                    .style(iframe_style)
                    .attr("src", url)
                    .attr("frameborder", "0")
                    .attr(
                        "allow",
                        "accelerometer; autoplay; clipboard-write; encrypted-media; \
                         gyroscope; picture-in-picture; web-share",
                    )
                    .flag("allowfullscreen")
                    .attr("title", "Video content")
                    .into_node(),
            )
            .into_node()
    } else {
        let mut el = Element::new("video")
            .style(
                StyleDecl::default()
                    .with("width", "100%")
                    .with("height", "auto")
                    .with("display", "block"),
            )
            .attr("src", url);
        if video.controls {
            el = el.flag("controls");
        }
        if video.autoplay {
            el = el.flag("autoplay");
        }
        if video.looped {
            el = el.flag("loop");
        }
        el.text("Your browser does not support the video tag.")
            .into_node()
    };

    Element::new("div")
        .class("video-block")
        .child(
            Element::new("div")
                .style(container_style)
                .child(player)
                .into_node(),
        )
        .into_node()
}
