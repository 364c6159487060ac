//! Page-builder block model: the typed content blocks operators compose in
//! the CMS, plus their styling options.

mod block;
mod media;
mod styling;

pub use block::{
    AccordionItem, AspectRatio, Block, BlockKind, ButtonConfig, ButtonSize, ButtonStyle, Column,
    FeatureItem, GalleryItem, HeadingConfig, IconBoxConfig, QuoteConfig, RecordId, TabItem,
    VideoConfig, VideoSize,
};
pub use media::{Media, MediaRef};
pub use styling::{StyleDecl, Styling};
