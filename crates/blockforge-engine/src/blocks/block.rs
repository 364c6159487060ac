use crate::blocks::{MediaRef, Styling};
use crate::richtext::{HeadingTag, RichTextContent};
use serde::{Deserialize, de};
use std::fmt;

/// A content-store record identifier: numeric for collection rows, string
/// for array sub-rows.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(u64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A page-builder content block.
///
/// Blocks are read-only projections fetched per request; the renderer never
/// mutates them. `is_active` gates rendering entirely and defaults to false
/// when absent, matching the collection schema default applied on publish.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub id: Option<RecordId>,
    pub title: Option<String>,
    pub is_active: bool,
    pub styling: Option<Styling>,
    pub kind: BlockKind,
}

/// The block-type catalogue, discriminated by the `blockType` field.
///
/// This is a closed enum: the renderer matches it exhaustively, so adding a
/// kind here without a render strategy fails to compile instead of silently
/// falling through to the unknown-type diagnostic. Payload fields are all
/// optional; a kind missing required data renders empty rather than erroring.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "blockType", rename_all = "snake_case")]
pub enum BlockKind {
    Row {
        #[serde(default)]
        columns: Vec<Column>,
    },
    Column {
        #[serde(default)]
        content: Option<RichTextContent>,
    },
    Section {
        #[serde(default)]
        content: Option<RichTextContent>,
    },
    Text {
        #[serde(default)]
        content: Option<RichTextContent>,
    },
    Heading {
        #[serde(default)]
        heading: Option<HeadingConfig>,
    },
    Image {
        #[serde(default)]
        image: Option<MediaRef>,
    },
    Gallery {
        #[serde(default)]
        gallery: Vec<GalleryItem>,
    },
    Video {
        #[serde(default)]
        video: Option<VideoConfig>,
    },
    Quote {
        #[serde(default)]
        quote: Option<QuoteConfig>,
    },
    Button {
        #[serde(default)]
        button: Option<ButtonConfig>,
    },
    IconBox {
        #[serde(rename = "iconBox", default)]
        icon_box: Option<IconBoxConfig>,
    },
    Accordion {
        #[serde(default)]
        accordion: Vec<AccordionItem>,
    },
    Tabs {
        #[serde(default)]
        tabs: Vec<TabItem>,
    },
    Carousel {
        // Carousels reuse the gallery item list in the collection schema.
        #[serde(default)]
        gallery: Vec<GalleryItem>,
    },
    Features {
        #[serde(default)]
        features: Vec<FeatureItem>,
    },
    RawHtml {
        #[serde(rename = "htmlContent", default)]
        html: Option<String>,
        #[serde(rename = "cssStyles", default)]
        css: Option<String>,
    },
    // Recognized kinds that render a "coming soon" placeholder for now:
    // an incremental-rollout policy, not a failure.
    ContactForm,
    GoogleMaps,
    Stats,
    TeamGrid,
    PostsGrid,
    Cta,
    ProgressBar,
    Separator,
    /// Fallback for `blockType` values outside the catalogue.
    #[serde(skip)]
    Unknown { block_type: String },
}

impl BlockKind {
    /// The `blockType` discriminant this kind carries on the wire.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Row { .. } => "row",
            Self::Column { .. } => "column",
            Self::Section { .. } => "section",
            Self::Text { .. } => "text",
            Self::Heading { .. } => "heading",
            Self::Image { .. } => "image",
            Self::Gallery { .. } => "gallery",
            Self::Video { .. } => "video",
            Self::Quote { .. } => "quote",
            Self::Button { .. } => "button",
            Self::IconBox { .. } => "icon_box",
            Self::Accordion { .. } => "accordion",
            Self::Tabs { .. } => "tabs",
            Self::Carousel { .. } => "carousel",
            Self::Features { .. } => "features",
            Self::RawHtml { .. } => "raw_html",
            Self::ContactForm => "contact_form",
            Self::GoogleMaps => "google_maps",
            Self::Stats => "stats",
            Self::TeamGrid => "team_grid",
            Self::PostsGrid => "posts_grid",
            Self::Cta => "cta",
            Self::ProgressBar => "progress_bar",
            Self::Separator => "separator",
            Self::Unknown { block_type } => block_type,
        }
    }
}

/// Fields shared by every block regardless of kind.
#[derive(Debug, Deserialize)]
struct CommonFields {
    #[serde(default)]
    id: Option<RecordId>,
    #[serde(default)]
    title: Option<String>,
    #[serde(rename = "isActive", default)]
    is_active: bool,
    #[serde(default)]
    styling: Option<Styling>,
}

// Blocks deserialize in two passes over the same value: common fields, then
// the tagged kind. An unrecognized `blockType` becomes `BlockKind::Unknown`
// so one bad block degrades to a diagnostic instead of failing the page.
impl<'de> Deserialize<'de> for Block {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let common: CommonFields =
            serde_json::from_value(value.clone()).map_err(de::Error::custom)?;
        let kind = match serde_json::from_value::<BlockKind>(value.clone()) {
            Ok(kind) => kind,
            Err(_) => BlockKind::Unknown {
                block_type: value
                    .get("blockType")
                    .and_then(|v| v.as_str())
                    .unwrap_or_default()
                    .to_string(),
            },
        };
        Ok(Block {
            id: common.id,
            title: common.title,
            is_active: common.is_active,
            styling: common.styling,
            kind,
        })
    }
}

/// One column of a row, owning a 12-unit grid share and either legacy
/// rich-text content or a nested block sequence.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Column {
    /// Grid share as the admin select stores it: a string `"1"`..`"12"`.
    #[serde(default)]
    pub width: Option<String>,
    #[serde(default)]
    pub content: Option<RichTextContent>,
    #[serde(default)]
    pub blocks: Option<Vec<Block>>,
}

impl Column {
    /// The column's span out of 12, defaulting to full width and clamping
    /// unparseable or out-of-range values.
    pub fn grid_span(&self) -> u8 {
        self.width
            .as_deref()
            .and_then(|w| w.parse::<u8>().ok())
            .unwrap_or(12)
            .clamp(1, 12)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HeadingConfig {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub tag: HeadingTag,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VideoConfig {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub autoplay: bool,
    #[serde(default = "default_true")]
    pub controls: bool,
    #[serde(rename = "loop", default)]
    pub looped: bool,
    #[serde(default)]
    pub size: VideoSize,
    #[serde(rename = "aspectRatio", default)]
    pub aspect_ratio: AspectRatio,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoSize {
    Small,
    Medium,
    #[default]
    Large,
    Xl,
    Full,
}

impl VideoSize {
    pub fn max_width(self) -> &'static str {
        match self {
            Self::Small => "400px",
            Self::Medium => "600px",
            Self::Large => "800px",
            Self::Xl => "1000px",
            Self::Full => "100%",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "16:9")]
    Wide,
    #[serde(rename = "4:3")]
    Standard,
    #[serde(rename = "21:9")]
    Ultrawide,
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "9:16")]
    Portrait,
}

impl AspectRatio {
    /// The padding-bottom percentage that reserves this ratio's height.
    pub fn padding_bottom(self) -> &'static str {
        match self {
            Self::Wide => "56.25%",
            Self::Standard => "75%",
            Self::Ultrawide => "42.86%",
            Self::Square => "100%",
            Self::Portrait => "177.78%",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuoteConfig {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(rename = "authorTitle", default)]
    pub author_title: Option<String>,
    #[serde(rename = "authorImage", default)]
    pub author_image: Option<MediaRef>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ButtonConfig {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub style: ButtonStyle,
    #[serde(default)]
    pub size: ButtonSize,
    #[serde(rename = "openInNewTab", default)]
    pub open_in_new_tab: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IconBoxConfig {
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GalleryItem {
    #[serde(default)]
    pub image: Option<MediaRef>,
    #[serde(default)]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AccordionItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<RichTextContent>,
    #[serde(rename = "isOpen", default)]
    pub is_open: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TabItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<RichTextContent>,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeatureItem {
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}
