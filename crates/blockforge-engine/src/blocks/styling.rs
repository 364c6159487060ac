use crate::blocks::MediaRef;
use serde::Deserialize;
use std::fmt;

/// Per-block design options, as authored in the admin's design panel.
///
/// Everything is optional; an absent record contributes no styles at all.
/// The three responsive-visibility flags are independent toggles: a block
/// hidden on all three breakpoints renders nowhere, which is accepted
/// operator error and deliberately not validated against.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Styling {
    pub margin_top: Option<String>,
    pub margin_bottom: Option<String>,
    pub padding_top: Option<String>,
    pub padding_bottom: Option<String>,
    pub padding_left: Option<String>,
    pub padding_right: Option<String>,

    pub background_color: Option<String>,
    pub background_image: Option<MediaRef>,
    pub background_position: Option<String>,
    pub background_size: Option<String>,
    pub background_repeat: Option<String>,
    pub background_gradient: Option<String>,

    pub border_width: Option<String>,
    pub border_style: Option<String>,
    pub border_color: Option<String>,
    pub border_radius: Option<String>,

    pub text_align: Option<String>,
    pub text_color: Option<String>,
    pub font_size: Option<String>,
    pub font_weight: Option<String>,

    pub box_shadow: Option<String>,
    pub animation: Option<String>,
    pub animation_delay: Option<String>,
    pub animation_duration: Option<String>,

    pub hide_on_mobile: bool,
    pub hide_on_tablet: bool,
    pub hide_on_desktop: bool,

    #[serde(rename = "customCSS")]
    pub custom_css: Option<String>,
    pub custom_class_name: Option<String>,
}

impl Styling {
    /// Compute the inline style declaration for a block wrapper.
    ///
    /// Property order matters: the gradient is declared via the `background`
    /// shorthand before the image longhands so the longhands can layer an
    /// image over it, exactly as the original declaration order did.
    pub fn style_declaration(&self) -> StyleDecl {
        let mut decl = StyleDecl::default();

        decl.push_opt("margin-top", self.margin_top.as_deref());
        decl.push_opt("margin-bottom", self.margin_bottom.as_deref());
        decl.push_opt("padding-top", self.padding_top.as_deref());
        decl.push_opt("padding-bottom", self.padding_bottom.as_deref());
        decl.push_opt("padding-left", self.padding_left.as_deref());
        decl.push_opt("padding-right", self.padding_right.as_deref());

        decl.push_opt("background-color", self.background_color.as_deref());
        decl.push_opt("background", self.background_gradient.as_deref());
        if let Some(url) = self.background_image_url() {
            decl.push("background-image", format!("url({url})"));
            decl.push(
                "background-position",
                self.background_position
                    .as_deref()
                    .unwrap_or("center center"),
            );
            decl.push(
                "background-size",
                self.background_size.as_deref().unwrap_or("cover"),
            );
            decl.push(
                "background-repeat",
                self.background_repeat.as_deref().unwrap_or("no-repeat"),
            );
        }

        decl.push_opt("border-width", self.border_width.as_deref());
        decl.push_opt("border-style", self.border_style.as_deref());
        decl.push_opt("border-color", self.border_color.as_deref());
        decl.push_opt("border-radius", self.border_radius.as_deref());

        decl.push_opt("text-align", self.text_align.as_deref());
        decl.push_opt("color", self.text_color.as_deref());
        decl.push_opt("font-size", self.font_size.as_deref());
        decl.push_opt("font-weight", self.font_weight.as_deref());

        decl.push_opt("box-shadow", self.box_shadow.as_deref());
        if self.has_animation() {
            decl.push_opt("animation-delay", self.animation_delay.as_deref());
            decl.push_opt("animation-duration", self.animation_duration.as_deref());
        }

        decl
    }

    /// Class names contributed by the design options: custom class,
    /// animation class, then one breakpoint-scoped hide/show rule per
    /// enabled visibility toggle.
    pub fn class_names(&self) -> Vec<String> {
        let mut classes = Vec::new();
        if let Some(class) = &self.custom_class_name {
            classes.push(class.clone());
        }
        if let Some(animation) = self.animation.as_deref().filter(|name| *name != "none") {
            classes.push(format!("animate-{animation}"));
        }
        if self.hide_on_mobile {
            classes.push("hidden lg:block".to_string());
        }
        if self.hide_on_tablet {
            classes.push("hidden md:block lg:hidden".to_string());
        }
        if self.hide_on_desktop {
            classes.push("block lg:hidden".to_string());
        }
        classes
    }

    fn has_animation(&self) -> bool {
        matches!(self.animation.as_deref(), Some(name) if name != "none")
    }

    fn background_image_url(&self) -> Option<&str> {
        self.background_image
            .as_ref()
            .and_then(MediaRef::resolved)
            .and_then(|media| media.url.as_deref())
    }
}

/// An ordered CSS declaration list for a `style` attribute.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleDecl {
    props: Vec<(&'static str, String)>,
}

impl StyleDecl {
    pub fn push(&mut self, name: &'static str, value: impl Into<String>) {
        self.props.push((name, value.into()));
    }

    pub fn push_opt(&mut self, name: &'static str, value: Option<&str>) {
        if let Some(value) = value {
            self.props.push((name, value.to_string()));
        }
    }

    pub fn with(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}

impl fmt::Display for StyleDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.props.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{name}:{value}")?;
        }
        Ok(())
    }
}
