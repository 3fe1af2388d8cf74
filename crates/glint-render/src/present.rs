//! Presentation Derivation
//!
//! Pure functions computing the wrapper, main-image, and placeholder
//! attribute bundles from layout mode and loading state. The main
//! image fades in over 250ms while the placeholder fades out over
//! 500ms, the inverse curve, producing a crossfade.

use glint_image::{HostCapabilities, ImageDescriptor, Layout, LoadingMode};
use glint_style::{InlineStyle, PropertyId, StyleValue, Transition};

use crate::attributes::{
    ElementAttributes, MAIN_IMAGE_MARKER, PLACEHOLDER_MARKER, WRAPPER_CLASS,
    WRAPPER_CONSTRAINED_CLASS, WRAPPER_MARKER,
};

/// Main-image fade-in duration
pub const MAIN_IMAGE_FADE_MS: u64 = 250;

/// Placeholder fade-out duration
pub const PLACEHOLDER_FADE_MS: u64 = 500;

/// Presentation configuration, threaded explicitly into every call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentationConfig {
    /// Whether the caller loaded the companion baseline stylesheet.
    /// When false, equivalent inline fallback styles are injected.
    pub managed_styles: bool,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            managed_styles: true,
        }
    }
}

/// Wrapper container attributes
pub fn wrapper_attributes(
    layout: Layout,
    config: &PresentationConfig,
    user_style: &InlineStyle,
) -> ElementAttributes {
    let mut attrs = ElementAttributes::new();

    attrs.class = Some(if layout.is_constrained() {
        format!("{WRAPPER_CLASS} {WRAPPER_CONSTRAINED_CLASS}")
    } else {
        WRAPPER_CLASS.to_string()
    });
    attrs.set_data(WRAPPER_MARKER, "");

    let mut style = InlineStyle::new();
    match layout {
        Layout::Fixed { width, height } => {
            style.set(PropertyId::Width, StyleValue::Px(width as f32));
            style.set(PropertyId::Height, StyleValue::Px(height as f32));
        }
        Layout::Constrained { .. } => {
            if !config.managed_styles {
                // the companion stylesheet is not loaded; compensate
                style.set(PropertyId::Display, StyleValue::Keyword("inline-block"));
            }
        }
        Layout::FullWidth => {}
    }
    style.merge(user_style);

    attrs.style = style;
    attrs
}

/// Main image attributes
///
/// Opacity flips 0 to 1 on load and is merged last so it always wins
/// over a caller-supplied style.
pub fn main_image_attributes(
    loaded: bool,
    mode: LoadingMode,
    caps: &HostCapabilities,
    descriptor: &ImageDescriptor,
    config: &PresentationConfig,
    user_style: &InlineStyle,
) -> ElementAttributes {
    let mut attrs = ElementAttributes::new();
    attrs.set_data(MAIN_IMAGE_MARKER, "");

    attrs.src = Some(descriptor.fallback_src.clone());
    if let Some(sources) = descriptor.primary() {
        if !sources.entries.is_empty() {
            attrs.srcset = Some(sources.srcset_string());
        }
        attrs.sizes = sources.sizes.clone();
    }
    if attrs.sizes.is_none() && descriptor.layout.is_full_width() {
        attrs.sizes = Some("100vw".to_string());
    }

    // hosts without native lazy loading never start deferred loads
    attrs.loading = Some(if caps.native_lazy_loading {
        mode
    } else {
        LoadingMode::Eager
    });

    let mut style = if config.managed_styles {
        user_style.clone()
    } else {
        main_image_fallback_style()
    };
    style.set(PropertyId::Opacity, opacity(loaded));

    attrs.style = style;
    attrs
}

/// Placeholder attributes
///
/// Always decorative (`aria-hidden`); opacity is the inverse of the
/// main image so the two crossfade.
pub fn placeholder_attributes(
    layout: Layout,
    loaded: bool,
    background: Option<&str>,
    config: &PresentationConfig,
    user_style: &InlineStyle,
) -> ElementAttributes {
    let mut attrs = ElementAttributes::new();
    attrs.aria_hidden = true;
    attrs.set_data(PLACEHOLDER_MARKER, "");

    let mut style = if config.managed_styles {
        let mut style = user_style.clone();
        style.set(
            PropertyId::Transition,
            StyleValue::Raw(
                Transition::linear_ms(PropertyId::Opacity, PLACEHOLDER_FADE_MS).to_css_string(),
            ),
        );
        if let Some(color) = background {
            style.set(PropertyId::BackgroundColor, StyleValue::Raw(color.to_string()));
            match layout {
                Layout::Fixed { width, height } => {
                    style.set(PropertyId::Width, StyleValue::Px(width as f32));
                    style.set(PropertyId::Height, StyleValue::Px(height as f32));
                    style.set(PropertyId::Position, StyleValue::Keyword("relative"));
                }
                Layout::Constrained { .. } | Layout::FullWidth => {
                    style.set(PropertyId::Position, StyleValue::Keyword("absolute"));
                    style.set(PropertyId::Top, StyleValue::Px(0.0));
                    style.set(PropertyId::Right, StyleValue::Px(0.0));
                    style.set(PropertyId::Bottom, StyleValue::Px(0.0));
                    style.set(PropertyId::Left, StyleValue::Px(0.0));
                }
            }
        }
        style
    } else {
        // single fallback: fill the wrapper; background and transition
        // are dropped in this mode
        absolute_fill_style()
    };
    style.set(PropertyId::Opacity, opacity(!loaded));

    attrs.style = style;
    attrs
}

fn opacity(visible: bool) -> StyleValue {
    StyleValue::Number(if visible { 1.0 } else { 0.0 })
}

fn absolute_fill_style() -> InlineStyle {
    InlineStyle::new()
        .with(PropertyId::Height, StyleValue::Percent(100.0))
        .with(PropertyId::Left, StyleValue::Px(0.0))
        .with(PropertyId::Position, StyleValue::Keyword("absolute"))
        .with(PropertyId::Top, StyleValue::Px(0.0))
        .with(PropertyId::Width, StyleValue::Percent(100.0))
}

fn main_image_fallback_style() -> InlineStyle {
    absolute_fill_style()
        // compositing hint so the fade runs on the GPU
        .with(PropertyId::Transform, StyleValue::Raw("translateZ(0)".into()))
        .with(
            PropertyId::Transition,
            StyleValue::Raw(
                Transition::linear_ms(PropertyId::Opacity, MAIN_IMAGE_FADE_MS).to_css_string(),
            ),
        )
        .with(PropertyId::WillChange, StyleValue::Keyword("opacity"))
        .with(PropertyId::ObjectFit, StyleValue::Keyword("cover"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_image::{ImageSources, SrcsetEntry};

    fn descriptor(layout: Layout) -> ImageDescriptor {
        ImageDescriptor {
            layout,
            width: 400,
            height: 300,
            fallback_src: "a.png".into(),
            sources: vec![ImageSources {
                entries: vec![
                    SrcsetEntry::new("a-320.png").with_width(320),
                    SrcsetEntry::new("a-640.png").with_width(640),
                ],
                sizes: None,
                mime_type: None,
            }],
        }
    }

    #[test]
    fn test_fixed_wrapper_pins_dimensions() {
        let attrs = wrapper_attributes(
            Layout::Fixed { width: 400, height: 300 },
            &PresentationConfig::default(),
            &InlineStyle::new(),
        );
        assert_eq!(attrs.class.as_deref(), Some("gatsby-image-wrapper"));
        assert_eq!(attrs.style.to_css_string(), "width:400px;height:300px");
        assert!(attrs.has_data(WRAPPER_MARKER));
    }

    #[test]
    fn test_constrained_unmanaged_wrapper() {
        let attrs = wrapper_attributes(
            Layout::Constrained { width: 800, height: 600 },
            &PresentationConfig {
                managed_styles: false,
            },
            &InlineStyle::new(),
        );
        assert_eq!(
            attrs.class.as_deref(),
            Some("gatsby-image-wrapper gatsby-image-wrapper-constrained")
        );
        assert_eq!(
            attrs.style.get(PropertyId::Display),
            Some(&StyleValue::Keyword("inline-block"))
        );
    }

    #[test]
    fn test_constrained_managed_wrapper_has_no_display_override() {
        let attrs = wrapper_attributes(
            Layout::Constrained { width: 800, height: 600 },
            &PresentationConfig::default(),
            &InlineStyle::new(),
        );
        assert_eq!(attrs.style.get(PropertyId::Display), None);
    }

    #[test]
    fn test_wrapper_merges_user_style() {
        let user = InlineStyle::new().with(PropertyId::BackgroundColor, StyleValue::Raw("red".into()));
        let attrs = wrapper_attributes(Layout::FullWidth, &PresentationConfig::default(), &user);
        assert_eq!(
            attrs.style.get(PropertyId::BackgroundColor),
            Some(&StyleValue::Raw("red".into()))
        );
    }

    #[test]
    fn test_main_image_opacity_tracks_loaded() {
        let desc = descriptor(Layout::FullWidth);
        let caps = HostCapabilities::default();
        let config = PresentationConfig::default();

        let pending = main_image_attributes(false, LoadingMode::Lazy, &caps, &desc, &config, &InlineStyle::new());
        assert_eq!(pending.style.get(PropertyId::Opacity), Some(&StyleValue::Number(0.0)));

        let loaded = main_image_attributes(true, LoadingMode::Lazy, &caps, &desc, &config, &InlineStyle::new());
        assert_eq!(loaded.style.get(PropertyId::Opacity), Some(&StyleValue::Number(1.0)));
    }

    #[test]
    fn test_main_image_opacity_wins_over_user_style() {
        let desc = descriptor(Layout::FullWidth);
        let user = InlineStyle::new().with(PropertyId::Opacity, StyleValue::Number(0.5));
        let attrs = main_image_attributes(
            true,
            LoadingMode::Lazy,
            &HostCapabilities::default(),
            &desc,
            &PresentationConfig::default(),
            &user,
        );
        assert_eq!(attrs.style.get(PropertyId::Opacity), Some(&StyleValue::Number(1.0)));
    }

    #[test]
    fn test_main_image_fallback_style_when_unmanaged() {
        let desc = descriptor(Layout::FullWidth);
        let attrs = main_image_attributes(
            false,
            LoadingMode::Lazy,
            &HostCapabilities::default(),
            &desc,
            &PresentationConfig {
                managed_styles: false,
            },
            &InlineStyle::new(),
        );
        let css = attrs.style.to_css_string();
        assert!(css.contains("position:absolute"));
        assert!(css.contains("transform:translateZ(0)"));
        assert!(css.contains("transition:opacity 250ms linear"));
        assert!(css.contains("will-change:opacity"));
        assert!(css.contains("object-fit:cover"));
    }

    #[test]
    fn test_main_image_sources() {
        let desc = descriptor(Layout::FullWidth);
        let attrs = main_image_attributes(
            false,
            LoadingMode::Lazy,
            &HostCapabilities::default(),
            &desc,
            &PresentationConfig::default(),
            &InlineStyle::new(),
        );
        assert_eq!(attrs.src.as_deref(), Some("a.png"));
        assert_eq!(attrs.srcset.as_deref(), Some("a-320.png 320w, a-640.png 640w"));
        assert_eq!(attrs.sizes.as_deref(), Some("100vw"));
    }

    #[test]
    fn test_lazy_downgraded_without_native_support() {
        let desc = descriptor(Layout::FullWidth);
        let caps = HostCapabilities {
            native_lazy_loading: false,
            ..HostCapabilities::default()
        };
        let attrs = main_image_attributes(
            false,
            LoadingMode::Lazy,
            &caps,
            &desc,
            &PresentationConfig::default(),
            &InlineStyle::new(),
        );
        assert_eq!(attrs.loading, Some(LoadingMode::Eager));
    }

    #[test]
    fn test_placeholder_is_decorative() {
        let attrs = placeholder_attributes(
            Layout::FullWidth,
            false,
            None,
            &PresentationConfig::default(),
            &InlineStyle::new(),
        );
        assert!(attrs.aria_hidden);
        assert!(attrs.has_data(PLACEHOLDER_MARKER));
    }

    #[test]
    fn test_placeholder_background_fixed() {
        let attrs = placeholder_attributes(
            Layout::Fixed { width: 400, height: 300 },
            false,
            Some("#c0ffee"),
            &PresentationConfig::default(),
            &InlineStyle::new(),
        );
        assert_eq!(attrs.style.get(PropertyId::Width), Some(&StyleValue::Px(400.0)));
        assert_eq!(attrs.style.get(PropertyId::Height), Some(&StyleValue::Px(300.0)));
        assert_eq!(attrs.style.get(PropertyId::Position), Some(&StyleValue::Keyword("relative")));
        assert_eq!(
            attrs.style.get(PropertyId::BackgroundColor),
            Some(&StyleValue::Raw("#c0ffee".into()))
        );
    }

    #[test]
    fn test_placeholder_background_stretches_fluid_layouts() {
        for layout in [Layout::Constrained { width: 800, height: 600 }, Layout::FullWidth] {
            let attrs = placeholder_attributes(
                layout,
                false,
                Some("#000"),
                &PresentationConfig::default(),
                &InlineStyle::new(),
            );
            assert_eq!(attrs.style.get(PropertyId::Position), Some(&StyleValue::Keyword("absolute")));
            for edge in [PropertyId::Top, PropertyId::Right, PropertyId::Bottom, PropertyId::Left] {
                assert_eq!(attrs.style.get(edge), Some(&StyleValue::Px(0.0)));
            }
        }
    }

    #[test]
    fn test_placeholder_unmanaged_drops_background_and_transition() {
        let attrs = placeholder_attributes(
            Layout::Fixed { width: 400, height: 300 },
            false,
            Some("#c0ffee"),
            &PresentationConfig {
                managed_styles: false,
            },
            &InlineStyle::new(),
        );
        assert_eq!(attrs.style.get(PropertyId::BackgroundColor), None);
        assert_eq!(attrs.style.get(PropertyId::Transition), None);
        assert_eq!(attrs.style.get(PropertyId::Position), Some(&StyleValue::Keyword("absolute")));
        assert_eq!(attrs.style.get(PropertyId::Width), Some(&StyleValue::Percent(100.0)));
    }

    #[test]
    fn test_placeholder_transition_duration() {
        let attrs = placeholder_attributes(
            Layout::FullWidth,
            false,
            None,
            &PresentationConfig::default(),
            &InlineStyle::new(),
        );
        assert_eq!(
            attrs.style.get(PropertyId::Transition),
            Some(&StyleValue::Raw("opacity 500ms linear".into()))
        );
    }
}
