//! Element Attribute Bundles
//!
//! Derived presentation of one rendered element: class, inline style,
//! data markers, ARIA flags, and image source attributes. Bundles are
//! plain values with no identity; they are recomputed on every state
//! change and never cached.

use glint_image::LoadingMode;
use glint_style::InlineStyle;

/// Wrapper base class; public styling hook, must not change
pub const WRAPPER_CLASS: &str = "gatsby-image-wrapper";

/// Modifier class applied only in constrained layout
pub const WRAPPER_CONSTRAINED_CLASS: &str = "gatsby-image-wrapper-constrained";

/// Data marker on the wrapper element
pub const WRAPPER_MARKER: &str = "data-gatsby-image-wrapper";

/// Data marker on the main image element
pub const MAIN_IMAGE_MARKER: &str = "data-main-image";

/// Data marker on the placeholder element
pub const PLACEHOLDER_MARKER: &str = "data-placeholder-image";

/// Derived attributes of one element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementAttributes {
    pub class: Option<String>,
    pub style: InlineStyle,
    /// Data attributes in insertion order
    pub data: Vec<(&'static str, String)>,
    /// Marked decorative for assistive technology
    pub aria_hidden: bool,
    /// `loading` attribute, when the element is an image
    pub loading: Option<LoadingMode>,
    pub src: Option<String>,
    pub srcset: Option<String>,
    pub sizes: Option<String>,
}

impl ElementAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a data attribute, replacing an existing value
    pub fn set_data(&mut self, name: &'static str, value: &str) {
        if let Some(slot) = self.data.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value.to_string();
        } else {
            self.data.push((name, value.to_string()));
        }
    }

    pub fn has_data(&self, name: &str) -> bool {
        self.data.iter().any(|(n, _)| *n == name)
    }

    pub fn data_value(&self, name: &str) -> Option<&str> {
        self.data
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}
