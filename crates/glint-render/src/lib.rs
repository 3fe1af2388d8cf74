//! glint Render - Presentation Derivation
//!
//! Pure projections from (layout mode, loading state, dimensions,
//! background color, caller overrides) to the attribute bundles of the
//! wrapper, the main image, and the placeholder, plus the legacy
//! object-fit compatibility shim. Nothing here holds state; every call
//! recomputes a fresh bundle.

pub mod attributes;
pub mod object_fit;
pub mod present;

pub use attributes::{
    ElementAttributes, MAIN_IMAGE_MARKER, PLACEHOLDER_MARKER, WRAPPER_CLASS,
    WRAPPER_CONSTRAINED_CLASS, WRAPPER_MARKER,
};
pub use object_fit::{apply_object_fit_shim, PolyfillLoader, ShimError};
pub use present::{
    main_image_attributes, placeholder_attributes, wrapper_attributes, PresentationConfig,
    MAIN_IMAGE_FADE_MS, PLACEHOLDER_FADE_MS,
};
