//! Object-Fit Compatibility Shim
//!
//! Legacy hosts without native object-fit/object-position get the
//! intended crop copied onto data markers, then a polyfill routine is
//! invoked best-effort. One-shot per element; never fails the caller.

use tracing::warn;

use glint_image::HostCapabilities;

use crate::attributes::ElementAttributes;

/// Data marker carrying the crop mode for the polyfill
pub const OBJECT_FIT_MARKER: &str = "data-object-fit";

/// Data marker carrying the crop position for the polyfill
pub const OBJECT_POSITION_MARKER: &str = "data-object-position";

/// Shim failure; always swallowed
#[derive(Debug, Clone, thiserror::Error)]
pub enum ShimError {
    #[error("object-fit polyfill unavailable")]
    PolyfillUnavailable,

    #[error("polyfill invocation failed: {0}")]
    PolyfillFailed(String),
}

/// Loads and runs the object-fit polyfill against an element
pub trait PolyfillLoader {
    fn apply(&self, attrs: &ElementAttributes) -> Result<(), ShimError>;
}

/// Apply the shim when the host lacks native object-fit
///
/// Defaults crop mode to `cover` and crop position to `50% 50%`. A
/// missing or failing polyfill is logged and otherwise ignored; a
/// second call for an already-shimmed element is a no-op.
pub fn apply_object_fit_shim(
    caps: &HostCapabilities,
    attrs: &mut ElementAttributes,
    fit: Option<&str>,
    position: Option<&str>,
    loader: &dyn PolyfillLoader,
) {
    if caps.object_fit {
        return;
    }
    if attrs.has_data(OBJECT_FIT_MARKER) {
        return;
    }

    attrs.set_data(OBJECT_FIT_MARKER, fit.unwrap_or("cover"));
    attrs.set_data(OBJECT_POSITION_MARKER, position.unwrap_or("50% 50%"));

    if let Err(err) = loader.apply(attrs) {
        warn!(%err, "object-fit polyfill did not run; dropping crop emulation");
    }
}
