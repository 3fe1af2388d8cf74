//! Host Environment
//!
//! Capability probes and the handle traits through which the loading
//! core talks to whatever actually owns image elements. Every optional
//! capability degrades silently when absent.

/// Host capability probe results
///
/// Probed once at startup by the embedder and passed in explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    /// Image elements support a native lazy-loading attribute
    pub native_lazy_loading: bool,
    /// Image handles can asynchronously decode to paint-readiness
    pub async_decode: bool,
    /// The style system supports object-fit/object-position natively
    pub object_fit: bool,
    /// A frame-synchronized scheduling primitive is available
    pub frame_scheduling: bool,
}

impl Default for HostCapabilities {
    fn default() -> Self {
        Self {
            native_lazy_loading: true,
            async_decode: true,
            object_fit: true,
            frame_scheduling: true,
        }
    }
}

/// Decode failure
///
/// Never escapes the reveal path; decode errors are swallowed and the
/// image is revealed anyway (a broken image beats a stuck placeholder).
#[derive(Debug, Clone, thiserror::Error)]
pub enum DecodeError {
    #[error("decode not supported by host")]
    Unsupported,

    #[error("decode failed: {0}")]
    Failed(String),
}

/// A live image element as seen by the loading core
pub trait ImageHandle {
    /// Resolved resource URL currently attached to the element
    fn current_src(&self) -> &str;

    /// Whether the network fetch already finished (e.g. cache hit)
    fn is_complete(&self) -> bool;

    /// Decode this handle's pixels to paint-readiness
    fn decode(&self) -> Result<(), DecodeError>;
}

/// The surrounding environment: capabilities plus handle construction
pub trait HostEnvironment {
    fn capabilities(&self) -> HostCapabilities;

    /// Fresh, detached handle at the same resolved URL, used purely to
    /// probe paint-readiness without touching the visible element
    fn create_probe(&self, src: &str) -> Box<dyn ImageHandle>;
}
