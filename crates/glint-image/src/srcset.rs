//! Responsive Image Descriptors
//!
//! The narrow contract to the responsive-data provider: the request it
//! consumes and the descriptor bundle it returns. The presentation
//! layer treats the bundle as opaque apart from rendering srcset/sizes
//! strings onto the main image.

use crate::layout::Layout;

/// Canonical full breakpoint set used when the caller supplies none
pub const DEFAULT_BREAKPOINTS: [u32; 9] = [320, 654, 768, 1024, 1366, 1600, 1920, 2048, 3840];

/// Resolution arguments handed to the provider
#[derive(Debug, Clone)]
pub struct ResolveRequest {
    /// Provider plugin the source metadata belongs to
    pub plugin_name: String,
    /// Requested breakpoints; defaults to the canonical full set
    pub breakpoints: Vec<u32>,
    /// Layout the candidates are generated for
    pub layout: Layout,
    /// Requested source pixel density cap
    pub max_density: f32,
}

impl ResolveRequest {
    pub fn new(plugin_name: &str, layout: Layout) -> Self {
        Self {
            plugin_name: plugin_name.to_string(),
            breakpoints: DEFAULT_BREAKPOINTS.to_vec(),
            layout,
            max_density: 2.0,
        }
    }

    pub fn with_breakpoints(mut self, breakpoints: Vec<u32>) -> Self {
        self.breakpoints = breakpoints;
        self
    }
}

/// One srcset candidate
#[derive(Debug, Clone, PartialEq)]
pub struct SrcsetEntry {
    /// Image URL
    pub url: String,
    /// Width descriptor (e.g. 800w)
    pub width: Option<u32>,
    /// Pixel density descriptor (e.g. 2x)
    pub density: Option<f32>,
}

impl SrcsetEntry {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            width: None,
            density: None,
        }
    }

    pub fn with_width(mut self, w: u32) -> Self {
        self.width = Some(w);
        self
    }

    pub fn with_density(mut self, d: f32) -> Self {
        self.density = Some(d);
        self
    }

    /// Candidate string, e.g. `img-800.png 800w`
    pub fn descriptor(&self) -> String {
        if let Some(w) = self.width {
            format!("{} {}w", self.url, w)
        } else if let Some(d) = self.density {
            format!("{} {}x", self.url, d)
        } else {
            self.url.clone()
        }
    }
}

/// One source element's worth of candidates
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageSources {
    pub entries: Vec<SrcsetEntry>,
    /// `sizes` attribute value, when the provider computed one
    pub sizes: Option<String>,
    /// MIME type for format-specific sources
    pub mime_type: Option<String>,
}

impl ImageSources {
    /// Comma-joined srcset attribute value
    pub fn srcset_string(&self) -> String {
        self.entries
            .iter()
            .map(SrcsetEntry::descriptor)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Descriptor bundle for one image, as returned by the provider
#[derive(Debug, Clone, PartialEq)]
pub struct ImageDescriptor {
    pub layout: Layout,
    /// Intrinsic width of the fallback
    pub width: u32,
    /// Intrinsic height of the fallback
    pub height: u32,
    /// Single-URL fallback source
    pub fallback_src: String,
    /// Per-format candidate sources, preferred first
    pub sources: Vec<ImageSources>,
}

impl ImageDescriptor {
    /// The source set the main image renders (first entry)
    pub fn primary(&self) -> Option<&ImageSources> {
        self.sources.first()
    }
}

/// External collaborator producing descriptor bundles
pub trait ResponsiveImageProvider {
    fn resolve(&self, request: &ResolveRequest) -> ImageDescriptor;
}
