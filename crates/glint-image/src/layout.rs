//! Layout Modes
//!
//! How an image reserves space: exact pixels, a capped fluid width, or
//! the full width of its container. Fixed at instance creation.

/// Layout mode of one image instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Exact pixel dimensions
    Fixed { width: u32, height: u32 },
    /// Fluid up to a maximum width, aspect ratio preserved
    Constrained { width: u32, height: u32 },
    /// Always spans the container width
    FullWidth,
}

impl Layout {
    pub fn is_fixed(&self) -> bool {
        matches!(self, Layout::Fixed { .. })
    }

    pub fn is_constrained(&self) -> bool {
        matches!(self, Layout::Constrained { .. })
    }

    pub fn is_full_width(&self) -> bool {
        matches!(self, Layout::FullWidth)
    }

    /// Pixel dimensions when the mode carries them
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        match self {
            Layout::Fixed { width, height } | Layout::Constrained { width, height } => {
                Some((*width, *height))
            }
            Layout::FullWidth => None,
        }
    }
}
