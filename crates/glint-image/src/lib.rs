//! glint Image - Progressive Loading Core
//!
//! Sequences when an image starts loading and when it is revealed:
//! - process-wide cache of keys that already faded in once
//! - per-instance loading state machine with a registration-wait poll
//! - load-completion detection that separates "fetch finished" from
//!   "pixels decoded", failing open when decode is unavailable
//! - the narrow contract to the responsive-descriptor provider
//!
//! Everything is driven synchronously by host callbacks; no executor
//! or event loop is assumed.

pub mod cache;
pub mod detector;
pub mod env;
pub mod layout;
pub mod machine;
pub mod schedule;
pub mod srcset;

pub use cache::{CacheKey, LoadedImageCache};
pub use detector::{DecodeProbe, LoadSignal};
pub use env::{DecodeError, HostCapabilities, HostEnvironment, ImageHandle};
pub use layout::Layout;
pub use machine::{ImageLoadMachine, LoadState, LoadingMode};
pub use schedule::{PollBackend, ScheduledPoll};
pub use srcset::{
    ImageDescriptor, ImageSources, ResolveRequest, ResponsiveImageProvider, SrcsetEntry,
    DEFAULT_BREAKPOINTS,
};
