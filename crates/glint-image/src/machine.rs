//! Loading State Machine
//!
//! Per-instance sequencing of one image's reveal. Mounting starts a
//! registration-wait poll (the consuming framework can report mounted
//! before the handle reference is attached); once a handle exists the
//! machine either short-circuits to `Loaded` (cache hit, or eager with
//! the fetch already complete) or waits for the load signal.
//!
//! Transition order per instance is always a prefix of
//! `Idle, Registering, Loading, Loaded` or `Idle, Registering, Loaded`.

use tracing::debug;

use crate::cache::{CacheKey, LoadedImageCache};
use crate::detector::{self, LoadSignal};
use crate::env::{HostCapabilities, HostEnvironment, ImageHandle};
use crate::schedule::ScheduledPoll;

/// When loading begins relative to registration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadingMode {
    /// Start immediately on registration
    Eager,
    /// Defer until the host's scheduling decides
    #[default]
    Lazy,
}

impl LoadingMode {
    /// Value for the element's `loading` attribute
    pub fn as_attr_value(&self) -> &'static str {
        match self {
            LoadingMode::Eager => "eager",
            LoadingMode::Lazy => "lazy",
        }
    }
}

/// Lifecycle state of one image instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoadState {
    /// Not yet mounted
    Idle,
    /// Waiting for the underlying handle to exist
    Registering,
    /// Handle exists, fetch in progress
    Loading,
    /// Paint-ready; terminal
    Loaded,
}

/// State machine for one image instance
///
/// Driven synchronously by host callbacks: the poll tick calls
/// [`poll_registration`](Self::poll_registration), the element's load
/// event calls [`on_load_signal`](Self::on_load_signal), and teardown
/// calls [`cancel`](Self::cancel).
pub struct ImageLoadMachine<'c> {
    key: Option<CacheKey>,
    mode: LoadingMode,
    state: LoadState,
    cache: &'c LoadedImageCache,
    poll: Option<ScheduledPoll>,
}

impl<'c> ImageLoadMachine<'c> {
    pub fn new(key: Option<CacheKey>, mode: LoadingMode, cache: &'c LoadedImageCache) -> Self {
        Self {
            key,
            mode,
            state: LoadState::Idle,
            cache,
            poll: None,
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn key(&self) -> Option<&CacheKey> {
        self.key.as_ref()
    }

    pub fn cache(&self) -> &LoadedImageCache {
        self.cache
    }

    pub fn loading_mode(&self) -> LoadingMode {
        self.mode
    }

    /// Whether loading has begun (eager instances count from the start)
    pub fn is_loading(&self) -> bool {
        self.mode == LoadingMode::Eager || self.state >= LoadState::Loading
    }

    /// Whether the image is paint-ready
    pub fn is_loaded(&self) -> bool {
        self.state == LoadState::Loaded
    }

    /// Ticks the registration poll actually ran
    pub fn poll_ticks(&self) -> u32 {
        self.poll.as_ref().map_or(0, ScheduledPoll::ticks)
    }

    /// Enter `Registering` and start the registration-wait poll
    pub fn mount(&mut self, caps: &HostCapabilities) {
        if self.state != LoadState::Idle {
            return;
        }
        self.poll = Some(ScheduledPoll::for_capabilities(caps));
        self.transition(LoadState::Registering);
    }

    /// One poll tick: `None` while the handle is still unattached
    ///
    /// Once a handle exists: a cache hit, or an eager instance whose
    /// fetch already completed, goes straight to `Loaded` (the fade-in
    /// is skipped); otherwise the instance starts `Loading`.
    pub fn poll_registration(&mut self, handle: Option<&dyn ImageHandle>) -> LoadState {
        if self.state != LoadState::Registering {
            return self.state;
        }
        if !self.poll.as_mut().is_some_and(ScheduledPoll::fire) {
            // cancelled poll; a dangling tick must not touch the instance
            return self.state;
        }
        let Some(handle) = handle else {
            return self.state;
        };

        let cache_hit = self.key.as_ref().is_some_and(|k| self.cache.has_loaded(k));
        let eager_complete = self.mode == LoadingMode::Eager && handle.is_complete();
        if cache_hit || eager_complete {
            self.cache.mark_loaded(self.key.as_ref());
            self.stop_poll();
            self.transition(LoadState::Loaded);
        } else {
            self.stop_poll();
            self.transition(LoadState::Loading);
        }
        self.state
    }

    /// The element's native "finished fetching" signal
    ///
    /// Runs the completion detector; the returned [`LoadSignal`] tells
    /// the host whether a decode probe is still pending.
    pub fn on_load_signal(
        &mut self,
        handle: &dyn ImageHandle,
        env: &dyn HostEnvironment,
    ) -> LoadSignal {
        detector::detect(self, handle, env)
    }

    /// A decode probe settled (success or failure); completes the reveal
    pub fn on_decode_settled(&mut self) {
        if self.state != LoadState::Loaded {
            self.transition(LoadState::Loaded);
        }
    }

    /// Teardown: cancel the pending poll; idempotent
    pub fn cancel(&mut self) {
        self.stop_poll();
    }

    fn stop_poll(&mut self) {
        if let Some(poll) = self.poll.as_mut() {
            poll.cancel();
        }
    }

    fn transition(&mut self, next: LoadState) {
        debug!(from = ?self.state, to = ?next, key = ?self.key, "image load transition");
        self.state = next;
    }
}
