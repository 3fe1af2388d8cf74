//! Registration Polling
//!
//! Cancellable per-frame poll used while waiting for an image handle
//! to be attached. Prefers a frame-synchronized backend; hosts without
//! one get a fixed ~16ms interval.

use std::time::Duration;

use crate::env::HostCapabilities;

/// Fallback cadence when no frame scheduler exists
pub const FALLBACK_POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Scheduling backend for the poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollBackend {
    /// Frame-synchronized callback
    Frame,
    /// Fixed-interval timer
    Interval(Duration),
}

/// A cancellable scheduled poll
///
/// The host invokes [`fire`](ScheduledPoll::fire) on every frame or
/// timer tick; once cancelled it never reports runnable again, so a
/// torn-down instance cannot be touched by a dangling callback.
#[derive(Debug)]
pub struct ScheduledPoll {
    backend: PollBackend,
    cancelled: bool,
    ticks: u32,
}

impl ScheduledPoll {
    /// Pick the backend from the host's capabilities
    pub fn for_capabilities(caps: &HostCapabilities) -> Self {
        let backend = if caps.frame_scheduling {
            PollBackend::Frame
        } else {
            PollBackend::Interval(FALLBACK_POLL_INTERVAL)
        };
        Self {
            backend,
            cancelled: false,
            ticks: 0,
        }
    }

    pub fn backend(&self) -> PollBackend {
        self.backend
    }

    /// One frame/timer tick; returns whether the poll callback runs
    pub fn fire(&mut self) -> bool {
        if self.cancelled {
            return false;
        }
        self.ticks += 1;
        true
    }

    /// Stop the poll; idempotent
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Number of ticks that actually ran
    pub fn ticks(&self) -> u32 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_selection() {
        let frame = ScheduledPoll::for_capabilities(&HostCapabilities::default());
        assert_eq!(frame.backend(), PollBackend::Frame);

        let caps = HostCapabilities {
            frame_scheduling: false,
            ..HostCapabilities::default()
        };
        let timer = ScheduledPoll::for_capabilities(&caps);
        assert_eq!(timer.backend(), PollBackend::Interval(FALLBACK_POLL_INTERVAL));
    }

    #[test]
    fn test_fire_counts_ticks() {
        let mut poll = ScheduledPoll::for_capabilities(&HostCapabilities::default());
        assert!(poll.fire());
        assert!(poll.fire());
        assert_eq!(poll.ticks(), 2);
    }

    #[test]
    fn test_cancel_stops_firing() {
        let mut poll = ScheduledPoll::for_capabilities(&HostCapabilities::default());
        assert!(poll.fire());
        poll.cancel();
        assert!(!poll.fire());
        assert!(!poll.fire());
        assert_eq!(poll.ticks(), 1);
        assert!(poll.is_cancelled());
    }
}
