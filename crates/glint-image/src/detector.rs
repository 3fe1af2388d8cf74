//! Load-Completion Detection
//!
//! The native "finished fetching" signal is not the same thing as
//! "pixels are ready to paint". When the host can decode, a detached
//! probe at the same URL is decoded before the reveal; when it cannot,
//! or when decoding fails, the reveal happens anyway.

use tracing::warn;

use crate::env::{HostEnvironment, ImageHandle};
use crate::machine::{ImageLoadMachine, LoadState};

/// Outcome of a load signal
pub enum LoadSignal {
    /// Instance was already loaded; duplicate signals are legal
    /// (e.g. a format fallback re-fires the event)
    Ignored,
    /// Reveal completed synchronously
    Loaded,
    /// A decode probe is outstanding; the host settles it
    DecodePending(DecodeProbe),
}

/// Detached handle probing paint-readiness
///
/// Settling is idempotent from the machine's point of view, so a probe
/// that resolves after the instance already loaded is simply a no-op.
pub struct DecodeProbe {
    handle: Box<dyn ImageHandle>,
}

impl DecodeProbe {
    pub fn src(&self) -> &str {
        self.handle.current_src()
    }

    /// Drive the decode and complete the reveal
    ///
    /// Decode errors are swallowed: a visually broken image is better
    /// than a placeholder that never goes away.
    pub fn settle(self, machine: &mut ImageLoadMachine<'_>) {
        if let Err(err) = self.handle.decode() {
            warn!(src = self.handle.current_src(), %err, "decode probe failed; revealing anyway");
        }
        machine.on_decode_settled();
    }
}

/// Run the detection sequence for one load signal
pub(crate) fn detect(
    machine: &mut ImageLoadMachine<'_>,
    handle: &dyn ImageHandle,
    env: &dyn HostEnvironment,
) -> LoadSignal {
    if machine.state() == LoadState::Loaded {
        return LoadSignal::Ignored;
    }

    // Deliberate: the key is cached on fetch completion, before decode
    // settles, so a remount after a failed decode still skips the fade.
    machine.cache().mark_loaded(machine.key());

    if env.capabilities().async_decode {
        let probe = env.create_probe(handle.current_src());
        LoadSignal::DecodePending(DecodeProbe { handle: probe })
    } else {
        machine.on_decode_settled();
        LoadSignal::Loaded
    }
}
