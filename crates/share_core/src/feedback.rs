//! Per-widget transient state: the copied acknowledgement window and
//! the in-flight share guard.
//!
//! Both are plain value types driven by the widget; time comes in as
//! a caller-supplied millisecond clock so the behavior is testable
//! without a browser event loop.

/// How long the copied check mark stays up, in milliseconds.
pub const COPIED_FEEDBACK_MS: u32 = 2000;

/// Transient "copied" acknowledgement.
///
/// Every copy restarts the feedback window from now. A reset timer
/// fire is only honored once the latest window has elapsed, so a
/// stale timer from an earlier copy never clears the flag early:
/// repeat copies keep the acknowledgement up continuously.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CopiedAck {
    deadline_ms: Option<f64>,
}

impl CopiedAck {
    /// Record a successful copy at `now_ms`, restarting the window.
    pub fn mark(&mut self, now_ms: f64) {
        self.deadline_ms = Some(now_ms + f64::from(COPIED_FEEDBACK_MS));
    }

    /// Process a reset timer firing at `now_ms`; clears the flag only
    /// when the latest window has elapsed. Returns whether the
    /// acknowledgement is still up.
    pub fn expire(&mut self, now_ms: f64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    pub fn is_copied(&self) -> bool {
        self.deadline_ms.is_some()
    }
}

/// Single in-flight share per widget instance.
///
/// `try_begin` refuses re-entry while a share attempt is running;
/// `finish` returns the widget to idle on every exit path (success,
/// cancel, or fallback).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShareGuard {
    in_flight: bool,
}

impl ShareGuard {
    /// Claim the share slot. Returns `false` when an attempt is
    /// already in flight.
    pub fn try_begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    /// Release the slot; the widget is idle and reusable again.
    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    pub fn is_sharing(&self) -> bool {
        self.in_flight
    }
}
