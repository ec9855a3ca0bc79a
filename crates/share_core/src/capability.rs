//! Environment capability detection.
//!
//! [`detect`] answers two questions the referral widget needs at
//! mount: is this a mobile device, and can the environment natively
//! share the referral URL. Everything ambient is read through the
//! [`ShareEnv`] trait; the browser implementation lives in the
//! frontend crate.

use crate::error::{EnvFailure, ShareError};
use crate::flow::ShareTarget;

/// Viewport width (logical pixels) at or below which a touch device
/// is treated as mobile.
pub const MOBILE_VIEWPORT_MAX_PX: u32 = 768;

/// Substrings that mark a user agent as a mobile device, matched
/// case-insensitively.
const MOBILE_UA_KEYWORDS: &[&str] = &[
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// Ambient environment access for the copy/share workflow.
///
/// One production implementation reads real browser state; tests
/// inject fakes. Probes are infallible: a capability that cannot be
/// queried reads as absent.
#[allow(async_fn_in_trait)] // single-threaded event loop, no Send bound wanted
pub trait ShareEnv {
    /// The environment's user-agent string, empty when unavailable.
    fn user_agent(&self) -> String;

    /// Whether the environment reports touch input support.
    fn has_touch(&self) -> bool;

    /// Current viewport width in logical pixels, 0 when unavailable.
    fn viewport_width(&self) -> u32;

    /// Whether a native share entry point exists.
    fn supports_share(&self) -> bool;

    /// Result of the entry point's own capability check for `url`,
    /// or `None` when no such check exists.
    fn can_share_url(&self, url: &str) -> Option<bool>;

    /// Whether a direct clipboard write capability exists.
    fn supports_clipboard(&self) -> bool;

    /// Write `text` to the system clipboard via the primary path.
    async fn write_clipboard(&self, text: &str) -> Result<(), EnvFailure>;

    /// Copy `text` via the legacy path (transient selection surface
    /// plus the environment's copy command).
    async fn legacy_copy(&self, text: &str) -> Result<(), EnvFailure>;

    /// Invoke the native share entry point with `target`.
    async fn native_share(&self, target: &ShareTarget) -> Result<(), ShareError>;
}

/// What the environment can do right now. Computed fresh per
/// detection call and never cached across mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CapabilitySnapshot {
    /// Touch/mobile device: UA keyword match, or touch input on a
    /// small viewport.
    pub is_mobile: bool,
    /// A native share entry point exists and accepts the URL.
    pub can_share: bool,
}

/// Take a capability snapshot for sharing `url`.
///
/// Absence of any queried capability yields `false`; detection never
/// fails and has no side effects.
pub fn detect(env: &impl ShareEnv, url: &str) -> CapabilitySnapshot {
    let ua = env.user_agent().to_lowercase();
    let ua_mobile = MOBILE_UA_KEYWORDS.iter().any(|kw| ua.contains(kw));
    let small_touch = env.has_touch() && env.viewport_width() <= MOBILE_VIEWPORT_MAX_PX;

    let can_share = env.supports_share() && env.can_share_url(url).unwrap_or(true);

    CapabilitySnapshot {
        is_mobile: ua_mobile || small_touch,
        can_share,
    }
}
