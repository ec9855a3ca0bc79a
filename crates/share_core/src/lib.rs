//! Core copy/share workflow for the referral dashboard.
//!
//! This crate holds the environment-independent half of the referral
//! link widget: capability detection (mobile / native share), the
//! clipboard copy workflow with its legacy fallback, and the
//! share-with-fallback orchestration. All browser access goes through
//! the [`ShareEnv`] trait so the workflow can be driven by fakes in
//! tests and by `web_sys` in the frontend.

mod capability;
mod error;
mod feedback;
mod flow;
mod notice;

pub use capability::{detect, CapabilitySnapshot, ShareEnv, MOBILE_VIEWPORT_MAX_PX};
pub use error::{ClipboardError, EnvFailure, ShareError};
pub use feedback::{CopiedAck, ShareGuard, COPIED_FEEDBACK_MS};
pub use flow::{
    copy_text, share_link, CopyResult, ShareResult, ShareTarget, DEFAULT_SHARE_TEXT,
    DEFAULT_SHARE_TITLE,
};
pub use notice::{Notice, NoticeLevel};
