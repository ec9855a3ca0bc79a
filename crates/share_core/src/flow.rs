//! Copy and share workflows.
//!
//! Both entry points convert every failure into a [`Notice`] at the
//! point of origin; nothing propagates to the caller beyond the
//! transient outcome record that drives the widget.

use crate::capability::{CapabilitySnapshot, ShareEnv};
use crate::error::{ClipboardError, EnvFailure, ShareError};
use crate::notice::Notice;

/// Default share dialog title.
pub const DEFAULT_SHARE_TITLE: &str = "Join me on this amazing platform!";
/// Default share dialog text.
pub const DEFAULT_SHARE_TEXT: &str =
    "Use my referral link to get started and we both get rewards!";

/// Toast duration used by workflow notices.
const NOTICE_DURATION_MS: u32 = 3000;

/// What to hand the native share entry point: one immutable triple
/// per share attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareTarget {
    pub url: String,
    pub title: String,
    pub text: String,
}

impl ShareTarget {
    /// Build a target for `url` with the standard referral title and
    /// text.
    pub fn for_link(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: DEFAULT_SHARE_TITLE.to_string(),
            text: DEFAULT_SHARE_TEXT.to_string(),
        }
    }
}

/// Transient outcome of a copy attempt, consumed by the widget and
/// discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyResult {
    pub success: bool,
    pub message: String,
}

/// Transient outcome of a share attempt. A user-cancelled share
/// resolves successfully with an empty message and no notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareResult {
    pub success: bool,
    pub message: String,
}

/// Copy `text` to the clipboard.
///
/// Tries the primary clipboard write when the capability is present,
/// then the legacy path. Emits one success notice, or one
/// "Something went wrong" error notice when both paths fail; the
/// underlying [`ClipboardError`] never escalates past the sink.
pub async fn copy_text<E: ShareEnv>(
    env: &E,
    text: &str,
    notify: &mut impl FnMut(Notice),
) -> CopyResult {
    let primary = if env.supports_clipboard() {
        env.write_clipboard(text).await
    } else {
        Err(EnvFailure::new("clipboard API not available"))
    };

    let outcome = match primary {
        Ok(()) => Ok(()),
        Err(primary) => env
            .legacy_copy(text)
            .await
            .map_err(|fallback| ClipboardError { primary, fallback }),
    };

    match outcome {
        Ok(()) => {
            notify(
                Notice::success("Referral link copied to clipboard!")
                    .with_description("Share it with your friends to start earning rewards")
                    .with_duration(NOTICE_DURATION_MS),
            );
            CopyResult {
                success: true,
                message: "Referral link copied to clipboard!".to_string(),
            }
        }
        Err(err) => {
            notify(
                Notice::error("Something went wrong")
                    .with_description(err.to_string())
                    .with_duration(NOTICE_DURATION_MS),
            );
            CopyResult {
                success: false,
                message: "Something went wrong".to_string(),
            }
        }
    }
}

/// Share `target`, falling back to copying its URL.
///
/// With share capability: invoke the native entry point; success
/// thanks the user, user cancellation is a silent no-op, any other
/// rejection surfaces one "Share failed" notice and copies the URL
/// instead. Without share capability: surface an informational
/// notice and copy the URL directly.
pub async fn share_link<E: ShareEnv>(
    env: &E,
    target: &ShareTarget,
    caps: &CapabilitySnapshot,
    notify: &mut impl FnMut(Notice),
) -> ShareResult {
    if caps.can_share && env.supports_share() {
        match env.native_share(target).await {
            Ok(()) => {
                notify(
                    Notice::success("Thanks for sharing!")
                        .with_description("Your referral link has been shared successfully")
                        .with_duration(NOTICE_DURATION_MS),
                );
                ShareResult {
                    success: true,
                    message: "Thanks for sharing!".to_string(),
                }
            }
            Err(ShareError::Aborted) => ShareResult {
                success: true,
                message: String::new(),
            },
            Err(ShareError::Failed(_)) => {
                notify(
                    Notice::error("Share failed")
                        .with_description("Copying link to clipboard instead")
                        .with_duration(NOTICE_DURATION_MS),
                );
                let copied = copy_text(env, &target.url, notify).await;
                ShareResult {
                    success: copied.success,
                    message: "Share failed".to_string(),
                }
            }
        }
    } else {
        notify(
            Notice::info("Native sharing not available")
                .with_description("Copying link to clipboard instead")
                .with_duration(NOTICE_DURATION_MS),
        );
        let copied = copy_text(env, &target.url, notify).await;
        ShareResult {
            success: copied.success,
            message: copied.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::detect;
    use crate::notice::NoticeLevel;
    use std::cell::{Cell, RefCell};

    const URL: &str = "https://app.example.com/ref/john-doe-abc123";

    /// Fake environment that records every effect.
    #[derive(Default)]
    struct RecordingEnv {
        supports_clipboard: bool,
        clipboard_write_fails: bool,
        legacy_copy_fails: bool,
        supports_share: bool,
        share_rejection: Option<ShareError>,
        clipboard_writes: Cell<u32>,
        legacy_copies: Cell<u32>,
        share_calls: Cell<u32>,
        copied_texts: RefCell<Vec<String>>,
    }

    impl ShareEnv for RecordingEnv {
        fn user_agent(&self) -> String {
            String::new()
        }

        fn has_touch(&self) -> bool {
            false
        }

        fn viewport_width(&self) -> u32 {
            1280
        }

        fn supports_share(&self) -> bool {
            self.supports_share
        }

        fn can_share_url(&self, _url: &str) -> Option<bool> {
            self.supports_share.then_some(true)
        }

        fn supports_clipboard(&self) -> bool {
            self.supports_clipboard
        }

        async fn write_clipboard(&self, text: &str) -> Result<(), EnvFailure> {
            self.clipboard_writes.set(self.clipboard_writes.get() + 1);
            if self.clipboard_write_fails {
                return Err(EnvFailure::new("NotAllowedError: write denied"));
            }
            self.copied_texts.borrow_mut().push(text.to_string());
            Ok(())
        }

        async fn legacy_copy(&self, text: &str) -> Result<(), EnvFailure> {
            self.legacy_copies.set(self.legacy_copies.get() + 1);
            if self.legacy_copy_fails {
                return Err(EnvFailure::new("execCommand copy rejected"));
            }
            self.copied_texts.borrow_mut().push(text.to_string());
            Ok(())
        }

        async fn native_share(&self, _target: &ShareTarget) -> Result<(), ShareError> {
            self.share_calls.set(self.share_calls.get() + 1);
            match &self.share_rejection {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }
    }

    fn collecting(sink: &RefCell<Vec<Notice>>) -> impl FnMut(Notice) + '_ {
        move |notice| sink.borrow_mut().push(notice)
    }

    #[tokio::test]
    async fn test_copy_uses_clipboard_api_when_present() {
        let env = RecordingEnv {
            supports_clipboard: true,
            ..RecordingEnv::default()
        };
        let notices = RefCell::new(Vec::new());

        let result = copy_text(&env, URL, &mut collecting(&notices)).await;

        assert!(result.success);
        assert_eq!(env.clipboard_writes.get(), 1);
        assert_eq!(env.legacy_copies.get(), 0);
        assert_eq!(env.copied_texts.borrow().as_slice(), &[URL.to_string()]);
        assert_eq!(notices.borrow().len(), 1);
        assert_eq!(notices.borrow()[0].level, NoticeLevel::Success);
    }

    #[tokio::test]
    async fn test_copy_falls_back_when_clipboard_api_missing() {
        let env = RecordingEnv::default();
        let notices = RefCell::new(Vec::new());

        let result = copy_text(&env, URL, &mut collecting(&notices)).await;

        assert!(result.success);
        assert_eq!(env.clipboard_writes.get(), 0);
        assert_eq!(env.legacy_copies.get(), 1);
    }

    #[tokio::test]
    async fn test_copy_falls_back_when_clipboard_write_rejects() {
        let env = RecordingEnv {
            supports_clipboard: true,
            clipboard_write_fails: true,
            ..RecordingEnv::default()
        };
        let notices = RefCell::new(Vec::new());

        let result = copy_text(&env, URL, &mut collecting(&notices)).await;

        assert!(result.success);
        assert_eq!(env.clipboard_writes.get(), 1);
        assert_eq!(env.legacy_copies.get(), 1);
        assert_eq!(notices.borrow()[0].level, NoticeLevel::Success);
    }

    #[tokio::test]
    async fn test_copy_reports_error_when_both_paths_fail() {
        let env = RecordingEnv {
            supports_clipboard: true,
            clipboard_write_fails: true,
            legacy_copy_fails: true,
            ..RecordingEnv::default()
        };
        let notices = RefCell::new(Vec::new());

        let result = copy_text(&env, URL, &mut collecting(&notices)).await;

        assert!(!result.success);
        assert_eq!(result.message, "Something went wrong");
        assert_eq!(notices.borrow().len(), 1);
        assert_eq!(notices.borrow()[0].level, NoticeLevel::Error);
        assert_eq!(notices.borrow()[0].title, "Something went wrong");
    }

    #[tokio::test]
    async fn test_copy_is_idempotent() {
        let env = RecordingEnv {
            supports_clipboard: true,
            ..RecordingEnv::default()
        };
        let notices = RefCell::new(Vec::new());

        for _ in 0..3 {
            let result = copy_text(&env, URL, &mut collecting(&notices)).await;
            assert!(result.success);
        }
        assert_eq!(env.clipboard_writes.get(), 3);
    }

    #[tokio::test]
    async fn test_share_success_thanks_the_user() {
        let env = RecordingEnv {
            supports_share: true,
            supports_clipboard: true,
            ..RecordingEnv::default()
        };
        let caps = detect(&env, URL);
        let notices = RefCell::new(Vec::new());

        let result =
            share_link(&env, &ShareTarget::for_link(URL), &caps, &mut collecting(&notices)).await;

        assert!(result.success);
        assert_eq!(env.share_calls.get(), 1);
        assert_eq!(env.clipboard_writes.get(), 0);
        assert_eq!(notices.borrow().len(), 1);
        assert_eq!(notices.borrow()[0].title, "Thanks for sharing!");
    }

    #[tokio::test]
    async fn test_share_abort_is_silent() {
        let env = RecordingEnv {
            supports_share: true,
            supports_clipboard: true,
            share_rejection: Some(ShareError::Aborted),
            ..RecordingEnv::default()
        };
        let caps = detect(&env, URL);
        let notices = RefCell::new(Vec::new());

        let result =
            share_link(&env, &ShareTarget::for_link(URL), &caps, &mut collecting(&notices)).await;

        assert!(result.success);
        assert!(notices.borrow().is_empty());
        assert_eq!(env.clipboard_writes.get(), 0);
        assert_eq!(env.legacy_copies.get(), 0);
    }

    #[tokio::test]
    async fn test_share_failure_falls_back_to_one_copy() {
        let env = RecordingEnv {
            supports_share: true,
            supports_clipboard: true,
            share_rejection: Some(ShareError::Failed("share sheet unavailable".to_string())),
            ..RecordingEnv::default()
        };
        let caps = detect(&env, URL);
        let notices = RefCell::new(Vec::new());

        share_link(&env, &ShareTarget::for_link(URL), &caps, &mut collecting(&notices)).await;

        let failed: Vec<_> = notices
            .borrow()
            .iter()
            .filter(|n| n.title == "Share failed")
            .cloned()
            .collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].level, NoticeLevel::Error);
        assert_eq!(env.clipboard_writes.get(), 1);
        assert_eq!(env.copied_texts.borrow().as_slice(), &[URL.to_string()]);
    }

    #[tokio::test]
    async fn test_share_without_capability_copies_with_info_notice() {
        let env = RecordingEnv {
            supports_clipboard: true,
            ..RecordingEnv::default()
        };
        let caps = detect(&env, URL);
        assert!(!caps.can_share);

        let notices = RefCell::new(Vec::new());
        let result =
            share_link(&env, &ShareTarget::for_link(URL), &caps, &mut collecting(&notices)).await;

        assert!(result.success);
        assert_eq!(env.share_calls.get(), 0);
        assert_eq!(env.copied_texts.borrow().as_slice(), &[URL.to_string()]);

        // Info notice comes before the copy success notice.
        let notices = notices.borrow();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].level, NoticeLevel::Info);
        assert_eq!(notices[0].title, "Native sharing not available");
        assert_eq!(notices[1].level, NoticeLevel::Success);
    }

    #[tokio::test]
    async fn test_share_ignores_stale_snapshot_when_entry_point_vanished() {
        // Snapshot said shareable, but the entry point is gone by the
        // time the user clicks: fall through to copy.
        let env = RecordingEnv {
            supports_clipboard: true,
            ..RecordingEnv::default()
        };
        let caps = CapabilitySnapshot {
            is_mobile: false,
            can_share: true,
        };
        let notices = RefCell::new(Vec::new());

        share_link(&env, &ShareTarget::for_link(URL), &caps, &mut collecting(&notices)).await;

        assert_eq!(env.share_calls.get(), 0);
        assert_eq!(env.copied_texts.borrow().as_slice(), &[URL.to_string()]);
    }
}
