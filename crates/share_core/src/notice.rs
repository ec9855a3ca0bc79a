//! Transient user-facing notices emitted by the workflow.
//!
//! The workflow is a pure caller of whatever notification surface the
//! application provides; it only produces [`Notice`] values through a
//! sink closure and never renders anything itself.

/// Severity of a notice, mapped by the UI onto toast styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// A single transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: Option<String>,
    pub duration_ms: Option<u32>,
}

impl Notice {
    pub fn info(title: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, title)
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, title)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, title)
    }

    fn new(level: NoticeLevel, title: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            description: None,
            duration_ms: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}
