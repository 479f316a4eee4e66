//! Rendering engine seam
//!
//! The host UI that actually presents notifications is abstracted behind the
//! [`Renderer`] trait so tests and headless hosts can substitute their own
//! sink. [`LogRenderer`] is the built-in fallback that records everything
//! through the `log` facade.

use super::types::{ChannelGroup, DisplayContext, NotificationRequest, Severity};
use crate::error::DispatchError;

/// Rendering engine trait
///
/// Accepts a constructed notification bound to a display context and a
/// channel group. Presentation (transient alert for interactive groups,
/// silent log entry for log-only groups) and action invocation are the
/// implementor's responsibility. A renderer makes no promise beyond a single
/// synchronous handoff attempt.
pub trait Renderer: Send + Sync {
    /// Hand a notification to the host for display
    fn render(
        &self,
        context: &DisplayContext,
        group: &ChannelGroup,
        request: &NotificationRequest,
    ) -> std::result::Result<(), DispatchError>;

    /// Renderer name for identification
    fn name(&self) -> &str;
}

/// Log-backed renderer
///
/// Renders every notification as a log record at the level matching its
/// severity. Useful when no host UI is attached.
#[derive(Debug, Default)]
pub struct LogRenderer;

impl LogRenderer {
    /// Create a new log renderer
    pub fn new() -> Self {
        Self
    }

    fn level_for(severity: Severity) -> log::Level {
        match severity {
            Severity::Info => log::Level::Info,
            Severity::Warning => log::Level::Warn,
            Severity::Error => log::Level::Error,
        }
    }
}

impl Renderer for LogRenderer {
    fn render(
        &self,
        context: &DisplayContext,
        group: &ChannelGroup,
        request: &NotificationRequest,
    ) -> std::result::Result<(), DispatchError> {
        let level = Self::level_for(request.severity());
        log::log!(
            level,
            "[{}] {} {}: {}",
            group.id(),
            context,
            request.title().unwrap_or(group.display_name()),
            request.body()
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "log"
    }
}
