//! Mock implementations for testing
//!
//! Provides a recording rendering engine and host shell so dispatch behavior
//! can be asserted without a real UI attached.

use crate::error::DispatchError;
use crate::notify::{
    ChannelGroup, DisplayContext, NotificationRequest, Renderer, SettingsSurface, UrlOpener,
};

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// A notification as the mock renderer received it
#[derive(Debug, Clone)]
pub struct RenderedNotification {
    /// Context the notification was bound to
    pub context: DisplayContext,
    /// Id of the channel group it was posted through
    pub group_id: String,
    /// The full request
    pub request: NotificationRequest,
}

/// Recording mock renderer
///
/// Accepts every handoff and remembers it, or fails each attempt with a
/// fixed reason when built via [`MockRenderer::failing`].
#[derive(Debug, Default)]
pub struct MockRenderer {
    rendered: Mutex<Vec<RenderedNotification>>,
    attempts: AtomicUsize,
    failure: Option<String>,
}

impl MockRenderer {
    /// Create a mock renderer that accepts everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock renderer that rejects every handoff
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            rendered: Mutex::new(Vec::new()),
            attempts: AtomicUsize::new(0),
            failure: Some(reason.into()),
        }
    }

    /// Every successfully accepted notification, in arrival order
    pub fn rendered(&self) -> Vec<RenderedNotification> {
        self.rendered.lock().unwrap().clone()
    }

    /// Total handoff attempts, including rejected ones
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl Renderer for MockRenderer {
    fn render(
        &self,
        context: &DisplayContext,
        group: &ChannelGroup,
        request: &NotificationRequest,
    ) -> std::result::Result<(), DispatchError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if let Some(reason) = &self.failure {
            return Err(DispatchError::RenderingUnavailable(reason.clone()));
        }
        self.rendered.lock().unwrap().push(RenderedNotification {
            context: context.clone(),
            group_id: group.id().to_string(),
            request: request.clone(),
        });
        Ok(())
    }

    fn name(&self) -> &str {
        "mock"
    }
}

impl Renderer for Arc<MockRenderer> {
    fn render(
        &self,
        context: &DisplayContext,
        group: &ChannelGroup,
        request: &NotificationRequest,
    ) -> std::result::Result<(), DispatchError> {
        self.as_ref().render(context, group, request)
    }

    fn name(&self) -> &str {
        self.as_ref().name()
    }
}

/// Recording mock host shell
///
/// Implements both action collaborators and remembers every invocation.
#[derive(Debug, Default)]
pub struct MockShell {
    opened_urls: Mutex<Vec<String>>,
    settings_openings: Mutex<Vec<String>>,
}

impl MockShell {
    /// Create a new mock shell
    pub fn new() -> Self {
        Self::default()
    }

    /// URLs opened so far, in order
    pub fn opened_urls(&self) -> Vec<String> {
        self.opened_urls.lock().unwrap().clone()
    }

    /// Context ids the settings surface was opened for, in order
    pub fn settings_openings(&self) -> Vec<String> {
        self.settings_openings.lock().unwrap().clone()
    }
}

impl UrlOpener for MockShell {
    fn open_url(&self, url: &str) {
        self.opened_urls.lock().unwrap().push(url.to_string());
    }
}

impl SettingsSurface for MockShell {
    fn open_plugin_settings(&self, context: &DisplayContext) {
        self.settings_openings
            .lock()
            .unwrap()
            .push(context.id().to_string());
    }
}
