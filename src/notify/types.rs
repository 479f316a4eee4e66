//! Notification domain types
//!
//! Defines the severity and channel classifications, the opaque display
//! context handle, the process-wide channel groups, and the notification
//! request handed to the rendering engine.

use super::actions::Action;
use crate::error::DispatchError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Notification severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Informational, no action needed
    Info,
    /// Attention recommended
    Warning,
    /// Something failed
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARNING"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// Notification delivery mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    /// Shown to the user as a transient alert
    Interactive,
    /// Recorded silently, never interrupts the user
    LogOnly,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interactive => write!(f, "interactive"),
            Self::LogOnly => write!(f, "log-only"),
        }
    }
}

/// How hyperlinks embedded in body markup are handled by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LinkPolicy {
    /// Clicking a link opens it in the system browser
    #[default]
    OpenInBrowser,
    /// Links render as plain text
    Inert,
}

/// Opaque handle identifying which running host instance should render a
/// notification
///
/// Supplied by the caller and threaded through to the rendering engine
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayContext {
    id: String,
}

impl DisplayContext {
    /// Create a context handle for the given host instance id
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// The host instance id
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for DisplayContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Process-wide notification group registration
///
/// Two groups exist per process, one per channel. They are created lazily on
/// first use and are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelGroup {
    id: String,
    display_name: String,
    channel: Channel,
}

impl ChannelGroup {
    pub(crate) fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        channel: Channel,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            channel,
        }
    }

    /// Stable group identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Group name shown in the host's notification settings
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Delivery mode of every notification posted through this group
    pub fn channel(&self) -> Channel {
        self.channel
    }
}

/// A fully constructed notification, ready for the rendering engine
///
/// Request-scoped: built, handed off once, discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequest {
    title: Option<String>,
    subtitle: Option<String>,
    body: String,
    severity: Severity,
    channel: Channel,
    actions: Vec<Action>,
    links: LinkPolicy,
}

impl NotificationRequest {
    /// Create a request with the given body, severity, and channel
    ///
    /// The body must contain visible text; a blank body is rejected before
    /// any handoff can happen.
    pub fn new(
        body: impl Into<String>,
        severity: Severity,
        channel: Channel,
    ) -> std::result::Result<Self, DispatchError> {
        let body = body.into();
        if body.trim().is_empty() {
            return Err(DispatchError::InvalidRequest(
                "notification body is empty".to_string(),
            ));
        }
        Ok(Self {
            title: None,
            subtitle: None,
            body,
            severity,
            channel,
            actions: Vec::new(),
            links: LinkPolicy::OpenInBrowser,
        })
    }

    /// Set an explicit title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set a subtitle shown between title and body
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Attach remediation actions, kept in the given order
    pub fn with_actions(mut self, actions: Vec<Action>) -> Self {
        self.actions = actions;
        self
    }

    /// Set the hyperlink handling policy
    pub fn with_links(mut self, links: LinkPolicy) -> Self {
        self.links = links;
        self
    }

    /// Explicit title, if one was set
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Subtitle, if one was set
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    /// Display body
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Requested severity
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Target channel
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Attached remediation actions, in presentation order
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Hyperlink handling policy
    pub fn links(&self) -> LinkPolicy {
        self.links
    }
}
