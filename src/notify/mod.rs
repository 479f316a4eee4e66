//! Notification dispatch and exception reporting
//!
//! Classifies internal events into severities and channels, formats caught
//! exceptions, and hands structured notifications to the host rendering
//! engine.

mod actions;
mod dispatcher;
mod renderer;
pub mod trace;
mod types;

pub use actions::{Action, ActionKind, SettingsSurface, UrlOpener};
pub use dispatcher::{alert_group, log_only_group, Dispatcher};
pub use renderer::{LogRenderer, Renderer};
pub use types::{
    Channel, ChannelGroup, DisplayContext, LinkPolicy, NotificationRequest, Severity,
};
