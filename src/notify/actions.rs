//! Remediation actions
//!
//! Actions are attached to a notification by the dispatcher and invoked by
//! the rendering engine when the user interacts with them. The set of
//! remediations is closed, so kinds are a tagged enum rather than an open
//! hierarchy.

use super::types::DisplayContext;
use crate::messages::{keys, MessageStore};
use serde::{Deserialize, Serialize};

/// The closed set of remediation kinds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    /// Open the lint-tool installation documentation in the system browser
    OpenInstallDocs {
        /// Documentation URL, resolved from configuration
        url: String,
    },
    /// Open the host's settings surface for this plugin
    OpenPluginSettings,
}

/// A labeled, user-triggerable remediation attached to a notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    label: String,
    kind: ActionKind,
}

impl Action {
    /// Build the install-documentation action for the given docs URL
    pub fn open_install_docs(messages: &dyn MessageStore, url: impl Into<String>) -> Self {
        Self {
            label: messages.message(keys::ACTION_INSTALL_DOCS, &[]),
            kind: ActionKind::OpenInstallDocs { url: url.into() },
        }
    }

    /// Build the open-plugin-settings action
    pub fn open_plugin_settings(messages: &dyn MessageStore) -> Self {
        Self {
            label: messages.message(keys::ACTION_PLUGIN_SETTINGS, &[]),
            kind: ActionKind::OpenPluginSettings,
        }
    }

    /// Display label shown on the notification button
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Which remediation this action performs
    pub fn kind(&self) -> &ActionKind {
        &self.kind
    }

    /// Run the action's effect
    ///
    /// Called by the rendering engine on user interaction, on whatever thread
    /// the host delivers interaction events. Dispatch never calls this.
    pub fn invoke(
        &self,
        context: &DisplayContext,
        urls: &dyn UrlOpener,
        settings: &dyn SettingsSurface,
    ) {
        match &self.kind {
            ActionKind::OpenInstallDocs { url } => urls.open_url(url),
            ActionKind::OpenPluginSettings => settings.open_plugin_settings(context),
        }
    }
}

/// External URL opener collaborator
pub trait UrlOpener: Send + Sync {
    /// Open the given URL in the system browser
    fn open_url(&self, url: &str);
}

/// Host settings surface collaborator
pub trait SettingsSurface: Send + Sync {
    /// Open the plugin's settings panel for the given host instance
    fn open_plugin_settings(&self, context: &DisplayContext);
}
