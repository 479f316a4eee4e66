//! Display-text resolution
//!
//! All fixed user-visible strings are looked up by message key so a host can
//! substitute its own localized store. [`DefaultBundle`] carries the built-in
//! English templates.

/// Message keys understood by the built-in bundle
pub mod keys {
    /// Plugin display name, used as the default notification title
    pub const PLUGIN_NAME: &str = "plugin.name";
    /// Display name of the interactive notification group
    pub const GROUP_ALERTS: &str = "plugin.notification.alerts";
    /// Display name of the log-only notification group
    pub const GROUP_LOGGING: &str = "plugin.notification.logging";
    /// Title of exception reports
    pub const EXCEPTION_TITLE: &str = "plugin.exception";
    /// Body template for an error without an underlying cause
    pub const EXCEPTION_TRACE: &str = "plugin.exception-trace";
    /// Body template for an error with a root cause
    pub const EXCEPTION_WITH_ROOT_CAUSE: &str = "plugin.exception-with-root-cause";
    /// Subtitle of the lint-tool-missing notification
    pub const TOOL_NOT_FOUND_SUBTITLE: &str = "plugin.notification.tool-not-found.subtitle";
    /// Content of the lint-tool-missing notification
    pub const TOOL_NOT_FOUND_CONTENT: &str = "plugin.notification.tool-not-found.content";
    /// Label of the install-documentation action
    pub const ACTION_INSTALL_DOCS: &str = "plugin.notification.action.how-to-install";
    /// Label of the open-settings action
    pub const ACTION_PLUGIN_SETTINGS: &str = "plugin.notification.action.plugin-settings";
}

/// Localized-message lookup store
///
/// Resolves a message key plus positional arguments to display text. Hosts
/// with their own localization layer implement this; everything else uses
/// [`DefaultBundle`].
pub trait MessageStore: Send + Sync {
    /// Resolve `key`, substituting `{0}`, `{1}`, ... with `args`
    fn message(&self, key: &str, args: &[&str]) -> String;
}

/// Built-in English message bundle
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultBundle;

impl DefaultBundle {
    fn template(key: &str) -> Option<&'static str> {
        Some(match key {
            keys::PLUGIN_NAME => "Lintbell",
            keys::GROUP_ALERTS => "Lintbell Alerts",
            keys::GROUP_LOGGING => "Lintbell Logging",
            keys::EXCEPTION_TITLE => "Unexpected Exception",
            keys::EXCEPTION_TRACE => "{0}",
            keys::EXCEPTION_WITH_ROOT_CAUSE => "{0}<br>Root cause: {1}",
            keys::TOOL_NOT_FOUND_SUBTITLE => "Lint tool not found",
            keys::TOOL_NOT_FOUND_CONTENT => {
                "The external lint tool could not be located. Check that it is \
                 installed and that the executable path in the plugin settings is correct."
            }
            keys::ACTION_INSTALL_DOCS => "How to install the lint tool",
            keys::ACTION_PLUGIN_SETTINGS => "Plugin settings",
            _ => return None,
        })
    }
}

impl MessageStore for DefaultBundle {
    fn message(&self, key: &str, args: &[&str]) -> String {
        match Self::template(key) {
            Some(template) => expand(template, args),
            // Unknown keys resolve to themselves so a typo is visible, not a panic
            None => key.to_string(),
        }
    }
}

/// Substitute positional `{n}` placeholders
fn expand(template: &str, args: &[&str]) -> String {
    let mut out = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        out = out.replace(&format!("{{{}}}", i), arg);
    }
    out
}
