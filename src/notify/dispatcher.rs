//! Notification dispatcher
//!
//! Classifies events by severity and channel, builds the notification
//! request, and hands it to the rendering engine bound to the caller's
//! display context. Dispatch is synchronous and fire-and-forget: one handoff
//! attempt, no retry, no waiting on user interaction.

use super::actions::Action;
use super::renderer::Renderer;
use super::trace;
use super::types::{Channel, ChannelGroup, DisplayContext, NotificationRequest, Severity};
use crate::config::NotifyConfig;
use crate::error::DispatchError;
use crate::messages::{keys, DefaultBundle, MessageStore};
use std::error::Error;
use std::sync::OnceLock;

static ALERT_GROUP: OnceLock<ChannelGroup> = OnceLock::new();
static LOG_ONLY_GROUP: OnceLock<ChannelGroup> = OnceLock::new();

/// The process-wide interactive notification group
///
/// Created on first use; every later call observes the same registration.
pub fn alert_group() -> &'static ChannelGroup {
    ALERT_GROUP.get_or_init(|| {
        ChannelGroup::new(
            "lintbell.alerts",
            DefaultBundle.message(keys::GROUP_ALERTS, &[]),
            Channel::Interactive,
        )
    })
}

/// The process-wide log-only notification group
pub fn log_only_group() -> &'static ChannelGroup {
    LOG_ONLY_GROUP.get_or_init(|| {
        ChannelGroup::new(
            "lintbell.logging",
            DefaultBundle.message(keys::GROUP_LOGGING, &[]),
            Channel::LogOnly,
        )
    })
}

/// Notification dispatcher
///
/// Owns the rendering-engine and message-store collaborators. All operations
/// take `&self` and may be called concurrently from any number of analysis
/// workers.
pub struct Dispatcher {
    renderer: Box<dyn Renderer>,
    messages: Box<dyn MessageStore>,
    config: NotifyConfig,
}

impl Dispatcher {
    /// Create a dispatcher with the default message bundle and configuration
    pub fn new(renderer: Box<dyn Renderer>) -> Self {
        Self::with_config(renderer, NotifyConfig::default())
    }

    /// Create a dispatcher with explicit configuration
    pub fn with_config(renderer: Box<dyn Renderer>, config: NotifyConfig) -> Self {
        Self {
            renderer,
            messages: Box::new(DefaultBundle),
            config,
        }
    }

    /// Replace the message store, e.g. with a host-localized one
    pub fn with_messages(mut self, messages: Box<dyn MessageStore>) -> Self {
        self.messages = messages;
        self
    }

    /// Show an informational alert with the default title
    pub fn info(
        &self,
        context: &DisplayContext,
        body: &str,
    ) -> std::result::Result<(), DispatchError> {
        self.balloon(context, None, body, Severity::Info)
    }

    /// Show an informational alert with an explicit title
    pub fn info_titled(
        &self,
        context: &DisplayContext,
        title: &str,
        body: &str,
    ) -> std::result::Result<(), DispatchError> {
        self.balloon(context, Some(title), body, Severity::Info)
    }

    /// Show a warning alert with the default title
    pub fn warning(
        &self,
        context: &DisplayContext,
        body: &str,
    ) -> std::result::Result<(), DispatchError> {
        self.balloon(context, None, body, Severity::Warning)
    }

    /// Show a warning alert with an explicit title
    pub fn warning_titled(
        &self,
        context: &DisplayContext,
        title: &str,
        body: &str,
    ) -> std::result::Result<(), DispatchError> {
        self.balloon(context, Some(title), body, Severity::Warning)
    }

    /// Show an error alert with the default title
    pub fn error(
        &self,
        context: &DisplayContext,
        body: &str,
    ) -> std::result::Result<(), DispatchError> {
        self.balloon(context, None, body, Severity::Error)
    }

    /// Show an error alert with an explicit title
    pub fn error_titled(
        &self,
        context: &DisplayContext,
        title: &str,
        body: &str,
    ) -> std::result::Result<(), DispatchError> {
        self.balloon(context, Some(title), body, Severity::Error)
    }

    /// Record a caught exception without interrupting the user
    ///
    /// The body is the formatted trace of `error`, surfacing the root cause
    /// when the error wraps one. Always log-only, never carries actions.
    pub fn exception(
        &self,
        context: &DisplayContext,
        error: &(dyn Error + 'static),
    ) -> std::result::Result<(), DispatchError> {
        let body = trace::format(error, self.messages.as_ref());
        let request = NotificationRequest::new(body, Severity::Error, Channel::LogOnly)?
            .with_title(self.messages.message(keys::EXCEPTION_TITLE, &[]));
        self.dispatch(context, log_only_group(), request)
    }

    /// Alert the user that the external lint tool could not be located
    ///
    /// The one notification that carries remediation actions: install
    /// documentation first, plugin settings second.
    pub fn tool_unavailable(
        &self,
        context: &DisplayContext,
    ) -> std::result::Result<(), DispatchError> {
        let request = NotificationRequest::new(
            self.messages.message(keys::TOOL_NOT_FOUND_CONTENT, &[]),
            Severity::Error,
            Channel::Interactive,
        )?
        .with_title(self.default_title())
        .with_subtitle(self.messages.message(keys::TOOL_NOT_FOUND_SUBTITLE, &[]))
        .with_actions(vec![
            Action::open_install_docs(self.messages.as_ref(), &self.config.docs_url),
            Action::open_plugin_settings(self.messages.as_ref()),
        ]);
        self.dispatch(context, alert_group(), request)
    }

    fn balloon(
        &self,
        context: &DisplayContext,
        title: Option<&str>,
        body: &str,
        severity: Severity,
    ) -> std::result::Result<(), DispatchError> {
        let title = match title {
            Some(title) => title.to_string(),
            None => self.default_title(),
        };
        let request =
            NotificationRequest::new(body, severity, Channel::Interactive)?.with_title(title);
        self.dispatch(context, alert_group(), request)
    }

    fn dispatch(
        &self,
        context: &DisplayContext,
        group: &'static ChannelGroup,
        request: NotificationRequest,
    ) -> std::result::Result<(), DispatchError> {
        log::debug!(
            "dispatching {} notification to {} for {}",
            request.severity(),
            group.id(),
            context
        );
        self.renderer.render(context, group, &request)
    }

    fn default_title(&self) -> String {
        match &self.config.display_name {
            Some(name) => name.clone(),
            None => self.messages.message(keys::PLUGIN_NAME, &[]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockRenderer;
    use crate::notify::actions::ActionKind;
    use std::sync::Arc;
    use std::thread;

    fn dispatcher() -> (Dispatcher, Arc<MockRenderer>) {
        let renderer = Arc::new(MockRenderer::new());
        let dispatcher = Dispatcher::new(Box::new(Arc::clone(&renderer)));
        (dispatcher, renderer)
    }

    #[test]
    fn test_info_uses_interactive_channel_and_default_title() {
        let (dispatcher, renderer) = dispatcher();
        let ctx = DisplayContext::new("project-1");

        dispatcher.info(&ctx, "scan finished").unwrap();

        let rendered = renderer.rendered();
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].group_id, "lintbell.alerts");
        assert_eq!(rendered[0].request.severity(), Severity::Info);
        assert_eq!(rendered[0].request.channel(), Channel::Interactive);
        assert_eq!(rendered[0].request.title(), Some("Lintbell"));
        assert!(rendered[0].request.actions().is_empty());
    }

    #[test]
    fn test_titled_forms_override_title() {
        let (dispatcher, renderer) = dispatcher();
        let ctx = DisplayContext::new("project-1");

        dispatcher.warning_titled(&ctx, "Stale cache", "results may be old").unwrap();

        let rendered = renderer.rendered();
        assert_eq!(rendered[0].request.title(), Some("Stale cache"));
        assert_eq!(rendered[0].request.severity(), Severity::Warning);
    }

    #[test]
    fn test_each_severity_maps_to_interactive() {
        let (dispatcher, renderer) = dispatcher();
        let ctx = DisplayContext::new("project-1");

        dispatcher.info(&ctx, "i").unwrap();
        dispatcher.warning(&ctx, "w").unwrap();
        dispatcher.error(&ctx, "e").unwrap();

        let rendered = renderer.rendered();
        let severities: Vec<_> = rendered.iter().map(|r| r.request.severity()).collect();
        assert_eq!(
            severities,
            vec![Severity::Info, Severity::Warning, Severity::Error]
        );
        assert!(rendered
            .iter()
            .all(|r| r.request.channel() == Channel::Interactive));
    }

    #[test]
    fn test_empty_body_fails_without_handoff() {
        let (dispatcher, renderer) = dispatcher();
        let ctx = DisplayContext::new("project-1");

        let result = dispatcher.error(&ctx, "");
        assert!(matches!(result, Err(DispatchError::InvalidRequest(_))));
        assert_eq!(renderer.rendered().len(), 0);
    }

    #[test]
    fn test_sequential_dispatches_stay_independent() {
        let (dispatcher, renderer) = dispatcher();
        let ctx = DisplayContext::new("project-1");

        dispatcher.info(&ctx, "x").unwrap();
        dispatcher.info(&ctx, "x").unwrap();

        assert_eq!(renderer.rendered().len(), 2);
    }

    #[test]
    fn test_exception_is_log_only_without_actions() {
        let (dispatcher, renderer) = dispatcher();
        let ctx = DisplayContext::new("project-1");
        let error = std::io::Error::new(std::io::ErrorKind::NotFound, "lint output vanished");

        dispatcher.exception(&ctx, &error).unwrap();

        let rendered = renderer.rendered();
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].group_id, "lintbell.logging");
        assert_eq!(rendered[0].request.channel(), Channel::LogOnly);
        assert_eq!(rendered[0].request.severity(), Severity::Error);
        assert_eq!(rendered[0].request.title(), Some("Unexpected Exception"));
        assert!(rendered[0].request.actions().is_empty());
        assert!(rendered[0].request.body().contains("lint output vanished"));
    }

    #[test]
    fn test_exception_body_contains_no_raw_whitespace_structure() {
        let (dispatcher, renderer) = dispatcher();
        let ctx = DisplayContext::new("project-1");
        let error = std::io::Error::other("worker\tpanicked\nmid-run");

        dispatcher.exception(&ctx, &error).unwrap();

        let body = renderer.rendered()[0].request.body().to_string();
        assert!(!body.contains('\t'));
        assert!(!body.contains('\n'));
    }

    #[test]
    fn test_tool_unavailable_carries_two_actions_in_order() {
        let (dispatcher, renderer) = dispatcher();
        let ctx = DisplayContext::new("project-1");

        dispatcher.tool_unavailable(&ctx).unwrap();
        dispatcher.tool_unavailable(&ctx).unwrap();

        for record in renderer.rendered() {
            assert_eq!(record.request.severity(), Severity::Error);
            assert_eq!(record.request.channel(), Channel::Interactive);
            assert_eq!(record.request.subtitle(), Some("Lint tool not found"));
            let actions = record.request.actions();
            assert_eq!(actions.len(), 2);
            assert!(matches!(
                actions[0].kind(),
                ActionKind::OpenInstallDocs { .. }
            ));
            assert_eq!(actions[1].kind(), &ActionKind::OpenPluginSettings);
        }
    }

    #[test]
    fn test_tool_unavailable_docs_url_comes_from_config() {
        let renderer = Arc::new(MockRenderer::new());
        let config = NotifyConfig {
            docs_url: "https://docs.example.org/setup".to_string(),
            ..NotifyConfig::default()
        };
        let dispatcher = Dispatcher::with_config(Box::new(Arc::clone(&renderer)), config);

        dispatcher
            .tool_unavailable(&DisplayContext::new("project-1"))
            .unwrap();

        let rendered = renderer.rendered();
        match rendered[0].request.actions()[0].kind() {
            ActionKind::OpenInstallDocs { url } => {
                assert_eq!(url, "https://docs.example.org/setup")
            }
            other => panic!("unexpected action kind: {:?}", other),
        }
    }

    #[test]
    fn test_display_name_override_becomes_default_title() {
        let renderer = Arc::new(MockRenderer::new());
        let config = NotifyConfig {
            display_name: Some("House Style".to_string()),
            ..NotifyConfig::default()
        };
        let dispatcher = Dispatcher::with_config(Box::new(Arc::clone(&renderer)), config);

        dispatcher
            .info(&DisplayContext::new("project-1"), "ready")
            .unwrap();

        assert_eq!(renderer.rendered()[0].request.title(), Some("House Style"));
    }

    struct UpperBundle;

    impl MessageStore for UpperBundle {
        fn message(&self, key: &str, args: &[&str]) -> String {
            DefaultBundle.message(key, args).to_uppercase()
        }
    }

    #[test]
    fn test_custom_message_store_localizes_fixed_text() {
        let renderer = Arc::new(MockRenderer::new());
        let dispatcher =
            Dispatcher::new(Box::new(Arc::clone(&renderer))).with_messages(Box::new(UpperBundle));

        dispatcher
            .info(&DisplayContext::new("project-1"), "body")
            .unwrap();

        assert_eq!(renderer.rendered()[0].request.title(), Some("LINTBELL"));
    }

    #[test]
    fn test_renderer_failure_propagates_unchanged() {
        let renderer = Arc::new(MockRenderer::failing("host frame disposed"));
        let dispatcher = Dispatcher::new(Box::new(Arc::clone(&renderer)));

        let result = dispatcher.info(&DisplayContext::new("project-1"), "hello");
        assert_eq!(
            result,
            Err(DispatchError::RenderingUnavailable(
                "host frame disposed".to_string()
            ))
        );
        // One attempt only
        assert_eq!(renderer.attempts(), 1);
    }

    #[test]
    fn test_channel_groups_initialize_once_across_threads() {
        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| (alert_group(), log_only_group())))
            .collect();

        let observed: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for (alerts, logging) in &observed {
            assert!(std::ptr::eq(*alerts, alert_group()));
            assert!(std::ptr::eq(*logging, log_only_group()));
        }
        assert_eq!(alert_group().channel(), Channel::Interactive);
        assert_eq!(log_only_group().channel(), Channel::LogOnly);
        assert_eq!(alert_group().display_name(), "Lintbell Alerts");
        assert_eq!(log_only_group().display_name(), "Lintbell Logging");
    }

    #[test]
    fn test_concurrent_dispatch_from_many_workers() {
        let renderer = Arc::new(MockRenderer::new());
        let dispatcher = Arc::new(Dispatcher::new(Box::new(Arc::clone(&renderer))));

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let dispatcher = Arc::clone(&dispatcher);
                thread::spawn(move || {
                    let ctx = DisplayContext::new(format!("worker-{}", worker));
                    dispatcher.info(&ctx, "done").unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(renderer.rendered().len(), 8);
    }
}
