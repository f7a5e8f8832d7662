//! User-facing notification port.
//!
//! Services report store failures through an injected port instead of a
//! module-level singleton, so tests can assert on emitted notifications.

use async_trait::async_trait;

/// Notification severity shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Sink for user-visible notifications
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationPort: Send + Sync {
    async fn notify(&self, severity: Severity, message: &str);
}

/// Production port: notifications land in the tracing stream and are picked
/// up by the frontend toast channel from the response status.
pub struct TracingNotifier;

#[async_trait]
impl NotificationPort for TracingNotifier {
    async fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => tracing::info!(target: "notify", "{}", message),
            Severity::Warning => tracing::warn!(target: "notify", "{}", message),
            Severity::Error => tracing::error!(target: "notify", "{}", message),
        }
    }
}

/// Recording port for unit tests
#[cfg(test)]
pub struct RecordingNotifier {
    pub messages: std::sync::Mutex<Vec<(Severity, String)>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            messages: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl NotificationPort for RecordingNotifier {
    async fn notify(&self, severity: Severity, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((severity, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_captures_messages() {
        let notifier = RecordingNotifier::new();
        tokio_test::block_on(async {
            notifier.notify(Severity::Error, "store failure").await;
            notifier.notify(Severity::Info, "saved").await;
        });
        let messages = notifier.messages.lock().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], (Severity::Error, "store failure".to_string()));
    }

    #[test]
    fn test_mock_port_expectations() {
        let mut mock = MockNotificationPort::new();
        mock.expect_notify()
            .withf(|severity, message| {
                *severity == Severity::Warning && message.contains("warranty")
            })
            .times(1)
            .return_const(());
        tokio_test::block_on(mock.notify(Severity::Warning, "warranty expiring"));
    }
}
