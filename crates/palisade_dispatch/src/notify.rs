//! The sender-notification boundary.
//!
//! The engine never formats or colors output itself; it hands plain
//! text to a single host-supplied primitive.

use std::sync::Mutex;

use palisade_foundation::Sender;

/// How the host should style a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageStyle {
    /// Ordinary feedback text.
    Plain,
    /// Warning styling, used for syntax failures and unhandled
    /// exceptions. Never accompanied by a stack trace.
    Warning,
}

/// The host's "notify sender" primitive.
pub trait Notifier {
    /// Displays a message to the sender.
    fn notify(&self, sender: &Sender, message: &str, style: MessageStyle);
}

/// A notifier that records messages; used in tests and by embedders
/// that batch output.
#[derive(Debug, Default)]
pub struct CollectingNotifier {
    messages: Mutex<Vec<(String, MessageStyle)>>,
}

impl CollectingNotifier {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages recorded so far.
    #[must_use]
    pub fn messages(&self) -> Vec<(String, MessageStyle)> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }

    /// Takes the recorded messages, leaving the collector empty.
    #[must_use]
    pub fn take_messages(&self) -> Vec<(String, MessageStyle)> {
        self.messages
            .lock()
            .map(|mut m| std::mem::take(&mut *m))
            .unwrap_or_default()
    }
}

impl Notifier for CollectingNotifier {
    fn notify(&self, _sender: &Sender, message: &str, style: MessageStyle) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push((message.to_string(), style));
        }
    }
}
