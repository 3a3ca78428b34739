//! User-facing acknowledgments.

use std::collections::VecDeque;

/// Presents a short fixed message to the visitor.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

impl<T: Notifier + ?Sized> Notifier for Box<T> {
    fn notify(&mut self, message: &str) {
        (**self).notify(message)
    }
}

/// FIFO of messages waiting to be shown and dismissed one at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeQueue {
    pending: VecDeque<String>,
    delivered: usize,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Message currently on screen.
    pub fn current(&self) -> Option<&str> {
        self.pending.front().map(String::as_str)
    }

    /// Dismisses the current message and returns it.
    pub fn dismiss(&mut self) -> Option<String> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Total messages ever received.
    pub fn delivered(&self) -> usize {
        self.delivered
    }
}

impl Notifier for NoticeQueue {
    fn notify(&mut self, message: &str) {
        tracing::info!(%message, "Notice");
        self.pending.push_back(message.to_string());
        self.delivered += 1;
    }
}
