//! External interrupt controller.
//!
//! An independent FIFO queue of opaque interrupt tags. Triggering appends;
//! handling pops the earliest tag. The queue is never auto-drained into the
//! CPU: the engine only reacts when a caller explicitly translates a popped
//! tag into [`crate::Engine::raise_interrupt`].

use std::collections::VecDeque;

/// FIFO queue of externally triggered interrupt tags.
#[derive(Debug, Clone, Default)]
pub struct InterruptController {
    queue: VecDeque<String>,
}

impl InterruptController {
    /// Creates a controller with an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an interrupt tag to the queue.
    pub fn trigger(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        tracing::debug!(%tag, "external interrupt queued");
        self.queue.push_back(tag);
    }

    /// Pops and returns the earliest-triggered tag, or `None` when idle.
    pub fn handle_next(&mut self) -> Option<String> {
        let tag = self.queue.pop_front();
        if let Some(tag) = &tag {
            tracing::debug!(%tag, "external interrupt handled");
        }
        tag
    }

    /// Read-only peek of the queued tags, earliest first (for display).
    pub fn pending(&self) -> impl Iterator<Item = &str> {
        self.queue.iter().map(String::as_str)
    }

    /// Number of queued tags.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns `true` when no tag is queued.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
