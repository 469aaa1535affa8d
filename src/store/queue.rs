//! FIFO queue of raw text documents awaiting tokenization

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Ordered pending-work list of raw text
///
/// Unbounded: producers (presentation submissions, startup seeding) append
/// at the tail, the document processor consumes one item per tick from the
/// head. The queue growing faster than it drains is an accepted property,
/// not a failure.
#[derive(Debug, Default)]
pub struct DocumentQueue {
    inner: Mutex<VecDeque<String>>,
}

impl DocumentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<String>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn push(&self, document: String) {
        self.lock().push_back(document);
    }

    /// Dequeue the oldest document, if any
    pub fn pop(&self) -> Option<String> {
        self.lock().pop_front()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_is_fifo() {
        let queue = DocumentQueue::new();
        queue.push("first".into());
        queue.push("second".into());
        queue.push("third".into());

        assert_eq!(queue.pop().as_deref(), Some("first"));
        assert_eq!(queue.pop().as_deref(), Some("second"));
        assert_eq!(queue.pop().as_deref(), Some("third"));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_empty_queue_pops_none() {
        let queue = DocumentQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.pop(), None);
    }
}
