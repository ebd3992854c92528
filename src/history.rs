//! Bounded undo history.

use std::collections::VecDeque;

/// Number of snapshots kept by [`History::default`].
pub const DEFAULT_CAPACITY: usize = 32;

/// A stack of snapshots that forgets its oldest entries once full.
///
/// # Examples
/// ```
/// use plancolor::history::History;
///
/// let mut history = History::with_capacity(2);
/// history.push(1);
/// history.push(2);
/// history.push(3);
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.pop(), Some(3));
/// assert_eq!(history.pop(), Some(2));
/// assert_eq!(history.pop(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History<T> {
    snapshots: VecDeque<T>,
    capacity: usize,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        History::with_capacity(DEFAULT_CAPACITY)
    }
}

impl<T> History<T> {
    /// An empty history holding at most `capacity` snapshots.
    ///
    /// # Panics
    ///
    /// If `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> History<T> {
        assert!(capacity > 0, "history capacity must be non-zero");
        History {
            snapshots: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Records a snapshot, dropping the oldest one if the history is full.
    pub fn push(&mut self, snapshot: T) {
        while self.snapshots.len() >= self.capacity {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(snapshot);
    }

    /// Removes and returns the most recent snapshot.
    pub fn pop(&mut self) -> Option<T> {
        self.snapshots.pop_back()
    }

    /// The most recent snapshot.
    pub fn peek(&self) -> Option<&T> {
        self.snapshots.back()
    }

    /// Forgets every snapshot.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    /// Number of snapshots held.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether there is nothing to undo.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Maximum number of snapshots held.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capacity() {
        let history = History::<u8>::default();
        assert_eq!(history.capacity(), 32);
        assert!(history.is_empty());
    }

    #[test]
    fn test_evicts_oldest() {
        let mut history = History::with_capacity(3);
        for i in 0..10 {
            history.push(i);
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.peek(), Some(&9));
        let drained: Vec<_> = std::iter::from_fn(|| history.pop()).collect();
        assert_eq!(drained, vec![9, 8, 7]);
    }

    #[test]
    fn test_clear() {
        let mut history = History::default();
        history.push("a");
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.pop(), None);
    }

    #[test]
    #[should_panic]
    fn test_zero_capacity() {
        let _ = History::<u8>::with_capacity(0);
    }
}
