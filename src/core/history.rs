//! Single-step undo/redo history.
//!
//! The history holds at most one state to go back to and at most one state
//! to go forward to. It does not keep a log of transitions.

use std::mem;

/// One-slot undo and redo buffers.
///
/// # Example
///
/// ```rust
/// use undo_fsm::core::UndoHistory;
///
/// let mut current = "running".to_string();
/// let mut history = UndoHistory::new();
/// history.record("idle");
///
/// assert!(history.undo(&mut current));
/// assert_eq!(current, "idle");
/// assert!(!history.undo(&mut current));
///
/// assert!(history.redo(&mut current));
/// assert_eq!(current, "running");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UndoHistory {
    previous: Option<String>,
    next: Option<String>,
}

impl UndoHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember `from` as the state to return to on undo.
    ///
    /// Overwrites any earlier entry. The redo slot is left alone.
    pub fn record(&mut self, from: impl Into<String>) {
        self.previous = Some(from.into());
    }

    /// Swap `current` back to the recorded previous state.
    ///
    /// The state being left becomes the redo target and the undo slot is
    /// emptied, so two undos in a row never succeed. Returns `false` without
    /// touching anything when there is nothing to undo.
    pub fn undo(&mut self, current: &mut String) -> bool {
        let Some(previous) = self.previous.take() else {
            return false;
        };
        self.next = Some(mem::replace(current, previous));
        true
    }

    /// Move `current` forward to the state left by the last undo.
    ///
    /// The undo slot is not restored.
    pub fn redo(&mut self, current: &mut String) -> bool {
        let Some(next) = self.next.take() else {
            return false;
        };
        *current = next;
        true
    }

    /// Forget both slots.
    pub fn clear(&mut self) {
        self.previous = None;
        self.next = None;
    }

    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    pub fn next(&self) -> Option<&str> {
        self.next.as_deref()
    }

    pub fn can_undo(&self) -> bool {
        self.previous.is_some()
    }

    pub fn can_redo(&self) -> bool {
        self.next.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_is_empty() {
        let history = UndoHistory::new();

        assert!(history.previous().is_none());
        assert!(history.next().is_none());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_without_record_changes_nothing() {
        let mut history = UndoHistory::new();
        let mut current = "a".to_string();

        assert!(!history.undo(&mut current));
        assert_eq!(current, "a");
        assert_eq!(history, UndoHistory::new());
    }

    #[test]
    fn undo_moves_current_into_redo_slot() {
        let mut history = UndoHistory::new();
        let mut current = "b".to_string();
        history.record("a");

        assert!(history.undo(&mut current));

        assert_eq!(current, "a");
        assert_eq!(history.next(), Some("b"));
        assert!(history.previous().is_none());
    }

    #[test]
    fn record_keeps_only_latest_state() {
        let mut history = UndoHistory::new();
        let mut current = "c".to_string();
        history.record("a");
        history.record("b");

        assert!(history.undo(&mut current));
        assert_eq!(current, "b");
        assert!(!history.undo(&mut current));
    }

    #[test]
    fn record_does_not_clear_redo_slot() {
        let mut history = UndoHistory::new();
        let mut current = "b".to_string();
        history.record("a");
        history.undo(&mut current);

        history.record("a");

        assert_eq!(history.next(), Some("b"));
    }

    #[test]
    fn redo_does_not_restore_undo_slot() {
        let mut history = UndoHistory::new();
        let mut current = "b".to_string();
        history.record("a");
        history.undo(&mut current);

        assert!(history.redo(&mut current));
        assert_eq!(current, "b");
        assert!(!history.can_undo());
        assert!(!history.redo(&mut current));
    }

    #[test]
    fn clear_empties_both_slots() {
        let mut history = UndoHistory::new();
        let mut current = "b".to_string();
        history.record("a");
        history.undo(&mut current);
        history.record("b");

        history.clear();

        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(current, "a");
    }
}
