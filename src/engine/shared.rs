//! Cross-task coordination state for concurrent exploration.
//!
//! Everything here is lock-free: a set-once exit flag and the task
//! budget counters. Tasks hold shared references for the duration of the
//! run's thread scope.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Set-once flag broadcasting that some task reached the exit.
///
/// Checked before every step and before every spawn; never cleared
/// during a run. Setting it is idempotent, and exactly one caller is
/// told it was first.
#[derive(Debug, Default)]
pub struct ExitSignal {
    found: AtomicBool,
}

impl ExitSignal {
    /// Create an unset signal
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the signal. Returns true only for the first caller.
    pub fn set(&self) -> bool {
        !self.found.swap(true, Ordering::AcqRel)
    }

    /// Has any task reached the exit?
    #[inline]
    pub fn is_set(&self) -> bool {
        self.found.load(Ordering::Acquire)
    }
}

/// Cap on concurrently running spawned tasks.
///
/// When no slot is free the discovering task keeps the branch on its own
/// frontier, so exhaustion degrades toward sequential exploration
/// without losing work. A budget of zero disables spawning entirely.
#[derive(Debug)]
pub struct TaskBudget {
    active: AtomicUsize,
    spawned_total: AtomicUsize,
    max_active: usize,
}

impl TaskBudget {
    /// Create a budget allowing up to `max_active` spawned tasks at once
    pub fn new(max_active: usize) -> Self {
        Self {
            active: AtomicUsize::new(0),
            spawned_total: AtomicUsize::new(0),
            max_active,
        }
    }

    /// Try to reserve a slot for one more task.
    ///
    /// On success returns the task ordinal (1-based, for thread naming).
    /// The slot must be released when the task finishes or fails to
    /// spawn.
    pub fn try_reserve(&self) -> Option<usize> {
        let mut active = self.active.load(Ordering::Acquire);
        loop {
            if active >= self.max_active {
                return None;
            }
            match self.active.compare_exchange_weak(
                active,
                active + 1,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return Some(self.spawned_total.fetch_add(1, Ordering::Relaxed) + 1),
                Err(observed) => active = observed,
            }
        }
    }

    /// Release a reserved slot
    pub fn release(&self) {
        self.active.fetch_sub(1, Ordering::AcqRel);
    }

    /// Number of tasks currently holding a slot
    pub fn active(&self) -> usize {
        self.active.load(Ordering::Acquire)
    }

    /// Total reservations over the run's lifetime
    pub fn spawned_total(&self) -> usize {
        self.spawned_total.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_set_once() {
        let signal = ExitSignal::new();
        assert!(!signal.is_set());
        assert!(signal.set());
        assert!(signal.is_set());
        // Later setters are told they were not first
        assert!(!signal.set());
        assert!(signal.is_set());
    }

    #[test]
    fn test_budget_exhaustion() {
        let budget = TaskBudget::new(2);
        assert_eq!(budget.try_reserve(), Some(1));
        assert_eq!(budget.try_reserve(), Some(2));
        assert_eq!(budget.try_reserve(), None);
        assert_eq!(budget.active(), 2);

        budget.release();
        assert_eq!(budget.try_reserve(), Some(3));
        assert_eq!(budget.spawned_total(), 3);
    }

    #[test]
    fn test_zero_budget_never_reserves() {
        let budget = TaskBudget::new(0);
        assert_eq!(budget.try_reserve(), None);
        assert_eq!(budget.spawned_total(), 0);
    }
}
