//! LIFO frontier of discovered, not-yet-explored positions.

use crate::core::Position;

/// Stack of candidate positions discovered during exploration.
///
/// Depth-first behavior falls out of the pop order: the most recently
/// pushed position is explored next, and backtracking after a dead end
/// is simply popping the next most recent entry.
#[derive(Debug, Default)]
pub struct Frontier {
    entries: Vec<Position>,
}

impl Frontier {
    /// Create an empty frontier
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Push a newly discovered candidate
    #[inline]
    pub fn push(&mut self, pos: Position) {
        self.entries.push(pos);
    }

    /// Pop the most recently pushed candidate
    #[inline]
    pub fn pop_most_recent(&mut self) -> Option<Position> {
        self.entries.pop()
    }

    /// Drop one queued copy of `pos` if present.
    ///
    /// The position being consumed may have been pushed earlier as a
    /// neighbor candidate; leaving it queued would revisit the cell.
    pub fn remove_if_present(&mut self, pos: Position) {
        if let Some(idx) = self.entries.iter().position(|&p| p == pos) {
            self.entries.remove(idx);
        }
    }

    /// No candidates left?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of queued candidates
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_is_lifo() {
        let mut frontier = Frontier::new();
        frontier.push(Position::new(0, 0));
        frontier.push(Position::new(0, 1));
        frontier.push(Position::new(1, 0));

        assert_eq!(frontier.pop_most_recent(), Some(Position::new(1, 0)));
        assert_eq!(frontier.pop_most_recent(), Some(Position::new(0, 1)));
        assert_eq!(frontier.pop_most_recent(), Some(Position::new(0, 0)));
        assert_eq!(frontier.pop_most_recent(), None);
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_remove_if_present() {
        let mut frontier = Frontier::new();
        frontier.push(Position::new(2, 2));
        frontier.push(Position::new(3, 3));

        frontier.remove_if_present(Position::new(2, 2));
        assert_eq!(frontier.len(), 1);

        // Removing an absent position is a no-op
        frontier.remove_if_present(Position::new(9, 9));
        assert_eq!(frontier.len(), 1);
        assert_eq!(frontier.pop_most_recent(), Some(Position::new(3, 3)));
    }

    #[test]
    fn test_remove_drops_one_copy_only() {
        let mut frontier = Frontier::new();
        frontier.push(Position::new(1, 1));
        frontier.push(Position::new(1, 1));

        frontier.remove_if_present(Position::new(1, 1));
        assert_eq!(frontier.len(), 1);
        assert_eq!(frontier.pop_most_recent(), Some(Position::new(1, 1)));
    }
}
