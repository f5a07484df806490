// Generation history for the stacked-rows canvas

use crate::automaton::Cell;
use thiserror::Error;

/// Returned when a row is pushed onto a canvas that has no room left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("canvas full: {capacity} rows already drawn")]
pub struct HistoryFull {
    pub capacity: usize,
}

/// Rows drawn so far, oldest first
///
/// Row 0 is the seeded generation; every tick appends one row until the
/// canvas height (`capacity`) is exhausted.
#[derive(Debug, Clone)]
pub struct History {
    rows: Vec<Vec<Cell>>,
    capacity: usize,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        History {
            rows: Vec::new(),
            capacity,
        }
    }

    /// A canvas with no height limit until [`History::set_capacity`] sizes it
    pub fn unbounded() -> Self {
        Self::new(usize::MAX)
    }

    /// Add a generation to the canvas
    pub fn push(&mut self, cells: &[Cell]) -> Result<(), HistoryFull> {
        if self.is_full() {
            return Err(HistoryFull {
                capacity: self.capacity,
            });
        }

        self.rows.push(cells.to_vec());
        Ok(())
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Get the number of rows drawn
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.rows.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Change the canvas height; a shorter canvas drops the newest rows
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        self.rows.truncate(capacity);
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_until_full() {
        let mut history = History::new(2);
        assert!(history.push(&[Cell::Alive]).is_ok());
        assert!(history.push(&[Cell::Dead]).is_ok());
        assert!(history.is_full());
        assert_eq!(
            history.push(&[Cell::Alive]),
            Err(HistoryFull { capacity: 2 })
        );
        assert_eq!(history.len(), 2);
        assert_eq!(history.rows()[1], vec![Cell::Dead]);
    }

    #[test]
    fn test_shrinking_keeps_oldest_rows() {
        let mut history = History::new(3);
        history.push(&[Cell::Alive]).unwrap();
        history.push(&[Cell::Dead]).unwrap();
        history.push(&[Cell::Dead]).unwrap();

        history.set_capacity(1);
        assert_eq!(history.len(), 1);
        assert_eq!(history.rows(), &[vec![Cell::Alive]]);
        assert!(history.is_full());

        history.set_capacity(4);
        assert!(!history.is_full());
    }

    #[test]
    fn test_unbounded_accepts_rows_until_sized() {
        let mut history = History::unbounded();
        for _ in 0..1000 {
            history.push(&[Cell::Alive]).unwrap();
        }
        assert!(!history.is_full());

        history.set_capacity(10);
        assert_eq!(history.len(), 10);
        assert!(history.is_full());
    }

    #[test]
    fn test_zero_capacity_rejects_everything() {
        let mut history = History::new(0);
        assert!(history.is_full());
        assert!(history.push(&[]).is_err());
        assert!(history.is_empty());
    }
}
