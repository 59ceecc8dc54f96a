//! Board container for the committed entity list and undo history.

use super::entity::Entity;

/// Container for all committed entities in the current drawing session.
///
/// Holds the authoritative render-order list of [`Entity`]s plus the undo
/// history: a stack of full pre-mutation snapshots, pushed on every shape add
/// and every drag, never on line commits. [`Board::undo`] restores the most
/// recent snapshot, so it reverts the last shape add or drag while leaving
/// untracked line commits subject to that snapshot's contents.
#[derive(Debug, Clone, Default)]
pub struct Board {
    /// All entities in draw order (first = bottom layer, last = top layer)
    pub entities: Vec<Entity>,
    /// Pre-mutation snapshots of the entity list, most recent last
    undo_history: Vec<Vec<Entity>>,
}

impl Board {
    /// Creates a new empty board with no entities and no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes all entities and snapshots, resetting the board.
    pub fn clear(&mut self) {
        self.entities.clear();
        self.undo_history.clear();
    }

    /// Appends a committed line without recording an undo snapshot.
    ///
    /// Line strokes are not undo-tracked; only shape mutations are.
    pub fn push_line(&mut self, line: Entity) {
        debug_assert!(!line.is_shape());
        self.entities.push(line);
    }

    /// Attempts to append a shape, enforcing a maximum entity count when
    /// `max` > 0, and records a pre-mutation snapshot on success.
    ///
    /// Returns `true` if the shape was added, `false` if the limit would be
    /// exceeded (the board and history are untouched in that case).
    pub fn try_add_shape(&mut self, shape: Entity, max: usize) -> bool {
        if max != 0 && self.entities.len() >= max {
            return false;
        }
        self.undo_history.push(self.entities.clone());
        self.entities.push(shape);
        true
    }

    /// Moves the shape at `index` to a new position, recording a pre-mutation
    /// snapshot.
    ///
    /// Returns `false` without mutating anything if `index` is out of range
    /// or names a line entity.
    pub fn apply_drag(&mut self, index: usize, x: f64, y: f64) -> bool {
        match self.entities.get(index) {
            Some(entity) if entity.is_shape() => {
                self.undo_history.push(self.entities.clone());
                self.entities[index].set_position(x, y);
                true
            }
            _ => false,
        }
    }

    /// Restores the most recent pre-mutation snapshot, reverting the last
    /// shape add or drag.
    ///
    /// Returns `true` if a snapshot was restored, `false` if the history was
    /// empty (the board is left unchanged).
    pub fn undo(&mut self) -> bool {
        match self.undo_history.pop() {
            Some(snapshot) => {
                self.entities = snapshot;
                true
            }
            None => false,
        }
    }

    /// Number of committed entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the board has no committed entities.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Number of shape entities (excludes lines).
    pub fn shape_count(&self) -> usize {
        self.entities.iter().filter(|e| e.is_shape()).count()
    }

    /// Depth of the undo history.
    pub fn undo_depth(&self) -> usize {
        self.undo_history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{GREEN, WHITE};
    use crate::draw::style::StrokeStyle;

    fn circle(fill: crate::draw::Color) -> Entity {
        Entity::Circle {
            x: 50.0,
            y: 50.0,
            radius: 25.0,
            fill,
        }
    }

    fn line() -> Entity {
        Entity::Line {
            points: vec![(0.0, 0.0), (5.0, 5.0)],
            style: StrokeStyle::solid(WHITE, 2.0),
        }
    }

    #[test]
    fn try_add_shape_respects_limit() {
        let mut board = Board::new();
        assert!(board.try_add_shape(circle(WHITE), 1));
        assert!(!board.try_add_shape(circle(GREEN), 1));
        assert_eq!(board.len(), 1);
        assert_eq!(board.undo_depth(), 1);
    }

    #[test]
    fn undo_on_empty_history_is_a_no_op() {
        let mut board = Board::new();
        assert!(!board.undo());
        assert!(board.is_empty());
    }

    #[test]
    fn three_add_undo_cycles_return_to_empty() {
        let mut board = Board::new();
        for _ in 0..3 {
            assert!(board.try_add_shape(circle(WHITE), 0));
            assert_eq!(board.len(), 1);
            assert!(board.undo());
            assert!(board.is_empty());
        }
    }

    #[test]
    fn undo_reverts_drags() {
        let mut board = Board::new();
        board.try_add_shape(circle(WHITE), 0);
        assert!(board.apply_drag(0, 120.0, 80.0));
        assert_eq!(
            board.entities[0],
            Entity::Circle {
                x: 120.0,
                y: 80.0,
                radius: 25.0,
                fill: WHITE,
            }
        );

        assert!(board.undo());
        assert_eq!(
            board.entities[0],
            Entity::Circle {
                x: 50.0,
                y: 50.0,
                radius: 25.0,
                fill: WHITE,
            }
        );
    }

    #[test]
    fn drag_rejects_lines_and_bad_indices() {
        let mut board = Board::new();
        board.push_line(line());
        assert!(!board.apply_drag(0, 10.0, 10.0));
        assert!(!board.apply_drag(7, 10.0, 10.0));
        assert_eq!(board.undo_depth(), 0);
    }

    #[test]
    fn line_commits_are_not_undo_tracked() {
        let mut board = Board::new();
        board.push_line(line());
        assert_eq!(board.undo_depth(), 0);
        assert_eq!(board.shape_count(), 0);
        assert_eq!(board.len(), 1);
    }
}
