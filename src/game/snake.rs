use super::direction::Direction;
use super::grid::Cell;
use crate::consts;

/// The snake's segments, held in a fixed-capacity buffer
///
/// The cells live in a buffer sized once at construction; only the first
/// `len` slots are occupied.  The buffer has one slot more than `capacity`
/// because each move copies the tail into the slot just past it, which is
/// where a freshly grown segment picks up its position.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// Positions of the snake's segments, head first
    pub(super) cells: Box<[Cell]>,

    /// Number of occupied segments
    pub(super) len: usize,
}

impl Snake {
    /// Create a snake of [`INITIAL_SNAKE_LENGTH`][consts::INITIAL_SNAKE_LENGTH]
    /// at `head` that can grow to at most `capacity` cells.
    pub(crate) fn new(head: Cell, capacity: usize) -> Snake {
        let capacity = capacity.max(consts::INITIAL_SNAKE_LENGTH);
        Snake {
            cells: vec![head; capacity + 1].into_boxed_slice(),
            len: consts::INITIAL_SNAKE_LENGTH,
        }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Cell {
        self.cells[0]
    }

    /// Return the occupied cells, head first
    pub(crate) fn cells(&self) -> &[Cell] {
        &self.cells[..self.len]
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// The most cells the snake can occupy
    pub(crate) fn capacity(&self) -> usize {
        self.cells.len() - 1
    }

    /// Reset to a snake of the initial length at `head`, keeping the buffer
    pub(crate) fn reset(&mut self, head: Cell) {
        self.cells.fill(head);
        self.len = consts::INITIAL_SNAKE_LENGTH;
    }

    /// Lengthen the snake by one cell.  The new tail segment takes up the
    /// position the old tail left behind on the last move; it shows up on the
    /// next move.
    ///
    /// Returns `false` if the snake is already at capacity, in which case its
    /// length is unchanged.
    pub(crate) fn grow(&mut self) -> bool {
        if self.len < self.capacity() {
            self.len += 1;
            true
        } else {
            false
        }
    }

    /// Move the snake forwards one cell in `direction`.  Every segment takes
    /// the previous position of the one ahead of it, and the head steps in
    /// `direction`.  The head is not kept on the grid.
    pub(crate) fn advance(&mut self, direction: Direction) {
        self.cells.copy_within(..self.len, 1);
        self.cells[0] = direction.step(self.cells[0]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn snake_from(cells: &[Cell], capacity: usize) -> Snake {
        let mut snake = Snake::new(cells[0], capacity);
        snake.cells[..cells.len()].copy_from_slice(cells);
        snake.len = cells.len();
        snake
    }

    #[test]
    fn new_snake() {
        let snake = Snake::new(Cell::new(5, 5), 200);
        assert_eq!(snake.head(), Cell::new(5, 5));
        assert_eq!(snake.cells(), [Cell::new(5, 5)]);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.capacity(), 200);
    }

    #[rstest]
    #[case(Direction::Up, Cell::new(4, 2))]
    #[case(Direction::Right, Cell::new(5, 3))]
    #[case(Direction::Down, Cell::new(4, 4))]
    #[case(Direction::Left, Cell::new(3, 3))]
    fn advance_shifts_body(#[case] direction: Direction, #[case] head: Cell) {
        let before = [
            Cell::new(4, 3),
            Cell::new(4, 4),
            Cell::new(4, 5),
            Cell::new(3, 5),
        ];
        let mut snake = snake_from(&before, 10);
        snake.advance(direction);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), head);
        assert_eq!(snake.cells()[1..], before[..3]);
    }

    #[test]
    fn growth_shows_on_next_move() {
        let mut snake = snake_from(&[Cell::new(3, 3), Cell::new(2, 3)], 10);
        snake.advance(Direction::Right);
        assert_eq!(snake.cells(), [Cell::new(4, 3), Cell::new(3, 3)]);
        assert!(snake.grow());
        // The new tail sits where the old tail was before the last move
        assert_eq!(
            snake.cells(),
            [Cell::new(4, 3), Cell::new(3, 3), Cell::new(2, 3)]
        );
        snake.advance(Direction::Down);
        assert_eq!(
            snake.cells(),
            [Cell::new(4, 4), Cell::new(4, 3), Cell::new(3, 3)]
        );
    }

    #[test]
    fn growth_stops_at_capacity() {
        let mut snake = Snake::new(Cell::new(5, 5), 3);
        assert!(snake.grow());
        assert!(snake.grow());
        assert!(!snake.grow());
        assert_eq!(snake.len(), 3);
        snake.advance(Direction::Left);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(4, 5));
    }

    #[test]
    fn reset() {
        let mut snake = snake_from(&[Cell::new(3, 3), Cell::new(2, 3), Cell::new(1, 3)], 10);
        snake.reset(Cell::new(7, 8));
        assert_eq!(snake.cells(), [Cell::new(7, 8)]);
        assert_eq!(snake.capacity(), 10);
    }
}
