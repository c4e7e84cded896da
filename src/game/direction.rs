use super::grid::Cell;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    #[default]
    Right,
    Down,
    Left,
}

impl Direction {
    /// Return the cell one step from `cell` in this direction.  No bounds are
    /// applied; the result may lie off the grid.
    pub(crate) fn step(self, cell: Cell) -> Cell {
        let Cell { x, y } = cell;
        match self {
            Direction::Up => Cell::new(x, y - 1),
            Direction::Right => Cell::new(x + 1, y),
            Direction::Down => Cell::new(x, y + 1),
            Direction::Left => Cell::new(x - 1, y),
        }
    }

    pub(crate) fn as_u8(self) -> u8 {
        match self {
            Direction::Up => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
        }
    }

    pub(crate) fn from_u8(value: u8) -> Option<Direction> {
        match value {
            0 => Some(Direction::Up),
            1 => Some(Direction::Right),
            2 => Some(Direction::Down),
            3 => Some(Direction::Left),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Direction::Up, Cell::new(2, 7), Cell::new(2, 6))]
    #[case(Direction::Down, Cell::new(2, 7), Cell::new(2, 8))]
    #[case(Direction::Right, Cell::new(2, 7), Cell::new(3, 7))]
    #[case(Direction::Left, Cell::new(2, 7), Cell::new(1, 7))]
    #[case(Direction::Up, Cell::new(2, 0), Cell::new(2, -1))]
    #[case(Direction::Left, Cell::new(0, 7), Cell::new(-1, 7))]
    fn test_step(#[case] d: Direction, #[case] cell: Cell, #[case] r: Cell) {
        assert_eq!(d.step(cell), r);
    }

    #[rstest]
    #[case(Direction::Up)]
    #[case(Direction::Right)]
    #[case(Direction::Down)]
    #[case(Direction::Left)]
    fn u8_encoding(#[case] d: Direction) {
        assert_eq!(Direction::from_u8(d.as_u8()), Some(d));
    }

    #[test]
    fn default_is_right() {
        assert_eq!(Direction::default(), Direction::Right);
    }
}
