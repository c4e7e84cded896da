use super::grid::{Cell, GridConfig};
use super::snake::Snake;
use rand::Rng;

/// Pick a random cell for the food that the snake does not occupy.
///
/// The outermost ring of the grid is never chosen.  Cells are sampled
/// uniformly until a free one comes up; [`GridConfig`] guarantees at
/// construction that the interior is larger than any snake, so a free cell
/// always exists.
pub(crate) fn place_food<R: Rng>(snake: &Snake, grid: GridConfig, rng: &mut R) -> Cell {
    loop {
        let cell = Cell::new(
            rng.random_range(1..grid.width() - 1),
            rng.random_range(1..grid.height() - 1),
        );
        if !snake.cells().contains(&cell) {
            return cell;
        }
    }
}
