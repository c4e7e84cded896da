use super::grid::GridConfig;
use super::snake::Snake;
use crate::consts;

/// Return `true` if the snake has died: its head is one cell past an edge of
/// the grid, or it has run into its own body.
///
/// Only the head is tested against the edges, and only against the cells just
/// outside them; the head never gets further than that before the game is
/// reset.  Body segments within
/// [`SELF_COLLISION_GRACE`][consts::SELF_COLLISION_GRACE] of the head are not
/// checked.
pub(crate) fn is_dead(snake: &Snake, grid: GridConfig) -> bool {
    let head = snake.head();
    if head.x == -1 || head.x == grid.width() || head.y == -1 || head.y == grid.height() {
        return true;
    }
    snake
        .cells()
        .iter()
        .skip(consts::SELF_COLLISION_GRACE + 1)
        .any(|&c| c == head)
}
