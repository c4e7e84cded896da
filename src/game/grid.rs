use thiserror::Error;

/// A position on the game grid, in cells.
///
/// Coordinates are signed because the snake's head may sit one cell past an
/// edge for the single tick in which it dies.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) struct Cell {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Cell {
    pub(crate) const fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }
}

/// A rectangle in pixel space, right & bottom exclusive
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct PixelRect {
    pub(crate) left: u32,
    pub(crate) top: u32,
    pub(crate) right: u32,
    pub(crate) bottom: u32,
}

/// Dimensions of the playable area
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct GridConfig {
    /// Side length of one cell in pixels
    cell_size: u32,

    /// Number of cells across
    width: i32,

    /// Number of cells down
    height: i32,
}

impl GridConfig {
    /// Lay a grid `cells_wide` cells across over a screen of the given
    /// resolution.  Cells are square, so the number of rows is however many
    /// whole cells fit in `height_px`.
    ///
    /// `capacity` is the most cells the snake can ever occupy.  The grid must
    /// leave strictly more room than that for food to be placed, so that food
    /// placement can always find a free cell.
    pub(crate) fn from_resolution(
        width_px: u32,
        height_px: u32,
        cells_wide: u32,
        capacity: usize,
    ) -> Result<GridConfig, GridError> {
        if cells_wide == 0 {
            return Err(GridError::NoColumns);
        }
        let cell_size = width_px / cells_wide;
        if cell_size == 0 {
            return Err(GridError::ScreenTooNarrow {
                width_px,
                cells_wide,
            });
        }
        let rows = height_px / cell_size;
        let (Ok(width), Ok(height)) = (i32::try_from(cells_wide), i32::try_from(rows)) else {
            return Err(GridError::TooLarge);
        };
        let grid = GridConfig {
            cell_size,
            width,
            height,
        };
        if grid.food_cells() <= capacity {
            return Err(GridError::NoRoomForFood {
                width,
                height,
                capacity,
            });
        }
        Ok(grid)
    }

    pub(crate) fn cell_size(self) -> u32 {
        self.cell_size
    }

    pub(crate) fn width(self) -> i32 {
        self.width
    }

    pub(crate) fn height(self) -> i32 {
        self.height
    }

    /// Size of the whole grid in pixels
    pub(crate) fn pixel_size(self) -> (u32, u32) {
        (
            self.width.unsigned_abs() * self.cell_size,
            self.height.unsigned_abs() * self.cell_size,
        )
    }

    /// The cell in which a new snake's head is placed
    pub(crate) fn center(self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    /// Number of cells in which food may be placed: everything except the
    /// outermost ring
    pub(crate) fn food_cells(self) -> usize {
        let w = usize::try_from(self.width.saturating_sub(2)).unwrap_or(0);
        let h = usize::try_from(self.height.saturating_sub(2)).unwrap_or(0);
        w.saturating_mul(h)
    }

    /// Return the pixel rectangle covered by `cell`.
    ///
    /// The cell must lie on the grid; cells past an edge are never drawn.
    pub(crate) fn cell_rect(self, cell: Cell) -> PixelRect {
        debug_assert!(
            (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y),
            "cell_rect() called with off-grid cell {cell:?}"
        );
        let left = cell.x.unsigned_abs() * self.cell_size;
        let top = cell.y.unsigned_abs() * self.cell_size;
        PixelRect {
            left,
            top,
            right: left + self.cell_size,
            bottom: top + self.cell_size,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum GridError {
    #[error("grid must be at least one cell wide")]
    NoColumns,
    #[error("screen is {width_px} pixels wide, too narrow for {cells_wide} cells")]
    ScreenTooNarrow { width_px: u32, cells_wide: u32 },
    #[error("grid dimensions are too large")]
    TooLarge,
    #[error(
        "a {width}x{height} grid leaves no room for food around a snake of up to {capacity} cells"
    )]
    NoRoomForFood {
        width: i32,
        height: i32,
        capacity: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn from_resolution() {
        let grid = GridConfig::from_resolution(1080, 1920, 40, 200).expect("grid should be valid");
        assert_eq!(grid.cell_size(), 27);
        assert_eq!(grid.width(), 40);
        assert_eq!(grid.height(), 71);
        assert_eq!(grid.center(), Cell::new(20, 35));
        assert_eq!(grid.pixel_size(), (1080, 1917));
    }

    #[rstest]
    #[case(80, 48, 0, 10, GridError::NoColumns)]
    #[case(30, 48, 40, 10, GridError::ScreenTooNarrow { width_px: 30, cells_wide: 40 })]
    #[case(80, 48, 40, 1000, GridError::NoRoomForFood { width: 40, height: 24, capacity: 1000 })]
    fn from_resolution_err(
        #[case] width_px: u32,
        #[case] height_px: u32,
        #[case] cells_wide: u32,
        #[case] capacity: usize,
        #[case] err: GridError,
    ) {
        assert_eq!(
            GridConfig::from_resolution(width_px, height_px, cells_wide, capacity),
            Err(err)
        );
    }

    #[test]
    fn just_enough_room_for_food() {
        // 38 * 22 = 836 interior cells
        assert!(GridConfig::from_resolution(80, 48, 40, 835).is_ok());
        assert!(GridConfig::from_resolution(80, 48, 40, 836).is_err());
    }

    #[rstest]
    #[case(Cell::new(0, 0), PixelRect { left: 0, top: 0, right: 2, bottom: 2 })]
    #[case(Cell::new(3, 5), PixelRect { left: 6, top: 10, right: 8, bottom: 12 })]
    #[case(Cell::new(39, 23), PixelRect { left: 78, top: 46, right: 80, bottom: 48 })]
    fn test_cell_rect(#[case] cell: Cell, #[case] rect: PixelRect) {
        let grid = GridConfig::from_resolution(80, 48, 40, 10).expect("grid should be valid");
        assert_eq!(grid.cell_rect(cell), rect);
    }
}
