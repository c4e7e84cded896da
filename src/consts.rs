//! Assorted constants & hard-coded configuration
use ratatui::style::Color;
use std::time::Duration;

/// Default number of grid cells across the width of the screen
pub(crate) const CELLS_WIDE: u32 = 40;

/// Default number of game updates per second
pub(crate) const UPDATES_PER_SECOND: u32 = 10;

/// Default maximum number of cells the snake can occupy
pub(crate) const SNAKE_CAPACITY: usize = 200;

/// Length of a freshly started snake
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 1;

/// Body segments at or below this index are not checked for collisions with
/// the head.  A tight turn can otherwise put the head on a segment that has
/// only just been vacated.
pub(crate) const SELF_COLLISION_GRACE: usize = 4;

/// How long the loop worker sleeps between redraws while gameplay is paused
pub(crate) const PAUSED_FRAME_PERIOD: Duration = Duration::from_millis(33);

/// Color that the board is cleared to at the start of every frame
pub(crate) const BACKGROUND_COLOR: Color = Color::Rgb(80, 50, 255);

/// Color of the snake, the food, and the score text
pub(crate) const FOREGROUND_COLOR: Color = Color::Rgb(255, 255, 255);

/// Name of the directory under the local config & data directories
pub(crate) const APP_DIR_NAME: &str = "swipesnake";

/// Environment variable that overrides the configuration file path
pub(crate) const CONFIG_PATH_ENV: &str = "SWIPESNAKE_CONFIG";
