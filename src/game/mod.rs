mod clock;
mod collision;
pub(crate) mod direction;
mod food;
pub(crate) mod grid;
mod snake;
use self::clock::FrameClock;
use self::collision::is_dead;
use self::food::place_food;
use self::grid::{Cell, GridConfig};
use self::snake::Snake;
use crate::audio::{AudioSink, Effect};
use crate::consts;
use crate::input::Controls;
use crate::render::{Paint, Surface};
use rand::Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Settings that shape a game, fixed for its lifetime
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct GameSettings {
    pub(crate) grid: GridConfig,
    pub(crate) capacity: usize,
    pub(crate) updates_per_second: u32,
}

#[derive(Debug)]
pub(crate) struct Game<R> {
    rng: R,
    grid: GridConfig,
    snake: Snake,
    food: Cell,
    score: u32,
    clock: FrameClock,
    controls: Arc<Controls>,
}

impl<R: Rng> Game<R> {
    /// Create a game and start it
    pub(crate) fn new(settings: GameSettings, controls: Arc<Controls>, rng: R) -> Game<R> {
        let grid = settings.grid;
        let snake = Snake::new(grid.center(), settings.capacity);
        let mut game = Game {
            rng,
            grid,
            food: Cell::default(),
            snake,
            score: 0,
            clock: FrameClock::per_second(settings.updates_per_second),
            controls,
        };
        log::debug!("Updating every {:?}", game.clock.interval());
        game.start();
        game
    }

    /// Start a new game: a one-cell snake in the middle of the grid, fresh
    /// food, no score, and gameplay paused until the next input.  The
    /// direction is left as it was.
    pub(crate) fn start(&mut self) {
        self.snake.reset(self.grid.center());
        self.place_food();
        self.score = 0;
        self.clock.reset(Instant::now());
        self.controls.set_paused(true);
        log::info!(
            "Started new game on {}x{} grid",
            self.grid.width(),
            self.grid.height()
        );
    }

    /// Run one update: eat the food if the head is on it, move, and start
    /// over if the snake died
    pub(crate) fn update<A: AudioSink + ?Sized>(&mut self, audio: &mut A) -> Tick {
        let mut tick = Tick::Moved;
        if self.snake.head() == self.food {
            if !self.snake.grow() {
                log::warn!(
                    "Snake is at its capacity of {} cells; not growing",
                    self.snake.capacity()
                );
            }
            self.place_food();
            self.score += 1;
            audio.play_effect(Effect::FoodConsumed);
            tick = Tick::Ate;
        }
        self.snake.advance(self.controls.direction());
        if is_dead(&self.snake, self.grid) {
            log::info!(
                "Snake died at {:?} with score {}",
                self.snake.head(),
                self.score
            );
            audio.play_effect(Effect::SnakeDied);
            self.start();
            tick = Tick::Died;
        }
        tick
    }

    fn place_food(&mut self) {
        self.food = place_food(&self.snake, self.grid, &mut self.rng);
        log::debug!("Placed food at {:?}", self.food);
    }
}

impl<R> Game<R> {
    pub(crate) fn controls(&self) -> &Arc<Controls> {
        &self.controls
    }

    /// Return `true` if an update is due at `now`, scheduling the one after
    pub(crate) fn update_due(&mut self, now: Instant) -> bool {
        self.clock.due(now)
    }

    /// Time remaining at `now` until the next update is due
    pub(crate) fn until_update(&self, now: Instant) -> Duration {
        self.clock.wait(now)
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    /// Draw the board, the score, the snake, and the food
    pub(crate) fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let paint = Paint {
            color: consts::FOREGROUND_COLOR,
        };
        surface.draw_background(consts::BACKGROUND_COLOR);
        let margin = self.grid.cell_size();
        surface.draw_text(&format!("Score: {}", self.score), margin, margin, paint);
        for &cell in self.snake.cells() {
            surface.draw_rect(self.grid.cell_rect(cell), paint);
        }
        surface.draw_rect(self.grid.cell_rect(self.food), paint);
    }
}

/// What happened during an update
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Tick {
    /// The snake moved
    Moved,

    /// The snake ate the food, then moved
    Ate,

    /// The snake died, and a new game was started
    Died,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::direction::Direction;
    use crate::render::DrawOp;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn new_game() -> Game<ChaCha12Rng> {
        let settings = GameSettings {
            grid: GridConfig::from_resolution(100, 100, 10, 20).expect("grid should be valid"),
            capacity: 20,
            updates_per_second: 10,
        };
        Game::new(
            settings,
            Arc::new(Controls::new()),
            ChaCha12Rng::seed_from_u64(RNG_SEED),
        )
    }

    #[test]
    fn fresh_game() {
        let game = new_game();
        assert_eq!(game.snake.cells(), [Cell::new(5, 5)]);
        assert_eq!(game.score(), 0);
        assert!(game.controls().paused());
        assert_eq!(game.controls().direction(), Direction::Right);
        assert!((1..=8).contains(&game.food.x));
        assert!((1..=8).contains(&game.food.y));
        assert_ne!(game.food, Cell::new(5, 5));
    }

    #[test]
    fn three_ticks_right() {
        let mut game = new_game();
        game.food = Cell::new(2, 2);
        let mut audio: Vec<Effect> = Vec::new();
        for _ in 0..3 {
            assert_eq!(game.update(&mut audio), Tick::Moved);
        }
        assert_eq!(game.snake.head(), Cell::new(8, 5));
        assert_eq!(game.snake.len(), 1);
        assert!(audio.is_empty());
    }

    #[test]
    fn eat_food() {
        let mut game = new_game();
        game.controls().set_paused(false);
        game.food = Cell::new(5, 5);
        let mut audio: Vec<Effect> = Vec::new();
        assert_eq!(game.update(&mut audio), Tick::Ate);
        assert_eq!(game.score(), 1);
        assert_eq!(game.snake.len(), 2);
        assert_eq!(game.snake.cells(), [Cell::new(6, 5), Cell::new(5, 5)]);
        assert_ne!(game.food, Cell::new(5, 5));
        assert!((1..=8).contains(&game.food.x));
        assert!((1..=8).contains(&game.food.y));
        assert_eq!(audio, [Effect::FoodConsumed]);
        assert!(!game.controls().paused());
    }

    #[test]
    fn growth_follows_the_snake() {
        let mut game = new_game();
        game.food = Cell::new(5, 5);
        let mut audio: Vec<Effect> = Vec::new();
        game.update(&mut audio);
        game.food = Cell::new(1, 1);
        game.controls().set_direction(Direction::Down);
        game.update(&mut audio);
        assert_eq!(game.snake.cells(), [Cell::new(6, 6), Cell::new(6, 5)]);
    }

    #[test]
    fn death_restarts() {
        let mut game = new_game();
        game.controls().set_paused(false);
        game.controls().set_direction(Direction::Left);
        game.score = 7;
        game.snake.len = 3;
        game.snake.cells[0] = Cell::new(0, 5);
        game.snake.cells[1] = Cell::new(1, 5);
        game.snake.cells[2] = Cell::new(2, 5);
        game.food = Cell::new(8, 8);
        let mut audio: Vec<Effect> = Vec::new();
        assert_eq!(game.update(&mut audio), Tick::Died);
        assert_eq!(game.snake.cells(), [Cell::new(5, 5)]);
        assert_eq!(game.score(), 0);
        assert!(game.controls().paused());
        assert_eq!(game.controls().direction(), Direction::Left);
        assert_eq!(audio, [Effect::SnakeDied]);
    }

    #[test]
    fn dead_head_off_grid() {
        let mut game = new_game();
        game.controls().set_direction(Direction::Up);
        game.snake.cells[0] = Cell::new(-1, 5);
        game.food = Cell::new(8, 8);
        let mut audio: Vec<Effect> = Vec::new();
        // Moving up keeps the head at x == -1
        assert_eq!(game.update(&mut audio), Tick::Died);
        assert_eq!(game.snake.cells(), [Cell::new(5, 5)]);
        assert_eq!(game.score(), 0);
        assert!(game.controls().paused());
    }

    #[test]
    fn draw() {
        let mut game = new_game();
        game.score = 3;
        game.food = Cell::new(2, 3);
        let mut ops: Vec<DrawOp> = Vec::new();
        game.draw(&mut ops);
        let paint = Paint {
            color: consts::FOREGROUND_COLOR,
        };
        pretty_assertions::assert_eq!(
            ops,
            [
                DrawOp::Background(consts::BACKGROUND_COLOR),
                DrawOp::Text(String::from("Score: 3"), 10, 10, paint),
                DrawOp::Rect(game.grid.cell_rect(Cell::new(5, 5)), paint),
                DrawOp::Rect(game.grid.cell_rect(Cell::new(2, 3)), paint),
            ]
        );
    }
}
