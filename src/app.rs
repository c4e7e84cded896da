use crate::audio::{AudioSink, TerminalBell};
use crate::command::Command;
use crate::config::Config;
use crate::engine::{GameLoop, Worker};
use crate::game::grid::GridConfig;
use crate::game::{Game, GameSettings};
use crate::input::{Controls, GestureTranslator, Phase};
use crate::render::{RenderSink, TerminalSink};
use anyhow::Context;
use crossterm::{
    event::{
        read, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::sync::Arc;

/// Hosts the game in the terminal: sets up the loop, feeds it mouse & key
/// input, and stops & starts it as the terminal loses & regains focus
#[derive(Clone, Debug)]
pub(crate) struct App {
    config: Config,
}

impl App {
    pub(crate) fn new(config: Config) -> App {
        App { config }
    }

    pub(crate) fn run<B: Backend + Send + 'static>(
        self,
        terminal: Terminal<B>,
    ) -> anyhow::Result<()> {
        let size = terminal.size().context("failed to get terminal size")?;
        // A terminal cell is drawn as two square pixels stacked vertically.
        let grid = GridConfig::from_resolution(
            u32::from(size.width),
            u32::from(size.height) * 2,
            self.config.game.cells_wide,
            self.config.game.snake_capacity,
        )
        .context("terminal cannot fit the game grid")?;
        log::info!(
            "Terminal is {}x{}; using {}x{} grid with {}-pixel cells",
            size.width,
            size.height,
            grid.width(),
            grid.height(),
            grid.cell_size()
        );
        let settings = GameSettings {
            grid,
            capacity: self.config.game.snake_capacity,
            updates_per_second: self.config.game.updates_per_second,
        };
        let controls = Arc::new(Controls::new());
        let game = Game::new(settings, Arc::clone(&controls), StdRng::from_os_rng());
        let sink = TerminalSink::new(terminal, grid.pixel_size());
        let audio = TerminalBell::new(io::stdout(), self.config.sound.enabled());
        let mut game_loop = GameLoop::new(Worker::new(game, sink, audio));

        execute!(io::stdout(), EnableMouseCapture, EnableFocusChange)
            .context("failed to enable mouse capture")?;
        let r = game_loop
            .start()
            .context("failed to start game loop")
            .and_then(|()| process_input(&controls, &mut game_loop));
        game_loop.stop();
        if let Err(e) = execute!(io::stdout(), DisableMouseCapture, DisableFocusChange) {
            log::warn!("Failed to disable mouse capture: {e}");
        }
        r
    }
}

/// Read terminal events until the user quits
fn process_input<R, S, A>(
    controls: &Controls,
    game_loop: &mut GameLoop<R, S, A>,
) -> anyhow::Result<()>
where
    R: Rng + Send + 'static,
    S: RenderSink + 'static,
    A: AudioSink + 'static,
{
    let mut handler = EventHandler::new(controls);
    loop {
        let event = read().context("failed to read terminal event")?;
        match handler.handle_event(event) {
            Some(Lifecycle::Quit) => return Ok(()),
            Some(Lifecycle::Stop) => game_loop.stop(),
            Some(Lifecycle::Start) => game_loop.start().context("failed to resume game loop")?,
            None => (),
        }
    }
}

/// What the host should do with the game loop in response to an event
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Lifecycle {
    Quit,
    Stop,
    Start,
}

/// Routes terminal events to the game's controls
#[derive(Debug)]
struct EventHandler<'a> {
    controls: &'a Controls,
    gestures: GestureTranslator<'a>,
}

impl<'a> EventHandler<'a> {
    fn new(controls: &'a Controls) -> Self {
        EventHandler {
            controls,
            gestures: GestureTranslator::new(controls),
        }
    }

    fn handle_event(&mut self, event: Event) -> Option<Lifecycle> {
        match event {
            Event::Mouse(MouseEvent {
                kind, column, row, ..
            }) => {
                let phase = mouse_phase(kind)?;
                // Pixel coordinates, one column wide & half a row tall
                self.gestures
                    .handle(phase, f32::from(column), f32::from(row) * 2.0);
                None
            }
            Event::FocusLost => Some(Lifecycle::Stop),
            Event::FocusGained => Some(Lifecycle::Start),
            event => match Command::from_key_event(event.as_key_press_event()?)? {
                Command::Quit => Some(Lifecycle::Quit),
                Command::Steer(direction) => {
                    self.controls.steer(direction);
                    None
                }
                Command::Pause => {
                    self.controls.set_paused(true);
                    None
                }
            },
        }
    }
}

fn mouse_phase(kind: MouseEventKind) -> Option<Phase> {
    match kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Phase::Down),
        MouseEventKind::Drag(MouseButton::Left) => Some(Phase::Move),
        MouseEventKind::Up(MouseButton::Left) => Some(Phase::Up),
        _ => None,
    }
}
