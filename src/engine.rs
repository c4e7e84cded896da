use crate::audio::AudioSink;
use crate::consts;
use crate::game::{Game, Tick};
use crate::input::Controls;
use crate::render::RenderSink;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;
use thiserror::Error;

/// Everything the loop worker owns: the game and what it draws & plays
/// sounds on
#[derive(Debug)]
pub(crate) struct Worker<R, S, A> {
    game: Game<R>,
    sink: S,
    audio: A,
}

impl<R, S, A> Worker<R, S, A>
where
    R: Rng,
    S: RenderSink,
    A: AudioSink,
{
    pub(crate) fn new(game: Game<R>, sink: S, audio: A) -> Self {
        Worker { game, sink, audio }
    }

    /// Run the game until `running` is cleared
    fn run(&mut self, running: &AtomicBool) {
        while running.load(Ordering::Acquire) {
            self.step(Instant::now());
        }
    }

    /// Do one pass of the loop at time `now`: draw if gameplay is paused,
    /// update & draw if an update is due, otherwise wait for the update
    fn step(&mut self, now: Instant) {
        if self.game.controls().paused() {
            self.draw();
            thread::sleep(consts::PAUSED_FRAME_PERIOD);
        } else if self.game.update_due(now) {
            match self.game.update(&mut self.audio) {
                Tick::Moved => (),
                Tick::Ate => log::debug!("Score is now {}", self.game.score()),
                Tick::Died => log::debug!("Game restarted"),
            }
            self.draw();
        } else {
            thread::sleep(self.game.until_update(now));
        }
    }

    fn draw(&mut self) {
        if let Some(mut surface) = self.sink.begin_frame() {
            self.game.draw(&mut surface);
            self.sink.end_frame(surface);
        } else {
            log::trace!("No surface available; frame skipped");
        }
    }
}

/// Runs a [`Worker`] on its own thread, which can be stopped & restarted
#[derive(Debug)]
pub(crate) struct GameLoop<R, S, A> {
    state: LoopState<R, S, A>,
    controls: Arc<Controls>,
}

#[derive(Debug)]
enum LoopState<R, S, A> {
    Stopped(Box<Worker<R, S, A>>),
    Running {
        running: Arc<AtomicBool>,
        handle: JoinHandle<Box<Worker<R, S, A>>>,
    },
    /// The worker thread panicked, taking the game with it
    Lost,
}

impl<R, S, A> GameLoop<R, S, A>
where
    R: Rng + Send + 'static,
    S: RenderSink + 'static,
    A: AudioSink + 'static,
{
    pub(crate) fn new(worker: Worker<R, S, A>) -> Self {
        let controls = Arc::clone(worker.game.controls());
        GameLoop {
            state: LoopState::Stopped(Box::new(worker)),
            controls,
        }
    }

    pub(crate) fn is_running(&self) -> bool {
        matches!(self.state, LoopState::Running { .. })
    }

    /// Start running the game on a new thread.  Does nothing if it is
    /// already running.
    pub(crate) fn start(&mut self) -> Result<(), LoopError> {
        if self.is_running() {
            return Ok(());
        }
        let LoopState::Stopped(mut worker) = std::mem::replace(&mut self.state, LoopState::Lost)
        else {
            return Err(LoopError::WorkerLost);
        };
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);
        let r = thread::Builder::new()
            .name(String::from("game-loop"))
            .spawn(move || {
                worker.run(&flag);
                worker
            });
        match r {
            Ok(handle) => {
                log::info!("Game loop started");
                self.state = LoopState::Running { running, handle };
                Ok(())
            }
            // The worker is dropped along with the closure it was moved into.
            Err(e) => {
                log::error!("Failed to spawn game loop thread: {e}");
                Err(LoopError::Spawn(e))
            }
        }
    }

    /// Stop the game thread and wait for it to finish.  Gameplay is paused
    /// so that it does not resume until the next input.
    pub(crate) fn stop(&mut self) {
        match std::mem::replace(&mut self.state, LoopState::Lost) {
            LoopState::Running { running, handle } => {
                running.store(false, Ordering::Release);
                match handle.join() {
                    Ok(worker) => {
                        log::info!("Game loop stopped");
                        self.state = LoopState::Stopped(worker);
                    }
                    Err(_) => log::error!("Game loop thread panicked; game state lost"),
                }
            }
            other => self.state = other,
        }
        self.controls.set_paused(true);
    }
}

impl<R, S, A> Drop for GameLoop<R, S, A> {
    /// Stop the game thread and wait for it, so that nothing is drawn once
    /// the loop is gone
    fn drop(&mut self) {
        if let LoopState::Running { running, handle } =
            std::mem::replace(&mut self.state, LoopState::Lost)
        {
            running.store(false, Ordering::Release);
            if handle.join().is_err() {
                log::error!("Game loop thread panicked while shutting down");
            }
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum LoopError {
    #[error("failed to spawn game loop thread")]
    Spawn(#[source] std::io::Error),
    #[error("game loop thread was lost to an earlier failure")]
    WorkerLost,
}
