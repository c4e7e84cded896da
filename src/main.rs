mod app;
mod audio;
mod command;
mod config;
mod consts;
mod engine;
mod game;
mod input;
mod render;
mod util;
use crate::app::App;
use crate::config::{Config, LogConfig};
use anyhow::Context;
use simplelog::WriteLogger;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("swipesnake: {e:?}");
            return ExitCode::from(2);
        }
    };
    if let Err(e) = init_logging(&config.log) {
        eprintln!("swipesnake: logging disabled: {e:?}");
    }
    log::info!("Starting swipesnake");
    let terminal = ratatui::init();
    let r = App::new(config).run(terminal);
    ratatui::restore();
    match r {
        Ok(()) => {
            log::info!("Exiting");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Fatal error: {e:#}");
            eprintln!("swipesnake: {e:?}");
            ExitCode::from(2)
        }
    }
}

fn load_config() -> anyhow::Result<Config> {
    let path = Config::path()?;
    Config::load(&path, true).with_context(|| format!("failed to load {}", path.display()))
}

/// Send log messages to the configured log file.  The terminal is taken up by
/// the game, so nothing is logged there.
fn init_logging(cfg: &LogConfig) -> anyhow::Result<()> {
    let path = cfg
        .file()
        .context("failed to determine path to local data directory")?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent)?;
    }
    let file = fs_err::File::create(&path)?;
    WriteLogger::init(cfg.level, simplelog::Config::default(), file)
        .context("failed to install logger")?;
    Ok(())
}
