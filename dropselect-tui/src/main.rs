mod app;
mod draw;
mod paths;
mod terminal;

use std::fs::{self, File};
use std::path::PathBuf;

use dropselect::{ConfigError, OptionSet};
use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;

use crate::app::App;
use crate::terminal::Terminal;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to load options: {0}")]
    Options(#[from] ConfigError),

    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

fn init_logging() -> Result<PathBuf, DemoError> {
    let path = paths::log_file();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(&path)?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), file)?;
    Ok(path)
}

fn run() -> Result<(), DemoError> {
    let log_path = init_logging()?;
    log::info!("dropselect-tui starting, log at {}", log_path.display());

    let options = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("loading options from {}", path);
            Some(OptionSet::load(&path)?)
        }
        None => None,
    };

    let mut app = App::new(options)?;
    let mut terminal = Terminal::new()?;
    app.run(&mut terminal)
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
