//! Chess session GUI
//!
//! A graphical interface for:
//! - Playing both sides of a game by drag and drop or click and click
//! - Stepping backward and forward through the moves played
//! - Following the game status and move history
//!
//! Usage: `chess_session_gui [config.toml]`

mod app;
mod board;
mod config;
mod sizing;
mod styles;

use anyhow::Context;
use app::ChessApp;
use chess_session::{Session, StandardRules};
use config::AppConfig;
use iced::application;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // RUST_LOG overrides the default filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("chess_session=info,chess_session_gui=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::load(Path::new(&path))
            .with_context(|| format!("loading config {path}"))?,
        None => AppConfig::default(),
    };

    let session = Session::new(StandardRules::new(), &config.session)
        .context("loading start position")?;
    let board = config.board;

    application("Chess Session", ChessApp::update, ChessApp::view)
        .subscription(ChessApp::subscription)
        .theme(ChessApp::theme)
        .window_size((board.window_width, board.window_height))
        .run_with(move || ChessApp::new(session, board))?;

    Ok(())
}
