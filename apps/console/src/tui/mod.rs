//! # Terminal UI
//!
//! ratatui front end for the console. [`run`] owns the terminal for the
//! lifetime of the session and restores it on the way out, also on error.
//!
//! ## Modules
//! - [`app`] - event loop, action handling, background requests
//! - [`events`] - `AppEvent`, `Action` and the key mapper
//! - [`views`] - stateless render functions
//! - [`layout`] / [`theme`] - screen regions and palettes
//! - [`widgets`] - text input buffer

pub mod app;
pub mod events;
pub mod layout;
pub mod theme;
pub mod views;
pub mod widgets;

use std::io::{self, Stdout};

use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{error, info};

use beauty_api::ApiClient;

use crate::config::ConsoleConfig;
use crate::controller::Controller;
use crate::error::AppResult;
use crate::state::UiState;
use app::App;

type ConsoleTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Runs the interactive console until the user quits.
pub async fn run(client: ApiClient, config: &ConsoleConfig) -> AppResult<()> {
    let api_url = client.base_url().to_string();
    info!(api_url = %api_url, theme = %config.ui.theme, "Starting console");

    let controller = Controller::new(client.products(), UiState::new(config.ui.theme));
    let mut app = App::new(controller, api_url);

    let mut terminal = setup_terminal()?;
    let result = app.run(&mut terminal, config.tick_rate()).await;
    restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        error!(error = %e, "Console exited with error");
    }
    result
}

fn setup_terminal() -> AppResult<ConsoleTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut ConsoleTerminal) -> AppResult<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
