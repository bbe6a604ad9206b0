//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use reactive_counter::config::Config;
use reactive_counter::ui::app::App;
use reactive_counter::ui::render::draw;
use std::path::PathBuf;
use tempfile::TempDir;

pub const WIDTH: u16 = 80;
pub const HEIGHT: u16 = 24;

// -- App helpers --------------------------------------------------------------

pub fn make_app() -> App {
    let mut app = App::new(&Config::default());
    app.on_resize(WIDTH, HEIGHT);
    app
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

pub fn release_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release)
}

pub fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

// -- Rendering ----------------------------------------------------------------

/// Render `app` into an off-screen buffer and return its rows as text.
pub fn render_lines(app: &App) -> Vec<String> {
    let mut terminal = test_terminal();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    screen_lines(&terminal)
}

pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap()
}

/// Rows of whatever was last drawn to `terminal`.
pub fn screen_lines(terminal: &Terminal<TestBackend>) -> Vec<String> {
    terminal
        .backend()
        .buffer()
        .content()
        .chunks(WIDTH as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

pub fn rendered_text(app: &App) -> String {
    render_lines(app).join("\n")
}

// -- Config files -------------------------------------------------------------

pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
