//! Host runtime: mounts the root view on a real terminal and drives it.

use crate::config::Config;
use crate::shutdown::{ShutdownCoordinator, ShutdownPhase};
use crate::ui::app::App;
use crate::ui::events::EventHandler;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use ratatui::backend::Backend;
use ratatui::Terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// Why the event loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// The user asked to quit.
    Quit,
    /// The shutdown flag was raised (SIGINT, SIGTERM).
    Shutdown,
    /// Every event producer is gone.
    InputClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopSummary {
    pub exit: LoopExit,
    /// Frames drawn, the mount included.
    pub frames: u64,
}

pub fn run(config: &Config, shutdown: &ShutdownCoordinator) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal(config.ui.mouse)?;
    let tick_rate = config.tick_rate();
    let mut app = App::new(config);
    let events = EventHandler::new(tick_rate, shutdown.handle());
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    tracing::info!(size = ?app.size(), "counter view mounted");

    let result = event_loop(&mut terminal, &mut app, &events, shutdown, tick_rate);
    match &result {
        Ok(summary) => match summary.exit {
            LoopExit::Quit => tracing::info!(frames = summary.frames, "quit requested"),
            LoopExit::Shutdown => {
                tracing::info!(frames = summary.frames, "Graceful shutdown initiated by signal")
            }
            LoopExit::InputClosed => {
                tracing::warn!(frames = summary.frames, "terminal input closed, shutting down")
            }
        },
        Err(err) => tracing::error!(error = %err, "event loop failed"),
    }

    shutdown.signal();
    shutdown.advance(ShutdownPhase::Signaled);
    shutdown.advance(ShutdownPhase::StoppingInput);
    drop(events);
    tracing::info!(count = app.count(), "final counter value");
    drop(app);
    shutdown.advance(ShutdownPhase::RestoringTerminal);
    drop(guard);
    shutdown.advance(ShutdownPhase::Complete);
    result.map(|_| ())
}

/// Draw when the view is stale, then apply every queued event in order
/// before drawing again. A burst of clicks costs one frame.
pub fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &EventHandler,
    shutdown: &ShutdownCoordinator,
    tick_rate: Duration,
) -> Result<LoopSummary, B::Error> {
    let mut frames = 0;
    let exit = loop {
        if app.take_redraw() {
            terminal.draw(|frame| draw(frame, app))?;
            frames += 1;
        }
        // The flag wins: a signal also queues AppEvent::Shutdown, which quits.
        if shutdown.is_shutting_down() {
            break LoopExit::Shutdown;
        }
        if app.should_quit() {
            break LoopExit::Quit;
        }

        match events.next(tick_rate) {
            Ok(event) => {
                app.handle_event(event);
                while !app.should_quit() {
                    match events.try_next() {
                        Some(event) => app.handle_event(event),
                        None => break,
                    }
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break LoopExit::InputClosed,
        }
    };
    Ok(LoopSummary { exit, frames })
}
