/*
[INPUT]:  PreviewConfig, crossterm input events, frame interval
[OUTPUT]: Ratatui-based preview run loop
[POS]:    TUI runtime loop
[UPDATE]: When changing the frame loop or input plumbing
*/

use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::crossterm::event::Event as CrosstermEvent;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::app::PreviewApp;
use super::events::handle_event;
use super::terminal::TerminalGuard;
use super::ui::draw_ui;
use crate::config::PreviewConfig;

pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);

pub enum UiEvent {
    Input(CrosstermEvent),
}

pub async fn run_preview(config: PreviewConfig) -> Result<()> {
    let mut terminal = TerminalGuard::new().context("initialize terminal")?;
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let input_shutdown = CancellationToken::new();
    let input_shutdown_clone = input_shutdown.clone();

    tokio::task::spawn_blocking(move || {
        while !input_shutdown_clone.is_cancelled() {
            if ratatui::crossterm::event::poll(INPUT_POLL_INTERVAL).unwrap_or(false) {
                if let Ok(event) = ratatui::crossterm::event::read() {
                    if event_tx.send(UiEvent::Input(event)).is_err() {
                        break;
                    }
                }
            }
        }
    });

    let mut app = PreviewApp::new(config);
    let result = drive(terminal.terminal_mut(), &mut app, &mut event_rx, FRAME_INTERVAL).await;

    input_shutdown.cancel();
    result
}

/// Draws a frame, waits for the next frame tick or input, and repeats until
/// quit is requested or the input channel closes.
pub async fn drive<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut PreviewApp,
    events: &mut mpsc::UnboundedReceiver<UiEvent>,
    frame_interval: Duration,
) -> Result<()> {
    info!(
        tab_count = app.titles().len(),
        selected = app.selected(),
        "preview started"
    );
    let mut tick = tokio::time::interval(frame_interval);

    while !app.should_quit() {
        app.tick(Instant::now());
        terminal
            .draw(|frame| draw_ui(frame, app))
            .map_err(|err| anyhow!("draw frame: {err}"))?;

        tokio::select! {
            _ = tick.tick() => {}
            maybe_event = events.recv() => {
                match maybe_event {
                    Some(UiEvent::Input(event)) => {
                        if handle_event(app, event) {
                            app.quit();
                        }
                    }
                    None => app.quit(),
                }
            }
        }
    }

    info!(selected = app.selected(), "preview stopped");
    Ok(())
}
