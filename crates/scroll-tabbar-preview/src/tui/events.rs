/*
[INPUT]:  Crossterm key and mouse events
[OUTPUT]: Paging, tab taps, and quit requests applied to PreviewApp
[POS]:    TUI event routing
[UPDATE]: When changing preview keybindings
*/

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

use super::app::PreviewApp;

/// Handles one input event for the preview.
///
/// Returns `true` if quit is requested, `false` otherwise.
pub(super) fn handle_event(app: &mut PreviewApp, event: Event) -> bool {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(mouse) => {
            handle_mouse_event(app, mouse);
            false
        }
        _ => false,
    }
}

fn handle_key_event(app: &mut PreviewApp, key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.quit();
            true
        }
        KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => {
            app.next_page();
            false
        }
        KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => {
            app.previous_page();
            false
        }
        KeyCode::Home => {
            app.jump_to(0);
            false
        }
        KeyCode::End => {
            app.jump_to(app.titles().len().saturating_sub(1));
            false
        }
        KeyCode::Char(ch @ '1'..='9') => {
            if let Some(digit) = ch.to_digit(10) {
                app.jump_to(digit as usize - 1);
            }
            false
        }
        _ => false,
    }
}

fn handle_mouse_event(app: &mut PreviewApp, mouse: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        app.click(mouse.column, mouse.row);
    }
}
