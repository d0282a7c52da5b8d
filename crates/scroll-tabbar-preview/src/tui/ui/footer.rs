/*
[INPUT]:  PreviewApp status message
[OUTPUT]: Hotkey footer with status line
[POS]:    TUI UI footer panel
[UPDATE]: When changing preview keybindings
*/

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::border_style;
use crate::tui::app::PreviewApp;

pub(in crate::tui) fn draw_footer(frame: &mut Frame, area: Rect, app: &PreviewApp) {
    let key_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let line = Line::from(vec![
        Span::styled("[Left/Right]", key_style),
        Span::raw(" Page  "),
        Span::styled("[1-9]", key_style),
        Span::raw(" Jump  "),
        Span::styled("[Click]", key_style),
        Span::raw(" Tap  "),
        Span::styled("[q]", key_style),
        Span::raw(" Quit  "),
        Span::raw(format!("Status: {}", app.status_message())),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title("Hotkeys");
    frame.render_widget(Paragraph::new(line).block(block), area);
}
