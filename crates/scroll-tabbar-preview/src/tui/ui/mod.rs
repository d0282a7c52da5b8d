/*
[INPUT]:  PreviewApp state for UI components
[OUTPUT]: UI component render functions and shared styles
[POS]:    TUI UI module root
[UPDATE]: When adding preview panels
*/

mod footer;
mod layout;
mod page;

use ratatui::style::{Color, Style};

pub(in crate::tui) use footer::draw_footer;
pub(in crate::tui) use layout::draw_ui;
pub(in crate::tui) use page::draw_page;

pub(crate) fn border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}
