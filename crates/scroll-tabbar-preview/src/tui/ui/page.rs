/*
[INPUT]:  Selected page index and titles
[OUTPUT]: Paged content placeholder beneath the tab bar
[POS]:    TUI UI page panel
[UPDATE]: When changing what the preview shows per page
*/

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::border_style;
use crate::tui::app::PreviewApp;

pub(in crate::tui) fn draw_page(frame: &mut Frame, area: Rect, app: &PreviewApp) {
    let title = app
        .titles()
        .get(app.selected())
        .map(String::as_str)
        .unwrap_or("-");

    let style = match app.page_background {
        Some(color) => Style::default().bg(color),
        None => Style::default(),
    };
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(border_style())
        .style(style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let vertical_pad = inner.height.saturating_sub(1) / 2;
    let text_area = Rect {
        y: inner.y + vertical_pad,
        height: inner.height.saturating_sub(vertical_pad).min(1),
        ..inner
    };
    let widget = Paragraph::new(format!("Page {title}"))
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(widget, text_area);
}
