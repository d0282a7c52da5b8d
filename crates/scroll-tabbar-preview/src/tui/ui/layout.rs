/*
[INPUT]:  Frame area and PreviewApp
[OUTPUT]: Screen split into tab bar, paged content, and footer
[POS]:    TUI UI layout
[UPDATE]: When changing the preview screen composition
*/

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use super::{draw_footer, draw_page};
use crate::tui::app::{PreviewApp, tab_bar};

pub(in crate::tui) fn draw_ui(frame: &mut Frame, app: &mut PreviewApp) {
    let [bar_area, page_area, footer_area] = Layout::vertical([
        Constraint::Length(app.style.height()),
        Constraint::Min(3),
        Constraint::Length(3),
    ])
    .areas(frame.area());

    let bar = tab_bar(&app.selection, &app.titles, &app.style);
    frame.render_stateful_widget(&bar, bar_area, &mut app.tab_state);

    draw_page(frame, page_area, app);
    draw_footer(frame, footer_area, app);
}
