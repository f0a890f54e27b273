//! Top-level UI layout — tab bar, active view, status bar, modal overlay.

pub mod list_view;
pub mod modal;
pub mod status_bar;
pub mod stub_view;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, Tab};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &mut AppState) {
    // Split: 1-line tab bar + main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_tab_bar(f, chunks[0], app);
    draw_view(f, chunks[1], app);
    status_bar::render(f, chunks[2], app);

    // Modal sits on top of everything.
    if app.modal.is_open() {
        modal::render(f, chunks[1], app);
    }
}

fn render_tab_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();
    for i in 0..5 {
        let tab = Tab::from_index(i).unwrap();
        let style = if tab == app.active_tab {
            theme::accent_bold()
        } else {
            theme::muted()
        };
        spans.push(Span::styled(format!(" {}:{} ", i + 1, tab.label()), style));
        if i < 4 {
            spans.push(Span::styled("│", theme::muted()));
        }
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the active view inside its titled border.
fn draw_view(f: &mut Frame, area: Rect, app: &mut AppState) {
    let tab = app.active_tab;
    let active = !app.modal.is_open();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(active))
        .title(format!(" {} ", tab.title()))
        .title_style(theme::panel_title(active));

    let inner = block.inner(area);
    f.render_widget(block, area);

    match tab {
        Tab::List => list_view::render(f, inner, app),
        Tab::BulkSend | Tab::IndividualSend | Tab::Tracking | Tab::DistributionReports => {
            stub_view::render(f, inner, tab)
        }
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
