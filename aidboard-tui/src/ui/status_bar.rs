//! Bottom status bar — key hints and the last status message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, StatusLevel, Tab};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    let hints = if app.modal.is_open() {
        " Esc:إغلاق"
    } else if app.active_tab == Tab::List {
        " 1-5:تبويب Tab:تنقل j/k:تحرك v:عرض e:تعديل a:إضافة /:بحث q:خروج"
    } else {
        " 1-5:تبويب Tab:تنقل q:خروج"
    };
    spans.push(Span::styled(hints, theme::muted()));

    if let Some((msg, level)) = &app.status_message {
        spans.push(Span::raw(" | "));
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
