//! Placeholder views — bulk send, individual send, tracking, and
//! distribution reports share one layout: header, centered card with an
//! icon and an under-development message, inert call-to-action.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::Tab;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, tab: Tab) {
    let icon = match tab {
        Tab::BulkSend => "⇶",
        Tab::IndividualSend => "➤",
        Tab::Tracking => "◎",
        Tab::DistributionReports => "≡",
        Tab::List => "▤", // never reached; the list has its own view
    };

    let mut lines = vec![
        Line::from(Span::styled(tab.subtitle(), theme::muted())),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(icon, theme::muted())).alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled(tab.title(), theme::accent_bold())).alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled(
            "هذا القسم قيد التطوير - سيتم إضافة التفاصيل الكاملة قريباً",
            theme::muted(),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
    ];

    if let Some(action) = tab.action() {
        lines.push(
            Line::from(Span::styled(format!("[ {action} ]"), theme::muted()))
                .alignment(Alignment::Center),
        );
    }

    f.render_widget(Paragraph::new(lines), area);
}
