//! Modal dialog — add/edit/view placeholder form over the active view.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{AppState, Modal, ModalMode};
use crate::theme;
use crate::ui::centered_rect;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let Modal::Open { mode, target } = app.modal else {
        return;
    };

    let popup = centered_rect(60, 50, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(format!(" {} ", mode.title()))
        .title_style(theme::accent_bold());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let mut lines: Vec<Line> = vec![Line::from("")];

    // Edit/view carry the selected package; add starts blank.
    if let Some(pkg) = target.and_then(|i| app.dataset.packages.get(i)) {
        lines.push(
            Line::from(Span::styled(pkg.name.as_str(), theme::text())).alignment(Alignment::Center),
        );
        lines.push(
            Line::from(Span::styled(pkg.description.as_str(), theme::muted()))
                .alignment(Alignment::Center),
        );
        lines.push(Line::from(""));
    }

    let body = match mode {
        ModalMode::Add => "نموذج الإضافة",
        ModalMode::Edit => "نموذج التعديل",
        ModalMode::View => "نموذج العرض",
    };
    lines.push(Line::from(Span::styled(body, theme::muted())).alignment(Alignment::Center));
    lines.push(
        Line::from(Span::styled(
            "سيتم تطوير النماذج التفاعلية هنا",
            theme::muted(),
        ))
        .alignment(Alignment::Center),
    );
    lines.push(Line::from(""));

    // Buttons: cancel always; confirm only outside view mode (inert).
    let mut buttons = vec![Span::styled("[Esc] إلغاء", theme::accent())];
    if let Some(confirm) = mode.confirm_label() {
        buttons.push(Span::raw("   "));
        buttons.push(Span::styled(format!("[ {confirm} ]"), theme::muted()));
    }
    lines.push(Line::from(buttons).alignment(Alignment::Center));

    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(para, inner);
}
