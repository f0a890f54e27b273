//! List view — search box, stat cards, and the package table joined
//! against the beneficiary registry.

use aidboard_core::format_date_arabic;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header: subtitle + actions
            Constraint::Length(2), // search box
            Constraint::Length(3), // stat cards
            Constraint::Min(2),    // table
        ])
        .split(area);

    render_header(f, chunks[0], app);
    render_search(f, chunks[1], app);
    render_stats(f, chunks[2], app);
    render_table(f, chunks[3], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &AppState) {
    let lines = vec![
        Line::from(Span::styled(app.active_tab.subtitle(), theme::muted())),
        Line::from(vec![
            Span::styled("[a] إضافة قالب جديد", theme::accent()),
            Span::raw("   "),
            // Export renders but is not wired to anything yet.
            Span::styled("تصدير القائمة", theme::muted()),
        ]),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_search(f: &mut Frame, area: Rect, app: &AppState) {
    let editing = app.list.search_editing;
    let prompt_style = if editing {
        theme::accent_bold()
    } else {
        theme::muted()
    };

    let mut spans = vec![Span::styled("بحث: ", prompt_style)];
    if app.list.search_input.is_empty() && !editing {
        spans.push(Span::styled(
            "البحث في الطرود (الاسم، النوع، المؤسسة)... [/]",
            theme::muted(),
        ));
    } else {
        spans.push(Span::styled(app.list.search_input.as_str(), theme::text()));
        if editing {
            spans.push(Span::styled("▏", theme::accent()));
        }
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_stats(f: &mut Frame, area: Rect, app: &AppState) {
    let stats = app.stats();
    let cards = [
        ("إجمالي الطرود", stats.total, theme::accent()),
        ("تم التسليم", stats.delivered, theme::positive()),
        ("قيد التوصيل", stats.in_delivery, theme::warning()),
        ("في الانتظار", stats.pending, theme::muted()),
    ];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (i, (label, value, style)) in cards.into_iter().enumerate() {
        let lines = vec![
            Line::from(Span::styled(label, theme::muted())),
            Line::from(Span::styled(
                value.to_string(),
                style.add_modifier(Modifier::BOLD),
            )),
        ];
        f.render_widget(Paragraph::new(lines), columns[i]);
    }
}

fn render_table(f: &mut Frame, area: Rect, app: &mut AppState) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        format!("قائمة الطرود ({})", app.dataset.packages.len()),
        theme::accent_bold(),
    )));
    lines.push(Line::from(Span::styled(
        "الطرد │ النوع │ المستفيد │ تاريخ الإنشاء │ الحالة │ [v]عرض [e]تعديل [t]تتبع",
        theme::muted(),
    )));

    // Two header lines above the rows.
    let visible_height = area.height.saturating_sub(2) as usize;
    app.list.ensure_visible(visible_height);

    let start = app.list.scroll_offset;
    let end = (start + visible_height).min(app.dataset.packages.len());

    for i in start..end {
        let pkg = &app.dataset.packages[i];
        let is_cursor = i == app.list.cursor;

        let row_style = if is_cursor {
            theme::accent().add_modifier(Modifier::REVERSED)
        } else {
            theme::text()
        };
        let badge = if is_cursor {
            row_style
        } else {
            theme::badge_style(pkg.status.tone())
        };

        lines.push(Line::from(vec![
            Span::styled(
                format!(
                    "{} — {}",
                    truncate(&pkg.name, 24),
                    truncate(&pkg.description, 30)
                ),
                row_style,
            ),
            Span::styled(" │ ", theme::muted()),
            Span::styled(truncate(&pkg.kind, 10), row_style),
            Span::styled(" │ ", theme::muted()),
            Span::styled(
                truncate(app.dataset.beneficiary_name(&pkg.beneficiary_id), 18),
                row_style,
            ),
            Span::styled(" │ ", theme::muted()),
            Span::styled(format_date_arabic(pkg.created_at), row_style),
            Span::styled(" │ ", theme::muted()),
            Span::styled(pkg.status.label(), badge),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}

/// Char-based truncation; byte slicing would split Arabic letters.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_is_char_safe_for_arabic() {
        let s = "سلة غذائية رمضانية كاملة";
        let t = truncate(s, 10);
        assert_eq!(t.chars().count(), 10);
        assert!(t.ends_with('…'));
    }

    #[test]
    fn short_strings_pass_through() {
        assert_eq!(truncate("طرد", 10), "طرد");
    }
}
