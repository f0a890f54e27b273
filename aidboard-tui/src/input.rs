//! Keyboard input dispatch — modal first, then search capture, then
//! global keys, then tab-specific handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Tab};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. An open modal consumes all input.
    if app.modal.is_open() {
        handle_modal_key(app, key);
        return;
    }

    // 2. Search capture takes raw characters before global keys.
    if app.active_tab == Tab::List && app.list.search_editing {
        handle_search_key(app, key);
        return;
    }

    // 3. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Char('1') => { app.active_tab = Tab::List; return; }
        KeyCode::Char('2') => { app.active_tab = Tab::BulkSend; return; }
        KeyCode::Char('3') => { app.active_tab = Tab::IndividualSend; return; }
        KeyCode::Char('4') => { app.active_tab = Tab::Tracking; return; }
        KeyCode::Char('5') => { app.active_tab = Tab::DistributionReports; return; }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_tab = app.active_tab.prev();
            } else {
                app.active_tab = app.active_tab.next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.active_tab = app.active_tab.prev();
            return;
        }
        _ => {}
    }

    // 4. Tab-specific keys. The four stub views take no input.
    if app.active_tab == Tab::List {
        handle_list_key(app, key);
    }
}

fn handle_modal_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        // Cancel is the only wired button; confirm is a placeholder.
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
            app.dismiss_modal();
        }
        _ => {}
    }
}

fn handle_search_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            app.list.search_editing = false;
        }
        KeyCode::Backspace => {
            app.list.search_input.pop();
        }
        KeyCode::Char(c) => {
            app.list.search_input.push(c);
        }
        _ => {}
    }
}

fn handle_list_key(app: &mut AppState, key: KeyEvent) {
    let row_count = app.dataset.packages.len();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if row_count > 0 && app.list.cursor + 1 < row_count {
                app.list.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.list.cursor = app.list.cursor.saturating_sub(1);
        }
        KeyCode::Char('/') => {
            app.list.search_editing = true;
        }
        KeyCode::Char('a') => {
            app.open_add();
        }
        KeyCode::Char('v') | KeyCode::Enter => {
            if row_count > 0 {
                app.open_view(app.list.cursor);
            }
        }
        KeyCode::Char('e') => {
            if row_count > 0 {
                app.open_edit(app.list.cursor);
            }
        }
        KeyCode::Char('t') => {
            // Track affordance exists in the row but has no behavior yet.
            app.set_warning("تتبع الطرد غير متاح بعد");
        }
        _ => {}
    }
}
