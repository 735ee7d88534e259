use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::{App, FilterState};
use crossterm::event::KeyCode;

pub fn handle_schedule_input(app: &mut App, key: KeyCode) {
    let level = app.focus;
    let total = app.visible_options(level).len();

    match key {
        KeyCode::Esc => {
            app.filter = FilterState::default();
        }
        KeyCode::Tab | KeyCode::Right => {
            app.focus_on(level.next());
        }
        KeyCode::BackTab | KeyCode::Left => {
            app.focus_on(level.previous());
        }
        KeyCode::Up => {
            let cursor = wrap_decrement(app.cursor(level), total);
            app.set_cursor(level, cursor);
        }
        KeyCode::Down => {
            let cursor = wrap_increment(app.cursor(level), total);
            app.set_cursor(level, cursor);
        }
        KeyCode::Home => {
            app.set_cursor(level, 0);
        }
        KeyCode::End => {
            app.set_cursor(level, total.saturating_sub(1));
        }
        KeyCode::Enter => {
            app.choose_highlighted();
        }
        KeyCode::Char('/') => {
            app.filter.editing = true;
            app.set_cursor(level, 0);
        }
        KeyCode::Char('r') => {
            app.init();
        }
        _ => {}
    }
}

/// Typing while the `/` filter is open.
pub fn handle_filter_input(app: &mut App, key: KeyCode) {
    let level = app.focus;

    match key {
        KeyCode::Esc => {
            app.filter = FilterState::default();
        }
        KeyCode::Enter => {
            app.filter.editing = false;
        }
        KeyCode::Backspace => {
            app.filter.query.pop();
            app.set_cursor(level, 0);
        }
        KeyCode::Up => {
            let total = app.visible_options(level).len();
            let cursor = wrap_decrement(app.cursor(level), total);
            app.set_cursor(level, cursor);
        }
        KeyCode::Down => {
            let total = app.visible_options(level).len();
            let cursor = wrap_increment(app.cursor(level), total);
            app.set_cursor(level, cursor);
        }
        KeyCode::Char(ch) => {
            app.filter.query.push(ch);
            app.set_cursor(level, 0);
        }
        _ => {}
    }
}
