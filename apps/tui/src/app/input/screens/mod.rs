use crate::app::state::App;
use crossterm::event::KeyCode;
use lightsched_tui::router::View;

mod goto;
mod help;
mod schedule;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if app.goto_input.is_some() {
        goto::handle_goto_input(app, key);
        return;
    }

    if app.filter.editing {
        schedule::handle_filter_input(app, key);
        return;
    }

    if help::handle_help_toggle(app, key) {
        return;
    }

    match key {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char(':') => {
            app.goto_input = Some(String::new());
            return;
        }
        KeyCode::Char(digit @ '1'..='9') => {
            let index = digit as usize - '1' as usize;
            app.follow_link(index);
            return;
        }
        _ => {}
    }

    match app.current_view() {
        View::Schedule => schedule::handle_schedule_input(app, key),
        View::Status | View::Help | View::NotFound { .. } => {
            if key == KeyCode::Esc {
                app.navigate("/");
            }
        }
    }
}
