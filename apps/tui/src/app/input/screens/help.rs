use crate::app::state::App;
use crossterm::event::KeyCode;
use lightsched_tui::router::View;

/// `?` and F1 toggle the help view. Returns true when the key was consumed.
pub fn handle_help_toggle(app: &mut App, key: KeyCode) -> bool {
    if !matches!(key, KeyCode::Char('?') | KeyCode::F(1)) {
        return false;
    }

    if app.current_view() == &View::Help {
        app.navigate("/");
    } else {
        app.navigate("/help");
    }
    true
}
