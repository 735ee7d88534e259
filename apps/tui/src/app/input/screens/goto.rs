use crate::app::state::App;
use crossterm::event::KeyCode;

/// The `:` path prompt. Enter routes to what was typed, Esc abandons it.
pub fn handle_goto_input(app: &mut App, key: KeyCode) {
    let Some(input) = app.goto_input.as_mut() else {
        return;
    };

    match key {
        KeyCode::Esc => {
            app.goto_input = None;
        }
        KeyCode::Enter => {
            let path = std::mem::take(input);
            app.goto_input = None;
            app.navigate(&path);
        }
        KeyCode::Backspace => {
            input.pop();
        }
        KeyCode::Char(ch) => {
            input.push(ch);
        }
        _ => {}
    }
}
