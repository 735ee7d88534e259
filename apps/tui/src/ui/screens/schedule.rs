use crate::app::App;
use crate::ui::widgets::dropdown::render_dropdown;
use crate::ui::widgets::tables::render_schedule_table;
use lightsched_tui::cascade::Level;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

pub fn render_schedule(app: &App, area: Rect, f: &mut Frame<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Min(5)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(chunks[0]);

    for (level, column) in Level::ALL.into_iter().zip(columns.iter()) {
        render_dropdown(app, level, *column, f);
    }

    let state = app.form.state();
    let title = match (&state.place, &state.province) {
        (Some(place), Some(province)) => format!("Schedule for {place}, {province}"),
        _ => "Schedule".to_string(),
    };
    render_schedule_table(app.form.schedule(), &title, chunks[1], f);
}
