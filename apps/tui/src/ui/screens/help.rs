use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

const KEYS: [(&str, &str); 11] = [
    ("Tab / ← / →", "Move between dropdowns"),
    ("↑ / ↓", "Move the cursor"),
    ("Home / End", "First / last option"),
    ("Enter", "Choose the highlighted option"),
    ("/", "Filter the focused dropdown"),
    ("Esc", "Clear the filter, or go back to the schedule"),
    ("r", "Reload provinces and start over"),
    ("1 / 2 / 3", "Schedule / Stage / Help"),
    ("? / F1", "Toggle this help"),
    (":", "Go to a path"),
    ("q", "Quit"),
];

pub fn render_help(area: Rect, f: &mut Frame<'_>) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let rows = KEYS
        .iter()
        .map(|(key, action)| Row::new(vec![Cell::from(*key).style(key_style), Cell::from(*action)]));

    let table = Table::new(rows, [Constraint::Length(14), Constraint::Min(20)])
        .block(Block::default().title("Help").borders(Borders::ALL))
        .column_spacing(2);

    f.render_widget(table, area);
}
