use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_not_found(path: &str, area: Rect, f: &mut Frame<'_>) {
    let block = Block::default()
        .title("Not found")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let text = vec![
        Line::from(format!("Nothing lives at {path}")),
        Line::from(""),
        Line::from("Press Esc to go back to the schedule."),
    ];

    f.render_widget(
        Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center),
        area,
    );
}
