use crate::app::App;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_status(app: &App, area: Rect, f: &mut Frame<'_>) {
    let block = Block::default().title("Stage").borders(Borders::ALL);
    let label = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let lines = match app.stage() {
        Some(snapshot) => vec![
            Line::from(vec![
                Span::styled("Stage: ", label),
                Span::raw(snapshot.status.stage.to_string()),
            ]),
            Line::from(vec![
                Span::styled("Description: ", label),
                Span::raw(snapshot.status.description.clone()),
            ]),
            Line::from(vec![
                Span::styled("Last update: ", label),
                Span::raw(snapshot.received_at.format("%H:%M:%S").to_string()),
            ]),
            Line::from(vec![
                Span::styled("Updates received: ", label),
                Span::raw(snapshot.revision.to_string()),
            ]),
        ],
        None => vec![Line::from(Span::styled(
            "No stage received yet. The stage service is polled in the background.",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
