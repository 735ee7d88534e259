use crate::app::App;
use lightsched_tui::router::{link_target, Router, NAV_LINKS};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Stage indicator on the left, numbered navigation links on the right.
pub fn render_header(app: &App, area: Rect, f: &mut Frame<'_>) {
    let block = Block::default()
        .title("LightSched")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(inner);

    let snapshot = app.stage();
    let stage_style = match &snapshot {
        Some(snapshot) if snapshot.status.stage > 0 => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
        Some(_) => Style::default().fg(Color::Green),
        None => Style::default().fg(Color::DarkGray),
    };
    let mut stage_line = vec![Span::styled(app.stage_label(), stage_style)];
    if let Some(snapshot) = snapshot {
        stage_line.push(Span::raw(format!("  {}", snapshot.status.description)));
    }
    if app.is_loading() {
        stage_line.push(Span::styled("  loading", Style::default().fg(Color::Cyan)));
    }
    f.render_widget(Paragraph::new(Line::from(stage_line)), chunks[0]);

    let current = app.current_view();
    let mut spans = Vec::new();
    for (i, link) in NAV_LINKS.iter().enumerate() {
        let active = Router::resolve(link_target(link.href)) == *current;
        let style = if active {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!("{}", i + 1), Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(format!(" {}   ", link.label), style));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Right),
        chunks[1],
    );
}
