// UI module for lightsched
// Header, the routed view and the footer status line

pub mod screens;
pub mod widgets;

use crate::app::App;
use lightsched_tui::router::View;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(2),
        ])
        .split(f.area());

    widgets::header::render_header(app, chunks[0], f);

    match app.current_view() {
        View::Schedule => screens::schedule::render_schedule(app, chunks[1], f),
        View::Status => screens::status::render_status(app, chunks[1], f),
        View::Help => screens::help::render_help(chunks[1], f),
        View::NotFound { path } => screens::not_found::render_not_found(path, chunks[1], f),
    }

    render_footer(app, chunks[2], f);

    if let Some(input) = &app.goto_input {
        widgets::popup::render_goto_prompt(input, f);
    }
}

fn render_footer(app: &App, area: Rect, f: &mut Frame<'_>) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let line = if app.status_message.is_empty() {
        Line::from(vec![
            Span::styled("Enter", key_style),
            Span::raw(": Choose   "),
            Span::styled("/", key_style),
            Span::raw(": Filter   "),
            Span::styled("r", key_style),
            Span::raw(": Reload   "),
            Span::styled("?", key_style),
            Span::raw(": Help   "),
            Span::styled("q", key_style),
            Span::raw(": Quit"),
        ])
    } else {
        Line::from(Span::raw(app.status_message.clone()))
    };

    f.render_widget(
        Paragraph::new(line)
            .block(Block::default().borders(Borders::TOP))
            .alignment(ratatui::layout::Alignment::Center),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::tests::{offline_app, offline_app_with_stage, populate};
    use lightsched_tui::StageStatus;
    use lightsched_tui::cascade::Request;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(app: &App) -> Result<String, Box<dyn std::error::Error>> {
        let mut terminal = Terminal::new(TestBackend::new(120, 32))?;
        terminal.draw(|f| ui(app, f))?;
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        Ok(text)
    }

    #[tokio::test]
    async fn schedule_view_shows_dropdowns_and_stage() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = offline_app();
        app.bootstrap("/");
        populate(&mut app, Request::Provinces, &["Gauteng", "Western Cape"]);

        let text = screen_text(&app)?;
        assert!(text.contains("Stage unknown"));
        assert!(text.contains("Choose Province"));
        assert!(text.contains("Western Cape"));
        assert!(text.contains("Municipality"));
        Ok(())
    }

    #[tokio::test]
    async fn unknown_routes_render_the_not_found_view() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = offline_app();
        app.bootstrap("/outages");

        let text = screen_text(&app)?;
        assert!(text.contains("Nothing lives at /outages"));
        Ok(())
    }

    #[tokio::test]
    async fn header_shows_stage_and_description() -> Result<(), Box<dyn std::error::Error>> {
        let (mut app, writer) = offline_app_with_stage();
        app.bootstrap("/");
        writer.publish(StageStatus {
            stage: 2,
            description: "Stage 2 Loadshedding".to_string(),
        });

        let text = screen_text(&app)?;
        assert!(text.contains("Stage 2"));
        assert!(text.contains("Stage 2 Loadshedding"));
        assert!(!text.contains("Stage unknown"));
        Ok(())
    }
}
