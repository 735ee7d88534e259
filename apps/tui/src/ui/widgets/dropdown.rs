use crate::app::App;
use crate::ui::widgets::tables::scroll_offset;
use lightsched_tui::cascade::{Control, Level};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;
use throbber_widgets_tui::{Throbber, BRAILLE_SIX};

pub fn render_dropdown(app: &App, level: Level, area: Rect, f: &mut Frame<'_>) {
    let focused = app.focus == level;
    let dropdown = app.form.dropdown(level);
    let loading = app.form.is_loading(Control::from(level));

    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .title(level.label())
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let filter_line = focused && app.filter.is_active();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(u16::from(loading)),
            Constraint::Length(u16::from(filter_line)),
            Constraint::Min(0),
        ])
        .split(inner);

    if loading {
        let throbber = Throbber::default()
            .label("Loading...")
            .throbber_set(BRAILLE_SIX)
            .throbber_style(Style::default().fg(Color::Cyan));
        let mut state = app.throbber.clone();
        f.render_stateful_widget(throbber, chunks[0], &mut state);
    }

    if filter_line {
        let cursor = if app.filter.editing { "▏" } else { "" };
        let line = Line::from(vec![
            Span::styled("/", Style::default().fg(Color::Yellow)),
            Span::raw(app.filter.query.clone()),
            Span::styled(cursor, Style::default().fg(Color::Yellow)),
        ]);
        f.render_widget(Paragraph::new(line), chunks[1]);
    }

    let list_area = chunks[2];
    if dropdown.is_empty() {
        if !loading {
            let empty = Paragraph::new("(empty)").style(Style::default().fg(Color::DarkGray));
            f.render_widget(empty, list_area);
        }
        return;
    }

    let visible = app.visible_options(level);
    let cursor = app.cursor(level);
    let max_rows = list_area.height as usize;
    let offset = scroll_offset(visible.len(), max_rows, cursor);

    let items: Vec<ListItem<'_>> = visible
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_rows)
        .filter_map(|(row, &index)| {
            let option = dropdown.options().get(index)?;
            let marker = if index == dropdown.selected_index() && !option.disabled {
                "● "
            } else {
                "  "
            };

            let mut style = if option.disabled {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC)
            } else {
                Style::default()
            };
            if focused && row == cursor {
                style = style
                    .bg(Color::Rgb(0, 0, 238))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD);
            }

            Some(ListItem::new(format!("{marker}{}", option.label)).style(style))
        })
        .collect();

    if items.is_empty() {
        let none = Paragraph::new("(no matches)").style(Style::default().fg(Color::DarkGray));
        f.render_widget(none, list_area);
        return;
    }

    f.render_widget(List::new(items), list_area);
}
