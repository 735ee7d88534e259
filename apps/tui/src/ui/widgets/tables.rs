use lightsched_tui::schedule::ScheduleTable;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

/// First row to draw so that `selected_index` stays inside the window.
pub const fn scroll_offset(
    total_rows: usize,
    max_visible_rows: usize,
    selected_index: usize,
) -> usize {
    if total_rows <= max_visible_rows || selected_index < max_visible_rows {
        return 0;
    }

    selected_index + 1 - max_visible_rows
}

const SLOT_WIDTH: u16 = 12;

pub fn render_schedule_table(table: &ScheduleTable, title: &str, area: Rect, f: &mut Frame<'_>) {
    let block = Block::default().title(title.to_string()).borders(Borders::ALL);

    if table.is_empty() {
        let paragraph = Paragraph::new("Choose a province, municipality and place.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let columns = table.max_slots();
    let mut header = vec![Cell::from("Date")];
    header.extend((1..=columns).map(|n| Cell::from(format!("Slot {n}"))));
    let header = Row::new(header).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows = table.rows().iter().map(|day| {
        let mut cells = vec![Cell::from(day.label.clone())];
        cells.extend(day.slots.iter().map(|slot| Cell::from(slot.clone())));
        Row::new(cells)
    });

    let date_width = table
        .rows()
        .iter()
        .map(|day| day.label.chars().count())
        .max()
        .unwrap_or(4);
    let mut widths = vec![Constraint::Length(u16::try_from(date_width).unwrap_or(u16::MAX))];
    widths.extend(std::iter::repeat(Constraint::Length(SLOT_WIDTH)).take(columns));

    let widget = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(2);

    f.render_widget(widget, area);
}
