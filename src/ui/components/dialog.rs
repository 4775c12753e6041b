//! Modal dialog overlays

use crate::state::LocationDialog;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Centered rect of the given size, clamped to the screen
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Render an error notification centered on the screen
pub fn render_error_dialog(frame: &mut Frame, message: &str) {
    let area = frame.area();
    let width = 60.min(area.width.saturating_sub(4)).max(20);
    // Rough height: message wraps inside the border, plus the hint line
    let inner_width = width.saturating_sub(4) as usize;
    let lines = message.chars().count().div_ceil(inner_width.max(1)) as u16;
    let dialog_area = centered_rect(area, width, lines + 4);

    frame.render_widget(Clear, dialog_area);

    let hint = Line::from(vec![
        Span::raw("Press "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to dismiss"),
    ]);

    let mut content: Vec<Line> = message.lines().map(Line::from).collect();
    content.push(Line::from(""));
    content.push(hint);

    let dialog = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(Span::styled(
                    " Error ",
                    Style::default()
                        .fg(Color::Red)
                        .add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .style(Style::default().bg(Color::Black)),
        );

    frame.render_widget(dialog, dialog_area);
}

/// Render the latitude/longitude picker. Confirming assigns both values to
/// the form in one step.
pub fn render_location_dialog(frame: &mut Frame, dialog: &LocationDialog) {
    let area = frame.area();
    let dialog_area = centered_rect(area, 44, 10);

    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(" Set Location ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Latitude
            Constraint::Length(3), // Longitude
            Constraint::Length(1), // Hint
        ])
        .split(inner);

    draw_dialog_field(frame, chunks[0], "Latitude", &dialog.latitude, dialog.active_field == 0);
    draw_dialog_field(
        frame,
        chunks[1],
        "Longitude",
        &dialog.longitude,
        dialog.active_field == 1,
    );

    let hint = Paragraph::new(Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(": confirm  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": cancel"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, chunks[2]);
}

fn draw_dialog_field(frame: &mut Frame, area: Rect, label: &str, value: &str, is_active: bool) {
    let color = if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let cursor = if is_active { "▌" } else { "" };

    let paragraph = Paragraph::new(Line::from(vec![
        Span::raw(value.to_string()),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]))
    .block(
        Block::default()
            .title(format!(" {label} "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );

    frame.render_widget(paragraph, area);
}
