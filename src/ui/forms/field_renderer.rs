//! Field rendering utilities for forms

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::components::{render_button, BUTTON_HEIGHT};

/// Draw a single-value text field
pub fn draw_field(frame: &mut Frame, area: Rect, label: &str, value: &str, is_active: bool) {
    draw_field_inner(frame, area, label, value, is_active, false);
}

/// Draw a text field with the value masked (passwords)
pub fn draw_masked_field(frame: &mut Frame, area: Rect, label: &str, value: &str, is_active: bool) {
    let masked = "•".repeat(value.chars().count());
    draw_field_inner(frame, area, label, &masked, is_active, false);
}

/// Draw a multiline text field
pub fn draw_multiline_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
) {
    draw_field_inner(frame, area, label, value, is_active, true);
}

fn draw_field_inner(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
    is_multiline: bool,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };
    let cursor = if is_active { "▌" } else { "" };

    let content = if is_multiline {
        let mut lines: Vec<Line> = display.lines().map(|l| Line::from(l.to_string())).collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display.to_string(), style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw the step's buttons row, highlighting the selected button when the
/// row itself is active
pub fn draw_buttons_row(
    frame: &mut Frame,
    area: Rect,
    labels: &[&str],
    row_active: bool,
    selected: usize,
) {
    let constraints: Vec<Constraint> = labels.iter().map(|_| Constraint::Length(14)).collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (i, label) in labels.iter().enumerate() {
        render_button(frame, chunks[i], label, row_active && selected == i);
    }
}

/// Vertical space reserved for the buttons row
pub const BUTTONS_ROW_HEIGHT: u16 = BUTTON_HEIGHT;
