//! Step 3: address, coordinates, and optional details

use super::field_renderer::{
    draw_buttons_row, draw_field, draw_multiline_field, BUTTONS_ROW_HEIGHT,
};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_location(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Location ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                  // Address
            Constraint::Length(3),                  // City + State + Pincode
            Constraint::Length(3),                  // Coordinates picker
            Constraint::Length(3),                  // License + Registration no.
            Constraint::Min(3),                     // Notes
            Constraint::Length(BUTTONS_ROW_HEIGHT), // Buttons
        ])
        .margin(1)
        .split(area);

    let form = &app.wizard.form;
    let active = app.state.active_field;

    draw_field(frame, chunks[0], "Address", &form.location.address, active == 0);

    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(35),
            Constraint::Percentage(25),
        ])
        .split(chunks[1]);
    draw_field(frame, row[0], "City", &form.location.city, active == 1);
    draw_field(frame, row[1], "State", &form.location.state, active == 2);
    draw_field(frame, row[2], "Postal Code", &form.location.pincode, active == 3);

    draw_coordinate_picker(frame, chunks[2], app, active == 4);

    let extras_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[3]);
    draw_field(
        frame,
        extras_row[0],
        "License No. (optional)",
        &form.extras.license_number,
        active == 5,
    );
    draw_field(
        frame,
        extras_row[1],
        "Registration No. (optional)",
        &form.extras.registration_number,
        active == 6,
    );

    draw_multiline_field(
        frame,
        chunks[4],
        "Notes (optional)",
        &form.extras.notes,
        active == 7,
    );

    draw_buttons_row(
        frame,
        chunks[5],
        app.button_labels(),
        app.buttons_row_active(),
        app.state.selected_button,
    );
}

/// The picker field only opens the coordinate dialog; the value itself is
/// read-only here
fn draw_coordinate_picker(frame: &mut Frame, area: Rect, app: &App, is_active: bool) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let content = match app.wizard.form.location.coordinate {
        Some(c) => Line::from(vec![
            Span::styled(
                format!("{:.4}, {:.4}", c.latitude, c.longitude),
                Style::default().fg(if is_active { Color::Cyan } else { Color::Gray }),
            ),
            Span::styled("  (Enter to change)", Style::default().fg(Color::DarkGray)),
        ]),
        None => Line::from(Span::styled(
            "(press Enter to set latitude/longitude)",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Coordinates ")
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(paragraph, area);
}
