//! Step 2: account credentials

use super::field_renderer::{draw_buttons_row, draw_field, draw_masked_field, BUTTONS_ROW_HEIGHT};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

pub fn draw_account(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Account ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                  // Email
            Constraint::Length(3),                  // Phone
            Constraint::Length(3),                  // Password
            Constraint::Length(3),                  // Confirm password
            Constraint::Length(BUTTONS_ROW_HEIGHT), // Buttons
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let form = &app.wizard.form.account;
    let active = app.state.active_field;

    draw_field(frame, chunks[0], "Email", &form.email, active == 0);
    draw_field(frame, chunks[1], "Phone", &form.phone, active == 1);
    draw_masked_field(frame, chunks[2], "Password", &form.password, active == 2);
    draw_masked_field(
        frame,
        chunks[3],
        "Confirm Password",
        &form.confirm_password,
        active == 3,
    );
    draw_buttons_row(
        frame,
        chunks[4],
        app.button_labels(),
        app.buttons_row_active(),
        app.state.selected_button,
    );
}
