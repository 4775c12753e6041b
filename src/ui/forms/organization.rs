//! Step 1: organization details

use super::field_renderer::{draw_buttons_row, draw_field, BUTTONS_ROW_HEIGHT};
use crate::app::App;
use crate::state::RequestorType;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_organization(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Organization Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                  // Name
            Constraint::Length(3),                  // Type selector
            Constraint::Length(3),                  // Contact person
            Constraint::Length(BUTTONS_ROW_HEIGHT), // Buttons
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let form = &app.wizard.form.organization;
    let active = app.state.active_field;

    draw_field(frame, chunks[0], "Organization Name", &form.name, active == 0);
    draw_type_selector(frame, chunks[1], form.requestor_type, active == 1);
    draw_field(
        frame,
        chunks[2],
        "Contact Person",
        &form.contact_person,
        active == 2,
    );
    draw_buttons_row(
        frame,
        chunks[3],
        app.button_labels(),
        app.buttons_row_active(),
        app.state.selected_button,
    );
}

fn draw_type_selector(
    frame: &mut Frame,
    area: Rect,
    selected: Option<RequestorType>,
    is_active: bool,
) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let label = selected.map(|t| t.label()).unwrap_or("(select with ←/→)");
    let style = if selected.is_some() {
        Style::default().fg(if is_active { Color::Cyan } else { Color::Gray })
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![Span::styled(label, style)];
    if is_active {
        spans.push(Span::styled(
            "  ◂ ▸",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(" Organization Type ")
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(paragraph, area);
}
