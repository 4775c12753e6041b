//! Layout components (step header, content, status bar)

use crate::app::App;
use crate::state::WizardStep;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const FORM_STEPS: [WizardStep; 3] = [
    WizardStep::Organization,
    WizardStep::Account,
    WizardStep::Location,
];

/// Split the screen into header, content, and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Step header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the step indicator line
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let step = app.wizard.step();

    let mut spans = vec![Span::styled(
        " BloodLink Registration ",
        Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
    )];

    if step.is_terminal() {
        spans.push(Span::styled("· complete", Style::default().fg(Color::Green)));
    } else {
        for form_step in &FORM_STEPS {
            let number = form_step.number();
            let style = if number == step.number() {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else if number < step.number() {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(
                format!("{number} {}", form_step.title()),
                style,
            ));
            if number < FORM_STEPS.len() {
                spans.push(Span::styled("  ›  ", Style::default().fg(Color::DarkGray)));
            }
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the status bar with key hints and the transient status message
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    if let Some(message) = &app.state.status_message {
        let paragraph =
            Paragraph::new(message.as_str()).style(Style::default().fg(Color::Green));
        frame.render_widget(paragraph, area);
        return;
    }

    let hints: &[(&str, &str)] = match app.wizard.step() {
        WizardStep::Submitted { .. } => &[("Enter", "exit")],
        _ if app.state.location_dialog.is_some() => {
            &[("Tab", "switch"), ("Enter", "confirm"), ("Esc", "cancel")]
        }
        _ if app.buttons_row_active() => &[
            ("←/→", "choose"),
            ("Enter", "activate"),
            ("Tab", "next field"),
            ("Esc", "quit"),
        ],
        _ => &[("Tab", "next field"), ("Shift+Tab", "previous"), ("Esc", "quit")],
    };

    let mut spans = Vec::new();
    for (key, action) in hints {
        spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(format!(": {action}  ")));
    }

    let paragraph =
        Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}
