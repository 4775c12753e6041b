//! UI module for rendering the TUI

pub mod components;
mod forms;
mod layout;
mod submitted;

use crate::app::App;
use crate::state::WizardStep;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (header_area, content_area, status_area) = layout::create_layout(area);

    layout::draw_header(frame, header_area, app);

    match app.wizard.step() {
        WizardStep::Organization => forms::draw_organization(frame, content_area, app),
        WizardStep::Account => forms::draw_account(frame, content_area, app),
        WizardStep::Location => forms::draw_location(frame, content_area, app),
        WizardStep::Submitted { email } => submitted::draw(frame, content_area, email),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Modal overlays last
    if let Some(dialog) = &app.state.location_dialog {
        components::render_location_dialog(frame, dialog);
    }
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message);
    }
}
