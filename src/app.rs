//! Application state and core logic

use crate::config::ClientConfig;
use crate::gateway::ApiClient;
use crate::state::{AppState, LocationDialog, RequestorType, Wizard, WizardStep};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Main application struct
pub struct App {
    /// UI-side state (notifications, focus, modals)
    pub state: AppState,
    /// The registration wizard core
    pub wizard: Wizard,
    /// Client for the registration endpoint
    gateway: ApiClient,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new() -> Result<Self> {
        let config = ClientConfig::load().unwrap_or_default();
        let gateway = ApiClient::new(&config);

        Ok(Self {
            state: AppState::default(),
            wizard: Wizard::new(),
            gateway,
            quit: false,
        })
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Number of focusable fields on the current step, buttons row included
    pub fn field_count(&self) -> usize {
        match self.wizard.step() {
            // name, type, contact person, buttons
            WizardStep::Organization => 4,
            // email, phone, password, confirmation, buttons
            WizardStep::Account => 5,
            // address, city, state, pincode, picker, license, reg. no, notes, buttons
            WizardStep::Location => 9,
            WizardStep::Submitted { .. } => 0,
        }
    }

    /// Labels for the buttons row of the current step
    pub fn button_labels(&self) -> &'static [&'static str] {
        match self.wizard.step() {
            WizardStep::Organization => &["Next"],
            WizardStep::Account => &["Back", "Next"],
            WizardStep::Location => &["Back", "Submit"],
            WizardStep::Submitted { .. } => &[],
        }
    }

    /// Returns true if the buttons row is currently active
    pub fn buttons_row_active(&self) -> bool {
        let count = self.field_count();
        count > 0 && self.state.active_field + 1 == count
    }

    fn on_type_selector(&self) -> bool {
        matches!(self.wizard.step(), WizardStep::Organization) && self.state.active_field == 1
    }

    fn on_location_picker(&self) -> bool {
        matches!(self.wizard.step(), WizardStep::Location) && self.state.active_field == 4
    }

    fn on_notes_field(&self) -> bool {
        matches!(self.wizard.step(), WizardStep::Location) && self.state.active_field == 7
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Error notifications are modal; dismiss before anything else
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Location picker dialog is modal too
        if self.state.location_dialog.is_some() {
            self.handle_location_dialog_key(key);
            return Ok(());
        }

        // Any other key clears the transient status line
        self.state.status_message = None;

        if self.wizard.step().is_terminal() {
            self.handle_submitted_key(key);
            return Ok(());
        }

        self.handle_form_key(key).await
    }

    async fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let field_count = self.field_count();
        let on_buttons = self.buttons_row_active();

        match key.code {
            KeyCode::Tab => self.state.next_field(field_count),
            KeyCode::BackTab => self.state.prev_field(field_count),
            KeyCode::Esc => {
                // Leaving the wizard discards the session
                self.quit = true;
            }
            KeyCode::Left | KeyCode::Right if on_buttons => {
                self.move_button_selection(key.code == KeyCode::Right);
            }
            KeyCode::Enter if on_buttons => self.activate_button().await?,
            KeyCode::Left | KeyCode::Right if self.on_type_selector() => {
                self.cycle_requestor_type(key.code == KeyCode::Right);
            }
            KeyCode::Enter if self.on_location_picker() => {
                self.state.location_dialog = Some(LocationDialog::from_coordinate(
                    self.wizard.form.location.coordinate,
                ));
            }
            KeyCode::Enter if self.on_notes_field() => {
                self.wizard.form.extras.notes.push('\n');
            }
            KeyCode::Char(c) if !on_buttons => self.input_char(c),
            KeyCode::Backspace if !on_buttons => self.backspace(),
            _ => {}
        }
        Ok(())
    }

    fn handle_submitted_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q')) {
            self.quit = true;
        }
    }

    fn handle_location_dialog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                // Cancel leaves any previous coordinate untouched
                self.state.location_dialog = None;
            }
            KeyCode::Enter => {
                let parsed = self
                    .state
                    .location_dialog
                    .as_ref()
                    .and_then(LocationDialog::parse);
                match parsed {
                    Some(coordinate) => {
                        // One confirmation assigns both values
                        self.wizard.form.set_location(coordinate);
                        self.state.location_dialog = None;
                        self.state.status_message = Some("Location set".to_string());
                    }
                    None => {
                        self.state.push_error(
                            "Enter a latitude within ±90 and a longitude within ±180",
                        );
                    }
                }
            }
            KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
                if let Some(dialog) = self.state.location_dialog.as_mut() {
                    dialog.toggle_field();
                }
            }
            KeyCode::Char(c) => {
                if let Some(dialog) = self.state.location_dialog.as_mut() {
                    dialog.input_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(dialog) = self.state.location_dialog.as_mut() {
                    dialog.backspace();
                }
            }
            _ => {}
        }
    }

    fn move_button_selection(&mut self, forward: bool) {
        let count = self.button_labels().len();
        if count == 0 {
            return;
        }
        if forward {
            self.state.selected_button = (self.state.selected_button + 1) % count;
        } else if self.state.selected_button == 0 {
            self.state.selected_button = count - 1;
        } else {
            self.state.selected_button -= 1;
        }
    }

    async fn activate_button(&mut self) -> Result<()> {
        match self.wizard.step() {
            WizardStep::Organization => self.advance_step().await,
            WizardStep::Account | WizardStep::Location => {
                if self.state.selected_button == 0 {
                    self.retreat_step();
                    Ok(())
                } else {
                    self.advance_step().await
                }
            }
            WizardStep::Submitted { .. } => Ok(()),
        }
    }

    /// Run the current step's validator and move forward; every failure
    /// surfaces exactly one notification.
    async fn advance_step(&mut self) -> Result<()> {
        if self.wizard.is_submitting() {
            // Forward navigation stays blocked while a submission is pending
            return Ok(());
        }
        match self.wizard.advance(&self.gateway).await {
            Ok(()) => self.state.reset_focus(),
            Err(err) => self.state.push_error(err.to_string()),
        }
        Ok(())
    }

    fn retreat_step(&mut self) {
        self.wizard.retreat();
        self.state.reset_focus();
    }

    fn cycle_requestor_type(&mut self, forward: bool) {
        let current = self.wizard.form.organization.requestor_type;
        let next = match (current, forward) {
            (None, _) => RequestorType::Hospital,
            (Some(t), true) => t.next(),
            (Some(t), false) => t.prev(),
        };
        self.wizard.form.organization.requestor_type = Some(next);
    }

    fn input_char(&mut self, c: char) {
        if let Some(field) = self.active_text_field_mut() {
            field.push(c);
        }
    }

    fn backspace(&mut self) {
        if let Some(field) = self.active_text_field_mut() {
            field.pop();
        }
    }

    fn active_text_field_mut(&mut self) -> Option<&mut String> {
        let field = self.state.active_field;
        let step = self.wizard.step().clone();
        let form = &mut self.wizard.form;

        match step {
            WizardStep::Organization => match field {
                0 => Some(&mut form.organization.name),
                2 => Some(&mut form.organization.contact_person),
                _ => None,
            },
            WizardStep::Account => match field {
                0 => Some(&mut form.account.email),
                1 => Some(&mut form.account.phone),
                2 => Some(&mut form.account.password),
                3 => Some(&mut form.account.confirm_password),
                _ => None,
            },
            WizardStep::Location => match field {
                0 => Some(&mut form.location.address),
                1 => Some(&mut form.location.city),
                2 => Some(&mut form.location.state),
                3 => Some(&mut form.location.pincode),
                5 => Some(&mut form.extras.license_number),
                6 => Some(&mut form.extras.registration_number),
                7 => Some(&mut form.extras.notes),
                _ => None,
            },
            WizardStep::Submitted { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.input_char(c);
        }
    }

    #[tokio::test]
    async fn test_chars_route_to_active_field() {
        let mut app = App::new().unwrap();
        app.handle_key(key(KeyCode::Char('C'))).await.unwrap();
        app.handle_key(key(KeyCode::Char('i'))).await.unwrap();
        assert_eq!(app.wizard.form.organization.name, "Ci");

        app.handle_key(key(KeyCode::Backspace)).await.unwrap();
        assert_eq!(app.wizard.form.organization.name, "C");
    }

    #[tokio::test]
    async fn test_tab_cycles_fields_including_buttons_row() {
        let mut app = App::new().unwrap();
        assert_eq!(app.field_count(), 4);

        for _ in 0..3 {
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
        }
        assert!(app.buttons_row_active());

        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        assert_eq!(app.state.active_field, 0);
    }

    #[tokio::test]
    async fn test_type_selector_cycles() {
        let mut app = App::new().unwrap();
        app.handle_key(key(KeyCode::Tab)).await.unwrap(); // onto the type field

        app.handle_key(key(KeyCode::Right)).await.unwrap();
        assert_eq!(
            app.wizard.form.organization.requestor_type,
            Some(RequestorType::Hospital)
        );

        app.handle_key(key(KeyCode::Right)).await.unwrap();
        assert_eq!(
            app.wizard.form.organization.requestor_type,
            Some(RequestorType::Clinic)
        );

        app.handle_key(key(KeyCode::Left)).await.unwrap();
        assert_eq!(
            app.wizard.form.organization.requestor_type,
            Some(RequestorType::Hospital)
        );
    }

    #[tokio::test]
    async fn test_invalid_advance_surfaces_one_notification() {
        let mut app = App::new().unwrap();
        // Jump to the buttons row and press Next on an empty step
        for _ in 0..3 {
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
        }
        app.handle_key(key(KeyCode::Enter)).await.unwrap();

        assert!(app.state.has_errors());
        assert_eq!(
            app.state.current_error(),
            Some("Organization name is required")
        );
        assert_eq!(app.wizard.step(), &WizardStep::Organization);

        // The dialog is modal: typing does not reach the form
        app.handle_key(key(KeyCode::Char('x'))).await.unwrap();
        assert!(app.wizard.form.organization.name.is_empty());

        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        assert!(!app.state.has_errors());
    }

    #[tokio::test]
    async fn test_valid_organization_advances_and_keeps_values() {
        let mut app = App::new().unwrap();
        type_text(&mut app, "City Hospital");
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        app.handle_key(key(KeyCode::Right)).await.unwrap(); // Hospital
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        type_text(&mut app, "Dr. Rao");
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        app.handle_key(key(KeyCode::Enter)).await.unwrap();

        assert_eq!(app.wizard.step(), &WizardStep::Account);
        assert_eq!(app.wizard.form.organization.name, "City Hospital");
        assert_eq!(app.state.active_field, 0);
    }

    #[tokio::test]
    async fn test_back_button_retreats_without_validation() {
        let mut app = App::new().unwrap();
        type_text(&mut app, "City Hospital");
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        app.handle_key(key(KeyCode::Right)).await.unwrap();
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        type_text(&mut app, "Dr. Rao");
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        assert_eq!(app.wizard.step(), &WizardStep::Account);

        // Step 2 is empty; Back is always allowed
        for _ in 0..4 {
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
        }
        assert!(app.buttons_row_active());
        app.handle_key(key(KeyCode::Enter)).await.unwrap();

        assert_eq!(app.wizard.step(), &WizardStep::Organization);
        assert_eq!(app.wizard.form.organization.name, "City Hospital");
        assert!(!app.state.has_errors());
    }

    #[tokio::test]
    async fn test_location_dialog_sets_coordinate_atomically() {
        let mut app = App::new().unwrap();
        app.state.location_dialog = Some(LocationDialog::default());

        for c in "12.97".chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        for c in "77.59".chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
        app.handle_key(key(KeyCode::Enter)).await.unwrap();

        let coord = app.wizard.form.location.coordinate.unwrap();
        assert_eq!(coord.latitude, 12.97);
        assert_eq!(coord.longitude, 77.59);
        assert!(app.state.location_dialog.is_none());
    }

    #[tokio::test]
    async fn test_location_dialog_rejects_partial_input() {
        let mut app = App::new().unwrap();
        app.state.location_dialog = Some(LocationDialog::default());

        for c in "12.97".chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
        // Longitude left empty
        app.handle_key(key(KeyCode::Enter)).await.unwrap();

        assert!(app.wizard.form.location.coordinate.is_none());
        assert!(app.state.has_errors());
        assert!(app.state.location_dialog.is_some());
    }

    #[tokio::test]
    async fn test_location_dialog_cancel_keeps_previous_coordinate() {
        let mut app = App::new().unwrap();
        app.wizard.form.set_location(crate::state::Coordinate {
            latitude: 19.07,
            longitude: 72.87,
        });
        app.state.location_dialog = Some(LocationDialog::default());

        app.handle_key(key(KeyCode::Esc)).await.unwrap();

        let coord = app.wizard.form.location.coordinate.unwrap();
        assert_eq!(coord.latitude, 19.07);
        assert!(app.state.location_dialog.is_none());
    }

    #[tokio::test]
    async fn test_esc_quits_the_wizard() {
        let mut app = App::new().unwrap();
        assert!(!app.should_quit());
        app.handle_key(key(KeyCode::Esc)).await.unwrap();
        assert!(app.should_quit());
    }
}
