//! UI-side application state: notifications, focus, and the location dialog

use super::form::Coordinate;

/// Modal dialog for entering a latitude/longitude pair. Both values are
/// confirmed together, so the form's coordinate is assigned atomically.
#[derive(Debug, Clone, Default)]
pub struct LocationDialog {
    pub latitude: String,
    pub longitude: String,
    /// 0 = latitude, 1 = longitude
    pub active_field: usize,
}

impl LocationDialog {
    /// Pre-fill from a coordinate already on the form, if any
    pub fn from_coordinate(coordinate: Option<Coordinate>) -> Self {
        match coordinate {
            Some(c) => Self {
                latitude: c.latitude.to_string(),
                longitude: c.longitude.to_string(),
                active_field: 0,
            },
            None => Self::default(),
        }
    }

    pub fn toggle_field(&mut self) {
        self.active_field = (self.active_field + 1) % 2;
    }

    fn active_value_mut(&mut self) -> &mut String {
        if self.active_field == 0 {
            &mut self.latitude
        } else {
            &mut self.longitude
        }
    }

    /// Accept only characters that can appear in a signed decimal
    pub fn input_char(&mut self, c: char) {
        if c.is_ascii_digit() || c == '.' || c == '-' {
            self.active_value_mut().push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.active_value_mut().pop();
    }

    /// Both fields must parse, and the pair must be a real position:
    /// latitude within ±90, longitude within ±180.
    pub fn parse(&self) -> Option<Coordinate> {
        let latitude = self.latitude.trim().parse::<f64>().ok()?;
        let longitude = self.longitude.trim().parse::<f64>().ok()?;
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return None;
        }
        Some(Coordinate {
            latitude,
            longitude,
        })
    }
}

/// State the UI renders besides the wizard itself
#[derive(Debug, Default)]
pub struct AppState {
    /// Pending error notifications, shown front-first as a modal dialog
    errors: Vec<String>,
    /// Transient one-line status shown in the status bar
    pub status_message: Option<String>,
    /// Active field index within the current step (fields, then buttons row)
    pub active_field: usize,
    /// Selected button when the buttons row is active
    pub selected_button: usize,
    /// Location picker modal, when open
    pub location_dialog: Option<LocationDialog>,
}

impl AppState {
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        if !self.errors.is_empty() {
            self.errors.remove(0);
        }
    }

    /// Reset field focus, used when the step changes
    pub fn reset_focus(&mut self) {
        self.active_field = 0;
        self.selected_button = 0;
    }

    pub fn next_field(&mut self, field_count: usize) {
        if field_count > 0 {
            self.active_field = (self.active_field + 1) % field_count;
        }
    }

    pub fn prev_field(&mut self, field_count: usize) {
        if field_count == 0 {
            return;
        }
        if self.active_field == 0 {
            self.active_field = field_count - 1;
        } else {
            self.active_field -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_queue_front_first() {
        let mut state = AppState::default();
        assert!(!state.has_errors());

        state.push_error("first");
        state.push_error("second");
        assert_eq!(state.current_error(), Some("first"));

        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));

        state.dismiss_error();
        assert!(!state.has_errors());
        state.dismiss_error(); // no panic on empty queue
    }

    #[test]
    fn test_field_navigation_wraps() {
        let mut state = AppState::default();
        state.next_field(3);
        state.next_field(3);
        assert_eq!(state.active_field, 2);
        state.next_field(3);
        assert_eq!(state.active_field, 0);
        state.prev_field(3);
        assert_eq!(state.active_field, 2);
    }

    #[test]
    fn test_location_dialog_parse_requires_both_fields() {
        let mut dialog = LocationDialog::default();
        for c in "12.97".chars() {
            dialog.input_char(c);
        }
        assert!(dialog.parse().is_none());

        dialog.toggle_field();
        for c in "77.59".chars() {
            dialog.input_char(c);
        }
        let coord = dialog.parse().unwrap();
        assert_eq!(coord.latitude, 12.97);
        assert_eq!(coord.longitude, 77.59);
    }

    #[test]
    fn test_location_dialog_rejects_out_of_range_values() {
        let mut dialog = LocationDialog {
            latitude: "999".to_string(),
            longitude: "77.59".to_string(),
            active_field: 0,
        };
        assert!(dialog.parse().is_none());

        dialog.latitude = "12.97".to_string();
        dialog.longitude = "-500".to_string();
        assert!(dialog.parse().is_none());

        dialog.longitude = "-180".to_string();
        let coord = dialog.parse().unwrap();
        assert_eq!(coord.longitude, -180.0);
    }

    #[test]
    fn test_location_dialog_rejects_letters() {
        let mut dialog = LocationDialog::default();
        dialog.input_char('x');
        dialog.input_char('-');
        dialog.input_char('5');
        assert_eq!(dialog.latitude, "-5");
    }

    #[test]
    fn test_location_dialog_prefill() {
        let dialog = LocationDialog::from_coordinate(Some(Coordinate {
            latitude: 19.07,
            longitude: 72.87,
        }));
        assert_eq!(dialog.latitude, "19.07");
        assert_eq!(dialog.longitude, "72.87");
    }
}
