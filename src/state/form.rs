//! Registration form record: three step groups plus optional extras

use serde::Serialize;

/// Organization category of a requestor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestorType {
    Hospital,
    Clinic,
    EmergencyService,
    ResearchLab,
    Other,
}

impl RequestorType {
    /// Wire name sent to the registration endpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hospital => "hospital",
            Self::Clinic => "clinic",
            Self::EmergencyService => "emergency_service",
            Self::ResearchLab => "research_lab",
            Self::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Hospital => "Hospital",
            Self::Clinic => "Clinic",
            Self::EmergencyService => "Emergency Service",
            Self::ResearchLab => "Research Lab",
            Self::Other => "Other",
        }
    }

    /// Cycle forward through the selector options
    pub fn next(&self) -> Self {
        match self {
            Self::Hospital => Self::Clinic,
            Self::Clinic => Self::EmergencyService,
            Self::EmergencyService => Self::ResearchLab,
            Self::ResearchLab => Self::Other,
            Self::Other => Self::Hospital,
        }
    }

    /// Cycle backward through the selector options
    pub fn prev(&self) -> Self {
        match self {
            Self::Hospital => Self::Other,
            Self::Clinic => Self::Hospital,
            Self::EmergencyService => Self::Clinic,
            Self::ResearchLab => Self::EmergencyService,
            Self::Other => Self::ResearchLab,
        }
    }
}

/// A latitude/longitude pair. The two values are only ever assigned together,
/// so a form either has a complete location or none at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Step 1 fields
#[derive(Debug, Clone, Default)]
pub struct OrganizationInfo {
    pub name: String,
    pub requestor_type: Option<RequestorType>,
    pub contact_person: String,
}

/// Step 2 fields
#[derive(Debug, Clone, Default)]
pub struct AccountInfo {
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

/// Step 3 fields
#[derive(Debug, Clone, Default)]
pub struct LocationInfo {
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub coordinate: Option<Coordinate>,
}

/// Optional fields, no validation constraints
#[derive(Debug, Clone, Default)]
pub struct ExtraInfo {
    pub license_number: String,
    pub registration_number: String,
    pub notes: String,
}

/// The whole registration record, partitioned into the three step groups.
/// Created empty when the app starts and mutated in place by edit events.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub organization: OrganizationInfo,
    pub account: AccountInfo,
    pub location: LocationInfo,
    pub extras: ExtraInfo,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign both coordinates in one step. This is the only way a location
    /// reaches the form, so latitude and longitude can never diverge.
    pub fn set_location(&mut self, coordinate: Coordinate) {
        self.location.coordinate = Some(coordinate);
    }

    /// Compose the submission body. Returns `None` until an organization type
    /// and a coordinate are set; the step 1 and step 3 validators guarantee
    /// both before a submission is attempted. The confirmation password never
    /// leaves the form.
    pub fn payload(&self) -> Option<RegistrationPayload> {
        let requestor_type = self.organization.requestor_type?;
        let coordinate = self.location.coordinate?;

        Some(RegistrationPayload {
            organization_name: self.organization.name.clone(),
            requestor_type: requestor_type.as_str().to_string(),
            contact_person: self.organization.contact_person.clone(),
            email: self.account.email.clone(),
            phone: self.account.phone.clone(),
            password: self.account.password.clone(),
            address: self.location.address.clone(),
            city: self.location.city.clone(),
            state: self.location.state.clone(),
            pincode: self.location.pincode.clone(),
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
            license_number: self.extras.license_number.clone(),
            registration_number: self.extras.registration_number.clone(),
            notes: self.extras.notes.clone(),
        })
    }
}

/// Wire form of a completed registration
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationPayload {
    pub organization_name: String,
    pub requestor_type: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub latitude: f64,
    pub longitude: f64,
    pub license_number: String,
    pub registration_number: String,
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn complete_form() -> RegistrationForm {
        let mut form = RegistrationForm::new();
        form.organization.name = "City Hospital".to_string();
        form.organization.requestor_type = Some(RequestorType::Hospital);
        form.organization.contact_person = "Dr. Rao".to_string();
        form.account.email = "org@example.com".to_string();
        form.account.phone = "9876543210".to_string();
        form.account.password = "hunter2hunter2".to_string();
        form.account.confirm_password = "hunter2hunter2".to_string();
        form.location.address = "12 MG Road".to_string();
        form.location.city = "Bengaluru".to_string();
        form.location.state = "Karnataka".to_string();
        form.location.pincode = "560001".to_string();
        form.set_location(Coordinate {
            latitude: 12.97,
            longitude: 77.59,
        });
        form
    }

    #[test]
    fn test_new_form_is_empty() {
        let form = RegistrationForm::new();
        assert!(form.organization.name.is_empty());
        assert!(form.organization.requestor_type.is_none());
        assert!(form.location.coordinate.is_none());
    }

    #[test]
    fn test_set_location_assigns_both_coordinates() {
        let mut form = RegistrationForm::new();
        form.set_location(Coordinate {
            latitude: 28.61,
            longitude: 77.21,
        });
        let coord = form.location.coordinate.unwrap();
        assert_eq!(coord.latitude, 28.61);
        assert_eq!(coord.longitude, 77.21);
    }

    #[test]
    fn test_payload_none_without_requestor_type() {
        let mut form = complete_form();
        form.organization.requestor_type = None;
        assert!(form.payload().is_none());
    }

    #[test]
    fn test_payload_none_without_coordinate() {
        let mut form = complete_form();
        form.location.coordinate = None;
        assert!(form.payload().is_none());
    }

    #[test]
    fn test_payload_excludes_confirmation_password() {
        let payload = complete_form().payload().unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("confirm_password"));
        assert_eq!(object["password"], "hunter2hunter2");
    }

    #[test]
    fn test_payload_wire_keys() {
        let payload = complete_form().payload().unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        let object = json.as_object().unwrap();
        for key in [
            "organization_name",
            "requestor_type",
            "contact_person",
            "email",
            "phone",
            "password",
            "address",
            "city",
            "state",
            "pincode",
            "latitude",
            "longitude",
            "license_number",
            "registration_number",
            "notes",
        ] {
            assert!(object.contains_key(key), "missing key {key}");
        }
        assert_eq!(object["requestor_type"], "hospital");
        assert_eq!(object["latitude"], 12.97);
    }

    #[test]
    fn test_requestor_type_cycle_covers_all_options() {
        let mut current = RequestorType::Hospital;
        for _ in 0..5 {
            current = current.next();
        }
        assert_eq!(current, RequestorType::Hospital);
        assert_eq!(RequestorType::EmergencyService.as_str(), "emergency_service");
        assert_eq!(RequestorType::Clinic.prev(), RequestorType::Hospital);
    }
}
