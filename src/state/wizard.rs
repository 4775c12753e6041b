//! Wizard state machine: step tracking, guarded transitions, submission

use super::form::RegistrationForm;
use super::validate::{self, ValidationError};
use crate::gateway::RegistrationGateway;
use thiserror::Error;

/// One screen of the wizard, plus the terminal submitted state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Organization,
    Account,
    Location,
    /// Terminal: the form is no longer editable; the email is kept for display
    Submitted {
        email: String,
    },
}

impl WizardStep {
    /// 1-based position shown in the step header
    pub fn number(&self) -> usize {
        match self {
            Self::Organization => 1,
            Self::Account => 2,
            Self::Location | Self::Submitted { .. } => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Organization => "Organization",
            Self::Account => "Account",
            Self::Location => "Location",
            Self::Submitted { .. } => "Submitted",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Submitted { .. })
    }
}

/// Why an advance attempt did not move forward
#[derive(Debug, Error)]
pub enum WizardError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Submission(String),
}

/// Drives the three-step registration flow. Owns the current step and the
/// form; transitions forward only through the step's validator.
#[derive(Debug, Default)]
pub struct Wizard {
    step: WizardStep,
    pub form: RegistrationForm,
    submitting: bool,
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::default(),
            form: RegistrationForm::new(),
            submitting: false,
        }
    }

    pub fn step(&self) -> &WizardStep {
        &self.step
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validate the current step and move forward; on the last step this
    /// submits instead of incrementing. Exactly one error is returned per
    /// failed attempt, and the step does not change on failure.
    pub async fn advance<G: RegistrationGateway + ?Sized>(
        &mut self,
        gateway: &G,
    ) -> Result<(), WizardError> {
        if self.submitting {
            // A submission is already in flight; ignore the re-trigger
            return Ok(());
        }

        match &self.step {
            WizardStep::Organization => {
                validate::validate_organization(&self.form)?;
                self.step = WizardStep::Account;
                Ok(())
            }
            WizardStep::Account => {
                validate::validate_account(&self.form)?;
                self.step = WizardStep::Location;
                Ok(())
            }
            WizardStep::Location => {
                validate::validate_location(&self.form)?;
                self.submit(gateway).await
            }
            WizardStep::Submitted { .. } => Ok(()),
        }
    }

    /// Step back without validation. Field values are never cleared, and the
    /// terminal state does not move.
    pub fn retreat(&mut self) {
        match &self.step {
            WizardStep::Account => self.step = WizardStep::Organization,
            WizardStep::Location => self.step = WizardStep::Account,
            WizardStep::Organization | WizardStep::Submitted { .. } => {}
        }
    }

    async fn submit<G: RegistrationGateway + ?Sized>(
        &mut self,
        gateway: &G,
    ) -> Result<(), WizardError> {
        // The step 1 and step 3 validators guarantee the type and coordinate
        // needed here; the guard only covers direct misuse.
        let payload = match self.form.payload() {
            Some(payload) => payload,
            None => return Err(WizardError::Validation(ValidationError::LocationMissing)),
        };

        self.submitting = true;
        let result = gateway.register(&payload).await;
        self.submitting = false;

        match result {
            Ok(()) => {
                self.step = WizardStep::Submitted {
                    email: payload.email,
                };
                Ok(())
            }
            Err(err) => Err(WizardError::Submission(err.user_message())),
        }
    }
}
