use ff_core::{NewVenue, VenueValidationError};
use serde::Serialize;

/// Draft of the owner's create-venue form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VenueForm {
    pub name: String,
    pub description: String,
    pub address: String,
}

impl VenueForm {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.description.is_empty() && self.address.is_empty()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Validated payload for the backend.
    ///
    /// # Errors
    ///
    /// Returns [`VenueValidationError::EmptyName`] when the name is blank.
    pub fn to_new_venue(&self) -> Result<NewVenue, VenueValidationError> {
        NewVenue::try_new(&self.name, &self.description, &self.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_rejected_and_form_kept() {
        let form = VenueForm {
            name: "   ".into(),
            description: "Cozy".into(),
            address: String::new(),
        };
        assert_eq!(form.to_new_venue(), Err(VenueValidationError::EmptyName));
        assert_eq!(form.description, "Cozy");
    }

    #[test]
    fn reset_clears_every_field() {
        let mut form = VenueForm {
            name: "Bistro".into(),
            description: "French".into(),
            address: "9 Rue".into(),
        };
        form.reset();
        assert!(form.is_empty());
    }
}
