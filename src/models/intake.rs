//! Industry experience intake form and RPL qualification suggestions.

/// Industry an applicant has experience in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Industry {
    Business,
    Healthcare,
    Education,
    Technology,
    Hospitality,
    Construction,
    Finance,
    Retail,
}

impl Industry {
    pub const ALL: [Industry; 8] = [
        Industry::Business,
        Industry::Healthcare,
        Industry::Education,
        Industry::Technology,
        Industry::Hospitality,
        Industry::Construction,
        Industry::Finance,
        Industry::Retail,
    ];

    /// Get the display name for the industry.
    pub fn name(self) -> &'static str {
        match self {
            Industry::Business => "Business",
            Industry::Healthcare => "Healthcare",
            Industry::Education => "Education",
            Industry::Technology => "Technology",
            Industry::Hospitality => "Hospitality",
            Industry::Construction => "Construction",
            Industry::Finance => "Finance",
            Industry::Retail => "Retail",
        }
    }
}

/// Editable intake form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeField {
    Name,
    Email,
    Phone,
    Experience,
}

/// Form state for the industry experience intake.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntakeFormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub industry: Option<Industry>,
    pub experience: String,
}

impl IntakeFormData {
    /// Reset the form to default values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Set a text field.
    pub fn set(&mut self, field: IntakeField, value: String) {
        match field {
            IntakeField::Name => self.name = value,
            IntakeField::Email => self.email = value,
            IntakeField::Phone => self.phone = value,
            IntakeField::Experience => self.experience = value,
        }
    }

    /// All five fields are filled in.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.phone, &self.experience]
            .iter()
            .all(|v| !v.trim().is_empty())
            && self.industry.is_some()
    }
}

/// A qualification suggested for Recognition of Prior Learning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Qualification {
    pub code: &'static str,
    pub title: &'static str,
}

/// Qualifications listed beside the intake form.
pub const QUALIFICATIONS: [Qualification; 3] = [
    Qualification {
        code: "BSB40215",
        title: "Certificate IV in Business",
    },
    Qualification {
        code: "BSB50215",
        title: "Diploma of Business",
    },
    Qualification {
        code: "BSB60215",
        title: "Advanced Diploma of Management",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> IntakeFormData {
        IntakeFormData {
            name: "Alex Lee".to_string(),
            email: "alex@example.com".to_string(),
            phone: "0400 000 000".to_string(),
            industry: Some(Industry::Technology),
            experience: "Ten years of support work".to_string(),
        }
    }

    #[test]
    fn test_complete_form() {
        assert!(filled().is_complete());
        assert!(!IntakeFormData::default().is_complete());
    }

    #[test]
    fn test_each_field_required() {
        for field in [IntakeField::Name, IntakeField::Email, IntakeField::Phone, IntakeField::Experience] {
            let mut form = filled();
            form.set(field, "   ".to_string());
            assert!(!form.is_complete(), "{field:?} should be required");
        }

        let mut form = filled();
        form.industry = None;
        assert!(!form.is_complete());
    }

    #[test]
    fn test_reset() {
        let mut form = filled();
        form.reset();
        assert_eq!(form, IntakeFormData::default());
    }
}
