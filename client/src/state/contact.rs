//! Contact form local state.
//!
//! The form never leaves the browser. Each input event replaces the whole
//! record, and submit freezes the state into a terminal confirmation that
//! lasts until reload. Required-field and email-format checks are left to
//! the browser's native constraint validation, which blocks submit before
//! the handler runs.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// `name` attribute declared to the static form-capture integration.
pub const FORM_NAME: &str = "contact";

/// The three editable fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Return a new record with `field` replaced and every other field kept.
    #[must_use]
    pub fn with_field(&self, field: ContactField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            ContactField::Name => Self { name: value, ..self.clone() },
            ContactField::Email => Self { email: value, ..self.clone() },
            ContactField::Message => Self { message: value, ..self.clone() },
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }
}

/// Which half of the contact section is rendered. Exactly one at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactView {
    Form,
    Confirmation,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub form: ContactForm,
    pub submitted: bool,
}

impl ContactFormState {
    /// Apply one input event. Ignored once submitted; the inputs are gone by
    /// then anyway.
    #[must_use]
    pub fn with_field(&self, field: ContactField, value: impl Into<String>) -> Self {
        if self.submitted {
            return self.clone();
        }
        Self { form: self.form.with_field(field, value), submitted: false }
    }

    /// Local acknowledgment only. Cannot fail, and submitting twice is the
    /// same as submitting once.
    #[must_use]
    pub fn submit(&self) -> Self {
        Self { form: self.form.clone(), submitted: true }
    }

    pub fn view(&self) -> ContactView {
        if self.submitted { ContactView::Confirmation } else { ContactView::Form }
    }
}
