//! Contact form data model.

use serde::{Deserialize, Serialize};

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Succeeded,
    /// Carries the message shown to the user.
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }
}

/// Payload posted to the contact endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: SubmitStatus,
}

impl ContactFormState {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// Apply user input. Editing after a failure dismisses the failure.
    pub fn set_field(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
        if matches!(self.status, SubmitStatus::Failed(_)) {
            self.status = SubmitStatus::Idle;
        }
    }

    pub fn clear_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }

    pub fn is_sending(&self) -> bool {
        self.status == SubmitStatus::Sending
    }

    /// Trimmed payload, or the first empty field.
    pub fn to_message(&self) -> Result<ContactMessage, ContactField> {
        let value = |field: ContactField| {
            let value = self.field(field).trim();
            if value.is_empty() {
                Err(field)
            } else {
                Ok(value.to_string())
            }
        };
        Ok(ContactMessage {
            name: value(ContactField::Name)?,
            email: value(ContactField::Email)?,
            message: value(ContactField::Message)?,
        })
    }

    pub fn button_label(&self) -> &'static str {
        match self.status {
            SubmitStatus::Sending => "Sending...",
            SubmitStatus::Succeeded => "Message Sent!",
            _ => "Send Message",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFormState {
        ContactFormState {
            name: " A ".to_string(),
            email: "a@b.com".to_string(),
            message: "hi".to_string(),
            status: SubmitStatus::Idle,
        }
    }

    #[test]
    fn test_message_is_trimmed() {
        let message = filled().to_message().unwrap();
        assert_eq!(message.name, "A");
        assert_eq!(message.email, "a@b.com");
    }

    #[test]
    fn test_blank_field_is_reported() {
        let mut state = filled();
        state.email = "   ".to_string();
        assert_eq!(state.to_message(), Err(ContactField::Email));
    }

    #[test]
    fn test_editing_dismisses_failure() {
        let mut state = filled();
        state.status = SubmitStatus::Failed("boom".to_string());
        state.set_field(ContactField::Message, "hello".to_string());
        assert_eq!(state.status, SubmitStatus::Idle);
        assert_eq!(state.message, "hello");
    }

    #[test]
    fn test_button_label_follows_status() {
        let mut state = ContactFormState::default();
        assert_eq!(state.button_label(), "Send Message");
        state.status = SubmitStatus::Sending;
        assert_eq!(state.button_label(), "Sending...");
        state.status = SubmitStatus::Succeeded;
        assert_eq!(state.button_label(), "Message Sent!");
    }
}
