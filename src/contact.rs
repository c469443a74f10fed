//! Contact Message
//!
//! The contact form's data and its validation rules, free of any DOM.

use std::sync::OnceLock;

use regex::Regex;

/// Form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Form field name, also the multipart key
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    fn error_text(self) -> &'static str {
        match self {
            Field::Name => "Please enter a valid name",
            Field::Email => "Please enter a valid email",
            Field::Subject => "Please enter a subject",
            Field::Message => "Please enter a longer message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// One failed field check
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

impl ContactMessage {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// Every failing field, in display order; empty when the message can be sent
    pub fn validate(&self) -> Vec<FieldError> {
        Field::ALL
            .into_iter()
            .filter(|&field| !self.field_ok(field))
            .map(|field| FieldError {
                field,
                message: field.error_text(),
            })
            .collect()
    }

    fn field_ok(&self, field: Field) -> bool {
        let value = self.value(field);
        match field {
            Field::Name => value.trim().chars().count() >= 2,
            Field::Email => is_valid_email(value),
            Field::Subject => value.trim().chars().count() >= 3,
            Field::Message => value.trim().chars().count() >= 10,
        }
    }

    /// `(key, value)` pairs for the multipart body
    pub fn form_fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        Field::ALL.into_iter().map(move |field| (field.key(), self.value(field)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactMessage {
        ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "I'd like to talk about your project.".into(),
        }
    }

    #[test]
    fn valid_message_has_no_errors() {
        assert!(valid().validate().is_empty());
    }

    #[test]
    fn blank_message_fails_every_field_in_order() {
        let errors = ContactMessage::default().validate();
        let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, Field::ALL.to_vec());
        assert_eq!(errors[1].message, "Please enter a valid email");
    }

    #[test]
    fn lengths_count_trimmed_text() {
        let msg = ContactMessage {
            name: "  A  ".into(),
            subject: " ab ".into(),
            message: "   short   ".into(),
            ..valid()
        };
        let fields: Vec<Field> = msg.validate().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![Field::Name, Field::Subject, Field::Message]);
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));
        assert!(!is_valid_email("no-at.example.com"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@@b.c"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn form_fields_use_field_keys() {
        let msg = valid();
        let pairs: Vec<(&str, &str)> = msg.form_fields().collect();
        assert_eq!(pairs[0], ("name", "Ada"));
        assert_eq!(pairs[1], ("email", "ada@example.com"));
        assert_eq!(pairs.len(), 4);
    }
}
