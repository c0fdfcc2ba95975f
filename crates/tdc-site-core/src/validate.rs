//! Contact form validation.

use regex::Regex;
use std::sync::LazyLock;
use tdc_site_types::EnquiryPayload;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// `local@domain.tld` with no whitespace and exactly one `@`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Interest,
    Message,
}

impl Field {
    /// Value of the control's `name` attribute.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Interest => "interest",
            Field::Message => "message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// Raw control values as read from the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub interest: String,
    pub message: String,
}

impl ContactFields {
    /// Trimmed payload. `interest` comes from a select and is passed through.
    pub fn to_payload(&self) -> EnquiryPayload {
        EnquiryPayload {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            interest: self.interest.clone(),
            message: self.message.trim().to_owned(),
        }
    }
}

pub fn validate(fields: &ContactFields) -> Result<EnquiryPayload, Vec<FieldError>> {
    let mut errors = Vec::new();

    if fields.name.trim().is_empty() {
        errors.push(FieldError {
            field: Field::Name,
            message: "Please enter your name",
        });
    }

    let email = fields.email.trim();
    if email.is_empty() {
        errors.push(FieldError {
            field: Field::Email,
            message: "Please enter your email address",
        });
    } else if !is_valid_email(email) {
        errors.push(FieldError {
            field: Field::Email,
            message: "Please enter a valid email address",
        });
    }

    if fields.message.trim().is_empty() {
        errors.push(FieldError {
            field: Field::Message,
            message: "Please enter your message",
        });
    }

    if errors.is_empty() {
        Ok(fields.to_payload())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@@b.com"));
    }

    #[test]
    fn all_required_fields_missing_yields_three_errors() {
        let fields = ContactFields {
            name: "   ".into(),
            email: "not-an-email".into(),
            message: String::new(),
            ..Default::default()
        };
        let errors = validate(&fields).unwrap_err();
        let failing: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(failing, vec![Field::Name, Field::Email, Field::Message]);
        assert_eq!(errors[1].message, "Please enter a valid email address");
    }

    #[test]
    fn empty_email_gets_the_required_message() {
        let fields = ContactFields {
            name: "Ada".into(),
            message: "hi".into(),
            ..Default::default()
        };
        let errors = validate(&fields).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Please enter your email address");
    }

    #[test]
    fn valid_fields_are_trimmed_into_payload() {
        let fields = ContactFields {
            name: "  Ada Lovelace ".into(),
            email: " ada@example.com ".into(),
            phone: " +27 21 000 0000 ".into(),
            interest: "cape-point".into(),
            message: "\nTwo adults, one day.\n".into(),
        };
        let payload = validate(&fields).unwrap();
        assert_eq!(payload.name, "Ada Lovelace");
        assert_eq!(payload.email, "ada@example.com");
        assert_eq!(payload.phone, "+27 21 000 0000");
        assert_eq!(payload.interest, "cape-point");
        assert_eq!(payload.message, "Two adults, one day.");
    }
}
