//! Local validation for the contact and newsletter forms.
//!
//! Nothing is sent anywhere; a valid form is acknowledged in place.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please choose a subject.")]
    MissingSubject,
    #[error("Please write a message.")]
    MissingMessage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Membership,
    Projects,
    Events,
    Sponsorship,
    Other,
}

impl Subject {
    pub const ALL: [Subject; 5] = [
        Subject::Membership,
        Subject::Projects,
        Subject::Events,
        Subject::Sponsorship,
        Subject::Other,
    ];

    /// `<option value>` used by the select element.
    pub fn value(self) -> &'static str {
        match self {
            Subject::Membership => "membership",
            Subject::Projects => "projects",
            Subject::Events => "events",
            Subject::Sponsorship => "sponsorship",
            Subject::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Subject::Membership => "Membership Inquiry",
            Subject::Projects => "Project Collaboration",
            Subject::Events => "Event Information",
            Subject::Sponsorship => "Partnership Opportunities",
            Subject::Other => "Other",
        }
    }

    /// The empty placeholder option maps to `None`.
    pub fn from_value(value: &str) -> Option<Subject> {
        Subject::ALL.into_iter().find(|s| s.value() == value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: Option<Subject>,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingName);
        }
        validate_email(&self.email)?;
        if self.subject.is_none() {
            return Err(FormError::MissingSubject);
        }
        if self.message.trim().is_empty() {
            return Err(FormError::MissingMessage);
        }
        Ok(())
    }
}

/// Shallow shape check: one `@`, something before it, a dotted domain after it.
pub fn validate_email(email: &str) -> Result<&str, FormError> {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return Err(FormError::InvalidEmail);
    }
    let (local, domain) = email.split_once('@').ok_or(FormError::InvalidEmail)?;
    let domain_ok = !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.');
    if local.is_empty() || !domain_ok {
        return Err(FormError::InvalidEmail);
    }
    Ok(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Mercy Wanjiru".to_string(),
            email: "mercy@students.jkuat.ac.ke".to_string(),
            subject: Some(Subject::Projects),
            message: "Keen to join the smart city build.".to_string(),
        }
    }

    #[test]
    fn accepts_complete_form() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn reports_first_missing_field() {
        let form = ContactForm {
            name: "  ".to_string(),
            email: String::new(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(FormError::MissingName));

        let form = ContactForm {
            subject: None,
            ..filled()
        };
        assert_eq!(form.validate(), Err(FormError::MissingSubject));

        let form = ContactForm {
            message: "\n".to_string(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(FormError::MissingMessage));
    }

    #[test]
    fn email_shapes() {
        assert_eq!(validate_email(" ses@students.jkuat.ac.ke "), Ok("ses@students.jkuat.ac.ke"));
        for bad in ["", "ses", "@jkuat.ac.ke", "ses@jkuat", "ses@.ke", "ses@jkuat.", "s es@jkuat.ac.ke", "a@b@c.ke"] {
            assert_eq!(validate_email(bad), Err(FormError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn subject_values_round_trip() {
        for subject in Subject::ALL {
            assert_eq!(Subject::from_value(subject.value()), Some(subject));
        }
        assert_eq!(Subject::from_value(""), None);
    }
}
