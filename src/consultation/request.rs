use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

const MIN_NAME_LEN: usize = 2;
const MIN_PHONE_LEN: usize = 10;

/// Contact form contents for a single submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsultationRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: String,
    pub service: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    BirthDate,
    Service,
    Message,
}

impl ConsultationRequest {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::BirthDate => self.birth_date = value,
            Field::Service => self.service = value,
            Field::Message => self.message = value,
        }
    }

    /// Checks every rule and reports all failures in form order.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();

        if trimmed_len(&self.name) < MIN_NAME_LEN {
            errors.push(ValidationError::NameTooShort);
        }
        if !is_valid_email(&self.email) {
            errors.push(ValidationError::InvalidEmail);
        }
        if trimmed_len(&self.phone) < MIN_PHONE_LEN {
            errors.push(ValidationError::InvalidPhone);
        }
        if self.birth_date.is_empty() {
            errors.push(ValidationError::MissingBirthDate);
        }
        if self.service.is_empty() {
            errors.push(ValidationError::MissingService);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }
}

/// Length in UTF-16 units after trimming whitespace and byte order marks,
/// the way the browser measures a trimmed input value.
fn trimmed_len(value: &str) -> usize {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .encode_utf16()
        .count()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name must be at least 2 characters long")]
    NameTooShort,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
    #[error("Birth date is required")]
    MissingBirthDate,
    #[error("Please select a service")]
    MissingService,
}

/// Non-empty, ordered list of failed rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// One message per line, as shown in the error notification.
    pub fn joined(&self) -> String {
        self.0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use rstest::rstest;

    use super::*;

    pub(crate) fn valid_request() -> ConsultationRequest {
        ConsultationRequest {
            name: "Al".to_string(),
            email: "a@b.co".to_string(),
            phone: "9876543210".to_string(),
            birth_date: "1990-01-01".to_string(),
            service: "career".to_string(),
            message: String::new(),
        }
    }

    #[test]
    fn valid_request_passes() {
        assert_eq!(valid_request().validate(), Ok(()));
    }

    #[test]
    fn every_rule_failing_yields_five_errors_in_order() {
        let request = ConsultationRequest {
            name: "A".to_string(),
            email: "bad".to_string(),
            phone: "123".to_string(),
            birth_date: String::new(),
            service: String::new(),
            message: String::new(),
        };

        let errors = request.validate().unwrap_err();

        assert_eq!(
            errors.errors(),
            &[
                ValidationError::NameTooShort,
                ValidationError::InvalidEmail,
                ValidationError::InvalidPhone,
                ValidationError::MissingBirthDate,
                ValidationError::MissingService,
            ]
        );
        assert_eq!(
            errors.joined(),
            "Name must be at least 2 characters long\n\
             Please enter a valid email address\n\
             Please enter a valid phone number\n\
             Birth date is required\n\
             Please select a service"
        );
    }

    #[rstest]
    #[case(Field::Name, "  A  ", ValidationError::NameTooShort)]
    #[case(Field::Name, "", ValidationError::NameTooShort)]
    #[case(Field::Email, "", ValidationError::InvalidEmail)]
    #[case(Field::Email, "a b@c.de", ValidationError::InvalidEmail)]
    #[case(Field::Email, "a@bc", ValidationError::InvalidEmail)]
    #[case(Field::Name, "\u{feff}A\u{feff}", ValidationError::NameTooShort)]
    #[case(Field::Phone, " 987654321 ", ValidationError::InvalidPhone)]
    #[case(Field::BirthDate, "", ValidationError::MissingBirthDate)]
    #[case(Field::Service, "", ValidationError::MissingService)]
    fn single_rule_failure(#[case] field: Field, #[case] value: &str, #[case] expected: ValidationError) {
        let mut request = valid_request();
        request.set(field, value.to_string());

        let errors = request.validate().unwrap_err();

        assert_eq!(errors.errors(), &[expected]);
    }

    #[rstest]
    #[case("a@b.co")]
    #[case("first.last@sub.example.in")]
    #[case("x+tag@d.io")]
    fn accepts_simple_email_shapes(#[case] email: &str) {
        assert!(is_valid_email(email));
    }

    #[rstest]
    #[case("😀")]
    #[case(" अं ")]
    fn lengths_count_utf16_units(#[case] name: &str) {
        let mut request = valid_request();
        request.set(Field::Name, name.to_string());
        assert_eq!(request.validate(), Ok(()));
    }

    #[test]
    fn message_is_optional_and_trimmed_name_counts() {
        let mut request = valid_request();
        request.set(Field::Name, "  Al ".to_string());
        request.set(Field::Message, String::new());
        assert!(request.validate().is_ok());
    }
}
