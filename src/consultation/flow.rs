//! Contact form submission states.
//!
//! `Idle -> Validating -> Invalid -> Idle` on bad input, and
//! `Idle -> Validating -> Submitting -> Redirected -> Idle` otherwise.
//! Validating and Redirected are instantaneous, so only `Idle` and
//! `Submitting` are ever observed between events.

use log::{debug, info};

use crate::consultation::message::{consultation_message, whatsapp_link};
use crate::consultation::request::{ConsultationRequest, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    /// Holds the fields as they were when validation passed.
    Submitting(ConsultationRequest),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input is valid and the simulated send has started.
    Accepted,
    Rejected(ValidationErrors),
    /// A submission is already in flight.
    Busy,
}

#[derive(Debug, Default)]
pub struct ContactFlow {
    phase: FormPhase,
}

impl ContactFlow {
    #[cfg(test)]
    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, FormPhase::Submitting(_))
    }

    pub fn submit(&mut self, request: &ConsultationRequest) -> SubmitOutcome {
        if self.is_submitting() {
            return SubmitOutcome::Busy;
        }
        match request.validate() {
            Ok(()) => {
                debug!("Consultation request valid, submitting");
                self.phase = FormPhase::Submitting(request.clone());
                SubmitOutcome::Accepted
            }
            Err(errors) => {
                debug!("Consultation request rejected: {} errors", errors.errors().len());
                SubmitOutcome::Rejected(errors)
            }
        }
    }

    /// Finishes a submission and returns the WhatsApp link for the fields
    /// captured at submit time, or `None` when nothing was being submitted.
    pub fn complete(&mut self) -> Option<String> {
        let FormPhase::Submitting(request) = std::mem::take(&mut self.phase) else {
            return None;
        };
        info!("Handing consultation request off to WhatsApp");
        Some(whatsapp_link(&consultation_message(&request)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consultation::request::tests::valid_request;

    #[test]
    fn invalid_input_never_reaches_submitting() {
        let mut flow = ContactFlow::default();
        let request = ConsultationRequest {
            name: "A".to_string(),
            email: "bad".to_string(),
            phone: "123".to_string(),
            ..ConsultationRequest::default()
        };

        match flow.submit(&request) {
            SubmitOutcome::Rejected(errors) => assert_eq!(errors.errors().len(), 5),
            other => panic!("expected rejection, got {:?}", other),
        }
        assert_eq!(flow.phase(), &FormPhase::Idle);
        assert_eq!(flow.complete(), None);
    }

    #[test]
    fn each_missing_required_field_is_rejected() {
        let blanks: [fn(&mut ConsultationRequest); 5] = [
            |r| r.name.clear(),
            |r| r.email.clear(),
            |r| r.phone.clear(),
            |r| r.birth_date.clear(),
            |r| r.service.clear(),
        ];
        for blank in blanks {
            let mut request = valid_request();
            blank(&mut request);
            let mut flow = ContactFlow::default();
            assert!(matches!(flow.submit(&request), SubmitOutcome::Rejected(e) if !e.errors().is_empty()));
            assert!(!flow.is_submitting());
        }
    }

    #[test]
    fn valid_input_submits_then_returns_to_idle_with_link() {
        let mut flow = ContactFlow::default();
        let request = valid_request();

        assert_eq!(flow.submit(&request), SubmitOutcome::Accepted);
        assert!(flow.is_submitting());
        assert_eq!(flow.submit(&request), SubmitOutcome::Busy);

        let link = flow.complete().expect("link after submitting");
        assert!(link.starts_with("https://wa.me/917738961658?text="));
        let decoded = urlencoding::decode(&link["https://wa.me/917738961658?text=".len()..])
            .expect("utf-8 message");
        assert!(decoded.contains("Career Guidance"));
        for value in ["Al", "a@b.co", "9876543210", "1990-01-01"] {
            assert!(decoded.contains(value), "missing {}", value);
        }

        assert_eq!(flow.phase(), &FormPhase::Idle);
        assert_eq!(flow.complete(), None);
    }

    #[test]
    fn edits_during_the_delay_do_not_reach_the_message() {
        let mut flow = ContactFlow::default();
        let mut request = valid_request();
        assert_eq!(flow.submit(&request), SubmitOutcome::Accepted);

        request.name.clear();
        request.email = "bad".to_string();

        let link = flow.complete().expect("link after submitting");
        let decoded = urlencoding::decode(&link["https://wa.me/917738961658?text=".len()..])
            .expect("utf-8 message");
        assert!(decoded.contains("• Name: Al"));
        assert!(decoded.contains("• Email: a@b.co"));
        assert!(!decoded.contains("• Email: bad"));
    }
}
