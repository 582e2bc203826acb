//! Contact form
//!
//! The page intercepts the form submit and hands the fields to a
//! [`ContactSubmitter`]. No submitter talks to the network yet; the default
//! one discards the message.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Fields of the contact form, taken verbatim from the inputs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty() && self.email.trim().is_empty() && self.message.trim().is_empty()
    }
}

/// Destination for contact form submissions
pub trait ContactSubmitter {
    fn submit(&self, form: ContactForm);
}

/// Drops every submission
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardSubmitter;

impl ContactSubmitter for DiscardSubmitter {
    fn submit(&self, form: ContactForm) {
        debug!(
            blank = form.is_blank(),
            message_len = form.message.len(),
            "Contact form submitted, discarding"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recording(RefCell<Vec<ContactForm>>);

    impl ContactSubmitter for Recording {
        fn submit(&self, form: ContactForm) {
            self.0.borrow_mut().push(form);
        }
    }

    #[test]
    fn test_blank() {
        assert!(ContactForm::default().is_blank());
        let form = ContactForm {
            message: "  hi ".to_string(),
            ..Default::default()
        };
        assert!(!form.is_blank());
    }

    #[test]
    fn test_submitter_receives_form_unvalidated() {
        let sink = Recording::default();
        let form = ContactForm {
            name: "Ada".to_string(),
            email: "not-an-email".to_string(),
            message: String::new(),
        };
        sink.submit(form.clone());
        DiscardSubmitter.submit(form.clone());
        assert_eq!(*sink.0.borrow(), vec![form]);
    }
}
