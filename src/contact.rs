use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

use crate::config::{self, EmailConfig};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("email service is not configured: {0} is missing")]
    MissingConfig(&'static str),
    #[error("could not encode message: {0}")]
    Encode(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("email service answered {status}: {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

/// What the visitor typed. Serialises straight into the template parameters
/// the email template expects, where the subject is called `title`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    #[serde(rename = "title")]
    pub subject: String,
    pub message: String,
}

impl FormFields {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }
}

#[derive(Debug, Serialize)]
struct EmailRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a FormFields,
}

impl<'a> EmailRequest<'a> {
    fn new(config: &'a EmailConfig, fields: &'a FormFields) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: fields,
        }
    }
}

/// Sends one message through the email API. Anything but a 200 is an error.
/// Fields go out exactly as typed; the form's `required` inputs are the only
/// check.
pub async fn deliver(config: &EmailConfig, fields: &FormFields) -> Result<(), ContactError> {
    let body = EmailRequest::new(config, fields);
    let response = Request::post(config::get_email_api_url())
        .json(&body)
        .map_err(|e| ContactError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ContactError::Network(e.to_string()))?;

    let status = response.status();
    if status == 200 {
        Ok(())
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(ContactError::Rejected { status, body })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Sent,
    Failed,
}

impl Outcome {
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Sent => "Thank you for your message! I'll get back to you soon.",
            Outcome::Failed => "Failed to send message. Please try again later.",
        }
    }
}

/// Contact form state. `in_flight` is the only guard against double sends:
/// while it is set the submit control is disabled and new submissions are
/// refused.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: FormFields,
    in_flight: bool,
}

impl ContactForm {
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn edit(&mut self, field: Field, value: String) {
        self.fields.set(field, value);
    }

    /// Marks a submission as started and hands back what to send, or `None`
    /// when one is already on its way.
    pub fn begin_submit(&mut self) -> Option<FormFields> {
        if self.in_flight {
            return None;
        }
        self.in_flight = true;
        Some(self.fields.clone())
    }

    /// Records how the submission ended. Fields are only cleared on success.
    pub fn finish(&mut self, result: &Result<(), ContactError>) -> Outcome {
        self.in_flight = false;
        match result {
            Ok(()) => {
                self.fields = FormFields::default();
                Outcome::Sent
            }
            Err(_) => Outcome::Failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.edit(Field::Name, "Asha".to_string());
        form.edit(Field::Email, "asha@example.com".to_string());
        form.edit(Field::Subject, "Hello".to_string());
        form.edit(Field::Message, "Loved the sunrise.".to_string());
        form
    }

    #[test]
    fn success_clears_fields_and_reenables_submit() {
        let mut form = filled();
        let sent = form.begin_submit().unwrap();
        assert_eq!(sent.subject, "Hello");
        assert!(form.in_flight());

        let outcome = form.finish(&Ok(()));
        assert_eq!(outcome, Outcome::Sent);
        assert_eq!(form.fields(), &FormFields::default());
        assert!(!form.in_flight());
    }

    #[test]
    fn failure_keeps_fields_and_reenables_submit() {
        let mut form = filled();
        form.begin_submit().unwrap();
        let outcome = form.finish(&Err(ContactError::Network("offline".to_string())));
        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(form.fields(), filled().fields());
        assert!(!form.in_flight());
    }

    #[test]
    fn second_submit_while_in_flight_is_refused() {
        let mut form = filled();
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
        form.finish(&Ok(()));
        assert!(form.begin_submit().is_some());
    }

    #[test]
    fn subject_is_sent_as_title() {
        let form = filled();
        let json = serde_json::to_value(form.fields()).unwrap();
        assert_eq!(json["title"], "Hello");
        assert!(json.get("subject").is_none());
        assert_eq!(json["name"], "Asha");
    }

    #[test]
    fn request_body_carries_identifiers() {
        let config = EmailConfig::from_values(Some("svc"), Some("tpl"), Some("key")).unwrap();
        let form = filled();
        let body = EmailRequest::new(&config, form.fields());
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["service_id"], "svc");
        assert_eq!(json["user_id"], "key");
        assert_eq!(json["template_params"]["message"], "Loved the sunrise.");
    }

    #[test]
    fn whitespace_only_fields_are_sent_as_typed() {
        let config = EmailConfig::from_values(Some("svc"), Some("tpl"), Some("key")).unwrap();
        let mut form = filled();
        form.edit(Field::Subject, " ".to_string());

        let sent = form.begin_submit().unwrap();
        let json = serde_json::to_value(EmailRequest::new(&config, &sent)).unwrap();
        assert_eq!(json["template_params"]["title"], " ");
        assert_eq!(json["template_params"]["name"], "Asha");
    }
}
