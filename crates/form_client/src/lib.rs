use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Key identifying one of the five contact form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    ContactNumber,
    Subject,
    Message,
}

impl FormField {
    /// Rendering order on the form, message last.
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Email,
        FormField::ContactNumber,
        FormField::Subject,
        FormField::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "E-mail id",
            FormField::ContactNumber => "Contact Number",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        }
    }
}

/// The five user-entered contact fields.
///
/// Serializes with the endpoint's camelCase key names, so the struct doubles
/// as the POST body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub contact_number: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::ContactNumber => &self.contact_number,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    pub fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::ContactNumber => &mut self.contact_number,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        }
    }

    /// Replaces exactly one field; the other four are untouched.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
    }

    /// First field still empty, in rendering order. Presence is the only
    /// pre-submit check; format and length are never inspected.
    pub fn first_missing(&self) -> Option<FormField> {
        FormField::ALL
            .into_iter()
            .find(|field| self.value(*field).is_empty())
    }

    pub fn is_complete(&self) -> bool {
        self.first_missing().is_none()
    }

    /// Back to the all-empty initial value.
    pub fn clear(&mut self) {
        *self = ContactForm::default();
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("endpoint rejected submission with status {status}")]
    Rejected { status: StatusCode },
    #[error("failed to reach submission endpoint: {0}")]
    Transport(#[from] reqwest::Error),
}

/// HTTP client for the remote contact endpoint.
///
/// The endpoint URL is injected so tests and deployments can point at a
/// stand-in server.
#[derive(Clone)]
pub struct ContactFormClient {
    http: Client,
    endpoint_url: String,
}

impl ContactFormClient {
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint_url: endpoint_url.into(),
        }
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// Sends the form as one JSON POST. Success is exactly status 201; any
    /// other status is a rejection. No retries, no idempotency key — a
    /// resubmission is a wholly new request.
    pub async fn submit(&self, form: &ContactForm) -> Result<(), SubmitError> {
        let response = self.http.post(&self.endpoint_url).json(form).send().await?;

        let status = response.status();
        if status == StatusCode::CREATED {
            debug!(endpoint = %self.endpoint_url, "submission accepted");
            Ok(())
        } else {
            Err(SubmitError::Rejected { status })
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
