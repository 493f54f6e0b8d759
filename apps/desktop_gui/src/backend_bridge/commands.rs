//! Backend commands queued from UI to backend worker.

use form_client::ContactForm;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    SubmitForm { form: ContactForm },
}
