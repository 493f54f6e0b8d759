//! Events flowing back from the network worker to the UI.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    WorkerReady,
    /// The endpoint answered 201; the form may be reset.
    SubmissionAccepted,
    /// Rejection or transport failure. The reason is diagnostic only; the
    /// user sees one fixed alert either way.
    SubmissionFailed { reason: String },
    WorkerFailed { reason: String },
}
