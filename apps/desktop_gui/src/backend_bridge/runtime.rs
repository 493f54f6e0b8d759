//! Network worker: a dedicated thread driving a tokio runtime so the egui
//! loop never blocks on the wire.

use std::thread;

use crossbeam_channel::{Receiver, Sender};
use form_client::ContactFormClient;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Spawns the worker and returns immediately. Commands are drained until the
/// UI side hangs up. Each submission runs as its own task: nothing prevents
/// several from being in flight at once, and their responses apply in
/// whatever order they arrive.
pub fn spawn_backend_worker(
    endpoint_url: String,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::WorkerFailed {
                    reason: format!("failed to build backend runtime: {err}"),
                });
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let client = ContactFormClient::new(endpoint_url);
            tracing::info!(endpoint = %client.endpoint_url(), "backend worker ready");
            let _ = ui_tx.try_send(UiEvent::WorkerReady);

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::SubmitForm { form } => {
                        let client = client.clone();
                        let ui_tx = ui_tx.clone();
                        tokio::spawn(async move {
                            let outcome = client.submit(&form).await;
                            match &outcome {
                                Ok(()) => {
                                    let _ = ui_tx.try_send(UiEvent::SubmissionAccepted);
                                }
                                Err(err) => {
                                    let _ = ui_tx.try_send(UiEvent::SubmissionFailed {
                                        reason: err.to_string(),
                                    });
                                }
                            }
                            // The source page logged after its submit handler
                            // on every attempt, not only on success.
                            tracing::info!(
                                outcome = if outcome.is_ok() { "accepted" } else { "failed" },
                                "form submission settled"
                            );
                        });
                    }
                }
            }
        });
    });
}
