//! Application shell: navigation bar, contact information and form panels,
//! and the submission failure alert.

use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use form_client::{ContactForm, FormField};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;

pub const ALERT_MESSAGE: &str = "Submission Failed. Please try again.";

const BRAND: &str = "GUVI";
const PRIMARY_NAV_LINKS: [&str; 5] = [
    "Courses",
    "Live Classes",
    "Practice",
    "Resources",
    "Solutions",
];
const SECONDARY_NAV_LINKS: [&str; 2] = ["Login", "Sign Up"];

const ACCENT_GREEN: egui::Color32 = egui::Color32::from_rgb(22, 163, 74);
const NAV_COLLAPSE_WIDTH: f32 = 860.0;
const SIDE_BY_SIDE_WIDTH: f32 = 760.0;

struct ContactEntry {
    title: &'static str,
    content: &'static str,
}

const CONTACT_ENTRIES: [ContactEntry; 4] = [
    ContactEntry {
        title: "Give us a call",
        content: "+91 9736097320",
    },
    ContactEntry {
        title: "Write to us",
        content: "cs@guvi.in",
    },
    ContactEntry {
        title: "Visit us in Chennai",
        content: "IITM Research park - phase 2, module #9, 3rd floor, D block, Kanagam Rd, Taramani, Chennai, Tamil Nadu 600113",
    },
    ContactEntry {
        title: "Visit us in Noida",
        content: "A11, HCL Corporation Pvt. Ltd, Block A, Sector 3, Noida, Uttar Pradesh 201307",
    },
];

pub struct ContactDeskApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    form: ContactForm,
    compact_menu_open: bool,

    /// Failure alerts waiting to be dismissed. Two in-flight submissions can
    /// both fail; the user dismisses each alert in turn.
    pending_alerts: usize,
    focus_field: Option<FormField>,
    status: String,
}

impl ContactDeskApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            form: ContactForm::default(),
            compact_menu_open: false,
            pending_alerts: 0,
            focus_field: None,
            status: "Starting backend worker...".to_string(),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.apply_event(event);
        }
    }

    fn apply_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::WorkerReady => {
                self.status = "Ready".to_string();
            }
            UiEvent::SubmissionAccepted => {
                // Silent reset; the page never showed a success indicator.
                self.form.clear();
            }
            UiEvent::SubmissionFailed { reason } => {
                tracing::debug!(%reason, "submission failed");
                self.pending_alerts += 1;
            }
            UiEvent::WorkerFailed { reason } => {
                self.status = format!("Backend worker unavailable: {reason}");
            }
        }
    }

    fn active_alert(&self) -> Option<&'static str> {
        (self.pending_alerts > 0).then_some(ALERT_MESSAGE)
    }

    fn try_submit(&mut self) {
        if let Some(field) = self.form.first_missing() {
            self.status = format!("{} is required", field.label());
            self.focus_field = Some(field);
            return;
        }

        dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::SubmitForm {
                form: self.form.clone(),
            },
            &mut self.status,
        );
    }

    fn show_nav_bar(&mut self, ui: &mut egui::Ui) {
        let compact = ui.available_width() < NAV_COLLAPSE_WIDTH;

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(BRAND)
                    .strong()
                    .size(22.0)
                    .color(ACCENT_GREEN),
            );

            if compact {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("☰").clicked() {
                        self.compact_menu_open = !self.compact_menu_open;
                    }
                });
            } else {
                ui.add_space(12.0);
                for link in PRIMARY_NAV_LINKS {
                    let _ = ui.link(link);
                    ui.add_space(4.0);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let _ = ui.add(
                        egui::Button::new(egui::RichText::new("Sign Up").color(ACCENT_GREEN))
                            .stroke(egui::Stroke::new(1.0, ACCENT_GREEN)),
                    );
                    let _ = ui.add(
                        egui::Button::new(
                            egui::RichText::new("Login").color(egui::Color32::WHITE),
                        )
                        .fill(ACCENT_GREEN),
                    );
                });
            }
        });
        ui.add_space(6.0);

        if compact && self.compact_menu_open {
            ui.separator();
            for link in PRIMARY_NAV_LINKS.iter().chain(SECONDARY_NAV_LINKS.iter()) {
                let _ = ui.link(*link);
            }
            ui.add_space(6.0);
        }
    }

    fn show_contact_info(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::symmetric(18, 16))
            .show(ui, |ui| {
                ui.heading("Contact Us");
                ui.add_space(6.0);
                ui.label(
                    "Let us know your queries, feedbacks and enquiries. \
                     We are here to support you 24/7.",
                );

                for entry in &CONTACT_ENTRIES {
                    ui.add_space(8.0);
                    ui.separator();
                    ui.add_space(8.0);
                    ui.label(egui::RichText::new(entry.title).strong());
                    ui.label(egui::RichText::new(entry.content).weak());
                }
            });
    }

    fn show_contact_form(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::symmetric(18, 16))
            .show(ui, |ui| {
                ui.label(
                    egui::RichText::new("Say Hello!")
                        .heading()
                        .strong()
                        .color(ACCENT_GREEN),
                );
                ui.label(egui::RichText::new("Feel free to stop by and say hi!").weak());
                ui.add_space(10.0);

                let focus_to_set = self.focus_field.take();
                let mut submit_requested = false;

                for field in FormField::ALL {
                    ui.label(egui::RichText::new(format!("{} *", field.label())).strong());

                    let edit = if field == FormField::Message {
                        egui::TextEdit::multiline(self.form.value_mut(field))
                            .desired_rows(4)
                            .desired_width(f32::INFINITY)
                    } else {
                        egui::TextEdit::singleline(self.form.value_mut(field))
                            .desired_width(f32::INFINITY)
                    };
                    let response = ui.add(edit);

                    if focus_to_set == Some(field) {
                        response.request_focus();
                    }

                    // Enter submits from the single-line inputs, as the page
                    // form did; the message box keeps Enter for newlines.
                    if field != FormField::Message
                        && response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter))
                    {
                        submit_requested = true;
                    }

                    ui.add_space(8.0);
                }

                let send = ui.add_sized(
                    [ui.available_width(), 36.0],
                    egui::Button::new(
                        egui::RichText::new("Send")
                            .strong()
                            .color(egui::Color32::WHITE),
                    )
                    .fill(ACCENT_GREEN),
                );
                if send.clicked() || submit_requested {
                    self.try_submit();
                }
            });
    }

    fn show_alert(&mut self, ctx: &egui::Context) {
        if self.pending_alerts == 0 {
            return;
        }

        egui::Window::new("Submission Failed")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(ALERT_MESSAGE);
                ui.add_space(10.0);
                if ui
                    .add_sized([ui.available_width(), 28.0], egui::Button::new("OK"))
                    .clicked()
                {
                    self.pending_alerts -= 1;
                }
            });
    }
}

impl eframe::App for ContactDeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let alert_open = self.pending_alerts > 0;

        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            ui.add_enabled_ui(!alert_open, |ui| self.show_nav_bar(ui));
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.add_enabled_ui(!alert_open, |ui| {
                ui.horizontal(|ui| {
                    ui.small("Status:");
                    ui.small(egui::RichText::new(&self.status).weak());
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!alert_open, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    if ui.available_width() < SIDE_BY_SIDE_WIDTH {
                        self.show_contact_info(ui);
                        ui.add_space(12.0);
                        self.show_contact_form(ui);
                    } else {
                        ui.columns(2, |columns| {
                            self.show_contact_info(&mut columns[0]);
                            self.show_contact_form(&mut columns[1]);
                        });
                    }
                });
            });
        });

        self.show_alert(ctx);

        // Worker events arrive without user input; keep draining the queue.
        ctx.request_repaint_after(Duration::from_millis(200));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;

    fn test_app() -> (ContactDeskApp, Receiver<BackendCommand>) {
        let (cmd_tx, cmd_rx) = bounded(8);
        let (_ui_tx, ui_rx) = bounded::<UiEvent>(8);
        (ContactDeskApp::new(cmd_tx, ui_rx), cmd_rx)
    }

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@x.com".to_string(),
            contact_number: "123".to_string(),
            subject: "Hi".to_string(),
            message: "Test".to_string(),
        }
    }

    #[test]
    fn accepted_submission_resets_every_field_without_alert() {
        let (mut app, _cmd_rx) = test_app();
        app.form = filled_form();

        app.apply_event(UiEvent::SubmissionAccepted);

        assert_eq!(app.form, ContactForm::default());
        assert_eq!(app.active_alert(), None);
    }

    #[test]
    fn failed_submission_preserves_input_and_raises_one_alert() {
        let (mut app, _cmd_rx) = test_app();
        app.form = filled_form();

        app.apply_event(UiEvent::SubmissionFailed {
            reason: "endpoint rejected submission with status 500".to_string(),
        });

        assert_eq!(app.form, filled_form());
        assert_eq!(app.pending_alerts, 1);
        assert_eq!(
            app.active_alert(),
            Some("Submission Failed. Please try again.")
        );
    }

    #[test]
    fn transport_failure_behaves_like_a_rejection() {
        let (mut app, _cmd_rx) = test_app();
        app.form = filled_form();

        app.apply_event(UiEvent::SubmissionFailed {
            reason: "failed to reach submission endpoint: connection refused".to_string(),
        });

        assert_eq!(app.form, filled_form());
        assert_eq!(app.pending_alerts, 1);
    }

    #[test]
    fn back_to_back_accepted_submissions_leave_form_empty() {
        let (mut app, _cmd_rx) = test_app();
        app.form = filled_form();

        // Both in-flight submissions resolve 201, in either order; the end
        // state is the same.
        app.apply_event(UiEvent::SubmissionAccepted);
        app.apply_event(UiEvent::SubmissionAccepted);

        assert_eq!(app.form, ContactForm::default());
        assert_eq!(app.active_alert(), None);
    }

    #[test]
    fn each_failure_raises_its_own_alert() {
        let (mut app, _cmd_rx) = test_app();
        app.form = filled_form();

        app.apply_event(UiEvent::SubmissionFailed {
            reason: "status 500".to_string(),
        });
        app.apply_event(UiEvent::SubmissionFailed {
            reason: "connection refused".to_string(),
        });

        assert_eq!(app.pending_alerts, 2);
        assert_eq!(app.form, filled_form());
    }

    #[test]
    fn submit_with_missing_field_does_not_reach_the_queue() {
        let (mut app, cmd_rx) = test_app();
        app.form = filled_form();
        app.form.set(FormField::Email, "");

        app.try_submit();

        assert!(cmd_rx.try_recv().is_err());
        assert_eq!(app.focus_field, Some(FormField::Email));
        assert_eq!(app.status, "E-mail id is required");
    }

    #[test]
    fn submit_queues_one_command_with_current_values() {
        let (mut app, cmd_rx) = test_app();
        app.form = filled_form();

        app.try_submit();

        let cmd = cmd_rx.try_recv().expect("queued command");
        assert_eq!(
            cmd,
            BackendCommand::SubmitForm {
                form: filled_form()
            }
        );
        assert!(cmd_rx.try_recv().is_err());
        // Queueing alone neither resets nor alerts; that waits on the event.
        assert_eq!(app.form, filled_form());
        assert_eq!(app.active_alert(), None);
    }

    #[test]
    fn worker_events_update_the_status_line() {
        let (mut app, _cmd_rx) = test_app();

        app.apply_event(UiEvent::WorkerReady);
        assert_eq!(app.status, "Ready");

        app.apply_event(UiEvent::WorkerFailed {
            reason: "failed to build backend runtime: boom".to_string(),
        });
        assert!(app.status.starts_with("Backend worker unavailable"));
    }
}
