//! UI layer for the desktop shell: app struct, panels, and the alert modal.

pub mod app;

pub use app::ContactDeskApp;
