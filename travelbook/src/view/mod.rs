//! View layer: screen state, typed output bindings and text rendering.

mod binding;
pub mod format;
pub mod render;
mod state;

pub use binding::{AlertKind, Container, TerminalView, View};
pub use state::{BookingModal, Screen, ViewEvent, ViewState};

#[cfg(test)]
pub use binding::RecordingView;
