//! Typed output bindings.
//!
//! Handlers never write to the terminal directly; they go through a [`View`]
//! so the same controller can drive a terminal or a test recorder.

use std::io::{IsTerminal, Write};

use tracing::warn;

use super::{render, BookingModal, Screen, ViewState};

/// Banner flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
    Info,
}

/// Named content areas whose whole content is replaced on each render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    TravelOptions,
    Bookings,
    BookingDetail,
    Profile,
}

/// Output surface the controller renders into.
pub trait View {
    fn show_alert(&mut self, kind: AlertKind, message: &str);
    fn set_loading(&mut self, loading: bool);
    /// Toggle auth-only versus guest-only navigation.
    fn set_navigation(&mut self, authenticated: bool);
    fn set_user_name(&mut self, name: &str);
    fn replace_container(&mut self, container: Container, content: String);
    /// Reflect the current screen and modal.
    fn render_state(&mut self, state: &ViewState);
}

/// Terminal rendering: content on stdout, banners and progress on stderr.
pub struct TerminalView<W: Write> {
    out: W,
    last_screen: Option<Screen>,
    last_modal: Option<BookingModal>,
    loading_shown: bool,
    errors: usize,
}

impl TerminalView<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TerminalView<W> {
    pub const fn new(out: W) -> Self {
        Self {
            out,
            last_screen: None,
            last_modal: None,
            loading_shown: false,
            errors: 0,
        }
    }

    /// Whether any error banner was shown.
    pub const fn had_errors(&self) -> bool {
        self.errors > 0
    }

    fn write(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text.trim_end()) {
            warn!("Failed to write output: {e}");
        }
    }
}

impl<W: Write> View for TerminalView<W> {
    fn show_alert(&mut self, kind: AlertKind, message: &str) {
        match kind {
            AlertKind::Success => eprintln!("✓ {message}"),
            AlertKind::Info => eprintln!("{message}"),
            AlertKind::Error => {
                self.errors += 1;
                eprintln!("error: {message}");
            }
        }
    }

    fn set_loading(&mut self, loading: bool) {
        let stderr = std::io::stderr();
        if !stderr.is_terminal() {
            return;
        }
        let mut stderr = stderr.lock();
        if loading && !self.loading_shown {
            let _ = write!(stderr, "Loading...\r");
        } else if !loading && self.loading_shown {
            let _ = write!(stderr, "\r\x1b[K");
        }
        let _ = stderr.flush();
        self.loading_shown = loading;
    }

    fn set_navigation(&mut self, _authenticated: bool) {}

    fn set_user_name(&mut self, name: &str) {
        self.write(&format!("Logged in as {name}"));
    }

    fn replace_container(&mut self, _container: Container, content: String) {
        self.write(&content);
    }

    fn render_state(&mut self, state: &ViewState) {
        let screen = state.screen();
        if self.last_screen != Some(screen) {
            self.last_screen = Some(screen);
            self.write(&format!("== {} ==", screen.title()));
            if screen == Screen::Login {
                self.write(
                    "Not logged in. Run `travelbook login <username>` or `travelbook register`.",
                );
            }
        }
        if state.modal() != self.last_modal.as_ref() {
            self.last_modal = state.modal().cloned();
            if let Some(modal) = state.modal() {
                self.write(&render::booking_modal(modal));
            }
        }
    }
}

#[cfg(test)]
pub use recording::RecordingView;

#[cfg(test)]
mod recording {
    use std::collections::HashMap;

    use super::{AlertKind, Container, View};
    use crate::view::ViewState;

    /// Captures everything the controller renders.
    #[derive(Debug, Default)]
    pub struct RecordingView {
        pub alerts: Vec<(AlertKind, String)>,
        pub loading: bool,
        pub loading_changes: usize,
        pub authenticated: Option<bool>,
        pub user_name: Option<String>,
        pub containers: HashMap<Container, String>,
        pub state: ViewState,
    }

    impl RecordingView {
        pub fn last_alert(&self) -> Option<(AlertKind, &str)> {
            self.alerts.last().map(|(kind, msg)| (*kind, msg.as_str()))
        }

        pub fn container(&self, container: Container) -> Option<&str> {
            self.containers.get(&container).map(String::as_str)
        }
    }

    impl View for RecordingView {
        fn show_alert(&mut self, kind: AlertKind, message: &str) {
            self.alerts.push((kind, message.to_string()));
        }

        fn set_loading(&mut self, loading: bool) {
            self.loading = loading;
            self.loading_changes += 1;
        }

        fn set_navigation(&mut self, authenticated: bool) {
            self.authenticated = Some(authenticated);
        }

        fn set_user_name(&mut self, name: &str) {
            self.user_name = Some(name.to_string());
        }

        fn replace_container(&mut self, container: Container, content: String) {
            self.containers.insert(container, content);
        }

        fn render_state(&mut self, state: &ViewState) {
            self.state = state.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_view_prints_screen_once() {
        let mut buf = Vec::new();
        {
            let mut view = TerminalView::new(&mut buf);
            let state = ViewState::default();
            view.render_state(&state);
            view.render_state(&state);
            view.replace_container(Container::Bookings, "You have no bookings yet.\n".to_string());
        }
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("== Login ==\n"));
        assert_eq!(text.matches("== Login ==").count(), 1);
        assert!(text.ends_with("You have no bookings yet.\n"));
    }

    #[test]
    fn test_terminal_view_tracks_errors() {
        let mut view = TerminalView::new(Vec::new());
        view.show_alert(AlertKind::Success, "Booking created successfully!");
        assert!(!view.had_errors());
        view.show_alert(AlertKind::Error, "Failed to load bookings");
        assert!(view.had_errors());
    }
}
