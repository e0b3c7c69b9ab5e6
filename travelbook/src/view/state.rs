//! Finite-state view model: which section is visible and whether the
//! booking modal is open.

use crate::models::TravelOption;

/// Named sections of the client. Exactly one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Login,
    Register,
    Home,
    Bookings,
    Profile,
}

impl Screen {
    pub const ALL: [Self; 5] = [
        Self::Login,
        Self::Register,
        Self::Home,
        Self::Bookings,
        Self::Profile,
    ];

    /// Stable section identifier.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Login => "login-section",
            Self::Register => "register-section",
            Self::Home => "home-section",
            Self::Bookings => "bookings-section",
            Self::Profile => "profile-section",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
            Self::Home => "Travel Options",
            Self::Bookings => "My Bookings",
            Self::Profile => "Profile",
        }
    }

    /// Sections reachable only with a session.
    pub const fn requires_auth(self) -> bool {
        matches!(self, Self::Home | Self::Bookings | Self::Profile)
    }
}

/// The open booking dialog for one travel option.
///
/// Keeps the seat count as entered apart from the capped count behind the
/// on-screen estimate; only the former is ever submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingModal {
    pub option_id: i64,
    pub title: String,
    pub route: String,
    pub price_per_seat: f64,
    pub available_seats: u32,
    requested: Option<u32>,
    seats: u32,
}

impl BookingModal {
    /// Fresh dialog with one seat requested.
    pub fn for_option(option: &TravelOption) -> Self {
        let mut modal = Self {
            option_id: option.option_id,
            title: option.title.clone(),
            route: option.route(),
            price_per_seat: option.price_per_seat,
            available_seats: option.available_seats,
            requested: None,
            seats: 0,
        };
        modal.set_seats(1);
        modal
    }

    /// Seats behind the estimate, never above the available inventory.
    pub const fn seats(&self) -> u32 {
        self.seats
    }

    /// The count as entered, if it is a positive whole number.
    pub const fn requested(&self) -> Option<u32> {
        self.requested
    }

    /// Apply raw seat-count input. For the estimate, unparsable or zero
    /// input counts as one seat and anything above the inventory is capped.
    pub fn set_seats_input(&mut self, input: &str) {
        self.requested = input.trim().parse::<u32>().ok().filter(|n| *n > 0);
        self.seats = self.requested.unwrap_or(1).min(self.available_seats);
    }

    pub fn set_seats(&mut self, seats: u32) {
        self.requested = Some(seats).filter(|n| *n > 0);
        self.seats = seats.max(1).min(self.available_seats);
    }

    /// Advisory total; the server computes the real one.
    pub fn total(&self) -> f64 {
        self.price_per_seat * f64::from(self.seats)
    }
}

/// Everything that changes what is on screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Navigate(Screen),
    OpenModal(BookingModal),
    SeatsInput(String),
    CloseModal,
}

/// Current screen plus the optional booking modal.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    screen: Screen,
    modal: Option<BookingModal>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            screen: Screen::Login,
            modal: None,
        }
    }
}

impl ViewState {
    pub const fn screen(&self) -> Screen {
        self.screen
    }

    pub const fn modal(&self) -> Option<&BookingModal> {
        self.modal.as_ref()
    }

    pub fn is_visible(&self, screen: Screen) -> bool {
        self.screen == screen
    }

    /// Apply one event. Navigating away closes the modal; seat input without
    /// an open modal is ignored.
    pub fn transition(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::Navigate(screen) => {
                self.screen = screen;
                self.modal = None;
            }
            ViewEvent::OpenModal(modal) => self.modal = Some(modal),
            ViewEvent::SeatsInput(input) => {
                if let Some(modal) = self.modal.as_mut() {
                    modal.set_seats_input(&input);
                }
            }
            ViewEvent::CloseModal => self.modal = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TravelKind, TravelOption};
    use chrono::NaiveDateTime;

    fn option(price: f64, seats: u32) -> TravelOption {
        let at = NaiveDateTime::parse_from_str("2025-03-01 06:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        TravelOption {
            option_id: 4,
            title: "Volvo Sleeper".to_string(),
            kind: TravelKind::Bus,
            source: "Pune".to_string(),
            destination: "Goa".to_string(),
            departure_time: at,
            arrival_time: at,
            price_per_seat: price,
            available_seats: seats,
        }
    }

    #[test]
    fn test_exactly_one_screen_visible() {
        let mut state = ViewState::default();
        state.transition(ViewEvent::Navigate(Screen::Bookings));
        let visible: Vec<_> = Screen::ALL.iter().filter(|s| state.is_visible(**s)).collect();
        assert_eq!(visible, vec![&Screen::Bookings]);
    }

    #[test]
    fn test_seat_change_updates_total() {
        let mut state = ViewState::default();
        state.transition(ViewEvent::OpenModal(BookingModal::for_option(&option(1000.0, 10))));
        assert!((state.modal().unwrap().total() - 1000.0).abs() < f64::EPSILON);

        state.transition(ViewEvent::SeatsInput("3".to_string()));
        let modal = state.modal().unwrap();
        assert_eq!(modal.seats(), 3);
        assert!((modal.total() - 3000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_estimate_is_capped_but_request_is_kept() {
        let mut modal = BookingModal::for_option(&option(500.0, 4));
        assert_eq!(modal.requested(), Some(1));
        modal.set_seats_input("abc");
        assert_eq!((modal.seats(), modal.requested()), (1, None));
        modal.set_seats_input("0");
        assert_eq!((modal.seats(), modal.requested()), (1, None));
        modal.set_seats_input("9");
        assert_eq!((modal.seats(), modal.requested()), (4, Some(9)));
    }

    #[test]
    fn test_sold_out_estimate_is_zero() {
        let mut modal = BookingModal::for_option(&option(500.0, 0));
        assert_eq!(modal.seats(), 0);
        assert!(modal.total().abs() < f64::EPSILON);
        modal.set_seats_input("1");
        assert_eq!((modal.seats(), modal.requested()), (0, Some(1)));
    }

    #[test]
    fn test_navigation_closes_modal() {
        let mut state = ViewState::default();
        state.transition(ViewEvent::OpenModal(BookingModal::for_option(&option(1.0, 1))));
        state.transition(ViewEvent::Navigate(Screen::Login));
        assert!(state.modal().is_none());
        assert_eq!(state.screen(), Screen::Login);
    }

    #[test]
    fn test_seat_input_without_modal_is_ignored() {
        let mut state = ViewState::default();
        state.transition(ViewEvent::SeatsInput("2".to_string()));
        assert_eq!(state, ViewState::default());
    }
}
