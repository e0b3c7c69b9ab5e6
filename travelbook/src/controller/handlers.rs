//! Handler implementations.
//!
//! Every handler follows the same shape: loading on, one API call, render the
//! result or an error banner, loading off. No error escapes a handler.

use tracing::{debug, warn};

use crate::api::{ApiClient, ApiError, TravelFilters};
use crate::models::{Booking, NewBooking, ProfileUpdate, TravelOption, User};
use crate::view::{render, AlertKind, BookingModal, Container, Screen, View, ViewEvent, ViewState};

use super::{LoginForm, RegisterForm};

const LOGIN_OK: &str = "Login successful!";
const REGISTER_OK: &str = "Registration successful! Please login.";
const LOGOUT_OK: &str = "Logged out successfully";
const BOOKING_OK: &str = "Booking created successfully!";
const CANCEL_OK: &str = "Booking cancelled successfully";
const PROFILE_OK: &str = "Profile updated successfully";

const PASSWORD_MISMATCH: &str = "Passwords do not match";
const OPTIONS_FAILED: &str = "Failed to load travel options";
const BOOKINGS_FAILED: &str = "Failed to load bookings";
const BOOKING_DETAILS_FAILED: &str = "Failed to load booking details";
const NO_OPTION_SELECTED: &str = "Select a travel option before booking";
const NOTHING_TO_UPDATE: &str = "Nothing to update";
const INVALID_SEATS: &str = "Enter a whole number of seats greater than zero";
const NOT_ENOUGH_SEATS: &str = "Not enough seats available";

/// Drives one [`View`] from API results.
pub struct Controller<V: View> {
    api: ApiClient,
    view: V,
    state: ViewState,
}

impl<V: View> Controller<V> {
    pub fn new(api: ApiClient, view: V) -> Self {
        Self {
            api,
            view,
            state: ViewState::default(),
        }
    }

    pub const fn api(&self) -> &ApiClient {
        &self.api
    }

    pub const fn view(&self) -> &V {
        &self.view
    }

    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    fn transition(&mut self, event: ViewEvent) {
        self.state.transition(event);
        self.view.render_state(&self.state);
    }

    fn navigate(&mut self, screen: Screen) {
        debug!("Showing {}", screen.id());
        self.transition(ViewEvent::Navigate(screen));
    }

    fn alert_error(&mut self, err: &ApiError) {
        self.view.show_alert(AlertKind::Error, &err.to_string());
    }

    /// Switch sections. Protected sections fall back to Login without a session.
    pub fn show_section(&mut self, screen: Screen) -> bool {
        if screen.requires_auth() && !self.api.is_authenticated() {
            self.navigate(Screen::Login);
            return false;
        }
        self.navigate(screen);
        true
    }

    pub fn update_navigation(&mut self) {
        self.view.set_navigation(self.api.is_authenticated());
    }

    // === Session ===

    /// Initial load: resume a stored session or ask for a login.
    pub async fn bootstrap(&mut self) {
        self.update_navigation();

        if !self.api.is_authenticated() {
            self.navigate(Screen::Login);
            return;
        }

        self.navigate(Screen::Home);
        self.view.set_loading(true);
        let filters = TravelFilters::default();
        let (options, user) = tokio::join!(
            self.api.travel_options(&filters),
            self.api.current_user()
        );
        self.view.set_loading(false);

        match options {
            Ok(options) => self.display_travel_options(&options),
            Err(_) => self.view.show_alert(AlertKind::Error, OPTIONS_FAILED),
        }
        self.apply_user_info(user);
    }

    /// Fetch the current user. A failure means the session is no longer
    /// valid: it is cleared and the user is sent back to Login.
    pub async fn load_user_info(&mut self) -> Option<User> {
        let result = self.api.current_user().await;
        self.apply_user_info(result)
    }

    fn apply_user_info(&mut self, result: Result<User, ApiError>) -> Option<User> {
        match result {
            Ok(user) => {
                self.api.cache_user(&user);
                self.view.set_user_name(user.display_name());
                Some(user)
            }
            Err(e) => {
                warn!(status = ?e.status(), "Failed to load user info: {e}");
                self.api.logout();
                self.update_navigation();
                self.navigate(Screen::Login);
                None
            }
        }
    }

    pub async fn handle_login(&mut self, form: &LoginForm) -> bool {
        self.view.set_loading(true);
        let result = self.api.login(&form.username, &form.password).await;
        self.view.set_loading(false);

        if let Err(e) = result {
            self.alert_error(&e);
            return false;
        }

        self.view.show_alert(AlertKind::Success, LOGIN_OK);
        self.update_navigation();
        if self.load_user_info().await.is_none() {
            return false;
        }
        self.navigate(Screen::Home);
        self.load_travel_options(&TravelFilters::default()).await;
        true
    }

    pub async fn handle_register(&mut self, form: &RegisterForm) -> bool {
        if !form.passwords_match() {
            self.view.show_alert(AlertKind::Error, PASSWORD_MISMATCH);
            return false;
        }

        self.view.set_loading(true);
        let result = self.api.register(&form.to_new_user()).await;
        self.view.set_loading(false);

        match result {
            Ok(user) => {
                debug!("Registered {}", user.username);
                self.view.show_alert(AlertKind::Success, REGISTER_OK);
                self.navigate(Screen::Login);
                true
            }
            Err(e) => {
                self.alert_error(&e);
                false
            }
        }
    }

    pub fn handle_logout(&mut self) {
        self.api.logout();
        self.update_navigation();
        self.navigate(Screen::Login);
        self.view.show_alert(AlertKind::Info, LOGOUT_OK);
    }

    /// Show the profile section with freshly fetched data.
    pub async fn show_profile(&mut self) {
        if !self.show_section(Screen::Profile) {
            return;
        }
        if let Some(user) = self.load_user_info().await {
            self.view
                .replace_container(Container::Profile, render::profile(&user));
        }
    }

    pub async fn handle_profile_update(&mut self, update: &ProfileUpdate) -> bool {
        if update.is_empty() {
            self.view.show_alert(AlertKind::Error, NOTHING_TO_UPDATE);
            return false;
        }

        self.view.set_loading(true);
        let result = self.api.update_profile(update).await;
        self.view.set_loading(false);

        match result {
            Ok(user) => {
                self.api.cache_user(&user);
                self.view.set_user_name(user.display_name());
                self.view
                    .replace_container(Container::Profile, render::profile(&user));
                self.view.show_alert(AlertKind::Success, PROFILE_OK);
                true
            }
            Err(e) => {
                self.alert_error(&e);
                false
            }
        }
    }

    // === Travel options ===

    pub async fn load_travel_options(&mut self, filters: &TravelFilters) {
        self.view.set_loading(true);
        let result = self.api.travel_options(filters).await;
        self.view.set_loading(false);

        match result {
            Ok(options) => self.display_travel_options(&options),
            Err(_) => self.view.show_alert(AlertKind::Error, OPTIONS_FAILED),
        }
    }

    pub fn display_travel_options(&mut self, options: &[TravelOption]) {
        self.view
            .replace_container(Container::TravelOptions, render::travel_options(options));
    }

    /// Search form submission. Blank fields never reach the query string.
    pub async fn handle_search(&mut self, filters: &TravelFilters) {
        debug!("Searching with {:?}", filters.query_pairs());
        self.load_travel_options(filters).await;
    }

    // === Booking modal ===

    pub async fn open_booking_modal(&mut self, option_id: i64) -> bool {
        match self.api.travel_option(option_id).await {
            Ok(option) => {
                self.transition(ViewEvent::OpenModal(BookingModal::for_option(&option)));
                true
            }
            Err(e) => {
                debug!("Could not open booking for option {option_id}: {e}");
                self.view.show_alert(AlertKind::Error, BOOKING_DETAILS_FAILED);
                false
            }
        }
    }

    pub fn close_booking_modal(&mut self) {
        self.transition(ViewEvent::CloseModal);
    }

    /// Seat-count input changed; recomputes the advisory total locally.
    pub fn update_seats(&mut self, input: &str) {
        self.transition(ViewEvent::SeatsInput(input.to_string()));
    }

    /// Submit the open booking modal with the seat count as entered.
    /// Counts that are not positive or exceed the inventory are refused.
    pub async fn handle_booking(&mut self) -> bool {
        let Some(modal) = self.state.modal() else {
            self.view.show_alert(AlertKind::Error, NO_OPTION_SELECTED);
            return false;
        };
        let num_seats = match modal.requested() {
            Some(n) if n <= modal.available_seats => n,
            Some(_) => {
                self.view.show_alert(AlertKind::Error, NOT_ENOUGH_SEATS);
                return false;
            }
            None => {
                self.view.show_alert(AlertKind::Error, INVALID_SEATS);
                return false;
            }
        };
        let booking = NewBooking {
            option_id: modal.option_id,
            num_seats,
        };

        self.view.set_loading(true);
        let result = self.api.create_booking(&booking).await;
        self.view.set_loading(false);

        match result {
            Ok(created) => {
                debug!("Created booking {}", created.booking_id);
                self.view.show_alert(AlertKind::Success, BOOKING_OK);
                self.close_booking_modal();
                self.load_travel_options(&TravelFilters::default()).await;
                true
            }
            Err(e) => {
                self.alert_error(&e);
                false
            }
        }
    }

    // === Bookings ===

    pub async fn load_user_bookings(&mut self) {
        self.view.set_loading(true);
        let result = self.api.user_bookings().await;
        self.view.set_loading(false);

        match result {
            Ok(bookings) => self.display_user_bookings(&bookings),
            Err(_) => self.view.show_alert(AlertKind::Error, BOOKINGS_FAILED),
        }
    }

    pub fn display_user_bookings(&mut self, bookings: &[Booking]) {
        self.view
            .replace_container(Container::Bookings, render::bookings(bookings));
    }

    pub async fn show_booking(&mut self, booking_id: i64) {
        self.view.set_loading(true);
        let result = self.api.booking(booking_id).await;
        self.view.set_loading(false);

        match result {
            Ok(booking) => self
                .view
                .replace_container(Container::BookingDetail, render::booking_card(&booking)),
            Err(e) => self.alert_error(&e),
        }
    }

    /// Cancel a booking once the user has confirmed; unconfirmed is a no-op.
    pub async fn cancel_booking(&mut self, booking_id: i64, confirmed: bool) -> bool {
        if !confirmed {
            return false;
        }

        self.view.set_loading(true);
        let result = self.api.cancel_booking(booking_id).await;
        self.view.set_loading(false);

        match result {
            Ok(_) => {
                self.view.show_alert(AlertKind::Success, CANCEL_OK);
                self.load_user_bookings().await;
                true
            }
            Err(e) => {
                self.alert_error(&e);
                false
            }
        }
    }
}
