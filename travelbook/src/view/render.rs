//! Text fragments for list containers, detail panes and the booking modal.

use std::fmt::Write as _;

use crate::models::{Booking, TravelOption, User};

use super::format::{format_datetime, format_price};
use super::BookingModal;

pub const NO_TRAVEL_OPTIONS: &str = "No travel options found matching your criteria.";
pub const NO_BOOKINGS: &str = "You have no bookings yet.";

/// All options, one card each, or the empty-result message.
pub fn travel_options(options: &[TravelOption]) -> String {
    if options.is_empty() {
        return NO_TRAVEL_OPTIONS.to_string();
    }
    options
        .iter()
        .map(travel_option_card)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn travel_option_card(option: &TravelOption) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "[{}] {}  {}",
        option.kind,
        option.title,
        format_price(option.price_per_seat)
    );
    let _ = writeln!(out, "  {}", option.route());
    let _ = writeln!(out, "  Departure:       {}", format_datetime(&option.departure_time));
    let _ = writeln!(out, "  Arrival:         {}", format_datetime(&option.arrival_time));
    let _ = writeln!(out, "  Available Seats: {}", option.available_seats);
    let _ = writeln!(out, "  Book Now:        travelbook book {}", option.option_id);
    out
}

/// All bookings, one card each, or the empty-result message.
pub fn bookings(bookings: &[Booking]) -> String {
    if bookings.is_empty() {
        return NO_BOOKINGS.to_string();
    }
    bookings
        .iter()
        .map(booking_card)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn booking_card(booking: &Booking) -> String {
    let option = &booking.travel_option;
    let mut out = String::new();
    let _ = writeln!(out, "Booking #{}  [{}]", booking.booking_id, booking.status);
    let _ = writeln!(out, "  {}", option.route());
    let _ = writeln!(out, "  {}", option.title);
    let _ = writeln!(out, "  Departure:    {}", format_datetime(&option.departure_time));
    let _ = writeln!(out, "  Seats:        {}", booking.num_seats);
    let _ = writeln!(out, "  Total Price:  {}", format_price(booking.total_price));
    let _ = writeln!(out, "  Booking Date: {}", format_datetime(&booking.booking_date));
    if booking.status.is_cancellable() {
        let _ = writeln!(out, "  Cancel:       travelbook cancel {}", booking.booking_id);
    }
    out
}

pub fn booking_modal(modal: &BookingModal) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Book: {}", modal.title);
    let _ = writeln!(out, "  {}", modal.route);
    let _ = writeln!(out, "  Price per seat:  {}", format_price(modal.price_per_seat));
    let _ = writeln!(out, "  Available seats: {}", modal.available_seats);
    let _ = writeln!(out, "  Seats:           {}", modal.seats());
    let _ = writeln!(out, "  Total:           {}", format_price(modal.total()));
    out
}

pub fn profile(user: &User) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", user.display_name());
    let _ = writeln!(out, "  Username: {}", user.username);
    let _ = writeln!(out, "  Email:    {}", user.email);
    let _ = writeln!(out, "  Phone:    {}", user.phone_number.as_deref().unwrap_or("-"));
    let _ = writeln!(out, "  Member since: {}", format_datetime(&user.created_at));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{booking_json, option_json};

    #[test]
    fn test_empty_lists_render_messages() {
        assert_eq!(travel_options(&[]), NO_TRAVEL_OPTIONS);
        assert_eq!(bookings(&[]), NO_BOOKINGS);
    }

    #[test]
    fn test_option_card_contents() {
        let option: TravelOption = serde_json::from_value(option_json(3, "4500.00", 12)).unwrap();
        let card = travel_option_card(&option);
        assert!(card.contains("[Flight] Option 3  ₹4,500"));
        assert!(card.contains("Delhi → Mumbai"));
        assert!(card.contains("01 Mar 2025, 06:00 am"));
        assert!(card.contains("Available Seats: 12"));
    }

    #[test]
    fn test_only_confirmed_bookings_offer_cancel() {
        let confirmed: Booking = serde_json::from_value(booking_json(1, "Confirmed")).unwrap();
        let cancelled: Booking = serde_json::from_value(booking_json(2, "Cancelled")).unwrap();
        assert!(booking_card(&confirmed).contains("travelbook cancel 1"));
        assert!(!booking_card(&cancelled).contains("travelbook cancel"));
        assert!(booking_card(&cancelled).contains("[Cancelled]"));
    }
}
