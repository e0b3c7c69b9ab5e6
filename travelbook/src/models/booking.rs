//! Booking model representing a reservation against a travel option.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::wire::{price, timestamp};
use super::TravelOption;

/// Lifecycle status of a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
    /// Statuses the client does not act on, kept verbatim.
    Other(String),
}

impl BookingStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::Cancelled => "Cancelled",
            Self::Other(s) => s,
        }
    }

    /// Only confirmed bookings can be cancelled.
    pub const fn is_cancellable(&self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

impl From<String> for BookingStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Confirmed" => Self::Confirmed,
            "Cancelled" => Self::Cancelled,
            _ => Self::Other(s),
        }
    }
}

impl From<BookingStatus> for String {
    fn from(status: BookingStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A booking as returned by the bookings endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub booking_id: i64,
    #[serde(default)]
    pub option_id: Option<i64>,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub num_seats: u32,
    #[serde(with = "price")]
    pub total_price: f64,
    #[serde(with = "timestamp")]
    pub booking_date: NaiveDateTime,
    pub status: BookingStatus,
    pub travel_option: TravelOption,
}

/// Payload for creating a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NewBooking {
    pub option_id: i64,
    pub num_seats: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_strings() {
        assert_eq!(BookingStatus::from("Confirmed".to_string()), BookingStatus::Confirmed);
        assert_eq!(BookingStatus::from("Cancelled".to_string()), BookingStatus::Cancelled);
        assert_eq!(
            BookingStatus::from("Refunded".to_string()).as_str(),
            "Refunded"
        );
        assert!(BookingStatus::Confirmed.is_cancellable());
        assert!(!BookingStatus::Cancelled.is_cancellable());
    }
}
