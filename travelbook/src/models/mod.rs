//! Data models for travelbook entities.
//!
//! All of these mirror what the backend returns; the client never mutates
//! them locally and always re-fetches after a change.

mod booking;
mod travel_option;
mod user;
mod wire;

pub use booking::{Booking, BookingStatus, NewBooking};
pub use travel_option::{TravelKind, TravelOption};
pub use user::{NewUser, ProfileUpdate, Token, User};
