//! Travel option model representing a bookable trip.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::wire::{price, timestamp};

/// Mode of transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TravelKind {
    Flight,
    Train,
    Bus,
    /// Any kind the client does not know about, kept verbatim.
    Other(String),
}

impl TravelKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Flight => "Flight",
            Self::Train => "Train",
            Self::Bus => "Bus",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for TravelKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Flight" => Self::Flight,
            "Train" => Self::Train,
            "Bus" => Self::Bus,
            _ => Self::Other(s),
        }
    }
}

impl From<TravelKind> for String {
    fn from(kind: TravelKind) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for TravelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A trip with schedule, route and seat inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelOption {
    pub option_id: i64,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: TravelKind,
    pub source: String,
    pub destination: String,
    #[serde(with = "timestamp")]
    pub departure_time: NaiveDateTime,
    #[serde(with = "timestamp")]
    pub arrival_time: NaiveDateTime,
    #[serde(with = "price")]
    pub price_per_seat: f64,
    pub available_seats: u32,
}

impl TravelOption {
    /// "source → destination".
    pub fn route(&self) -> String {
        format!("{} → {}", self.source, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_payload_with_string_price() {
        let json = r#"{
            "option_id": 7,
            "title": "Rajdhani Express",
            "type": "Train",
            "source": "Delhi",
            "destination": "Mumbai",
            "departure_time": "2025-03-01T16:00:00",
            "arrival_time": "2025-03-02T08:15:00",
            "price_per_seat": "2450.50",
            "available_seats": 120
        }"#;
        let option: TravelOption = serde_json::from_str(json).unwrap();
        assert_eq!(option.kind, TravelKind::Train);
        assert!((option.price_per_seat - 2450.5).abs() < f64::EPSILON);
        assert_eq!(option.route(), "Delhi → Mumbai");
    }

    #[test]
    fn unknown_kind_is_preserved() {
        let kind: TravelKind = serde_json::from_str(r#""Ferry""#).unwrap();
        assert_eq!(kind, TravelKind::Other("Ferry".to_string()));
        assert_eq!(serde_json::to_string(&kind).unwrap(), r#""Ferry""#);
    }
}
