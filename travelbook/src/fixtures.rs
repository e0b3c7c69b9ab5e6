//! JSON payloads shaped like the backend's responses.

use serde_json::{json, Value};

pub fn option_json(id: i64, price: &str, seats: u32) -> Value {
    json!({
        "option_id": id,
        "title": format!("Option {id}"),
        "type": "Flight",
        "source": "Delhi",
        "destination": "Mumbai",
        "departure_time": "2025-03-01T06:00:00",
        "arrival_time": "2025-03-01T08:10:00",
        "price_per_seat": price,
        "available_seats": seats
    })
}

pub fn booking_json(id: i64, status: &str) -> Value {
    json!({
        "booking_id": id,
        "option_id": 1,
        "user_id": 1,
        "num_seats": 2,
        "total_price": "9000.00",
        "booking_date": "2025-02-01T10:00:00",
        "status": status,
        "travel_option": option_json(1, "4500.00", 10)
    })
}

pub fn user_json() -> Value {
    json!({
        "user_id": 1,
        "username": "asha",
        "email": "asha@example.com",
        "full_name": "Asha Rao",
        "phone_number": null,
        "created_at": "2025-01-01T00:00:00"
    })
}
