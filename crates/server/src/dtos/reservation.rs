use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ReservationResponse {
    pub id: String,
    pub guest_id: String,
    pub movie_id: String,
    pub seats: i32,
    pub price: Decimal,
}

/// Body of the booking endpoint. Seats and price fall back to a single seat
/// at 0.00 when omitted.
#[derive(Debug, Deserialize, ToSchema)]
pub struct BookReservationRequest {
    pub title: String,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default = "default_seats")]
    pub seats: i32,
    #[serde(default)]
    pub price: Decimal,
}

fn default_seats() -> i32 {
    1
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReservationUpdateRequest {
    pub seats: i32,
    pub price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::BookReservationRequest;
    use rust_decimal::Decimal;

    #[test]
    fn test_book_request_defaults() {
        let request: BookReservationRequest =
            serde_json::from_str(r#"{"title": "Inception", "name": "Alice"}"#).unwrap();
        assert_eq!(request.phone, "");
        assert_eq!(request.seats, 1);
        assert_eq!(request.price, Decimal::ZERO);
    }

    #[test]
    fn test_book_request_accepts_numeric_price() {
        let request: BookReservationRequest = serde_json::from_str(
            r#"{"title": "Inception", "name": "Alice", "phone": "555", "seats": 2, "price": 12.5}"#,
        )
        .unwrap();
        assert_eq!(request.seats, 2);
        assert_eq!(request.price, Decimal::new(125, 1));
    }
}
