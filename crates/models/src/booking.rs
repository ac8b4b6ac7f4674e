use rust_decimal::Decimal;

/// Input to the reservation booking workflow
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRequest {
    pub title: String,
    pub name: String,
    pub phone: Option<String>,
    pub seats: i32,
    pub price: Decimal,
}

impl BookingRequest {
    /// Normalizes raw request input: title, name and phone are trimmed, and a
    /// blank phone counts as not provided.
    pub fn new(title: &str, name: &str, phone: &str, seats: i32, price: Decimal) -> Self {
        let phone = phone.trim();

        Self {
            title: title.trim().to_owned(),
            name: name.trim().to_owned(),
            phone: if phone.is_empty() {
                None
            } else {
                Some(phone.to_owned())
            },
            seats,
            price,
        }
    }
}
