use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use rust_decimal::Decimal;
use serde::Serialize;

use crate::{guest::GuestData, movie::MovieData};

pub const MAX_HALL_LEN: usize = 10;
pub const MAX_TITLE_LEN: usize = 50;
pub const MAX_DESCRIPTION_LEN: usize = 200;
pub const MAX_NAME_LEN: usize = 50;
pub const MAX_PHONE_LEN: usize = 12;

/// Field-level validation failures, keyed by field name.
///
/// Backed by an ordered map so serialized error bodies are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.insert(field.to_owned(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Upper bound of a DECIMAL(4, 2) column
fn max_price() -> Decimal {
    Decimal::new(9999, 2)
}

pub fn validate_movie(data: &MovieData) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if data.title.is_empty() {
        errors.add("title", "title is required");
    } else if data.title.chars().count() > MAX_TITLE_LEN {
        errors.add(
            "title",
            format!("title must be at most {MAX_TITLE_LEN} characters"),
        );
    }

    if data.hall.is_empty() {
        errors.add("hall", "hall is required");
    } else if data.hall.chars().count() > MAX_HALL_LEN {
        errors.add(
            "hall",
            format!("hall must be at most {MAX_HALL_LEN} characters"),
        );
    }

    if let Some(description) = &data.description
        && description.chars().count() > MAX_DESCRIPTION_LEN
    {
        errors.add(
            "description",
            format!("description must be at most {MAX_DESCRIPTION_LEN} characters"),
        );
    }

    if data.duration < 1 {
        errors.add("duration", "duration must be a positive number of minutes");
    }

    errors.into_result()
}

pub fn validate_guest(data: &GuestData) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if data.name.is_empty() {
        errors.add("name", "name is required");
    } else if data.name.chars().count() > MAX_NAME_LEN {
        errors.add(
            "name",
            format!("name must be at most {MAX_NAME_LEN} characters"),
        );
    }

    if let Some(phone) = &data.phone
        && phone.chars().count() > MAX_PHONE_LEN
    {
        errors.add(
            "phone",
            format!("phone must be at most {MAX_PHONE_LEN} characters"),
        );
    }

    errors.into_result()
}

/// Seats must be positive; price fits DECIMAL(4, 2), i.e. 0.00 through 99.99
/// with at most two decimal places.
pub fn validate_reservation(seats: i32, price: Decimal) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if seats < 1 {
        errors.add("seats", "seats must be a positive integer");
    }

    if price.is_sign_negative() || price > max_price() {
        errors.add("price", "price must be between 0.00 and 99.99");
    } else if price.normalize().scale() > 2 {
        errors.add("price", "price must have at most two decimal places");
    }

    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn movie(hall: &str, title: &str, description: Option<&str>, duration: i32) -> MovieData {
        MovieData {
            hall: hall.to_owned(),
            title: title.to_owned(),
            description: description.map(str::to_owned),
            duration,
            start_time: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
        }
    }

    #[test]
    fn test_validate_movie_accepts_bounds() {
        assert!(validate_movie(&movie("A1", "Inception", None, 148)).is_ok());
        assert!(validate_movie(&movie(&"h".repeat(10), &"t".repeat(50), Some(&"d".repeat(200)), 1)).is_ok());
    }

    #[test]
    fn test_validate_movie_rejects_missing_fields() {
        let errors = validate_movie(&movie("", "", None, 148)).unwrap_err();
        assert!(errors.get("title").is_some());
        assert!(errors.get("hall").is_some());
    }

    #[test]
    fn test_validate_movie_rejects_overlong_fields() {
        let errors =
            validate_movie(&movie(&"h".repeat(11), &"t".repeat(51), Some(&"d".repeat(201)), 148))
                .unwrap_err();
        assert!(errors.get("hall").is_some());
        assert!(errors.get("title").is_some());
        assert!(errors.get("description").is_some());
    }

    #[test]
    fn test_validate_movie_rejects_nonpositive_duration() {
        let errors = validate_movie(&movie("A1", "Inception", None, 0)).unwrap_err();
        assert!(errors.get("duration").is_some());
    }

    #[test]
    fn test_validate_guest_bounds() {
        assert!(validate_guest(&GuestData::new("Alice", Some("123456789012"))).is_ok());

        let errors = validate_guest(&GuestData {
            name: String::new(),
            phone: Some("1234567890123".to_owned()),
        })
        .unwrap_err();
        assert!(errors.get("name").is_some());
        assert!(errors.get("phone").is_some());

        let errors = validate_guest(&GuestData {
            name: "n".repeat(51),
            phone: None,
        })
        .unwrap_err();
        assert!(errors.get("name").is_some());
    }

    #[test]
    fn test_validate_reservation_accepts_bounds() {
        assert!(validate_reservation(1, Decimal::ZERO).is_ok());
        assert!(validate_reservation(4, Decimal::new(9999, 2)).is_ok());
        assert!(validate_reservation(2, Decimal::new(1250, 2)).is_ok());
        // Trailing zeros beyond two places are still representable values
        assert!(validate_reservation(1, Decimal::new(12500, 3)).is_ok());
    }

    #[test]
    fn test_validate_reservation_rejects_nonpositive_seats() {
        let errors = validate_reservation(0, Decimal::ZERO).unwrap_err();
        assert!(errors.get("seats").is_some());
        assert!(errors.get("price").is_none());

        assert!(validate_reservation(-3, Decimal::ZERO).is_err());
    }

    #[test]
    fn test_validate_reservation_rejects_price_out_of_range() {
        let errors = validate_reservation(1, Decimal::new(10000, 2)).unwrap_err();
        assert!(errors.get("price").is_some());

        let errors = validate_reservation(1, Decimal::new(-1, 2)).unwrap_err();
        assert!(errors.get("price").is_some());
    }

    #[test]
    fn test_validate_reservation_rejects_excess_precision() {
        let errors = validate_reservation(1, Decimal::new(12505, 3)).unwrap_err();
        assert_eq!(
            errors.get("price"),
            Some("price must have at most two decimal places")
        );
    }

    #[test]
    fn test_validation_errors_display() {
        let mut errors = ValidationErrors::new();
        errors.add("seats", "seats must be a positive integer");
        errors.add("price", "price must be between 0.00 and 99.99");
        assert_eq!(
            errors.to_string(),
            "price: price must be between 0.00 and 99.99; seats: seats must be a positive integer"
        );
    }
}
