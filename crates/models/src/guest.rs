use serde::{Deserialize, Serialize};

/// Guest attributes accepted on create and update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestData {
    pub name: String,
    pub phone: Option<String>,
}

impl GuestData {
    /// Normalizes raw input: name and phone are trimmed, a blank phone counts
    /// as not provided.
    pub fn new(name: &str, phone: Option<&str>) -> Self {
        let phone = phone.map(str::trim).filter(|p| !p.is_empty());

        Self {
            name: name.trim().to_owned(),
            phone: phone.map(str::to_owned),
        }
    }
}
