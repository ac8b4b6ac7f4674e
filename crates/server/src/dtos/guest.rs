use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct GuestResponse {
    pub id: String,
    pub name: String,
    pub phone: Option<String>,
    /// Ids of the guest's reservations
    pub reservations: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct GuestRequest {
    pub name: String,
    pub phone: Option<String>,
}
