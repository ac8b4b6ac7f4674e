use axum::{Json, extract::Path, http::StatusCode};
use database::{
    db::create_connection,
    entities::{guest, reservation},
    services::guest::GuestService,
};
use models::guest::GuestData;
use uuid::Uuid;

use crate::dtos::guest::{GuestRequest, GuestResponse};
use crate::error::ApiError;

/// List all guests with their reservation ids
#[utoipa::path(
    get,
    path = "/guests",
    responses(
        (status = 200, description = "List of guests retrieved successfully", body = [GuestResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Guests"
)]
pub async fn list_guests() -> Result<Json<Vec<GuestResponse>>, ApiError> {
    let db = create_connection().await?;

    let guests = GuestService::list_with_reservations(&db).await?;

    Ok(Json(
        guests
            .into_iter()
            .map(|(selected, reservations)| convert_to_guest_response(selected, reservations))
            .collect(),
    ))
}

/// Create a new guest
#[utoipa::path(
    post,
    path = "/guests",
    request_body = GuestRequest,
    responses(
        (status = 201, description = "Guest created", body = GuestResponse),
        (status = 400, description = "Validation failed"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Guests"
)]
pub async fn create_guest(
    Json(payload): Json<GuestRequest>,
) -> Result<(StatusCode, Json<GuestResponse>), ApiError> {
    let db = create_connection().await?;

    let created =
        GuestService::create(&db, GuestData::new(&payload.name, payload.phone.as_deref())).await?;

    Ok((
        StatusCode::CREATED,
        Json(convert_to_guest_response(created, vec![])),
    ))
}

/// Get a guest by id
#[utoipa::path(
    get,
    path = "/guests/{id}",
    params(
        ("id" = Uuid, Path, description = "Guest ID")
    ),
    responses(
        (status = 200, description = "Guest found", body = GuestResponse),
        (status = 404, description = "Guest not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Guests"
)]
pub async fn get_guest(Path(id): Path<Uuid>) -> Result<Json<GuestResponse>, ApiError> {
    let db = create_connection().await?;

    match GuestService::get_with_reservations(&db, id).await? {
        Some((selected, reservations)) => {
            Ok(Json(convert_to_guest_response(selected, reservations)))
        }
        None => Err(ApiError::NotFound("Guest")),
    }
}

/// Update an existing guest
#[utoipa::path(
    put,
    path = "/guests/{id}",
    params(
        ("id" = Uuid, Path, description = "Guest ID")
    ),
    request_body = GuestRequest,
    responses(
        (status = 200, description = "Guest updated", body = GuestResponse),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Guest not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Guests"
)]
pub async fn update_guest(
    Path(id): Path<Uuid>,
    Json(payload): Json<GuestRequest>,
) -> Result<Json<GuestResponse>, ApiError> {
    let db = create_connection().await?;

    let updated = GuestService::update(
        &db,
        id,
        GuestData::new(&payload.name, payload.phone.as_deref()),
    )
    .await?;
    let reservations = match GuestService::get_with_reservations(&db, id).await? {
        Some((_, reservations)) => reservations,
        None => vec![],
    };

    Ok(Json(convert_to_guest_response(updated, reservations)))
}

/// Delete a guest and, through the cascade, their reservations
#[utoipa::path(
    delete,
    path = "/guests/{id}",
    params(
        ("id" = Uuid, Path, description = "Guest ID")
    ),
    responses(
        (status = 204, description = "Guest deleted"),
        (status = 404, description = "Guest not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Guests"
)]
pub async fn delete_guest(Path(id): Path<Uuid>) -> Result<StatusCode, ApiError> {
    let db = create_connection().await?;

    GuestService::delete(&db, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

fn convert_to_guest_response(
    selected: guest::Model,
    reservations: Vec<reservation::Model>,
) -> GuestResponse {
    GuestResponse {
        id: selected.id.to_string(),
        name: selected.name,
        phone: selected.phone,
        reservations: reservations.iter().map(|r| r.id.to_string()).collect(),
    }
}
