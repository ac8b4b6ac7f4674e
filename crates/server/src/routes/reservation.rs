use axum::{Json, extract::Path, http::StatusCode};
use database::{
    db::create_connection,
    entities::reservation,
    services::{booking::BookingService, reservation::ReservationService},
};
use models::booking::BookingRequest;
use uuid::Uuid;

use crate::dtos::reservation::{
    BookReservationRequest, ReservationResponse, ReservationUpdateRequest,
};
use crate::error::ApiError;

/// List all reservations
#[utoipa::path(
    get,
    path = "/reservations",
    responses(
        (status = 200, description = "List of reservations retrieved successfully", body = [ReservationResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reservations"
)]
pub async fn list_reservations() -> Result<Json<Vec<ReservationResponse>>, ApiError> {
    let db = create_connection().await?;

    let reservations = ReservationService::list(&db).await?;

    Ok(Json(
        reservations
            .into_iter()
            .map(convert_to_reservation_response)
            .collect(),
    ))
}

/// Book seats for a guest at a movie showing.
///
/// The movie must already exist; the guest is looked up by name and phone
/// and created on first sight.
#[utoipa::path(
    post,
    path = "/reservations",
    request_body = BookReservationRequest,
    responses(
        (status = 201, description = "Reservation created", body = ReservationResponse),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Movie not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reservations"
)]
pub async fn add_reservation(
    Json(payload): Json<BookReservationRequest>,
) -> Result<(StatusCode, Json<ReservationResponse>), ApiError> {
    let db = create_connection().await?;

    let request = BookingRequest::new(
        &payload.title,
        &payload.name,
        &payload.phone,
        payload.seats,
        payload.price,
    );
    let created = BookingService::create_reservation(&db, request).await?;

    Ok((
        StatusCode::CREATED,
        Json(convert_to_reservation_response(created)),
    ))
}

/// Get a reservation by id
#[utoipa::path(
    get,
    path = "/reservations/{id}",
    params(
        ("id" = Uuid, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Reservation found", body = ReservationResponse),
        (status = 404, description = "Reservation not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reservations"
)]
pub async fn get_reservation(Path(id): Path<Uuid>) -> Result<Json<ReservationResponse>, ApiError> {
    let db = create_connection().await?;

    match ReservationService::get(&db, id).await? {
        Some(selected) => Ok(Json(convert_to_reservation_response(selected))),
        None => Err(ApiError::NotFound("Reservation")),
    }
}

/// Update the seats and price of an existing reservation
#[utoipa::path(
    put,
    path = "/reservations/{id}",
    params(
        ("id" = Uuid, Path, description = "Reservation ID")
    ),
    request_body = ReservationUpdateRequest,
    responses(
        (status = 200, description = "Reservation updated", body = ReservationResponse),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Reservation not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reservations"
)]
pub async fn update_reservation(
    Path(id): Path<Uuid>,
    Json(payload): Json<ReservationUpdateRequest>,
) -> Result<Json<ReservationResponse>, ApiError> {
    let db = create_connection().await?;

    let updated = ReservationService::update(&db, id, payload.seats, payload.price).await?;

    Ok(Json(convert_to_reservation_response(updated)))
}

/// Delete a reservation
#[utoipa::path(
    delete,
    path = "/reservations/{id}",
    params(
        ("id" = Uuid, Path, description = "Reservation ID")
    ),
    responses(
        (status = 204, description = "Reservation deleted"),
        (status = 404, description = "Reservation not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reservations"
)]
pub async fn delete_reservation(Path(id): Path<Uuid>) -> Result<StatusCode, ApiError> {
    let db = create_connection().await?;

    ReservationService::delete(&db, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

fn convert_to_reservation_response(selected: reservation::Model) -> ReservationResponse {
    ReservationResponse {
        id: selected.id.to_string(),
        guest_id: selected.guest_id.to_string(),
        movie_id: selected.movie_id.to_string(),
        seats: selected.seats,
        price: selected.price,
    }
}
