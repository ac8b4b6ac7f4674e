use crate::routes::{guest, health, movie, reservation, root};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        guest::list_guests,
        guest::create_guest,
        guest::get_guest,
        guest::update_guest,
        guest::delete_guest,
        movie::list_movies,
        movie::search_movies,
        movie::create_movie,
        movie::get_movie,
        movie::update_movie,
        movie::delete_movie,
        reservation::list_reservations,
        reservation::add_reservation,
        reservation::get_reservation,
        reservation::update_reservation,
        reservation::delete_reservation,
    ),
    tags(
        (name = "Health", description = "Service health endpoints"),
        (name = "Guests", description = "Guest related endpoints"),
        (name = "Movies", description = "Movie related endpoints"),
        (name = "Reservations", description = "Reservation booking endpoints"),
    ),
    info(
        title = "Tickets API",
        version = "1.0.0",
        description = "Movie ticket booking API",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
