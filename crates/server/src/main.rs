mod doc;
mod dtos;
mod error;
mod routes;
mod utils;

use axum::{Router, routing::get};
use log::info;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::doc::ApiDoc;
use crate::routes::{guest, health, movie, reservation, root};
use crate::utils::shutdown::shutdown_signal;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let app = Router::new()
        .route("/", get(root::root))
        .route("/health", get(health::health))
        .route("/guests", get(guest::list_guests).post(guest::create_guest))
        .route(
            "/guests/{id}",
            get(guest::get_guest)
                .put(guest::update_guest)
                .delete(guest::delete_guest),
        )
        .route("/movies", get(movie::list_movies).post(movie::create_movie))
        .route("/movies/search", get(movie::search_movies))
        .route(
            "/movies/{id}",
            get(movie::get_movie)
                .put(movie::update_movie)
                .delete(movie::delete_movie),
        )
        .route(
            "/reservations",
            get(reservation::list_reservations).post(reservation::add_reservation),
        )
        .route(
            "/reservations/{id}",
            get(reservation::get_reservation)
                .put(reservation::update_reservation)
                .delete(reservation::delete_reservation),
        )
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()));

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    info!("Running axum on http://localhost:3000");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}
