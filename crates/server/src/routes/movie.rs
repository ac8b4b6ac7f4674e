use axum::{
    Json,
    extract::{Path, Query},
    http::StatusCode,
};
use database::{
    db::create_connection,
    entities::movie,
    services::{booking::BookingService, movie::MovieService},
};
use uuid::Uuid;

use crate::dtos::movie::{MovieRequest, MovieResponse, MovieSearchParams};
use crate::error::ApiError;

/// List all movies
#[utoipa::path(
    get,
    path = "/movies",
    responses(
        (status = 200, description = "List of movies retrieved successfully", body = [MovieResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Movies"
)]
pub async fn list_movies() -> Result<Json<Vec<MovieResponse>>, ApiError> {
    let db = create_connection().await?;

    let movies = MovieService::list(&db).await?;

    Ok(Json(
        movies.into_iter().map(convert_to_movie_response).collect(),
    ))
}

/// Search movies by any combination of filters.
///
/// Filters combine with OR; a request without filters matches nothing.
#[utoipa::path(
    get,
    path = "/movies/search",
    params(MovieSearchParams),
    responses(
        (status = 200, description = "Matching movies", body = [MovieResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Movies"
)]
pub async fn search_movies(
    Query(params): Query<MovieSearchParams>,
) -> Result<Json<Vec<MovieResponse>>, ApiError> {
    let db = create_connection().await?;

    let movies = BookingService::search_movies(&db, params.into_filter()).await?;

    Ok(Json(
        movies.into_iter().map(convert_to_movie_response).collect(),
    ))
}

/// Create a new movie
#[utoipa::path(
    post,
    path = "/movies",
    request_body = MovieRequest,
    responses(
        (status = 201, description = "Movie created", body = MovieResponse),
        (status = 400, description = "Validation failed"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Movies"
)]
pub async fn create_movie(
    Json(payload): Json<MovieRequest>,
) -> Result<(StatusCode, Json<MovieResponse>), ApiError> {
    let db = create_connection().await?;

    let created = MovieService::create(&db, payload.into()).await?;

    Ok((StatusCode::CREATED, Json(convert_to_movie_response(created))))
}

/// Get a movie by id
#[utoipa::path(
    get,
    path = "/movies/{id}",
    params(
        ("id" = Uuid, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie found", body = MovieResponse),
        (status = 404, description = "Movie not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Movies"
)]
pub async fn get_movie(Path(id): Path<Uuid>) -> Result<Json<MovieResponse>, ApiError> {
    let db = create_connection().await?;

    match MovieService::get(&db, id).await? {
        Some(selected) => Ok(Json(convert_to_movie_response(selected))),
        None => Err(ApiError::NotFound("Movie")),
    }
}

/// Update an existing movie
#[utoipa::path(
    put,
    path = "/movies/{id}",
    params(
        ("id" = Uuid, Path, description = "Movie ID")
    ),
    request_body = MovieRequest,
    responses(
        (status = 200, description = "Movie updated", body = MovieResponse),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Movie not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Movies"
)]
pub async fn update_movie(
    Path(id): Path<Uuid>,
    Json(payload): Json<MovieRequest>,
) -> Result<Json<MovieResponse>, ApiError> {
    let db = create_connection().await?;

    let updated = MovieService::update(&db, id, payload.into()).await?;

    Ok(Json(convert_to_movie_response(updated)))
}

/// Delete a movie. Its reservations survive, re-pointed at the placeholder
/// movie.
#[utoipa::path(
    delete,
    path = "/movies/{id}",
    params(
        ("id" = Uuid, Path, description = "Movie ID")
    ),
    responses(
        (status = 204, description = "Movie deleted"),
        (status = 404, description = "Movie not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Movies"
)]
pub async fn delete_movie(Path(id): Path<Uuid>) -> Result<StatusCode, ApiError> {
    let db = create_connection().await?;

    MovieService::delete(&db, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

fn convert_to_movie_response(selected: movie::Model) -> MovieResponse {
    MovieResponse {
        id: selected.id.to_string(),
        hall: selected.hall,
        title: selected.title,
        description: selected.description,
        duration: selected.duration,
        start_time: selected.start_time,
    }
}
