use models::{booking::BookingRequest, movie::MovieFilter, validation};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter,
    sea_query::{Expr, Func},
};
use uuid::Uuid;

use crate::entities::{guest, movie, reservation};
use crate::error::BookingError;

pub struct BookingService;

impl BookingService {
    /// Books seats for a guest at a movie showing.
    ///
    /// The movie must already exist (matched case-insensitively on title);
    /// the guest is created on first sight. Guest creation commits
    /// independently of the reservation, so a booking that fails validation
    /// can still leave a new guest behind.
    pub async fn create_reservation(
        db: &DatabaseConnection,
        request: BookingRequest,
    ) -> Result<reservation::Model, BookingError> {
        let movie = Self::find_movie_by_title(db, &request.title)
            .await?
            .ok_or(BookingError::MovieNotFound)?;

        let guest = Self::find_or_create_guest(db, &request.name, request.phone.as_deref()).await?;

        validation::validate_reservation(request.seats, request.price)
            .map_err(BookingError::Validation)?;

        let created = reservation::ActiveModel {
            id: Set(Uuid::new_v4()),
            guest_id: Set(guest.id),
            movie_id: Set(movie.id),
            seats: Set(request.seats),
            price: Set(request.price),
        }
        .insert(db)
        .await?;

        Ok(created)
    }

    /// Finds movies matching any of the supplied filters.
    ///
    /// Title and hall match as case-insensitive substrings, duration and
    /// start time by equality. An empty filter set matches nothing.
    pub async fn search_movies(
        db: &DatabaseConnection,
        filter: MovieFilter,
    ) -> Result<Vec<movie::Model>, DbErr> {
        if filter.is_empty() {
            return Ok(Vec::new());
        }

        let mut condition = Condition::any();

        if let Some(title) = &filter.title {
            condition = condition.add(
                Expr::expr(Func::lower(Expr::col(movie::Column::Title)))
                    .like(format!("%{}%", title.to_lowercase())),
            );
        }
        if let Some(hall) = &filter.hall {
            condition = condition.add(
                Expr::expr(Func::lower(Expr::col(movie::Column::Hall)))
                    .like(format!("%{}%", hall.to_lowercase())),
            );
        }
        if let Some(duration) = filter.duration {
            condition = condition.add(movie::Column::Duration.eq(duration));
        }
        if let Some(start_time) = filter.start_time {
            condition = condition.add(movie::Column::StartTime.eq(start_time));
        }

        movie::Entity::find().filter(condition).all(db).await
    }

    async fn find_movie_by_title(
        db: &DatabaseConnection,
        title: &str,
    ) -> Result<Option<movie::Model>, DbErr> {
        movie::Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(movie::Column::Title))).eq(title.to_lowercase()),
            )
            .one(db)
            .await
    }

    /// Looks up a guest by case-insensitive name and exact phone, creating
    /// one when no match exists. Find and insert are separate statements, so
    /// concurrent identical requests can produce duplicate guests.
    async fn find_or_create_guest(
        db: &DatabaseConnection,
        name: &str,
        phone: Option<&str>,
    ) -> Result<guest::Model, DbErr> {
        let mut condition = Condition::all()
            .add(Expr::expr(Func::lower(Expr::col(guest::Column::Name))).eq(name.to_lowercase()));
        condition = match phone {
            Some(phone) => condition.add(guest::Column::Phone.eq(phone)),
            None => condition.add(guest::Column::Phone.is_null()),
        };

        if let Some(existing) = guest::Entity::find().filter(condition).one(db).await? {
            return Ok(existing);
        }

        guest::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_owned()),
            phone: Set(phone.map(str::to_owned)),
        }
        .insert(db)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn inception() -> movie::Model {
        movie::Model {
            id: Uuid::from_u128(1),
            hall: "A1".to_owned(),
            title: "Inception".to_owned(),
            description: None,
            duration: 148,
            start_time: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
        }
    }

    fn alice() -> guest::Model {
        guest::Model {
            id: Uuid::from_u128(2),
            name: "Alice".to_owned(),
            phone: Some("555".to_owned()),
        }
    }

    fn alice_reservation() -> reservation::Model {
        reservation::Model {
            id: Uuid::from_u128(3),
            guest_id: Uuid::from_u128(2),
            movie_id: Uuid::from_u128(1),
            seats: 2,
            price: Decimal::new(1250, 2),
        }
    }

    #[tokio::test]
    async fn test_create_reservation_unknown_movie_fails() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<movie::Model>::new()])
            .into_connection();

        let request = BookingRequest::new("Dune", "Alice", "555", 1, Decimal::ZERO);
        let err = BookingService::create_reservation(&db, request)
            .await
            .unwrap_err();

        assert!(matches!(err, BookingError::MovieNotFound));
        // The movie lookup is the only statement issued
        assert_eq!(db.into_transaction_log().len(), 1);
    }

    #[tokio::test]
    async fn test_create_reservation_invalid_seats_fails_before_insert() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![inception()]])
            .append_query_results([vec![alice()]])
            .into_connection();

        let request = BookingRequest::new("inception", "Alice", "555", 0, Decimal::ZERO);
        let err = BookingService::create_reservation(&db, request)
            .await
            .unwrap_err();

        let BookingError::Validation(errors) = err else {
            panic!("expected validation failure, got {err:?}");
        };
        assert!(errors.get("seats").is_some());
        // Movie and guest lookups ran, but nothing was inserted
        assert_eq!(db.into_transaction_log().len(), 2);
    }

    #[tokio::test]
    async fn test_create_reservation_reuses_existing_guest() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![inception()]])
            .append_query_results([vec![alice()]])
            .append_query_results([vec![alice_reservation()]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let request = BookingRequest::new("Inception", "alice", "555", 2, Decimal::new(1250, 2));
        let created = BookingService::create_reservation(&db, request)
            .await
            .unwrap();

        assert_eq!(created, alice_reservation());
    }

    #[tokio::test]
    async fn test_create_reservation_creates_missing_guest() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![inception()]])
            .append_query_results([Vec::<guest::Model>::new()])
            .append_query_results([vec![alice()]])
            .append_query_results([vec![alice_reservation()]])
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
            ])
            .into_connection();

        let request = BookingRequest::new("Inception", "Alice", "555", 2, Decimal::new(1250, 2));
        let created = BookingService::create_reservation(&db, request)
            .await
            .unwrap();

        assert_eq!(created.guest_id, alice().id);
        assert_eq!(created.movie_id, inception().id);
    }

    #[tokio::test]
    async fn test_search_movies_without_filters_returns_nothing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let movies = BookingService::search_movies(&db, MovieFilter::default())
            .await
            .unwrap();

        assert!(movies.is_empty());
        assert!(db.into_transaction_log().is_empty());
    }

    #[tokio::test]
    async fn test_search_movies_combines_filters_with_or() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![inception()]])
            .into_connection();

        let filter = MovieFilter::new(Some("Matrix".to_owned()), Some("Z9".to_owned()), None, None);
        let movies = BookingService::search_movies(&db, filter).await.unwrap();
        assert_eq!(movies, vec![inception()]);

        let log = db.into_transaction_log();
        assert_eq!(log.len(), 1);
        let sql = format!("{:?}", log[0]);
        assert!(sql.contains("OR"), "filters must combine as a disjunction: {sql}");
        assert!(sql.contains("LOWER"), "matching must be case-insensitive: {sql}");
    }

    #[tokio::test]
    async fn test_search_movies_by_duration_only() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![inception()]])
            .into_connection();

        let filter = MovieFilter::new(None, None, Some(148), None);
        let movies = BookingService::search_movies(&db, filter).await.unwrap();

        assert_eq!(movies, vec![inception()]);
    }
}
