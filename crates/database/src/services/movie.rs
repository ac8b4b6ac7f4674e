use models::{movie::MovieData, validation};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait};
use uuid::Uuid;

use crate::entities::movie;
use crate::error::BookingError;

pub struct MovieService;

impl MovieService {
    pub async fn list(db: &DatabaseConnection) -> Result<Vec<movie::Model>, DbErr> {
        movie::Entity::find().all(db).await
    }

    pub async fn get(db: &DatabaseConnection, id: Uuid) -> Result<Option<movie::Model>, DbErr> {
        movie::Entity::find_by_id(id).one(db).await
    }

    pub async fn create(
        db: &DatabaseConnection,
        data: MovieData,
    ) -> Result<movie::Model, BookingError> {
        validation::validate_movie(&data).map_err(BookingError::Validation)?;

        let created = movie::ActiveModel {
            id: Set(Uuid::new_v4()),
            hall: Set(data.hall),
            title: Set(data.title),
            description: Set(data.description),
            duration: Set(data.duration),
            start_time: Set(data.start_time),
        }
        .insert(db)
        .await?;

        Ok(created)
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        data: MovieData,
    ) -> Result<movie::Model, BookingError> {
        validation::validate_movie(&data).map_err(BookingError::Validation)?;

        let existing = movie::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(BookingError::NotFound("Movie"))?;

        let mut active: movie::ActiveModel = existing.into();
        active.hall = Set(data.hall);
        active.title = Set(data.title);
        active.description = Set(data.description);
        active.duration = Set(data.duration);
        active.start_time = Set(data.start_time);

        Ok(active.update(db).await?)
    }

    /// Dependent reservations are re-pointed at the placeholder movie by the
    /// schema's SET DEFAULT action rather than deleted.
    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<(), BookingError> {
        let result = movie::Entity::delete_by_id(id).exec(db).await?;

        if result.rows_affected == 0 {
            return Err(BookingError::NotFound("Movie"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn movie_data(title: &str, duration: i32) -> MovieData {
        MovieData {
            hall: "A1".to_owned(),
            title: title.to_owned(),
            description: None,
            duration,
            start_time: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_movie() {
        let db = sea_orm::MockDatabase::new(sea_orm::DatabaseBackend::Postgres).into_connection();

        let err = MovieService::create(&db, movie_data("", 0)).await.unwrap_err();

        let BookingError::Validation(errors) = err else {
            panic!("expected validation failure, got {err:?}");
        };
        assert!(errors.get("title").is_some());
        assert!(errors.get("duration").is_some());
        assert!(db.into_transaction_log().is_empty());
    }
}
