use models::validation;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait};
use uuid::Uuid;

use crate::entities::reservation;
use crate::error::BookingError;

pub struct ReservationService;

impl ReservationService {
    pub async fn list(db: &DatabaseConnection) -> Result<Vec<reservation::Model>, DbErr> {
        reservation::Entity::find().all(db).await
    }

    pub async fn get(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<reservation::Model>, DbErr> {
        reservation::Entity::find_by_id(id).one(db).await
    }

    /// Updates seats and price on an existing reservation. Guest and movie
    /// references are fixed at booking time.
    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        seats: i32,
        price: Decimal,
    ) -> Result<reservation::Model, BookingError> {
        validation::validate_reservation(seats, price).map_err(BookingError::Validation)?;

        let existing = reservation::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(BookingError::NotFound("Reservation"))?;

        let mut active: reservation::ActiveModel = existing.into();
        active.seats = Set(seats);
        active.price = Set(price);

        Ok(active.update(db).await?)
    }

    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<(), BookingError> {
        let result = reservation::Entity::delete_by_id(id).exec(db).await?;

        if result.rows_affected == 0 {
            return Err(BookingError::NotFound("Reservation"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_update_rejects_out_of_range_price() {
        let db = sea_orm::MockDatabase::new(sea_orm::DatabaseBackend::Postgres).into_connection();

        let err = ReservationService::update(&db, Uuid::from_u128(1), 2, Decimal::new(10000, 2))
            .await
            .unwrap_err();

        let BookingError::Validation(errors) = err else {
            panic!("expected validation failure, got {err:?}");
        };
        assert!(errors.get("price").is_some());
        assert!(db.into_transaction_log().is_empty());
    }
}
