use std::collections::HashMap;

use models::{guest::GuestData, validation};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};
use uuid::Uuid;

use crate::entities::{guest, reservation};
use crate::error::BookingError;

pub struct GuestService;

impl GuestService {
    /// Get all guests together with their reservations
    pub async fn list_with_reservations(
        db: &DatabaseConnection,
    ) -> Result<Vec<(guest::Model, Vec<reservation::Model>)>, DbErr> {
        let guests = guest::Entity::find().all(db).await?;

        if guests.is_empty() {
            return Ok(Vec::new());
        }

        // Batch fetch all reservations for all guests
        let guest_ids: Vec<Uuid> = guests.iter().map(|g| g.id).collect();
        let reservations = reservation::Entity::find()
            .filter(reservation::Column::GuestId.is_in(guest_ids))
            .all(db)
            .await?;

        let mut reservations_by_guest: HashMap<Uuid, Vec<reservation::Model>> = HashMap::new();
        for r in reservations {
            reservations_by_guest.entry(r.guest_id).or_default().push(r);
        }

        Ok(guests
            .into_iter()
            .map(|g| {
                let related = reservations_by_guest.remove(&g.id).unwrap_or_default();
                (g, related)
            })
            .collect())
    }

    pub async fn get_with_reservations(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<(guest::Model, Vec<reservation::Model>)>, DbErr> {
        let selected = match guest::Entity::find_by_id(id).one(db).await? {
            Some(g) => g,
            None => return Ok(None),
        };

        let reservations = reservation::Entity::find()
            .filter(reservation::Column::GuestId.eq(id))
            .all(db)
            .await?;

        Ok(Some((selected, reservations)))
    }

    pub async fn create(
        db: &DatabaseConnection,
        data: GuestData,
    ) -> Result<guest::Model, BookingError> {
        validation::validate_guest(&data).map_err(BookingError::Validation)?;

        let created = guest::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            phone: Set(data.phone),
        }
        .insert(db)
        .await?;

        Ok(created)
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        data: GuestData,
    ) -> Result<guest::Model, BookingError> {
        validation::validate_guest(&data).map_err(BookingError::Validation)?;

        let existing = guest::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(BookingError::NotFound("Guest"))?;

        let mut active: guest::ActiveModel = existing.into();
        active.name = Set(data.name);
        active.phone = Set(data.phone);

        Ok(active.update(db).await?)
    }

    /// Deleting a guest also removes their reservations (cascade)
    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<(), BookingError> {
        let result = guest::Entity::delete_by_id(id).exec(db).await?;

        if result.rows_affected == 0 {
            return Err(BookingError::NotFound("Guest"));
        }

        Ok(())
    }
}
