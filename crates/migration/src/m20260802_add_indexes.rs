use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Index on movies.title for title lookups and search
        manager
            .create_index(
                Index::create()
                    .name("idx_movies_title")
                    .table(Movies::Table)
                    .col(Movies::Title)
                    .to_owned(),
            )
            .await?;

        // Index on guests for the (name, phone) lookup in booking
        manager
            .create_index(
                Index::create()
                    .name("idx_guests_name_phone")
                    .table(Guests::Table)
                    .col(Guests::Name)
                    .col(Guests::Phone)
                    .to_owned(),
            )
            .await?;

        // Indexes on reservations foreign keys for faster joins
        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_guest_id")
                    .table(Reservations::Table)
                    .col(Reservations::GuestId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_movie_id")
                    .table(Reservations::Table)
                    .col(Reservations::MovieId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_movies_title").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_guests_name_phone").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_reservations_guest_id").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_reservations_movie_id").to_owned())
            .await
    }
}

#[derive(Iden)]
enum Movies {
    Table,
    Title,
}

#[derive(Iden)]
enum Guests {
    Table,
    Name,
    Phone,
}

#[derive(Iden)]
enum Reservations {
    Table,
    GuestId,
    MovieId,
}
