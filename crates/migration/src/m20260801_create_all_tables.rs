use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Default for reservations.movie_id, pointing at the seeded placeholder row
const UNKNOWN_MOVIE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create movies table
        manager
            .create_table(
                Table::create()
                    .table(Movies::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Movies::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Movies::Hall).string_len(10).not_null())
                    .col(ColumnDef::new(Movies::Title).string_len(50).not_null())
                    .col(ColumnDef::new(Movies::Description).string_len(200))
                    .col(ColumnDef::new(Movies::Duration).integer().not_null())
                    .col(ColumnDef::new(Movies::StartTime).date().not_null())
                    .to_owned(),
            )
            .await?;

        // Create guests table
        manager
            .create_table(
                Table::create()
                    .table(Guests::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Guests::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Guests::Name).string_len(50).not_null())
                    .col(ColumnDef::new(Guests::Phone).string_len(12))
                    .to_owned(),
            )
            .await?;

        // Create reservations table. A guest's reservations go with the
        // guest; a movie's reservations fall back to the placeholder movie.
        manager
            .create_table(
                Table::create()
                    .table(Reservations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reservations::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reservations::GuestId).uuid().not_null())
                    .col(
                        ColumnDef::new(Reservations::MovieId)
                            .uuid()
                            .not_null()
                            .default(UNKNOWN_MOVIE_ID),
                    )
                    .col(ColumnDef::new(Reservations::Seats).integer().not_null())
                    .col(
                        ColumnDef::new(Reservations::Price)
                            .decimal_len(4, 2)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservations_guest_id")
                            .from(Reservations::Table, Reservations::GuestId)
                            .to(Guests::Table, Guests::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservations_movie_id")
                            .from(Reservations::Table, Reservations::MovieId)
                            .to(Movies::Table, Movies::Id)
                            .on_delete(ForeignKeyAction::SetDefault),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservations::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Guests::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Movies::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Movies {
    Table,
    Id,
    Hall,
    Title,
    Description,
    Duration,
    StartTime,
}

#[derive(Iden)]
enum Guests {
    Table,
    Id,
    Name,
    Phone,
}

#[derive(Iden)]
enum Reservations {
    Table,
    Id,
    GuestId,
    MovieId,
    Seats,
    Price,
}
