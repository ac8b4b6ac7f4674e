use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Seed the placeholder movie that reservations are re-pointed at when
        // their movie is deleted. Must exist before any reservation does.
        manager
            .get_connection()
            .execute_unprepared(
                "INSERT INTO movies (id, hall, title, duration, start_time)
                VALUES ('00000000-0000-0000-0000-000000000000', '-', 'Unknown Movie', 0, '1970-01-01')
                ON CONFLICT (id) DO NOTHING;",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                "DELETE FROM movies WHERE id = '00000000-0000-0000-0000-000000000000';",
            )
            .await?;

        Ok(())
    }
}
