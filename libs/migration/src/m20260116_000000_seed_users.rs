use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Users are provisioned outside this service; seed a couple so
        // the alert endpoints are usable on a fresh database.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
            INSERT INTO users (id, name, created_at)
            VALUES
                ('01945c1e-0000-7000-8000-000000000001', 'alice', NOW()),
                ('01945c1e-0000-7001-8000-000000000002', 'bob', NOW())
            ON CONFLICT (id) DO NOTHING
            "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
            DELETE FROM users
            WHERE id IN (
                '01945c1e-0000-7000-8000-000000000001',
                '01945c1e-0000-7001-8000-000000000002'
            )
            "#,
            )
            .await?;

        Ok(())
    }
}
