use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000000_create_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create alert_type enum
        manager
            .create_type(
                Type::create()
                    .as_enum(AlertType::Enum)
                    .values([AlertType::Emergency, AlertType::Warning, AlertType::Info])
                    .to_owned(),
            )
            .await?;

        // Create alerts table
        manager
            .create_table(
                Table::create()
                    .table(Alerts::Table)
                    .if_not_exists()
                    .col(pk_uuid(Alerts::Id))
                    .col(
                        ColumnDef::new(Alerts::AlertType)
                            .enumeration(
                                AlertType::Enum,
                                [AlertType::Emergency, AlertType::Warning, AlertType::Info],
                            )
                            .not_null(),
                    )
                    .col(string(Alerts::Description))
                    .col(uuid(Alerts::UserId))
                    .col(
                        timestamp_with_time_zone(Alerts::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_alerts_user_id")
                            .from(Alerts::Table, Alerts::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create indexes
        manager
            .create_index(
                Index::create()
                    .name("idx_alerts_user_id")
                    .table(Alerts::Table)
                    .col(Alerts::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_alerts_created_at")
                    .table(Alerts::Table)
                    .col(Alerts::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alerts::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(AlertType::Enum).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Alerts {
    Table,
    Id,
    AlertType,
    Description,
    UserId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum AlertType {
    #[sea_orm(iden = "alert_type")]
    Enum,
    #[sea_orm(iden = "EMERGENCY")]
    Emergency,
    #[sea_orm(iden = "WARNING")]
    Warning,
    #[sea_orm(iden = "INFO")]
    Info,
}
