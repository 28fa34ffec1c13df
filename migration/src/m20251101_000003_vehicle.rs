use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000002_character::Character;

static FK_VEHICLE_DRIVER_ID: &str = "fk-vehicle-driver_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline as SQLite cannot add them to an existing table
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicle::Id))
                    .col(string_uniq(Vehicle::Name))
                    .col(integer_null(Vehicle::MaxSpeed))
                    .col(integer_null(Vehicle::DriverId).unique_key())
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_VEHICLE_DRIVER_ID)
                            .from(Vehicle::Table, Vehicle::DriverId)
                            .to(Character::Table, Character::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Vehicle {
    Table,
    Id,
    Name,
    MaxSpeed,
    DriverId,
}
