use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000001_user::User, m20251101_000003_vehicle::Vehicle};

static IDX_FAVORITE_VEHICLE_USER_ID: &str = "idx-favorite_vehicle-user_id";
static FK_FAVORITE_VEHICLE_USER_ID: &str = "fk-favorite_vehicle-user_id";
static FK_FAVORITE_VEHICLE_VEHICLE_ID: &str = "fk-favorite_vehicle-vehicle_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoriteVehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoriteVehicle::Id))
                    .col(integer(FavoriteVehicle::UserId))
                    .col(integer(FavoriteVehicle::VehicleId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_VEHICLE_USER_ID)
                            .from(FavoriteVehicle::Table, FavoriteVehicle::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_VEHICLE_VEHICLE_ID)
                            .from(FavoriteVehicle::Table, FavoriteVehicle::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_VEHICLE_USER_ID)
                    .table(FavoriteVehicle::Table)
                    .col(FavoriteVehicle::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_VEHICLE_USER_ID)
                    .table(FavoriteVehicle::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FavoriteVehicle::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FavoriteVehicle {
    Table,
    Id,
    UserId,
    VehicleId,
}
