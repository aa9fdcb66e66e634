use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240601_000001_create_user_table::User, m20240601_000007_create_order_table::Order,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Address::Table)
                    .if_not_exists()
                    .col(pk_auto(Address::AddressId))
                    .col(integer(Address::UserId))
                    .col(integer(Address::OrderId))
                    .col(string(Address::AddressName))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_address_user_id")
                            .from(Address::Table, Address::UserId)
                            .to(User::Table, User::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_address_order_id")
                            .from(Address::Table, Address::OrderId)
                            .to(Order::Table, Order::OrderId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Address::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Address {
    Table,
    AddressId,
    UserId,
    OrderId,
    AddressName,
}
