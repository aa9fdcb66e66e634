use sea_orm_migration::{prelude::*, schema::*};

use super::m20240601_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Order::Table)
                    .if_not_exists()
                    .col(pk_auto(Order::OrderId))
                    .col(integer(Order::UserId))
                    .col(string(Order::OrderStatus).default("pending"))
                    .col(string(Order::CustomerName))
                    .col(string(Order::CustomerEmail))
                    .col(
                        timestamp_with_time_zone(Order::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_user_id")
                            .from(Order::Table, Order::UserId)
                            .to(User::Table, User::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Order::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Order {
    Table,
    OrderId,
    UserId,
    OrderStatus,
    CustomerName,
    CustomerEmail,
    CreatedAt,
}
