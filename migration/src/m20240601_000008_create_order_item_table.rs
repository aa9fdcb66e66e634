use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240601_000001_create_user_table::User, m20240601_000003_create_product_table::Product,
    m20240601_000007_create_order_table::Order,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderItem::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderItem::OrderitemId))
                    .col(integer(OrderItem::OrderId))
                    .col(integer(OrderItem::UserId))
                    .col(integer(OrderItem::ProductId))
                    .col(integer(OrderItem::TotalCartProducts))
                    .col(big_integer(OrderItem::ProductTotal))
                    .col(string(OrderItem::ProductSize))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_item_order_id")
                            .from(OrderItem::Table, OrderItem::OrderId)
                            .to(Order::Table, Order::OrderId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_item_user_id")
                            .from(OrderItem::Table, OrderItem::UserId)
                            .to(User::Table, User::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_item_product_id")
                            .from(OrderItem::Table, OrderItem::ProductId)
                            .to(Product::Table, Product::ProductId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrderItem {
    Table,
    OrderitemId,
    OrderId,
    UserId,
    ProductId,
    TotalCartProducts,
    ProductTotal,
    ProductSize,
}
