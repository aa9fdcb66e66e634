use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240601_000001_create_user_table::User, m20240601_000003_create_product_table::Product,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cart::Table)
                    .if_not_exists()
                    .col(pk_auto(Cart::CartId))
                    .col(integer(Cart::UserId))
                    .col(integer(Cart::ProductId))
                    .col(integer(Cart::TotalCartProducts))
                    .col(big_integer(Cart::ProductTotal))
                    .col(string(Cart::ProductSize))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_user_id")
                            .from(Cart::Table, Cart::UserId)
                            .to(User::Table, User::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_product_id")
                            .from(Cart::Table, Cart::ProductId)
                            .to(Product::Table, Product::ProductId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One row per user, product and size
        manager
            .create_index(
                Index::create()
                    .name("idx_cart_user_product_size")
                    .table(Cart::Table)
                    .col(Cart::UserId)
                    .col(Cart::ProductId)
                    .col(Cart::ProductSize)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cart::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Cart {
    Table,
    CartId,
    UserId,
    ProductId,
    TotalCartProducts,
    ProductTotal,
    ProductSize,
}
