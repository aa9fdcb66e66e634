use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240601_000003_create_product_table::Product,
    m20240601_000004_create_category_table::Category,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CategoryProduct::Table)
                    .if_not_exists()
                    .col(integer(CategoryProduct::CategoryId))
                    .col(integer(CategoryProduct::ProductId))
                    .primary_key(
                        Index::create()
                            .col(CategoryProduct::CategoryId)
                            .col(CategoryProduct::ProductId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_category_product_category_id")
                            .from(CategoryProduct::Table, CategoryProduct::CategoryId)
                            .to(Category::Table, Category::CategoryId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_category_product_product_id")
                            .from(CategoryProduct::Table, CategoryProduct::ProductId)
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
            .drop_table(Table::drop().table(CategoryProduct::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CategoryProduct {
    Table,
    CategoryId,
    ProductId,
}
