use sea_orm_migration::{prelude::*, schema::*};

use super::m20240601_000002_create_image_table::Image;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(pk_auto(Product::ProductId))
                    .col(string_uniq(Product::ProductName))
                    .col(text(Product::ProductDescription))
                    .col(big_integer(Product::ProductPrice))
                    .col(string(Product::ProductSlug))
                    .col(integer_null(Product::ImageId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_image_id")
                            .from(Product::Table, Product::ImageId)
                            .to(Image::Table, Image::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Product::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Product {
    Table,
    ProductId,
    ProductName,
    ProductDescription,
    ProductPrice,
    ProductSlug,
    ImageId,
}
