pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_user_table;
mod m20240601_000002_create_image_table;
mod m20240601_000003_create_product_table;
mod m20240601_000004_create_category_table;
mod m20240601_000005_create_category_product_table;
mod m20240601_000006_create_cart_table;
mod m20240601_000007_create_order_table;
mod m20240601_000008_create_order_item_table;
mod m20240601_000009_create_address_table;
mod m20240601_000010_create_payment_table;
mod m20240601_000011_create_review_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_user_table::Migration),
            Box::new(m20240601_000002_create_image_table::Migration),
            Box::new(m20240601_000003_create_product_table::Migration),
            Box::new(m20240601_000004_create_category_table::Migration),
            Box::new(m20240601_000005_create_category_product_table::Migration),
            Box::new(m20240601_000006_create_cart_table::Migration),
            Box::new(m20240601_000007_create_order_table::Migration),
            Box::new(m20240601_000008_create_order_item_table::Migration),
            Box::new(m20240601_000009_create_address_table::Migration),
            Box::new(m20240601_000010_create_payment_table::Migration),
            Box::new(m20240601_000011_create_review_table::Migration),
        ]
    }
}
