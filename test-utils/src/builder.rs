use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables with `with_table()` or one of the grouped helpers, then call `build()`
/// to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Image, Product};
///
/// let test = TestBuilder::new()
///     .with_table(Image)
///     .with_table(Product)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables should be added in dependency order, referenced tables before the tables
    /// holding foreign keys to them.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the catalog tables: Image, Product, Category and CategoryProduct.
    pub fn with_catalog_tables(self) -> Self {
        self.with_table(Image)
            .with_table(Product)
            .with_table(Category)
            .with_table(CategoryProduct)
    }

    /// Adds every table of the storefront in dependency order.
    ///
    /// Use this when testing carts, orders or reviews, which reference both users and
    /// products.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_storefront_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_storefront_tables(self) -> Self {
        self.with_table(User)
            .with_catalog_tables()
            .with_table(Cart)
            .with_table(Order)
            .with_table(OrderItem)
            .with_table(Address)
            .with_table(Payment)
            .with_table(Review)
    }

    /// Builds the test context, creating every configured table.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
