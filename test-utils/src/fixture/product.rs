//! Product fixtures for creating in-memory test data.

use entity::product;

/// Default test product name.
pub const DEFAULT_NAME: &str = "Test Product";

/// Default product price in the smallest currency unit.
pub const DEFAULT_PRICE: i64 = 1000;

/// Creates a product entity model with default values and no image.
pub fn entity() -> product::Model {
    product::Model {
        product_id: 1,
        product_name: DEFAULT_NAME.to_string(),
        product_description: "A product used in tests".to_string(),
        product_price: DEFAULT_PRICE,
        product_slug: "test-product".to_string(),
        image_id: None,
    }
}
