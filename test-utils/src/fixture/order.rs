//! Order fixtures for creating in-memory test data.

use chrono::DateTime;
use entity::order;

/// Default order status.
pub const DEFAULT_STATUS: &str = "pending";

/// Creates a pending order entity model owned by user 1.
pub fn entity() -> order::Model {
    entity_builder().build()
}

/// Creates an order entity builder for customization.
pub fn entity_builder() -> OrderEntityBuilder {
    OrderEntityBuilder::default()
}

/// Builder for customized order entity models.
pub struct OrderEntityBuilder {
    order_id: i32,
    user_id: i32,
    order_status: String,
}

impl Default for OrderEntityBuilder {
    fn default() -> Self {
        Self {
            order_id: 1,
            user_id: 1,
            order_status: DEFAULT_STATUS.to_string(),
        }
    }
}

impl OrderEntityBuilder {
    pub fn order_id(mut self, order_id: i32) -> Self {
        self.order_id = order_id;
        self
    }

    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = user_id;
        self
    }

    /// Sets the stored status string. Any value is accepted so invalid statuses can be tested.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.order_status = status.into();
        self
    }

    pub fn build(self) -> order::Model {
        order::Model {
            order_id: self.order_id,
            user_id: self.user_id,
            order_status: self.order_status,
            customer_name: "Test Customer".to_string(),
            customer_email: "customer@example.com".to_string(),
            created_at: DateTime::from_timestamp(1_717_243_200, 0).unwrap_or_default(),
        }
    }
}
