use crate::{
    model::order::OrderStatus,
    server::{
        data::{order::OrderRepository, order_item::OrderItemRepository},
        model::order::NewOrderParams,
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_order;
mod update_status;

fn new_order(user_id: i32, order_id: Option<i32>) -> NewOrderParams {
    NewOrderParams {
        order_id,
        user_id,
        status: OrderStatus::Pending,
        customer_name: "Ada Lovelace".to_string(),
        customer_email: "ada@example.com".to_string(),
    }
}
