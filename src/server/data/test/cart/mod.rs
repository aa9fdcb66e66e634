use crate::{
    model::cart::ProductSize,
    server::{data::cart::CartRepository, model::cart::AddToCartParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_line;
mod get_items_by_user;
