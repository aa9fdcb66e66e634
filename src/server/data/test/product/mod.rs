use crate::server::{
    data::product::ProductRepository,
    model::product::{CreateProductParams, UpdateProductParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
mod update;
