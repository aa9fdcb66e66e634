use crate::server::{data::category::CategoryRepository, model::category::CreateCategoryParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod associate;
mod create;
mod delete;
