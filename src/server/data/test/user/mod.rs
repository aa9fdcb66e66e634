use crate::{
    model::user::UserRole,
    server::{
        data::user::UserRepository,
        model::user::{CreateUserParams, UpdateUserParams},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod create;
mod delete;
mod find_by_username;
mod update;

fn create_params(username: &str, role: UserRole) -> CreateUserParams {
    CreateUserParams {
        username: username.to_string(),
        email: format!("{}@example.com", username),
        firstname: "Ada".to_string(),
        lastname: "Lovelace".to_string(),
        password_hash: "$2b$04$hash".to_string(),
        role,
    }
}
