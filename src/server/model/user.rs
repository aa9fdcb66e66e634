//! User domain models and parameters.
//!
//! Provides the domain model for storefront accounts along with parameter types for
//! signup and partial updates.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserDto, UserRole},
    server::util::parse::parse_stored,
};

/// Storefront account with its role and password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub user_id: i32,
    pub username: String,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    /// bcrypt hash of the password. Never leaves the server.
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The password hash is dropped.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            user_id: self.user_id,
            username: self.username,
            email: self.email,
            firstname: self.firstname,
            lastname: self.lastname,
            role: self.role,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(DbErr::Custom)` - The stored role is not `admin` or `user`
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        Ok(Self {
            user_id: entity.user_id,
            username: entity.username,
            email: entity.email,
            firstname: entity.firstname,
            lastname: entity.lastname,
            password_hash: entity.password,
            role: parse_stored("role", entity.role)?,
            created_at: entity.created_at,
        })
    }
}

/// Signup request with the plain-text password still attached.
#[derive(Debug, Clone)]
pub struct SignupParams {
    pub username: String,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupParams {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            username: dto.username,
            email: dto.email,
            firstname: dto.firstname,
            lastname: dto.lastname,
            password: dto.password,
            confirm_password: dto.confirm_password,
        }
    }
}

/// Parameters for inserting a user whose password has already been hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    pub password_hash: String,
    pub role: UserRole,
}

/// Partial user update. `None` leaves the column unchanged.
///
/// `password` holds plain text until the service hashes it into `password_hash`.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub username: Option<String>,
    pub email: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub password: Option<String>,
}

impl UpdateUserParams {
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            username: dto.username,
            email: dto.email,
            firstname: dto.firstname,
            lastname: dto.lastname,
            password: dto.password,
        }
    }
}
