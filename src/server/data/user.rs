//! User data repository for database operations.
//!
//! Provides the `UserRepository` for managing account records: creation, lookups by id,
//! username or email, partial updates, and deletion.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::{
    model::user::UserRole,
    server::model::user::{CreateUserParams, UpdateUserParams, User},
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `params` - Account fields with the password already hashed
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Insert failed, e.g. unique constraint on username or email
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            firstname: ActiveValue::Set(params.firstname),
            lastname: ActiveValue::Set(params.lastname),
            password: ActiveValue::Set(params.password_hash),
            role: ActiveValue::Set(params.role.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Checks if any admin users exist in the database.
    ///
    /// Used during signup to decide whether the new account becomes the first admin.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one admin user exists
    /// - `Ok(false)` - No admin users exist
    /// - `Err(DbErr)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(UserRole::Admin.as_str()))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Applies a partial update to a user.
    ///
    /// `params.password` is stored as given; callers hash it first.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(DbErr::RecordNotFound)` - No user with that id
    pub async fn update(&self, user_id: i32, params: UpdateUserParams) -> Result<User, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "User with id {} not found",
                user_id
            )))?;

        let mut active: entity::user::ActiveModel = entity.into();
        if let Some(username) = params.username {
            active.username = ActiveValue::Set(username);
        }
        if let Some(email) = params.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(firstname) = params.firstname {
            active.firstname = ActiveValue::Set(firstname);
        }
        if let Some(lastname) = params.lastname {
            active.lastname = ActiveValue::Set(lastname);
        }
        if let Some(password) = params.password {
            active.password = ActiveValue::Set(password);
        }

        let entity = active.update(self.db).await?;

        User::from_entity(entity)
    }

    /// Deletes a user.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted rows, 0 if no user had that id
    pub async fn delete(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
