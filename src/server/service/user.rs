//! User service for business logic.
//!
//! This module provides the `UserService` for account management: signup with the
//! first-admin bootstrap, partial profile updates with uniqueness checks, and account
//! deletion together with everything the account owns.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::user::UserRole,
    server::{
        data::{
            address::AddressRepository, cart::CartRepository, order::OrderRepository,
            order_item::OrderItemRepository, payment::PaymentRepository,
            review::ReviewRepository, user::UserRepository,
        },
        error::{auth::AuthError, AppError},
        model::user::{CreateUserParams, SignupParams, UpdateUserParams, User},
        service::auth::password::hash_password,
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    bcrypt_cost: u32,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `bcrypt_cost` - Work factor used when hashing new passwords
    pub fn new(db: &'a DatabaseConnection, bcrypt_cost: u32) -> Self {
        Self { db, bcrypt_cost }
    }

    /// Registers a new account.
    ///
    /// The account is made an admin when no admin exists yet, so a fresh deployment can
    /// bootstrap its first administrator through the public signup endpoint.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Passwords differ, or email/username already taken
    /// - `Err(AppError::InternalErr)` - Password hashing failed
    pub async fn signup(&self, params: SignupParams) -> Result<User, AppError> {
        if params.password != params.confirm_password {
            return Err(AppError::BadRequest("Passwords do not match!".to_string()));
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::BadRequest("Email already exists!".to_string()));
        }
        if user_repo.find_by_username(&params.username).await?.is_some() {
            return Err(AppError::BadRequest("Username already exists!".to_string()));
        }

        let role = if user_repo.admin_exists().await? {
            UserRole::User
        } else {
            tracing::info!("No admin account exists, granting admin role to {}", params.username);
            UserRole::Admin
        };

        let password_hash = hash_password(&params.password, self.bcrypt_cost)?;

        let user = user_repo
            .create(CreateUserParams {
                username: params.username,
                email: params.email,
                firstname: params.firstname,
                lastname: params.lastname,
                password_hash,
                role,
            })
            .await?;

        Ok(user)
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(user_not_found)
    }

    pub async fn get_by_username(&self, username: &str) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_username(username)
            .await?
            .ok_or_else(user_not_found)
    }

    pub async fn get_by_email(&self, email: &str) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_email(email)
            .await?
            .ok_or_else(user_not_found)
    }

    /// Applies a partial update to `user`.
    ///
    /// A changed email or username must still be unique; a new password is hashed
    /// before it is stored.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::BadRequest)` - New email or username belongs to another account
    pub async fn update(&self, user: &User, mut params: UpdateUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if let Some(email) = params.email.as_deref().filter(|e| *e != user.email) {
            if user_repo.find_by_email(email).await?.is_some() {
                return Err(AppError::BadRequest("Email already exists!".to_string()));
            }
        }
        if let Some(username) = params.username.as_deref().filter(|u| *u != user.username) {
            if user_repo.find_by_username(username).await?.is_some() {
                return Err(AppError::BadRequest("Username already exists!".to_string()));
            }
        }

        if let Some(password) = params.password.take() {
            params.password = Some(hash_password(&password, self.bcrypt_cost)?);
        }

        let updated = user_repo.update(user.user_id, params).await?;

        Ok(updated)
    }

    /// Deletes an account together with its carts, orders and reviews.
    ///
    /// # Arguments
    /// - `actor` - The authenticated caller
    /// - `user_id` - Account to delete
    ///
    /// # Returns
    /// - `Ok(())` - Account and dependents deleted
    /// - `Err(AuthError::AccessDenied)` - Caller is neither the account owner nor an admin
    /// - `Err(AppError::NotFound)` - No account with that id
    pub async fn delete(&self, actor: &User, user_id: i32) -> Result<(), AppError> {
        if actor.user_id != user_id && !actor.is_admin() {
            return Err(AuthError::AccessDenied(
                "Not allowed to delete another user".to_string(),
            )
            .into());
        }

        if UserRepository::new(self.db).find_by_id(user_id).await?.is_none() {
            return Err(user_not_found());
        }

        let txn = self.db.begin().await?;

        ReviewRepository::new(&txn).delete_by_user(user_id).await?;
        CartRepository::new(&txn).delete_by_user(user_id).await?;
        AddressRepository::new(&txn).delete_by_user(user_id).await?;
        PaymentRepository::new(&txn).delete_by_user(user_id).await?;
        OrderItemRepository::new(&txn).delete_by_user(user_id).await?;
        OrderRepository::new(&txn).delete_by_user(user_id).await?;
        UserRepository::new(&txn).delete(user_id).await?;

        txn.commit().await?;

        Ok(())
    }
}

fn user_not_found() -> AppError {
    AppError::NotFound("user not found!".to_string())
}

