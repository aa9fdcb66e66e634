//! User fixtures for creating in-memory test data.

use chrono::DateTime;
use entity::user;

/// Default test username.
pub const DEFAULT_USERNAME: &str = "testuser";

/// Default test email.
pub const DEFAULT_EMAIL: &str = "testuser@example.com";

/// Default role.
pub const DEFAULT_ROLE: &str = "user";

/// Creates a user entity model with default values.
///
/// # Example
///
/// ```rust,ignore
/// let user = fixture::user::entity();
/// assert_eq!(user.role, "user");
/// ```
pub fn entity() -> user::Model {
    entity_builder().build()
}

/// Creates a user entity builder for customization.
pub fn entity_builder() -> UserEntityBuilder {
    UserEntityBuilder::default()
}

/// Builder for customized user entity models.
pub struct UserEntityBuilder {
    user_id: i32,
    username: String,
    email: String,
    password: String,
    role: String,
}

impl Default for UserEntityBuilder {
    fn default() -> Self {
        Self {
            user_id: 1,
            username: DEFAULT_USERNAME.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            password: "not-a-hash".to_string(),
            role: DEFAULT_ROLE.to_string(),
        }
    }
}

impl UserEntityBuilder {
    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Sets the stored role string. Any value is accepted so invalid roles can be tested.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Builds the user entity model.
    pub fn build(self) -> user::Model {
        user::Model {
            user_id: self.user_id,
            username: self.username,
            email: self.email,
            firstname: "Test".to_string(),
            lastname: "User".to_string(),
            password: self.password,
            role: self.role,
            created_at: DateTime::from_timestamp(1_717_243_200, 0).unwrap_or_default(),
        }
    }
}
