use thiserror::Error;

/// Internal issues indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored enum column holds a value outside its known set.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Invalid {field} value stored in database: '{value}'")]
    InvalidEnumValue {
        /// Column the value was read from
        field: &'static str,
        /// The unrecognized value
        value: String,
    },

    /// Signing a JWT failed.
    #[error("Failed to encode token: {0}")]
    TokenEncode(#[source] jsonwebtoken::errors::Error),

    /// Hashing or verifying a password failed.
    #[error("Password hashing failed: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
}
