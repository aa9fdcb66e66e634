use sea_orm::DbErr;
use std::str::FromStr;

use crate::server::error::internal::InternalError;

/// Parses an enum stored as text in the database.
///
/// # Arguments
/// - `field` - Column name, used in the error message
/// - `value` - The stored text
///
/// # Returns
/// - `Ok(T)` - Successfully parsed value
/// - `Err(DbErr::Custom)` - The stored text is not a known variant
pub fn parse_stored<T>(field: &'static str, value: String) -> Result<T, DbErr>
where
    T: FromStr,
{
    value.parse::<T>().map_err(|_| {
        DbErr::Custom(InternalError::InvalidEnumValue { field, value }.to_string())
    })
}
