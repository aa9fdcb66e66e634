use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ErrorDto {
    pub error: String,
}

/// Plain confirmation returned by operations that have no resource left to show.
#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
