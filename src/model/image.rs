use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct ImageDto {
    pub id: i32,
    pub filename: String,
    pub content_type: String,
}

/// Multipart upload body, documented for the OpenAPI schema only.
#[derive(Deserialize, ToSchema)]
#[allow(dead_code)]
pub struct UploadImageDto {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}
