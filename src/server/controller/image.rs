use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        image::{ImageDto, UploadImageDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AccessToken, AuthGuard},
        model::image::CreateImageParams,
        service::image::ImageService,
        state::AppState,
    },
};

/// Tag for grouping image endpoints in OpenAPI documentation
pub static IMAGE_TAG: &str = "image";

/// Upload an image as the multipart field `file`.
///
/// # Returns
/// - `201 Created` - Image stored
/// - `400 Bad Request` - No `file` field, or the file is not an image
/// - `401 Unauthorized` - Not authenticated
#[utoipa::path(
    post,
    path = "/api/images",
    tag = IMAGE_TAG,
    request_body(content = UploadImageDto, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Image stored", body = ImageDto),
        (status = 400, description = "Missing or non-image file", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_image(
    State(state): State<AppState>,
    token: AccessToken,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &token)
        .require(&[])
        .await?;

    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field.bytes().await?.to_vec();

        upload = Some(CreateImageParams {
            filename,
            content_type,
            data,
        });
        break;
    }

    let Some(params) = upload else {
        return Err(AppError::BadRequest("No file uploaded".to_string()));
    };

    let image = ImageService::new(&state.db).upload(params).await?;

    Ok((StatusCode::CREATED, Json(image.into_dto())))
}

/// Download a stored image with its original content type.
///
/// # Returns
/// - `200 OK` - Raw image bytes
/// - `404 Not Found` - No such image
#[utoipa::path(
    get,
    path = "/api/images/{image_id}",
    tag = IMAGE_TAG,
    params(
        ("image_id" = i32, Path, description = "Image ID")
    ),
    responses(
        (status = 200, description = "Raw image bytes", content_type = "image/*"),
        (status = 404, description = "Image not found", body = ErrorDto)
    ),
)]
pub async fn get_image(
    State(state): State<AppState>,
    Path(image_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let image = ImageService::new(&state.db).fetch(image_id).await?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, image.content_type)],
        image.data,
    ))
}
