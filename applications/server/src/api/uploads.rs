/// Image upload API routes
use crate::{
    error::{Result, ServerError},
    services::media_storage::UploadPolicy,
    state::AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub files: Vec<String>,
}

/// POST /images/shop
/// Upload product photos for shop listings
pub async fn upload_shop_images(
    State(app_state): State<AppState>,
    headers: axum::http::HeaderMap,
    body: axum::body::Bytes,
) -> Result<(StatusCode, Json<UploadResponse>)> {
    store_multipart(&app_state, UploadPolicy::shop_images(), &headers, body).await
}

/// POST /images/gym
/// Upload gym and course photos
pub async fn upload_gym_images(
    State(app_state): State<AppState>,
    headers: axum::http::HeaderMap,
    body: axum::body::Bytes,
) -> Result<(StatusCode, Json<UploadResponse>)> {
    store_multipart(&app_state, UploadPolicy::gym_images(), &headers, body).await
}

/// Parse a multipart body and persist every file part under `policy`.
///
/// Files are checked against the policy before anything touches the
/// database or disk; the first violation fails the whole request.
async fn store_multipart(
    app_state: &AppState,
    policy: UploadPolicy,
    headers: &axum::http::HeaderMap,
    body: axum::body::Bytes,
) -> Result<(StatusCode, Json<UploadResponse>)> {
    let content_type = headers
        .get(axum::http::header::CONTENT_TYPE)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ServerError::bad_request("Upload rejected", "Missing Content-Type"))?;

    if !content_type.starts_with("multipart/form-data") {
        return Err(ServerError::bad_request(
            "Upload rejected",
            "Expected multipart/form-data",
        ));
    }

    let boundary = content_type
        .split("boundary=")
        .nth(1)
        .ok_or_else(|| ServerError::bad_request("Upload rejected", "Missing boundary"))?;

    // Convert Bytes to a stream for multer
    let stream = futures_util::stream::once(async move { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        ServerError::bad_request("Upload rejected", format!("Failed to parse multipart: {e}"))
    })? {
        // Plain form fields ride along with the files; only file parts are stored
        let Some(original_name) = field.file_name().map(ToString::to_string) else {
            continue;
        };

        let mime = field.content_type().map_or_else(
            || {
                mime_guess::from_path(&original_name)
                    .first_or_octet_stream()
                    .to_string()
            },
            ToString::to_string,
        );

        let data = field.bytes().await.map_err(|e| {
            ServerError::bad_request("Upload rejected", format!("Failed to read file: {e}"))
        })?;

        let stored = app_state
            .media_storage
            .store(&policy, &original_name, &mime, &data)
            .await?;

        files.push(stored.file_name);
    }

    if files.is_empty() {
        return Err(ServerError::bad_request("Upload rejected", "Missing file"));
    }

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            success: true,
            files,
        }),
    ))
}
