/// Image serving API
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tokio::fs::File;
use tokio_util::io::ReaderStream;

/// GET /images/*path
/// Stream a stored image back to the client
pub async fn serve_image(
    Path(path): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Response> {
    let file_path = match app_state.media_storage.resolve(&path) {
        Ok(file_path) => file_path,
        Err(ServerError::NotFound(detail)) => {
            return Ok((
                StatusCode::NOT_FOUND,
                Json(json!({ "success": false, "error": detail })),
            )
                .into_response());
        }
        Err(other) => return Err(other),
    };

    let metadata = tokio::fs::metadata(&file_path).await?;

    // Detect MIME type from the stored name
    let mime_type = mime_guess::from_path(&file_path)
        .first_or_octet_stream()
        .to_string();

    let file = File::open(&file_path).await?;
    let body = Body::from_stream(ReaderStream::new(file));

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime_type)
        .header(header::CONTENT_LENGTH, metadata.len())
        .body(body)
        .map_err(|e| ServerError::internal("Failed to build response", e))?;

    Ok(response)
}
