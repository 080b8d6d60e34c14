/// Common test utilities and fixtures
use axum::Router;
use ringside_server::{api, services::MediaStorage, state::AppState};
use ringside_storage::LocalStore;
use std::sync::Arc;
use tempfile::TempDir;

/// Boundary used by the multipart body builder
pub const BOUNDARY: &str = "ringside-test-boundary";

/// A fully wired router plus the directories backing it
pub struct TestApp {
    pub app: Router,
    pub db: Arc<LocalStore>,
    pub media_storage: Arc<MediaStorage>,
    _db_dir: TempDir,
    _media_dir: TempDir,
}

/// Build a test application over a real on-disk SQLite database
/// and a temporary media directory
pub async fn create_test_app() -> TestApp {
    let db_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = db_dir.path().join("test.db");
    let db_url = format!("sqlite://{}", db_path.display());

    let db = Arc::new(
        LocalStore::connect(&db_url)
            .await
            .expect("Failed to open test database"),
    );

    let media_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let media_storage = MediaStorage::new(media_dir.path().to_path_buf());
    media_storage
        .initialize()
        .await
        .expect("Failed to initialize media storage");
    let media_storage = Arc::new(media_storage);

    let app_state = AppState::new(Arc::clone(&db), Arc::clone(&media_storage));
    let app = api::router(app_state);

    TestApp {
        app,
        db,
        media_storage,
        _db_dir: db_dir,
        _media_dir: media_dir,
    }
}

/// Encode a single file as a multipart/form-data body
pub fn multipart_body(file_name: &str, content_type: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"img\"; filename=\"{file_name}\"\r\n\
             Content-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// Content-Type header value matching `multipart_body`
pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}
