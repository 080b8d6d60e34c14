/// Media storage service - manages uploaded marketplace images on disk
use crate::error::{Result, ServerError};
use chrono::Utc;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

/// Upload ceiling shared by the image policies (5 MiB)
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Image formats accepted by the upload pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Gif,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Png => "png",
            ImageFormat::Gif => "gif",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
            ImageFormat::Gif => "image/gif",
        }
    }

    /// Resolve a MIME type string to a known format
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "image/jpeg" | "image/jpg" => Some(ImageFormat::Jpeg),
            "image/png" => Some(ImageFormat::Png),
            "image/gif" => Some(ImageFormat::Gif),
            _ => None,
        }
    }
}

/// Destination category for an upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaCategory {
    Shop,
    Gym,
}

impl MediaCategory {
    pub fn subdirectory(&self) -> &'static str {
        match self {
            MediaCategory::Shop => "shop",
            MediaCategory::Gym => "gym",
        }
    }
}

/// What an upload route accepts.
///
/// One policy type covers every upload surface; routes differ only in the
/// values they construct here.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub category: MediaCategory,
    pub allowed: &'static [ImageFormat],
    pub max_bytes: Option<u64>,
}

impl UploadPolicy {
    /// Product photos attached to shop listings
    pub fn shop_images() -> Self {
        Self {
            category: MediaCategory::Shop,
            allowed: &[ImageFormat::Jpeg, ImageFormat::Png],
            max_bytes: Some(MAX_IMAGE_BYTES),
        }
    }

    /// Gym and course photos
    pub fn gym_images() -> Self {
        Self {
            category: MediaCategory::Gym,
            allowed: &[ImageFormat::Jpeg, ImageFormat::Png, ImageFormat::Gif],
            max_bytes: Some(MAX_IMAGE_BYTES),
        }
    }

    /// Check a candidate file against the policy
    pub fn check(&self, mime: &str, size: u64) -> Result<ImageFormat> {
        let format = ImageFormat::from_mime(mime)
            .filter(|format| self.allowed.contains(format))
            .ok_or_else(|| {
                ServerError::bad_request("Upload rejected", format!("Invalid file type: {mime}"))
            })?;

        if let Some(max_bytes) = self.max_bytes {
            if size > max_bytes {
                return Err(ServerError::bad_request(
                    "Upload rejected",
                    format!("File too large: {size} bytes exceeds limit of {max_bytes}"),
                ));
            }
        }

        Ok(format)
    }
}

/// A file accepted and written by `MediaStorage`
#[derive(Debug, Clone)]
pub struct StoredImage {
    /// Path relative to the media root, e.g. `shop/1712041200123-9f3b.jpg`
    pub file_name: String,

    /// Size in bytes as written
    pub size: u64,
}

#[derive(Debug, Clone)]
pub struct MediaStorage {
    base_path: PathBuf,
}

impl MediaStorage {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Initialize storage directories
    pub async fn initialize(&self) -> Result<()> {
        // Create category subdirectories
        for category in &[MediaCategory::Shop, MediaCategory::Gym] {
            let dir = self.base_path.join(category.subdirectory());
            fs::create_dir_all(&dir).await?;
        }
        Ok(())
    }

    /// Persist an uploaded file after checking it against `policy`.
    ///
    /// The write happens within the request; a later handler failure does
    /// not remove the file.
    pub async fn store(
        &self,
        policy: &UploadPolicy,
        original_name: &str,
        mime: &str,
        data: &[u8],
    ) -> Result<StoredImage> {
        let format = policy.check(mime, data.len() as u64)?;

        let file_name = generate_name(original_name, format);
        let relative = format!("{}/{}", policy.category.subdirectory(), file_name);
        let path = self.base_path.join(&relative);

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        fs::write(&path, data).await?;

        Ok(StoredImage {
            file_name: relative,
            size: data.len() as u64,
        })
    }

    /// Resolve a client-supplied relative path to a readable file
    pub fn resolve(&self, relative: &str) -> Result<PathBuf> {
        let path = self.base_path.join(relative);

        if !path.is_file() {
            return Err(ServerError::NotFound(format!(
                "No image found at {relative}"
            )));
        }

        self.validate_path(&path)?;
        Ok(path)
    }

    /// Validate that a path is within the storage directory (prevent directory traversal)
    pub fn validate_path(&self, path: &Path) -> Result<()> {
        let canonical_base = self
            .base_path
            .canonicalize()
            .map_err(|e| ServerError::internal("Invalid media base path", e))?;

        let canonical_path = path
            .canonicalize()
            .map_err(|e| ServerError::internal("Invalid media path", e))?;

        if !canonical_path.starts_with(&canonical_base) {
            return Err(ServerError::bad_request(
                "Invalid path",
                "Path traversal attempt detected",
            ));
        }

        Ok(())
    }
}

/// Storage name: upload instant, a random token, and the original extension
fn generate_name(original_name: &str, format: ImageFormat) -> String {
    let extension = Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(char::is_alphanumeric))
        .unwrap_or_else(|| format.extension());

    format!(
        "{}-{}.{}",
        Utc::now().timestamp_millis(),
        Uuid::new_v4().simple(),
        extension
    )
}
