//! Image upload adapter
//!
//! Images are hosted by Cloudinary. In the browser the hosted upload widget
//! does the work and reports back through a callback; natively a file is
//! checked against the same constraints and posted to the unsigned upload
//! endpoint.
//!
//! Either way an upload ends in exactly one of two places: the hosted
//! `secure_url` is handed to the caller's callback, or the failure is logged
//! and the callback is never invoked, leaving the caller's field unchanged.

use crate::types::{AppError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::Cursor;

const DEFAULT_CLOUD_NAME: &str = "dojvyjghs";
const DEFAULT_UPLOAD_PRESET: &str = "portfolio_unsigned";
const DEFAULT_FOLDER: &str = "portfolio";
/// 5 MB
const DEFAULT_MAX_FILE_SIZE: u64 = 5_000_000;
const DEFAULT_MAX_DIMENSION: u32 = 2000;

/// Where the widget may pull an image from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadSource {
    Local,
    Url,
    Camera,
}

/// Upload widget configuration.
///
/// Serialises to the option object the hosted widget expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UploadOptions {
    pub cloud_name: String,
    pub upload_preset: String,
    pub folder: String,
    pub sources: Vec<UploadSource>,
    pub multiple: bool,
    /// Bytes
    pub max_file_size: u64,
    pub client_allowed_formats: Vec<String>,
    pub max_image_width: u32,
    pub max_image_height: u32,
}

impl Default for UploadOptions {
    fn default() -> Self {
        Self {
            cloud_name: DEFAULT_CLOUD_NAME.to_string(),
            upload_preset: DEFAULT_UPLOAD_PRESET.to_string(),
            folder: DEFAULT_FOLDER.to_string(),
            sources: vec![UploadSource::Local, UploadSource::Url, UploadSource::Camera],
            multiple: false,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            client_allowed_formats: ["jpg", "jpeg", "png", "gif", "webp"]
                .into_iter()
                .map(String::from)
                .collect(),
            max_image_width: DEFAULT_MAX_DIMENSION,
            max_image_height: DEFAULT_MAX_DIMENSION,
        }
    }
}

impl UploadOptions {
    /// Unsigned upload endpoint for the configured cloud.
    pub fn endpoint(&self) -> String {
        format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            self.cloud_name
        )
    }

    /// Human-readable constraint summary shown under upload buttons.
    pub fn hint(&self) -> String {
        let formats: Vec<String> = self
            .client_allowed_formats
            .iter()
            .filter(|f| f.as_str() != "jpeg")
            .map(|f| f.to_uppercase())
            .collect();
        format!(
            "{} • Max {}MB • Max {}x{}px",
            formats.join(", "),
            self.max_file_size / 1_000_000,
            self.max_image_width,
            self.max_image_height
        )
    }

    /// Check a local file against the widget's client-side constraints.
    pub fn validate(&self, file_name: &str, bytes: &[u8]) -> Result<()> {
        if bytes.len() as u64 > self.max_file_size {
            return Err(AppError::Upload(format!(
                "{} is {} bytes, the limit is {}",
                file_name,
                bytes.len(),
                self.max_file_size
            )));
        }

        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        if !self
            .client_allowed_formats
            .iter()
            .any(|f| f.eq_ignore_ascii_case(&extension))
        {
            return Err(AppError::Upload(format!(
                "{} has an unsupported format (allowed: {})",
                file_name,
                self.client_allowed_formats.join(", ")
            )));
        }

        let (width, height) = image::ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| AppError::Upload(format!("Failed to read {}: {}", file_name, e)))?
            .into_dimensions()
            .map_err(|e| AppError::Upload(format!("{} is not a readable image: {}", file_name, e)))?;
        if width > self.max_image_width || height > self.max_image_height {
            return Err(AppError::Upload(format!(
                "{} is {}x{}px, the limit is {}x{}px",
                file_name, width, height, self.max_image_width, self.max_image_height
            )));
        }

        Ok(())
    }
}

/// Result object passed to the widget callback.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WidgetResult {
    #[serde(default)]
    pub event: String,
    #[serde(default)]
    pub info: Option<WidgetInfo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WidgetInfo {
    #[serde(default)]
    pub secure_url: Option<String>,
}

/// Route one widget callback.
///
/// Only a `success` event carrying a `secure_url` reaches `on_upload`; the
/// widget also reports progress events (`queues-start`, `close`, ...) which
/// are ignored. Errors are logged. Returns whether `on_upload` ran.
pub fn handle_widget_event(
    error: Option<&Value>,
    result: Option<&WidgetResult>,
    on_upload: impl FnOnce(String),
) -> bool {
    if let Some(error) = error.filter(|e| !e.is_null()) {
        tracing::error!("Cloudinary upload error: {}", error);
        return false;
    }

    let url = result
        .filter(|r| r.event == "success")
        .and_then(|r| r.info.as_ref())
        .and_then(|info| info.secure_url.clone());
    match url {
        Some(url) => {
            tracing::debug!(%url, "Image uploaded");
            on_upload(url);
            true
        }
        None => false,
    }
}

/// Something that turns image bytes into a hosted URL.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait Uploader: Send + Sync {
    async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<String>;
}

/// Direct unsigned upload to Cloudinary.
#[derive(Clone)]
pub struct CloudinaryUploader {
    http: reqwest::Client,
    options: UploadOptions,
    endpoint: String,
}

#[derive(Deserialize)]
struct UploadResponse {
    secure_url: String,
}

impl CloudinaryUploader {
    pub fn new(options: UploadOptions) -> Self {
        let endpoint = options.endpoint();
        Self {
            http: reqwest::Client::new(),
            options,
            endpoint,
        }
    }

    /// Post somewhere other than the public endpoint (a proxy or a mock).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn options(&self) -> &UploadOptions {
        &self.options
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl Uploader for CloudinaryUploader {
    async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<String> {
        self.options.validate(file_name, &bytes)?;

        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("upload_preset", self.options.upload_preset.clone())
            .text("folder", self.options.folder.clone());

        let resp = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::Upload(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AppError::Upload(format!(
                "Upload rejected with status {}: {}",
                status.as_u16(),
                body
            )));
        }

        let uploaded: UploadResponse = resp
            .json()
            .await
            .map_err(|e| AppError::Upload(format!("Unexpected upload response: {}", e)))?;
        Ok(uploaded.secure_url)
    }
}

/// Upload and hand the hosted URL to `on_upload`.
///
/// Failures are logged and `on_upload` is not called. Returns whether the
/// field was updated.
pub async fn upload_into(
    uploader: &dyn Uploader,
    file_name: &str,
    bytes: Vec<u8>,
    on_upload: impl FnOnce(String),
) -> bool {
    match uploader.upload(file_name, bytes).await {
        Ok(url) => {
            on_upload(url);
            true
        }
        Err(e) => {
            tracing::error!("Upload of {} failed: {}", file_name, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_options_serialize_to_widget_shape() {
        let value = serde_json::to_value(UploadOptions::default()).unwrap();
        assert_eq!(value["cloudName"], "dojvyjghs");
        assert_eq!(value["uploadPreset"], "portfolio_unsigned");
        assert_eq!(value["folder"], "portfolio");
        assert_eq!(value["sources"], json!(["local", "url", "camera"]));
        assert_eq!(value["multiple"], false);
        assert_eq!(value["maxFileSize"], 5_000_000);
        assert_eq!(
            value["clientAllowedFormats"],
            json!(["jpg", "jpeg", "png", "gif", "webp"])
        );
        assert_eq!(value["maxImageWidth"], 2000);
        assert_eq!(value["maxImageHeight"], 2000);
    }

    #[test]
    fn test_partial_options_fill_defaults() {
        let options: UploadOptions =
            serde_json::from_value(json!({ "cloudName": "other" })).unwrap();
        assert_eq!(options.cloud_name, "other");
        assert_eq!(options.max_file_size, 5_000_000);
        assert_eq!(
            options.endpoint(),
            "https://api.cloudinary.com/v1_1/other/image/upload"
        );
    }

    #[test]
    fn test_hint() {
        assert_eq!(
            UploadOptions::default().hint(),
            "JPG, PNG, GIF, WEBP • Max 5MB • Max 2000x2000px"
        );
    }

    #[test]
    fn test_success_event_invokes_callback() {
        let result: WidgetResult = serde_json::from_value(json!({
            "event": "success",
            "info": { "secure_url": "https://res.cloudinary.com/x/image.png" }
        }))
        .unwrap();

        let mut field = String::new();
        assert!(handle_widget_event(None, Some(&result), |url| field = url));
        assert_eq!(field, "https://res.cloudinary.com/x/image.png");
    }

    #[test]
    fn test_error_leaves_field_unchanged() {
        let mut field = "old".to_string();
        let error = json!({ "status": "File size exceeds limit" });
        assert!(!handle_widget_event(Some(&error), None, |url| field = url));
        assert_eq!(field, "old");
    }

    #[test]
    fn test_progress_events_are_ignored() {
        let result = WidgetResult {
            event: "queues-start".to_string(),
            info: None,
        };
        let mut called = false;
        assert!(!handle_widget_event(Some(&Value::Null), Some(&result), |_| called = true));
        assert!(!called);
    }
}
