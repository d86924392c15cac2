//! Supabase Storage client for image uploads.
//!
//! Uploads go through the Storage REST API with the service-role key;
//! the returned public URL is what gets written into catalog rows.

use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use thiserror::Error;
use uuid::Uuid;

use crate::config::StorageConfig;

/// Upload folders, one per entity kind.
pub const UPLOAD_KINDS: [&str; 4] = ["products", "wines", "banners", "events"];

/// Errors that can occur when talking to the storage API.
#[derive(Debug, Error)]
pub enum StorageError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Storage API returned an error response.
    #[error("storage API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The service key is not a valid header value.
    #[error("invalid service key")]
    InvalidKey,

    /// Unknown upload kind.
    #[error("unknown upload kind: {0}")]
    UnknownKind(String),
}

/// Client for the Supabase Storage REST API.
#[derive(Clone)]
pub struct StorageClient {
    client: reqwest::Client,
    base_url: String,
    bucket: String,
}

impl StorageClient {
    /// Create a new storage client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build or the key is not
    /// header-safe.
    pub fn new(config: &StorageConfig) -> Result<Self, StorageError> {
        let mut headers = HeaderMap::new();

        let auth_value = format!("Bearer {}", config.service_key.expose_secret());
        let mut auth_header =
            HeaderValue::from_str(&auth_value).map_err(|_| StorageError::InvalidKey)?;
        auth_header.set_sensitive(true);
        headers.insert("Authorization", auth_header);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.url.clone(),
            bucket: config.bucket.clone(),
        })
    }

    /// Upload an object and return its public URL.
    ///
    /// Existing objects at the same path are overwritten (`x-upsert`),
    /// which can only happen on a UUID collision.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Api` for non-2xx responses.
    pub async fn upload(
        &self,
        object_path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError> {
        let url = format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url, self.bucket, object_path
        );

        let response = self
            .client
            .post(&url)
            .header("Content-Type", content_type)
            .header("x-upsert", "true")
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StorageError::Api {
                status: status.as_u16(),
                message,
            });
        }

        tracing::info!(path = %object_path, "Uploaded object to storage");
        Ok(self.public_url(object_path))
    }

    /// Delete an object. 404s are treated as success (already gone).
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Api` for other non-2xx responses.
    pub async fn delete(&self, object_path: &str) -> Result<(), StorageError> {
        let url = format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url, self.bucket, object_path
        );

        let response = self.client.delete(&url).send().await?;
        let status = response.status();
        if !status.is_success() && status.as_u16() != 404 {
            let message = response.text().await.unwrap_or_default();
            return Err(StorageError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }

    /// The public URL for an object path.
    #[must_use]
    pub fn public_url(&self, object_path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, object_path
        )
    }

    /// Recover the object path from a public URL in our bucket.
    ///
    /// Returns `None` for URLs hosted elsewhere, which callers treat as
    /// "nothing to clean up".
    #[must_use]
    pub fn object_path_from_url(&self, url: &str) -> Option<String> {
        let prefix = self.public_url("");
        let path = url.strip_prefix(&prefix)?;
        if path.is_empty() {
            return None;
        }
        Some(path.to_string())
    }
}

/// Build the object path for an upload: `{kind}/{uuid}-{sanitized-name}`.
///
/// # Errors
///
/// Returns `StorageError::UnknownKind` when `kind` is not one of
/// [`UPLOAD_KINDS`].
pub fn object_path(kind: &str, file_name: &str) -> Result<String, StorageError> {
    if !UPLOAD_KINDS.contains(&kind) {
        return Err(StorageError::UnknownKind(kind.to_string()));
    }

    Ok(format!(
        "{kind}/{}-{}",
        Uuid::new_v4(),
        sanitize_file_name(file_name)
    ))
}

/// Reduce a client-supplied file name to a URL-safe form.
///
/// Keeps ASCII alphanumerics, `.`, `-`, and `_`; everything else becomes
/// `-`. An empty result falls back to `upload`.
fn sanitize_file_name(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '-'
            }
        })
        .collect();

    let trimmed = sanitized.trim_matches('-');
    if trimmed.is_empty() {
        "upload".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    fn config() -> StorageConfig {
        StorageConfig {
            url: "https://project.supabase.co".to_string(),
            service_key: SecretString::from("key"),
            bucket: "media".to_string(),
        }
    }

    #[test]
    fn test_public_url() {
        let client = StorageClient::new(&config()).unwrap();
        assert_eq!(
            client.public_url("products/abc.jpg"),
            "https://project.supabase.co/storage/v1/object/public/media/products/abc.jpg"
        );
    }

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("Tiramisù finale.JPG"), "tiramis--finale.jpg");
        assert_eq!(sanitize_file_name("  menu (1).png "), "menu--1-.png");
        assert_eq!(sanitize_file_name("///"), "upload");
    }

    #[test]
    fn test_object_path_from_url() {
        let client = StorageClient::new(&config()).unwrap();
        assert_eq!(
            client.object_path_from_url(
                "https://project.supabase.co/storage/v1/object/public/media/banners/x.png"
            ),
            Some("banners/x.png".to_string())
        );
        assert_eq!(
            client.object_path_from_url("https://cdn.example.com/banners/x.png"),
            None
        );
    }

    #[test]
    fn test_object_path_validates_kind() {
        assert!(object_path("products", "a.jpg").is_ok());
        assert!(matches!(
            object_path("invoices", "a.pdf"),
            Err(StorageError::UnknownKind(_))
        ));
    }

    #[test]
    fn test_object_path_shape() {
        let path = object_path("banners", "Summer Deal.png").unwrap();
        assert!(path.starts_with("banners/"));
        assert!(path.ends_with("-summer-deal.png"));
    }
}
