use anyhow::{Context, Result, anyhow};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// Image-upload collaborator: takes file bytes, returns a durable URL.
///
/// `Http` posts a multipart form to a remote endpoint and reads `secure_url`
/// from the JSON response. `Disk` is the fallback when no endpoint is
/// configured: it writes under a local directory and returns an
/// `/uploads/...` path.
pub enum ImageUploader {
    Http {
        client: reqwest::Client,
        endpoint: String,
    },
    Disk {
        dir: PathBuf,
    },
}

impl ImageUploader {
    pub fn from_config(config: &crate::config::Config) -> Self {
        match &config.image_upload_url {
            Some(endpoint) => Self::Http {
                client: reqwest::Client::new(),
                endpoint: endpoint.clone(),
            },
            None => Self::Disk {
                dir: PathBuf::from(&config.upload_dir),
            },
        }
    }

    pub fn disk(dir: impl Into<PathBuf>) -> Self {
        Self::Disk { dir: dir.into() }
    }

    pub async fn upload(&self, bytes: Vec<u8>, filename: &str) -> Result<String> {
        match self {
            Self::Http { client, endpoint } => {
                let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_owned());
                let form = reqwest::multipart::Form::new().part("file", part);
                let response = client
                    .post(endpoint)
                    .multipart(form)
                    .send()
                    .await
                    .context("upload request failed")?
                    .error_for_status()
                    .context("upload rejected")?;
                let body: Value = response.json().await.context("upload response not JSON")?;
                body.get("secure_url")
                    .or_else(|| body.get("url"))
                    .and_then(Value::as_str)
                    .map(str::to_owned)
                    .ok_or_else(|| anyhow!("upload response missing secure_url"))
            }
            Self::Disk { dir } => {
                let ext = Path::new(filename)
                    .extension()
                    .and_then(|e| e.to_str())
                    .unwrap_or("bin");
                let name = format!("{}.{ext}", Uuid::new_v4());
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("cannot create upload dir {}", dir.display()))?;
                std::fs::write(dir.join(&name), bytes)
                    .with_context(|| format!("cannot write upload {name}"))?;
                debug!(name, "stored image locally");
                Ok(format!("/uploads/{name}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn disk_upload_returns_a_serveable_path() {
        let dir = tempfile::tempdir().unwrap();
        let uploader = ImageUploader::disk(dir.path());
        let url = uploader
            .upload(vec![0xFF, 0xD8], "photo.jpg")
            .await
            .unwrap();
        assert!(url.starts_with("/uploads/"));
        assert!(url.ends_with(".jpg"));
        let written = dir.path().join(url.trim_start_matches("/uploads/"));
        assert_eq!(std::fs::read(written).unwrap(), vec![0xFF, 0xD8]);
    }

    #[actix_web::test]
    async fn disk_upload_defaults_the_extension() {
        let dir = tempfile::tempdir().unwrap();
        let uploader = ImageUploader::disk(dir.path());
        let url = uploader.upload(vec![1, 2, 3], "noext").await.unwrap();
        assert!(url.ends_with(".bin"));
    }
}
