//! Imgur 画像ホスティングクライアント
//!
//! 画像を1回の multipart POST で転送し、公開URLを返す。リトライしない。

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{error, info};

use crate::domain::artwork::entities::ImageFile;
use crate::domain::artwork::errors::UploadError;
use crate::domain::artwork::ports::ImageHost;

/// Imgur の `{ success, data: { link } }` レスポンス
#[derive(Debug, Deserialize)]
struct ImgurResponse {
    #[serde(default)]
    success: bool,
    data: Option<ImgurData>,
}

#[derive(Debug, Deserialize)]
struct ImgurData {
    link: Option<String>,
    error: Option<String>,
}

pub struct ImgurImageHost {
    client: reqwest::Client,
    upload_url: String,
    client_id: String,
}

impl ImgurImageHost {
    pub fn new(upload_url: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            upload_url: upload_url.into(),
            client_id: client_id.into(),
        }
    }
}

#[async_trait]
impl ImageHost for ImgurImageHost {
    async fn upload(&self, image: &ImageFile) -> Result<String, UploadError> {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.filename.clone())
            .mime_str(&image.mime_type)
            .map_err(|e| UploadError::Network(e.to_string()))?;
        let form = Form::new().part("image", part);

        info!(
            filename = %image.filename,
            size = image.bytes.len(),
            "Uploading image to Imgur"
        );

        let response = self
            .client
            .post(&self.upload_url)
            .header("Authorization", format!("Client-ID {}", self.client_id))
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                error!("Imgur request failed: {}", e);
                UploadError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            // エラーボディが Imgur のJSON形式なら data.error を取り出す
            let detail = match response.json::<ImgurResponse>().await {
                Ok(body) => body
                    .data
                    .and_then(|d| d.error)
                    .unwrap_or_else(|| status.to_string()),
                Err(_) => status.to_string(),
            };
            error!("Imgur API error: {}", detail);
            return Err(UploadError::Provider(detail));
        }

        let body: ImgurResponse = response
            .json()
            .await
            .map_err(|e| UploadError::Network(e.to_string()))?;

        match body.data.and_then(|d| d.link) {
            Some(link) if body.success => {
                info!(url = %link, "Image hosted");
                Ok(link)
            }
            _ => {
                error!("Imgur upload failed: Invalid response structure");
                Err(UploadError::MissingLink)
            }
        }
    }
}
