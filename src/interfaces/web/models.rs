//! Web API のリクエスト/レスポンスモデル

use serde::{Deserialize, Serialize};

use crate::domain::artwork::entities::Artwork;

/// フロントエンドに渡すアートワーク表現（camelCase）
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkView {
    pub id: String,
    pub title: String,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub upload_date: String,
}

impl From<Artwork> for ArtworkView {
    fn from(artwork: Artwork) -> Self {
        Self {
            id: artwork.id,
            title: artwork.title,
            image_url: artwork.image_url,
            artist: artwork.artist,
            description: artwork.description,
            upload_date: artwork.upload_date.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UploadStatusResponse {
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct AdminSessionRequest {
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SystemInfo {
    pub version: String,
    pub os: String,
    pub arch: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_artwork_view_is_camel_case() {
        let artwork = Artwork {
            id: "9".to_string(),
            title: "Harbor".to_string(),
            image_url: "https://i.imgur.com/h.png".to_string(),
            artist: None,
            description: Some("A quiet harbor.".to_string()),
            upload_date: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        };

        let json = serde_json::to_value(ArtworkView::from(artwork)).unwrap();
        assert_eq!(json["imageUrl"], "https://i.imgur.com/h.png");
        assert_eq!(json["uploadDate"], "2024-06-01T12:00:00+00:00");
        assert!(json.get("artist").is_none());
    }
}
