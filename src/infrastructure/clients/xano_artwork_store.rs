//! Xano アートワークストアクライアント
//!
//! 内部のフィールド名とストア側の命名（リビジョンにより camelCase と
//! snake_case が混在する）の間を変換する。レスポンス側の変換は
//! 別名を優先順位つきで解決する単一のマッピング関数に集約してある。

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, warn};

use crate::domain::artwork::entities::{Artwork, ArtworkDraft};
use crate::domain::artwork::errors::BackendError;
use crate::domain::artwork::ports::ArtworkStore;
use crate::domain::artwork::services::{fallback_id, resolve_title};

/// ストアが期待する作成ペイロード（snake_case）
#[derive(Debug, Serialize)]
struct XanoArtworkPayload<'a> {
    title: &'a str,
    image_url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    artist: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_description: Option<&'a str>,
    upload_date: String,
}

impl<'a> XanoArtworkPayload<'a> {
    fn from_draft(draft: &'a ArtworkDraft) -> Self {
        Self {
            title: &draft.title,
            image_url: &draft.image_url,
            artist: draft.artist.as_deref(),
            image_description: draft.description.as_deref(),
            upload_date: draft.upload_date.to_rfc3339(),
        }
    }
}

/// レコード内の別名を優先順位どおりに解決する
///
/// 別名は `image.url` のようにドット区切りでネストを表せる。
/// 最初に見つかった非null値が採用される。
fn resolve_alias<'a>(record: &'a Value, aliases: &[&str]) -> Option<&'a Value> {
    for alias in aliases {
        let mut current = record;
        let mut found = true;
        for segment in alias.split('.') {
            match current.get(segment) {
                Some(next) => current = next,
                None => {
                    found = false;
                    break;
                }
            }
        }
        if found && !current.is_null() {
            return Some(current);
        }
    }
    None
}

fn alias_string(record: &Value, aliases: &[&str]) -> Option<String> {
    match resolve_alias(record, aliases)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// 日付フィールドを解釈する。RFC 3339 文字列とエポックミリ秒の両方を受ける
fn parse_upload_date(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Value::Number(n) => n
            .as_i64()
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single()),
        _ => None,
    }
}

/// ストアの任意形状レコードを内部の `Artwork` に正規化する
///
/// 別名の優先順位:
/// - id: `id`（数値または文字列）、無ければ生成したフォールバックID
/// - image URL: `imageUrl` → `image_url` → `image.url`、無ければ空文字列
/// - description: `description` → `image_description`
/// - upload date: `uploadDate` → `upload_date` → `created_at`、無ければ現在時刻
///
/// タイトルは解説文中の `**Title**` マーカーが優先され、マーカーが
/// 無ければストアのタイトル、それも無ければ `default_title` になる。
pub fn map_record(record: &Value, default_title: &str) -> Artwork {
    let id = alias_string(record, &["id"]).unwrap_or_else(|| {
        warn!("Store record has no id, generating a fallback");
        fallback_id()
    });

    let image_url =
        alias_string(record, &["imageUrl", "image_url", "image.url"]).unwrap_or_default();
    if image_url.is_empty() {
        warn!(%id, "Store record has no resolvable image URL");
    }

    let description = alias_string(record, &["description", "image_description"]);
    let stored_title = alias_string(record, &["title"]);
    let title = resolve_title(
        description.as_deref(),
        stored_title.as_deref().unwrap_or(default_title),
    );

    let upload_date = resolve_alias(record, &["uploadDate", "upload_date", "created_at"])
        .and_then(parse_upload_date)
        .unwrap_or_else(Utc::now);

    Artwork {
        id,
        title,
        image_url,
        artist: alias_string(record, &["artist"]),
        description,
        upload_date,
    }
}

pub struct XanoArtworkStore {
    client: reqwest::Client,
    endpoint: String,
}

impl XanoArtworkStore {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    fn record_url(&self, id: i64) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), id)
    }
}

/// 非成功レスポンスを説明的なエラーに変換する
///
/// ボディがJSONなら `message` フィールドを、そうでなければ生テキストを使う。
async fn backend_error(response: reqwest::Response) -> BackendError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or(body);
    error!(status, %message, "Xano API error");
    BackendError::Status { status, message }
}

#[async_trait]
impl ArtworkStore for XanoArtworkStore {
    async fn create(&self, draft: &ArtworkDraft) -> Result<Artwork, BackendError> {
        let payload = XanoArtworkPayload::from_draft(draft);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!("Error saving artwork to Xano: {}", e);
                BackendError::Network(e.to_string())
            })?;

        if !response.status().is_success() {
            return Err(backend_error(response).await);
        }

        let record: Value = response
            .json()
            .await
            .map_err(|e| BackendError::InvalidBody(e.to_string()))?;

        Ok(map_record(&record, &draft.title))
    }

    async fn list(&self) -> Result<Vec<Artwork>, BackendError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| {
                error!("Error fetching artworks from Xano: {}", e);
                BackendError::Network(e.to_string())
            })?;

        if !response.status().is_success() {
            return Err(backend_error(response).await);
        }

        let records: Value = response
            .json()
            .await
            .map_err(|e| BackendError::InvalidBody(e.to_string()))?;

        let items = records
            .as_array()
            .ok_or_else(|| BackendError::InvalidBody("expected a JSON array".to_string()))?;

        Ok(items
            .iter()
            .map(|record| map_record(record, "Untitled Artwork"))
            .collect())
    }

    async fn delete(&self, id: i64) -> Result<(), BackendError> {
        let response = self
            .client
            .delete(self.record_url(id))
            .send()
            .await
            .map_err(|e| {
                error!("Error deleting artwork from Xano: {}", e);
                BackendError::Network(e.to_string())
            })?;

        if !response.status().is_success() {
            return Err(backend_error(response).await);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_uses_store_field_names() {
        let draft = ArtworkDraft::new(
            "Harbor".to_string(),
            "https://i.imgur.com/h.png".to_string(),
        )
        .with_artist("Brush Of Grace Admin".to_string())
        .with_description("**Harbor** at dusk.".to_string());

        let payload = serde_json::to_value(XanoArtworkPayload::from_draft(&draft)).unwrap();
        assert_eq!(payload["title"], "Harbor");
        assert_eq!(payload["image_url"], "https://i.imgur.com/h.png");
        assert_eq!(payload["image_description"], "**Harbor** at dusk.");
        assert!(payload.get("upload_date").is_some());
        assert!(payload.get("imageUrl").is_none());
    }

    #[test]
    fn test_map_record_camel_case_shape() {
        let record = json!({
            "id": 7,
            "title": "Harbor",
            "imageUrl": "https://i.imgur.com/h.png",
            "uploadDate": "2024-06-01T12:00:00Z"
        });
        let artwork = map_record(&record, "fallback");
        assert_eq!(artwork.id, "7");
        assert_eq!(artwork.title, "Harbor");
        assert_eq!(artwork.image_url, "https://i.imgur.com/h.png");
        assert_eq!(artwork.upload_date.to_rfc3339(), "2024-06-01T12:00:00+00:00");
    }

    #[test]
    fn test_map_record_snake_case_shape() {
        let record = json!({
            "id": "abc",
            "title": "Harbor",
            "image_url": "https://i.imgur.com/s.png",
            "image_description": "A quiet harbor.",
            "upload_date": "2024-06-01T12:00:00+00:00"
        });
        let artwork = map_record(&record, "fallback");
        assert_eq!(artwork.id, "abc");
        assert_eq!(artwork.image_url, "https://i.imgur.com/s.png");
        assert_eq!(artwork.description.as_deref(), Some("A quiet harbor."));
    }

    #[test]
    fn test_map_record_nested_image_shape() {
        let record = json!({
            "id": 1,
            "image": { "url": "https://i.imgur.com/n.png" }
        });
        let artwork = map_record(&record, "fallback");
        assert_eq!(artwork.image_url, "https://i.imgur.com/n.png");
    }

    #[test]
    fn test_camel_case_url_wins_over_snake_case() {
        let record = json!({
            "id": 1,
            "imageUrl": "https://i.imgur.com/camel.png",
            "image_url": "https://i.imgur.com/snake.png"
        });
        let artwork = map_record(&record, "fallback");
        assert_eq!(artwork.image_url, "https://i.imgur.com/camel.png");
    }

    #[test]
    fn test_unresolvable_image_url_becomes_empty_string() {
        let record = json!({ "id": 1, "title": "No Image" });
        let artwork = map_record(&record, "fallback");
        assert_eq!(artwork.image_url, "");
    }

    #[test]
    fn test_missing_id_gets_distinct_fallbacks() {
        let record = json!({ "title": "Orphan" });
        let a = map_record(&record, "fallback");
        let b = map_record(&record, "fallback");
        assert!(!a.id.is_empty());
        assert!(!b.id.is_empty());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_missing_date_defaults_to_now() {
        let before = Utc::now();
        let artwork = map_record(&json!({ "id": 1 }), "fallback");
        let after = Utc::now();
        assert!(artwork.upload_date >= before && artwork.upload_date <= after);
    }

    #[test]
    fn test_epoch_millis_created_at() {
        let record = json!({ "id": 1, "created_at": 1717243200000i64 });
        let artwork = map_record(&record, "fallback");
        assert_eq!(artwork.upload_date.to_rfc3339(), "2024-06-01T12:00:00+00:00");
    }

    #[test]
    fn test_title_marker_overrides_stored_title() {
        let record = json!({
            "id": 1,
            "title": "IMG_0042",
            "image_description": "**Foo Bar**\n\nOil on canvas."
        });
        let artwork = map_record(&record, "fallback");
        assert_eq!(artwork.title, "Foo Bar");
    }

    #[test]
    fn test_title_falls_back_without_marker() {
        let record = json!({ "id": 1, "image_description": "Oil on canvas." });
        let artwork = map_record(&record, "My Upload");
        assert_eq!(artwork.title, "My Upload");
    }
}
