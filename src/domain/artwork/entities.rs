//! アートワーク集約のエンティティ
//!
//! 展示作品のメタデータとアップロード素材を定義

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 永続化済みのアートワークレコード
///
/// `id` は外部ストアが採番する不透明な文字列。`upload_date` は
/// ギャラリーの新着順ソートに使われる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub artist: Option<String>,
    pub description: Option<String>,
    pub upload_date: DateTime<Utc>,
}

/// 保存前のアートワークレコード（ID未採番）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtworkDraft {
    pub title: String,
    pub image_url: String,
    pub artist: Option<String>,
    pub description: Option<String>,
    pub upload_date: DateTime<Utc>,
}

impl ArtworkDraft {
    pub fn new(title: String, image_url: String) -> Self {
        Self {
            title,
            image_url,
            artist: None,
            description: None,
            upload_date: Utc::now(),
        }
    }

    pub fn with_artist(mut self, artist: String) -> Self {
        self.artist = Some(artist);
        self
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_upload_date(mut self, upload_date: DateTime<Utc>) -> Self {
        self.upload_date = upload_date;
        self
    }
}

/// アップロードされた画像ファイル
///
/// Imgur への転送と Gemini への添付の両方で同じバイト列を使う。
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub filename: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(filename: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// 拡張子を除いたファイル名を作品タイトルの種にする
    ///
    /// 空になる場合は "Untitled Artwork" を返す。
    pub fn seed_title(&self) -> String {
        let stem = match self.filename.rsplit_once('.') {
            Some((stem, _ext)) => stem,
            None => self.filename.as_str(),
        };
        let stem = stem.trim();
        if stem.is_empty() {
            "Untitled Artwork".to_string()
        } else {
            stem.to_string()
        }
    }
}
