//! アートワーク集約のポートトレイト
//!
//! 外部サービスとの境界を定義するトレイト。実装は infrastructure 層にあり、
//! ユースケースはここで定義された抽象にのみ依存する。

use async_trait::async_trait;

use super::entities::{Artwork, ArtworkDraft, ImageFile};
use super::errors::{BackendError, GenerationError, UploadError};

/// 画像ホスティングサービス
///
/// バイナリ画像を1回のリクエストで転送し、公開URLを返す。リトライしない。
#[async_trait]
pub trait ImageHost: Send + Sync {
    async fn upload(&self, image: &ImageFile) -> Result<String, UploadError>;
}

/// 画像から解説文を生成するサービス
///
/// 空のテキストは成功ではなくエラーとして扱う。
#[async_trait]
pub trait DescriptionGenerator: Send + Sync {
    async fn describe(&self, image: &ImageFile, title: &str) -> Result<String, GenerationError>;
}

/// アートワークレコードの外部ストア
#[async_trait]
pub trait ArtworkStore: Send + Sync {
    /// レコードを作成し、ストアが採番したIDを含む完全なレコードを返す
    async fn create(&self, draft: &ArtworkDraft) -> Result<Artwork, BackendError>;

    /// 全レコードを取得する。個々の不正レコードはフォールバック値で補う
    async fn list(&self) -> Result<Vec<Artwork>, BackendError>;

    /// 数値IDによる完全削除
    async fn delete(&self, id: i64) -> Result<(), BackendError>;
}
