//! アートワーク集約のエラー
//!
//! 外部サービス呼び出しの失敗を表すエラー型を定義

use thiserror::Error;

/// 画像ホスティングサービスへのアップロード失敗
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Imgur upload failed: {0}")]
    Provider(String),

    #[error("Imgur upload failed: Could not retrieve image URL")]
    MissingLink,

    #[error("Image upload request failed: {0}")]
    Network(String),
}

/// AIによる解説文生成の失敗
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("AI description generation failed: {0}")]
    Provider(String),

    #[error("Failed to generate description: No text returned")]
    EmptyResponse,

    #[error("AI description request failed: {0}")]
    Network(String),
}

/// 外部ストア（バックエンド）操作の失敗
#[derive(Debug, Error)]
pub enum BackendError {
    /// 非成功ステータス。可能ならプロバイダのエラーメッセージを含む
    #[error("Backend request failed: Status: {status}, Message: {message}")]
    Status { status: u16, message: String },

    #[error("Backend returned an unreadable body: {0}")]
    InvalidBody(String),

    #[error("Backend request failed: {0}")]
    Network(String),
}

impl BackendError {
    /// エラーがリクエスト側の問題かチェック
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Status { status, .. } if (400..500).contains(status))
    }
}
