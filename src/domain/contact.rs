//! 問い合わせ集約
//!
//! 問い合わせフォームのメッセージと検証ルール、フォーム中継のポートを定義

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// フロントエンドのフォーム検証と同じ緩いメール形式チェック
///
/// アンカーなしの部分一致。`user@host.tld` の形がどこかに含まれていればよい。
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// 問い合わせフォームの検証エラー
///
/// フィールドごとに固有のメッセージを持ち、UIにそのまま表示される。
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("Name is required.")]
    NameRequired,
    #[error("Email is required.")]
    EmailRequired,
    #[error("Email is invalid.")]
    EmailInvalid,
    #[error("Message is required.")]
    MessageRequired,
}

impl ValidationError {
    /// エラーが属するフォームフィールド名
    pub fn field(&self) -> &'static str {
        match self {
            Self::NameRequired => "name",
            Self::EmailRequired | Self::EmailInvalid => "email",
            Self::MessageRequired => "message",
        }
    }
}

/// フォーム中継先への送信失敗
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Contact form relay is not configured")]
    NotConfigured,

    #[error("Form submission failed: Status: {status}")]
    Status { status: u16 },

    #[error("Form submission failed: {0}")]
    Network(String),
}

/// 問い合わせメッセージ
///
/// `bot_field` はスパム対策のハニーポット。人間の送信では常に空になる。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default)]
    pub bot_field: String,
}

impl ContactMessage {
    /// 全フィールドを検証し、問題を一括で返す
    ///
    /// 送信をブロックするため、1件でもエラーがあれば中継は行われない。
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ValidationError::NameRequired);
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(ValidationError::EmailRequired);
        } else if !EMAIL_PATTERN.is_match(email) {
            errors.push(ValidationError::EmailInvalid);
        }

        if self.message.trim().is_empty() {
            errors.push(ValidationError::MessageRequired);
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// ハニーポットが埋まっているか
    pub fn is_spam(&self) -> bool {
        !self.bot_field.trim().is_empty()
    }
}

/// 静的サイト向けフォーム処理エンドポイントへの中継
#[async_trait]
pub trait FormRelay: Send + Sync {
    async fn submit(&self, message: &ContactMessage) -> Result<(), RelayError>;
}
