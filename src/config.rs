//! アプリケーション設定
//!
//! 環境変数から一度だけ解決・検証される設定。個々のクライアントに
//! 散在していた存在チェックをここに集約する。

use thiserror::Error;

/// 設定エラー
///
/// ネットワークに触れる前に即座に失敗させるための致命的エラー。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// 必須キーの欠落。起動時検証で全キーをまとめて報告する
    #[error("Missing required configuration: {0}")]
    Missing(String),

    #[error("Admin password is not configured")]
    AdminPasswordMissing,
}

/// 管理者ゲートの認証ポリシー
///
/// パスワードは設定からのみ供給される。ハードコードされた
/// フォールバック値は持たず、未設定ならログイン自体を拒否する。
#[derive(Debug, Clone)]
pub struct AuthPolicy {
    password: Option<String>,
}

impl AuthPolicy {
    pub fn new(password: Option<String>) -> Self {
        Self { password }
    }

    /// 候補パスワードを照合する
    ///
    /// 比較は長さに依存しない一定時間比較で行う。
    pub fn verify(&self, candidate: &str) -> Result<bool, ConfigError> {
        let expected = self
            .password
            .as_deref()
            .ok_or(ConfigError::AdminPasswordMissing)?;
        Ok(constant_time_eq(expected.as_bytes(), candidate.as_bytes()))
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// ギャラリーアプリケーション全体の設定
#[derive(Debug, Clone)]
pub struct GalleryConfig {
    /// Imgur の Client-ID
    pub imgur_client_id: String,
    /// Imgur アップロードエンドポイント
    pub imgur_upload_url: String,
    /// Gemini API キー
    pub gemini_api_key: String,
    /// Gemini のモデル名（ビジョン対応モデル）
    pub gemini_model: String,
    /// Gemini API のベースURL
    pub gemini_base_url: String,
    /// Xano のアートワークエンドポイント
    pub xano_endpoint: String,
    /// 問い合わせフォームの中継先。未設定なら問い合わせ機能は無効
    pub contact_form_endpoint: Option<String>,
    /// 管理者ページのパスワード
    pub admin_password: Option<String>,
}

impl GalleryConfig {
    pub const DEFAULT_IMGUR_UPLOAD_URL: &'static str = "https://api.imgur.com/3/image";
    pub const DEFAULT_GEMINI_BASE_URL: &'static str =
        "https://generativelanguage.googleapis.com/v1beta";
    pub const DEFAULT_GEMINI_MODEL: &'static str = "gemini-2.5-flash-preview-04-17";

    /// プロセス環境変数から設定を解決する
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// 任意の変数ソースから設定を解決する
    ///
    /// 必須キーが欠けている場合は全件をまとめて1つのエラーで報告する。
    pub fn from_vars<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get_nonempty = |key: &str| get(key).filter(|v| !v.trim().is_empty());

        let mut missing = Vec::new();
        let mut require = |key: &'static str| match get_nonempty(key) {
            Some(value) => value,
            None => {
                missing.push(key);
                String::new()
            }
        };

        let imgur_client_id = require("IMGUR_CLIENT_ID");
        let gemini_api_key = require("GEMINI_API_KEY");
        let xano_endpoint = require("XANO_API_ENDPOINT");

        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing.join(", ")));
        }

        Ok(Self {
            imgur_client_id,
            imgur_upload_url: get_nonempty("IMGUR_UPLOAD_URL")
                .unwrap_or_else(|| Self::DEFAULT_IMGUR_UPLOAD_URL.to_string()),
            gemini_api_key,
            gemini_model: get_nonempty("GEMINI_MODEL")
                .unwrap_or_else(|| Self::DEFAULT_GEMINI_MODEL.to_string()),
            gemini_base_url: get_nonempty("GEMINI_API_BASE_URL")
                .unwrap_or_else(|| Self::DEFAULT_GEMINI_BASE_URL.to_string()),
            xano_endpoint,
            contact_form_endpoint: get_nonempty("CONTACT_FORM_ENDPOINT"),
            admin_password: get_nonempty("UPLOAD_PASSWORD"),
        })
    }

    pub fn auth_policy(&self) -> AuthPolicy {
        AuthPolicy::new(self.admin_password.clone())
    }
}
