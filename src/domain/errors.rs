//! ドメイン全体のエラー集約
//!
//! ユースケース層とWeb層が扱う統合エラー型

use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::artwork::errors::{BackendError, GenerationError, UploadError};
use crate::domain::contact::{RelayError, ValidationError};

/// アプリケーション全体のエラー
///
/// いずれの失敗も自動リトライされず、ステータス文字列として
/// ユーザーに提示される。
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("{}", format_validation_errors(.0))]
    Validation(Vec<ValidationError>),

    #[error(transparent)]
    Relay(#[from] RelayError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<Vec<ValidationError>> for GalleryError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Validation(errors)
    }
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_joined_in_message() {
        let err = GalleryError::from(vec![
            ValidationError::NameRequired,
            ValidationError::EmailInvalid,
        ]);
        assert_eq!(err.to_string(), "Name is required. Email is invalid.");
    }

    #[test]
    fn test_upload_error_passes_through() {
        let err = GalleryError::from(UploadError::Provider("rate limited".to_string()));
        assert_eq!(err.to_string(), "Imgur upload failed: rate limited");
    }
}
