use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::errors::GalleryError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
    /// 検証エラー時のみ、フォームフィールド名からメッセージへの対応
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<&'static str, String>>,
}

impl ErrorResponse {
    pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            error: status_code
                .canonical_reason()
                .unwrap_or("Unknown Error")
                .to_string(),
            message: message.into(),
            status_code: status_code.as_u16(),
            fields: None,
        }
    }
}

impl From<&GalleryError> for ErrorResponse {
    fn from(err: &GalleryError) -> Self {
        let status = match err {
            GalleryError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            GalleryError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            // ストアが4xxを返すのはこちらのペイロード不備なのでサーバーエラー扱い
            GalleryError::Backend(e) if e.is_client_error() => StatusCode::INTERNAL_SERVER_ERROR,
            // 上流サービスの失敗はすべてゲートウェイエラーとして返す
            GalleryError::Upload(_)
            | GalleryError::Generation(_)
            | GalleryError::Backend(_)
            | GalleryError::Relay(_) => StatusCode::BAD_GATEWAY,
        };

        let mut response = Self::new(status, err.to_string());
        if let GalleryError::Validation(errors) = err {
            response.fields = Some(
                errors
                    .iter()
                    .map(|e| (e.field(), e.to_string()))
                    .collect(),
            );
        }
        response
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status_code, Json(self)).into_response()
    }
}
