//! 静的サイト向けフォーム処理エンドポイントへの中継クライアント
//!
//! 検証済みの問い合わせを URL エンコードで転送する。

use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::contact::{ContactMessage, FormRelay, RelayError};

pub const FORM_NAME: &str = "contact";

pub struct NetlifyFormRelay {
    client: reqwest::Client,
    endpoint: String,
}

impl NetlifyFormRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl FormRelay for NetlifyFormRelay {
    async fn submit(&self, message: &ContactMessage) -> Result<(), RelayError> {
        // フォーム処理側が期待する固定フィールド名。bot-field はハニーポット
        let form = [
            ("form-name", FORM_NAME),
            ("name", message.name.as_str()),
            ("email", message.email.as_str()),
            ("message", message.message.as_str()),
            ("bot-field", message.bot_field.as_str()),
        ];

        let response = self
            .client
            .post(&self.endpoint)
            .form(&form)
            .send()
            .await
            .map_err(|e| {
                error!("Contact form relay failed: {}", e);
                RelayError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(status = status.as_u16(), "Form endpoint rejected submission");
            return Err(RelayError::Status {
                status: status.as_u16(),
            });
        }

        info!("Contact message relayed");
        Ok(())
    }
}
