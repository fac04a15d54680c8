//! 問い合わせ送信ユースケース
//!
//! 検証を通過したメッセージだけを中継先へ1回だけ送信する。

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::contact::{ContactMessage, FormRelay, RelayError};
use crate::domain::errors::GalleryError;

pub struct SendContactMessageUseCase {
    relay: Option<Arc<dyn FormRelay>>,
}

impl SendContactMessageUseCase {
    pub fn new(relay: Option<Arc<dyn FormRelay>>) -> Self {
        Self { relay }
    }

    pub async fn execute(&self, message: ContactMessage) -> Result<(), GalleryError> {
        // ハニーポットに引っかかった送信は黙って受理したふりをする
        if message.is_spam() {
            warn!("Contact submission dropped by honeypot");
            return Ok(());
        }

        message.validate()?;

        let relay = self.relay.as_ref().ok_or(RelayError::NotConfigured)?;
        relay.submit(&message).await?;
        info!("Contact message sent");
        Ok(())
    }
}
