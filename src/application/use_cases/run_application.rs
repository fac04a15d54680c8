//! アプリケーション起動ユースケース

use crate::config::GalleryConfig;
use crate::interfaces::web::server::create_server;

pub struct RunApplicationUseCase {
    config: GalleryConfig,
}

impl RunApplicationUseCase {
    pub fn new(config: GalleryConfig) -> Self {
        Self { config }
    }

    pub async fn execute(&self, host: String, port: u16) -> anyhow::Result<()> {
        // Delegate to the web server module
        create_server(host, port, self.config.clone()).await
    }
}
