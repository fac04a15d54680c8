use rust_embed::Embed;

/// WebUIの静的アセットを埋め込む
#[derive(Embed)]
#[folder = "web/"]
#[include = "*"]
#[include = "**/*"]
pub struct WebAssets;
