//! 外部サービスのHTTPクライアント
//!
//! ドメイン層のポートトレイトを Imgur / Gemini / Xano /
//! フォーム中継エンドポイントに対して実装する。

pub mod gemini_describer;
pub mod imgur_image_host;
pub mod netlify_form_relay;
pub mod xano_artwork_store;

pub use gemini_describer::GeminiDescriber;
pub use imgur_image_host::ImgurImageHost;
pub use netlify_form_relay::NetlifyFormRelay;
pub use xano_artwork_store::XanoArtworkStore;
