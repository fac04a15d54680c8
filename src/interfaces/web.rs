//! Web インターフェース
//!
//! ギャラリーと管理ページのためのHTTP APIを提供します。
//! アートワークの一覧・アップロード・削除、アップロード進捗の取得、
//! 問い合わせの中継、管理者ゲートなどの機能を含みます。

mod artwork_handlers;
mod embedded_assets;
mod error_response;
mod handlers;
mod models;
mod status_board;

pub mod server;

// 内部使用のため、必要な型のみを再エクスポート
pub(crate) use artwork_handlers::{
    GalleryState, delete_artwork, list_artworks, upload_artwork, upload_status,
};
pub(crate) use handlers::{admin_session, get_system_info, submit_contact};
