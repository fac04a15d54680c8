//! # Brush Of Grace
//!
//! アップロードされた絵画作品にAIで解説文を付け、外部ストアへ保存して
//! ギャラリーとして公開するセルフホスト型のWebアプリケーション
//!
//! このクレートは Domain-Driven Design (DDD) 原則に基づいて設計されており、
//! 以下の層に分かれています：
//!
//! - **Domain Layer**: アートワークと問い合わせのドメインモデル
//! - **Application Layer**: アップロード編成などのユースケース
//! - **Infrastructure Layer**: Imgur / Gemini / Xano / フォーム中継のHTTPクライアント
//! - **Interface Layer**: Web API と埋め込みフロントエンド

pub mod domain;
pub mod debug;
pub mod config;
pub mod application;
pub mod infrastructure;
pub mod interfaces;

// 公開API
pub use domain::*;
