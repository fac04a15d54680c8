//! インターフェース層
//!
//! ユーザーインターフェース（Web API と埋め込みフロントエンド）を含む層

pub mod web;
