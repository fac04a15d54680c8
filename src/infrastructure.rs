//! インフラストラクチャ層
//!
//! 外部SaaSとの統合を担う層

pub mod clients;
