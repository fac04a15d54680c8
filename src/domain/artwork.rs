//! アートワーク集約
//!
//! ギャラリーに展示する作品レコードの管理に関するモジュール

pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
