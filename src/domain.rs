//! ドメイン層
//!
//! ビジネスロジックとドメインモデルを含む層

pub mod artwork;
pub mod contact;
pub mod errors;
