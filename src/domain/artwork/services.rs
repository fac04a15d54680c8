//! アートワーク集約のドメインサービス
//!
//! タイトル抽出とギャラリーの表示順序を定義

use uuid::Uuid;

use super::entities::Artwork;

/// 生成された解説文から `**Title**` 形式のタイトルを抽出する
///
/// Gemini はギャラリー向けプロンプトに対して冒頭に太字のタイトルを
/// 付けて返すことがある。最初の太字区間をタイトルとして採用し、
/// マーカーが無い場合は `None` を返して呼び出し側のタイトルを活かす。
pub fn extract_bold_title(description: &str) -> Option<String> {
    let start = description.find("**")?;
    let rest = &description[start + 2..];
    let end = rest.find("**")?;
    let title = rest[..end].trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

/// マーカーがあればそのタイトル、なければ既定タイトルを返す
pub fn resolve_title(description: Option<&str>, fallback: &str) -> String {
    description
        .and_then(extract_bold_title)
        .unwrap_or_else(|| fallback.to_string())
}

/// ギャラリー表示順（新着順）にソートする
pub fn sort_newest_first(artworks: &mut [Artwork]) {
    artworks.sort_by(|a, b| b.upload_date.cmp(&a.upload_date));
}

/// ストアがIDを返さなかったレコード用のフォールバックID
///
/// 同一バッチ内で衝突しないことをベストエフォートで保証する。
pub fn fallback_id() -> String {
    Uuid::new_v4().to_string()
}
