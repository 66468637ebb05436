//! カタログ参照 Outbound ポート
//!
//! 識別子からレコードを 1 件取得する。失敗は分類して返し、
//! 呼び出し側（セッション）がログに残して握りつぶす。

use crate::domain::{ComparisonRecord, ItemId};

/// カタログ取得エラーの分類
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// ネットワーク・HTTP の失敗
    #[error("transport error: {0}")]
    Transport(String),
    /// 該当する商品が無い
    #[error("item not found: {0}")]
    NotFound(String),
    /// レスポンスがレコードの形をしていない（NotFound と同じ扱い）
    #[error("malformed record: {0}")]
    Malformed(String),
}

impl CatalogError {
    /// ログの fields に入れる分類名
    pub fn category(&self) -> &'static str {
        match self {
            CatalogError::Transport(_) => "transport",
            CatalogError::NotFound(_) => "not_found",
            CatalogError::Malformed(_) => "malformed",
        }
    }
}

/// カタログから商品レコードを引く能力
pub trait CatalogLookup: Send + Sync {
    fn fetch_item(&self, id: &ItemId) -> Result<ComparisonRecord, CatalogError>;
}
