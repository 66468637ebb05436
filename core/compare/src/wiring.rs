//! 配線: 標準アダプタで比較セッションを組み立てる

use crate::adapter::{HttpCatalog, MemorySelectionStore, NoopCompareBar};
use crate::domain::ItemId;
use crate::ports::outbound::{CatalogLookup, CompareBar, SelectionStore};
use crate::usecase::{CompareDeps, ComparisonSession};
use common::adapter::{FileJsonLog, NoopLog, StdFileSystem};
use common::ports::outbound::{FileSystem, Log};
use std::path::PathBuf;
use std::sync::Arc;

/// 標準配線の設定
///
/// グローバル参照はせず、ここで渡したものだけを使う。
pub struct CompareConfig {
    /// カタログエンドポイントのベース URL
    pub catalog_base_url: String,
    /// 初期選択（メモリ選択ストアに入れる）
    pub initial_selection: (Option<ItemId>, Option<ItemId>),
    /// 診断ログの出力先（None でログ無効）
    pub log_path: Option<PathBuf>,
}

/// 標準アダプタで ComparisonSession を組み立てる
pub fn wire_compare(config: CompareConfig) -> ComparisonSession {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let log: Arc<dyn Log> = match config.log_path {
        Some(path) => Arc::new(FileJsonLog::new(fs, path)),
        None => Arc::new(NoopLog),
    };
    let (first, second) = config.initial_selection;
    let selection: Arc<dyn SelectionStore> = Arc::new(MemorySelectionStore::new(first, second));
    let catalog: Arc<dyn CatalogLookup> = Arc::new(HttpCatalog::new(config.catalog_base_url));
    let bar: Arc<dyn CompareBar> = Arc::new(NoopCompareBar);
    ComparisonSession::new(CompareDeps {
        selection,
        catalog,
        bar,
        log,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_compare_with_empty_selection() {
        // 選択が空ならカタログは呼ばれず、追加の導線が 2 つ出る
        let mut session = wire_compare(CompareConfig {
            catalog_base_url: "http://localhost:8080".to_string(),
            initial_selection: (None, None),
            log_path: None,
        });
        session.mount();
        let html = session.render();
        assert_eq!(html.matches("add-compare-btn").count(), 2);
        assert!(!html.contains("<table"));
    }
}
