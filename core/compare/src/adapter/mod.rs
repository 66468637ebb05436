//! アダプター（ポートの具体実装）
//!
//! - HttpCatalog: 既存の JSON-over-HTTP カタログエンドポイント
//! - MemorySelectionStore: プロセス内の選択ストア（既定の配線とテスト用）
//! - NoopCompareBar: 比較バーの無いページ向けの何もしない実装

pub mod http_catalog;
pub mod memory_selection_store;
pub mod noop_compare_bar;

#[cfg(test)]
pub mod stubs;

pub use http_catalog::HttpCatalog;
pub use memory_selection_store::MemorySelectionStore;
pub use noop_compare_bar::NoopCompareBar;
