//! Outbound ポート: セッションが外部コラボレーターを使うための trait

pub mod catalog;
pub mod compare_bar;
pub mod selection_store;

pub use catalog::{CatalogError, CatalogLookup};
pub use compare_bar::CompareBar;
pub use selection_store::SelectionStore;
