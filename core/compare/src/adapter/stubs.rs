//! テスト用: 記録・台本つきのコラボレーター実装

use crate::domain::{ComparisonRecord, ItemId};
use crate::ports::outbound::{CatalogError, CatalogLookup, CompareBar, SelectionStore};
use std::collections::HashMap;
use std::sync::Mutex;

/// テスト用: id ごとに台本どおりの結果を返す CatalogLookup
pub struct StubCatalog {
    results: HashMap<String, Result<ComparisonRecord, CatalogError>>,
}

impl StubCatalog {
    pub fn new() -> Self {
        Self {
            results: HashMap::new(),
        }
    }

    pub fn with_record(mut self, rec: ComparisonRecord) -> Self {
        self.results.insert(rec.id.to_string(), Ok(rec));
        self
    }

    pub fn with_error(mut self, id: &str, err: CatalogError) -> Self {
        self.results.insert(id.to_string(), Err(err));
        self
    }
}

impl CatalogLookup for StubCatalog {
    fn fetch_item(&self, id: &ItemId) -> Result<ComparisonRecord, CatalogError> {
        match self.results.get(&id.to_string()) {
            Some(result) => result.clone(),
            None => Err(CatalogError::NotFound(id.to_string())),
        }
    }
}

/// テスト用: delete_item の呼び出しを記録する SelectionStore
pub struct RecordingSelectionStore {
    initial: (Option<ItemId>, Option<ItemId>),
    pub deleted: Mutex<Vec<ItemId>>,
}

impl RecordingSelectionStore {
    pub fn new(first: Option<ItemId>, second: Option<ItemId>) -> Self {
        Self {
            initial: (first, second),
            deleted: Mutex::new(Vec::new()),
        }
    }
}

impl SelectionStore for RecordingSelectionStore {
    fn get_item(&self) -> (Option<ItemId>, Option<ItemId>) {
        self.initial.clone()
    }

    fn delete_item(&self, id: &ItemId) {
        self.deleted.lock().unwrap().push(id.clone());
    }
}

/// テスト用: remove_chip の呼び出しを記録する CompareBar
#[derive(Default)]
pub struct RecordingCompareBar {
    pub removed: Mutex<Vec<ItemId>>,
}

impl RecordingCompareBar {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CompareBar for RecordingCompareBar {
    fn remove_chip(&self, id: &ItemId) {
        self.removed.lock().unwrap().push(id.clone());
    }
}
