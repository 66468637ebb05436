//! プロセス内の選択ストア実装
//!
//! 埋め込み側が初期選択を直接渡す場合の既定実装。テストの選択ストアも兼ねる。

use crate::domain::ItemId;
use crate::ports::outbound::SelectionStore;
use std::sync::Mutex;

/// メモリ上に (first, second) を保持する SelectionStore 実装
pub struct MemorySelectionStore {
    items: Mutex<(Option<ItemId>, Option<ItemId>)>,
}

impl MemorySelectionStore {
    pub fn new(first: Option<ItemId>, second: Option<ItemId>) -> Self {
        Self {
            items: Mutex::new((first, second)),
        }
    }

    pub fn empty() -> Self {
        Self::new(None, None)
    }
}

impl SelectionStore for MemorySelectionStore {
    fn get_item(&self) -> (Option<ItemId>, Option<ItemId>) {
        self.items.lock().unwrap().clone()
    }

    fn delete_item(&self, id: &ItemId) {
        let mut items = self.items.lock().unwrap();
        if items.0.as_ref() == Some(id) {
            items.0 = None;
        }
        if items.1.as_ref() == Some(id) {
            items.1 = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_clears_only_matching_position() {
        let store =
            MemorySelectionStore::new(Some(ItemId::new("A1")), Some(ItemId::new("B2")));
        store.delete_item(&ItemId::new("A1"));
        assert_eq!(store.get_item(), (None, Some(ItemId::new("B2"))));

        // 選択に無い識別子の削除は何もしない
        store.delete_item(&ItemId::new("C3"));
        assert_eq!(store.get_item(), (None, Some(ItemId::new("B2"))));
    }
}
