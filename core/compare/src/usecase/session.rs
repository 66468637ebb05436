//! 比較セッション
//!
//! 両スロットの状態を唯一所有し、マウント時の取得・削除・描画を束ねる。
//! 子ビューは不変スナップショットを受け取るだけで、状態には触れない。

use crate::domain::{ComparisonRecord, ItemId, Slot, SlotPairState};
use crate::ports::inbound::CompareApp;
use crate::ports::outbound::{CatalogError, CatalogLookup, CompareBar, SelectionStore};
use crate::view;
use common::ports::outbound::{now_iso8601, Log, LogLevel, LogRecord};
use std::collections::BTreeMap;
use std::sync::{mpsc, Arc};
use std::thread;

/// セッションが使う外部コラボレーター一式
///
/// マウント時に注入する。グローバル参照はしない。
pub struct CompareDeps {
    pub selection: Arc<dyn SelectionStore>,
    pub catalog: Arc<dyn CatalogLookup>,
    pub bar: Arc<dyn CompareBar>,
    pub log: Arc<dyn Log>,
}

/// 比較セッション（ページにつき 1 つ）
pub struct ComparisonSession {
    deps: CompareDeps,
    state: SlotPairState,
}

impl ComparisonSession {
    pub fn new(deps: CompareDeps) -> Self {
        Self {
            deps,
            state: SlotPairState::default(),
        }
    }

    /// 現在の状態スナップショット
    pub fn state(&self) -> &SlotPairState {
        &self.state
    }

    /// 選択ストアから識別子を読み、存在する分のレコードを並行に取得する。
    ///
    /// 2 件の取得は互いに独立で、完了順も保証しない。各完了は自分の
    /// スロットにだけ書く。失敗はログに残してそのスロットを未取得のままにする。
    pub fn mount(&mut self) {
        let (first, second) = self.deps.selection.get_item();
        self.state.slot_mut(Slot::First).id = first;
        self.state.slot_mut(Slot::Second).id = second;

        let pending: Vec<(Slot, ItemId)> = [Slot::First, Slot::Second]
            .into_iter()
            .filter_map(|slot| self.state.slot(slot).id.clone().map(|id| (slot, id)))
            .collect();
        if pending.is_empty() {
            return;
        }

        let (tx, rx) = mpsc::channel();
        thread::scope(|scope| {
            for (slot, id) in &pending {
                let tx = tx.clone();
                let catalog = Arc::clone(&self.deps.catalog);
                scope.spawn(move || {
                    let result = catalog.fetch_item(id);
                    let _ = tx.send((*slot, id.clone(), result));
                });
            }
            drop(tx);
            // 到着順に反映する
            for (slot, id, result) in rx {
                self.complete_fetch(slot, id, result);
            }
        });
    }

    /// 1 件の取得完了を状態へ反映する。
    ///
    /// 成功時は、スロットの現在の識別子が取得対象と一致する場合にのみ
    /// レコードを載せる（取得中に削除されていたら黙って捨てる）。
    /// 失敗時は診断ログのみ。リトライもユーザー向け表示もしない。
    pub fn complete_fetch(
        &mut self,
        slot: Slot,
        id: ItemId,
        result: Result<ComparisonRecord, CatalogError>,
    ) {
        match result {
            Ok(record) => {
                let slot_state = self.state.slot_mut(slot);
                if slot_state.id.as_ref() == Some(&id) {
                    slot_state.record = Some(record);
                }
            }
            Err(err) => {
                let _ = self.deps.log.log(&LogRecord {
                    ts: now_iso8601(),
                    level: LogLevel::Warn,
                    message: format!("fetch failed: {}", err),
                    kind: Some("fetch".to_string()),
                    fields: {
                        let mut m = BTreeMap::new();
                        m.insert("item_id".to_string(), serde_json::json!(id.as_ref()));
                        m.insert("slot".to_string(), serde_json::json!(slot.tag()));
                        m.insert("category".to_string(), serde_json::json!(err.category()));
                        Some(m)
                    },
                });
            }
        }
    }

    /// スロットを削除する。
    ///
    /// 選択ストアと比較バーへそれぞれ 1 回だけ通知し、識別子とレコードを
    /// 同時に消す（描画から見て中間状態は無い）。識別子の無いスロットは何もしない。
    /// レコード未取得のまま削除されるのも正常系（通知して識別子だけ消える）。
    pub fn remove_slot(&mut self, slot: Slot) {
        let id = match self.state.slot(slot).id.clone() {
            Some(id) => id,
            None => return,
        };
        self.deps.selection.delete_item(&id);
        self.deps.bar.remove_chip(&id);
        self.state.slot_mut(slot).clear();
    }

    /// 状態スナップショットからコンテナのマークアップを描画する
    pub fn render(&self) -> String {
        view::render(&self.state)
    }
}

impl CompareApp for ComparisonSession {
    fn mount(&mut self) {
        ComparisonSession::mount(self)
    }

    fn remove_slot(&mut self, slot: Slot) {
        ComparisonSession::remove_slot(self, slot)
    }

    fn render(&self) -> String {
        ComparisonSession::render(self)
    }
}
