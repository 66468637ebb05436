//! 比較スロットのドメイン型
//!
//! スロットは「first」「second」の 2 つだけ。文字列タグではなく
//! 列挙型で持ち、消費側は必ず網羅的に match する。

use super::item_id::ItemId;
use super::record::ComparisonRecord;

/// 比較位置（2 値のみ）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    First,
    Second,
}

impl Slot {
    /// マークアップで使うタグ（class / data-slot 属性の値）
    pub fn tag(&self) -> &'static str {
        match self {
            Slot::First => "first",
            Slot::Second => "second",
        }
    }
}

/// 1 スロット分の状態
///
/// 不変条件: record が Some になるのは、そのスロットの現在の id への
/// 取得が成功したときだけ。id を消すときは同じ遷移で record も消す
/// （id の無いスロットに record が残ることはない）。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotState {
    pub id: Option<ItemId>,
    pub record: Option<ComparisonRecord>,
}

impl SlotState {
    /// id と record を同時に消す
    pub fn clear(&mut self) {
        self.id = None;
        self.record = None;
    }
}

/// 両スロットの状態。セッションだけが可変で保持する。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotPairState {
    pub first: SlotState,
    pub second: SlotState,
}

impl SlotPairState {
    pub fn slot(&self, slot: Slot) -> &SlotState {
        match slot {
            Slot::First => &self.first,
            Slot::Second => &self.second,
        }
    }

    pub fn slot_mut(&mut self, slot: Slot) -> &mut SlotState {
        match slot {
            Slot::First => &mut self.first,
            Slot::Second => &mut self.second,
        }
    }

    /// 両スロットともレコード取得済みか（テーブル描画の条件）
    pub fn both_loaded(&self) -> bool {
        self.first.record.is_some() && self.second.record.is_some()
    }
}
