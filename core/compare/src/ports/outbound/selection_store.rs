//! 選択ストア Outbound ポート
//!
//! サイト横断で「比較に選択中の商品」を追跡する外部コンポーネント。
//! セッションはマウント時に識別子を読み、削除時に忘却を通知する。

use crate::domain::ItemId;

/// 比較対象の選択を保持する外部ストア
pub trait SelectionStore: Send + Sync {
    /// 選択中の識別子を (first, second) の順序付きペアで返す
    fn get_item(&self) -> (Option<ItemId>, Option<ItemId>);

    /// 指定の識別子を選択から外す（fire-and-forget）
    fn delete_item(&self, id: &ItemId);
}
