//! 比較バー Outbound ポート
//!
//! ページとは独立にサイト下部へ出る「選択中の商品」ストリップ。
//! スロット削除時にチップの除去を通知する。

use crate::domain::ItemId;

/// 比較バー UI への通知
pub trait CompareBar: Send + Sync {
    /// 指定の識別子のチップを外す（fire-and-forget）
    fn remove_chip(&self, id: &ItemId);
}
