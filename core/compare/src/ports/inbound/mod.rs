//! Inbound ポート: 埋め込み側ページがセッションを操作するインターフェース
//!
//! ページはマウント時に `mount`、削除操作のイベントで `remove_slot`、
//! 状態が変わるたびに `render` を呼ぶ。子ビューから上がる削除の意図は
//! スロットタグ（data-slot 属性）経由でこの `remove_slot` に届く。

use crate::domain::Slot;

/// 比較ページのマウント境界
pub trait CompareApp {
    /// 選択ストアから識別子を読み、存在する分のレコードを取得する
    fn mount(&mut self);

    /// 指定スロットを削除する（コラボレーターへ通知し、状態を消す）
    fn remove_slot(&mut self, slot: Slot);

    /// 現在の状態からコンテナ要素のマークアップを描画する
    fn render(&self) -> String;
}
