//! 商品比較エンジン
//!
//! 商品比較ページの中核: 2 つの比較スロットの状態遷移と、
//! 属性テーブルの整形・描画を担う。外部コラボレーター
//! （選択ストア・カタログ・比較バー）はすべてポート経由で注入する。

/// ドメイン型（商品レコード・スロット・フィールド整形）
pub mod domain;

/// Ports & Adapters のポート定義
pub mod ports;

/// アダプター（HTTP カタログ・メモリ選択ストアなど）
pub mod adapter;

/// ユースケース（比較セッション）
pub mod usecase;

/// ビュー（HTML 文字列への純粋描画）
pub mod view;

/// 配線: 標準アダプタでセッションを組み立てる
pub mod wiring;

#[cfg(test)]
mod tests;
