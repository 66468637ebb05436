//! Ports & Adapters のポート定義
//!
//! - inbound: 埋め込み側ページがセッションを操作するインターフェース
//! - outbound: セッションが外部コラボレーター（選択ストア・カタログ・比較バー・ログ）を使うための trait

pub mod inbound;
pub mod outbound;
