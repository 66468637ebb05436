//! 比較エンジン共通ライブラリ
//!
//! `compare` クレートで使う横断的な機能（エラー型・構造化ログ・ファイル I/O ポート）を提供します。

/// エラーハンドリング
pub mod error;

/// Ports & Adapters のポート定義
pub mod ports;

/// 標準アダプター実装
pub mod adapter;
