//! Ports & Adapters のポート定義
//!
//! - outbound: アプリが外界（FS・ログ）を使うための trait

pub mod outbound;
