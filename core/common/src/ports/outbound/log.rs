//! 構造化ログ Outbound ポート
//!
//! usecase / adapter から JSONL ログをファイルへ書き出すための trait。
//! 画面表示とは別チャネルで、診断用にファイルにのみ残す。

use crate::error::Error;
use serde::Serialize;
use std::collections::BTreeMap;

/// 現在時刻を ISO8601 (RFC3339) で返す。LogRecord の `ts` に使う。
pub fn now_iso8601() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// ログレベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

/// 1 行分のログレコード（JSONL の 1 行に対応）
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    /// ISO8601 形式のタイムスタンプ
    pub ts: String,
    pub level: LogLevel,
    pub message: String,
    /// 例: fetch, remove, wiring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// 追加のキー・値（オブジェクトとして出力）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, serde_json::Value>>,
}

impl LogRecord {
    /// kind と fields 無しの最小レコード
    pub fn message(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            ts: now_iso8601(),
            level,
            message: message.into(),
            kind: None,
            fields: None,
        }
    }
}

/// 構造化ログを出力する Outbound ポート
///
/// 実装は `common::adapter::FileJsonLog`（ファイルへ JSONL 追記）や NoopLog（テスト用）など。
pub trait Log: Send + Sync {
    /// 1 レコードをログに書き出す（ファイルへ JSONL 1 行として追記）
    fn log(&self, record: &LogRecord) -> Result<(), Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_record_serialize() {
        let rec = LogRecord {
            ts: "2026-08-25T09:00:00Z".to_string(),
            level: LogLevel::Warn,
            message: "fetch failed".to_string(),
            kind: Some("fetch".to_string()),
            fields: {
                let mut m = BTreeMap::new();
                m.insert("item_id".to_string(), serde_json::json!("A1"));
                Some(m)
            },
        };
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains("\"ts\":\"2026-08-25T09:00:00Z\""));
        assert!(json.contains("\"level\":\"warn\""));
        assert!(json.contains("\"message\":\"fetch failed\""));
        assert!(json.contains("\"kind\":\"fetch\""));
        assert!(json.contains("\"item_id\":\"A1\""));
    }

    #[test]
    fn test_log_record_skips_absent_fields() {
        let rec = LogRecord::message(LogLevel::Info, "mounted");
        let json = serde_json::to_string(&rec).unwrap();
        assert!(!json.contains("\"kind\""));
        assert!(!json.contains("\"fields\""));
    }
}
