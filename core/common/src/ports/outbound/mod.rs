//! Outbound ポート: アプリが外界（FS・ログ）を使うための trait

pub mod fs;
pub mod log;

pub use fs::FileSystem;
pub use log::{now_iso8601, Log, LogLevel, LogRecord};
