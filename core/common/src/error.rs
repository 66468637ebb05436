//! エラーハンドリング
//!
//! 横断的なエラー型。ドメイン固有のエラー（カタログ取得など）は各クレートの
//! ポート定義側で持ち、ここには I/O・JSON の失敗だけを集約する。

/// 共通エラー型
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(String),
    #[error("JSON error: {0}")]
    Json(String),
}

impl Error {
    /// I/O エラーをメッセージから生成する
    pub fn io_msg(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    /// JSON エラーをメッセージから生成する
    pub fn json_msg(msg: impl Into<String>) -> Self {
        Error::Json(msg.into())
    }
}
