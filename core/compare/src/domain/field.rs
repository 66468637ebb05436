//! 属性値の整形（FieldJoiner）
//!
//! カタログの属性値はスカラーか順序付きの列。列は表示時に読点で結合し、
//! スカラーはそのまま通す。列であることは長さ 1 でも保持する
//! （デシリアライズ・整形のどこでもスカラーへ畳まない）。

use serde::{Deserialize, Serialize};

/// 複数値を結合する区切り文字（全角読点）
pub const CONNECTOR: char = '、';

/// 属性のスカラー値（文字列または数値）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(f64),
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Number(n) => write!(f, "{}", n),
        }
    }
}

/// 属性値: スカラーまたは順序付きの列
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Many(Vec<Scalar>),
    One(Scalar),
}

impl FieldValue {
    pub fn text(s: impl Into<String>) -> Self {
        FieldValue::One(Scalar::Text(s.into()))
    }

    pub fn number(n: f64) -> Self {
        FieldValue::One(Scalar::Number(n))
    }

    pub fn sequence<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldValue::Many(items.into_iter().map(|s| Scalar::Text(s.into())).collect())
    }

    /// 列かどうか（長さ 1 の列も列のまま）
    pub fn is_sequence(&self) -> bool {
        matches!(self, FieldValue::Many(_))
    }

    /// 表示用文字列。列は要素間にのみ読点を置き、末尾には付けない。
    pub fn display(&self) -> String {
        match self {
            FieldValue::One(s) => s.to_string(),
            FieldValue::Many(items) => {
                let mut out = String::new();
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(CONNECTOR);
                    }
                    out.push_str(&item.to_string());
                }
                out
            }
        }
    }
}

/// 属性値を表示用文字列にする。値が無い場合は空文字列
/// （"null" や "undefined" の類を描画しない）。
pub fn join(value: Option<&FieldValue>) -> String {
    match value {
        Some(v) => v.display(),
        None => String::new(),
    }
}
