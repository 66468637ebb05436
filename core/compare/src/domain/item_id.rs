//! 商品識別子のドメイン型

use serde::de::{Deserializer, Error as DeError};
use serde::{Deserialize, Serialize, Serializer};

/// 商品識別子
///
/// カタログのレスポンスでは数値 ID の場合もあるため、
/// デシリアライズ時に文字列へ正規化する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl std::ops::Deref for ItemId {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ItemId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let v = serde_json::Value::deserialize(deserializer)?;
        match v {
            serde_json::Value::String(s) => Ok(ItemId(s)),
            serde_json::Value::Number(n) => Ok(ItemId(n.to_string())),
            other => Err(DeError::custom(format!(
                "item id must be a string or number, got {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_from_string_or_number() {
        let id: ItemId = serde_json::from_str("\"A1\"").unwrap();
        assert_eq!(&*id, "A1");

        let id: ItemId = serde_json::from_str("42").unwrap();
        assert_eq!(&*id, "42");

        assert!(serde_json::from_str::<ItemId>("[1]").is_err());
    }
}
