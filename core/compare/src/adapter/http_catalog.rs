//! HTTP カタログ実装
//!
//! `GET {base}/item/{id}?format=json` を叩いてレコードを取得する。
//! ステータスの対応: 404 -> NotFound、その他の非 2xx -> Transport、
//! 本文がレコードの形でない -> Malformed。

use crate::domain::{ComparisonRecord, ItemId};
use crate::ports::outbound::{CatalogError, CatalogLookup};

/// 既存カタログエンドポイントを叩く CatalogLookup 実装
pub struct HttpCatalog {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpCatalog {
    /// ベース URL（末尾スラッシュは除去）からクライアントを生成する
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::blocking::Client::new(),
        }
    }

    fn item_url(&self, id: &ItemId) -> String {
        format!("{}/item/{}?format=json", self.base_url, id)
    }
}

impl CatalogLookup for HttpCatalog {
    fn fetch_item(&self, id: &ItemId) -> Result<ComparisonRecord, CatalogError> {
        let url = self.item_url(id);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| CatalogError::Transport(format!("GET {}: {}", url, e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(id.to_string()));
        }
        let body = response
            .text()
            .map_err(|e| CatalogError::Transport(format!("read body: {}", e)))?;
        if !status.is_success() {
            return Err(CatalogError::Transport(format!("HTTP {}: {}", status, body)));
        }
        parse_record(&body)
    }
}

/// レスポンス本文をレコードとして検証する（トランスポートから分離して単体テスト可能に）
pub fn parse_record(body: &str) -> Result<ComparisonRecord, CatalogError> {
    serde_json::from_str(body).map_err(|e| CatalogError::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldValue;

    #[test]
    fn test_item_url_building() {
        let catalog = HttpCatalog::new("http://localhost:8080/");
        let url = catalog.item_url(&ItemId::new("A1"));
        assert_eq!(url, "http://localhost:8080/item/A1?format=json");
    }

    #[test]
    fn test_parse_record_valid_body() {
        let body = r#"{"id":"A1","image_url":"/i/a1.png","size":["40cm","Seat"]}"#;
        let rec = parse_record(body).unwrap();
        assert_eq!(&*rec.id, "A1");
        assert_eq!(rec.size, Some(FieldValue::sequence(["40cm", "Seat"])));
    }

    #[test]
    fn test_parse_record_malformed_body() {
        let err = parse_record("<!doctype html>").unwrap_err();
        assert_eq!(err.category(), "malformed");

        // id 欠落もレコードの形をしていない
        let err = parse_record(r#"{"item":"圈椅"}"#).unwrap_err();
        assert_eq!(err.category(), "malformed");
    }
}
