//! 比較対象の商品レコード
//!
//! カタログの JSON レスポンスを取得境界で検証して得る不変のスナップショット。
//! フィールド単位の更新は無く、再取得時に丸ごと置き換える。

use super::field::FieldValue;
use super::item_id::ItemId;
use serde::{Deserialize, Serialize};

/// 比較に使う商品レコード（14 属性 + 識別子 + 画像 URL）
///
/// 属性はすべて「無い / スカラー / 列」のいずれか。JSON のキーは
/// カタログエンドポイントのフィールド名をそのまま使う。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRecord {
    pub id: ItemId,
    #[serde(default)]
    pub image_url: Option<String>,

    /// 商品名称
    #[serde(default)]
    pub item: Option<FieldValue>,
    /// 商品尺寸
    #[serde(default)]
    pub size: Option<FieldValue>,
    /// 适用面积
    #[serde(default)]
    pub area: Option<FieldValue>,
    /// 指导价格
    #[serde(default)]
    pub price: Option<FieldValue>,
    /// 场景分类
    #[serde(default)]
    pub second_scene: Option<FieldValue>,
    /// 商品种类
    #[serde(default)]
    pub category: Option<FieldValue>,
    /// 商品材料
    #[serde(default)]
    pub second_material: Option<FieldValue>,
    /// 烘干工艺
    #[serde(default)]
    pub stove: Option<FieldValue>,
    /// 外表面打磨砂纸
    #[serde(default)]
    pub outside_sand: Option<FieldValue>,
    /// 内表面打磨砂纸
    #[serde(default)]
    pub inside_sand: Option<FieldValue>,
    /// 雕刻工艺
    #[serde(default)]
    pub carve: Option<FieldValue>,
    /// 涂饰工艺
    #[serde(default)]
    pub paint: Option<FieldValue>,
    /// 装饰工艺
    #[serde(default)]
    pub decoration: Option<FieldValue>,
    /// 榫卯结构
    #[serde(default)]
    pub tenon: Option<FieldValue>,
}
