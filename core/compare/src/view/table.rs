//! 属性テーブルの描画（ComparisonTable / AttributeRow）
//!
//! 行の並びは元のテーブルと同じ固定順（見た目の互換契約）。
//! 各行は 2 つの値を独立に整形して (first, ラベル, second) で描く。
//! 行間の計算は無く、順序は常に安定。

use super::html::escape;
use crate::domain::field::join;
use crate::domain::{ComparisonRecord, FieldValue};

/// テーブルの行数（固定スキーマ）
pub const ROW_COUNT: usize = 14;

/// 固定スキーマ: (ラベル, first の値, second の値) を表の順で返す
fn rows<'a>(
    first: &'a ComparisonRecord,
    second: &'a ComparisonRecord,
) -> [(&'static str, Option<&'a FieldValue>, Option<&'a FieldValue>); ROW_COUNT] {
    [
        ("商品名称", first.item.as_ref(), second.item.as_ref()),
        ("商品尺寸", first.size.as_ref(), second.size.as_ref()),
        ("适用面积", first.area.as_ref(), second.area.as_ref()),
        ("指导价格", first.price.as_ref(), second.price.as_ref()),
        (
            "场景分类",
            first.second_scene.as_ref(),
            second.second_scene.as_ref(),
        ),
        ("商品种类", first.category.as_ref(), second.category.as_ref()),
        (
            "商品材料",
            first.second_material.as_ref(),
            second.second_material.as_ref(),
        ),
        ("烘干工艺", first.stove.as_ref(), second.stove.as_ref()),
        (
            "外表面打磨砂纸",
            first.outside_sand.as_ref(),
            second.outside_sand.as_ref(),
        ),
        (
            "内表面打磨砂纸",
            first.inside_sand.as_ref(),
            second.inside_sand.as_ref(),
        ),
        ("雕刻工艺", first.carve.as_ref(), second.carve.as_ref()),
        ("涂饰工艺", first.paint.as_ref(), second.paint.as_ref()),
        (
            "装饰工艺",
            first.decoration.as_ref(),
            second.decoration.as_ref(),
        ),
        ("榫卯结构", first.tenon.as_ref(), second.tenon.as_ref()),
    ]
}

/// 両レコードから固定 14 行のテーブルを描画する
pub fn render_table(first: &ComparisonRecord, second: &ComparisonRecord, out: &mut String) {
    out.push_str("<table class=\"compare-params\"><tbody>");
    for (label, a, b) in rows(first, second) {
        render_row(a, label, b, out);
    }
    out.push_str("</tbody></table>");
}

fn render_row(
    first: Option<&FieldValue>,
    label: &str,
    second: Option<&FieldValue>,
    out: &mut String,
) {
    out.push_str("<tr class=\"param\"><td class=\"first\">");
    out.push_str(&escape(&join(first)));
    out.push_str("</td><td class=\"param-name\">");
    out.push_str(label);
    out.push_str("</td><td class=\"second\">");
    out.push_str(&escape(&join(second)));
    out.push_str("</td></tr>");
}
