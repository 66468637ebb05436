//! ビュー: 状態スナップショットから HTML 文字列への純粋描画
//!
//! 状態は持たず、取得もしない。スロット対は常に描画し、
//! 属性テーブルは両スロットのレコードが揃ったときだけ描画する
//! （揃わない間はプレースホルダーではなく丸ごと無し）。

pub mod html;
pub mod slot_pair;
pub mod table;

use crate::domain::SlotPairState;

/// コンテナ要素のマークアップを組み立てる
pub fn render(state: &SlotPairState) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"compare\"><div class=\"wrapper-cmp\"><h3>产品对比</h3>");
    slot_pair::render_slot_pair(state, &mut out);
    if let (Some(first), Some(second)) = (state.first.record.as_ref(), state.second.record.as_ref())
    {
        table::render_table(first, second, &mut out);
    }
    out.push_str("</div></div>");
    out
}
