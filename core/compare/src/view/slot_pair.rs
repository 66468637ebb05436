//! スロット対の描画（ComparisonSlotPair / ComparisonSlot）
//!
//! 各スロットは (識別子の有無, 画像 URL の有無) の純関数。
//! 空スロットは追加の導線だけ、占有スロットは詳細ページへの
//! リンク画像と削除の導線を描く。削除の意図はスロットタグを
//! data-slot 属性に載せて上（セッション）へ届く。

use super::html::escape;
use crate::domain::{Slot, SlotPairState, SlotState};

/// 2 スロットを並べて描画する
pub fn render_slot_pair(state: &SlotPairState, out: &mut String) {
    out.push_str("<div class=\"compare-img clearfix\">");
    render_slot(Slot::First, state.slot(Slot::First), out);
    render_slot(Slot::Second, state.slot(Slot::Second), out);
    out.push_str("</div>");
}

fn render_slot(slot: Slot, state: &SlotState, out: &mut String) {
    out.push_str("<div class=\"");
    out.push_str(slot.tag());
    out.push_str("\">");
    match &state.id {
        Some(id) => {
            out.push_str("<a href=\"/item?id=");
            out.push_str(&escape(id));
            out.push_str("\">");
            // レコード未着の間は画像無しのリンクだけ
            if let Some(src) = state.record.as_ref().and_then(|r| r.image_url.as_deref()) {
                out.push_str("<img src=\"");
                out.push_str(&escape(src));
                out.push_str("\" alt=\"\">");
            }
            out.push_str("</a>");
            out.push_str("<span class=\"delete-compare-btn\" data-slot=\"");
            out.push_str(slot.tag());
            out.push_str("\">删除</span>");
        }
        None => {
            out.push_str(
                "<span class=\"add-compare\"><a href=\"#ad\" class=\"add-compare-btn\">+</a></span>",
            );
        }
    }
    out.push_str("</div>");
}
