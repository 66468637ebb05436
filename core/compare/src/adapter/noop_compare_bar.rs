//! 比較バーの無いページ向けの CompareBar 実装

use crate::domain::ItemId;
use crate::ports::outbound::CompareBar;

/// 何も通知しない CompareBar 実装
#[derive(Debug, Clone, Default)]
pub struct NoopCompareBar;

impl CompareBar for NoopCompareBar {
    fn remove_chip(&self, _id: &ItemId) {}
}
