//! サイクル間のラベルセット突き合わせ
//!
//! 前回サイクルで公開したラベルセットのうち、今回のサイクルで消えたもの・
//! 変化したものを撤回対象として返す。

use crate::metrics::labels::MetricLabels;
use std::collections::{BTreeSet, HashMap};

/// チェックID → 直近の成功サイクルで導出したラベルセット
pub type CycleState = HashMap<i64, MetricLabels>;

/// 撤回すべきラベルセットを計算する
///
/// `previous` のみを走査する。今回新しく現れたIDは古くなり得ないため比較しない。
/// 返すのは常に *前回* のラベルセット。
pub fn reconcile(previous: &CycleState, current: &CycleState) -> BTreeSet<MetricLabels> {
    previous
        .iter()
        .filter(|(id, old_labels)| current.get(*id) != Some(*old_labels))
        .map(|(_, old_labels)| old_labels.clone())
        .collect()
}
