//! チェック → ゲージ値・ラベル変換
//!
//! 純粋関数のみ。未知のステータスも既定値にマップするため失敗しない。

use crate::common::types::{Check, CheckStatus};
use crate::metrics::labels::MetricLabels;

/// 1チェックから導出したメトリクス値
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedMetrics {
    /// `pingdom_check_status` の値
    pub status: f64,
    /// `pingdom_check_state` の値（ホスト名単位）
    pub state: f64,
    /// `pingdom_check_response_time` の値（ミリ秒）
    pub response_time: f64,
    /// シリーズのラベルセット
    pub labels: MetricLabels,
}

/// チェックからメトリクス値とラベルセットを導出する
pub fn derive(check: &Check) -> DerivedMetrics {
    let status = check.check_status();

    // 上流のpausedフラグは正しく報告されないことがあるため、statusで補正する
    let paused = check.paused || status == CheckStatus::Paused;

    let tags = check
        .tags
        .iter()
        .map(|tag| tag.name.as_str())
        .collect::<Vec<_>>()
        .join(",");

    DerivedMetrics {
        status: status.status_value(),
        state: status.state_value(),
        response_time: check.last_response_time as f64,
        labels: MetricLabels {
            id: check.id.to_string(),
            name: check.name.clone(),
            hostname: check.hostname.clone(),
            resolution: check.resolution.to_string(),
            paused: paused.to_string(),
            tags,
        },
    }
}
