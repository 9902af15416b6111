//! メトリクスストア
//!
//! 専用の [`Registry`] に4つのメトリクスファミリ（Linuxでは `process_*` も）を登録し、ポーリングループからの
//! 更新とスクレイプからの読み取りを同時に受け付ける。各メトリクスは内部で同期されて
//! いるため、サイクル全体を通してスクレイプ側をブロックすることはない。

use crate::metrics::labels::{MetricLabels, CHECK_LABEL_NAMES, STATE_LABEL_NAMES};
use prometheus::{Gauge, GaugeVec, Opts, Registry, TextEncoder};
use tracing::debug;

/// `pingdom_up`
pub const PINGDOM_UP: &str = "pingdom_up";
/// `pingdom_check_status`
pub const PINGDOM_CHECK_STATUS: &str = "pingdom_check_status";
/// `pingdom_check_response_time`
pub const PINGDOM_CHECK_RESPONSE_TIME: &str = "pingdom_check_response_time";
/// `pingdom_check_state`
pub const PINGDOM_CHECK_STATE: &str = "pingdom_check_state";

/// メトリクス公開ストア
///
/// クローンは同じレジストリを共有する。
#[derive(Clone)]
pub struct MetricsPublisher {
    registry: Registry,
    up: Gauge,
    check_status: GaugeVec,
    check_response_time: GaugeVec,
    check_state: GaugeVec,
}

impl MetricsPublisher {
    /// 新しいレジストリにメトリクスファミリを登録して作成
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let up = Gauge::with_opts(Opts::new(
            PINGDOM_UP,
            "Whether the last pingdom scrape was successful (1: up, 0: down)",
        ))?;
        let check_status = GaugeVec::new(
            Opts::new(
                PINGDOM_CHECK_STATUS,
                "The current status of the check (0: up, 1: unconfirmed_down, 2: down, -1: paused, -2: unknown)",
            ),
            &CHECK_LABEL_NAMES,
        )?;
        let check_response_time = GaugeVec::new(
            Opts::new(
                PINGDOM_CHECK_RESPONSE_TIME,
                "The response time of last test in milliseconds",
            ),
            &CHECK_LABEL_NAMES,
        )?;
        let check_state = GaugeVec::new(
            Opts::new(
                PINGDOM_CHECK_STATE,
                "The current state of the check (1: up, 0: down)",
            ),
            &STATE_LABEL_NAMES,
        )?;

        registry.register(Box::new(up.clone()))?;
        registry.register(Box::new(check_status.clone()))?;
        registry.register(Box::new(check_state.clone()))?;
        registry.register(Box::new(check_response_time.clone()))?;

        #[cfg(target_os = "linux")]
        registry.register(Box::new(
            prometheus::process_collector::ProcessCollector::for_self(),
        ))?;

        Ok(Self {
            registry,
            up,
            check_status,
            check_response_time,
            check_state,
        })
    }

    /// 直近のフェッチ結果を `pingdom_up` に反映
    pub fn set_liveness(&self, up: bool) {
        self.up.set(if up { 1.0 } else { 0.0 });
    }

    /// 現在の `pingdom_up` の値
    pub fn liveness(&self) -> f64 {
        self.up.get()
    }

    /// ステータスと応答時間のシリーズを作成または上書き
    pub fn upsert_check_metrics(&self, labels: &MetricLabels, status: f64, response_time: f64) {
        let values = labels.values();
        self.check_status.with_label_values(&values).set(status);
        self.check_response_time
            .with_label_values(&values)
            .set(response_time);
    }

    /// ホスト名単位のstateシリーズを作成または上書き
    ///
    /// 同じホスト名を持つチェックは同じシリーズを上書きし合う。
    pub fn upsert_state(&self, hostname: &str, state: f64) {
        self.check_state.with_label_values(&[hostname]).set(state);
    }

    /// ステータスと応答時間のシリーズを削除（存在しなければ何もしない）
    pub fn withdraw(&self, labels: &MetricLabels) {
        let values = labels.values();
        let status_removed = self.check_status.remove_label_values(&values).is_ok();
        let response_removed = self
            .check_response_time
            .remove_label_values(&values)
            .is_ok();

        debug!(
            id = %labels.id,
            name = %labels.name,
            status_removed,
            response_removed,
            "Withdrew check series"
        );
    }

    /// テキスト形式でエクスポート
    pub fn render(&self) -> prometheus::Result<String> {
        TextEncoder::new().encode_to_string(&self.registry.gather())
    }
}
