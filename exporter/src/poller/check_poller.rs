//! チェックポーラー
//!
//! 一定間隔でチェック一覧を取得し、メトリクスストアへ反映する。
//!
//! 1サイクルの流れ:
//!
//! 1. チェック一覧を取得（失敗時は `pingdom_up` を0にして終了、前回状態は保持）
//! 2. `pingdom_up` を1にし、各チェックの値を導出して書き込む
//! 3. 前回サイクルのラベルセットと突き合わせ、消えた・変化したシリーズを撤回
//! 4. 今回のラベルセットを前回状態として保持
//!
//! サイクルの成否にかかわらず同じ間隔だけ待機して次のサイクルへ進む。

use crate::common::error::FetchError;
use crate::common::types::Check;
use crate::metrics::{derive, reconcile, CycleState, MetricsPublisher};
use crate::pingdom::CheckFetcher;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

/// デフォルトのポーリング間隔（秒）
pub const DEFAULT_WAIT_SECS: u64 = 10;

/// 1サイクルの結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// 取得成功
    Success {
        /// 取得したチェック数
        checks: usize,
        /// 撤回したシリーズ（ラベルセット）数
        withdrawn: usize,
    },
    /// 取得失敗（メトリクスは更新しない）
    Failure,
}

/// チェックポーラー
///
/// 前回サイクルの状態を専有する。サイクルは常に逐次実行される。
pub struct CheckPoller<F> {
    /// チェック取得元
    fetcher: F,
    /// メトリクスストア
    publisher: MetricsPublisher,
    /// サイクル間の待機時間
    interval: Duration,
    /// 取得の期限（`None`なら無期限）
    fetch_timeout: Option<Duration>,
    /// 直近の成功サイクルで公開したラベルセット
    previous: CycleState,
}

impl<F> CheckPoller<F>
where
    F: CheckFetcher + 'static,
{
    /// 新しいポーラーを作成
    pub fn new(fetcher: F, publisher: MetricsPublisher, interval: Duration) -> Self {
        Self {
            fetcher,
            publisher,
            interval,
            fetch_timeout: None,
            previous: CycleState::new(),
        }
    }

    /// 取得の期限を設定
    pub fn with_fetch_timeout(mut self, fetch_timeout: Option<Duration>) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }

    /// 直近の成功サイクルの状態
    pub fn previous_state(&self) -> &CycleState {
        &self.previous
    }

    /// バックグラウンドでポーリングを開始
    pub fn start(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    /// ポーリングループ（プロセス終了まで戻らない）
    pub async fn run(mut self) {
        info!(
            interval_secs = self.interval.as_secs(),
            fetch_timeout_secs = self.fetch_timeout.map(|t| t.as_secs()),
            "Check poller started"
        );

        loop {
            self.run_cycle().await;
            tokio::time::sleep(self.interval).await;
        }
    }

    /// 1サイクルを実行
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        let checks = match self.fetch().await {
            Ok(checks) => checks,
            Err(e) => {
                error!(error = %e, "Error getting checks");
                self.publisher.set_liveness(false);
                return CycleOutcome::Failure;
            }
        };
        self.publisher.set_liveness(true);

        let current = self.publish(&checks);

        let stale = reconcile(&self.previous, &current);
        for labels in &stale {
            self.publisher.withdraw(labels);
        }

        self.previous = current;

        debug!(
            checks = checks.len(),
            withdrawn = stale.len(),
            "Poll cycle completed"
        );

        CycleOutcome::Success {
            checks: checks.len(),
            withdrawn: stale.len(),
        }
    }

    /// 各チェックの値をストアへ書き込み、今回のラベルセットを返す
    fn publish(&self, checks: &[Check]) -> CycleState {
        let mut current = CycleState::with_capacity(checks.len());

        for check in checks {
            let derived = derive(check);
            self.publisher.upsert_check_metrics(
                &derived.labels,
                derived.status,
                derived.response_time,
            );
            self.publisher.upsert_state(&check.hostname, derived.state);
            current.insert(check.id, derived.labels);
        }

        current
    }

    async fn fetch(&self) -> Result<Vec<Check>, FetchError> {
        match self.fetch_timeout {
            Some(limit) => tokio::time::timeout(limit, self.fetcher.fetch())
                .await
                .map_err(|_| FetchError::Timeout(limit))?,
            None => self.fetcher.fetch().await,
        }
    }
}
