//! Pingdom Exporter
//!
//! Pingdomのチェック状態を定期取得し、Prometheusメトリクスとして公開する。

#![warn(missing_docs)]

/// 共通型定義（Pingdom API型・エラー型）
pub mod common;

/// HTTPハンドラー
pub mod api;

/// CLIインターフェース
pub mod cli;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// ロギング初期化ユーティリティ
pub mod logging;

/// メトリクス導出・突き合わせ・公開
pub mod metrics;

/// Pingdom APIクライアント
pub mod pingdom;

/// ポーリングループ
pub mod poller;

/// axumサーバー起動・シグナルハンドリング
pub mod server;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// メトリクスストア（ポーラーと共有）
    pub publisher: metrics::MetricsPublisher,
}
