//! ポーリングループ
//!
//! Pingdomのチェック一覧を定期取得し、メトリクスストアと同期する。

pub mod check_poller;

pub use check_poller::{CheckPoller, CycleOutcome};
