//! 上流チェック一覧の取得
//!
//! ポーリングループは [`CheckFetcher`] 越しにチェック一覧を取得する。
//! 本番は [`PingdomClient`]、テストでは任意の実装を差し込める。

pub mod client;

pub use client::PingdomClient;

use crate::common::error::FetchError;
use crate::common::types::Check;
use async_trait::async_trait;

/// チェック一覧の取得元
#[async_trait]
pub trait CheckFetcher: Send + Sync {
    /// 現在の全チェックを取得する
    ///
    /// 失敗はそのまま返す。リトライはしない。
    async fn fetch(&self) -> Result<Vec<Check>, FetchError>;
}
