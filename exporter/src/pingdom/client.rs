//! Pingdom APIクライアント
//!
//! `GET /checks?include_tags=true` を1サイクルにつき1回呼び出す。
//! リトライは行わない（再試行はポーリング間隔に任せる）。

use super::CheckFetcher;
use crate::common::error::FetchError;
use crate::common::types::{ApiErrorResponse, Check, ChecksResponse};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// Pingdom API 3.1 のデフォルトベースURL
pub const DEFAULT_API_BASE_URL: &str = "https://api.pingdom.com/api/3.1";

/// Pingdom APIクライアント
#[derive(Clone)]
pub struct PingdomClient {
    /// HTTPクライアント
    client: Client,
    /// APIベースURL（末尾スラッシュなし）
    base_url: String,
    /// APIトークン
    api_key: String,
}

impl PingdomClient {
    /// 新しいクライアントを作成
    ///
    /// `client` にはタイムアウトを設定しない想定。期限はポーリングループ側で扱う。
    pub fn new(client: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            api_key: api_key.into(),
        }
    }

    fn checks_url(&self) -> String {
        format!("{}/checks", self.base_url)
    }
}

#[async_trait]
impl CheckFetcher for PingdomClient {
    async fn fetch(&self) -> Result<Vec<Check>, FetchError> {
        let response = self
            .client
            .get(self.checks_url())
            .bearer_auth(&self.api_key)
            .query(&[("include_tags", "true")])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // errormessage → statusdesc → HTTPステータス説明の順に採用
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .ok()
                .and_then(|e| {
                    [e.error.error_message, e.error.status_desc]
                        .into_iter()
                        .find(|m| !m.is_empty())
                })
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("unexpected status")
                        .to_string()
                });
            return Err(FetchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChecksResponse = serde_json::from_str(&body)?;
        debug!(count = parsed.checks.len(), "Fetched checks from Pingdom");
        Ok(parsed.checks)
    }
}
