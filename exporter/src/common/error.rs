//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! フェッチ失敗（[`FetchError`]）はポーリングループ内で回復され、
//! 設定エラー（[`ConfigError`]）とサーバーエラー（[`ServerError`]）は起動時に致命的となる。

use std::time::Duration;
use thiserror::Error;

/// 起動時設定エラー
#[derive(Debug, Error)]
pub enum ConfigError {
    /// APIキー未設定
    #[error("apikey must not be empty (set {0})")]
    MissingApiKey(&'static str),
}

/// Pingdom APIからのチェック一覧取得エラー
#[derive(Debug, Error)]
pub enum FetchError {
    /// 通信エラー（接続失敗、TLS、ボディ読み込み失敗など）
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// 上流APIが2xx以外を返した
    #[error("Pingdom API error {status}: {message}")]
    Api {
        /// HTTPステータスコード
        status: u16,
        /// 上流のエラーメッセージ（取得できない場合はステータス説明）
        message: String,
    },

    /// レスポンスボディのデコード失敗
    #[error("Failed to decode checks response: {0}")]
    Decode(#[from] serde_json::Error),

    /// フェッチの期限切れ
    #[error("Timeout error: no response within {0:?}")]
    Timeout(Duration),
}

/// HTTPサーバーエラー
#[derive(Debug, Error)]
pub enum ServerError {
    /// リスナーのバインド失敗
    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        /// バインド先アドレス
        addr: String,
        /// 原因
        #[source]
        source: std::io::Error,
    },

    /// サーバー実行中のI/Oエラー
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}
