//! ロギング初期化ユーティリティ
//!
//! `RUST_LOG` が設定されていればそれを、なければ `LOG_LEVEL`（既定: info）を使う。

use tracing_subscriber::EnvFilter;

/// ログレベル指定用の環境変数
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";

/// 既定のログレベル
const DEFAULT_LOG_LEVEL: &str = "info";

/// ログフィルタを構築
pub fn build_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = crate::config::get_env_or(ENV_LOG_LEVEL, DEFAULT_LOG_LEVEL);
        EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
    })
}

/// グローバルサブスクライバーを初期化
///
/// 既に初期化済みの場合はエラーを返す。
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_target(false)
        .try_init()
}
