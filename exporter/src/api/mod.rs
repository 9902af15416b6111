//! HTTPハンドラー
//!
//! - `GET /` 空レスポンス（死活確認用）
//! - `GET /metrics` Prometheusテキスト形式のメトリクス

pub mod metrics;

use crate::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// アプリケーションルーターを作成
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/metrics", get(metrics::export_metrics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET / - 空の200レスポンス
async fn root() -> &'static str {
    ""
}
