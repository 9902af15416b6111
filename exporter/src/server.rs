//! axumサーバー起動・シグナルハンドリング
//!
//! SIGINT / SIGTERM を受けたら処理中のサイクルやスクレイプを待たずに戻る。

use crate::common::error::ServerError;
use crate::AppState;
use std::future::{Future, IntoFuture};
use tokio::net::TcpListener;
use tracing::{error, info};

/// リスナーをバインド
pub async fn bind(bind_addr: &str) -> Result<TcpListener, ServerError> {
    TcpListener::bind(bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: bind_addr.to_string(),
            source,
        })
}

/// サーバーを起動し、シグナル受信まで待機する
pub async fn run(state: AppState, bind_addr: &str) -> Result<(), ServerError> {
    let listener = bind(bind_addr).await?;
    info!("Listening on {}", bind_addr);

    serve_until(listener, state, async {
        let signal = shutdown_signal().await;
        info!("Received {}, exiting", signal);
    })
    .await
}

/// `shutdown` が完了するかサーバーが停止するまで提供する
///
/// 接続のドレインは行わない。
pub async fn serve_until<S>(
    listener: TcpListener,
    state: AppState,
    shutdown: S,
) -> Result<(), ServerError>
where
    S: Future<Output = ()>,
{
    let app = crate::api::create_app(state);

    tokio::select! {
        result = axum::serve(listener, app).into_future() => result?,
        _ = shutdown => {}
    }

    Ok(())
}

/// シャットダウンシグナルを待機し、受信したシグナル名を返す
async fn shutdown_signal() -> &'static str {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install SIGINT handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => "SIGINT",
        _ = terminate => "SIGTERM",
    }
}
