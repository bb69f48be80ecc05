//! # Calc API サーバー
//!
//! 整数演算を JSON で提供する API サーバー。
//!
//! ## エンドポイント
//!
//! | メソッド | パス | 本文 | 応答 |
//! |----------|------|------|------|
//! | 任意 | `/`（その他すべて） | 任意 | 受領メッセージ |
//! | POST | `/add` | `{"number1": a, "number2": b}` | `{"result": a + b}` |
//! | POST | `/subtract` | `{"number1": a, "number2": b}` | `{"result": a - b}` |
//! | POST | `/multiply` | `{"number1": a, "number2": b}` | `{"result": a * b}` |
//! | POST | `/divide` | `{"number1": a, "number2": b}` | `{"quotient": a / b, "remainder": a % b}` |
//! | POST | `/sum` | `[n1, n2, ...]` | `{"result": n1 + n2 + ...}` |
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `CALC_API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `CALC_API_PORT` | No | ポート番号（デフォルト: `8080`） |
//! | `CALC_API_MAX_BODY_BYTES` | No | 本文の上限バイト数（デフォルト: `1048576`） |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログフィルタ（デフォルト: `info,calcflow=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p calcflow-api
//!
//! curl -X POST localhost:8080/add -d '{"number1":3,"number2":4}'
//! # {"result":7}
//! ```

use std::net::SocketAddr;

use anyhow::Context as _;
use calcflow_api::{build_app, config::CalcApiConfig};
use calcflow_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("calc-api");
    init_tracing(&tracing_config);
    let _tracing_guard = tracing_config.app_span().entered();

    let config = CalcApiConfig::from_env().context("設定の読み込みに失敗しました")?;

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .with_context(|| format!("アドレスのパースに失敗しました: {}", config.bind_address()))?;

    let app = build_app(&config);

    tracing::info!(port = config.port, "Calc API サーバーを起動します: {addr}");

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            eprintln!("Server error: {err}");
            return Err(err).with_context(|| format!("{addr} で待ち受けできません"));
        }
    };
    tracing::info!("Calc API サーバーが起動しました: {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Calc API サーバーを停止しました");
    Ok(())
}

/// Ctrl-C または SIGTERM を待つ
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Ctrl-C ハンドラの登録に失敗しました");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "SIGTERM ハンドラの登録に失敗しました");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("シャットダウンシグナルを受信しました");
}
