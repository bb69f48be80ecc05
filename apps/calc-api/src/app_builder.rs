//! # ルーター構築
//!
//! ルート定義とミドルウェアの組み立てを担当する。
//! `main.rs` はトレーシング初期化とサーバー起動に集中する。

use axum::{Router, middleware::from_fn_with_state, routing::any};
use calcflow_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    config::CalcApiConfig,
    handler::{add, divide, hello, multiply, subtract, sum},
    middleware::{RequestLogState, log_request},
};

/// ルーターを構築する
///
/// 算術ルートはすべてのメソッドを受け付け、メソッドの検証はデコーダに任せる。
/// これにより POST 以外のリクエストもリクエストロガーを通ってから 405 になる。
/// 一致しないパスはすべて [`hello`] が受け付ける。
pub fn build_app(config: &CalcApiConfig) -> Router {
    let request_log_state = RequestLogState {
        max_body_bytes: config.max_body_bytes,
    };

    // レイヤー順序: 下に書いたものが外側
    // 1. SetRequestIdLayer（最外）: UUID v7 を採番（またはクライアント提供値を使用）
    // 2. TraceLayer: request_id を含むスパンを作り、全ログに自動注入（失敗ログは出さない）
    // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
    // 4. log_request: リクエスト全体をダンプ
    Router::new()
        .route("/", any(hello))
        .route("/add", any(add))
        .route("/subtract", any(subtract))
        .route("/multiply", any(multiply))
        .route("/divide", any(divide))
        .route("/sum", any(sum))
        .fallback(hello)
        .layer(from_fn_with_state(request_log_state, log_request))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(make_request_span)
                // エラーは ApiError 側で 1 行だけ出力する
                .on_failure(()),
        )
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
