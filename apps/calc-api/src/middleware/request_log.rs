//! # リクエストロガー
//!
//! ハンドラの前に、受信したリクエスト全体（リクエストライン・ヘッダー・本文）を
//! テキストにダンプして INFO レベルで出力するミドルウェア。
//!
//! 本文は一度バッファに読み込んでからダンプし、同じバイト列でリクエストを
//! 組み立て直して後続に渡す。後続のデコーダは本文全体をそのまま読める。
//!
//! 本文の読み込みに失敗した場合（上限超過を含む）は 500 を返し、ハンドラは実行しない。

use axum::{
    body::{Body, Bytes},
    extract::{Request, State},
    http::{header::HOST, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::ApiError;

/// リクエストロガーの状態
#[derive(Debug, Clone, Copy)]
pub struct RequestLogState {
    /// 読み込む本文の上限バイト数
    pub max_body_bytes: usize,
}

/// リクエストをダンプしてから後続に渡す
pub async fn log_request(
    State(state): State<RequestLogState>,
    request: Request,
    next: Next,
) -> Response {
    let (parts, body) = request.into_parts();

    let body = match axum::body::to_bytes(body, state.max_body_bytes).await {
        Ok(bytes) => bytes,
        Err(err) => return ApiError::Transport(err).into_response(),
    };

    tracing::info!(dump = ?format_dump(&parts, &body), "リクエストを受信しました");

    next.run(Request::from_parts(parts, Body::from(body))).await
}

/// リクエストを HTTP/1.x のワイヤー形式に近いテキストにする
///
/// ```text
/// POST /add HTTP/1.1\r\n
/// Host: localhost:8080\r\n
/// content-type: application/json\r\n
/// \r\n
/// {"number1":3,"number2":4}
/// ```
///
/// Host ヘッダーが無く URI に authority がある場合（HTTP/2 など）は authority を
/// Host 行として出力する。本文の非 UTF-8 バイトは置換文字になる。
pub fn format_dump(parts: &Parts, body: &Bytes) -> String {
    let target = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");

    let mut dump = format!("{} {} {:?}\r\n", parts.method, target, parts.version);

    if let Some(authority) = parts
        .uri
        .authority()
        .filter(|_| !parts.headers.contains_key(HOST))
    {
        dump.push_str(&format!("Host: {authority}\r\n"));
    }

    for (name, value) in &parts.headers {
        dump.push_str(&format!(
            "{}: {}\r\n",
            name,
            String::from_utf8_lossy(value.as_bytes())
        ));
    }

    dump.push_str("\r\n");
    dump.push_str(&String::from_utf8_lossy(body));
    dump
}
