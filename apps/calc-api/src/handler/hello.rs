//! # ルートハンドラ
//!
//! どのルートにも一致しないリクエストを受け付ける。
//! リクエストの記録はリクエストロガーが済ませているので、受領メッセージだけを返す。

use axum::http::Method;

/// POST の場合の応答
pub const POST_RECEIVED: &str = "Received POST request!";

/// POST 以外の場合の応答
pub const REQUEST_LOGGED: &str = "Request received and logged!";

/// 受領メッセージを返す（メソッドは問わない）
pub async fn hello(method: Method) -> &'static str {
    if method == Method::POST {
        POST_RECEIVED
    } else {
        REQUEST_LOGGED
    }
}
