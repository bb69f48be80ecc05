//! # Calc API エラーハンドリング
//!
//! リクエスト処理中に発生するエラーの定義と、axum レスポンスへの変換。
//!
//! エラーは検出した時点で HTTP レスポンスに変換され、ハンドラより外へは伝播しない。
//! レスポンス本文はプレーンテキスト。
//!
//! | ApiError | HTTP Status | ログレベル |
//! |----------|-------------|-----------|
//! | `Transport` | 500 | ERROR |
//! | `MethodNotAllowed` | 405 | WARN |
//! | `MalformedPayload` | 400 | ERROR |
//! | `InvalidDomainValue` | 400 | ERROR |

use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use calcflow_domain::DomainError;
use thiserror::Error;

use crate::extract::DecodeError;

/// Calc API 層で発生するエラー
///
/// `IntoResponse` を実装しているため、axum が自動的に HTTP レスポンスに変換する。
/// `Display` の文字列がそのままレスポンス本文になる。
#[derive(Debug, Error)]
pub enum ApiError {
    /// リクエスト本文の読み込み失敗（500 Internal Server Error）
    #[error("{0}")]
    Transport(#[from] axum::Error),

    /// POST 以外のメソッド（405 Method Not Allowed）
    #[error("Method not allowed!")]
    MethodNotAllowed(Method),

    /// JSON として解釈できない本文（400 Bad Request）
    #[error(transparent)]
    MalformedPayload(#[from] DecodeError),

    /// ドメインの制約違反（400 Bad Request）
    #[error(transparent)]
    InvalidDomainValue(#[from] DomainError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::MalformedPayload(_) | ApiError::InvalidDomainValue(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }

    fn log(&self) {
        match self {
            ApiError::Transport(err) => {
                tracing::error!(error = %err, "リクエストの読み込みに失敗しました");
            }
            ApiError::MethodNotAllowed(method) => {
                tracing::warn!(method = %method, "許可されていないメソッドです");
            }
            ApiError::MalformedPayload(err) => {
                tracing::error!(error = %err, "JSON のデコードに失敗しました");
            }
            ApiError::InvalidDomainValue(err) => {
                tracing::error!(reason = err.reason(), "不正な入力値です: {err}");
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();
        (self.status_code(), self.to_string()).into_response()
    }
}
