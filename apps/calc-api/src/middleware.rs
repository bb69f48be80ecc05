//! # ミドルウェア
//!
//! Calc API 用のミドルウェアを提供する。

mod request_log;

pub use request_log::{RequestLogState, format_dump, log_request};
