//! # CalcFlow Calc API
//!
//! JSON で整数演算（加算・減算・乗算・除算・総和）を提供する HTTP サービス。
//!
//! ## リクエストの流れ
//!
//! ```text
//! リクエストロガー → JSON ボディデコーダ → ハンドラ（ドメイン演算） → JSON レスポンス
//!   (middleware)        (extract)            (handler)
//! ```
//!
//! 各リクエストは独立しており、共有される可変状態は無い。
//!
//! ## モジュール構成
//!
//! - [`app_builder`] - ルーター構築
//! - [`config`] - 環境変数からの設定読み込み
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`extract`] - JSON ボディデコーダ
//! - [`handler`] - HTTP リクエストハンドラ
//! - [`middleware`] - リクエストロガー

pub mod app_builder;
pub mod config;
pub mod error;
pub mod extract;
pub mod handler;
pub mod middleware;

pub use app_builder::build_app;
