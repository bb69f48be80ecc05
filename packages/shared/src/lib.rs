//! # CalcFlow 共有ユーティリティ
//!
//! サービス横断で使う観測基盤（ログ初期化・Request ID・リクエストスパン）を提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない
//! - axum に依存しない（`http` / `tower-http` の型のみを使う）

pub mod observability;
