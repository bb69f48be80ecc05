//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置し、ここで re-export する
//! - ハンドラは薄く保ち、計算はドメイン層に委譲する
//! - 本文のデコードとメソッド検証は [`JsonPayload`](crate::extract::JsonPayload) が担う
//!
//! ## ハンドラ一覧
//!
//! | ルート | ハンドラ | 入力 | 出力 |
//! |--------|----------|------|------|
//! | `/`（その他すべて） | [`hello`] | なし | プレーンテキスト |
//! | `/add` | [`add`] | `NumberPair` | `ScalarResult` |
//! | `/subtract` | [`subtract`] | `NumberPair` | `ScalarResult` |
//! | `/multiply` | [`multiply`] | `NumberPair` | `ScalarResult` |
//! | `/divide` | [`divide`] | `NumberPair` | `DivisionResult` |
//! | `/sum` | [`sum`] | `NumberList` | `ScalarResult` |

pub mod arithmetic;
pub mod hello;

pub use arithmetic::{add, divide, multiply, subtract, sum};
pub use hello::hello;
