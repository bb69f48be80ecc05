//! # CalcFlow ドメイン層
//!
//! 算術 API が扱うデータ型と、その上の純粋な演算を定義する。
//!
//! ## 設計方針
//!
//! - HTTP やシリアライズ形式の都合を持ち込まない（serde の derive のみ）
//! - 演算はすべて副作用なしの関数として提供し、単体テストで検証する
//! - ドメイン値の不正（ゼロ除算）は [`DomainError`] で表現する
//!
//! ## 依存関係の方向
//!
//! ```text
//! calc-api → domain
//! calc-api → shared
//! ```
//!
//! ## 使用例
//!
//! ```rust
//! use calcflow_domain::arithmetic::{NumberList, NumberPair};
//!
//! let pair = NumberPair::new(7, 2);
//! assert_eq!(pair.add().result, 9);
//!
//! let division = pair.divide().unwrap();
//! assert_eq!((division.quotient, division.remainder), (3, 1));
//!
//! assert_eq!(NumberList::from(vec![1, 2, 3]).sum().result, 6);
//! ```

pub mod arithmetic;
pub mod error;

pub use error::DomainError;
