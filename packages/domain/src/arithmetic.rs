//! # 算術演算
//!
//! API のリクエスト・レスポンス形状と、その上の演算を定義する。
//!
//! ## 整数の意味論
//!
//! - 値はすべて符号付き 64 ビット整数
//! - 加算・減算・乗算・総和はオーバーフロー時に 2 の補数で折り返す
//!   （リリースビルドの `overflow-checks` でもパニックしない）
//! - 除算は 0 方向への切り捨て。剰余の符号は被除数に従う
//!
//! ```text
//!   7 /  2 =  3,   7 %  2 =  1
//!  -7 /  2 = -3,  -7 %  2 = -1
//!   7 / -2 = -3,   7 % -2 =  1
//! ```
//!
//! ## JSON からの読み込み
//!
//! - `NumberPair` はオブジェクトのみを受け付ける（配列は型の不一致）
//! - キーは大文字小文字を区別しない（`Number1` も `number1` として扱う）
//! - 値が `null` のキー・配列要素は何もしない（0 のまま）
//! - 同じキーが複数回現れた場合は最後の値を採用する
//! - 欠けたキーは 0、未知のキーは無視する

use std::fmt;

use serde::{
    Deserialize,
    Deserializer,
    Serialize,
    de::{IgnoredAny, MapAccess, Visitor},
};

use crate::DomainError;

/// 二項演算の入力 `{number1, number2}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NumberPair {
    pub number1: i64,
    pub number2: i64,
}

impl NumberPair {
    pub fn new(number1: i64, number2: i64) -> Self {
        Self { number1, number2 }
    }

    /// `number1 + number2`
    pub fn add(&self) -> ScalarResult {
        ScalarResult::new(self.number1.wrapping_add(self.number2))
    }

    /// `number1 - number2`
    pub fn subtract(&self) -> ScalarResult {
        ScalarResult::new(self.number1.wrapping_sub(self.number2))
    }

    /// `number1 * number2`
    pub fn multiply(&self) -> ScalarResult {
        ScalarResult::new(self.number1.wrapping_mul(self.number2))
    }

    /// 商と剰余を求める
    ///
    /// `number2` が 0 の場合は計算せずに [`DomainError::DivisionByZero`] を返す。
    /// `i64::MIN / -1` は商 `i64::MIN`・剰余 0 に折り返す。
    pub fn divide(&self) -> Result<DivisionResult, DomainError> {
        if self.number2 == 0 {
            return Err(DomainError::DivisionByZero);
        }

        Ok(DivisionResult {
            quotient:  self.number1.wrapping_div(self.number2),
            remainder: self.number1.wrapping_rem(self.number2),
        })
    }
}

impl<'de> Deserialize<'de> for NumberPair {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(NumberPairVisitor)
    }
}

struct NumberPairVisitor;

impl<'de> Visitor<'de> for NumberPairVisitor {
    type Value = NumberPair;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object with number1 and number2")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut pair = NumberPair::default();

        while let Some(key) = map.next_key::<String>()? {
            let slot = if key.eq_ignore_ascii_case("number1") {
                &mut pair.number1
            } else if key.eq_ignore_ascii_case("number2") {
                &mut pair.number2
            } else {
                map.next_value::<IgnoredAny>()?;
                continue;
            };

            if let Some(value) = map.next_value::<Option<i64>>()? {
                *slot = value;
            }
        }

        Ok(pair)
    }
}

/// 総和の入力（整数の配列）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NumberList(pub Vec<i64>);

impl<'de> Deserialize<'de> for NumberList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // null の要素は 0
        let numbers = Vec::<Option<i64>>::deserialize(deserializer)?;
        Ok(Self(numbers.into_iter().map(Option::unwrap_or_default).collect()))
    }
}

impl NumberList {
    /// 全要素の和。空の場合は 0
    pub fn sum(&self) -> ScalarResult {
        let total = self.0.iter().fold(0_i64, |acc, n| acc.wrapping_add(*n));
        ScalarResult::new(total)
    }
}

impl From<Vec<i64>> for NumberList {
    fn from(numbers: Vec<i64>) -> Self {
        Self(numbers)
    }
}

/// 単一値の演算結果 `{result}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalarResult {
    pub result: i64,
}

impl ScalarResult {
    pub fn new(result: i64) -> Self {
        Self { result }
    }
}

/// 除算の結果 `{quotient, remainder}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionResult {
    pub quotient:  i64,
    pub remainder: i64,
}
