//! # 算術ハンドラ
//!
//! POST された JSON を [`JsonPayload`] でデコードし、ドメイン層の演算結果を
//! JSON（`Content-Type: application/json`、ステータス 200）で返す。
//!
//! POST 以外・不正な JSON は [`JsonPayload`] の時点で拒否され、ここには到達しない。

use axum::Json;
use calcflow_domain::arithmetic::{DivisionResult, NumberList, NumberPair, ScalarResult};

use crate::{error::ApiError, extract::JsonPayload};

/// `POST /add`
pub async fn add(JsonPayload(pair): JsonPayload<NumberPair>) -> Json<ScalarResult> {
    Json(pair.add())
}

/// `POST /subtract`
pub async fn subtract(JsonPayload(pair): JsonPayload<NumberPair>) -> Json<ScalarResult> {
    Json(pair.subtract())
}

/// `POST /multiply`
pub async fn multiply(JsonPayload(pair): JsonPayload<NumberPair>) -> Json<ScalarResult> {
    Json(pair.multiply())
}

/// `POST /divide`
///
/// `number2` が 0 の場合は計算せず 400 を返す。
pub async fn divide(
    JsonPayload(pair): JsonPayload<NumberPair>,
) -> Result<Json<DivisionResult>, ApiError> {
    let result = pair.divide()?;
    Ok(Json(result))
}

/// `POST /sum`
pub async fn sum(JsonPayload(numbers): JsonPayload<NumberList>) -> Json<ScalarResult> {
    Json(numbers.sum())
}

#[cfg(test)]
mod tests {
    use calcflow_domain::DomainError;
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn test_addは和を返す() {
        let Json(result) = add(JsonPayload(NumberPair::new(3, 4))).await;

        assert_eq!(result, ScalarResult::new(7));
    }

    #[tokio::test]
    async fn test_divideは商と剰余を返す() {
        let Json(result) = divide(JsonPayload(NumberPair::new(7, 2))).await.unwrap();

        assert_eq!(
            result,
            DivisionResult {
                quotient:  3,
                remainder: 1,
            }
        );
    }

    #[tokio::test]
    async fn test_divideは除数0でドメインエラーを返す() {
        let error = divide(JsonPayload(NumberPair::new(7, 0))).await.unwrap_err();

        assert!(matches!(
            error,
            ApiError::InvalidDomainValue(DomainError::DivisionByZero)
        ));
    }

    #[tokio::test]
    async fn test_sumは空配列で0を返す() {
        let Json(result) = sum(JsonPayload(NumberList::default())).await;

        assert_eq!(result, ScalarResult::new(0));
    }
}
