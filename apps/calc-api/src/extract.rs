//! # JSON ボディデコーダ
//!
//! リクエスト本文を期待する形状にデコードする axum エクストラクタ。
//!
//! ## 振る舞い
//!
//! 1. メソッドが POST 以外なら [`ApiError::MethodNotAllowed`]
//! 2. 本文の先頭の JSON 値を `T` にデコードする。失敗したら [`ApiError::MalformedPayload`]
//! 3. 成功したら値を返し、ハンドラの処理に進む
//!
//! 先頭の値より後ろのバイト列は読み捨てる。`null` は `T::default()` として扱う。

use axum::{
    extract::{FromRequest, Request},
    http::Method,
};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::error::ApiError;

/// JSON 本文のデコードエラー
#[derive(Debug, Error)]
pub enum DecodeError {
    /// 本文が空（空白のみを含む）
    #[error("EOF")]
    Empty,

    /// JSON の構文エラー、または形状の不一致
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// POST 本文を `T` としてデコードするエクストラクタ
///
/// ```rust,ignore
/// async fn add(JsonPayload(pair): JsonPayload<NumberPair>) -> Json<ScalarResult> {
///     Json(pair.add())
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPayload<T>(pub T);

impl<T, S> FromRequest<S> for JsonPayload<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        if req.method() != Method::POST {
            return Err(ApiError::MethodNotAllowed(req.method().clone()));
        }

        // 上限はリクエストロガーで適用済み
        let body = axum::body::to_bytes(req.into_body(), usize::MAX).await?;
        let payload = decode_json(&body)?;

        Ok(JsonPayload(payload))
    }
}

/// 本文の先頭の JSON 値を `T` にデコードする
pub fn decode_json<T>(body: &[u8]) -> Result<T, DecodeError>
where
    T: DeserializeOwned + Default,
{
    let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Option<T>>();

    match values.next() {
        Some(value) => Ok(value?.unwrap_or_default()),
        None => Err(DecodeError::Empty),
    }
}

#[cfg(test)]
mod tests {
    use calcflow_domain::arithmetic::{NumberList, NumberPair};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_number_pairをデコードできる() {
        let pair: NumberPair = decode_json(br#"{"number1": 3, "number2": 4}"#).unwrap();

        assert_eq!(pair, NumberPair::new(3, 4));
    }

    #[test]
    fn test_number_listをデコードできる() {
        let list: NumberList = decode_json(b"[1, 2, 3]").unwrap();

        assert_eq!(list, NumberList(vec![1, 2, 3]));
    }

    #[test]
    fn test_nullはデフォルト値になる() {
        let pair: NumberPair = decode_json(b"null").unwrap();
        let list: NumberList = decode_json(b"null").unwrap();

        assert_eq!(pair, NumberPair::default());
        assert_eq!(list, NumberList::default());
    }

    #[test]
    fn test_先頭の値より後ろは読み捨てる() {
        let pair: NumberPair =
            decode_json(br#"{"number1": 1, "number2": 2} {"number1": 9}"#).unwrap();

        assert_eq!(pair, NumberPair::new(1, 2));
    }

    #[rstest]
    #[case(b"".as_slice())]
    #[case(b"   \n\t".as_slice())]
    fn test_空の本文はeofエラーになる(#[case] body: &[u8]) {
        let error = decode_json::<NumberPair>(body).unwrap_err();

        assert!(matches!(error, DecodeError::Empty));
        assert_eq!(error.to_string(), "EOF");
    }

    #[rstest]
    #[case(br#"{"number1": 1,"#.as_slice())]
    #[case(br#"{"number1": "one"}"#.as_slice())]
    #[case(br#"{"number1": 1.5}"#.as_slice())]
    #[case(br#"{"number1": 99999999999999999999}"#.as_slice())]
    #[case(br#"[1, "2"]"#.as_slice())]
    #[case(b"[3, 4]".as_slice())]
    #[case(b"[]".as_slice())]
    fn test_number_pairとして不正な本文はjsonエラーになる(#[case] body: &[u8]) {
        let error = decode_json::<NumberPair>(body).unwrap_err();

        assert!(matches!(error, DecodeError::Json(_)));
    }

    #[rstest]
    #[case(br#"{"Number1": 3, "NUMBER2": 4}"#.as_slice(), NumberPair::new(3, 4))]
    #[case(br#"{"number1": null, "number2": 4}"#.as_slice(), NumberPair::new(0, 4))]
    #[case(br#"{"number1": 1, "number1": 9, "number2": 2}"#.as_slice(), NumberPair::new(9, 2))]
    fn test_number_pairのキーの表記ゆれ_null_重複を受け付ける(
        #[case] body: &[u8],
        #[case] expected: NumberPair,
    ) {
        assert_eq!(decode_json::<NumberPair>(body).unwrap(), expected);
    }

    #[test]
    fn test_number_listのnull要素は0になる() {
        let list: NumberList = decode_json(b"[1, null, 2]").unwrap();

        assert_eq!(list, NumberList(vec![1, 0, 2]));
    }

    #[test]
    fn test_number_listにオブジェクトを渡すとjsonエラーになる() {
        let error = decode_json::<NumberList>(br#"{"number1": 1}"#).unwrap_err();

        assert!(matches!(error, DecodeError::Json(_)));
    }
}
