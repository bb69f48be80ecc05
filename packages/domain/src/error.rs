//! # ドメイン層エラー定義
//!
//! 演算の入力がドメインの制約に違反している場合のエラー型。
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `DivisionByZero` | 400 Bad Request | 除数（`number2`）が 0 |

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// `Display` の文字列はそのままクライアントへのレスポンス本文になる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    /// 除数が 0
    #[error("Number 2 value cannot be 0!")]
    DivisionByZero,
}

impl DomainError {
    /// ログ出力用の理由
    pub fn reason(&self) -> &'static str {
        match self {
            DomainError::DivisionByZero => "cannot divide by 0",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_division_by_zeroの表示文字列がレスポンス本文と一致する() {
        assert_eq!(
            DomainError::DivisionByZero.to_string(),
            "Number 2 value cannot be 0!"
        );
    }

    #[test]
    fn test_division_by_zeroの理由() {
        assert_eq!(DomainError::DivisionByZero.reason(), "cannot divide by 0");
    }
}
