//! # Calc API 設定
//!
//! 環境変数から Calc API サーバーの設定を読み込む。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `CALC_API_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `CALC_API_PORT` | No | `8080` | ポート番号 |
//! | `CALC_API_MAX_BODY_BYTES` | No | `1048576` | リクエストロガーが読み込む本文の上限 |

use std::env;

use thiserror::Error;

/// デフォルトのポート番号
pub const DEFAULT_PORT: u16 = 8080;

/// デフォルトの本文サイズ上限（1 MiB）
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// 設定の読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} の値が不正です: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Calc API サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalcApiConfig {
    /// バインドアドレス
    pub host:           String,
    /// ポート番号
    pub port:           u16,
    /// リクエスト本文の上限バイト数
    pub max_body_bytes: usize,
}

impl Default for CalcApiConfig {
    fn default() -> Self {
        Self {
            host:           "0.0.0.0".to_string(),
            port:           DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl CalcApiConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の取得関数から設定を読み込む
    ///
    /// テスト間で環境変数が競合しないよう、取得元を差し替えられるようにしている。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            host:           lookup("CALC_API_HOST").unwrap_or(defaults.host),
            port:           parse_or("CALC_API_PORT", &lookup, defaults.port)?,
            max_body_bytes: parse_or(
                "CALC_API_MAX_BODY_BYTES",
                &lookup,
                defaults.max_body_bytes,
            )?,
        })
    }

    /// `host:port` 形式のバインドアドレス
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T, F>(name: &'static str, lookup: &F, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_未設定の場合はデフォルト値を使う() {
        let config = CalcApiConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config, CalcApiConfig::default());
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_環境変数の値で上書きされる() {
        let config = CalcApiConfig::from_lookup(lookup_from(&[
            ("CALC_API_HOST", "127.0.0.1"),
            ("CALC_API_PORT", "9090"),
            ("CALC_API_MAX_BODY_BYTES", "64"),
        ]))
        .unwrap();

        assert_eq!(
            config,
            CalcApiConfig {
                host:           "127.0.0.1".to_string(),
                port:           9090,
                max_body_bytes: 64,
            }
        );
    }

    #[test]
    fn test_不正なポート番号はエラーになる() {
        let result = CalcApiConfig::from_lookup(lookup_from(&[("CALC_API_PORT", "eighty")]));

        assert_eq!(
            result,
            Err(ConfigError::Invalid {
                name:  "CALC_API_PORT",
                value: "eighty".to_string(),
            })
        );
    }

    #[test]
    fn test_範囲外のポート番号はエラーになる() {
        let result = CalcApiConfig::from_lookup(lookup_from(&[("CALC_API_PORT", "70000")]));

        assert!(result.is_err());
    }
}
