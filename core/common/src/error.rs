//! エラーハンドリング
//!
//! 全レイヤー共通の Error。終了コードは sysexits に合わせる。

/// EX_USAGE
const EXIT_USAGE: i32 = 64;
/// EX_SOFTWARE
const EXIT_SOFTWARE: i32 = 70;
/// EX_IOERR
const EXIT_IOERR: i32 = 74;

/// エラー型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// 入力値の検証エラー（count の範囲外、空の name / message）
    #[error("{0}")]
    Validation(String),

    /// 未知のスタイル名
    #[error("unknown style: {0}")]
    InvalidStyle(String),

    /// 永続化（キー・値ストア）の読み書き失敗
    #[error("persistence error: {0}")]
    Persistence(String),

    #[error("{0}")]
    Io(String),

    #[error("json error: {0}")]
    Json(String),

    #[error("environment error: {0}")]
    Env(String),

    /// CLI 引数不正
    #[error("{0}")]
    InvalidArgument(String),
}

impl Error {
    pub fn io_msg(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Error::Env(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    pub fn persistence(msg: impl Into<String>) -> Self {
        Error::Persistence(msg.into())
    }

    /// usage を表示すべきエラーか（引数不正のみ）
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// プロセス終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidArgument(_) | Error::Validation(_) | Error::InvalidStyle(_) => EXIT_USAGE,
            Error::Persistence(_) | Error::Io(_) => EXIT_IOERR,
            Error::Json(_) | Error::Env(_) => EXIT_SOFTWARE,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(Error::invalid_argument("x").exit_code(), 64);
        assert_eq!(Error::validation("x").exit_code(), 64);
        assert_eq!(Error::InvalidStyle("gothic".to_string()).exit_code(), 64);
        assert_eq!(Error::persistence("quota").exit_code(), 74);
        assert_eq!(Error::env("HOME").exit_code(), 70);
    }

    #[test]
    fn test_is_usage_only_for_invalid_argument() {
        assert!(Error::invalid_argument("bad flag").is_usage());
        assert!(!Error::validation("count").is_usage());
        assert!(!Error::persistence("disk").is_usage());
    }

    #[test]
    fn test_display() {
        let e = Error::InvalidStyle("gothic".to_string());
        assert_eq!(e.to_string(), "unknown style: gothic");
        let e = Error::persistence("quota exceeded");
        assert_eq!(e.to_string(), "persistence error: quota exceeded");
    }
}
