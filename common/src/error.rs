//! エラー型定義

use thiserror::Error;

/// エラー種別コード
///
/// ログとCLI出力で使う安定した文字列表現を持つ。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidType,
    TooLarge,
    EncodeFailure,
    NoValidFiles,
    StorageReadFailure,
    StorageWriteFailure,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidType => "invalid-type",
            ErrorKind::TooLarge => "too-large",
            ErrorKind::EncodeFailure => "encode-failure",
            ErrorKind::NoValidFiles => "no-valid-files",
            ErrorKind::StorageReadFailure => "storage-read-failure",
            ErrorKind::StorageWriteFailure => "storage-write-failure",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ファイル単位の検証エラー
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{name}: unsupported file type '{mime_type}'")]
    InvalidType { name: String, mime_type: String },

    #[error("{name}: file too large ({}MB)", format_megabytes(.size))]
    TooLarge { name: String, size: u64 },
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::InvalidType { .. } => ErrorKind::InvalidType,
            ValidationError::TooLarge { .. } => ErrorKind::TooLarge,
        }
    }

    /// 対象ファイル名
    pub fn file_name(&self) -> &str {
        match self {
            ValidationError::InvalidType { name, .. } | ValidationError::TooLarge { name, .. } => name,
        }
    }
}

/// バイト数をMB表記（小数2桁）に変換
pub fn format_megabytes(size: &u64) -> String {
    format!("{:.2}", *size as f64 / 1024.0 / 1024.0)
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid data URI: {0}")]
    InvalidDataUri(String),

    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        assert_eq!(ErrorKind::InvalidType.as_str(), "invalid-type");
        assert_eq!(ErrorKind::TooLarge.as_str(), "too-large");
        assert_eq!(ErrorKind::EncodeFailure.as_str(), "encode-failure");
        assert_eq!(ErrorKind::NoValidFiles.as_str(), "no-valid-files");
        assert_eq!(ErrorKind::StorageReadFailure.to_string(), "storage-read-failure");
        assert_eq!(ErrorKind::StorageWriteFailure.to_string(), "storage-write-failure");
    }

    #[test]
    fn test_too_large_message_two_decimals() {
        let error = ValidationError::TooLarge {
            name: "big.jpg".to_string(),
            size: 11 * 1024 * 1024 + 512 * 1024,
        };
        assert_eq!(error.to_string(), "big.jpg: file too large (11.50MB)");
        assert_eq!(error.kind(), ErrorKind::TooLarge);
    }

    #[test]
    fn test_invalid_type_message_contains_observed_type() {
        let error = ValidationError::InvalidType {
            name: "b.exe".to_string(),
            mime_type: "application/exe".to_string(),
        };
        let display = error.to_string();
        assert!(display.contains("application/exe"));
        assert_eq!(error.file_name(), "b.exe");
        assert_eq!(error.kind(), ErrorKind::InvalidType);
    }

    #[test]
    fn test_error_from_validation() {
        let error: Error = ValidationError::TooLarge { name: "x.png".into(), size: 1 }.into();
        assert!(matches!(error, Error::Validation(_)));
        assert!(error.to_string().starts_with("Validation error"));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }
}
