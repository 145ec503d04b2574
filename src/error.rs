use crate::store::StorageError;
use image_gallery_common::{ErrorKind, ValidationError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("画像が見つかりません: {0}")]
    RecordNotFound(String),

    #[error("読み込みエラー ({name}): {source}")]
    Encode {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("有効なファイルがありません（{}件すべて拒否）", .rejected.len())]
    NoValidFiles { rejected: Vec<ValidationError> },

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("ストレージエラー: {0}")]
    Storage(#[from] StorageError),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] image_gallery_common::Error),
}

impl GalleryError {
    /// 分類コードを持つエラーのみ Some を返す
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            GalleryError::Encode { .. } => Some(ErrorKind::EncodeFailure),
            GalleryError::NoValidFiles { .. } => Some(ErrorKind::NoValidFiles),
            GalleryError::Common(image_gallery_common::Error::Validation(e)) => Some(e.kind()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GalleryError>;
