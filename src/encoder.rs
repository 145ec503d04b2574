//! 画像のData URIエンコード
//!
//! ファイル全体をメモリに読み込んでからBase64化する（10MiB上限のため
//! ストリーミングはしない）。

use crate::error::{GalleryError, Result};
use crate::scanner::{FileSource, UploadFile};
use chrono::{SecondsFormat, Utc};
use image_gallery_common::{build_data_uri, display_name, ImageRecord};
use uuid::Uuid;

/// ファイル内容を読み込む（読み込み中のみ中断しうる）
async fn read_bytes(file: &UploadFile) -> Result<Vec<u8>> {
    match &file.source {
        FileSource::Path(path) => tokio::fs::read(path).await.map_err(|source| GalleryError::Encode {
            name: file.meta.name.clone(),
            source,
        }),
        FileSource::Memory(bytes) => Ok(bytes.clone()),
    }
}

/// ファイルを data:<mime>;base64,<payload> に変換
pub async fn encode(file: &UploadFile) -> Result<String> {
    let bytes = read_bytes(file).await?;
    Ok(build_data_uri(&file.meta.mime_type, &bytes))
}

/// 新しいレコードIDを発行
pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

/// 現在時刻（ISO-8601、ミリ秒、UTC）
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// エンコード済み内容からレコードを組み立てる
pub fn build_record(file: &UploadFile, content: String) -> ImageRecord {
    ImageRecord {
        id: new_record_id(),
        display_name: display_name(&file.meta.name),
        original_name: file.meta.name.clone(),
        content,
        size_bytes: file.meta.size,
        mime_type: file.meta.mime_type.clone(),
        uploaded_at: timestamp_now(),
    }
}

/// エンコードしてレコード化
pub async fn encode_record(file: &UploadFile) -> Result<ImageRecord> {
    let content = encode(file).await?;
    Ok(build_record(file, content))
}
