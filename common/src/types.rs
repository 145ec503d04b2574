//! ギャラリーの型定義
//!
//! - FileMeta: 検証対象のファイル記述子
//! - ImageRecord: 永続化される画像レコード

use serde::{Deserialize, Serialize};

/// 検証対象のファイル記述子（名前・サイズ・MIMEタイプ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }
}

/// アップロード済み画像1件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    pub id: String,

    /// 拡張子を除いたファイル名
    pub display_name: String,

    pub original_name: String,

    /// data:<mime>;base64,<payload>
    pub content: String,

    /// エンコード前の元サイズ
    pub size_bytes: u64,

    pub mime_type: String,

    /// エンコード完了時刻（ISO-8601）
    pub uploaded_at: String,
}

/// ファイル名から最後の拡張子を取り除く
///
/// 先頭のドットのみ（".hidden"）は拡張子とみなさない。
pub fn display_name(file_name: &str) -> String {
    match file_name.rfind('.') {
        Some(idx) if idx > 0 => file_name[..idx].to_string(),
        _ => file_name.to_string(),
    }
}
