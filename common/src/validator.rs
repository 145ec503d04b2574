//! アップロードファイルの検証
//!
//! MIMEタイプとサイズのポリシーでファイルを受理/拒否する。

use crate::error::ValidationError;
use crate::types::FileMeta;

/// 受理するMIMEタイプ（完全一致・大文字小文字を区別）
pub const ACCEPTED_MIME_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

/// 最大ファイルサイズ（10MiB、境界値は受理）
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

pub fn is_accepted_mime_type(mime_type: &str) -> bool {
    ACCEPTED_MIME_TYPES.contains(&mime_type)
}

/// ファイル1件を検証
pub fn validate(file: &FileMeta) -> Result<(), ValidationError> {
    if !is_accepted_mime_type(&file.mime_type) {
        return Err(ValidationError::InvalidType {
            name: file.name.clone(),
            mime_type: file.mime_type.clone(),
        });
    }

    if file.size > MAX_FILE_SIZE {
        return Err(ValidationError::TooLarge {
            name: file.name.clone(),
            size: file.size,
        });
    }

    Ok(())
}

/// バッチを有効/無効に分割
///
/// 1件の拒否で他のファイルの検証は止まらない。入力順は両方で保持される。
pub fn partition<T, F>(files: Vec<T>, meta: F) -> (Vec<T>, Vec<ValidationError>)
where
    F: Fn(&T) -> &FileMeta,
{
    let mut valid = Vec::new();
    let mut rejected = Vec::new();

    for file in files {
        match validate(meta(&file)) {
            Ok(()) => valid.push(file),
            Err(e) => rejected.push(e),
        }
    }

    (valid, rejected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_accepts_all_image_types() {
        for mime in ACCEPTED_MIME_TYPES {
            let file = FileMeta::new("x", 1, *mime);
            assert!(validate(&file).is_ok(), "{} が拒否された", mime);
        }
    }

    #[test]
    fn test_rejects_other_types() {
        for mime in ["application/exe", "image/svg+xml", "image/bmp", "text/plain", ""] {
            let err = validate(&FileMeta::new("x", 1, mime)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidType);
        }
    }

    #[test]
    fn test_mime_type_is_case_sensitive() {
        let err = validate(&FileMeta::new("x.png", 1, "IMAGE/PNG")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidType);
    }

    #[test]
    fn test_size_boundary_inclusive() {
        assert!(validate(&FileMeta::new("max.jpg", MAX_FILE_SIZE, "image/jpeg")).is_ok());

        let err = validate(&FileMeta::new("over.jpg", MAX_FILE_SIZE + 1, "image/jpeg")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TooLarge);
    }

    #[test]
    fn test_type_checked_before_size() {
        let err = validate(&FileMeta::new("huge.exe", MAX_FILE_SIZE * 2, "application/exe")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidType);
    }

    #[test]
    fn test_partition_keeps_order_and_continues() {
        let files = vec![
            FileMeta::new("a.png", 2 * 1024 * 1024, "image/png"),
            FileMeta::new("b.exe", 1024 * 1024, "application/exe"),
            FileMeta::new("c.gif", 10, "image/gif"),
            FileMeta::new("d.jpg", 11 * 1024 * 1024, "image/jpeg"),
            FileMeta::new("e.webp", 10, "image/webp"),
        ];

        let (valid, rejected) = partition(files, |f| f);

        let names: Vec<&str> = valid.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.png", "c.gif", "e.webp"]);
        assert_eq!(rejected.len(), 2);
        assert_eq!(rejected[0].file_name(), "b.exe");
        assert_eq!(rejected[1].kind(), ErrorKind::TooLarge);
    }
}
