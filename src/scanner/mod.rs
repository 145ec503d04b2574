//! アップロード対象ファイルの収集
//!
//! コマンドラインで渡されたパスから UploadFile を組み立てる。
//! フォルダは直下の画像ファイルのみを対象にする。

use crate::error::{GalleryError, Result};
use image_gallery_common::FileMeta;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 拡張子とMIMEタイプの対応
const MIME_BY_EXTENSION: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
];

const UNKNOWN_MIME_TYPE: &str = "application/octet-stream";

/// ファイル内容の読み出し元
#[derive(Debug, Clone)]
pub enum FileSource {
    Path(PathBuf),
    Memory(Vec<u8>),
}

/// アップロード1件分（記述子 + 内容）
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub meta: FileMeta,
    pub source: FileSource,
}

impl UploadFile {
    /// メモリ上のバイト列から作成（サイズはバイト長）
    pub fn from_bytes(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            meta: FileMeta::new(name, bytes.len() as u64, mime_type),
            source: FileSource::Memory(bytes),
        }
    }

    /// ファイルパスから作成（サイズはメタデータ、MIMEは拡張子から判定）
    ///
    /// 読めないパスもそのまま返す。サイズは 0 とし、読み込み失敗は
    /// エンコード時にファイル単位の失敗として扱われる。
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        let size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);

        Self {
            meta: FileMeta::new(name, size, mime_type_for_path(path)),
            source: FileSource::Path(path.to_path_buf()),
        }
    }

    /// 内容を読み出せる見込みがあるか（パスの場合は通常ファイルが存在するか）
    pub fn is_readable(&self) -> bool {
        match &self.source {
            FileSource::Path(path) => path.is_file(),
            FileSource::Memory(_) => true,
        }
    }

    pub fn name(&self) -> &str {
        &self.meta.name
    }
}

/// 拡張子からMIMEタイプを判定（不明な場合は application/octet-stream）
pub fn mime_type_for_path(path: &Path) -> &'static str {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .and_then(|ext| {
            MIME_BY_EXTENSION
                .iter()
                .find(|(e, _)| *e == ext)
                .map(|(_, mime)| *mime)
        })
        .unwrap_or(UNKNOWN_MIME_TYPE)
}

/// フォルダ直下のファイルをファイル名順で列挙
///
/// 拡張子では絞り込まず、画像以外も検証で拒否させる。
pub fn scan_folder(folder: &Path) -> Result<Vec<UploadFile>> {
    if !folder.is_dir() {
        return Err(GalleryError::FileNotFound(folder.display().to_string()));
    }

    let mut paths: Vec<PathBuf> = WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.is_file())
        .collect();

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(paths.iter().map(|p| UploadFile::from_path(p)).collect())
}

/// 引数のパス群を入力順に展開
///
/// ファイルは拡張子や存在に関わらずそのまま渡し、検証・エンコードで拒否させる。
pub fn collect_files(paths: &[PathBuf]) -> Result<Vec<UploadFile>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            files.extend(scan_folder(path)?);
        } else {
            files.push(UploadFile::from_path(path));
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_mime_type_for_path() {
        assert_eq!(mime_type_for_path(Path::new("a.jpg")), "image/jpeg");
        assert_eq!(mime_type_for_path(Path::new("a.JPEG")), "image/jpeg");
        assert_eq!(mime_type_for_path(Path::new("a.png")), "image/png");
        assert_eq!(mime_type_for_path(Path::new("a.gif")), "image/gif");
        assert_eq!(mime_type_for_path(Path::new("a.webp")), "image/webp");
        assert_eq!(mime_type_for_path(Path::new("a.exe")), "application/octet-stream");
        assert_eq!(mime_type_for_path(Path::new("noext")), "application/octet-stream");
    }

    #[test]
    fn test_from_path_reads_size() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("photo.png");
        fs::write(&path, b"12345").unwrap();

        let file = UploadFile::from_path(&path);
        assert!(file.is_readable());
        assert_eq!(file.name(), "photo.png");
        assert_eq!(file.meta.size, 5);
        assert_eq!(file.meta.mime_type, "image/png");
    }

    #[test]
    fn test_from_path_missing_file_kept() {
        let file = UploadFile::from_path(Path::new("/nonexistent/12345.png"));
        assert!(!file.is_readable());
        assert_eq!(file.name(), "12345.png");
        assert_eq!(file.meta.size, 0);
        assert_eq!(file.meta.mime_type, "image/png");
    }

    #[test]
    fn test_scan_folder_not_found() {
        let err = scan_folder(Path::new("/nonexistent/folder")).unwrap_err();
        assert!(matches!(err, GalleryError::FileNotFound(_)));
    }

    #[test]
    fn test_scan_folder_sorted_all_files() {
        let dir = tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("c.jpg"), b"c").unwrap();
        fs::write(dir.path().join("a.png"), b"a").unwrap();
        fs::write(dir.path().join("b.gif"), b"b").unwrap();
        fs::write(dir.path().join("readme.txt"), b"text").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("d.jpg"), b"d").unwrap();

        let files = scan_folder(dir.path()).unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.name()).collect();
        // サブフォルダは対象外、画像以外も検証に回す
        assert_eq!(names, vec!["a.png", "b.gif", "c.jpg", "readme.txt"]);
        assert_eq!(files[3].meta.mime_type, "application/octet-stream");
    }

    #[test]
    fn test_collect_files_keeps_argument_order() {
        let dir = tempdir().expect("Failed to create temp dir");
        let z = dir.path().join("z.png");
        let exe = dir.path().join("b.exe");
        fs::write(&z, b"z").unwrap();
        fs::write(&exe, b"MZ").unwrap();

        let files = collect_files(&[z, exe]).unwrap();
        assert_eq!(files[0].name(), "z.png");
        assert_eq!(files[1].name(), "b.exe");
        assert_eq!(files[1].meta.mime_type, "application/octet-stream");
    }

    #[test]
    fn test_collect_files_keeps_missing_path() {
        let dir = tempdir().expect("Failed to create temp dir");
        let good = dir.path().join("good.png");
        let missing = dir.path().join("missing.png");
        fs::write(&good, b"png").unwrap();

        let files = collect_files(&[good, missing]).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].is_readable());
        assert!(!files[1].is_readable());
        assert_eq!(files[1].name(), "missing.png");
    }
}
