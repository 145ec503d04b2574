//! バッチアップロード
//!
//! 1. 検証で有効/無効に分割（全件無効ならバッチ失敗）
//! 2. 有効なファイルを入力順に1件ずつエンコード
//! 3. 1件ごとに進捗（完了数 / 有効件数）を通知
//! 4. 完了後にまとめてギャラリーへ追加（保存は1回）

use crate::encoder;
use crate::error::{GalleryError, Result};
use crate::scanner::UploadFile;
use crate::store::{GalleryStore, Storage};
use image_gallery_common::{partition, ErrorKind, ImageRecord, ValidationError};
use std::time::Duration;
use tracing::{info, warn};

/// ファイル間の既定の待機時間（進捗表示用）
pub const DEFAULT_UPLOAD_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub struct UploadOptions {
    /// ファイル間の待機（最後のファイルの後には入らない）
    pub delay: Duration,
}

impl Default for UploadOptions {
    fn default() -> Self {
        Self {
            delay: DEFAULT_UPLOAD_DELAY,
        }
    }
}

/// 進捗状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Progress {
    #[default]
    Idle,
    Running { completed: usize, total: usize },
}

impl Progress {
    /// 0〜100 のパーセント値（Idle は 0）
    pub fn percent(&self) -> f64 {
        match *self {
            Progress::Idle => 0.0,
            Progress::Running { total: 0, .. } => 0.0,
            Progress::Running { completed, total } => completed as f64 / total as f64 * 100.0,
        }
    }
}

/// ファイル単位の失敗
#[derive(Debug, Clone, PartialEq)]
pub struct FileFailure {
    pub file_name: String,
    pub kind: ErrorKind,
    pub reason: String,
}

impl From<&ValidationError> for FileFailure {
    fn from(e: &ValidationError) -> Self {
        Self {
            file_name: e.file_name().to_string(),
            kind: e.kind(),
            reason: e.to_string(),
        }
    }
}

/// バッチの結果
#[derive(Debug, Clone, Default)]
pub struct UploadReport {
    pub added: Vec<ImageRecord>,
    pub failures: Vec<FileFailure>,
}

impl UploadReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct BatchUploader {
    options: UploadOptions,
    progress: Progress,
}

impl BatchUploader {
    pub fn new(options: UploadOptions) -> Self {
        Self {
            options,
            progress: Progress::Idle,
        }
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// バッチを処理してギャラリーへ追加
    ///
    /// `on_progress` には各ファイル完了後のパーセント値が渡される。
    /// ファイル単位の失敗は UploadReport に集約し、バッチは継続する。
    pub async fn upload<S, F>(
        &mut self,
        gallery: &mut GalleryStore<S>,
        files: Vec<UploadFile>,
        mut on_progress: F,
    ) -> Result<UploadReport>
    where
        S: Storage,
        F: FnMut(f64),
    {
        let submitted = files.len();
        let (valid, rejected) = partition(files, |f| &f.meta);

        for e in &rejected {
            warn!(kind = %e.kind(), file = e.file_name(), reason = %e, "ファイルを除外");
        }

        if valid.is_empty() {
            warn!(kind = %ErrorKind::NoValidFiles, submitted, "有効なファイルがありません");
            return Err(GalleryError::NoValidFiles { rejected });
        }

        let mut report = UploadReport {
            added: Vec::with_capacity(valid.len()),
            failures: rejected.iter().map(FileFailure::from).collect(),
        };

        let total = valid.len();
        info!(submitted, valid = total, "アップロード開始");
        self.progress = Progress::Running { completed: 0, total };

        for (idx, file) in valid.iter().enumerate() {
            match encoder::encode_record(file).await {
                Ok(record) => report.added.push(record),
                Err(e) => {
                    warn!(kind = %ErrorKind::EncodeFailure, file = file.name(), error = %e, "エンコード失敗、スキップ");
                    report.failures.push(FileFailure {
                        file_name: file.name().to_string(),
                        kind: ErrorKind::EncodeFailure,
                        reason: e.to_string(),
                    });
                }
            }

            self.progress = Progress::Running { completed: idx + 1, total };
            on_progress(self.progress.percent());

            if idx + 1 < total && !self.options.delay.is_zero() {
                tokio::time::sleep(self.options.delay).await;
            }
        }

        gallery.append(report.added.clone());
        self.progress = Progress::Idle;

        info!(
            added = report.added.len(),
            failed = report.failures.len(),
            "アップロード完了"
        );

        Ok(report)
    }
}
