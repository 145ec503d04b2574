//! ギャラリーストア
//!
//! 画像レコードの順序付きリストを保持し、変更のたびにストレージへ書き出す。
//! ストレージの読み書き失敗は呼び出し元へ伝播させず、ログに残してメモリ上の
//! 状態を正とする。

pub mod storage;

pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};

use image_gallery_common::{search, ErrorKind, ImageRecord};
use tracing::{debug, warn};

/// ギャラリーの保存キー
pub const GALLERY_KEY: &str = "gallery-images";

/// テーマ設定の保存キー（予約のみ）
pub const THEME_KEY: &str = "theme-preference";

pub struct GalleryStore<S: Storage> {
    storage: S,
    records: Vec<ImageRecord>,
    persisted: bool,
}

impl<S: Storage> GalleryStore<S> {
    /// ストレージから読み込み。失敗時は空のギャラリーで開始する
    pub fn load(storage: S) -> Self {
        let records = match storage.get(GALLERY_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<Vec<ImageRecord>>(&json) {
                Ok(records) => records,
                Err(e) => {
                    warn!(kind = %ErrorKind::StorageReadFailure, error = %e, "保存データの解析に失敗、空のギャラリーで開始");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(kind = %ErrorKind::StorageReadFailure, error = %e, "ストレージ読み込みに失敗、空のギャラリーで開始");
                Vec::new()
            }
        };

        debug!(count = records.len(), "ギャラリー読み込み完了");

        Self {
            storage,
            records,
            persisted: true,
        }
    }

    /// 全件を書き出す。書き込めた場合は true
    pub fn save(&mut self) -> bool {
        let result = serde_json::to_string(&self.records)
            .map_err(|e| e.to_string())
            .and_then(|json| {
                self.storage
                    .set(GALLERY_KEY, &json)
                    .map_err(|e| e.to_string())
            });

        self.persisted = match result {
            Ok(()) => true,
            Err(e) => {
                warn!(kind = %ErrorKind::StorageWriteFailure, error = %e, count = self.records.len(), "ギャラリーの保存に失敗（メモリ上の状態を維持）");
                false
            }
        };
        self.persisted
    }

    /// 直近の保存が成功したか
    pub fn is_persisted(&self) -> bool {
        self.persisted
    }

    /// まとめて追加して1回だけ保存（空なら何もしない）
    pub fn append(&mut self, records: Vec<ImageRecord>) {
        if records.is_empty() {
            return;
        }
        self.records.extend(records);
        self.save();
    }

    /// IDで削除。該当なしなら何もせず false
    pub fn delete(&mut self, id: &str) -> bool {
        let Some(pos) = self.records.iter().position(|r| r.id == id) else {
            return false;
        };
        self.records.remove(pos);
        self.save();
        true
    }

    /// 全件削除。削除件数を返す
    pub fn clear(&mut self) -> usize {
        let count = self.records.len();
        self.records.clear();
        self.save();
        count
    }

    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&ImageRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn search(&self, query: &str) -> Vec<&ImageRecord> {
        search(&self.records, query)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 元ファイルサイズの合計
    pub fn total_size(&self) -> u64 {
        self.records.iter().map(|r| r.size_bytes).sum()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
