use crate::error::{GalleryError, Result};
use crate::uploader::UploadOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// ストレージディレクトリを上書きする環境変数
pub const STORAGE_DIR_ENV: &str = "IMAGE_GALLERY_DIR";

const DEFAULT_QUOTA_BYTES: u64 = 50 * 1024 * 1024;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage_dir: Option<PathBuf>,
    pub quota_bytes: Option<u64>,
    pub upload_delay_ms: u64,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_dir: None,
            quota_bytes: Some(DEFAULT_QUOTA_BYTES),
            upload_delay_ms: 100,
            log_level: "info".into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| GalleryError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("image-gallery").join("config.json"))
    }

    /// ストレージディレクトリ（環境変数 > 設定ファイル > 既定値）
    pub fn resolve_storage_dir(&self) -> Result<PathBuf> {
        if let Ok(dir) = std::env::var(STORAGE_DIR_ENV) {
            if !dir.is_empty() {
                return Ok(PathBuf::from(dir));
            }
        }

        if let Some(dir) = &self.storage_dir {
            return Ok(dir.clone());
        }

        let data = dirs::data_dir()
            .ok_or_else(|| GalleryError::Config("データディレクトリが見つかりません".into()))?;
        Ok(data.join("image-gallery"))
    }

    pub fn upload_options(&self) -> UploadOptions {
        UploadOptions {
            delay: Duration::from_millis(self.upload_delay_ms),
        }
    }
}
