//! Image Gallery
//!
//! 画像ファイルを検証してData URIにエンコードし、キー・バリュー型ストレージに
//! 永続化するギャラリー。

pub mod cli;
pub mod config;
pub mod encoder;
pub mod error;
pub mod logging;
pub mod scanner;
pub mod store;
pub mod uploader;

pub use error::{GalleryError, Result};
pub use store::{FileStorage, GalleryStore, MemoryStorage, Storage};
pub use uploader::{BatchUploader, FileFailure, Progress, UploadOptions, UploadReport};
