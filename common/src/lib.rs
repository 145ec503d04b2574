//! Image Gallery Common Library
//!
//! アップロード処理とストアで共有される型とユーティリティ

pub mod types;
pub mod error;
pub mod validator;
pub mod data_uri;
pub mod search;

pub use types::{FileMeta, ImageRecord, display_name};
pub use error::{Error, ErrorKind, Result, ValidationError};
pub use validator::{validate, partition, ACCEPTED_MIME_TYPES, MAX_FILE_SIZE};
pub use data_uri::{build_data_uri, parse_data_uri, decode_data_uri, DataUri};
pub use search::search;
